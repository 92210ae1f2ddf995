/// Custom error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] confy::ConfyError),
    #[error("invalid image name: '{0}'")]
    UnknownImage(String),
    #[error("no icon resource for '{0}' on this platform")]
    MissingIcon(String),
    #[error(transparent)]
    Notification(#[from] notify_rust::error::Error),
    #[error("could not set up the notification service: {0}")]
    Platform(String),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[cfg(test)]
    #[error(transparent)]
    FromUtf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
