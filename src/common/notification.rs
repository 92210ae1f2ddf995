use crate::{common::PlatformIcon, config::ConfigFile, error::Result};
use log::debug;
use notify_rust::{Notification, Timeout};

/// A notification ready to be delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub subtitle: Option<String>,
    pub message: Option<String>,
    pub icon: Option<PlatformIcon>,
}

impl Note {
    /// Text for the notification body
    ///
    /// Only macOS has a subtitle field, elsewhere the subtitle becomes the first line of the body.
    fn body(&self) -> Option<String> {
        if cfg!(target_os = "macos") {
            return self.message.clone();
        }

        match (&self.subtitle, &self.message) {
            (Some(subtitle), Some(message)) => {
                Some(format!("{subtitle}\n{message}"))
            }
            (subtitle, message) => subtitle.clone().or_else(|| message.clone()),
        }
    }
}

/// Something that can deliver notifications
pub trait Notify {
    /// Deliver a notification without waiting for the user to see it
    fn notify(&mut self, note: &Note) -> Result<()>;
}

/// Delivers notifications through the desktop's notification service
#[derive(Debug)]
pub struct DesktopNotifier {
    appname: String,
    timeout: Option<u32>,
    bundle_id: Option<String>,
    /// Whether the platform side has been prepared
    connected: bool,
}

impl DesktopNotifier {
    /// Create a notifier, deferring any platform setup until the first notification
    pub fn new(config: &ConfigFile) -> Self {
        Self {
            appname: config.appname.clone(),
            timeout: config.timeout,
            bundle_id: config.bundle_id.clone(),
            connected: false,
        }
    }

    /// One-time platform setup
    #[mutants::skip] // Cannot test directly, alters system state
    fn connect(&self) -> Result<()> {
        debug!(
            "connecting to notification service as {}",
            self.bundle_id.as_deref().unwrap_or(&self.appname)
        );

        #[cfg(target_os = "macos")]
        if let Some(bundle_id) = &self.bundle_id {
            notify_rust::set_application(bundle_id)
                .map_err(|e| crate::error::Error::Platform(e.to_string()))?;
        }

        Ok(())
    }

    /// Build the platform notification for a note
    fn build(&self, note: &Note) -> Result<Notification> {
        let mut notification = Notification::new();
        notification.appname(&self.appname).summary(&note.title);

        #[cfg(target_os = "macos")]
        if let Some(subtitle) = &note.subtitle {
            notification.subtitle(subtitle);
        }
        if let Some(body) = note.body() {
            notification.body(&body);
        }
        if let Some(icon) = &note.icon {
            notification.icon(icon.freedesktop_name()?);
        }
        if let Some(timeout) = self.timeout {
            notification.timeout(Timeout::Milliseconds(timeout));
        }

        Ok(notification)
    }
}

impl Notify for DesktopNotifier {
    #[mutants::skip] // Cannot test directly, shows a notification
    fn notify(&mut self, note: &Note) -> Result<()> {
        if !self.connected {
            self.connect()?;
            self.connected = true;
        }
        let notification = self.build(note)?;
        debug!("delivering {note:?}");
        notification.show()?;
        Ok(())
    }
}
