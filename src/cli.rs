use crate::common::image_names;
use clap::Parser;
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use std::ffi::OsString;

/// Run a command and post a desktop notification when it finishes
///
/// The notification's subtitle defaults to the command line, and its message
/// defaults to "FAILED" when the command exits with a non-zero status.
/// The exit status of the command is passed through.
///
/// Flags may be written with a single dash, e.g. `notify -title Build -after 3 make`.
/// Everything from the first argument that is not a flag onwards is the command to run.
#[deny(missing_docs)]
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[clap(version, about)]
pub struct Cmd {
    /// Title of the notification
    #[clap(long, default_value = "Notification")]
    pub title: String,

    /// Subtitle of the notification, defaults to the command line
    #[clap(long)]
    pub subtitle: Option<String>,

    /// Informative text of the notification
    #[clap(long)]
    pub message: Option<String>,

    /// Only notify if the command ran for longer than this many seconds, negative always notifies
    #[clap(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub after: Option<i64>,

    /// Name of the icon to show, see `--list-images`
    #[clap(long, value_name = "NAME", add = ArgValueCompleter::new(autocomplete_images))]
    pub image: Option<String>,

    /// List the available image names and exit
    #[clap(long, conflicts_with = "command")]
    pub list_images: bool,

    /// Output the image list as json
    #[clap(long, requires = "list_images")]
    pub json: bool,

    /// Command to run, followed by its arguments
    #[clap(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Flags that take a value and may be spelled with a single dash
const VALUE_FLAGS: [&str; 5] = ["title", "subtitle", "message", "after", "image"];

/// Rewrite single-dash value flags (`-title`) into the long form clap expects (`--title`)
///
/// Rewriting stops at `--` or at the first bare word, which starts the command,
/// so the command's own arguments are passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut expects_value = false;

    while let Some(arg) = args.next() {
        if expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }

        // Non-UTF-8 arguments cannot be flags
        let Some(s) = arg.to_str() else {
            normalized.push(arg);
            break;
        };

        if s == "--" || !s.starts_with('-') {
            normalized.push(arg);
            break;
        }

        let name = s.trim_start_matches('-');
        let (flag, inline_value) = match name.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (name, None),
        };

        if VALUE_FLAGS.contains(&flag) {
            normalized.push(match inline_value {
                Some(value) => format!("--{flag}={value}").into(),
                None => {
                    expects_value = true;
                    format!("--{flag}").into()
                }
            });
        } else {
            normalized.push(arg);
        }
    }

    normalized.extend(args);
    normalized
}

/// Generate candidates for image names
#[mutants::skip] // Only reachable through the shell completion engine
fn autocomplete_images(current: &std::ffi::OsStr) -> Vec<CompletionCandidate> {
    image_names()
        .filter(|name| name.starts_with(current.to_string_lossy().as_ref()))
        .map(CompletionCandidate::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    fn parse(args: &[&str]) -> Result<Cmd> {
        Ok(Cmd::try_parse_from(normalize_args(
            std::iter::once("notify").chain(args.iter().copied()),
        ))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?)
    }

    #[test]
    fn defaults() -> Result<()> {
        let cmd = parse(&[])?;
        similar_asserts::assert_eq!(
            cmd,
            Cmd {
                title: "Notification".to_string(),
                subtitle: None,
                message: None,
                after: None,
                image: None,
                list_images: false,
                json: false,
                command: vec![],
            }
        );
        Ok(())
    }

    #[test]
    fn single_dash_flags() -> Result<()> {
        let cmd = parse(&[
            "-title", "Build", "-subtitle", "make", "-message", "done",
            "-after", "3", "-image", "unlock", "sleep", "1",
        ])?;
        assert_eq!(cmd.title, "Build");
        assert_eq!(cmd.subtitle.as_deref(), Some("make"));
        assert_eq!(cmd.message.as_deref(), Some("done"));
        assert_eq!(cmd.after, Some(3));
        assert_eq!(cmd.image.as_deref(), Some("unlock"));
        assert_eq!(cmd.command, vec!["sleep", "1"]);
        Ok(())
    }

    #[test]
    fn double_dash_and_inline_values() -> Result<()> {
        let cmd = parse(&["--title", "A", "-message=hi there", "--after=5"])?;
        assert_eq!(cmd.title, "A");
        assert_eq!(cmd.message.as_deref(), Some("hi there"));
        assert_eq!(cmd.after, Some(5));
        assert!(cmd.command.is_empty());
        Ok(())
    }

    #[test]
    fn command_arguments_untouched() -> Result<()> {
        // `-title` after the command belongs to the command
        let cmd = parse(&["-after", "1", "ls", "-la", "-title", "x"])?;
        assert_eq!(cmd.title, "Notification");
        assert_eq!(cmd.command, vec!["ls", "-la", "-title", "x"]);

        let cmd = parse(&["-title", "T", "--", "-weird-program", "-image"])?;
        assert_eq!(cmd.title, "T");
        assert_eq!(cmd.image, None);
        assert_eq!(cmd.command, vec!["-weird-program", "-image"]);
        Ok(())
    }

    #[test]
    fn invalid_threshold() {
        assert!(parse(&["-after", "soon", "true"]).is_err());
        assert!(parse(&["-after", "1.5", "true"]).is_err());
    }

    #[test]
    fn negative_threshold() -> Result<()> {
        let cmd = parse(&["-after", "-1", "false"])?;
        assert_eq!(cmd.after, Some(-1));
        assert_eq!(cmd.command, vec!["false"]);

        assert_eq!(parse(&["--after=-5"])?.after, Some(-5));
        Ok(())
    }

    #[test]
    fn unknown_image_is_not_rejected_by_parser() -> Result<()> {
        let cmd = parse(&["-image", "bogus"])?;
        assert_eq!(cmd.image.as_deref(), Some("bogus"));
        Ok(())
    }

    #[test]
    fn list_images() -> Result<()> {
        let cmd = parse(&["--list-images", "--json"])?;
        assert!(cmd.list_images);
        assert!(cmd.json);
        assert!(parse(&["--json"]).is_err());
        assert!(parse(&["--list-images", "true"]).is_err());
        Ok(())
    }
}
