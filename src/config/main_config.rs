use log::{debug, info, warn};
use serde::Serialize;
use std::io::{IsTerminal, Write};
use tabled::Tabled;

use crate::{
    cli::Cmd,
    common::{
        decide, images, render_table, resolve, CommandLine, Decision,
        DesktopNotifier, Note, Notify,
    },
    config::config_file::ConfigFile,
    error::Result,
};

/// Settings from the config file plus whether stdout is a terminal,
/// the state behind running a command and listing images
#[derive(Default, Debug)]
pub struct Config {
    /// Notification defaults from the config file
    config: ConfigFile,
    /// Whether or not stdout is a terminal
    pub terminal_output: bool,
}

impl Config {
    /// Load the config file and inspect stdout
    #[mutants::skip] // Cannot test directly, depends on system state
    pub fn new() -> Self {
        Self::with_loaded(ConfigFile::load(), std::io::stdout().is_terminal())
    }

    /// A config file that failed to load is reported and replaced by the defaults
    fn with_loaded(loaded: Result<ConfigFile>, terminal_output: bool) -> Self {
        let config = loaded.unwrap_or_else(|e| {
            warn!("could not load config file, using defaults: {e}");
            ConfigFile::default()
        });

        Self {
            config,
            terminal_output,
        }
    }

    /// Notifier for the desktop's notification service
    pub fn notifier(&self) -> DesktopNotifier {
        DesktopNotifier::new(&self.config)
    }

    /// Run the given command, if any, then notify about it unless it was quick enough.
    /// Returns the exit code to finish with.
    pub fn run<N: Notify + ?Sized>(
        &self,
        cmd: &Cmd,
        notifier: &mut N,
    ) -> Result<i32> {
        // Resolve before anything runs so that a typo never runs the command
        let icon = resolve(cmd.image.as_deref())?;
        if let Some(icon) = &icon {
            debug!("using icon {icon}");
        }

        let command = CommandLine::from(cmd.command.clone());
        let execution = if command.is_empty() {
            None
        } else {
            Some(command.run()?)
        };
        let code = execution.map_or(0, |e| e.code);

        match decide(
            cmd.subtitle.as_deref(),
            cmd.message.as_deref(),
            &command,
            execution.as_ref(),
            self.config.after(cmd.after),
        ) {
            Decision::Suppress => {
                info!("'{command}' finished within the threshold, not notifying")
            }
            Decision::Deliver { subtitle, message } => notifier.notify(&Note {
                title: cmd.title.clone(),
                subtitle,
                message,
                icon,
            })?,
        }

        Ok(code)
    }

    /// Print the available images and their icons in a table
    pub fn print_images<W: Write>(
        &self,
        writer: &mut W,
        output_json: bool,
    ) -> Result<()> {
        let rows = images()
            .map(|(name, icon)| {
                Ok(ImageEntry {
                    name: name.to_owned(),
                    icon: icon.freedesktop_name()?.to_owned(),
                    constant: icon.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if output_json {
            writeln!(writer, "{}", serde_json::to_string(&rows)?)?
        } else {
            writeln!(writer, "{}", render_table(&rows, self.terminal_output))?
        }

        Ok(())
    }
}

/// Internal helper struct for turning the image table into tabular data
#[derive(PartialEq, Eq, Tabled, Serialize)]
struct ImageEntry {
    name: String,
    constant: String,
    icon: String,
}
