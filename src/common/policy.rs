use crate::common::{CommandLine, Execution};
use std::time::Duration;

/// Message used when the command failed and no message was given
pub const FAILED: &str = "FAILED";

/// What to do once the command (if any) has finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The command finished quickly enough that nobody needs to be told
    Suppress,
    /// Deliver a notification with these fields
    Deliver {
        subtitle: Option<String>,
        message: Option<String>,
    },
}

/// Apply the defaults and the suppression threshold
///
/// `execution` is `None` when no command was run, in which case subtitle
/// and message pass through as given. A negative `after` never suppresses.
pub fn decide(
    subtitle: Option<&str>,
    message: Option<&str>,
    command: &CommandLine,
    execution: Option<&Execution>,
    after: Option<i64>,
) -> Decision {
    let subtitle = non_empty(subtitle);
    let message = non_empty(message);

    let Some(execution) = execution else {
        return Decision::Deliver { subtitle, message };
    };

    // A command finishing exactly at the threshold is still suppressed
    let threshold = after.and_then(|secs| u64::try_from(secs).ok());
    if threshold.is_some_and(|secs| execution.elapsed <= Duration::from_secs(secs)) {
        return Decision::Suppress;
    }

    Decision::Deliver {
        subtitle: subtitle
            .or_else(|| Some(command.to_string()).filter(|s| !s.is_empty())),
        message: message.or_else(|| {
            (execution.code != 0).then(|| FAILED.to_owned())
        }),
    }
}

/// Treat empty strings as absent
fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn command(args: &[&str]) -> CommandLine {
        args.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into()
    }

    fn execution(code: i32, millis: u64) -> Execution {
        Execution {
            code,
            elapsed: Duration::from_millis(millis),
        }
    }

    fn deliver(subtitle: Option<&str>, message: Option<&str>) -> Decision {
        Decision::Deliver {
            subtitle: subtitle.map(str::to_owned),
            message: message.map(str::to_owned),
        }
    }

    #[test]
    fn no_command_passes_through() {
        let cmd = CommandLine::default();
        assert_eq!(decide(None, None, &cmd, None, None), deliver(None, None));
        assert_eq!(
            decide(Some("sub"), Some("msg"), &cmd, None, Some(5)),
            deliver(Some("sub"), Some("msg"))
        );
        // Nothing ran, so nothing can be suppressed
        assert_eq!(decide(None, None, &cmd, None, Some(0)), deliver(None, None));
    }

    #[test]
    fn subtitle_defaults_to_command_line() {
        let cmd = command(&["make", "-j", "8", "all targets"]);
        assert_eq!(
            decide(None, None, &cmd, Some(&execution(0, 10)), None),
            deliver(Some("make -j 8 all targets"), None)
        );
        assert_eq!(
            decide(Some(""), None, &cmd, Some(&execution(0, 10)), None),
            deliver(Some("make -j 8 all targets"), None)
        );
        assert_eq!(
            decide(Some("build"), None, &cmd, Some(&execution(0, 10)), None),
            deliver(Some("build"), None)
        );
    }

    #[test]
    fn failure_message() {
        let cmd = command(&["false"]);
        assert_eq!(
            decide(None, None, &cmd, Some(&execution(1, 10)), None),
            deliver(Some("false"), Some(FAILED))
        );
        assert_eq!(
            decide(None, Some(""), &cmd, Some(&execution(2, 10)), None),
            deliver(Some("false"), Some(FAILED))
        );
        assert_eq!(
            decide(None, Some("oops"), &cmd, Some(&execution(1, 10)), None),
            deliver(Some("false"), Some("oops"))
        );
    }

    #[test]
    fn empty_fields_are_dropped() {
        let cmd = CommandLine::default();
        assert_eq!(
            decide(Some(""), Some(""), &cmd, None, None),
            deliver(None, None)
        );
    }

    #[test]
    fn suppressed_below_threshold() {
        let cmd = command(&["sleep", "1"]);
        assert_eq!(
            decide(None, None, &cmd, Some(&execution(0, 1_000)), Some(3)),
            Decision::Suppress
        );
        // Failures are suppressed too, the exit code still tells
        assert_eq!(
            decide(None, None, &cmd, Some(&execution(1, 1_000)), Some(3)),
            Decision::Suppress
        );
    }

    #[test]
    fn threshold_is_inclusive() {
        let cmd = command(&["sleep", "3"]);
        assert_eq!(
            decide(None, None, &cmd, Some(&execution(0, 3_000)), Some(3)),
            Decision::Suppress
        );
        assert_eq!(
            decide(None, None, &cmd, Some(&execution(0, 3_001)), Some(3)),
            deliver(Some("sleep 3"), None)
        );
    }

    #[test]
    fn negative_threshold_always_delivers() {
        let cmd = command(&["false"]);
        assert_eq!(
            decide(None, None, &cmd, Some(&execution(1, 0)), Some(-1)),
            deliver(Some("false"), Some(FAILED))
        );
        assert_eq!(
            decide(None, None, &cmd, Some(&execution(0, 0)), Some(i64::MIN)),
            deliver(Some("false"), None)
        );
    }

    #[test]
    fn no_threshold_always_delivers() {
        let cmd = command(&["true"]);
        assert_eq!(
            decide(None, None, &cmd, Some(&execution(0, 0)), None),
            deliver(Some("true"), None)
        );
    }
}
