//! CLI argument definitions using Clap

use std::str::FromStr;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::notification::{NotificationKind, Urgency};
use crate::domain::progress::ProgressMode;
use crate::domain::protocol::ProtocolVariant;
use crate::infrastructure::terminal::OutputTarget;

/// termnotify - desktop notifications through terminal escape sequences
#[derive(Parser, Debug)]
#[command(name = "termnotify")]
#[command(version)]
#[command(about = "Send desktop notifications via terminal OSC escape sequences")]
#[command(long_about = None)]
pub struct Cli {
    /// Force a protocol instead of detecting one (osc9, osc777, osc99, none)
    #[arg(short = 'p', long, value_name = "PROTOCOL", global = true)]
    pub protocol: Option<ProtocolVariant>,

    /// Never fall back to the system notifier
    #[arg(long, global = true)]
    pub no_fallback: bool,

    /// Notification urgency (low, normal, critical)
    #[arg(short = 'u', long, value_name = "URGENCY", global = true)]
    pub urgency: Option<Urgency>,

    /// Where escape sequences are written (tty, stdout, stderr)
    #[arg(long, value_name = "OUTPUT", global = true)]
    pub output: Option<OutputTarget>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a notification
    Send(SendArgs),
    /// Show terminal detection info without sending
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Diagnose notification capabilities and run interactive tests
    Diagnose {
        /// Skip tests that require user confirmation
        #[arg(long)]
        skip_interactive: bool,
    },
    /// Report progress in the tab or taskbar
    Progress {
        /// Percentage (0-100), "clear" or "indeterminate"
        value: ProgressTarget,

        /// Progress state for percentages
        #[arg(long, value_name = "STATE", default_value = "normal")]
        state: ProgressMode,
    },
    /// Ring the terminal bell
    Bell,
    /// Close a notification sent with --id
    Close {
        /// Notification id
        id: String,
    },
    /// Print a clickable hyperlink
    Link {
        url: String,
        /// Link text (defaults to the URL)
        text: Option<String>,
        /// Groups link segments for hover highlighting
        #[arg(long)]
        id: Option<String>,
    },
    /// Ask the terminal for attention (iTerm2)
    Attention {
        /// Show fireworks at the cursor
        #[arg(long)]
        fireworks: bool,
        /// Bring the terminal window to the front
        #[arg(long)]
        steal_focus: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `send`
#[derive(Args, Debug, Default)]
pub struct SendArgs {
    /// The notification message
    pub message: Option<String>,

    /// Notification title
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Notification id, used by `close` (kitty only)
    #[arg(long)]
    pub id: Option<String>,

    /// Semantic kind (success, error, warning, info) setting the default
    /// title and urgency
    #[arg(short = 'k', long, value_name = "KIND", conflicts_with = "exit_code")]
    pub kind: Option<NotificationKind>,

    /// Exit code of the previous command (0 = success)
    #[arg(short = 'e', long, value_name = "CODE", allow_negative_numbers = true)]
    pub exit_code: Option<i32>,

    /// Message for exit code 0
    #[arg(long, value_name = "MESSAGE")]
    pub success_message: Option<String>,

    /// Message for non-zero exit codes
    #[arg(long, value_name = "MESSAGE")]
    pub failure_message: Option<String>,

    /// Title for exit code 0
    #[arg(long, value_name = "TITLE")]
    pub success_title: Option<String>,

    /// Title for non-zero exit codes
    #[arg(long, value_name = "TITLE")]
    pub failure_title: Option<String>,

    /// Always use the system notifier
    #[arg(long, conflicts_with = "any")]
    pub external: bool,

    /// Fall back to the system notifier if the terminal write fails
    #[arg(long)]
    pub any: bool,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Positional argument of `progress`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTarget {
    Value(u32),
    Clear,
    Indeterminate,
}

impl FromStr for ProgressTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clear" => Ok(Self::Clear),
            "indeterminate" => Ok(Self::Indeterminate),
            other => other.parse::<u32>().map(Self::Value).map_err(|_| {
                format!(
                    "Invalid progress: \"{}\". Use 0-100, clear or indeterminate",
                    s
                )
            }),
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "default_title",
    "force_protocol",
    "enable_fallback",
    "default_urgency",
    "app_name",
    "output",
    "titles.success",
    "titles.failure",
    "titles.error",
    "titles.warning",
    "titles.info",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_send_message() {
        let cli = Cli::parse_from(["termnotify", "send", "done", "-t", "Build"]);
        match cli.command {
            Commands::Send(args) => {
                assert_eq!(args.message, Some("done".to_string()));
                assert_eq!(args.title, Some("Build".to_string()));
                assert!(args.exit_code.is_none());
            }
            other => panic!("Expected Send, got {:?}", other),
        }
        assert!(cli.protocol.is_none());
        assert!(!cli.no_fallback);
    }

    #[test]
    fn cli_parses_send_kind() {
        let cli = Cli::parse_from(["termnotify", "send", "broke", "--kind", "error"]);
        match cli.command {
            Commands::Send(args) => assert_eq!(args.kind, Some(NotificationKind::Error)),
            other => panic!("Expected Send, got {:?}", other),
        }

        assert!(Cli::try_parse_from(["termnotify", "send", "x", "-k", "fatal"]).is_err());
        assert!(Cli::try_parse_from(["termnotify", "send", "-k", "info", "-e", "1"]).is_err());
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "termnotify",
            "send",
            "done",
            "--protocol",
            "osc777",
            "-u",
            "critical",
            "--no-fallback",
            "--output",
            "stdout",
        ]);
        assert_eq!(cli.protocol, Some(ProtocolVariant::Osc777));
        assert_eq!(cli.urgency, Some(Urgency::Critical));
        assert_eq!(cli.output, Some(OutputTarget::Stdout));
        assert!(cli.no_fallback);
    }

    #[test]
    fn cli_rejects_unknown_protocol() {
        let result = Cli::try_parse_from(["termnotify", "--protocol", "osc1", "bell"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_exit_code_mode() {
        let cli = Cli::parse_from(["termnotify", "send", "-e", "-1", "--failure-title", "CI"]);
        if let Commands::Send(args) = cli.command {
            assert_eq!(args.exit_code, Some(-1));
            assert_eq!(args.failure_title, Some("CI".to_string()));
            assert!(args.message.is_none());
        } else {
            panic!("Expected Send command");
        }
    }

    #[test]
    fn cli_external_conflicts_with_any() {
        let result = Cli::try_parse_from(["termnotify", "send", "x", "--external", "--any"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_progress() {
        let cli = Cli::parse_from(["termnotify", "progress", "40", "--state", "error"]);
        match cli.command {
            Commands::Progress { value, state } => {
                assert_eq!(value, ProgressTarget::Value(40));
                assert_eq!(state, ProgressMode::Error);
            }
            other => panic!("Expected Progress, got {:?}", other),
        }
    }

    #[test]
    fn progress_target_words() {
        assert_eq!("clear".parse(), Ok(ProgressTarget::Clear));
        assert_eq!("Indeterminate".parse(), Ok(ProgressTarget::Indeterminate));
        assert!("half".parse::<ProgressTarget>().is_err());
    }

    #[test]
    fn cli_counts_verbosity() {
        let cli = Cli::parse_from(["termnotify", "-vv", "info"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["termnotify", "config", "set", "default_title", "CI"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "default_title");
            assert_eq!(value, "CI");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("force_protocol"));
        assert!(is_valid_config_key("titles.failure"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
