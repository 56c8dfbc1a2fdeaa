//! `diagnose` command handler
//!
//! Prints what was detected and, when run interactively, fires one of
//! each notification kind so the user can see what actually arrives.

use std::io::{self, BufRead, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use colored::*;

use crate::application::Notify;
use crate::domain::progress::ProgressMode;
use crate::domain::protocol::ProtocolVariant;
use crate::domain::terminal::TerminalIdentity;

use super::app::EXIT_SUCCESS;
use super::presenter::{format_detail, supported, yes_no, Presenter};

/// Time given to the desktop to show one notification
const NOTIFICATION_PAUSE: Duration = Duration::from_secs(3);
const STEP_PAUSE: Duration = Duration::from_secs(1);
const PROGRESS_STEP_PAUSE: Duration = Duration::from_millis(300);
const COUNTDOWN_SECS: u64 = 3;

const TROUBLESHOOTING_TIPS: &[&str] = &[
    "Check that your terminal supports OSC notifications",
    "Disable \"Do Not Disturb\" / \"Focus Mode\", or allow your terminal to notify in focus mode",
    "Verify the terminal has notification permissions in system settings",
    "If using tmux, ensure \"allow-passthrough on\" is set",
    "Try forcing a protocol: termnotify send test --protocol osc777",
];

/// Handle `diagnose`
pub fn handle_diagnose<D: Notify>(
    notifier: &mut D,
    skip_interactive: bool,
    presenter: &mut Presenter,
) -> u8 {
    presenter.section("termnotify diagnostics");
    presenter.blank();

    show_environment(notifier, presenter);
    presenter.blank();
    show_capabilities(notifier, presenter);
    presenter.blank();

    if skip_interactive {
        presenter.info("Skipping interactive tests (--skip-interactive)");
        return EXIT_SUCCESS;
    }

    if !io::stdin().is_terminal() {
        presenter.info("stdin is not a terminal, skipping interactive tests");
        return EXIT_SUCCESS;
    }

    if confirm("Run interactive notification tests?") {
        run_interactive_tests(notifier, presenter);
    }

    EXIT_SUCCESS
}

fn show_environment<D: Notify>(notifier: &D, presenter: &Presenter) {
    let detection = notifier.detection();
    let env = &detection.env;

    presenter.section("Environment");
    presenter.detail("Terminal", &describe_terminal(detection.terminal));
    presenter.detail("Protocol", &describe_protocol(notifier.get_protocol()));
    for (name, value) in [
        ("TERM", &env.term),
        ("TERM_PROGRAM", &env.term_program),
        ("COLORTERM", &env.colorterm),
    ] {
        presenter.detail(name, value.as_deref().unwrap_or("not set"));
    }

    presenter.blank();
    presenter.section("Multiplexer Detection");
    let tmux = match &detection.multiplexer.tmux {
        Some(token) => format!("{} (TMUX={}...)", yes_no(true), truncate(token, 30)),
        None => yes_no(false),
    };
    let screen = match &detection.multiplexer.screen {
        Some(token) => format!("{} (STY={})", yes_no(true), token),
        None => yes_no(false),
    };
    presenter.detail("tmux", &tmux);
    presenter.detail("GNU Screen", &screen);

    if notifier.in_tmux() {
        presenter.blank();
        presenter.warn("tmux detected. For notifications to work:");
        presenter.line(&format!(
            "Add to ~/.tmux.conf: {}",
            "set -g allow-passthrough on".green()
        ));
        presenter.line(&format!(
            "Then reload: {}",
            "tmux source-file ~/.tmux.conf".green()
        ));
    }
}

fn show_capabilities<D: Notify>(notifier: &D, presenter: &Presenter) {
    let caps = notifier.capabilities();

    presenter.section("Capabilities");
    presenter.detail("Desktop Notifications", &supported(notifier.can_notify()));
    let titles = if caps.supports_title {
        supported(true)
    } else {
        format!("{} (message only)", supported(false))
    };
    presenter.detail("Notification Titles", &titles);
    presenter.detail("Urgency Levels", &supported(caps.supports_urgency));
    presenter.detail("Notification IDs", &supported(caps.supports_id));
    presenter.detail("Progress Bars", &supported(caps.supports_progress));
    let fallback = if notifier.can_fallback() {
        "Available".green().to_string()
    } else {
        "Not Available".dimmed().to_string()
    };
    presenter.detail("External Fallback", &fallback);
}

fn run_interactive_tests<D: Notify>(notifier: &mut D, presenter: &mut Presenter) {
    presenter.blank();
    presenter.section("Interactive Tests");
    presenter.line(
        &"Click away from this terminal window to see notifications."
            .yellow()
            .to_string(),
    );
    presenter.blank();

    countdown(presenter);

    let deliverable = notifier.can_notify() || notifier.can_fallback();

    if deliverable {
        test_basic_notification(notifier, presenter);
    } else {
        presenter.warn("Skipping notification test - not supported");
    }

    if notifier.supports_progress() {
        test_progress_bar(notifier, presenter);
    } else {
        presenter.line("Skipping progress bar test - not supported in this terminal");
    }

    if deliverable {
        test_semantic_notifications(notifier, presenter, NOTIFICATION_PAUSE);
    }

    if notifier.can_fallback() {
        test_fallback(notifier, presenter);
    } else {
        presenter.blank();
        presenter.line("Skipping fallback test - no external notifier available");
    }

    presenter.blank();
    presenter.warn("Troubleshooting tips:");
    for (i, tip) in TROUBLESHOOTING_TIPS.iter().enumerate() {
        presenter.line(&format!("{}. {}", i + 1, tip));
    }
    presenter.blank();
    presenter.success("Diagnostics complete!");
}

fn test_basic_notification<D: Notify>(notifier: &mut D, presenter: &Presenter) {
    presenter.line("Sending basic notification...");
    let sent = notifier.send(
        "This is a test notification from termnotify diagnose",
        Some("Notify Test"),
        None,
        None,
    );
    presenter.detail("Basic Notification", &sent_or_failed(sent));
    thread::sleep(NOTIFICATION_PAUSE);
}

fn test_progress_bar<D: Notify>(notifier: &mut D, presenter: &mut Presenter) {
    presenter.blank();
    presenter.line("Testing progress bar (watch the terminal tab/taskbar)...");
    thread::sleep(STEP_PAUSE);

    presenter.line("Indeterminate progress...");
    notifier.progress_indeterminate();
    thread::sleep(STEP_PAUSE);

    presenter.start_progress("Progress");
    for value in (0..=100).step_by(20) {
        notifier.progress(value, ProgressMode::Normal);
        presenter.set_progress(u64::from(value));
        thread::sleep(PROGRESS_STEP_PAUSE);
    }
    presenter.stop_spinner();

    presenter.line("Error state (red)...");
    notifier.progress_error(100);
    thread::sleep(STEP_PAUSE);

    presenter.line("Paused state (yellow)...");
    notifier.progress_paused(50);
    thread::sleep(STEP_PAUSE);

    notifier.progress_clear();
    presenter.detail("Progress Bar", &"Complete".green().to_string());
    thread::sleep(STEP_PAUSE);
}

/// Send one success, info and error notification, waiting `pause` after each
fn test_semantic_notifications<D: Notify>(
    notifier: &mut D,
    presenter: &Presenter,
    pause: Duration,
) -> bool {
    presenter.blank();
    presenter.line("Testing semantic notifications...");

    presenter.line("Success notification...");
    let success = notifier.success("This is a success message", None);
    thread::sleep(pause);

    presenter.line("Info notification (low urgency)...");
    let info = notifier.info("This is a low priority message", None);
    thread::sleep(pause);

    presenter.line("Error notification (critical urgency)...");
    let error = notifier.error("This is an error message", None);
    thread::sleep(pause);

    let sent = success && info && error;
    presenter.detail("Semantic Notifications", &sent_or_failed(sent));
    sent
}

fn test_fallback<D: Notify>(notifier: &mut D, presenter: &Presenter) {
    presenter.blank();
    presenter.line("Testing external fallback (system notifications)...");
    thread::sleep(STEP_PAUSE);

    let sent = notifier.send_external(
        "This notification was sent via external fallback",
        Some("Fallback Test"),
        None,
    );
    presenter.detail("External Fallback", &sent_or_failed(sent));
    thread::sleep(NOTIFICATION_PAUSE);
}

fn countdown(presenter: &mut Presenter) {
    presenter.start_spinner("");
    for remaining in (1..=COUNTDOWN_SECS).rev() {
        presenter.update_spinner(&format!("{}...", remaining));
        thread::sleep(Duration::from_secs(1));
    }
    presenter.stop_spinner();
}

/// Ask a yes/no question on stdin, defaulting to yes
fn confirm(prompt: &str) -> bool {
    print!("{} {} ", prompt, "[Y/n]".dimmed());
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    is_yes(&answer)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

fn sent_or_failed(sent: bool) -> String {
    if sent {
        "Sent".green().to_string()
    } else {
        "Failed".red().to_string()
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Terminal name with what it can do
pub fn describe_terminal(terminal: TerminalIdentity) -> String {
    let note = match terminal {
        TerminalIdentity::Kitty => "OSC 99 - full features",
        TerminalIdentity::ITerm2 => "OSC 9",
        TerminalIdentity::WezTerm => "OSC 777",
        TerminalIdentity::Ghostty => "OSC 777 + progress",
        TerminalIdentity::WindowsTerminal => "progress only",
        TerminalIdentity::Vte => "GNOME Terminal, etc.",
        TerminalIdentity::Alacritty | TerminalIdentity::AppleTerminal => "fallback only",
        TerminalIdentity::Unknown => return "Unknown".red().to_string(),
    };
    format!("{} ({})", terminal.label().green(), note)
}

/// Protocol name with what it carries
pub fn describe_protocol(protocol: ProtocolVariant) -> String {
    if protocol.is_usable() {
        protocol.label().green().to_string()
    } else {
        protocol.label().red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ExternalNotifier;
    use crate::application::{DispatchContext, Dispatcher};
    use crate::domain::terminal::{EnvSnapshot, KNOWN_TERMINALS};
    use crate::infrastructure::terminal::MemorySink;

    type TestDispatcher = Dispatcher<EnvSnapshot, MemorySink, Box<dyn ExternalNotifier>>;

    fn dispatcher(pairs: &[(&str, &str)]) -> (TestDispatcher, MemorySink) {
        let sink = MemorySink::new();
        let context = DispatchContext {
            fallback_enabled: false,
            ..Default::default()
        };
        let d = Dispatcher::with_context(
            EnvSnapshot::from_pairs(pairs.iter().copied()),
            sink.clone(),
            None,
            context,
        );
        (d, sink)
    }

    #[test]
    fn semantic_test_reports_delivery() {
        let (mut d, sink) = dispatcher(&[("TERM_PROGRAM", "WezTerm")]);
        assert!(test_semantic_notifications(&mut d, &Presenter::new(), Duration::ZERO));
        assert_eq!(sink.writes().len(), 3);

        let (mut d, sink) = dispatcher(&[("TERM", "xterm-256color")]);
        assert!(!test_semantic_notifications(&mut d, &Presenter::new(), Duration::ZERO));
        assert!(sink.writes().is_empty());
    }

    #[test]
    fn every_known_terminal_has_a_description() {
        for terminal in KNOWN_TERMINALS {
            let text = describe_terminal(*terminal);
            assert!(text.contains(terminal.label()), "{}", text);
            assert!(text.contains('('));
        }
        assert!(describe_terminal(TerminalIdentity::Unknown).contains("Unknown"));
    }

    #[test]
    fn protocol_descriptions() {
        assert!(describe_protocol(ProtocolVariant::Osc99).contains("urgency"));
        assert!(describe_protocol(ProtocolVariant::Osc9).contains("message only"));
        assert!(describe_protocol(ProtocolVariant::None).contains("None"));
    }

    #[test]
    fn empty_answer_means_yes() {
        assert!(is_yes("\n"));
        assert!(is_yes("Y\n"));
        assert!(is_yes("yes"));
        assert!(!is_yes("n"));
        assert!(!is_yes("nope"));
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("/tmp/tmux-1000/default,123,0", 9), "/tmp/tmux");
        assert_eq!(truncate("ab", 30), "ab");
    }
}
