//! `send` command handler

use tracing::debug;

use crate::application::Notify;
use crate::domain::notification::{CommandOutcome, OutcomeTemplate, Urgency};

use super::app::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
use super::args::SendArgs;
use super::presenter::Presenter;

/// Handle `send` in message mode or exit-code mode
pub fn handle_send<D: Notify>(
    notifier: &mut D,
    args: &SendArgs,
    template: &OutcomeTemplate,
    presenter: &Presenter,
) -> u8 {
    if let Some(exit_code) = args.exit_code {
        return send_outcome(notifier, args, exit_code, template, presenter);
    }

    let message = match args.message.as_deref().filter(|m| !m.trim().is_empty()) {
        Some(message) => message,
        None => {
            presenter.error("Message is required unless using --exit-code.");
            return EXIT_USAGE_ERROR;
        }
    };

    let (title, urgency) = match args.kind {
        Some(kind) => {
            let title = args
                .title
                .clone()
                .unwrap_or_else(|| notifier.kind_titles().get(kind).to_string());
            (Some(title), kind.urgency())
        }
        None => (args.title.clone(), None),
    };

    if deliver(notifier, args, message, title.as_deref(), urgency) {
        presenter.success("Notification sent.");
        EXIT_SUCCESS
    } else {
        report_failure(notifier, presenter)
    }
}

fn send_outcome<D: Notify>(
    notifier: &mut D,
    args: &SendArgs,
    exit_code: i32,
    base: &OutcomeTemplate,
    presenter: &Presenter,
) -> u8 {
    let template = OutcomeTemplate {
        success_message: pick(&args.success_message, &base.success_message),
        failure_message: pick(&args.failure_message, &base.failure_message),
        success_title: pick(&args.success_title, &base.success_title),
        failure_title: pick(&args.failure_title, &base.failure_title),
    };
    let outcome = CommandOutcome::from_exit_code(
        exit_code,
        args.message.as_deref(),
        args.title.as_deref(),
        &template,
    );
    debug!(exit_code, "sending command outcome");

    let sent = deliver(
        notifier,
        args,
        &outcome.message,
        Some(&outcome.title),
        None,
    );

    if sent {
        let status = if outcome.is_success() {
            "success"
        } else {
            "failure"
        };
        presenter.success(&format!("Notification sent ({}).", status));
        EXIT_SUCCESS
    } else {
        report_failure(notifier, presenter)
    }
}

fn pick(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn deliver<D: Notify>(
    notifier: &mut D,
    args: &SendArgs,
    message: &str,
    title: Option<&str>,
    urgency: Option<Urgency>,
) -> bool {
    if args.external {
        notifier.send_external(message, title, urgency)
    } else if args.any {
        notifier.send_any(message, title, urgency)
    } else {
        notifier.send(message, title, urgency, args.id.as_deref())
    }
}

fn report_failure<D: Notify>(notifier: &D, presenter: &Presenter) -> u8 {
    presenter.error("Failed to send notification.");
    if !notifier.can_notify() && !notifier.can_fallback() {
        presenter.info("No notification protocol detected and no fallback available.");
        presenter.info("Run 'termnotify diagnose' for details, or force one with --protocol.");
    }
    EXIT_ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ExternalNotifier;
    use crate::application::{DispatchContext, Dispatcher};
    use crate::domain::notification::NotificationKind;
    use crate::domain::terminal::EnvSnapshot;
    use crate::infrastructure::terminal::MemorySink;

    type TestDispatcher = Dispatcher<EnvSnapshot, MemorySink, Box<dyn ExternalNotifier>>;

    fn template() -> OutcomeTemplate {
        OutcomeTemplate {
            success_message: "ok".to_string(),
            failure_message: "broke".to_string(),
            success_title: "Yay".to_string(),
            failure_title: "Nay".to_string(),
        }
    }

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

    fn args(message: Option<&str>) -> SendArgs {
        SendArgs {
            message: message.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn message_mode_writes_sequence() {
        let (mut d, sink) = dispatcher(&[("TERM_PROGRAM", "WezTerm")]);
        let mut send = args(Some("done"));
        send.title = Some("Build".to_string());

        let code = handle_send(&mut d, &send, &template(), &Presenter::new());

        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(sink.contents(), b"\x1b]777;notify;Build;done\x07".to_vec());
    }

    #[test]
    fn kind_sets_title_and_urgency() {
        let (mut d, sink) = dispatcher(&[("KITTY_WINDOW_ID", "1")]);
        let mut send = args(Some("tests broke"));
        send.kind = Some(NotificationKind::Error);

        let code = handle_send(&mut d, &send, &template(), &Presenter::new());

        assert_eq!(code, EXIT_SUCCESS);
        let out = String::from_utf8(sink.contents()).unwrap();
        assert!(out.starts_with("\x1b]99;d=0:u=2:p=title;Error\x1b\\"));
    }

    #[test]
    fn explicit_title_wins_over_kind() {
        let (mut d, sink) = dispatcher(&[("TERM_PROGRAM", "WezTerm")]);
        let mut send = args(Some("cache warmed"));
        send.kind = Some(NotificationKind::Info);
        send.title = Some("Cache".to_string());

        handle_send(&mut d, &send, &template(), &Presenter::new());

        assert_eq!(sink.contents(), b"\x1b]777;notify;Cache;cache warmed\x07".to_vec());
    }

    #[test]
    fn missing_message_is_usage_error() {
        let (mut d, sink) = dispatcher(&[("TERM_PROGRAM", "WezTerm")]);
        let code = handle_send(&mut d, &args(None), &template(), &Presenter::new());
        assert_eq!(code, EXIT_USAGE_ERROR);
        assert!(sink.writes().is_empty());
    }

    #[test]
    fn failed_exit_code_uses_failure_wording() {
        let (mut d, sink) = dispatcher(&[("KITTY_WINDOW_ID", "1")]);
        let mut send = args(None);
        send.exit_code = Some(2);

        let code = handle_send(&mut d, &send, &template(), &Presenter::new());

        assert_eq!(code, EXIT_SUCCESS);
        let out = String::from_utf8(sink.contents()).unwrap();
        assert!(out.contains("u=1:p=title;Nay"));
        assert!(out.contains("p=body;broke (exit code: 2)"));
    }

    #[test]
    fn failed_exit_code_follows_default_urgency() {
        let (mut d, sink) = dispatcher(&[("KITTY_WINDOW_ID", "1")]);
        d.set_default_urgency(Urgency::Low);
        let mut send = args(None);
        send.exit_code = Some(1);

        handle_send(&mut d, &send, &template(), &Presenter::new());

        let out = String::from_utf8(sink.contents()).unwrap();
        assert!(out.contains("u=0:p=title;Nay"));
    }

    #[test]
    fn exit_code_flags_override_template() {
        let (mut d, sink) = dispatcher(&[("TERM_PROGRAM", "WezTerm")]);
        let mut send = args(None);
        send.exit_code = Some(0);
        send.success_title = Some("Deployed".to_string());

        handle_send(&mut d, &send, &template(), &Presenter::new());

        assert_eq!(sink.contents(), b"\x1b]777;notify;Deployed;ok\x07".to_vec());
    }

    #[test]
    fn unsupported_terminal_without_fallback_fails() {
        let (mut d, sink) = dispatcher(&[("TERM", "xterm-256color")]);
        let code = handle_send(&mut d, &args(Some("done")), &template(), &Presenter::new());
        assert_eq!(code, EXIT_ERROR);
        assert!(sink.writes().is_empty());
    }

    #[test]
    fn external_without_notifier_fails() {
        let (mut d, sink) = dispatcher(&[("TERM_PROGRAM", "WezTerm")]);
        let mut send = args(Some("done"));
        send.external = true;
        let code = handle_send(&mut d, &send, &template(), &Presenter::new());
        assert_eq!(code, EXIT_ERROR);
        assert!(sink.writes().is_empty());
    }
}
