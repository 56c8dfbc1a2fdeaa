//! Handlers for the single-sequence commands: progress, bell, close, link
//! and attention

use crate::application::Notify;
use crate::domain::progress::ProgressMode;

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::args::ProgressTarget;
use super::presenter::Presenter;

fn report(ok: bool, failure: &str, presenter: &Presenter) -> u8 {
    if ok {
        EXIT_SUCCESS
    } else {
        presenter.error(failure);
        EXIT_ERROR
    }
}

/// Handle `progress`. Terminals without progress support succeed silently.
pub fn handle_progress<D: Notify>(
    notifier: &mut D,
    target: ProgressTarget,
    mode: ProgressMode,
    presenter: &Presenter,
) -> u8 {
    let ok = match target {
        ProgressTarget::Value(value) => notifier.progress(value, mode),
        ProgressTarget::Clear => notifier.progress_clear(),
        ProgressTarget::Indeterminate => notifier.progress_indeterminate(),
    };
    report(ok, "Failed to write progress sequence.", presenter)
}

pub fn handle_bell<D: Notify>(notifier: &mut D, presenter: &Presenter) -> u8 {
    report(notifier.bell(), "Failed to ring the bell.", presenter)
}

pub fn handle_close<D: Notify>(notifier: &mut D, id: &str, presenter: &Presenter) -> u8 {
    report(
        notifier.close(id),
        "Closing notifications requires the OSC 99 protocol (kitty).",
        presenter,
    )
}

/// Print the link to stdout; terminals without OSC 8 show plain text.
pub fn handle_link<D: Notify>(
    notifier: &D,
    url: &str,
    text: Option<&str>,
    id: Option<&str>,
    presenter: &Presenter,
) -> u8 {
    if url.trim().is_empty() {
        presenter.error("Link URL must not be empty.");
        return EXIT_ERROR;
    }
    presenter.output(&notifier.hyperlink(url, text, id));
    EXIT_SUCCESS
}

/// Without flags, bounce the dock icon. Both flags may be combined.
pub fn handle_attention<D: Notify>(
    notifier: &mut D,
    fireworks: bool,
    steal_focus: bool,
    presenter: &Presenter,
) -> u8 {
    let mut ok = true;
    if fireworks || !steal_focus {
        ok &= notifier.request_attention(fireworks);
    }
    if steal_focus {
        ok &= notifier.steal_focus();
    }
    report(
        ok,
        "Attention requests are only supported by iTerm2.",
        presenter,
    )
}
