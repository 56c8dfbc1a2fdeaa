//! Notification domain module

mod kind;
mod outcome;
mod request;
mod urgency;

pub use kind::{
    KindTitles, NotificationKind, ALL_KINDS, DEFAULT_ERROR_KIND_TITLE, DEFAULT_INFO_KIND_TITLE,
    DEFAULT_SUCCESS_KIND_TITLE, DEFAULT_WARNING_KIND_TITLE,
};
pub use outcome::{
    CommandOutcome, OutcomeTemplate, DEFAULT_FAILURE_MESSAGE, DEFAULT_SUCCESS_MESSAGE,
};
pub use request::NotificationRequest;
pub use urgency::{Urgency, ALL_URGENCIES};
