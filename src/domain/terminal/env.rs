//! Snapshot of the environment variables terminal detection reads

use serde::Serialize;

/// Environment variable names consulted by the resolver
pub mod vars {
    pub const TERM_PROGRAM: &str = "TERM_PROGRAM";
    pub const TERM: &str = "TERM";
    pub const COLORTERM: &str = "COLORTERM";
    pub const LC_TERMINAL: &str = "LC_TERMINAL";
    pub const KITTY_WINDOW_ID: &str = "KITTY_WINDOW_ID";
    pub const GHOSTTY_RESOURCES_DIR: &str = "GHOSTTY_RESOURCES_DIR";
    pub const WEZTERM_EXECUTABLE: &str = "WEZTERM_EXECUTABLE";
    pub const WT_SESSION: &str = "WT_SESSION";
    pub const VTE_VERSION: &str = "VTE_VERSION";
    pub const TMUX: &str = "TMUX";
    pub const STY: &str = "STY";
}

/// Immutable copy of the detection-relevant environment.
///
/// Empty values are stored as `None` so "set but empty" and "unset" behave
/// the same.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EnvSnapshot {
    pub term_program: Option<String>,
    pub term: Option<String>,
    pub colorterm: Option<String>,
    pub lc_terminal: Option<String>,
    pub kitty_window_id: Option<String>,
    pub ghostty_resources_dir: Option<String>,
    pub wezterm_executable: Option<String>,
    pub wt_session: Option<String>,
    pub vte_version: Option<String>,
    pub tmux: Option<String>,
    pub sty: Option<String>,
}

impl EnvSnapshot {
    /// Build a snapshot from any variable lookup function
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Self {
            term_program: get(vars::TERM_PROGRAM),
            term: get(vars::TERM),
            colorterm: get(vars::COLORTERM),
            lc_terminal: get(vars::LC_TERMINAL),
            kitty_window_id: get(vars::KITTY_WINDOW_ID),
            ghostty_resources_dir: get(vars::GHOSTTY_RESOURCES_DIR),
            wezterm_executable: get(vars::WEZTERM_EXECUTABLE),
            wt_session: get(vars::WT_SESSION),
            vte_version: get(vars::VTE_VERSION),
            tmux: get(vars::TMUX),
            sty: get(vars::STY),
        }
    }

    /// Build a snapshot from `(name, value)` pairs
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let pairs: Vec<(&str, &str)> = pairs.into_iter().collect();
        Self::from_lookup(|name| {
            pairs
                .iter()
                .rev()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        })
    }
}
