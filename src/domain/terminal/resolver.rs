//! Terminal identity resolution from an environment snapshot

use super::env::EnvSnapshot;
use super::identity::{MultiplexerContext, TerminalIdentity};

/// Resolve the hosting terminal and multiplexer.
///
/// The most specific signal wins: `TERM_PROGRAM`, then `LC_TERMINAL`, then
/// per-terminal marker variables, then `TERM`, then `COLORTERM`.
/// Multiplexer flags are read independently of the terminal.
pub fn resolve(env: &EnvSnapshot) -> (TerminalIdentity, MultiplexerContext) {
    let multiplexer = MultiplexerContext {
        tmux: env.tmux.clone(),
        screen: env.sty.clone(),
    };

    let terminal = from_term_program(env)
        .or_else(|| from_lc_terminal(env))
        .or_else(|| from_markers(env))
        .or_else(|| from_term(env))
        .or_else(|| from_colorterm(env))
        .unwrap_or(TerminalIdentity::Unknown);

    (terminal, multiplexer)
}

fn from_term_program(env: &EnvSnapshot) -> Option<TerminalIdentity> {
    // tmux and screen overwrite TERM_PROGRAM with their own name
    match env.term_program.as_deref()? {
        "iTerm.app" => Some(TerminalIdentity::ITerm2),
        "WezTerm" => Some(TerminalIdentity::WezTerm),
        "ghostty" => Some(TerminalIdentity::Ghostty),
        "Apple_Terminal" => Some(TerminalIdentity::AppleTerminal),
        "kitty" => Some(TerminalIdentity::Kitty),
        "alacritty" => Some(TerminalIdentity::Alacritty),
        _ => None,
    }
}

fn from_lc_terminal(env: &EnvSnapshot) -> Option<TerminalIdentity> {
    match env.lc_terminal.as_deref()? {
        "iTerm2" => Some(TerminalIdentity::ITerm2),
        _ => None,
    }
}

fn from_markers(env: &EnvSnapshot) -> Option<TerminalIdentity> {
    let markers = [
        (&env.kitty_window_id, TerminalIdentity::Kitty),
        (&env.ghostty_resources_dir, TerminalIdentity::Ghostty),
        (&env.wezterm_executable, TerminalIdentity::WezTerm),
        (&env.wt_session, TerminalIdentity::WindowsTerminal),
        (&env.vte_version, TerminalIdentity::Vte),
    ];

    markers
        .into_iter()
        .find(|(value, _)| value.is_some())
        .map(|(_, terminal)| terminal)
}

fn from_term(env: &EnvSnapshot) -> Option<TerminalIdentity> {
    match env.term.as_deref()? {
        "xterm-kitty" => Some(TerminalIdentity::Kitty),
        "xterm-ghostty" => Some(TerminalIdentity::Ghostty),
        "wezterm" => Some(TerminalIdentity::WezTerm),
        "alacritty" | "alacritty-direct" => Some(TerminalIdentity::Alacritty),
        _ => None,
    }
}

fn from_colorterm(env: &EnvSnapshot) -> Option<TerminalIdentity> {
    let colorterm = env.colorterm.as_deref()?;
    if colorterm == "gnome-terminal"
        || colorterm == "xfce4-terminal"
        || colorterm.starts_with("vte")
    {
        Some(TerminalIdentity::Vte)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal_for(pairs: &[(&str, &str)]) -> TerminalIdentity {
        resolve(&EnvSnapshot::from_pairs(pairs.iter().copied())).0
    }

    #[test]
    fn term_program_table() {
        let cases = [
            ("iTerm.app", TerminalIdentity::ITerm2),
            ("WezTerm", TerminalIdentity::WezTerm),
            ("ghostty", TerminalIdentity::Ghostty),
            ("Apple_Terminal", TerminalIdentity::AppleTerminal),
            ("kitty", TerminalIdentity::Kitty),
            ("alacritty", TerminalIdentity::Alacritty),
            ("vscode", TerminalIdentity::Unknown),
        ];
        for (value, expected) in cases {
            assert_eq!(terminal_for(&[("TERM_PROGRAM", value)]), expected, "{value}");
        }
    }

    #[test]
    fn term_table() {
        let cases = [
            ("xterm-kitty", TerminalIdentity::Kitty),
            ("xterm-ghostty", TerminalIdentity::Ghostty),
            ("wezterm", TerminalIdentity::WezTerm),
            ("alacritty", TerminalIdentity::Alacritty),
            ("xterm-256color", TerminalIdentity::Unknown),
        ];
        for (value, expected) in cases {
            assert_eq!(terminal_for(&[("TERM", value)]), expected, "{value}");
        }
    }

    #[test]
    fn markers_identify_terminals() {
        assert_eq!(terminal_for(&[("KITTY_WINDOW_ID", "1")]), TerminalIdentity::Kitty);
        assert_eq!(
            terminal_for(&[("WT_SESSION", "0a1b2c3d")]),
            TerminalIdentity::WindowsTerminal
        );
        assert_eq!(terminal_for(&[("VTE_VERSION", "7600")]), TerminalIdentity::Vte);
        assert_eq!(
            terminal_for(&[("GHOSTTY_RESOURCES_DIR", "/usr/share/ghostty")]),
            TerminalIdentity::Ghostty
        );
    }

    #[test]
    fn term_program_beats_generic_term() {
        assert_eq!(
            terminal_for(&[("TERM_PROGRAM", "iTerm.app"), ("TERM", "xterm-kitty")]),
            TerminalIdentity::ITerm2
        );
    }

    #[test]
    fn markers_beat_generic_term() {
        assert_eq!(
            terminal_for(&[("VTE_VERSION", "7600"), ("TERM", "xterm-256color")]),
            TerminalIdentity::Vte
        );
    }

    #[test]
    fn multiplexer_term_program_falls_through() {
        assert_eq!(
            terminal_for(&[
                ("TERM_PROGRAM", "tmux"),
                ("TERM", "tmux-256color"),
                ("LC_TERMINAL", "iTerm2"),
            ]),
            TerminalIdentity::ITerm2
        );
    }

    #[test]
    fn colorterm_detects_vte() {
        assert_eq!(
            terminal_for(&[("COLORTERM", "gnome-terminal")]),
            TerminalIdentity::Vte
        );
        assert_eq!(
            terminal_for(&[("COLORTERM", "truecolor")]),
            TerminalIdentity::Unknown
        );
    }

    #[test]
    fn empty_environment_is_unknown() {
        let (terminal, multiplexer) = resolve(&EnvSnapshot::default());
        assert_eq!(terminal, TerminalIdentity::Unknown);
        assert!(!multiplexer.in_tmux());
        assert!(!multiplexer.in_screen());
    }

    #[test]
    fn multiplexer_flags_are_independent_of_terminal() {
        let env = EnvSnapshot::from_pairs([
            ("TERM_PROGRAM", "WezTerm"),
            ("TMUX", "/tmp/tmux-1000/default,4242,0"),
        ]);
        let (terminal, multiplexer) = resolve(&env);
        assert_eq!(terminal, TerminalIdentity::WezTerm);
        assert!(multiplexer.in_tmux());
        assert_eq!(
            multiplexer.tmux.as_deref(),
            Some("/tmp/tmux-1000/default,4242,0")
        );
        assert!(!multiplexer.in_screen());

        let (_, multiplexer) = resolve(&EnvSnapshot::from_pairs([("STY", "99.pts-1.box")]));
        assert!(multiplexer.in_screen());
    }

    #[test]
    fn resolution_is_deterministic() {
        let env = EnvSnapshot::from_pairs([("TERM", "xterm-kitty"), ("STY", "1.x")]);
        assert_eq!(resolve(&env), resolve(&env));
    }
}
