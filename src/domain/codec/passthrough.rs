//! Multiplexer passthrough envelopes (DCS wrapping)

use crate::domain::terminal::Passthrough;

use super::{ESC, ST};

const TMUX_OPEN: &[u8] = b"\x1bPtmux;";
const SCREEN_OPEN: &[u8] = b"\x1bP";

/// Wrap one complete escape sequence so the multiplexer forwards it to the
/// outer terminal instead of interpreting it.
///
/// tmux needs every inner ESC doubled and `allow-passthrough on`.
pub fn wrap(sequence: &[u8], passthrough: Passthrough) -> Vec<u8> {
    match passthrough {
        Passthrough::Direct => sequence.to_vec(),
        Passthrough::Tmux => {
            let escapes = sequence.iter().filter(|b| **b == ESC).count();
            let mut out =
                Vec::with_capacity(TMUX_OPEN.len() + sequence.len() + escapes + ST.len());
            out.extend_from_slice(TMUX_OPEN);
            for &byte in sequence {
                if byte == ESC {
                    out.push(ESC);
                }
                out.push(byte);
            }
            out.extend_from_slice(ST);
            out
        }
        Passthrough::Screen => {
            let mut out = Vec::with_capacity(SCREEN_OPEN.len() + sequence.len() + ST.len());
            out.extend_from_slice(SCREEN_OPEN);
            out.extend_from_slice(sequence);
            out.extend_from_slice(ST);
            out
        }
    }
}
