//! Bracket-depth line joining.
//!
//! A line terminator inside an open bracket continues the logical line.
//! This pass runs after comments, strings and explicit joins are claimed,
//! so brackets inside those regions never move the depth counters, and
//! before the newline pattern, which then finds soft terminators already
//! taken.

use pylex_ir::TokenKind;
use tracing::debug;

use crate::tagger::TagBuffer;

/// Nesting counters, one per bracket family.
///
/// Signed: a stray closer drives its counter negative, and the line only
/// continues while some counter is positive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Depth {
    round: i32,
    square: i32,
    curly: i32,
}

impl Depth {
    fn is_open(self) -> bool {
        self.round > 0 || self.square > 0 || self.curly > 0
    }
}

/// Tag each unclaimed line terminator reached at positive depth as
/// `ImplicitJoin`. Returns the number of joins.
#[tracing::instrument(level = "trace", skip_all)]
pub(crate) fn classify_joins(buf: &mut TagBuffer<'_>) -> usize {
    let bytes = buf.source().as_bytes();
    let mut depth = Depth::default();
    let mut joins = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        if !buf.is_unresolved(i) {
            continue;
        }
        match byte {
            b'(' => depth.round += 1,
            b')' => depth.round -= 1,
            b'[' => depth.square += 1,
            b']' => depth.square -= 1,
            b'{' => depth.curly += 1,
            b'}' => depth.curly -= 1,
            b'\n' if depth.is_open() => {
                let start = if i > 0 && bytes[i - 1] == b'\r' && buf.is_unresolved(i - 1) {
                    i - 1
                } else {
                    i
                };
                if buf.claim(start..i + 1, TokenKind::ImplicitJoin, false) {
                    joins += 1;
                }
            }
            _ => {}
        }
    }

    debug!(joins, ?depth, "implicit joins classified");
    joins
}
