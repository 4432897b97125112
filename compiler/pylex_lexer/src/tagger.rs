//! Per-byte classification state and the pattern-driven tagging pass.
//!
//! [`TagBuffer`] holds one slot per source byte (`None` until some pass
//! claims it) plus the set of offsets where the assembler must start a new
//! token even if the kind does not change. Slots are write-once: every
//! writer goes through [`TagBuffer::claim`], which refuses to touch a range
//! unless all of it is still unresolved.

use std::ops::Range;

use pylex_ir::TokenKind;
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::patterns::{next_char_boundary, Pattern};

/// Working classification state for one tokenization.
pub(crate) struct TagBuffer<'src> {
    source: &'src str,
    slots: Vec<Option<TokenKind>>,
    boundaries: FxHashSet<usize>,
}

impl<'src> TagBuffer<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        TagBuffer {
            source,
            slots: vec![None; source.len()],
            boundaries: FxHashSet::default(),
        }
    }

    #[inline]
    pub(crate) fn source(&self) -> &'src str {
        self.source
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn get(&self, offset: usize) -> Option<TokenKind> {
        self.slots.get(offset).copied().flatten()
    }

    #[inline]
    pub(crate) fn is_unresolved(&self, offset: usize) -> bool {
        matches!(self.slots.get(offset), Some(None))
    }

    /// Claim `range` for `kind` if every slot in it is unresolved.
    ///
    /// Returns `false` (and changes nothing) if any slot is already taken.
    /// A successful claim of a non-mergeable kind records a boundary just
    /// past the range.
    pub(crate) fn claim(&mut self, range: Range<usize>, kind: TokenKind, mergeable: bool) -> bool {
        let Some(slots) = self.slots.get_mut(range.clone()) else {
            return false;
        };
        if slots.iter().any(Option::is_some) {
            return false;
        }
        slots.fill(Some(kind));
        if !mergeable {
            self.boundaries.insert(range.end);
        }
        true
    }

    /// Force a token split at `offset`.
    #[inline]
    pub(crate) fn mark_boundary(&mut self, offset: usize) {
        self.boundaries.insert(offset);
    }

    #[inline]
    pub(crate) fn is_boundary(&self, offset: usize) -> bool {
        self.boundaries.contains(&offset)
    }

    /// Resolve every remaining slot to `kind`, returning how many changed.
    pub(crate) fn fill_unresolved(&mut self, kind: TokenKind) -> usize {
        let mut filled = 0;
        for slot in self.slots.iter_mut().filter(|slot| slot.is_none()) {
            *slot = Some(kind);
            filled += 1;
        }
        filled
    }
}

/// Run each pattern over the whole source, in order.
///
/// For every leftmost match the pattern finds after the cursor, claim it if
/// all of its bytes are unresolved and skip it otherwise; either way the
/// cursor moves past the match. Searches always see the full text, so a
/// match may start inside an earlier claim (and is then skipped).
#[tracing::instrument(level = "trace", skip_all)]
pub(crate) fn tag_all<'p>(patterns: impl IntoIterator<Item = &'p Pattern>, buf: &mut TagBuffer<'_>) {
    let text = buf.source();
    for pattern in patterns {
        let mut cursor = 0;
        let mut claimed = 0usize;
        let mut skipped = 0usize;
        while cursor <= text.len() {
            let Some(range) = pattern.matcher.find_at(text, cursor) else {
                break;
            };
            cursor = if range.is_empty() {
                next_char_boundary(text, range.end)
            } else {
                range.end
            };
            if range.is_empty() {
                continue;
            }
            if buf.claim(range, pattern.kind, pattern.mergeable) {
                claimed += 1;
            } else {
                skipped += 1;
            }
        }
        trace!(kind = %pattern.kind, claimed, skipped, "pattern pass");
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
