//! Indentation state machine.
//!
//! Measures the leading whitespace of every logical line and compares it
//! against a stack of enclosing widths, producing zero-width `Indent`,
//! `Dedent` and `IndentError` markers. Runs after newlines are tagged (a
//! line starts after every `Newline` slot, never after a join) and before
//! whitespace is tagged, so leading blanks are still unresolved here.
//!
//! # Tabs
//!
//! A tab advances the column to the next multiple of [`TAB_WIDTH`]. Every
//! tab's advance is compared with the advance of the most recent tab seen
//! anywhere before it; a mismatch tags that single tab `TabError`.
//!
//! # Lines that never open
//!
//! Blank lines, comment-only lines and trailing whitespace at end of input
//! end measurement without touching the stack.

use pylex_ir::TokenKind;
use tracing::debug;

use crate::tagger::TagBuffer;

/// Columns per tab stop.
pub const TAB_WIDTH: usize = 8;

/// Zero-width structural token produced by the indentation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Marker {
    pub offset: usize,
    pub kind: TokenKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineState {
    /// Measuring leading whitespace.
    AtLineStart,
    /// Past the first token of the line.
    InLine,
}

struct Indenter {
    /// Strictly increasing, bottom is always 0.
    stack: Vec<usize>,
    state: LineState,
    column: usize,
    last_tab_advance: Option<usize>,
    markers: Vec<Marker>,
    tab_errors: usize,
}

impl Indenter {
    fn new() -> Self {
        Indenter {
            stack: vec![0],
            state: LineState::AtLineStart,
            column: 0,
            last_tab_advance: None,
            markers: Vec::new(),
            tab_errors: 0,
        }
    }

    #[inline]
    fn top(&self) -> usize {
        self.stack.last().copied().unwrap_or(0)
    }

    fn emit(&mut self, buf: &mut TagBuffer<'_>, offset: usize, kind: TokenKind) {
        buf.mark_boundary(offset);
        self.markers.push(Marker { offset, kind });
    }

    fn start_line(&mut self) {
        self.state = LineState::AtLineStart;
        self.column = 0;
    }

    fn tab(&mut self, buf: &mut TagBuffer<'_>, offset: usize) {
        let advance = TAB_WIDTH - self.column % TAB_WIDTH;
        if self.last_tab_advance.is_some_and(|last| last != advance)
            && buf.claim(offset..offset + 1, TokenKind::TabError, false)
        {
            self.tab_errors += 1;
        }
        self.last_tab_advance = Some(advance);
        self.column += advance;
    }

    /// The first token of a logical line sits at `offset`.
    fn open_line(&mut self, buf: &mut TagBuffer<'_>, offset: usize) {
        self.state = LineState::InLine;
        let width = self.column;

        if width > self.top() {
            self.stack.push(width);
            self.emit(buf, offset, TokenKind::Indent);
            return;
        }

        while width < self.top() {
            self.stack.pop();
            self.emit(buf, offset, TokenKind::Dedent);
        }
        if width != self.top() {
            self.emit(buf, offset, TokenKind::IndentError);
        }
    }

    fn step(&mut self, buf: &mut TagBuffer<'_>, offset: usize, byte: u8) {
        match buf.get(offset) {
            Some(TokenKind::Newline) => self.start_line(),
            _ if self.state == LineState::InLine => {}
            Some(TokenKind::Comment) => self.state = LineState::InLine,
            Some(_) => self.open_line(buf, offset),
            None => match byte {
                b' ' => self.column += 1,
                b'\t' => self.tab(buf, offset),
                // Form feed resets the column.
                0x0C => self.column = 0,
                _ => self.open_line(buf, offset),
            },
        }
    }

    fn finish(mut self, end: usize) -> Vec<Marker> {
        while self.stack.len() > 1 {
            self.stack.pop();
            self.markers.push(Marker {
                offset: end,
                kind: TokenKind::Dedent,
            });
        }

        let count = |kind: TokenKind| self.markers.iter().filter(|m| m.kind == kind).count();
        debug!(
            indents = count(TokenKind::Indent),
            dedents = count(TokenKind::Dedent),
            indent_errors = count(TokenKind::IndentError),
            tab_errors = self.tab_errors,
            "indentation tracked"
        );
        self.markers
    }
}

/// Run the indentation state machine over the buffer.
///
/// Returns markers in source order; markers sharing an offset keep their
/// emission order (dedents before an indent error).
#[tracing::instrument(level = "trace", skip_all)]
pub(crate) fn track_indentation(buf: &mut TagBuffer<'_>) -> Vec<Marker> {
    let bytes = buf.source().as_bytes();
    let mut indenter = Indenter::new();
    for (offset, &byte) in bytes.iter().enumerate() {
        indenter.step(buf, offset, byte);
    }
    indenter.finish(buf.len())
}
