//! Error sweep and run-length token assembly.

use pylex_ir::{Span, Token, TokenKind, TokenList};
use tracing::debug;

use crate::indent::Marker;
use crate::tagger::TagBuffer;

/// Resolve every slot no pass claimed to `Error`.
///
/// No boundaries are added, so neighbouring unclaimed bytes fold into a
/// single error token.
pub(crate) fn sweep_errors(buf: &mut TagBuffer<'_>) -> usize {
    let swept = buf.fill_unresolved(TokenKind::Error);
    debug!(swept, "unclaimed bytes swept");
    swept
}

/// Run-length encode the slots into tokens, splicing in markers.
///
/// A token ends where the kind changes or a boundary was recorded. Markers
/// are placed before the token that starts at their anchor; markers at the
/// end of input follow the last token.
#[tracing::instrument(level = "trace", skip_all)]
pub(crate) fn assemble(buf: &TagBuffer<'_>, markers: Vec<Marker>) -> TokenList {
    let len = buf.len();
    let mut tokens = Vec::with_capacity(markers.len() + len / 2);
    let mut markers = markers.into_iter().peekable();
    let mut run: Option<(TokenKind, usize)> = None;

    for offset in 0..len {
        let kind = buf.get(offset).unwrap_or(TokenKind::Error);
        let split = match run {
            Some((current, _)) => current != kind || buf.is_boundary(offset),
            None => true,
        };
        if !split {
            continue;
        }
        if let Some((current, start)) = run.take() {
            tokens.push(Token::new(current, Span::from_range(start..offset)));
        }
        while let Some(marker) = markers.next_if(|m| m.offset <= offset) {
            tokens.push(marker_token(marker));
        }
        run = Some((kind, offset));
    }

    if let Some((current, start)) = run {
        tokens.push(Token::new(current, Span::from_range(start..len)));
    }
    tokens.extend(markers.map(marker_token));

    TokenList::from_vec(tokens)
}

fn marker_token(marker: Marker) -> Token {
    Token::new(marker.kind, Span::from_range(marker.offset..marker.offset))
}
