//! Pylex IR - shared token types.
//!
//! This crate contains the data model produced by the tokenizer:
//! - [`Span`] for byte ranges in the source
//! - [`TokenKind`], [`Token`] and [`TokenList`] for the token stream
//! - [`LineIndex`] for turning offsets back into line/column pairs
//!
//! Tokens never copy source text. Consumers recover a lexeme by slicing
//! the original source with the token's span.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod line_index;
mod span;
mod token;

pub use line_index::LineIndex;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
