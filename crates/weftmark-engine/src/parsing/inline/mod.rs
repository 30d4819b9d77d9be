//! # Inline Parsing
//!
//! Recognizes inline constructs inside a run of text.
//!
//! ## Architecture
//!
//! Every variant implements the [`Inline`] contract: `build` tries to match at
//! the start of an [`Excerpt`](crate::parsing::excerpt::Excerpt) and reports
//! the exact width it consumed. The dispatcher offers the cursor to each
//! variant in a fixed order, advances by the winner's width, and collects
//! unclaimed bytes as plain text. No variant backtracks into another's
//! territory.
//!
//! Rendering is deferred: each node yields a [`Handler`](crate::state::Handler)
//! that is resolved only once the document's state is final, so the same
//! parse renders differently under safe mode without re-scanning.
//!
//! ## Modules
//!
//! - **`types`**: the `Inline` trait, the `InlineNode` union, `ParsedInline`
//! - **`kinds`**: the concrete variants
//! - **`cursor`**: `Cursor` for byte-by-byte grammar scanning
//! - **`parser`**: `parse_inline()` dispatcher

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{Inline, InlineNode, ParsedInline};
