//! # Block Parsing
//!
//! The minimal block layer that feeds inline parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line yields a `LineClass`
//!    (blockquote depth, blank status, fence signature)
//! 2. **Block Construction** (`builder`): a `BlockBuilder` turns classified
//!    lines into paragraph and fenced-code `BlockNode`s
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - All block nodes store byte spans into the rope

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode};
