//! # HTML Output
//!
//! The renderable tree produced by the render phase and its serialization.
//!
//! ## Modules
//!
//! - **`escape`**: Escaping primitives for names, attribute values and text
//! - **`renderable`**: The closed `Renderable` sum type
//! - **`element`**: `Element` and its pretty-printing serializer
//! - **`text`** / **`raw_html`**: Leaf renderables (escaped vs verbatim)
//! - **`url`**: `filter_unsafe_url` and the default scheme allow-list

pub mod element;
pub mod escape;
pub mod raw_html;
pub mod renderable;
pub mod text;
pub mod url;

pub use element::{Attributes, Element, TEXT_LEVEL_ELEMENTS};
pub use raw_html::RawHtml;
pub use renderable::Renderable;
pub use text::Text;
pub use url::{COMMON_SCHEMES, filter_unsafe_url};
