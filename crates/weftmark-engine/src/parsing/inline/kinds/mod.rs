//! # Inline Kinds
//!
//! Each variant owns its delimiter constants and its grammar; the
//! dispatcher only knows the order to try them in.
//!
//! - **`Code`**: backtick code spans, a raw zone for everything else
//! - **`HardBreak`**: trailing double space or backslash before a newline
//! - **`UrlTag`**: `<scheme://...>` autolinks
//! - **`Markup`**: raw inline HTML, escaped or trusted depending on safe mode
//! - **`PlainText`**: literal text fallback

pub mod code;
pub mod hard_break;
pub mod markup;
pub mod plain_text;
pub mod url_tag;

pub use code::Code;
pub use hard_break::HardBreak;
pub use markup::Markup;
pub use plain_text::PlainText;
pub use url_tag::UrlTag;
