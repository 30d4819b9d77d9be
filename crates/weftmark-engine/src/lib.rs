pub mod html;
pub mod io;
pub mod parsing;
pub mod render;
pub mod state;

// Re-export key types for easier usage
pub use html::{Element, RawHtml, Renderable, Text, filter_unsafe_url};
pub use io::*;
pub use render::{Compiler, ScannedDocument};
pub use state::{Configurable, Handler, PermittedSchemes, SafeMode, State};
