pub(crate) mod engine;
pub(crate) mod wrap;

pub use engine::{RegisteredFont, TextBrushRgba8, TextEngine};
pub use wrap::{WrappedTitle, wrap_title};
