mod html;
mod layout;
mod style;

pub use html::{escape, render_document, render_invoice, RenderContext};
pub use layout::{LayoutPreset, LayoutVariant};
