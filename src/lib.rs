pub mod config;
pub mod error;
pub mod format;
pub mod invoice;
pub mod loader;
pub mod render;

pub use config::{Company, Config, Credential};
pub use error::{PrintError, Result};
pub use format::{format_currency, format_date};
pub use invoice::{Invoice, InvoiceStatus, LineItem};
pub use loader::{HttpInvoiceSource, InvoiceSource, InvoiceView, LoadState};
pub use render::{render_document, LayoutVariant, RenderContext};
