mod http;
mod view;

pub use http::{parse_envelope, HttpInvoiceSource};
pub use view::{InvoiceView, LoadState, Ticket};

use crate::error::Result;
use crate::invoice::Invoice;

/// Anything that can produce an invoice by identifier
pub trait InvoiceSource {
    fn fetch(&self, id: &str) -> Result<Invoice>;
}
