mod line_item;
mod model;
mod status;

pub use line_item::{format_quantity, LineItem};
pub use model::{
    Customer, EnvelopeData, Invoice, InvoiceEnvelope, Order, OrderItem, Payment, Product,
};
pub use status::{BadgeTone, InvoiceStatus};
