use serde::Deserialize;

use super::line_item::LineItem;
use super::status::InvoiceStatus;

/// Invoice aggregate as returned by the dashboard API.
///
/// All monetary fields arrive precomputed; nothing here recalculates them.
/// Dates stay as the raw ISO-8601 strings and are formatted at render time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub issue_date: String,
    pub due_date: String,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub balance_amount: f64,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub customer: Customer,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default, rename = "posOrders", alias = "orders")]
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub billing_address: Option<String>,
    #[serde(default)]
    pub customer_code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total_price: f64,
    pub product: Product,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub sku: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub amount: f64,
    pub payment_date: String,
    pub payment_method: String,
    #[serde(default)]
    pub reference: String,
}

/// Response body of `GET /api/invoices/{id}`: `{ "data": { "invoice": ... } }`
#[derive(Debug, Deserialize)]
pub struct InvoiceEnvelope {
    pub data: EnvelopeData,
}

#[derive(Debug, Deserialize)]
pub struct EnvelopeData {
    #[serde(default)]
    pub invoice: Option<Invoice>,
}

impl InvoiceEnvelope {
    pub fn into_invoice(self) -> Option<Invoice> {
        self.data.invoice
    }
}

impl Invoice {
    /// Flatten every order's items, keeping order-then-item sequence
    pub fn line_items(&self) -> Vec<LineItem> {
        self.orders
            .iter()
            .flat_map(|order| order.order_items.iter().map(LineItem::from))
            .collect()
    }
}
