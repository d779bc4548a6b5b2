use super::model::OrderItem;

/// A display row on the printed invoice, derived per render
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub description: String,
    pub sku: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

impl From<&OrderItem> for LineItem {
    fn from(item: &OrderItem) -> Self {
        Self {
            description: item.product.name.clone(),
            sku: item.product.sku.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            total: item.total_price,
        }
    }
}

/// Render a quantity without a trailing ".0" for whole numbers
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        format!("{quantity}")
    }
}
