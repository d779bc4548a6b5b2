use serde::{Deserialize, Serialize};
use std::fmt;

/// Invoice status as sent by the API (uppercase snake case).
///
/// Values outside the known set are kept verbatim so they still print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
    PartiallyPaid,
    Other(String),
}

/// Visual treatment of the status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// green
    Paid,
    /// red
    Overdue,
    /// yellow
    PartiallyPaid,
    /// blue
    Default,
}

impl BadgeTone {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeTone::Paid => "badge-green",
            BadgeTone::Overdue => "badge-red",
            BadgeTone::PartiallyPaid => "badge-yellow",
            BadgeTone::Default => "badge-blue",
        }
    }
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InvoiceStatus::Pending => "PENDING",
            InvoiceStatus::Paid => "PAID",
            InvoiceStatus::Overdue => "OVERDUE",
            InvoiceStatus::PartiallyPaid => "PARTIALLY_PAID",
            InvoiceStatus::Other(raw) => raw,
        }
    }

    /// Badge text: the raw status with underscores shown as spaces
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            InvoiceStatus::Paid => BadgeTone::Paid,
            InvoiceStatus::Overdue => BadgeTone::Overdue,
            InvoiceStatus::PartiallyPaid => BadgeTone::PartiallyPaid,
            InvoiceStatus::Pending | InvoiceStatus::Other(_) => BadgeTone::Default,
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PENDING" => InvoiceStatus::Pending,
            "PAID" => InvoiceStatus::Paid,
            "OVERDUE" => InvoiceStatus::Overdue,
            "PARTIALLY_PAID" => InvoiceStatus::PartiallyPaid,
            _ => InvoiceStatus::Other(raw),
        }
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
