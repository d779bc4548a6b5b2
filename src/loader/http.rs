use std::time::Duration;
use ureq::Agent;

use crate::config::Credential;
use crate::error::{PrintError, Result};
use crate::invoice::{Invoice, InvoiceEnvelope};

use super::InvoiceSource;

/// Fetches invoices from the dashboard API with a bearer token
pub struct HttpInvoiceSource {
    agent: Agent,
    base_url: String,
    credential: Credential,
}

impl HttpInvoiceSource {
    pub fn new(base_url: &str, credential: Credential, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
        }
    }

    pub fn invoice_url(&self, id: &str) -> String {
        format!("{}/api/invoices/{}", self.base_url, urlencoding::encode(id))
    }
}

impl InvoiceSource for HttpInvoiceSource {
    fn fetch(&self, id: &str) -> Result<Invoice> {
        let url = self.invoice_url(id);
        log::info!("fetching invoice {id} from {url}");

        let body = self
            .agent
            .get(url.as_str())
            .header("Authorization", self.credential.bearer())
            .header("Accept", "application/json")
            .call()?
            .body_mut()
            .read_to_string()?;

        parse_envelope(id, &body)
    }
}

/// Decode an API response body into the invoice it wraps
pub fn parse_envelope(id: &str, body: &str) -> Result<Invoice> {
    let envelope: InvoiceEnvelope =
        serde_json::from_str(body).map_err(PrintError::MalformedResponse)?;
    envelope
        .into_invoice()
        .ok_or_else(|| PrintError::InvoiceMissing(id.to_string()))
}
