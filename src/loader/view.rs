use crate::error::Result;
use crate::invoice::Invoice;

use super::InvoiceSource;

/// What the print page is currently showing
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// Waiting for a fetch, or for an identifier to arrive
    #[default]
    Loading,
    Loaded(Box<Invoice>),
    /// Fetch failed or the API had no record
    Unavailable,
}

impl LoadState {
    pub fn invoice(&self) -> Option<&Invoice> {
        match self {
            LoadState::Loaded(invoice) => Some(&**invoice),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Handle for one in-flight fetch; results carrying an outdated ticket are dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    id: String,
}

impl Ticket {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// View state for a single invoice print page.
///
/// Every `mount` and `teardown` bumps a generation counter, so a response
/// that arrives for an earlier identifier (or after the page went away) is
/// ignored instead of overwriting newer state.
#[derive(Debug, Default)]
pub struct InvoiceView {
    generation: u64,
    state: LoadState,
}

impl InvoiceView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Enter the loading state for `id`. Returns `None` when there is no
    /// identifier, in which case nothing should be fetched.
    pub fn mount(&mut self, id: Option<&str>) -> Option<Ticket> {
        self.generation += 1;
        self.state = LoadState::Loading;

        let id = id.map(str::trim).filter(|id| !id.is_empty())?;
        Some(Ticket {
            generation: self.generation,
            id: id.to_string(),
        })
    }

    /// Invalidate any outstanding fetch
    pub fn teardown(&mut self) {
        self.generation += 1;
    }

    /// Apply a fetch result. Returns false if the ticket was stale.
    pub fn apply(&mut self, ticket: Ticket, result: Result<Invoice>) -> bool {
        if ticket.generation != self.generation {
            log::debug!("discarding stale result for invoice {}", ticket.id);
            return false;
        }

        self.state = match result {
            Ok(invoice) => LoadState::Loaded(Box::new(invoice)),
            Err(e) => {
                log::error!("error fetching invoice {}: {e}", ticket.id);
                LoadState::Unavailable
            }
        };
        true
    }

    /// Mount `id` and, if present, fetch it once from `source`
    pub fn load<S: InvoiceSource + ?Sized>(&mut self, source: &S, id: Option<&str>) -> &LoadState {
        if let Some(ticket) = self.mount(id) {
            let result = source.fetch(ticket.id());
            self.apply(ticket, result);
        } else {
            log::warn!("no invoice identifier supplied; staying in loading state");
        }
        &self.state
    }
}
