//! Shared application state.

use rolodex::{ClientService, MemoryStore, SystemClock};
use std::sync::Arc;

/// The concrete service the HTTP surface is wired to.
pub type Service = ClientService<MemoryStore, SystemClock>;

/// State handed to every handler; cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Service>,
}

impl AppState {
    pub fn new(service: Service) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
