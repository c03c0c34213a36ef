//! Persistence seam for client records.

mod memory;
#[cfg(test)]
mod tests;

pub use memory::*;

use crate::{Client, ClientId, Error, Result};
use core::future::Future;

/// Outcome of an unordered bulk insert.
///
/// `inserted` holds the records that made it into the store, in batch
/// order; `failed` holds one entry per rejected record. Neither list aborts
/// the other.
#[derive(Clone, Debug, Default)]
pub struct BulkReport {
    pub inserted: Vec<Client>,
    pub failed: Vec<FailedInsert>,
}

/// A single record that could not be inserted.
#[derive(Clone, Debug)]
pub struct FailedInsert {
    /// Position of the record in the submitted batch.
    pub index: usize,
    /// The record's email, when the input carried one.
    pub email: Option<String>,
    pub error: Error,
}

/// Abstraction over the document store holding client records.
///
/// Implementations enforce uniqueness of both `clientId` and `email` and
/// answer the current-maximum query the identifier allocator seeds from.
/// All futures are `Send` so the service can be shared across request
/// tasks.
pub trait ClientStore: Send + Sync {
    /// The current maximum identifier, or `None` when no records exist.
    fn find_max_client_id(&self) -> impl Future<Output = Result<Option<ClientId>>> + Send;

    /// Inserts one record, rejecting duplicates on either unique field.
    fn insert_one(&self, client: Client) -> impl Future<Output = Result<Client>> + Send;

    /// Inserts a batch without ordering guarantees: each record is tried
    /// independently and per-record duplicate failures are reported in the
    /// returned [`BulkReport`] rather than aborting the batch. Fails as a
    /// whole only when the store itself is unreachable.
    fn insert_many(&self, clients: Vec<Client>) -> impl Future<Output = Result<BulkReport>> + Send;

    /// All records, ordered by `clientId`.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Client>>> + Send;
}

impl<S: ClientStore> ClientStore for &S {
    fn find_max_client_id(&self) -> impl Future<Output = Result<Option<ClientId>>> + Send {
        (**self).find_max_client_id()
    }

    fn insert_one(&self, client: Client) -> impl Future<Output = Result<Client>> + Send {
        (**self).insert_one(client)
    }

    fn insert_many(&self, clients: Vec<Client>) -> impl Future<Output = Result<BulkReport>> + Send {
        (**self).insert_many(clients)
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Client>>> + Send {
        (**self).find_all()
    }
}
