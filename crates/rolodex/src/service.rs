//! The client service: validation, identifier allocation, persistence.

use crate::{
    BulkReport, Client, ClientDraft, ClientStore, Error, FailedInsert, IdAllocator, NewClient,
    Result, SystemClock, TimeSource,
};
use serde_json::Value;

/// Orchestrates creation and listing of client records.
///
/// The service owns the [`IdAllocator`], seeded once from the store's
/// current maximum when the service connects. Every insert path goes
/// through the allocator, so concurrent single and bulk creations always
/// receive disjoint identifiers.
#[derive(Debug)]
pub struct ClientService<S, T = SystemClock> {
    store: S,
    allocator: IdAllocator,
    clock: T,
}

impl<S: ClientStore> ClientService<S> {
    /// Connects to the store with the system clock.
    ///
    /// Fails with [`Error::StoreUnavailable`] when the store cannot answer
    /// the current-maximum query.
    pub async fn connect(store: S) -> Result<Self> {
        Self::with_clock(store, SystemClock).await
    }
}

impl<S: ClientStore, T: TimeSource> ClientService<S, T> {
    /// Connects with an explicit time source.
    pub async fn with_clock(store: S, clock: T) -> Result<Self> {
        let max = store.find_max_client_id().await?;
        Ok(Self {
            store,
            allocator: IdAllocator::from_max(max),
            clock,
        })
    }

    /// All client records, ordered by identifier. Filtering, sorting, and
    /// pagination are left to the caller.
    pub async fn list_clients(&self) -> Result<Vec<Client>> {
        self.store.find_all().await
    }

    /// Validates and persists a single record.
    pub async fn create_one(&self, draft: ClientDraft) -> Result<Client> {
        let new_client = NewClient::try_from(draft)?;
        let client = new_client.into_client(self.allocator.next_id(), self.clock.now());
        let created = self.store.insert_one(client).await?;
        tracing::debug!(client_id = %created.client_id, "created client");
        Ok(created)
    }

    /// Validates and persists a batch of records.
    ///
    /// The payload must be a JSON array; anything else is rejected whole
    /// with [`Error::InvalidPayload`]. Identifiers are reserved for the
    /// entire batch up front, then each record is deserialized, validated,
    /// and inserted independently: malformed elements, validation failures,
    /// and duplicate emails all land in [`BulkReport::failed`] without
    /// touching the rest of the batch. Only an unreachable store fails the
    /// call as a whole.
    pub async fn create_bulk(&self, payload: Value) -> Result<BulkReport> {
        let Value::Array(entries) = payload else {
            return Err(Error::InvalidPayload {
                reason: "data must be an array".into(),
            });
        };

        let ids = self.allocator.block(entries.len());
        let now = self.clock.now();

        // Records that survive validation, paired with their position in
        // the original payload so failures can be reported against it.
        let mut indexes = Vec::with_capacity(entries.len());
        let mut clients = Vec::with_capacity(entries.len());
        let mut rejected = Vec::new();

        for ((index, entry), id) in entries.into_iter().enumerate().zip(ids) {
            let draft: ClientDraft = match serde_json::from_value(entry) {
                Ok(draft) => draft,
                Err(err) => {
                    rejected.push(FailedInsert {
                        index,
                        email: None,
                        error: Error::InvalidPayload {
                            reason: format!("record must be an object: {err}"),
                        },
                    });
                    continue;
                }
            };
            let email = draft.email.clone();
            match NewClient::try_from(draft) {
                Ok(new_client) => {
                    indexes.push(index);
                    clients.push(new_client.into_client(id, now));
                }
                Err(error) => rejected.push(FailedInsert {
                    index,
                    email,
                    error,
                }),
            }
        }

        let mut report = self.store.insert_many(clients).await?;
        for failure in &mut report.failed {
            failure.index = indexes[failure.index];
        }
        report.failed.extend(rejected);
        report.failed.sort_by_key(|failure| failure.index);

        tracing::debug!(
            inserted = report.inserted.len(),
            failed = report.failed.len(),
            "bulk insert finished"
        );
        Ok(report)
    }
}
