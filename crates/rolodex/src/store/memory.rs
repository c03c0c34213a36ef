use super::{BulkReport, ClientStore, FailedInsert};
use crate::{Client, ClientId, Error, Result};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

/// In-process document store for client records.
///
/// Records live in a [`BTreeMap`] keyed by `clientId` (so scans come back
/// in identifier order) with a secondary uniqueness index on `email`.
/// Mutations go through a [`RwLock`]; no lock is ever held across an await
/// point.
///
/// With [`MemoryStore::open`], every mutation also writes a JSON snapshot
/// of all records to disk (temp file, then rename, so a crash mid-write
/// leaves the previous snapshot intact). Reopening the same path restores
/// the records and, with them, the identifier high-water mark.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Records>,
    snapshot: Option<PathBuf>,
}

#[derive(Debug, Default)]
struct Records {
    by_id: BTreeMap<u64, Client>,
    by_email: HashMap<String, u64>,
}

impl Records {
    fn insert(&mut self, client: Client) -> Result<Client> {
        let id = client.client_id.get();
        if self.by_id.contains_key(&id) {
            return Err(Error::DuplicateClientId {
                id: client.client_id,
            });
        }
        if self.by_email.contains_key(&client.email) {
            return Err(Error::DuplicateEmail {
                email: client.email.clone(),
            });
        }
        self.by_email.insert(client.email.clone(), id);
        self.by_id.insert(id, client.clone());
        Ok(client)
    }
}

impl MemoryStore {
    /// Creates an empty store with no on-disk backing.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Records::default()),
            snapshot: None,
        }
    }

    /// Opens a store backed by a JSON snapshot file.
    ///
    /// A missing file is treated as an empty store; it is created on the
    /// first mutation. An unreadable or corrupt snapshot surfaces as
    /// [`Error::StoreUnavailable`] rather than silently starting empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut records = Records::default();
        match fs::read(&path) {
            Ok(bytes) => {
                let clients: Vec<Client> = serde_json::from_slice(&bytes).map_err(|err| {
                    Error::unavailable(format!("corrupt snapshot {}: {err}", path.display()))
                })?;
                for client in clients {
                    records.insert(client).map_err(|err| {
                        Error::unavailable(format!(
                            "snapshot {} violates uniqueness: {err}",
                            path.display()
                        ))
                    })?;
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                return Err(Error::unavailable(format!(
                    "read {}: {err}",
                    path.display()
                )));
            }
        }
        Ok(Self {
            inner: RwLock::new(records),
            snapshot: Some(path),
        })
    }

    fn persist(&self, records: &Records) -> Result<()> {
        let Some(path) = &self.snapshot else {
            return Ok(());
        };
        let clients: Vec<&Client> = records.by_id.values().collect();
        let bytes = serde_json::to_vec_pretty(&clients)
            .map_err(|err| Error::unavailable(format!("encode snapshot: {err}")))?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, &bytes)
            .map_err(|err| Error::unavailable(format!("write {}: {err}", tmp.display())))?;
        fs::rename(&tmp, path)
            .map_err(|err| Error::unavailable(format!("rename {}: {err}", path.display())))?;
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientStore for MemoryStore {
    async fn find_max_client_id(&self) -> Result<Option<ClientId>> {
        let records = self.inner.read();
        Ok(records.by_id.keys().next_back().copied().map(ClientId::new))
    }

    async fn insert_one(&self, client: Client) -> Result<Client> {
        let mut records = self.inner.write();
        let inserted = records.insert(client)?;
        self.persist(&records)?;
        Ok(inserted)
    }

    async fn insert_many(&self, clients: Vec<Client>) -> Result<BulkReport> {
        let mut records = self.inner.write();
        let mut report = BulkReport::default();
        for (index, client) in clients.into_iter().enumerate() {
            let email = Some(client.email.clone());
            match records.insert(client) {
                Ok(inserted) => report.inserted.push(inserted),
                Err(error) => report.failed.push(FailedInsert {
                    index,
                    email,
                    error,
                }),
            }
        }
        self.persist(&records)?;
        Ok(report)
    }

    async fn find_all(&self) -> Result<Vec<Client>> {
        Ok(self.inner.read().by_id.values().cloned().collect())
    }
}
