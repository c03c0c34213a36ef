//! Response bodies that differ from the core types.

use rolodex::{BulkReport, Client, FailedInsert};
use serde::Serialize;

/// Body of a bulk insert response: the inserted subset plus one entry per
/// rejected record.
#[derive(Debug, Serialize)]
pub struct BulkInsertBody {
    pub inserted: Vec<Client>,
    pub failed: Vec<BulkFailureBody>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkFailureBody {
    /// Position of the record in the submitted array.
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub message: String,
}

impl From<BulkReport> for BulkInsertBody {
    fn from(report: BulkReport) -> Self {
        Self {
            inserted: report.inserted,
            failed: report.failed.into_iter().map(BulkFailureBody::from).collect(),
        }
    }
}

impl From<FailedInsert> for BulkFailureBody {
    fn from(failure: FailedInsert) -> Self {
        Self {
            index: failure.index,
            email: failure.email,
            message: failure.error.to_string(),
        }
    }
}
