//! The client record and its input shapes.
//!
//! A record travels through three forms: [`ClientDraft`] (whatever the
//! caller sent, every field optional), [`NewClient`] (validated input), and
//! [`Client`] (the persisted record, with identifier and timestamps
//! attached). Validation is explicit: a draft either converts into a
//! `NewClient` or produces a typed error naming the offending field.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Unique, monotonically assigned identifier of a client record.
///
/// Serialized transparently as a JSON number, so the wire format stays a
/// plain integer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ClientId(u64);

impl ClientId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the underlying integer value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed enumeration of client kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    Individual,
    Company,
}

impl ClientType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Company => "company",
        }
    }
}

impl FromStr for ClientType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "individual" => Ok(Self::Individual),
            "company" => Ok(Self::Company),
            other => Err(Error::InvalidField {
                field: "clientType",
                reason: format!("must be `individual` or `company`, got `{other}`"),
            }),
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted client record.
///
/// Field names serialize in camelCase; this is the wire format the HTTP
/// surface exposes and the snapshot format the store writes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub client_id: ClientId,
    pub client_name: String,
    pub client_type: ClientType,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Unvalidated creation input, exactly as the caller sent it.
///
/// Every field is optional at the serde level so that missing fields reach
/// validation as `None` instead of failing inside the deserializer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientDraft {
    pub client_name: Option<String>,
    pub client_type: Option<String>,
    pub email: Option<String>,
}

impl ClientDraft {
    /// Convenience constructor with every field present.
    pub fn new(
        client_name: impl Into<String>,
        client_type: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            client_name: Some(client_name.into()),
            client_type: Some(client_type.into()),
            email: Some(email.into()),
        }
    }
}

/// Validated creation input, ready for identifier assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewClient {
    pub client_name: String,
    pub client_type: ClientType,
    pub email: String,
}

impl NewClient {
    /// Attaches an identifier and creation timestamps, producing the record
    /// to persist. Both timestamps are set to `now`; records are never
    /// updated in place.
    pub fn into_client(self, client_id: ClientId, now: DateTime<Utc>) -> Client {
        Client {
            client_id,
            client_name: self.client_name,
            client_type: self.client_type,
            email: self.email,
            created_at: now,
            updated_at: now,
        }
    }
}

impl TryFrom<ClientDraft> for NewClient {
    type Error = Error;

    fn try_from(draft: ClientDraft) -> Result<Self> {
        let client_name = required(draft.client_name, "clientName")?;
        let client_type = required(draft.client_type, "clientType")?.parse()?;
        let email = required(draft.email, "email")?;
        Ok(Self {
            client_name,
            client_type,
            email,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingField { field }),
    }
}
