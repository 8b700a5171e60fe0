//! Employee DAO, its in-memory implementation, and the guarding proxy.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Client allowed to mutate the employee table.
const ADMIN_CLIENT: &str = "ADMIN";

/// Data-access failure.
///
/// The simulated failure mode of this example: the demo prints the message
/// and continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DaoError {
    #[error("access denied for client: {0}")]
    AccessDenied(String),

    #[error("employee not found: {0}")]
    NotFound(EmployeeId),
}

/// Employee identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One row in the employee table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl EmployeeRecord {
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

/// Data-access interface for the employee table.
///
/// `client` names the caller; the real implementation ignores it, the proxy
/// checks it.
pub trait EmployeeDao {
    fn create(&mut self, client: &str, record: EmployeeRecord) -> Result<(), DaoError>;

    fn delete(&mut self, client: &str, id: EmployeeId) -> Result<(), DaoError>;

    fn get(&self, client: &str, id: EmployeeId) -> Result<EmployeeRecord, DaoError>;
}

/// Real implementation: an in-memory table standing in for a database.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeDao {
    rows: HashMap<EmployeeId, EmployeeRecord>,
}

impl InMemoryEmployeeDao {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl EmployeeDao for InMemoryEmployeeDao {
    fn create(&mut self, _client: &str, record: EmployeeRecord) -> Result<(), DaoError> {
        tracing::info!(employee_id = %record.id, "created row in the employee table");
        self.rows.insert(record.id, record);
        Ok(())
    }

    fn delete(&mut self, _client: &str, id: EmployeeId) -> Result<(), DaoError> {
        match self.rows.remove(&id) {
            Some(_) => {
                tracing::info!(employee_id = %id, "deleted row from the employee table");
                Ok(())
            }
            None => Err(DaoError::NotFound(id)),
        }
    }

    fn get(&self, _client: &str, id: EmployeeId) -> Result<EmployeeRecord, DaoError> {
        tracing::debug!(employee_id = %id, "fetching row from the employee table");
        self.rows.get(&id).cloned().ok_or(DaoError::NotFound(id))
    }
}

/// Proxy: access check in front of any [`EmployeeDao`].
///
/// Mutating operations require the `ADMIN` client; reads pass through for
/// everyone.
#[derive(Debug, Default)]
pub struct EmployeeDaoProxy<D> {
    inner: D,
}

impl<D: EmployeeDao> EmployeeDaoProxy<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    fn ensure_admin(client: &str) -> Result<(), DaoError> {
        if client == ADMIN_CLIENT {
            Ok(())
        } else {
            Err(DaoError::AccessDenied(client.to_string()))
        }
    }
}

impl<D: EmployeeDao> EmployeeDao for EmployeeDaoProxy<D> {
    fn create(&mut self, client: &str, record: EmployeeRecord) -> Result<(), DaoError> {
        Self::ensure_admin(client)?;
        self.inner.create(client, record)
    }

    fn delete(&mut self, client: &str, id: EmployeeId) -> Result<(), DaoError> {
        Self::ensure_admin(client)?;
        self.inner.delete(client, id)
    }

    fn get(&self, client: &str, id: EmployeeId) -> Result<EmployeeRecord, DaoError> {
        self.inner.get(client, id)
    }
}
