// In-memory return store
// Decision: Use parking_lot for thread-safe access
//
// The store owns every record for the lifetime of the process. Reads clone
// out of a read lock; each mutation is one write-locked read-modify-write,
// so readers never observe a half-applied action.

use parking_lot::RwLock;
use uuid::Uuid;

use crate::action::ActionKind;
use crate::error::{Result, ReturnsError};
use crate::record::ReturnRecord;
use crate::seed::generate_returns;
use crate::workflow::{apply_effect, available_actions};

/// Owned set of returns, shared behind an `Arc`.
#[derive(Debug, Default)]
pub struct ReturnStore {
    records: RwLock<Vec<ReturnRecord>>,
}

impl ReturnStore {
    /// Store holding exactly `records`, in the given order.
    pub fn from_records(records: Vec<ReturnRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Store seeded with synthetic returns for `marketplaces`.
    pub fn seeded<S: AsRef<str>>(marketplaces: &[S]) -> Self {
        let records = generate_returns(marketplaces);
        tracing::debug!(count = records.len(), "Seeded return store");
        Self::from_records(records)
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Distinct marketplace names, in storage order.
    pub fn marketplaces(&self) -> Vec<String> {
        let records = self.records.read();
        let mut names: Vec<String> = Vec::new();
        for record in records.iter() {
            if !names.contains(&record.marketplace_name) {
                names.push(record.marketplace_name.clone());
            }
        }
        names
    }

    /// Returns with `is_completed == completed`, optionally limited to one
    /// marketplace. A blank or all-whitespace marketplace means no filter;
    /// otherwise the name must match exactly, padding included.
    pub fn list_by_status(&self, completed: bool, marketplace: Option<&str>) -> Vec<ReturnRecord> {
        let marketplace = marketplace.filter(|m| !m.trim().is_empty());
        self.records
            .read()
            .iter()
            .filter(|r| r.is_completed == completed)
            .filter(|r| marketplace.map_or(true, |m| r.marketplace_name == m))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: Uuid) -> Option<ReturnRecord> {
        self.records.read().iter().find(|r| r.id == id).cloned()
    }

    /// The record (if any) and the actions currently available for it.
    pub fn get_detail(&self, id: Uuid) -> (Option<ReturnRecord>, Vec<ActionKind>) {
        let records = self.records.read();
        let record = records.iter().find(|r| r.id == id);
        let actions = available_actions(record);
        (record.cloned(), actions)
    }

    /// Apply `action` without checking whether it is currently available.
    pub fn apply_action(&self, id: Uuid, action: ActionKind) -> Result<ReturnRecord> {
        let mut records = self.records.write();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ReturnsError::NotFound(id))?;
        apply_effect(record, action);
        Ok(record.clone())
    }

    /// Apply `action` only if it is in the record's available set.
    ///
    /// The availability check and the mutation share one write lock.
    pub fn apply_checked_action(&self, id: Uuid, action: ActionKind) -> Result<ReturnRecord> {
        let mut records = self.records.write();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ReturnsError::NotFound(id))?;
        if !available_actions(Some(&*record)).contains(&action) {
            return Err(ReturnsError::ActionNotAvailable { id, action });
        }
        apply_effect(record, action);
        Ok(record.clone())
    }
}
