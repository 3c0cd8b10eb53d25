// Return service - business logic for the returns workflow
//
// Wraps the shared ReturnStore with response latency and the
// action-availability policy chosen at startup.

use returns_core::{ActionKind, ActionView, ReturnDetail, ReturnRecord, ReturnStore, ReturnsError};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::config::ResponseDelays;

pub struct ReturnService {
    store: Arc<ReturnStore>,
    delays: ResponseDelays,
    enforce_available_actions: bool,
}

impl ReturnService {
    pub fn new(
        store: Arc<ReturnStore>,
        delays: ResponseDelays,
        enforce_available_actions: bool,
    ) -> Self {
        Self {
            store,
            delays,
            enforce_available_actions,
        }
    }

    pub fn store(&self) -> &Arc<ReturnStore> {
        &self.store
    }

    /// Returns that are still open, optionally for one marketplace
    pub async fn list_pending(&self, marketplace: Option<&str>) -> Vec<ReturnRecord> {
        pause(self.delays.list).await;
        self.store.list_by_status(false, marketplace)
    }

    /// Returns that reached a final state, optionally for one marketplace
    pub async fn list_completed(&self, marketplace: Option<&str>) -> Vec<ReturnRecord> {
        pause(self.delays.list).await;
        self.store.list_by_status(true, marketplace)
    }

    /// Detail as of response time; the lookup runs after the pause
    pub async fn get_detail(&self, id: Uuid) -> ReturnDetail {
        pause(self.delays.detail).await;
        let (record, actions) = self.store.get_detail(id);
        ReturnDetail {
            record,
            available_actions: actions.into_iter().map(ActionView::from).collect(),
        }
    }

    /// Decode `code` and apply it to the return
    pub fn apply_action(&self, id: Uuid, code: i64) -> Result<ReturnRecord, ReturnsError> {
        let action = ActionKind::from_code(code)?;
        let record = if self.enforce_available_actions {
            self.store.apply_checked_action(id, action)?
        } else {
            self.store.apply_action(id, action)?
        };

        tracing::info!(
            return_id = %id,
            action = %action,
            completed = record.is_completed,
            voided = record.is_voided,
            "Applied return action"
        );
        Ok(record)
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
