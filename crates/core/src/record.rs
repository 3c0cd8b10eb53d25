// Return domain types
//
// These types represent a customer return and the detail view served to
// operators. Used by both the store and the API crate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::ActionView;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A customer product return moving through the approval workflow.
///
/// Flags only ever move from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReturnRecord {
    /// Unique identifier for the return.
    pub id: Uuid,
    /// Sales channel the return originates from.
    #[cfg_attr(feature = "openapi", schema(example = "Amazon"))]
    pub marketplace_name: String,
    /// Return was rejected by the marketplace.
    pub is_rejected: bool,
    /// Return reached a final state (refunded or voided).
    pub is_completed: bool,
    /// Return was voided by an operator.
    pub is_voided: bool,
    /// Shipping labels were sent to the customer.
    pub shipping_labels_sent: bool,
    /// Customer accepted a partial refund offer.
    pub partial_refund_accepted: bool,
    /// Customer rejected a partial refund offer.
    pub partial_refund_rejected: bool,
}

impl ReturnRecord {
    /// Fresh pending return with every flag cleared.
    pub fn new(id: Uuid, marketplace_name: impl Into<String>) -> Self {
        Self {
            id,
            marketplace_name: marketplace_name.into(),
            is_rejected: false,
            is_completed: false,
            is_voided: false,
            shipping_labels_sent: false,
            partial_refund_accepted: false,
            partial_refund_rejected: false,
        }
    }

    /// Completed or voided; nothing may change afterwards.
    pub fn is_closed(&self) -> bool {
        self.is_completed || self.is_voided
    }
}

/// Detail view for a single return: `{return, availableActions}`.
///
/// `return` is null when the id is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReturnDetail {
    /// The return, if one matched the id.
    #[serde(rename = "return")]
    pub record: Option<ReturnRecord>,
    /// Actions an operator may currently apply, in declaration order.
    pub available_actions: Vec<ActionView>,
}
