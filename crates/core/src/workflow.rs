// Return approval workflow
//
// The workflow is a decision table over the record's flags rather than a
// state machine with named states. Precedence:
//   1. missing, completed or voided  -> nothing
//   2. shipping labels sent          -> ApproveFullRefund, Void
//   3. partial refund rejected       -> SendShippingLabels
//   4. partial refund accepted       -> nothing (waiting on the customer)
//   5. otherwise                     -> every action
// Lists keep ActionKind declaration order.

use uuid::Uuid;

use crate::action::ActionKind;
use crate::hash::stable_hash;
use crate::record::ReturnRecord;

/// Actions an operator may currently apply to `record`.
pub fn available_actions(record: Option<&ReturnRecord>) -> Vec<ActionKind> {
    let Some(record) = record else {
        return Vec::new();
    };

    if record.is_closed() {
        return Vec::new();
    }

    let allowed: &[ActionKind] = if record.shipping_labels_sent {
        &[ActionKind::ApproveFullRefund, ActionKind::Void]
    } else if record.partial_refund_rejected {
        &[ActionKind::SendShippingLabels]
    } else if record.partial_refund_accepted {
        &[]
    } else {
        &ActionKind::ALL
    };

    ActionKind::ALL
        .into_iter()
        .filter(|action| allowed.contains(action))
        .collect()
}

/// Whether the customer accepts a partial refund offer for this return.
///
/// Derived from the id alone so repeated offers always agree.
pub fn partial_refund_accepted(id: Uuid) -> bool {
    stable_hash(&id.hyphenated().to_string()) % 2 == 0
}

/// Apply the flag changes for `action`. Does not consult `available_actions`.
pub fn apply_effect(record: &mut ReturnRecord, action: ActionKind) {
    match action {
        ActionKind::Void => {
            record.is_voided = true;
            record.is_completed = true;
        }
        ActionKind::ApproveFullRefund => {
            record.is_completed = true;
        }
        ActionKind::OfferPartialRefund => {
            // Exactly one outcome, and never flipped once decided
            if !record.partial_refund_accepted && !record.partial_refund_rejected {
                if partial_refund_accepted(record.id) {
                    record.partial_refund_accepted = true;
                } else {
                    record.partial_refund_rejected = true;
                }
            }
        }
        ActionKind::SendShippingLabels => {
            record.shipping_labels_sent = true;
        }
    }
}
