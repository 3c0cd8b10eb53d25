// Return action types
//
// ActionKind is the closed set of operator-triggered transitions.
// On the wire it is the integer code (1..=4); ActionView pairs the code
// with its display label.

use serde::{Deserialize, Serialize};

use crate::error::ReturnsError;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Operator-triggered transition applied to a return.
///
/// Declaration order is significant: available-action lists are always
/// reported in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum ActionKind {
    OfferPartialRefund = 1,
    SendShippingLabels = 2,
    ApproveFullRefund = 3,
    Void = 4,
}

impl ActionKind {
    /// All actions in declaration order.
    pub const ALL: [ActionKind; 4] = [
        ActionKind::OfferPartialRefund,
        ActionKind::SendShippingLabels,
        ActionKind::ApproveFullRefund,
        ActionKind::Void,
    ];

    /// Integer code used on the wire.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable label shown to operators.
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::OfferPartialRefund => "Offer Partial Refund",
            ActionKind::SendShippingLabels => "Send Shipping Labels",
            ActionKind::ApproveFullRefund => "Approve Full Refund",
            ActionKind::Void => "Void",
        }
    }

    /// Decode a wire code, failing with `InvalidAction` outside 1..=4.
    pub fn from_code(code: i64) -> Result<Self, ReturnsError> {
        match code {
            1 => Ok(ActionKind::OfferPartialRefund),
            2 => Ok(ActionKind::SendShippingLabels),
            3 => Ok(ActionKind::ApproveFullRefund),
            4 => Ok(ActionKind::Void),
            other => Err(ReturnsError::InvalidAction(other)),
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<i64> for ActionKind {
    type Error = ReturnsError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        ActionKind::from_code(code)
    }
}

impl From<ActionKind> for u8 {
    fn from(action: ActionKind) -> Self {
        action.code()
    }
}

/// Action as presented to clients: `{code, name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ActionView {
    /// Integer action code (1 = Offer Partial Refund, 2 = Send Shipping Labels,
    /// 3 = Approve Full Refund, 4 = Void).
    #[cfg_attr(feature = "openapi", schema(value_type = u8, example = 4))]
    pub code: ActionKind,
    /// Display label for the action.
    #[cfg_attr(feature = "openapi", schema(example = "Void"))]
    pub name: String,
}

impl From<ActionKind> for ActionView {
    fn from(action: ActionKind) -> Self {
        Self {
            code: action,
            name: action.label().to_string(),
        }
    }
}
