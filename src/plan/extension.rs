#![forbid(unsafe_code)]

//! Opaque side-channel payloads attached to a whole document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Side-channel blob carried by a document outside the relational model.
///
/// Both parts are opaque to this crate and to most receivers: an
/// `enhancement` changes how the receiving engine must interpret the plan,
/// while an `optimization` is advisory and may be ignored. Either, both,
/// or neither may be set; a payload with neither part set is legal but
/// carries nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionPayload {
    /// Semantics-bearing attachment the receiver must honor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhancement: Option<Value>,
    /// Advisory attachment the receiver may ignore.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimization: Option<Value>,
}

impl ExtensionPayload {
    /// Creates a payload carrying only an enhancement.
    pub fn enhancement(value: Value) -> Self {
        Self {
            enhancement: Some(value),
            optimization: None,
        }
    }

    /// Creates a payload carrying only an optimization hint.
    pub fn optimization(value: Value) -> Self {
        Self {
            enhancement: None,
            optimization: Some(value),
        }
    }
}
