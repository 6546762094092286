//! Display projection of a need.

use serde::Serialize;

use crate::NeedType;

/// Read-only view of one need, handed to display and economy code.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NeedSnapshot {
    pub need_type:        NeedType,
    pub display_name:     String,
    pub current_value:    f32,
    pub max_value:        f32,
    pub normalized_value: f32,
    pub is_critical:      bool,
}
