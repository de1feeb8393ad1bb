/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums and purchase constants
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Minimum number of points the service sells in one order
pub const MIN_POINTS: u32 = 100;

/// Purchase granularity; the server rounds other amounts down to a multiple
pub const POINT_MULTIPLE: u32 = 100;

/// Lifecycle state of a buy order.
///
/// Orders can stay pending for up to 30 minutes while the supplier fills
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    /// Statuses the server introduces after this crate was released
    #[serde(other)]
    Unknown,
}

/// Whether a string is a Steam64ID in the form the buy endpoint accepts
pub fn is_steam64_id(value: &str) -> bool {
    value.len() == 17
        && value.starts_with("76561199")
        && value.chars().all(|c| c.is_ascii_digit())
}

/// Whether a string is one of the account references the buy endpoint
/// accepts: an `https://` profile URL or a Steam64ID.
///
/// Advisory only; the server owns the final verdict on the target account.
pub fn is_valid_steam_link(value: &str) -> bool {
    value.starts_with("https://") || is_steam64_id(value)
}
