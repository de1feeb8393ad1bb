/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::OrderStatus;

/// Current price of one Steam Point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointPrice {
    pub price: Decimal,
    pub currency: String,
}

/// A placed buy order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub puan: u32,
    pub steam_link: String,
    pub status: OrderStatus,
}

/// Account balance for an API key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub balance: Decimal,
    pub currency: String,
}
