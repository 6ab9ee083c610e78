/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs (query options and JSON bodies)
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::enums::{Side, TransactionType};
use crate::http::params::comma_separated;

/// Query options for account and market trade history
///
/// GET /account/{pair}/tradehistory
/// GET /marketdata/{pair}/tradehistory
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradeHistoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Query options for the account transaction history
///
/// GET /account/transactionhistory
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHistoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "comma_separated"
    )]
    pub transaction_types: Vec<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(rename = "beforeId", skip_serializing_if = "Option::is_none")]
    pub before_id: Option<String>,
}

/// Paging options for wallet history endpoints
///
/// GET /wallet/crypto/{currency}/deposit/history
/// GET /wallet/crypto/{currency}/withdraw/history
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// POST /orders/limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_id: Option<String>,
    pub pair: String,
    pub side: Side,
    pub quantity: Amount,
    pub price: Amount,
    #[serde(default)]
    pub post_only: bool,
}

/// POST /orders/market
///
/// Exactly one of `base_amount` and `quote_amount` should be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_id: Option<String>,
    pub pair: String,
    pub side: Side,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_amount: Option<Amount>,
}
