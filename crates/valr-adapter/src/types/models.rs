/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support (amounts kept as wire text)
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::enums::{Side, TransactionType};

/// A fiat or crypto currency supported by VALR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub symbol: String,
    pub is_active: bool,
    pub short_name: String,
    pub long_name: String,
}

/// A fiat/crypto or crypto/crypto pair supported by VALR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPair {
    pub symbol: String,
    pub base_currency: String,
    pub quote_currency: String,
    pub short_name: String,
    pub active: bool,
    pub min_base_amount: Amount,
    pub max_base_amount: Amount,
    pub min_quote_amount: Amount,
    pub max_quote_amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub currency_pair: String,
    pub ask_price: Amount,
    pub bid_price: Amount,
    pub last_traded_price: Amount,
    pub previous_close_price: Amount,
    pub base_volume: Amount,
    pub high_price: Amount,
    pub low_price: Amount,
    #[serde(rename = "created")]
    pub created_at: DateTime<Utc>,
    pub change_from_previous: Amount,
}

/// Top of the book. Asks ascend by price, bids descend; equal prices are
/// aggregated by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    #[serde(rename = "Asks", alias = "asks", default)]
    pub asks: Vec<OrderBookEntry>,
    #[serde(rename = "Bids", alias = "bids", default)]
    pub bids: Vec<OrderBookEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookEntry {
    pub side: Side,
    pub quantity: Amount,
    pub price: Amount,
    pub currency_pair: String,
    // Aggregated books only
    #[serde(default)]
    pub order_count: u32,
    // Full (non-aggregated) books only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerTime {
    #[serde(rename = "epochTime")]
    pub epoch_time: i64,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub currency: String,
    pub available: Amount,
    pub reserved: Amount,
    pub total: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A single executed trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub currency_pair: String,
    #[serde(
        rename = "tradeId",
        alias = "id",
        deserialize_with = "serde_helpers::deserialize_string_or_number"
    )]
    pub id: String,
    pub price: Amount,
    pub quantity: Amount,
    pub side: Side,
    pub traded_at: DateTime<Utc>,
}

/// Wallet activity on the account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "transactionType", default, skip_serializing_if = "Option::is_none")]
    pub type_info: Option<TransactionTypeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debit_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debit_value: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_value: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_value: Option<Amount>,
    pub event_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<TransactionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_coin: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_coin_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_pair_symbol: Option<String>,
    #[serde(rename = "orderId", alias = "orderID", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionTypeInfo {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub description: String,
}

/// Default deposit address of a crypto wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositAddress {
    pub currency: String,
    pub address: String,
}

/// Withdrawal limits and costs for a currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalInfo {
    pub currency: String,
    pub minimum_withdraw_amount: Amount,
    pub is_active: bool,
    pub withdraw_cost: Amount,
    #[serde(default)]
    pub supports_payment_reference: bool,
}

/// State of a crypto withdrawal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoWithdrawalStatus {
    pub id: String,
    pub currency: String,
    pub address: String,
    pub amount: Amount,
    #[serde(rename = "feeAmount", default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub confirmations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub status: String,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoDeposit {
    pub currency_code: String,
    pub receive_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    pub amount: Amount,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub confirmations: u32,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<DateTime<Utc>>,
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(raw) => Ok(raw),
            Value::Number(number) => Ok(number.to_string()),
            _ => Err(serde::de::Error::custom("expected a string or number identifier")),
        }
    }
}
