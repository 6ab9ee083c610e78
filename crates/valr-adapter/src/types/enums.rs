/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "BUY", alias = "buy")]
    Buy,
    #[serde(rename = "SELL", alias = "sell")]
    Sell,
    #[serde(rename = "unknown", other)]
    Unknown,
}

/// Order placement types a currency pair may support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Limit order that is cancelled instead of matching
    #[serde(rename = "post-only limit", alias = "LIMIT_POST_ONLY")]
    PostOnly,
    #[serde(rename = "limit", alias = "PLACE_LIMIT")]
    Limit,
    /// Market order (crypto-to-ZAR pairs only)
    #[serde(rename = "market", alias = "PLACE_MARKET")]
    Market,
    /// Like a market order, but crypto-to-crypto pairs are allowed
    #[serde(rename = "simple", alias = "SIMPLE")]
    Simple,
    #[serde(rename = "unknown", other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    LimitBuy,
    LimitSell,
    MarketBuy,
    MarketSell,
    SimpleBuy,
    SimpleSell,
    MakerReward,
    BlockchainReceive,
    BlockchainSend,
    FiatDeposit,
    FiatWithdrawal,
    ReferralRebate,
    ReferralReward,
    PromotionalRebate,
    InternalTransfer,
    FiatWithdrawalReversal,
    #[serde(other)]
    Unknown,
}

/// Operational status of the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerStatus {
    /// All functionality is available
    #[serde(rename = "online")]
    Online,
    /// Only GET and OPTIONS requests are accepted; everything else gets a 503
    #[serde(rename = "read-only")]
    ReadOnly,
    #[serde(rename = "unknown", other)]
    Unknown,
}
