/*
[INPUT]:  Currency pair identifiers
[OUTPUT]: Market data (currencies, pairs, summaries, order books, order types, time, status)
[POS]:    HTTP layer - public market data endpoints (never signed)
[UPDATE]: When adding new public endpoints or changing response format
*/

use std::collections::HashSet;

use crate::http::{Result, ValrClient};
use crate::types::responses::StatusResponse;
use crate::types::{
    order_type_set, Currency, CurrencyPair, MarketSummary, OrderBook, OrderType, OrderTypeMatrix,
    OrderTypesEntry, ServerStatus, ServerTime,
};

impl ValrClient {
    /// Currencies supported by VALR
    ///
    /// GET /public/currencies
    pub async fn currencies(&self) -> Result<Vec<Currency>> {
        self.get_json(&["public", "currencies"], None)
            .await
            .map_err(|e| e.context("failed to fetch currencies"))
    }

    /// Currency pairs supported by VALR
    ///
    /// GET /public/pairs
    pub async fn currency_pairs(&self) -> Result<Vec<CurrencyPair>> {
        self.get_json(&["public", "pairs"], None)
            .await
            .map_err(|e| e.context("failed to fetch currency pairs"))
    }

    /// Market summary for every pair
    ///
    /// GET /public/marketsummary
    pub async fn market_summary(&self) -> Result<Vec<MarketSummary>> {
        self.get_json(&["public", "marketsummary"], None)
            .await
            .map_err(|e| e.context("failed to fetch market summaries"))
    }

    /// GET /public/{pair}/marketsummary
    pub async fn market_summary_for_pair(&self, pair: &str) -> Result<MarketSummary> {
        self.get_json(&["public", pair, "marketsummary"], None)
            .await
            .map_err(|e| e.context("failed to fetch market summary"))
    }

    /// Top 20 aggregated bids and asks
    ///
    /// GET /public/{pair}/orderbook
    pub async fn order_book(&self, pair: &str) -> Result<OrderBook> {
        self.get_json(&["public", pair, "orderbook"], None)
            .await
            .map_err(|e| e.context("failed to fetch order book"))
    }

    /// Order types supported by every pair
    ///
    /// GET /public/ordertypes
    pub async fn order_types(&self) -> Result<OrderTypeMatrix> {
        let entries: Vec<OrderTypesEntry> = self
            .get_json(&["public", "ordertypes"], None)
            .await
            .map_err(|e| e.context("failed to fetch order types"))?;
        Ok(OrderTypeMatrix::from_entries(entries))
    }

    /// GET /public/{pair}/ordertypes
    pub async fn order_types_for_pair(&self, pair: &str) -> Result<HashSet<OrderType>> {
        let order_types: Vec<OrderType> = self
            .get_json(&["public", pair, "ordertypes"], None)
            .await
            .map_err(|e| e.context("failed to fetch order types for pair"))?;
        Ok(order_type_set(order_types))
    }

    /// GET /public/time
    pub async fn server_time(&self) -> Result<ServerTime> {
        self.get_json(&["public", "time"], None)
            .await
            .map_err(|e| e.context("failed to fetch server time"))
    }

    /// GET /public/status
    pub async fn status(&self) -> Result<ServerStatus> {
        let status: StatusResponse = self
            .get_json(&["public", "status"], None)
            .await
            .map_err(|e| e.context("failed to fetch status"))?;
        Ok(status.into())
    }
}
