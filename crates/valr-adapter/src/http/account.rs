/*
[INPUT]:  Currency pairs and history query options
[OUTPUT]: Account data (balances, trades, transactions) and signed market data
[POS]:    HTTP layer - private account endpoints (signed with API key)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use crate::http::{Result, ValrClient};
use crate::types::{Balance, OrderBook, Trade, TradeHistoryRequest, Transaction, TransactionHistoryRequest};

impl ValrClient {
    /// Balances of every currency in the account
    ///
    /// GET /account/balances
    pub async fn balances(&self) -> Result<Vec<Balance>> {
        self.get_private_json::<(), _>(&["account", "balances"], None)
            .await
            .map_err(|e| e.context("failed to fetch account balances"))
    }

    /// Recent trades on `pair` for this account (the exchange caps at 100)
    ///
    /// GET /account/{pair}/tradehistory?limit={limit}
    pub async fn trade_history(&self, pair: &str, request: &TradeHistoryRequest) -> Result<Vec<Trade>> {
        self.get_private_json(&["account", pair, "tradehistory"], Some(request))
            .await
            .map_err(|e| e.context("failed to fetch trade history"))
    }

    /// Wallet activity, newest first
    ///
    /// GET /account/transactionhistory
    pub async fn transaction_history(
        &self,
        request: &TransactionHistoryRequest,
    ) -> Result<Vec<Transaction>> {
        self.get_private_json(&["account", "transactionhistory"], Some(request))
            .await
            .map_err(|e| e.context("failed to fetch transaction history"))
    }

    /// Recent trades on `pair` across the whole market
    ///
    /// GET /marketdata/{pair}/tradehistory?limit={limit}
    pub async fn market_trade_history(
        &self,
        pair: &str,
        request: &TradeHistoryRequest,
    ) -> Result<Vec<Trade>> {
        self.get_private_json(&["marketdata", pair, "tradehistory"], Some(request))
            .await
            .map_err(|e| e.context("failed to fetch market trade history"))
    }

    /// Every order in the book, not aggregated by price
    ///
    /// GET /marketdata/{pair}/orderbook/full
    pub async fn full_order_book(&self, pair: &str) -> Result<OrderBook> {
        self.get_private_json::<(), _>(&["marketdata", pair, "orderbook", "full"], None)
            .await
            .map_err(|e| e.context("failed to fetch full order book"))
    }
}
