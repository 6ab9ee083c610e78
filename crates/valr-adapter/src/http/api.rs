/*
[INPUT]:  ValrClient endpoint methods
[OUTPUT]: PublicApi (read-only) and PrivateApi (authenticated) capability traits
[POS]:    HTTP layer - capability split over the one concrete client
[UPDATE]: When adding endpoints to either capability set
*/

use async_trait::async_trait;
use std::collections::HashSet;

use crate::http::{Result, ValrClient};
use crate::types::{
    Balance, CryptoDeposit, CryptoWithdrawalStatus, Currency, CurrencyPair, DepositAddress,
    LimitOrderRequest, MarketOrderRequest, MarketSummary, OrderAccepted, OrderBook, OrderType,
    OrderTypeMatrix, PageRequest, ServerStatus, ServerTime, Trade, TradeHistoryRequest,
    Transaction, TransactionHistoryRequest, WithdrawalInfo,
};

/// Endpoints that need no authentication
#[async_trait]
pub trait PublicApi: Send + Sync {
    async fn currencies(&self) -> Result<Vec<Currency>>;

    async fn currency_pairs(&self) -> Result<Vec<CurrencyPair>>;

    async fn market_summary(&self) -> Result<Vec<MarketSummary>>;

    async fn market_summary_for_pair(&self, pair: &str) -> Result<MarketSummary>;

    async fn order_book(&self, pair: &str) -> Result<OrderBook>;

    /// Supported order types for all pairs.
    ///
    /// ```no_run
    /// # async fn demo(api: &dyn valr_adapter::PublicApi) -> valr_adapter::Result<()> {
    /// use valr_adapter::OrderType;
    ///
    /// let matrix = api.order_types().await?;
    /// if matrix.supports("BTCZAR", OrderType::Simple) {
    ///     // simple orders can be placed on BTCZAR
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn order_types(&self) -> Result<OrderTypeMatrix>;

    async fn order_types_for_pair(&self, pair: &str) -> Result<HashSet<OrderType>>;

    async fn server_time(&self) -> Result<ServerTime>;

    async fn status(&self) -> Result<ServerStatus>;
}

/// Endpoints that require a signed request
#[async_trait]
pub trait PrivateApi: Send + Sync {
    async fn balances(&self) -> Result<Vec<Balance>>;

    async fn trade_history(&self, pair: &str, request: &TradeHistoryRequest) -> Result<Vec<Trade>>;

    async fn transaction_history(
        &self,
        request: &TransactionHistoryRequest,
    ) -> Result<Vec<Transaction>>;

    async fn market_trade_history(
        &self,
        pair: &str,
        request: &TradeHistoryRequest,
    ) -> Result<Vec<Trade>>;

    async fn full_order_book(&self, pair: &str) -> Result<OrderBook>;

    async fn deposit_address(&self, currency: &str) -> Result<DepositAddress>;

    async fn withdrawal_info(&self, currency: &str) -> Result<WithdrawalInfo>;

    async fn deposit_history(&self, currency: &str, request: &PageRequest)
        -> Result<Vec<CryptoDeposit>>;

    async fn withdrawal_history(
        &self,
        currency: &str,
        request: &PageRequest,
    ) -> Result<Vec<CryptoWithdrawalStatus>>;

    async fn withdrawal_status(&self, currency: &str, id: &str) -> Result<CryptoWithdrawalStatus>;

    async fn place_limit_order(&self, request: &LimitOrderRequest) -> Result<OrderAccepted>;

    async fn place_market_order(&self, request: &MarketOrderRequest) -> Result<OrderAccepted>;
}

#[async_trait]
impl PublicApi for ValrClient {
    async fn currencies(&self) -> Result<Vec<Currency>> {
        ValrClient::currencies(self).await
    }

    async fn currency_pairs(&self) -> Result<Vec<CurrencyPair>> {
        ValrClient::currency_pairs(self).await
    }

    async fn market_summary(&self) -> Result<Vec<MarketSummary>> {
        ValrClient::market_summary(self).await
    }

    async fn market_summary_for_pair(&self, pair: &str) -> Result<MarketSummary> {
        ValrClient::market_summary_for_pair(self, pair).await
    }

    async fn order_book(&self, pair: &str) -> Result<OrderBook> {
        ValrClient::order_book(self, pair).await
    }

    async fn order_types(&self) -> Result<OrderTypeMatrix> {
        ValrClient::order_types(self).await
    }

    async fn order_types_for_pair(&self, pair: &str) -> Result<HashSet<OrderType>> {
        ValrClient::order_types_for_pair(self, pair).await
    }

    async fn server_time(&self) -> Result<ServerTime> {
        ValrClient::server_time(self).await
    }

    async fn status(&self) -> Result<ServerStatus> {
        ValrClient::status(self).await
    }
}

#[async_trait]
impl PrivateApi for ValrClient {
    async fn balances(&self) -> Result<Vec<Balance>> {
        ValrClient::balances(self).await
    }

    async fn trade_history(&self, pair: &str, request: &TradeHistoryRequest) -> Result<Vec<Trade>> {
        ValrClient::trade_history(self, pair, request).await
    }

    async fn transaction_history(
        &self,
        request: &TransactionHistoryRequest,
    ) -> Result<Vec<Transaction>> {
        ValrClient::transaction_history(self, request).await
    }

    async fn market_trade_history(
        &self,
        pair: &str,
        request: &TradeHistoryRequest,
    ) -> Result<Vec<Trade>> {
        ValrClient::market_trade_history(self, pair, request).await
    }

    async fn full_order_book(&self, pair: &str) -> Result<OrderBook> {
        ValrClient::full_order_book(self, pair).await
    }

    async fn deposit_address(&self, currency: &str) -> Result<DepositAddress> {
        ValrClient::deposit_address(self, currency).await
    }

    async fn withdrawal_info(&self, currency: &str) -> Result<WithdrawalInfo> {
        ValrClient::withdrawal_info(self, currency).await
    }

    async fn deposit_history(
        &self,
        currency: &str,
        request: &PageRequest,
    ) -> Result<Vec<CryptoDeposit>> {
        ValrClient::deposit_history(self, currency, request).await
    }

    async fn withdrawal_history(
        &self,
        currency: &str,
        request: &PageRequest,
    ) -> Result<Vec<CryptoWithdrawalStatus>> {
        ValrClient::withdrawal_history(self, currency, request).await
    }

    async fn withdrawal_status(&self, currency: &str, id: &str) -> Result<CryptoWithdrawalStatus> {
        ValrClient::withdrawal_status(self, currency, id).await
    }

    async fn place_limit_order(&self, request: &LimitOrderRequest) -> Result<OrderAccepted> {
        ValrClient::place_limit_order(self, request).await
    }

    async fn place_market_order(&self, request: &MarketOrderRequest) -> Result<OrderAccepted> {
        ValrClient::place_market_order(self, request).await
    }
}
