/*
[INPUT]:  Currency codes, withdrawal ids and paging options
[OUTPUT]: Crypto wallet data (deposit addresses, withdrawal info and history)
[POS]:    HTTP layer - private crypto wallet endpoints (signed with API key)
[UPDATE]: When adding new wallet endpoints
*/

use crate::http::{Result, ValrClient};
use crate::types::{CryptoDeposit, CryptoWithdrawalStatus, DepositAddress, PageRequest, WithdrawalInfo};

impl ValrClient {
    /// Default deposit address for a currency
    ///
    /// GET /wallet/crypto/{currency}/deposit/address
    pub async fn deposit_address(&self, currency: &str) -> Result<DepositAddress> {
        self.get_private_json::<(), _>(&["wallet", "crypto", currency, "deposit", "address"], None)
            .await
            .map_err(|e| e.context("failed to fetch default deposit address"))
    }

    /// Minimum amount and cost of withdrawing a currency
    ///
    /// GET /wallet/crypto/{currency}/withdraw
    pub async fn withdrawal_info(&self, currency: &str) -> Result<WithdrawalInfo> {
        self.get_private_json::<(), _>(&["wallet", "crypto", currency, "withdraw"], None)
            .await
            .map_err(|e| e.context("failed to fetch withdrawal info"))
    }

    /// GET /wallet/crypto/{currency}/deposit/history
    pub async fn deposit_history(
        &self,
        currency: &str,
        request: &PageRequest,
    ) -> Result<Vec<CryptoDeposit>> {
        self.get_private_json(&["wallet", "crypto", currency, "deposit", "history"], Some(request))
            .await
            .map_err(|e| e.context("failed to fetch deposit history"))
    }

    /// GET /wallet/crypto/{currency}/withdraw/history
    pub async fn withdrawal_history(
        &self,
        currency: &str,
        request: &PageRequest,
    ) -> Result<Vec<CryptoWithdrawalStatus>> {
        self.get_private_json(&["wallet", "crypto", currency, "withdraw", "history"], Some(request))
            .await
            .map_err(|e| e.context("failed to fetch withdrawal history"))
    }

    /// GET /wallet/crypto/{currency}/withdraw/{id}
    pub async fn withdrawal_status(&self, currency: &str, id: &str) -> Result<CryptoWithdrawalStatus> {
        self.get_private_json::<(), _>(&["wallet", "crypto", currency, "withdraw", id], None)
            .await
            .map_err(|e| e.context("failed to fetch withdrawal status"))
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credentials;
    use crate::http::{ClientConfig, ValrClient};
    use crate::types::{DepositAddress, PageRequest, WithdrawalInfo};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ValrClient {
        ValrClient::with_config(
            ClientConfig::default().with_base_url(server.uri()),
            Some(Credentials::new("test-key", "test-secret")),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_deposit_address() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wallet/crypto/ETH/deposit/address"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "currency": "ETH",
                "address": "0xA7Fae2Fd50886b962d46FF4280f595A3982aeAa5"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let address = client(&server)
            .deposit_address("ETH")
            .await
            .expect("deposit address failed");

        assert_eq!(
            address,
            DepositAddress {
                currency: "ETH".to_string(),
                address: "0xA7Fae2Fd50886b962d46FF4280f595A3982aeAa5".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_withdrawal_info() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wallet/crypto/BTC/withdraw"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "currency": "BTC",
                "minimumWithdrawAmount": "0.0002",
                "isActive": true,
                "withdrawCost": "0.0004",
                "supportsPaymentReference": false
            })))
            .expect(1)
            .mount(&server)
            .await;

        let info = client(&server)
            .withdrawal_info("BTC")
            .await
            .expect("withdrawal info failed");

        assert_eq!(
            info,
            WithdrawalInfo {
                currency: "BTC".to_string(),
                minimum_withdraw_amount: "0.0002".parse().expect("minimum"),
                is_active: true,
                withdraw_cost: "0.0004".parse().expect("cost"),
                supports_payment_reference: false,
            }
        );
    }

    #[tokio::test]
    async fn test_withdrawal_history_pages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wallet/crypto/BTC/withdraw/history"))
            .and(query_param("skip", "10"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": "wd-1",
                    "currency": "BTC",
                    "address": "bc1qexample",
                    "amount": "0.5",
                    "feeAmount": "0.0004",
                    "transactionHash": "abc123",
                    "confirmations": 3,
                    "lastConfirmedAt": "2019-05-30T12:00:00Z",
                    "createdAt": "2019-05-30T11:00:00Z",
                    "status": "Processing",
                    "verified": true
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let history = client(&server)
            .withdrawal_history("BTC", &PageRequest { skip: Some(10), limit: Some(5) })
            .await
            .expect("withdrawal history failed");

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].fee, Some("0.0004".parse().expect("fee")));
        assert_eq!(history[0].confirmations, 3);
        assert!(history[0].verified);
    }

    #[tokio::test]
    async fn test_deposit_history() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wallet/crypto/ETH/deposit/history"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "currencyCode": "ETH",
                    "receiveAddress": "0xA7Fae2Fd50886b962d46FF4280f595A3982aeAa5",
                    "transactionHash": "0xdeadbeef",
                    "amount": "1.000000000000000001",
                    "createdAt": "2020-01-01T00:00:00Z",
                    "confirmations": 12,
                    "confirmed": true,
                    "confirmedAt": "2020-01-01T00:05:00Z"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let deposits = client(&server)
            .deposit_history("ETH", &PageRequest::default())
            .await
            .expect("deposit history failed");

        assert_eq!(deposits[0].amount.to_string(), "1.000000000000000001");
        assert!(deposits[0].confirmed);
    }

    #[tokio::test]
    async fn test_withdrawal_status_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wallet/crypto/BTC/withdraw/missing"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server)
            .withdrawal_status("BTC", "missing")
            .await
            .expect_err("404 must fail");

        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.operation(), Some("failed to fetch withdrawal status"));
    }
}
