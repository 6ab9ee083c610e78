/*
[INPUT]:  Limit and market order requests (JSON bodies)
[OUTPUT]: Accepted order ids
[POS]:    HTTP layer - order placement endpoints (signed, body included in signature)
[UPDATE]: When adding new order types or changing order flow
*/

use crate::http::{Result, ValrClient};
use crate::types::{LimitOrderRequest, MarketOrderRequest, OrderAccepted};

impl ValrClient {
    /// Place a limit order. Acceptance only means the order was queued.
    ///
    /// POST /orders/limit
    pub async fn place_limit_order(&self, request: &LimitOrderRequest) -> Result<OrderAccepted> {
        self.post_private_json(&["orders", "limit"], request)
            .await
            .map_err(|e| e.context("failed to place limit order"))
    }

    /// POST /orders/market
    pub async fn place_market_order(&self, request: &MarketOrderRequest) -> Result<OrderAccepted> {
        self.post_private_json(&["orders", "market"], request)
            .await
            .map_err(|e| e.context("failed to place market order"))
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::{generate_signature, Credentials};
    use crate::http::{ClientConfig, ValrClient};
    use crate::types::{LimitOrderRequest, MarketOrderRequest, Side};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SECRET: &str = "4961b74efac86b25cce8fbe4c9811c4c7a787b7a5996660afcc2e287ad864363";

    fn client(server: &MockServer) -> ValrClient {
        ValrClient::with_config(
            ClientConfig::default().with_base_url(format!("{}/v1", server.uri())),
            Some(Credentials::new("test-key", SECRET)),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_market_order_body_is_signed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/orders/market"))
            .and(header("content-type", "application/json"))
            .respond_with(
                ResponseTemplate::new(202).set_body_json(serde_json::json!({ "id": "order-1" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let request = MarketOrderRequest {
            customer_order_id: Some("ORDER-000001".to_string()),
            pair: "BTCZAR".to_string(),
            side: Side::Buy,
            base_amount: None,
            quote_amount: Some("80000".parse().expect("amount")),
        };
        let accepted = client(&server)
            .place_market_order(&request)
            .await
            .expect("market order failed");
        assert_eq!(accepted.id, "order-1");

        let received = server.received_requests().await.expect("recording enabled");
        let sent = &received[0];
        let timestamp = sent.headers.get("x-valr-timestamp").unwrap().to_str().unwrap();
        let expected = generate_signature(SECRET, timestamp, "POST", "/v1/orders/market", &sent.body);
        assert_eq!(
            sent.body,
            br#"{"customerOrderId":"ORDER-000001","pair":"BTCZAR","side":"BUY","quoteAmount":"80000"}"#
        );
        assert_eq!(sent.headers.get("x-valr-signature").unwrap().to_str().unwrap(), expected);
    }

    #[tokio::test]
    async fn test_limit_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/orders/limit"))
            .and(body_json(serde_json::json!({
                "pair": "BTCZAR",
                "side": "SELL",
                "quantity": "0.1",
                "price": "95000",
                "postOnly": true
            })))
            .respond_with(
                ResponseTemplate::new(202).set_body_json(serde_json::json!({ "id": "order-2" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let request = LimitOrderRequest {
            customer_order_id: None,
            pair: "BTCZAR".to_string(),
            side: Side::Sell,
            quantity: "0.1".parse().expect("quantity"),
            price: "95000".parse().expect("price"),
            post_only: true,
        };
        let accepted = client(&server)
            .place_limit_order(&request)
            .await
            .expect("limit order failed");

        assert_eq!(accepted.id, "order-2");
    }

    #[tokio::test]
    async fn test_rejected_order_returns_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/orders/limit"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "code": -1,
                "message": "Insufficient balance"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = LimitOrderRequest {
            customer_order_id: None,
            pair: "BTCZAR".to_string(),
            side: Side::Buy,
            quantity: "100".parse().expect("quantity"),
            price: "1".parse().expect("price"),
            post_only: false,
        };
        let err = client(&server)
            .place_limit_order(&request)
            .await
            .expect_err("400 must fail");

        assert_eq!(err.status_code(), Some(400));
    }
}
