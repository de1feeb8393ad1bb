/*
[INPUT]:  Buy order parameters (puan, steam_link) and API key header
[OUTPUT]: Placed order confirmation
[POS]:    HTTP layer - purchase endpoint (requires auth, not idempotent)
[UPDATE]: When the buy flow or validation rules change
*/

use reqwest::Method;
use tracing::debug;

use crate::http::{PointsHubClient, PointsHubError, Result};
use crate::types::{BuyOrderRequest, Order};

impl PointsHubClient {
    /// Buy Steam Points for a Steam account
    ///
    /// POST /api/buy
    /// Requires: API key header. Not idempotent: the adapter never retries
    /// this call, and a blind caller-side retry may double-purchase.
    ///
    /// `puan` must be positive and `steam_link` non-empty; both are checked
    /// before any network I/O. The server additionally enforces the purchase
    /// granularity (see [`MIN_POINTS`](crate::types::MIN_POINTS) and
    /// [`POINT_MULTIPLE`](crate::types::POINT_MULTIPLE)) and the accepted
    /// `steam_link` forms.
    pub async fn buy(&self, puan: u32, steam_link: &str) -> Result<Order> {
        if puan == 0 {
            return Err(PointsHubError::Validation {
                message: "puan must be a positive number of points".to_string(),
            });
        }
        if steam_link.is_empty() {
            return Err(PointsHubError::Validation {
                message: "steam_link must not be empty".to_string(),
            });
        }

        let request = BuyOrderRequest {
            puan,
            steam_link: steam_link.to_string(),
        };

        debug!(puan, steam_link, "submitting buy order");
        let builder = self.auth_request(Method::POST, "/api/buy")?.json(&request);
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, PointsHubClient, PointsHubError};
    use crate::types::{Order, OrderStatus};
    use rstest::rstest;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEST_LINK: &str = "https://steamcommunity.com/id/example";

    fn open_client(server: &MockServer) -> PointsHubClient {
        let mut client =
            PointsHubClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
                .expect("client init");
        client.set_api_key("test-key");
        client.open().expect("open session");
        client
    }

    #[tokio::test]
    async fn test_buy() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "id": "ord_8f41c2",
            "puan": 1000,
            "steam_link": "https://steamcommunity.com/id/example",
            "status": "pending"
        }"#;

        let _mock = Mock::given(method("POST"))
            .and(path("/api/buy"))
            .and(header("x-api-key", "test-key"))
            .and(body_json(serde_json::json!({
                "puan": 1000,
                "steam_link": TEST_LINK,
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = open_client(&server);
        let response = client.buy(1000, TEST_LINK).await.expect("buy failed");

        let expected = Order {
            id: "ord_8f41c2".to_string(),
            puan: 1000,
            steam_link: TEST_LINK.to_string(),
            status: OrderStatus::Pending,
        };

        assert_eq!(response, expected);
    }

    #[rstest]
    #[case::zero_puan(0, TEST_LINK, "puan")]
    #[case::empty_link(500, "", "steam_link")]
    #[tokio::test]
    async fn test_buy_validates_before_send(
        #[case] puan: u32,
        #[case] steam_link: &str,
        #[case] field: &str,
    ) {
        let server = MockServer::start().await;
        let client = open_client(&server);

        let err = client
            .buy(puan, steam_link)
            .await
            .expect_err("validation must fail");
        assert!(err.is_client_error());
        match err {
            PointsHubError::Validation { message } => assert!(message.contains(field)),
            other => panic!("expected Validation error, got {other:?}"),
        }

        let requests = server.received_requests().await.expect("recorded requests");
        assert!(requests.is_empty(), "no request may be issued");
    }

    #[tokio::test]
    async fn test_buy_requires_api_key() {
        let server = MockServer::start().await;
        let mut client =
            PointsHubClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
                .expect("client init");
        client.open().expect("open session");

        let err = client
            .buy(1000, TEST_LINK)
            .await
            .expect_err("must fail without api key");
        assert!(err.is_auth_error());

        let requests = server.received_requests().await.expect("recorded requests");
        assert!(requests.is_empty(), "no request may be issued");
    }
}
