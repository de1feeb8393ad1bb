/*
[INPUT]:  Open client session
[OUTPUT]: Current Steam Points pricing
[POS]:    HTTP layer - public endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{PointsHubClient, Result};
use crate::types::PointPrice;
use reqwest::Method;

impl PointsHubClient {
    /// Get the current price per Steam Point
    ///
    /// GET /api/price
    /// Callable anonymously, no API key required.
    pub async fn get_price(&self) -> Result<PointPrice> {
        let builder = self.request(Method::GET, "/api/price")?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, PointsHubClient, PointsHubError};
    use crate::types::PointPrice;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_price() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "price": "0.042",
            "currency": "USD"
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/price"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut client =
            PointsHubClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
                .expect("client init");
        client.open().expect("open session");

        let response = client.get_price().await.expect("get_price failed");

        let expected = PointPrice {
            price: "0.042".parse().expect("price"),
            currency: "USD".to_string(),
        };

        assert_eq!(response, expected);
    }

    #[tokio::test]
    async fn test_get_price_requires_open_session() {
        let client = PointsHubClient::new().expect("client init");
        let err = client.get_price().await.expect_err("must fail while closed");
        assert!(matches!(err, PointsHubError::NotConnected));
    }
}
