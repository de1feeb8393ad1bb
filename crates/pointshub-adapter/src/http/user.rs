/*
[INPUT]:  API key header
[OUTPUT]: Account balance for the configured key
[POS]:    HTTP layer - user endpoints (require auth)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

use crate::http::{PointsHubClient, Result};
use crate::types::Balance;
use reqwest::Method;

impl PointsHubClient {
    /// Get the account balance for the configured API key
    ///
    /// GET /api/balance
    /// Requires: API key header.
    pub async fn get_balance(&self) -> Result<Balance> {
        let builder = self.auth_request(Method::GET, "/api/balance")?;
        self.send_json(builder).await
    }
}
