//! Account data.

use serde_json::{Map, Value};

use super::ProviderClient;
use crate::config::Endpoint;
use crate::error_handling::ClientError;
use crate::parse::first_result;

impl ProviderClient {
    /// Account balance and usage.
    ///
    /// Returns the first result object of the response, or an empty map when the
    /// response has none. This GET call is not retried.
    pub async fn account_balance(&self) -> Result<Map<String, Value>, ClientError> {
        let response = self.get(Endpoint::UserData).await?;
        Ok(first_result(&response).cloned().unwrap_or_default())
    }
}
