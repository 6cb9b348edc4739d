use crate::application::client::CoolpayClient;
use crate::error::Result;
use crate::infrastructure::http::ReqwestTransport;
use std::time::Duration;

/// Root of the deployed Coolpay API.
pub const DEFAULT_API_URL: &str = "https://coolpay.herokuapp.com/api";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Builds a client talking to `api_url` over `reqwest`.
    pub fn connect(&self) -> Result<CoolpayClient> {
        let transport = ReqwestTransport::new(self.timeout)?;
        Ok(CoolpayClient::with_api_url(
            Box::new(transport),
            &self.api_url,
        ))
    }
}
