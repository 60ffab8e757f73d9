use nullnet_liberror::{location, Error, ErrorHandler, Location};
use serde::Deserialize;

use crate::api::endpoints::ApiEndpoint;
use crate::constants::{API_BASE_URL, API_KEY_TOKEN, CONSOLE_VERSION};
use crate::device::Device;
use crate::helpers::get_env;

pub const API_KEY_HEADER: &str = "X-Api-Key";

/// HTTP client for the device API. Attaches the API key token to every
/// request when one is configured.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Payload of the connect endpoint: a base64-encoded QR code PNG to pair a
/// new device with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectResponse {
    #[serde(rename = "qrCode")]
    pub qr_code: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

impl ApiClient {
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(API_BASE_URL.clone())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, Error> {
        let api_key = match API_KEY_TOKEN {
            Some(token) => token.to_string(),
            None => get_env("API_KEY_TOKEN", "", "API key token"),
        };

        let client = client_builder_with_ua().build().handle_err(location!())?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    pub async fn list_devices(&self) -> Result<Vec<Device>, Error> {
        let response = self.get(ApiEndpoint::Devices).await?;
        response.json::<Vec<Device>>().await.handle_err(location!())
    }

    pub async fn connect(&self) -> Result<ConnectResponse, Error> {
        let response = self.get(ApiEndpoint::Connect).await?;
        response
            .json::<ConnectResponse>()
            .await
            .handle_err(location!())
    }

    async fn get(&self, endpoint: ApiEndpoint) -> Result<reqwest::Response, Error> {
        let url = format!("{}{}", self.base_url, endpoint.path());

        let mut request = self.client.get(&url);
        if !self.api_key.is_empty() {
            request = request.header(API_KEY_HEADER, &self.api_key);
        }

        let response = request.send().await.handle_err(location!())?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            log::error!("API request to '{url}' failed: {message}");
            return Err("API request failed").handle_err(location!());
        }

        Ok(response)
    }
}

pub fn client_builder_with_ua() -> reqwest::ClientBuilder {
    reqwest::ClientBuilder::new().user_agent(format!("DeviceHubConsole-{CONSOLE_VERSION}"))
}
