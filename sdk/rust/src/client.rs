use reqwest::{Client, Method, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors returned by [`RelayClient`].
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("request to relay failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay refused the request itself (e.g. malformed body).
    #[error("relay rejected request with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("relay returned an unreadable envelope: {0}")]
    Decode(#[from] serde_json::Error),
}

/// `{result, error}` as returned by the relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayEnvelope {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayEnvelope {
    /// Split into the upstream value or the upstream error message.
    pub fn into_result(self) -> Result<Value, String> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub chat_id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quoted_message_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFileByUrlRequest {
    pub chat_id: String,
    pub url_file: String,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

pub struct RelayClient {
    client: Client,
    relay_url: String,
    id_instance: String,
    api_token_instance: String,
}

impl RelayClient {
    pub fn new(relay_url: &str, id_instance: &str, api_token_instance: &str) -> Self {
        Self::with_client(Client::new(), relay_url, id_instance, api_token_instance)
    }

    pub fn with_client(
        client: Client,
        relay_url: &str,
        id_instance: &str,
        api_token_instance: &str,
    ) -> Self {
        Self {
            client,
            relay_url: relay_url.trim_end_matches('/').to_string(),
            id_instance: id_instance.to_string(),
            api_token_instance: api_token_instance.to_string(),
        }
    }

    pub async fn get_settings(&self) -> Result<RelayEnvelope, SdkError> {
        self.get("getSettings").await
    }

    pub async fn get_state_instance(&self) -> Result<RelayEnvelope, SdkError> {
        self.get("getStateInstance").await
    }

    pub async fn send_message(&self, req: &SendMessageRequest) -> Result<RelayEnvelope, SdkError> {
        self.post("sendMessage", req).await
    }

    pub async fn send_file_by_url(
        &self,
        req: &SendFileByUrlRequest,
    ) -> Result<RelayEnvelope, SdkError> {
        self.post("sendFileByUrl", req).await
    }

    /// Call a GET operation by name.
    pub async fn get(&self, operation: &str) -> Result<RelayEnvelope, SdkError> {
        let resp = self.request(Method::GET, operation).send().await?;
        Self::envelope(resp).await
    }

    /// Call a POST operation by name with any serializable body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        operation: &str,
        body: &B,
    ) -> Result<RelayEnvelope, SdkError> {
        let resp = self.request(Method::POST, operation).json(body).send().await?;
        Self::envelope(resp).await
    }

    fn request(&self, method: Method, operation: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}/{}", self.relay_url, operation))
            .query(&[
                ("idInstance", self.id_instance.as_str()),
                ("apiTokenInstance", self.api_token_instance.as_str()),
            ])
    }

    async fn envelope(resp: Response) -> Result<RelayEnvelope, SdkError> {
        let status = resp.status();
        let text = resp.text().await?;

        if status != StatusCode::OK {
            return Err(SdkError::Rejected {
                status: status.as_u16(),
                message: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
