//! HTTP client for posting messages to the channel endpoint.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue};
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::BotConfig;

/// Base URL of the chat service.
pub const DEFAULT_BASE_URL: &str = "https://discord.com";

/// Errors raised while building the client or performing a send.
#[derive(Debug, Error)]
pub enum SendError {
    /// A config value is not a legal HTTP header value.
    #[error("invalid header value for {name}")]
    InvalidHeader {
        name: &'static str,
        source: InvalidHeaderValue,
    },

    /// Request construction or transport failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct MessagePayload<'a> {
    content: &'a str,
}

/// Client holding the fixed header set and target channel.
///
/// Headers and channel id are captured once at construction; config reloads
/// do not refresh them.
pub struct MessageClient {
    http: reqwest::Client,
    base_url: String,
    channel_id: String,
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, SendError> {
    HeaderValue::from_str(value).map_err(|source| SendError::InvalidHeader { name, source })
}

impl MessageClient {
    /// Build a client from config, targeting the real service.
    pub fn from_config(config: &BotConfig) -> Result<Self, SendError> {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Build a client against an alternate base URL. Used by tests to point
    /// at a loopback endpoint.
    pub fn with_base_url(config: &BotConfig, base_url: &str) -> Result<Self, SendError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(
            HeaderName::from_static("user-id"),
            header_value("User-ID", config.user_id())?,
        );
        headers.insert(
            reqwest::header::AUTHORIZATION,
            header_value("Authorization", config.token())?,
        );
        headers.insert(reqwest::header::HOST, HeaderValue::from_static("discordapp.com"));
        headers.insert(
            HeaderName::from_static("referrer"),
            header_value("Referrer", config.channel_url())?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            channel_id: config.channel_id().to_string(),
        })
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/api/v9/channels/{}/messages",
            self.base_url, self.channel_id
        )
    }

    /// POST one message. Returns the response status; the caller decides
    /// what a non-success status means.
    pub async fn post_message(&self, content: &str) -> Result<StatusCode, SendError> {
        let response = self
            .http
            .post(self.endpoint_url())
            .json(&MessagePayload { content })
            .send()
            .await?;
        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::parse_config;

    #[test]
    fn endpoint_includes_channel_id() {
        let config = parse_config(
            "messages_file=x\ndelay_between_messages=1\nchannel_id=1234567890\n",
        )
        .unwrap();
        let client = MessageClient::with_base_url(&config, "http://127.0.0.1:9/").unwrap();
        assert_eq!(
            client.endpoint_url(),
            "http://127.0.0.1:9/api/v9/channels/1234567890/messages"
        );
    }

    #[test]
    fn control_chars_in_token_are_rejected() {
        let config = parse_config(
            "messages_file=x\ndelay_between_messages=1\ntoken=bad\u{0}token\n",
        )
        .unwrap();
        let err = MessageClient::from_config(&config).unwrap_err();
        assert!(matches!(err, SendError::InvalidHeader { name: "Authorization", .. }));
    }
}
