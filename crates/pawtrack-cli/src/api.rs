//! PawTrack API Client
//!
//! Pet calls return `anyhow` errors for the CLI; reminder calls implement
//! the `ReminderGateway` port so a `ReminderStore` can run against the server.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use pawtrack::{DomainError, NewPet, NewReminder, Pet, Reminder, ReminderGateway, ReminderPatch};

/// API Client for PawTrack
pub struct PawTrackClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Prefer the server's `{"error": ..}` message over the raw body
async fn error_message(resp: Response) -> String {
    let body = resp.text().await.unwrap_or_default();
    serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.error)
        .unwrap_or(body)
}

impl PawTrackClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => req.header("Authorization", format!("Bearer {}", key)),
            None => req,
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let resp = self.client.get(self.url("/health")).send().await?;
        Ok(resp.status().is_success())
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response> {
        let resp = self
            .authorize(req)
            .send()
            .await
            .context("Failed to connect to PawTrack API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let message = error_message(resp).await;
            bail!("API error ({}): {}", status, message);
        }

        Ok(resp)
    }

    /// List all Pets
    pub async fn list_pets(&self) -> Result<Vec<Pet>> {
        let resp = self.send(self.client.get(self.url("/api/pets"))).await?;
        resp.json().await.context("Failed to parse response")
    }

    /// Create a Pet
    pub async fn create_pet(&self, new: &NewPet) -> Result<Pet> {
        let resp = self
            .send(self.client.post(self.url("/api/pets")).json(new))
            .await?;
        resp.json().await.context("Failed to parse response")
    }

    /// Delete a Pet and, server side, its reminders
    pub async fn delete_pet(&self, id: Uuid) -> Result<()> {
        self.send(self.client.delete(self.url(&format!("/api/pets/{}", id))))
            .await?;
        Ok(())
    }

    // ============================================
    // Gateway plumbing
    // ============================================

    async fn call(&self, req: RequestBuilder) -> Result<Response, DomainError> {
        let resp = self
            .authorize(req)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("Failed to connect to PawTrack API: {}", e)))?;

        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let message = error_message(resp).await;
        Err(DomainError::Transport(format!(
            "API error ({}): {}",
            status, message
        )))
    }

    async fn call_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, DomainError> {
        self.call(req)
            .await?
            .json()
            .await
            .map_err(|e| DomainError::Transport(format!("Failed to parse response: {}", e)))
    }

    fn reminder_url(&self, id: Uuid, action: Option<&str>) -> String {
        match action {
            Some(action) => self.url(&format!("/api/reminders/{}/{}", id, action)),
            None => self.url(&format!("/api/reminders/{}", id)),
        }
    }
}

#[async_trait]
impl ReminderGateway for PawTrackClient {
    async fn fetch_all(&self) -> Result<Vec<Reminder>, DomainError> {
        self.call_json(self.client.get(self.url("/api/reminders")))
            .await
    }

    async fn create(&self, new: NewReminder) -> Result<Reminder, DomainError> {
        self.call_json(self.client.post(self.url("/api/reminders")).json(&new))
            .await
    }

    async fn update(&self, id: Uuid, patch: ReminderPatch) -> Result<Reminder, DomainError> {
        self.call_json(self.client.patch(self.reminder_url(id, None)).json(&patch))
            .await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let resp = self
            .authorize(self.client.delete(self.reminder_url(id, None)))
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("Failed to connect to PawTrack API: {}", e)))?;

        match resp.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(DomainError::Transport(format!(
                "API error ({}): {}",
                status,
                error_message(resp).await
            ))),
        }
    }

    async fn complete(&self, id: Uuid) -> Result<Reminder, DomainError> {
        self.call_json(self.client.patch(self.reminder_url(id, Some("complete"))))
            .await
    }

    async fn toggle(&self, id: Uuid) -> Result<Reminder, DomainError> {
        self.call_json(self.client.patch(self.reminder_url(id, Some("toggle"))))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_are_normalized() {
        let client = PawTrackClient::new("http://localhost:5000/", None);
        let id = Uuid::nil();

        assert_eq!(client.url("/api/pets"), "http://localhost:5000/api/pets");
        assert_eq!(
            client.reminder_url(id, Some("toggle")),
            format!("http://localhost:5000/api/reminders/{}/toggle", id)
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_transport_error() {
        // Port 9 (discard) on localhost is not expected to speak HTTP.
        let client = PawTrackClient::new("http://127.0.0.1:9", None);
        let result = client.fetch_all().await;

        assert!(matches!(result, Err(DomainError::Transport(_))));
    }

    #[tokio::test]
    async fn test_health_fails_when_unreachable() {
        let client = PawTrackClient::new("http://127.0.0.1:9", Some("key"));

        assert!(client.health().await.is_err());
    }
}
