//! HTTP client for the remote service REST API.
//!
//! This module provides the [`ApiClient`] struct that attaches the
//! authorization token to every request sent to the service.

use log::{debug, info};
use reqwest::{
    Client, Error, Request, Response,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde_json::json;

use crate::discord::{Settings, Status, User};

/// Authenticated HTTP client for the REST API.
///
/// # Examples
///
/// ```no_run
/// let api = ApiClient::new("https://discord.com/api/v9", "token");
/// let user = api.get_current_user().await.unwrap();
/// println!("Logged in as {}", user.tag());
/// ```
#[derive(Clone)]
pub struct ApiClient {
    /// Base URL of the API, without trailing slash
    url: String,
    /// Value of the authorization header
    token: String,
    /// HTTP client
    client: Client,
}

impl ApiClient {
    /// Create a new [ApiClient].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the REST API.
    /// * `token` - The token sent in the `authorization` header.
    pub fn new(url: &str, token: &str) -> Self {
        ApiClient {
            url: url.to_string(),
            token: token.to_string(),
            client: Client::new(),
        }
    }

    fn settings_url(&self) -> String {
        format!("{}/users/@me/settings", &self.url)
    }

    /// Request `GET /users/@me` to get the account the token belongs to.
    pub async fn get_current_user(&self) -> Result<User, Error> {
        let url = format!("{}/users/@me", &self.url);
        info!("request current user");
        debug!("request GET {}", &url);

        let user: User = self
            .client
            .get(&url)
            .header(AUTHORIZATION, &self.token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("response from {} -> {:?}", &url, &user);

        Ok(user)
    }

    /// Request `GET /users/@me/settings` to get the settings of the current user.
    pub async fn get_settings(&self) -> Result<Settings, Error> {
        let url = self.settings_url();
        info!("request settings");
        debug!("request GET {}", &url);

        let settings: Settings = self
            .client
            .get(&url)
            .header(AUTHORIZATION, &self.token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("response from {} -> {:?}", &url, &settings);

        Ok(settings)
    }

    /// Request `PATCH /users/@me/settings` with `{"status": "<status>"}`.
    ///
    /// Returns the updated settings sent back by the service.
    pub async fn patch_status(&self, status: Status) -> Result<Settings, Error> {
        let url = self.settings_url();
        info!("request status update to {:?}", status);
        debug!("request PATCH {}", &url);

        let settings: Settings = self
            .client
            .patch(&url)
            .header(AUTHORIZATION, &self.token)
            .json(&json!({ "status": status }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("response from {} -> {:?}", &url, &settings);

        Ok(settings)
    }

    /// Builds the `PATCH /users/@me/settings` request carrying a JSON encoded body.
    ///
    /// The request is only built, see [`Self::execute`] to send it.
    pub fn build_settings_patch(&self, body: Vec<u8>) -> Result<Request, Error> {
        self.client
            .patch(self.settings_url())
            .header(AUTHORIZATION, &self.token)
            .header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(body)
            .build()
    }

    /// Sends a request built by this client.
    pub async fn execute(&self, request: Request) -> Result<Response, Error> {
        debug!("request {} {}", request.method(), request.url());
        self.client.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_current_user() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{"id": "42", "username": "Marcel", "discriminator": "7299", "bot": false, "avatar": null}"#;

        server
            .mock("GET", "/users/@me")
            .match_header("authorization", "token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let api = ApiClient::new(&server.url(), "token");
        let user = api.get_current_user().await.unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.tag(), "Marcel#7299");
        assert!(!user.bot);
    }

    #[tokio::test]
    async fn test_get_current_user_unauthorized() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/users/@me")
            .with_status(401)
            .with_body(r#"{"message": "401: Unauthorized"}"#)
            .create_async()
            .await;

        let api = ApiClient::new(&server.url(), "bad");
        let error = api.get_current_user().await.unwrap_err();
        assert_eq!(error.status().unwrap().as_u16(), 401);
    }

    #[tokio::test]
    async fn test_get_settings() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/users/@me/settings")
            .match_header("authorization", "token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": "idle", "locale": "en-US"}"#)
            .create_async()
            .await;

        let api = ApiClient::new(&server.url(), "token");
        assert_eq!(api.get_settings().await.unwrap().status, Status::Idle);
    }

    #[tokio::test]
    async fn test_patch_status() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("PATCH", "/users/@me/settings")
            .match_header("authorization", "token")
            .match_body(mockito::Matcher::JsonString(
                r#"{"status": "dnd"}"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": "dnd"}"#)
            .create_async()
            .await;

        let api = ApiClient::new(&server.url(), "token");
        let settings = api.patch_status(Status::DoNotDisturb).await.unwrap();
        assert_eq!(settings.status, Status::DoNotDisturb);
        mock.assert_async().await;
    }

    #[test]
    fn test_build_settings_patch() {
        let api = ApiClient::new("http://localhost:1234/api", "token");
        let request = api.build_settings_patch(b"{}".to_vec()).unwrap();

        assert_eq!(request.method(), &reqwest::Method::PATCH);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:1234/api/users/@me/settings"
        );
        assert_eq!(request.headers()[AUTHORIZATION], "token");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_build_settings_patch_invalid_url() {
        let api = ApiClient::new("not a url", "token");
        assert!(api.build_settings_patch(Vec::new()).is_err());
    }
}
