//! REST client for `/api/user`.
//!
//! Only performs IO and maps responses into typed results. Commands decide
//! what those results mean for UI state.

use std::any::Any;

use log::debug;
use portal_states::State;
use reqwest::header::COOKIE;
use reqwest::{Client, RequestBuilder, Response};
use thiserror::Error;
use ustr::Ustr;

use super::model::{DataEnvelope, NewUser, UserId, UserRecord};
use crate::BusinessConfig;

#[derive(Debug, Error)]
pub enum UsersApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API returned status: {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("request cancelled")]
    Cancelled,
}

pub type ApiResult<T> = Result<T, UsersApiError>;

/// HTTP client bound to one backend.
///
/// Cheap to clone: `reqwest::Client` shares its pool and cookie jar, so the
/// snapshot handed to each command talks to the same session.
#[derive(Debug, Clone)]
pub struct UsersApi {
    client: Client,
    api_url: Ustr,
    session_cookie: Option<String>,
}

impl UsersApi {
    pub fn new(config: &BusinessConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(UsersApiError::Transport)?;

        Ok(Self {
            client,
            api_url: config.api_url(),
            session_cookie: config.session_cookie().map(str::to_owned),
        })
    }

    fn users_url(&self) -> String {
        format!("{}/user", self.api_url)
    }

    fn user_url(&self, id: UserId) -> String {
        format!("{}/user/{id}", self.api_url)
    }

    fn with_session(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session_cookie {
            Some(cookie) => request.header(COOKIE, cookie),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = self
            .with_session(request)
            .send()
            .await
            .map_err(UsersApiError::Transport)?;

        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());
        if !status.is_success() {
            return Err(UsersApiError::Status(status.as_u16()));
        }
        Ok(response)
    }

    /// GET `/api/user`
    pub async fn list_users(&self) -> ApiResult<Vec<UserRecord>> {
        let response = self.send(self.client.get(self.users_url())).await?;
        let envelope: DataEnvelope<Vec<UserRecord>> =
            response.json().await.map_err(UsersApiError::Decode)?;
        Ok(envelope.data)
    }

    /// POST `/api/user`
    pub async fn create_user(&self, user: &NewUser) -> ApiResult<UserRecord> {
        let response = self
            .send(self.client.post(self.users_url()).json(user))
            .await?;
        let envelope: DataEnvelope<UserRecord> =
            response.json().await.map_err(UsersApiError::Decode)?;
        Ok(envelope.data)
    }

    /// PUT `/api/user/{id}`. The response body is ignored.
    pub async fn update_user(&self, user: &UserRecord) -> ApiResult<()> {
        self.send(self.client.put(self.user_url(user.id)).json(user))
            .await?;
        Ok(())
    }

    /// DELETE `/api/user/{id}`. The response body is ignored.
    pub async fn delete_user(&self, id: UserId) -> ApiResult<()> {
        self.send(self.client.delete(self.user_url(id))).await?;
        Ok(())
    }
}

impl State for UsersApi {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}
