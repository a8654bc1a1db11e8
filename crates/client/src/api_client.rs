//! HTTP API client for the console backend.

use async_trait::async_trait;
use console_shared::{
    AddGroupRequest, ApiError, Group, GroupId, ListGroupsResponse, ListUsersResponse,
    UpdateGroupRequest,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// HTTP client for the console's `/api/v1` endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
        }
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// Make a GET request
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(resp).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let body_bytes = serde_json::to_vec(body).map_err(|e| ApiError::Deserialize(e.to_string()))?;

        let resp = self
            .client
            .post(self.url(path))
            .body(body_bytes)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(resp).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let body_bytes = serde_json::to_vec(body).map_err(|e| ApiError::Deserialize(e.to_string()))?;

        let resp = self
            .client
            .put(self.url(path))
            .body(body_bytes)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(resp).await
    }

    // --- Group/User API methods ---

    /// List the names of all groups
    pub async fn list_groups(&self) -> Result<ListGroupsResponse, ApiError> {
        self.get_json("/api/v1/groups").await
    }

    /// List all users
    pub async fn list_users(&self) -> Result<ListUsersResponse, ApiError> {
        self.get_json("/api/v1/users").await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of a single group's resource.
pub fn group_path(name: &str) -> String {
    format!("/api/v1/groups/{}", urlencoding::encode(name))
}

async fn read_json<TRes: DeserializeOwned>(resp: Response) -> Result<TRes, ApiError> {
    let status = resp.status().as_u16();
    let is_success = resp.status().is_success();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

    if !is_success {
        return Err(ApiError::Http { status, body: text });
    }

    // Create/update endpoints answer with an empty 2xx body.
    if text.trim().is_empty() {
        serde_json::from_str("null").map_err(|e| ApiError::Deserialize(e.to_string()))
    } else {
        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }
}

/// The group endpoints the group dialog talks to.
#[async_trait(?Send)]
pub trait GroupService {
    /// `GET /api/v1/groups/{id}`
    async fn get_group(&self, id: &GroupId) -> Result<Group, ApiError>;

    /// `POST /api/v1/groups`
    async fn add_group(&self, request: &AddGroupRequest) -> Result<(), ApiError>;

    /// `PUT /api/v1/groups/{name}`
    async fn update_group(&self, name: &str, request: &UpdateGroupRequest) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl GroupService for ApiClient {
    async fn get_group(&self, id: &GroupId) -> Result<Group, ApiError> {
        self.get_json(&group_path(id.as_str())).await
    }

    async fn add_group(&self, request: &AddGroupRequest) -> Result<(), ApiError> {
        self.post_json::<_, serde_json::Value>("/api/v1/groups", request)
            .await
            .map(|_| ())
    }

    async fn update_group(&self, name: &str, request: &UpdateGroupRequest) -> Result<(), ApiError> {
        self.put_json::<_, serde_json::Value>(&group_path(name), request)
            .await
            .map(|_| ())
    }
}
