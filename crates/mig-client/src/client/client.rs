use crate::{
    ClientError, ClientResult, ClientSettings, CreatedUser, DestinationCourse, DestinationRole,
    DestinationUser, NewUser, RetryPolicy, with_retry,
};

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the destination REST API
pub struct Client {
    pub base_url: String,
    auth_token: String,
    total_pages_header: String,
    retry: RetryPolicy,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://lms.example.com/api")
    /// * `auth_token` - Bearer token sent with every request
    pub fn new(base_url: &str, auth_token: &str, settings: ClientSettings) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(settings.request_timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: auth_token.to_string(),
            total_pages_header: settings.total_pages_header,
            retry: settings.retry,
            client,
        })
    }

    /// Build an authenticated request for an API-relative path
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        self.client
            .request(method, &url)
            .bearer_auth(&self.auth_token)
    }

    /// Send a request, turning non-2xx responses into [`ClientError::Api`]
    async fn send(&self, req: RequestBuilder) -> ClientResult<Response> {
        let response = req.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<Value>(&body) {
            Ok(value) => match (
                value.get("code").and_then(Self::as_text),
                value.get("message").and_then(Self::as_text),
            ) {
                (Some(code), Some(message)) => format!("{code}: {message}"),
                _ => Self::status_text(status),
            },
            Err(_) => Self::status_text(status),
        };

        Err(ClientError::api_error(status.as_u16(), message))
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn as_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn status_text(status: reqwest::StatusCode) -> String {
        format!(
            "{}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )
    }

    fn page_path(path: &str, page: u32) -> String {
        let separator = if path.contains('?') { '&' } else { '?' };
        format!("{path}{separator}page={page}")
    }

    /// Fetch one page of a list endpoint together with the advertised page total
    async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page: u32,
    ) -> ClientResult<(Vec<T>, u32)> {
        let req = self.request(Method::GET, &Self::page_path(path, page));
        let response = self.send(req).await?;

        // Missing or unreadable header means the endpoint is not paginated
        let total_pages = response
            .headers()
            .get(self.total_pages_header.as_str())
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(1);

        let items = Self::parse(response).await?;
        Ok((items, total_pages))
    }

    /// Fetch every page of a list endpoint
    async fn get_all<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            let (mut batch, total_pages) = with_retry(&self.retry, path, || {
                self.fetch_page::<T>(path, page)
            })
            .await?;

            items.append(&mut batch);
            if page >= total_pages {
                break;
            }
            page += 1;
        }

        log::debug!("Fetched {} item(s) from {} in {} page(s)", items.len(), path, page);
        Ok(items)
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Verify the bearer token is accepted
    pub async fn check_auth(&self) -> ClientResult<()> {
        with_retry(&self.retry, "auth/check", || async move {
            self.send(self.request(Method::GET, "auth/check")).await?;
            Ok(())
        })
        .await
    }

    // =========================================================================
    // Catalogues
    // =========================================================================

    pub async fn list_roles(&self) -> ClientResult<Vec<DestinationRole>> {
        self.get_all("roles").await
    }

    pub async fn list_users(&self) -> ClientResult<Vec<DestinationUser>> {
        self.get_all("users").await
    }

    /// All courses already present at the destination
    pub async fn list_courses(&self) -> ClientResult<Vec<DestinationCourse>> {
        self.get_all("content?_type=course").await
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Register a new user, returning the destination id
    pub async fn create_user(&self, user: &NewUser) -> ClientResult<CreatedUser> {
        with_retry(&self.retry, "auth/local/register", || async move {
            let req = self
                .request(Method::POST, "auth/local/register")
                .json(user);
            Self::parse(self.send(req).await?).await
        })
        .await
    }

    /// Import an unpacked course directory. Never retried.
    pub async fn import_course(&self, unzip_path: &str) -> ClientResult<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ImportRequest<'a> {
            unzip_path: &'a str,
        }

        let req = self
            .request(Method::POST, "adapt/import")
            .json(&ImportRequest { unzip_path });
        self.send(req).await?;
        Ok(())
    }
}
