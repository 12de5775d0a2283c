use crate::error::{Error, Result};
use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

/// Thin JSON client for the backend REST API. Every call is one request,
/// no retries.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, bearer: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder, path: &str) -> Result<T> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(path, error = %e, "Backend request failed");
            Error::from(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(path, status = status.as_u16(), "Backend returned non-success status");
            return Err(Error::from_upstream(status.as_u16(), &body));
        }
        if body.trim().is_empty() {
            return Err(Error::MalformedBody(format!("{}: empty body", path)));
        }
        serde_json::from_str(&body).map_err(|e| Error::MalformedBody(format!("{}: {}", path, e)))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        bearer: Option<&str>,
    ) -> Result<T> {
        let builder = self.request(Method::GET, path, bearer).query(query);
        self.send(builder, path).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, bearer: Option<&str>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path, bearer).json(body);
        self.send(builder, path).await
    }

    /// POST without a request body, for trigger-style endpoints.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str, bearer: Option<&str>) -> Result<T> {
        let builder = self.request(Method::POST, path, bearer);
        self.send(builder, path).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, bearer: Option<&str>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path, bearer).json(body);
        self.send(builder, path).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str, bearer: Option<&str>) -> Result<T> {
        let builder = self.request(Method::DELETE, path, bearer);
        self.send(builder, path).await
    }
}
