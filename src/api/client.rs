use super::backend::Backend;
use super::credentials::CredentialProvider;
use super::error::RequestError;
use super::query::*;
use crate::access::AccessStatus;
use crate::config::Config;
use crate::util::format;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, RequestBuilder};
use url::Url;

use std::sync::Arc;

#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
    headers: Arc<HeaderMap>,
    api_url: Url,
    credentials: Arc<dyn CredentialProvider>,
}

impl Client {
    pub fn new(config: &Config, credentials: Arc<dyn CredentialProvider>) -> Self {
        let version = String::from(env!("CARGO_CRATE_NAME")) + " " + env!("CARGO_PKG_VERSION");

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&version).unwrap_or(HeaderValue::from_static("folderaccess")));

        Self {
            client: reqwest::Client::new(),
            headers: Arc::new(headers),
            api_url: config.api_url.clone(),
            credentials,
        }
    }

    pub fn endpoint_url(&self, format_string: &str, params: Vec<&str>) -> Result<Url, RequestError> {
        let endpoint = format::vec_with_format_string(format_string, params);
        Ok(self.api_url.join(&endpoint)?)
    }

    fn build_request(&self, method: Method, url: Url) -> Result<RequestBuilder, RequestError> {
        if cfg!(test) {
            return Err(RequestError::IsUnitTest);
        }
        let token = self.credentials.bearer_token()?;
        Ok(self.client.request(method, url).headers((*self.headers).clone()).bearer_auth(token))
    }

    async fn send<T: serde::de::DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, RequestError> {
        let resp = builder.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            // Error bodies are {"msg": "..."} but don't count on it
            let msg = serde_json::from_slice::<MessageReply>(&bytes).ok().and_then(|reply| reply.msg);
            return Err(RequestError::Status { status, msg });
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn query<T: Queriable>(&self, params: Vec<&str>) -> Result<T, RequestError> {
        let url = self.endpoint_url(T::FORMAT_STRING, params)?;
        let builder = self.build_request(Method::GET, url)?;
        self.send(builder).await
    }

    pub async fn submit<T: Submittable + Sync>(&self, body: &T, params: Vec<&str>) -> Result<T::Reply, RequestError> {
        let url = self.endpoint_url(T::FORMAT_STRING, params)?;
        let builder = self.build_request(T::METHOD, url)?.json(body);
        self.send(builder).await
    }
}

impl Backend for Client {
    async fn list_folders(&self) -> Result<FolderList, RequestError> {
        self.query(vec![]).await
    }

    async fn request_access(&self, folder_id: &str, reason: &str) -> Result<RequestAccessReply, RequestError> {
        self.submit(&AccessRequestBody { folder_id, reason }, vec![]).await
    }

    async fn list_requests(&self) -> Result<RequestList, RequestError> {
        self.query(vec![]).await
    }

    async fn update_request(&self, request_id: &str, status: AccessStatus) -> Result<MessageReply, RequestError> {
        self.submit(&StatusUpdateBody { status }, vec![request_id]).await
    }

    async fn grant_access(
        &self,
        folder_id: &str,
        employee_id: &str,
        reason: &str,
    ) -> Result<MessageReply, RequestError> {
        let body = GrantAccessBody {
            folder_id,
            employee_id,
            reason,
        };
        self.submit(&body, vec![]).await
    }

    async fn authorized_folders(&self) -> Result<AuthorizedFolders, RequestError> {
        self.query(vec![]).await
    }
}
