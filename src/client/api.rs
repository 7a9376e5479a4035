use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use url::Url;

use super::ClientError;
use crate::models::employee::{Employee, EmployeeUpdate};

/// Remote operations the form needs.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Employee>, ClientError>;
    async fn create(&self, employee: &Employee) -> Result<(), ClientError>;
    async fn update(&self, employee_id: &str, changes: &EmployeeUpdate) -> Result<(), ClientError>;
    async fn delete(&self, employee_id: &str) -> Result<(), ClientError>;
}

/// [`EmployeeApi`] over the JSON/HTTP routes served by this crate.
#[derive(Debug, Clone)]
pub struct HttpEmployeeApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpEmployeeApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), Url::parse(base_url)?)
    }

    pub fn with_client(client: reqwest::Client, base_url: Url) -> Result<Self, ClientError> {
        if base_url.cannot_be_a_base() {
            return Err(ClientError::BaseUrl(base_url.to_string()));
        }
        Ok(HttpEmployeeApi { client, base_url })
    }

    /// The record list is served from the root of the API.
    pub fn list_url(&self) -> Url {
        self.base_url.clone()
    }

    pub fn collection_url(&self) -> Result<Url, ClientError> {
        self.url_with(&["api", "employees"])
    }

    /// URL for one record. The ID is percent-encoded as a single segment.
    pub fn employee_url(&self, employee_id: &str) -> Result<Url, ClientError> {
        self.url_with(&["api", "employees", employee_id])
    }

    fn url_with(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound(message));
    }
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl EmployeeApi for HttpEmployeeApi {
    async fn list(&self) -> Result<Vec<Employee>, ClientError> {
        let response = self.client.get(self.list_url()).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn create(&self, employee: &Employee) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.collection_url()?)
            .json(employee)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn update(&self, employee_id: &str, changes: &EmployeeUpdate) -> Result<(), ClientError> {
        let response = self
            .client
            .put(self.employee_url(employee_id)?)
            .json(changes)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn delete(&self, employee_id: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.employee_url(employee_id)?)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}
