use crate::api::types::{Employee, EmployeeDraft};
use crate::config::Config;
use color_eyre::{eyre::eyre, Result};
use reqwest::{Method, RequestBuilder};
use tracing::debug;
use url::Url;

/// Path of the employee resource, relative to the API base URL
pub const EMPLOYEES_PATH: &str = "/api/Employees";

/// HTTP client for the employee REST API
#[derive(Clone)]
pub struct EmployeeClient {
  base_url: String,
  http: reqwest::Client,
}

impl EmployeeClient {
  pub fn new(config: &Config) -> Result<Self> {
    Self::with_base_url(&config.api.url)
  }

  /// Create a client for the given base URL (e.g. "http://127.0.0.1:5000").
  /// A path prefix on the base URL is kept.
  pub fn with_base_url(base_url: &str) -> Result<Self> {
    let base_url = base_url.trim_end_matches('/').to_string();
    Url::parse(&base_url).map_err(|e| eyre!("Invalid API url {:?}: {}", base_url, e))?;

    Ok(Self {
      base_url,
      http: reqwest::Client::new(),
    })
  }

  /// URL of the collection, or of one record when `id` is given.
  /// The id goes in as a single percent-encoded segment.
  fn endpoint(&self, id: Option<&str>) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", self.base_url, EMPLOYEES_PATH))
      .map_err(|e| eyre!("Invalid API url: {}", e))?;

    if let Some(id) = id {
      let cannot_be_base = eyre!("API url cannot have path segments: {}", url);
      url
        .path_segments_mut()
        .map_err(|_| cannot_be_base)?
        .push(id);
    }

    Ok(url)
  }

  fn request(&self, method: Method, id: Option<&str>) -> Result<RequestBuilder> {
    let url = self.endpoint(id)?;
    debug!(%method, %url, "API request");
    Ok(self.http.request(method, url))
  }

  /// Send and fail on transport errors or non-2xx statuses
  async fn send(req: RequestBuilder) -> Result<reqwest::Response> {
    let response = req
      .send()
      .await
      .map_err(|e| eyre!("Request failed: {}", e))?;

    response
      .error_for_status()
      .map_err(|e| eyre!("Server returned an error: {}", e))
  }

  /// List all employees
  pub async fn list(&self) -> Result<Vec<Employee>> {
    let req = self.request(Method::GET, None)?;
    Self::send(req)
      .await?
      .json()
      .await
      .map_err(|e| eyre!("Failed to parse employee list: {}", e))
  }

  /// Get a single employee by id
  pub async fn get(&self, id: &str) -> Result<Employee> {
    let req = self.request(Method::GET, Some(id))?;
    Self::send(req)
      .await?
      .json()
      .await
      .map_err(|e| eyre!("Failed to parse employee {}: {}", id, e))
  }

  /// Create an employee, returning the record as stored by the server
  pub async fn create(&self, draft: &EmployeeDraft) -> Result<Employee> {
    let req = self.request(Method::POST, None)?.json(draft);
    Self::send(req)
      .await?
      .json()
      .await
      .map_err(|e| eyre!("Failed to parse created employee: {}", e))
  }

  /// Replace the editable fields of an employee. The response body is ignored.
  pub async fn update(&self, id: &str, draft: &EmployeeDraft) -> Result<()> {
    let req = self.request(Method::PUT, Some(id))?.json(draft);
    Self::send(req).await?;
    Ok(())
  }

  /// Delete an employee. The response body is ignored.
  pub async fn delete(&self, id: &str) -> Result<()> {
    let req = self.request(Method::DELETE, Some(id))?;
    Self::send(req).await?;
    Ok(())
  }
}
