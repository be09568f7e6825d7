//! HTTP client for the Employee Manager read API.

pub mod saver;

pub use saver::{DiskSaver, FileSaver, SaveError};

use record::EmployeeRecord;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Default location of the Employee Manager service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8085";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("employee id must not be empty")]
    EmptyEmployeeId,
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("base url {0} cannot take path segments")]
    CannotBeABase(Url),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} answered {status}")]
    Status { status: StatusCode, url: Url },
}

/// Read-side client for the employee manager service.
#[derive(Clone, Debug)]
pub struct EmployeeManagerClient {
    http: reqwest::Client,
    base_url: Url,
}

impl EmployeeManagerClient {
    /// Builds a client against `base_url`, e.g. [`DEFAULT_BASE_URL`].
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::CannotBeABase(base_url));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Resolves the employee resource for `employee_id`.
    pub fn employee_url(&self, employee_id: &str) -> Result<Url, ClientError> {
        if employee_id.trim().is_empty() {
            return Err(ClientError::EmptyEmployeeId);
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::CannotBeABase(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["api", "v1", "employeeManager", "employees", employee_id]);
        Ok(url)
    }

    /// Fetches one employee record by id.
    pub async fn fetch_employee(&self, employee_id: &str) -> Result<EmployeeRecord, ClientError> {
        let url = self.employee_url(employee_id)?;
        tracing::debug!(%url, "fetching employee record");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status, url });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_documented_resource_path() {
        let client = EmployeeManagerClient::new("http://localhost:8085").unwrap();
        let url = client.employee_url("E123").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8085/api/v1/employeeManager/employees/E123"
        );
    }

    #[test]
    fn keeps_a_base_path_prefix() {
        let client = EmployeeManagerClient::new("http://corp.example/hr/").unwrap();
        let url = client.employee_url("E123").unwrap();
        assert_eq!(
            url.as_str(),
            "http://corp.example/hr/api/v1/employeeManager/employees/E123"
        );
    }

    #[test]
    fn rejects_empty_and_blank_employee_ids() {
        let client = EmployeeManagerClient::new(DEFAULT_BASE_URL).unwrap();
        assert!(matches!(
            client.employee_url(""),
            Err(ClientError::EmptyEmployeeId)
        ));
        assert!(matches!(
            client.employee_url("   "),
            Err(ClientError::EmptyEmployeeId)
        ));
    }

    #[test]
    fn rejects_a_base_url_without_a_path() {
        assert!(matches!(
            EmployeeManagerClient::new("mailto:hr@corp.example"),
            Err(ClientError::CannotBeABase(_))
        ));
    }

    #[test]
    fn percent_encodes_awkward_ids() {
        let client = EmployeeManagerClient::new(DEFAULT_BASE_URL).unwrap();
        let url = client.employee_url("E 1/2").unwrap();
        assert!(url.as_str().ends_with("/employees/E%201%2F2"));
    }
}
