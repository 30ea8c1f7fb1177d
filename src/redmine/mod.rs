mod models;

pub use models::*;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

const API_KEY_HEADER: &str = "X-Redmine-API-Key";
/// Largest page size Redmine accepts for list endpoints.
const USERS_PAGE_LIMIT: u64 = 100;

/// The tracker operations the command interpreter depends on.
#[async_trait]
pub trait Tracker: Send + Sync {
    /// Base URL used when rendering links back to the tracker.
    fn base_url(&self) -> &str;

    async fn list_users(&self) -> Result<Directory>;

    /// Issues assigned to `user_id` created on or after `created_since`.
    async fn list_issues(&self, user_id: u64, created_since: NaiveDate)
    -> Result<IssuesCollection>;

    /// Sends a partial update. Any HTTP response counts as delivered.
    async fn update_issue(&self, issue_id: u64, update: &IssueUpdate) -> Result<()>;
}

#[derive(Clone)]
pub struct RedmineClient {
    client: Client,
    base_url: String,
    api_key: String,
    user_agent: String,
}

impl RedmineClient {
    pub fn new(base_url: &str, api_key: &str, user_agent: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(API_KEY_HEADER, &self.api_key)
    }

    async fn fetch_users_page(&self, offset: u64) -> Result<Directory> {
        let url = format!("{}/users.json", self.base_url);
        tracing::debug!(%url, offset, "fetching users");

        let response = self
            .request(reqwest::Method::GET, &url)
            .query(&[("offset", offset), ("limit", USERS_PAGE_LIMIT)])
            .send()
            .await
            .context("failed to get users response")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Redmine API error ({}): {}", status, error_text);
        }

        let page = response
            .json::<Directory>()
            .await
            .context("failed to decode users response")?;
        Ok(page)
    }
}

#[async_trait]
impl Tracker for RedmineClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Walks every page of /users.json and returns them as one directory.
    async fn list_users(&self) -> Result<Directory> {
        let mut directory = self.fetch_users_page(0).await?;

        while (directory.users.len() as u64) < directory.total_count {
            let page = self.fetch_users_page(directory.users.len() as u64).await?;
            if page.users.is_empty() {
                tracing::warn!(
                    fetched = directory.users.len(),
                    total_count = directory.total_count,
                    "users page came back empty before total_count was reached"
                );
                break;
            }
            directory.users.extend(page.users);
        }

        directory.offset = 0;
        directory.limit = directory.users.len() as u64;
        tracing::debug!(users = directory.users.len(), "fetched all user pages");
        Ok(directory)
    }

    async fn list_issues(
        &self,
        user_id: u64,
        created_since: NaiveDate,
    ) -> Result<IssuesCollection> {
        let url = format!("{}/issues.json", self.base_url);
        let created_on = format!(">={}", created_since.format("%Y-%m-%d"));
        tracing::debug!(%url, user_id, %created_on, "fetching issues");

        let response = self
            .request(reqwest::Method::GET, &url)
            .query(&[
                ("assigned_to_id", user_id.to_string()),
                ("created_on", created_on),
            ])
            .send()
            .await
            .context("failed to get issues response")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Redmine API error ({}): {}", status, error_text);
        }

        let issues = response
            .json::<IssuesCollection>()
            .await
            .context("failed to decode issues response")?;
        tracing::debug!(count = issues.issues.len(), "got issue records");
        Ok(issues)
    }

    async fn update_issue(&self, issue_id: u64, update: &IssueUpdate) -> Result<()> {
        let url = format!("{}/issues/{}.json", self.base_url, issue_id);
        let request_body = UpdateIssueRequest {
            issue: update.clone(),
        };

        let response = self
            .request(reqwest::Method::PUT, &url)
            .json(&request_body)
            .send()
            .await
            .context("failed to get update response")?;

        // The body is not inspected; the status is only logged.
        let status = response.status();
        if status.is_success() {
            tracing::debug!(issue_id, %status, "issue update accepted");
        } else {
            tracing::warn!(issue_id, %status, "issue update returned a non-success status");
        }
        Ok(())
    }
}
