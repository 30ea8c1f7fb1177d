//! In-memory tracker used by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Notify;

use crate::redmine::{Directory, Issue, IssueUpdate, IssuesCollection, Property, Tracker, User};

pub const BASE_URL: &str = "https://tracker.example.com/redmine";

pub fn directory_of(users: &[(u64, &str, &str)]) -> Directory {
    Directory {
        users: users
            .iter()
            .map(|(id, first, last)| User {
                id: *id,
                login: first.to_lowercase(),
                firstname: first.to_string(),
                lastname: last.to_string(),
                ..Default::default()
            })
            .collect(),
        total_count: users.len() as u64,
        offset: 0,
        limit: 25,
    }
}

pub fn issue(id: u64, project: &str, subject: &str, assignee: Option<u64>) -> Issue {
    Issue {
        id,
        project: Some(Property {
            id: 1,
            name: project.to_string(),
        }),
        assigned_to: assignee.map(|id| Property {
            id,
            name: format!("user {id}"),
        }),
        subject: subject.to_string(),
        ..Default::default()
    }
}

#[derive(Default)]
pub struct FakeTracker {
    users: Mutex<Option<Directory>>,
    issues: Mutex<Vec<Issue>>,
    fail_issues: bool,
    fail_updates: bool,
    user_fetches: AtomicUsize,
    issue_queries: Mutex<Vec<(u64, NaiveDate)>>,
    updates: Mutex<Vec<(u64, IssueUpdate)>>,
    gate: Mutex<Option<Arc<Notify>>>,
    entered: Notify,
}

impl FakeTracker {
    pub fn with_users(directory: Directory) -> Self {
        Self {
            users: Mutex::new(Some(directory)),
            ..Default::default()
        }
    }

    pub fn failing_users() -> Self {
        Self::default()
    }

    pub fn with_issues(mut self, issues: Vec<Issue>) -> Self {
        self.issues = Mutex::new(issues);
        self
    }

    pub fn failing_issues(mut self) -> Self {
        self.fail_issues = true;
        self
    }

    pub fn failing_updates(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    pub fn set_users(&self, directory: Directory) {
        *self.users.lock().unwrap() = Some(directory);
    }

    /// Parks every later `list_users` call until the returned handle is notified.
    pub fn hold_user_fetches(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    /// Resolves once a held `list_users` call has started.
    pub async fn wait_for_user_fetch(&self) {
        self.entered.notified().await;
    }

    pub fn user_fetches(&self) -> usize {
        self.user_fetches.load(Ordering::SeqCst)
    }

    pub fn issue_queries(&self) -> Vec<(u64, NaiveDate)> {
        self.issue_queries.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<(u64, IssueUpdate)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl Tracker for FakeTracker {
    fn base_url(&self) -> &str {
        BASE_URL
    }

    async fn list_users(&self) -> Result<Directory> {
        self.user_fetches.fetch_add(1, Ordering::SeqCst);

        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            self.entered.notify_one();
            gate.notified().await;
        }

        self.users
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    async fn list_issues(
        &self,
        user_id: u64,
        created_since: NaiveDate,
    ) -> Result<IssuesCollection> {
        self.issue_queries
            .lock()
            .unwrap()
            .push((user_id, created_since));
        if self.fail_issues {
            anyhow::bail!("connection reset");
        }

        let issues = self.issues.lock().unwrap().clone();
        Ok(IssuesCollection {
            total_count: issues.len() as u64,
            issues,
            offset: 0,
            limit: 25,
        })
    }

    async fn update_issue(&self, issue_id: u64, update: &IssueUpdate) -> Result<()> {
        if self.fail_updates {
            anyhow::bail!("connection refused");
        }
        self.updates
            .lock()
            .unwrap()
            .push((issue_id, update.clone()));
        Ok(())
    }
}
