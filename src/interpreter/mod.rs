//! Turns free-text chat messages into tracker operations and replies.

mod command;
mod intent;

pub use command::{Action, Command};
pub use intent::{Intent, classify};

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};

use crate::directory::DirectoryCache;
use crate::error::CommandError;
use crate::redmine::{IssueStatus, IssueUpdate, Tracker};
use crate::tools::{
    close_note, format_closed, format_issue_list, format_ready_to_test, ready_to_test_note,
};

/// How far back ListIssues looks for issues.
const LOOKBACK_YEARS: i32 = 2;

pub struct CommandInterpreter {
    tracker: Arc<dyn Tracker>,
    directory: DirectoryCache,
    bot_name: String,
}

impl CommandInterpreter {
    pub fn new(tracker: Arc<dyn Tracker>, bot_name: impl Into<String>) -> Self {
        Self {
            tracker,
            directory: DirectoryCache::new(),
            bot_name: bot_name.into(),
        }
    }

    pub fn directory(&self) -> &DirectoryCache {
        &self.directory
    }

    /// Handles one chat message. Failures come back as reply text.
    pub async fn handle(&self, message: &str, requester: &str) -> String {
        match self.try_handle(message, requester).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::info!(requester, error = %e, "command not carried out");
                e.to_string()
            }
        }
    }

    async fn try_handle(&self, message: &str, requester: &str) -> Result<String, CommandError> {
        let directory = self.directory.ensure_loaded(self.tracker.as_ref()).await?;
        let command = Command::parse(message, requester, &directory)?;
        tracing::info!(requester, action = ?command.action, "handling command");

        match command.action {
            Action::ListIssues { user_id } => self.list_issues(&command.requester, user_id).await,
            Action::CloseIssue { issue_id } => {
                self.close_issue(&command.requester, issue_id).await
            }
            Action::MarkReadyToTest {
                issue_id,
                assignee_id,
            } => {
                self.mark_ready_to_test(&command.requester, issue_id, assignee_id)
                    .await
            }
        }
    }

    async fn list_issues(&self, requester: &str, user_id: u64) -> Result<String, CommandError> {
        let since = lookback_start(Local::now().date_naive());
        let collection = self
            .tracker
            .list_issues(user_id, since)
            .await
            .map_err(|e| CommandError::transport("getting your issues", e))?;

        // The server-side assignee filter is not trusted on its own.
        let mine: Vec<_> = collection
            .issues
            .iter()
            .filter(|issue| issue.is_assigned_to(user_id))
            .collect();
        if mine.len() != collection.issues.len() {
            tracing::warn!(
                user_id,
                returned = collection.issues.len(),
                kept = mine.len(),
                "tracker returned issues assigned to someone else"
            );
        }

        Ok(format_issue_list(self.tracker.base_url(), requester, &mine))
    }

    async fn close_issue(&self, requester: &str, issue_id: u64) -> Result<String, CommandError> {
        let update = IssueUpdate::new(IssueStatus::Closed, close_note(&self.bot_name, requester));
        self.tracker
            .update_issue(issue_id, &update)
            .await
            .map_err(|e| CommandError::transport(format!("closing issue #{issue_id}"), e))?;

        tracing::info!(issue_id, "closed issue");
        Ok(format_closed(self.tracker.base_url(), issue_id))
    }

    async fn mark_ready_to_test(
        &self,
        requester: &str,
        issue_id: u64,
        assignee_id: u64,
    ) -> Result<String, CommandError> {
        let update = IssueUpdate::new(
            IssueStatus::ReadyToTest,
            ready_to_test_note(&self.bot_name, requester),
        )
        .assignee(assignee_id);
        self.tracker
            .update_issue(issue_id, &update)
            .await
            .map_err(|e| {
                CommandError::transport(format!("marking issue #{issue_id} ready to test"), e)
            })?;

        tracing::info!(issue_id, assignee_id, "marked issue ready to test");
        Ok(format_ready_to_test(self.tracker.base_url(), issue_id))
    }
}

/// Earliest creation date ListIssues reports, two years before `today`.
/// A Feb 29 that does not exist in the target year rolls over to Mar 1.
pub fn lookback_start(today: NaiveDate) -> NaiveDate {
    let year = today.year() - LOOKBACK_YEARS;
    today
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(NaiveDate::MIN)
}
