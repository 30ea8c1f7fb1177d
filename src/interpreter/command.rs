use crate::error::CommandError;
use crate::redmine::Directory;

use super::intent::{Intent, classify};

/// Token that switches the ready-to-test scan into assignee lookup.
const ASSIGN_KEYWORD: &str = "assign";

/// One parsed chat message, with every operand already resolved to ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub requester: String,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListIssues { user_id: u64 },
    CloseIssue { issue_id: u64 },
    MarkReadyToTest { issue_id: u64, assignee_id: u64 },
}

impl Command {
    pub fn parse(
        message: &str,
        requester: &str,
        directory: &Directory,
    ) -> Result<Self, CommandError> {
        let intent = classify(message).ok_or_else(|| CommandError::Unrecognized {
            requester: requester.to_string(),
        })?;

        let action = match intent {
            Intent::ListIssues => {
                let user_id = directory
                    .resolve(requester)
                    .ok_or_else(|| CommandError::UserNotFound {
                        name: requester.to_string(),
                    })?;
                Action::ListIssues { user_id }
            }
            Intent::CloseIssue => {
                let issue_id = first_issue_id(message).ok_or(CommandError::IssueIdNotParsed)?;
                Action::CloseIssue { issue_id }
            }
            Intent::MarkReadyToTest => {
                let issue_id = last_issue_id(message).ok_or(CommandError::IssueIdNotParsed)?;
                let assignee_id = assignee_after_keyword(message, directory)
                    .ok_or(CommandError::AssigneeNotFound)?;
                Action::MarkReadyToTest {
                    issue_id,
                    assignee_id,
                }
            }
        };

        Ok(Self {
            requester: requester.to_string(),
            action,
        })
    }
}

/// First whitespace-separated token that parses as an integer.
fn first_issue_id(message: &str) -> Option<u64> {
    message.split_whitespace().find_map(|token| token.parse().ok())
}

/// Last whitespace-separated token that parses as an integer.
fn last_issue_id(message: &str) -> Option<u64> {
    message
        .split_whitespace()
        .filter_map(|token| token.parse().ok())
        .last()
}

/// Every token after `assign` is looked up in the directory; the last one that
/// resolves wins.
fn assignee_after_keyword(message: &str, directory: &Directory) -> Option<u64> {
    let mut armed = false;
    let mut assignee = None;

    for token in message.split_whitespace() {
        if token == ASSIGN_KEYWORD {
            armed = true;
            continue;
        }
        if armed {
            if let Some(id) = directory.resolve(token) {
                assignee = Some(id);
            }
        }
    }

    assignee
}
