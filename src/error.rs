use thiserror::Error;

/// Everything that can stop a chat command. The `Display` text is the reply
/// the requester sees.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unable to get users from Redmine.")]
    DirectoryUnavailable,

    #[error("Well crud, we hit a snag: I couldn't find a user record for \"{name}\".")]
    UserNotFound { name: String },

    #[error("I couldn't figure out who to assign the issue to, so I had to give up.")]
    AssigneeNotFound,

    #[error("I couldn't figure out what the issue ID was, so I had to give up.")]
    IssueIdNotParsed,

    #[error("I didn't get a response from Redmine while {action}: {source:#}")]
    Transport {
        action: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Hi {requester}, I didn't understand your instructions")]
    Unrecognized { requester: String },
}

impl CommandError {
    pub fn transport(action: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Transport {
            action: action.into(),
            source,
        }
    }
}
