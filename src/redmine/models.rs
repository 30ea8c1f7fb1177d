use serde::{Deserialize, Serialize};

/// Response from GET /users.json, held as-is by the directory cache.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Directory {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
}

impl Directory {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// First user, in directory order, whose first or last name equals `name`
    /// ignoring case. Ambiguous names resolve to the earliest entry.
    pub fn resolve(&self, name: &str) -> Option<u64> {
        let name = name.to_lowercase();
        self.users
            .iter()
            .find(|user| user.answers_to(&name))
            .map(|user| user.id)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub mail: String,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub last_login_on: Option<String>,
}

impl User {
    /// `name` must already be lowercased.
    fn answers_to(&self, name: &str) -> bool {
        self.firstname.to_lowercase() == name || self.lastname.to_lowercase() == name
    }
}

/// Response from GET /issues.json
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IssuesCollection {
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Issue {
    pub id: u64,
    pub project: Option<Property>,
    pub tracker: Option<Property>,
    pub status: Option<Property>,
    pub priority: Option<Property>,
    pub author: Option<Property>,
    pub assigned_to: Option<Property>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: Option<String>,
    #[serde(default)]
    pub done_ratio: u8,
    pub created_on: Option<String>,
    pub updated_on: Option<String>,
    pub category: Option<Property>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    pub fixed_version: Option<Property>,
    pub due_date: Option<String>,
}

impl Issue {
    pub fn is_assigned_to(&self, user_id: u64) -> bool {
        self.assigned_to.as_ref().is_some_and(|a| a.id == user_id)
    }
}

/// An (id, name) reference to another tracker entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Property {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CustomField {
    pub id: u64,
    pub name: CustomFieldName,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum CustomFieldName {
    #[serde(rename = "Caller or Contact Name")]
    CallerOrContactName,
    #[serde(rename = "Custom Work")]
    CustomWork,
    #[serde(rename = "Customer")]
    Customer,
    #[serde(rename = "DB Name")]
    DbName,
    #[serde(rename = "EC Location")]
    EcLocation,
    #[serde(rename = "Emp No")]
    EmpNo,
    #[serde(rename = "Filename")]
    Filename,
    #[serde(rename = "Program Name")]
    ProgramName,
    #[serde(rename = "Received")]
    Received,
    #[serde(other)]
    Other,
}

/// Status codes from the tracker's `issue_statuses` table that the bot writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueStatus {
    ReadyToTest,
    Closed,
}

impl IssueStatus {
    pub fn code(self) -> &'static str {
        match self {
            Self::ReadyToTest => "3",
            Self::Closed => "5",
        }
    }
}

/// Request body for PUT /issues/{id}.json
#[derive(Debug, Serialize)]
pub struct UpdateIssueRequest {
    pub issue: IssueUpdate,
}

/// Partial update: only the changed fields plus a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueUpdate {
    pub status_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<u64>,
    pub notes: String,
}

impl IssueUpdate {
    pub fn new(status: IssueStatus, notes: impl Into<String>) -> Self {
        Self {
            status_id: status.code().to_string(),
            assigned_to_id: None,
            notes: notes.into(),
        }
    }

    /// Set the assignee by user ID
    pub fn assignee(mut self, user_id: u64) -> Self {
        self.assigned_to_id = Some(user_id);
        self
    }
}
