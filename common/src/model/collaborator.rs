use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollaboratorStatus {
    #[default]
    Pending,
    Active,
    Inactive,
}

impl CollaboratorStatus {
    pub const ALL: [CollaboratorStatus; 3] = [
        CollaboratorStatus::Pending,
        CollaboratorStatus::Active,
        CollaboratorStatus::Inactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollaboratorStatus::Pending => "pending",
            CollaboratorStatus::Active => "active",
            CollaboratorStatus::Inactive => "inactive",
        }
    }

    pub fn parse(s: &str) -> Option<CollaboratorStatus> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

/// A partner agency or guide working with the agency.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Collaborator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: CollaboratorStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
