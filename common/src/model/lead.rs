use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Converted,
    Rejected,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Converted,
        LeadStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Converted => "converted",
            LeadStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<LeadStatus> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

/// An enquiry captured from the contact and booking forms.
///
/// `group_size` stays `None` when the visitor leaves the field blank; it
/// must never be coerced to zero, because "party of zero" and "did not say"
/// are different answers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Lead {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_size: Option<f64>,
    pub status: LeadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_group_size_is_absent_on_the_wire() {
        let lead = Lead {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            ..Lead::default()
        };
        let json = serde_json::to_value(&lead).unwrap();
        assert!(json.get("groupSize").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn populated_group_size_round_trips() {
        let lead = Lead {
            group_size: Some(4.0),
            ..Lead::default()
        };
        let json = serde_json::to_string(&lead).unwrap();
        let back: Lead = serde_json::from_str(&json).unwrap();
        assert_eq!(back.group_size, Some(4.0));
    }

    #[test]
    fn documents_missing_fields_still_deserialize() {
        // Older code paths wrote partial documents.
        let lead: Lead = serde_json::from_str(r#"{"name":"Bo","email":"b@x.io"}"#).unwrap();
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.group_size, None);
    }
}
