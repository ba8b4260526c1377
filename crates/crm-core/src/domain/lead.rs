//! Lead Entity
//!
//! A prospective customer record. Leads are created from the new-lead form,
//! deleted after an inline confirmation and never edited in between.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::entity::{remove_by_id, DomainError, DomainResult, Entity};

pub const DEFAULT_STATUS: &str = "new";

/// A saved lead, newest first in its collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    /// Stored as `""` when absent
    #[serde(default, serialize_with = "none_as_empty", deserialize_with = "empty_as_none")]
    pub phone: Option<String>,
    #[serde(default, serialize_with = "none_as_empty", deserialize_with = "empty_as_none")]
    pub email: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    /// Epoch milliseconds
    pub created_at: i64,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

fn none_as_empty<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

impl Lead {
    /// "phone • email" line shown under the name
    pub fn contact_line(&self) -> String {
        format!(
            "{} • {}",
            self.phone.as_deref().unwrap_or(""),
            self.email.as_deref().unwrap_or("")
        )
    }

    fn matches(&self, needle: &str) -> bool {
        let hit = |field: &str| field.to_lowercase().contains(needle);
        hit(self.name.as_str())
            || self.phone.as_deref().is_some_and(hit)
            || self.email.as_deref().is_some_and(hit)
    }
}

impl Entity for Lead {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Raw input from the new-lead form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewLead {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Form input that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLead {
    name: String,
    phone: Option<String>,
    email: Option<String>,
}

impl NewLead {
    /// Trims every field and rejects a blank name.
    pub fn validate(&self) -> DomainResult<ValidLead> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("lead name is required".into()));
        }
        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        Ok(ValidLead {
            name: name.to_string(),
            phone: optional(&self.phone),
            email: optional(&self.email),
        })
    }
}

impl ValidLead {
    pub fn into_lead(self, now_ms: i64) -> Lead {
        Lead {
            id: format!("l_{}", now_ms),
            name: self.name,
            phone: self.phone,
            email: self.email,
            status: default_status(),
            created_at: now_ms,
        }
    }
}

/// Returns the next lead collection with the new lead at the head.
pub fn add_lead(leads: &[Lead], input: ValidLead, now_ms: i64) -> Vec<Lead> {
    let mut updated = Vec::with_capacity(leads.len() + 1);
    updated.push(input.into_lead(now_ms));
    updated.extend_from_slice(leads);
    updated
}

/// Returns the next lead collection without the lead `id`.
pub fn delete_lead(leads: &[Lead], id: &str) -> Vec<Lead> {
    remove_by_id(leads, id)
}

/// Case-insensitive substring match over name, phone and email.
pub fn filter_leads(leads: &[Lead], query: &str) -> Vec<Lead> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return leads.to_vec();
    }
    leads.iter().filter(|lead| lead.matches(&needle)).cloned().collect()
}
