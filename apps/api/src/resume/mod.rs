//! Resume Data Model — the normalized, template-agnostic representation of a
//! resume being edited.
//!
//! Pure data. Behavior lives elsewhere: the renderer projects it, the
//! autosave coordinator persists it, and the import mapping rebuilds it from
//! a decoded generation reply. Wire names are camelCase to match the web
//! client's editor state.
#![allow(dead_code)]

pub mod import;

use serde::{Deserialize, Serialize};

use crate::models::user::AccountIdentity;

/// Full editor state for one resume. Serialized wholesale to the draft slot
/// on every autosave tick and sent with every generate action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub target_role: String,
    /// Used only for tailoring and cover-letter generation.
    pub job_description: String,
    pub personal_details: PersonalDetails,
    pub experience_items: Vec<ExperienceItem>,
    pub education_items: Vec<EducationItem>,
    pub skill_items: Vec<SkillItem>,
    pub preferences: Preferences,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_data: Option<ImageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

impl ResumeData {
    /// Fresh editor state for a new session, seeded from the signed-in
    /// account: name split on the first space, registered email carried over.
    pub fn seeded(identity: &AccountIdentity) -> Self {
        let (first_name, last_name) = match identity.name.split_once(' ') {
            Some((first, rest)) => (first.to_string(), rest.to_string()),
            None => (identity.name.clone(), String::new()),
        };
        ResumeData {
            personal_details: PersonalDetails {
                first_name,
                last_name,
                email: identity.email.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Contact and summary fields. All independently optional; never
/// format-validated at this layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub summary: String,
}

/// One employment entry. `id` is client-generated and used only for
/// edit/remove addressing — it is never a foreign key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceItem {
    pub id: String,
    pub role: String,
    pub company: String,
    pub dates: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationItem {
    pub id: String,
    pub degree: String,
    pub school: String,
    pub dates: String,
}

/// One skill category. `items` is a free-text comma-joined list; consumers
/// split on `,` at render time. Items containing literal commas are lost in
/// that split — a known boundary of the editor, not something to repair here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillItem {
    pub id: String,
    pub category: String,
    pub items: String,
}

/// Output preferences forwarded to the generation prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub pages: PageCount,
    pub tone: Tone,
    pub region: Region,
    pub photo: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageCount {
    #[default]
    #[serde(rename = "1-page")]
    One,
    #[serde(rename = "2-page")]
    Two,
}

impl PageCount {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageCount::One => "1-page",
            PageCount::Two => "2-page",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Conservative,
    #[default]
    Modern,
    Bold,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Conservative => "conservative",
            Tone::Modern => "modern",
            Tone::Bold => "bold",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[default]
    US,
    EU,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::US => "US",
            Region::EU => "EU",
        }
    }
}

/// Base64 payload with its declared mime type: the profile photo or an
/// uploaded document, passed through to the generation service unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageData {
    pub mime_type: String,
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_wire_values() {
        let prefs = Preferences {
            pages: PageCount::Two,
            tone: Tone::Bold,
            region: Region::EU,
            photo: true,
        };
        let json = serde_json::to_value(&prefs).unwrap();
        assert_eq!(json["pages"], "2-page");
        assert_eq!(json["tone"], "bold");
        assert_eq!(json["region"], "EU");
        assert_eq!(json["photo"], true);
    }

    #[test]
    fn test_resume_data_deserializes_from_partial_payload() {
        // The client may send only the fields the user touched.
        let data: ResumeData = serde_json::from_str(
            r#"{"targetRole": "Staff Engineer", "preferences": {"tone": "conservative"}}"#,
        )
        .unwrap();
        assert_eq!(data.target_role, "Staff Engineer");
        assert_eq!(data.preferences.tone, Tone::Conservative);
        assert_eq!(data.preferences.pages, PageCount::One);
        assert!(data.experience_items.is_empty());
        assert!(data.profile_image_data.is_none());
    }

    #[test]
    fn test_resume_data_round_trips() {
        let mut data = ResumeData::default();
        data.experience_items.push(ExperienceItem {
            id: "1".to_string(),
            role: "Product Manager".to_string(),
            company: "Tech Corp".to_string(),
            dates: "2020 - Present".to_string(),
            description: "Led a team of 5 engineers".to_string(),
        });
        data.template_id = Some("modern_tech".to_string());

        let json = serde_json::to_string(&data).unwrap();
        let recovered: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, data);
    }

    #[test]
    fn test_seeded_splits_account_name_on_first_space() {
        let identity = AccountIdentity {
            name: "Ada Mary Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };
        let data = ResumeData::seeded(&identity);
        assert_eq!(data.personal_details.first_name, "Ada");
        assert_eq!(data.personal_details.last_name, "Mary Lovelace");
        assert_eq!(data.personal_details.email, "ada@example.com");
    }

    #[test]
    fn test_seeded_single_token_name() {
        let identity = AccountIdentity {
            name: "Madonna".to_string(),
            email: "m@example.com".to_string(),
        };
        let data = ResumeData::seeded(&identity);
        assert_eq!(data.personal_details.first_name, "Madonna");
        assert_eq!(data.personal_details.last_name, "");
    }
}
