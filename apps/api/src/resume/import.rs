//! Import mapping — rebuilds editor state from the structured `RESUME_JSON`
//! section of a decoded generation reply.
//!
//! The payload is an external, LLM-controlled schema. Treat it as untrusted:
//! every field access defaults to empty on absence, list entries may be
//! objects or plain strings, and nothing here ever returns an error.

use serde_json::Value;
use uuid::Uuid;

use crate::resume::{
    EducationItem, ExperienceItem, PersonalDetails, ResumeData, SkillItem,
};

/// Maps a decoded resume JSON payload into `ResumeData`, best-effort.
///
/// Field matching mirrors what the editor expects: the combined header name
/// is split into first/last on the first space, `header.location` is split
/// on `","` into city/state, and each experience entry's highlights collapse
/// into the flat multi-line description field.
pub fn map_resume_json(json: &Value) -> ResumeData {
    let header = &json["header"];

    let (first_name, last_name) = split_name(str_of(&header["name"]));
    let (city, state) = split_location(str_of(&header["location"]));

    let personal_details = PersonalDetails {
        first_name,
        last_name,
        email: str_of(&header["email"]).to_string(),
        phone: str_of(&header["phone"]).to_string(),
        // Parsers rarely recover a street address; leave it for the user.
        address: String::new(),
        city,
        state,
        country: String::new(),
        summary: str_of(&json["summary"]).to_string(),
    };

    ResumeData {
        target_role: str_of(&header["title"]).to_string(),
        personal_details,
        experience_items: map_experience(&json["experience"]),
        education_items: map_education(&json["education"]),
        skill_items: map_skills(&json["skills"]),
        ..Default::default()
    }
}

fn map_experience(entries: &Value) -> Vec<ExperienceItem> {
    entries
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|exp| ExperienceItem {
                    id: new_item_id(),
                    role: str_of(&exp["role"]).to_string(),
                    company: str_of(&exp["company"]).to_string(),
                    dates: join_dates(str_of(&exp["start"]), str_of(&exp["end"])),
                    description: join_highlights(&exp["highlights"]),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn map_education(entries: &Value) -> Vec<EducationItem> {
    entries
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|edu| EducationItem {
                    id: new_item_id(),
                    degree: str_of(&edu["degree"]).to_string(),
                    school: str_of(&edu["school"]).to_string(),
                    dates: join_dates(str_of(&edu["start"]), str_of(&edu["end"])),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Each skills category with a non-empty array becomes one `SkillItem`:
/// category key with its first letter capitalized, values joined with `", "`.
fn map_skills(skills: &Value) -> Vec<SkillItem> {
    let Some(categories) = skills.as_object() else {
        return Vec::new();
    };

    categories
        .iter()
        .filter_map(|(category, items)| {
            let values: Vec<&str> = items
                .as_array()?
                .iter()
                .filter_map(Value::as_str)
                .collect();
            if values.is_empty() {
                return None;
            }
            Some(SkillItem {
                id: new_item_id(),
                category: capitalize(category),
                items: values.join(", "),
            })
        })
        .collect()
}

/// `"start - end"` when both are present, `start` alone otherwise, empty when
/// even the start is missing.
fn join_dates(start: &str, end: &str) -> String {
    if !start.is_empty() && !end.is_empty() {
        format!("{start} - {end}")
    } else {
        start.to_string()
    }
}

/// Highlights may be `{bullet, tags, metrics}` objects or plain strings.
/// Either way they collapse into one newline-joined description.
fn join_highlights(highlights: &Value) -> String {
    highlights
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|h| match h {
                    Value::String(s) => s.as_str(),
                    other => str_of(&other["bullet"]),
                })
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default()
}

fn split_name(name: &str) -> (String, String) {
    match name.split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.to_string()),
        None => (name.to_string(), String::new()),
    }
}

fn split_location(location: &str) -> (String, String) {
    let mut parts = location.split(',');
    let city = parts.next().unwrap_or("").trim().to_string();
    let state = parts.next().unwrap_or("").trim().to_string();
    (city, state)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn str_of(value: &Value) -> &str {
    value.as_str().unwrap_or("")
}

fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_name_splits_on_first_space() {
        let data = map_resume_json(&json!({"header": {"name": "Jane Doe"}}));
        assert_eq!(data.personal_details.first_name, "Jane");
        assert_eq!(data.personal_details.last_name, "Doe");
    }

    #[test]
    fn test_single_token_name_has_empty_last_name() {
        let data = map_resume_json(&json!({"header": {"name": "Madonna"}}));
        assert_eq!(data.personal_details.first_name, "Madonna");
        assert_eq!(data.personal_details.last_name, "");
    }

    #[test]
    fn test_multi_word_last_name_is_preserved() {
        let data = map_resume_json(&json!({"header": {"name": "Ana de la Cruz"}}));
        assert_eq!(data.personal_details.first_name, "Ana");
        assert_eq!(data.personal_details.last_name, "de la Cruz");
    }

    #[test]
    fn test_location_splits_into_city_and_state() {
        let data = map_resume_json(&json!({"header": {"location": "Austin, TX"}}));
        assert_eq!(data.personal_details.city, "Austin");
        assert_eq!(data.personal_details.state, "TX");
    }

    #[test]
    fn test_dates_join_start_and_end() {
        let data = map_resume_json(&json!({
            "experience": [
                {"company": "A", "role": "Dev", "start": "Jan 2020", "end": "Dec 2022"},
                {"company": "B", "role": "Dev", "start": "2023"},
                {"company": "C", "role": "Dev", "end": "2019"}
            ]
        }));
        assert_eq!(data.experience_items[0].dates, "Jan 2020 - Dec 2022");
        assert_eq!(data.experience_items[1].dates, "2023");
        // An end date without a start is unusable on its own.
        assert_eq!(data.experience_items[2].dates, "");
    }

    #[test]
    fn test_highlights_join_objects_and_plain_strings() {
        let data = map_resume_json(&json!({
            "experience": [{
                "company": "A",
                "role": "Dev",
                "highlights": [
                    {"bullet": "Shipped the thing", "tags": [], "metrics": []},
                    "Kept it running"
                ]
            }]
        }));
        assert_eq!(
            data.experience_items[0].description,
            "Shipped the thing\nKept it running"
        );
    }

    #[test]
    fn test_skills_categories_become_skill_items() {
        let data = map_resume_json(&json!({
            "skills": {"core": ["Rust", "SQL"], "tools": []}
        }));
        assert_eq!(data.skill_items.len(), 1);
        assert_eq!(data.skill_items[0].category, "Core");
        assert_eq!(data.skill_items[0].items, "Rust, SQL");
    }

    #[test]
    fn test_missing_keys_yield_empty_fields() {
        let data = map_resume_json(&json!({}));
        assert_eq!(data.target_role, "");
        assert_eq!(data.personal_details.first_name, "");
        assert!(data.experience_items.is_empty());
        assert!(data.education_items.is_empty());
        assert!(data.skill_items.is_empty());
    }

    #[test]
    fn test_education_maps_degree_and_school() {
        let data = map_resume_json(&json!({
            "education": [{"school": "University of Tech", "degree": "BS Computer Science",
                           "start": "2016", "end": "2020"}]
        }));
        assert_eq!(data.education_items[0].school, "University of Tech");
        assert_eq!(data.education_items[0].degree, "BS Computer Science");
        assert_eq!(data.education_items[0].dates, "2016 - 2020");
    }

    #[test]
    fn test_item_ids_are_unique() {
        let data = map_resume_json(&json!({
            "experience": [
                {"company": "A", "role": "Dev"},
                {"company": "B", "role": "Dev"}
            ]
        }));
        assert_ne!(data.experience_items[0].id, data.experience_items[1].id);
    }
}
