//! Template Renderer — projects one `ResumeData` onto a fixed catalog of
//! visually distinct layouts.
//!
//! Every layout is a pure function of the data and the account identity:
//! no layout mutates the data, and identical input renders byte-identical
//! HTML. That determinism is what makes the live preview and the downloaded
//! document the same artifact.

mod classic;
mod compact;
mod creative;
mod executive;
pub mod handlers;
mod html;
mod minimal;
mod modern;

use crate::models::user::AccountIdentity;
use crate::resume::{ImageData, ResumeData};

/// Shown when neither the editable summary nor a job description exists.
/// Layouts never leave the summary block empty.
const SUMMARY_PLACEHOLDER: &str = "Experienced professional with a proven track record of \
success in delivering high-quality results. Skilled in adapting to new challenges and \
utilizing industry best practices to drive efficiency and growth.";

/// The closed layout catalog. Identifiers must match the web client's
/// template selector exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    /// Classic serif single-column with a centered header. The default.
    ClassicPro,
    /// Dark sidebar panel, two-column.
    ModernTech,
    /// Banner header, two-column body.
    CreativeBold,
    /// Serif executive single-column with a competency grid.
    ExecutiveLead,
    /// Centered minimal header, two-column footer grid.
    MinimalistClean,
    /// Dense three-column grid.
    CompactGrid,
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        TemplateId::ClassicPro,
        TemplateId::ModernTech,
        TemplateId::CreativeBold,
        TemplateId::ExecutiveLead,
        TemplateId::MinimalistClean,
        TemplateId::CompactGrid,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TemplateId::ClassicPro => "classic_pro",
            TemplateId::ModernTech => "modern_tech",
            TemplateId::CreativeBold => "creative_bold",
            TemplateId::ExecutiveLead => "executive_lead",
            TemplateId::MinimalistClean => "minimalist_clean",
            TemplateId::CompactGrid => "compact_grid",
        }
    }

    /// Display name shown in the client's template selector.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateId::ClassicPro => "Classic Professional",
            TemplateId::ModernTech => "Modern Tech",
            TemplateId::CreativeBold => "Creative Bold",
            TemplateId::ExecutiveLead => "Executive Lead",
            TemplateId::MinimalistClean => "Minimalist Clean",
            TemplateId::CompactGrid => "Compact Grid",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            TemplateId::ClassicPro => "Serif single-column, ATS-safe",
            TemplateId::ModernTech => "Dark sidebar, two-column",
            TemplateId::CreativeBold => "Banner header, two-column",
            TemplateId::ExecutiveLead => "Serif with competency grid",
            TemplateId::MinimalistClean => "Centered minimal, footer grid",
            TemplateId::CompactGrid => "Dense three-column grid",
        }
    }

    /// Maps an identifier to its layout. Anything outside the catalog —
    /// including a missing id — falls back to the default layout; an unknown
    /// template is never an error.
    pub fn resolve(id: Option<&str>) -> TemplateId {
        match id {
            Some("modern_tech") => TemplateId::ModernTech,
            Some("creative_bold") => TemplateId::CreativeBold,
            Some("executive_lead") => TemplateId::ExecutiveLead,
            Some("minimalist_clean") => TemplateId::MinimalistClean,
            Some("compact_grid") => TemplateId::CompactGrid,
            _ => TemplateId::ClassicPro,
        }
    }
}

/// Renders the resume as a self-contained HTML document in the selected
/// layout (or the default when the id is unknown).
pub fn render(data: &ResumeData, template_id: Option<&str>, identity: &AccountIdentity) -> String {
    let ctx = RenderContext::derive(data, identity);
    match TemplateId::resolve(template_id) {
        TemplateId::ClassicPro => classic::render(data, &ctx),
        TemplateId::ModernTech => modern::render(data, &ctx),
        TemplateId::CreativeBold => creative::render(data, &ctx),
        TemplateId::ExecutiveLead => executive::render(data, &ctx),
        TemplateId::MinimalistClean => minimal::render(data, &ctx),
        TemplateId::CompactGrid => compact::render(data, &ctx),
    }
}

/// Field derivations shared by every layout, computed once per render so all
/// templates agree on names, fallbacks, and address joining.
pub(crate) struct RenderContext<'a> {
    pub display_name: String,
    pub display_email: &'a str,
    pub phone: &'a str,
    /// Non-empty segments of address/city/state/country joined with `", "`.
    /// Empty when all four are empty — the address line is omitted entirely.
    pub full_address: String,
    pub summary: &'a str,
    pub target_role: &'a str,
    pub region: &'static str,
    /// Present only when the photo preference is on AND an image exists.
    pub photo: Option<&'a ImageData>,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn derive(data: &'a ResumeData, identity: &'a AccountIdentity) -> Self {
        let details = &data.personal_details;

        // Each name half falls back to the account name independently,
        // splitting on the first space.
        let (account_first, account_last) = match identity.name.split_once(' ') {
            Some((first, rest)) => (first, rest),
            None => (identity.name.as_str(), ""),
        };
        let first = non_empty_or(&details.first_name, account_first);
        let last = non_empty_or(&details.last_name, account_last);
        let mut display_name = format!("{first} {last}").trim().to_string();
        if display_name.is_empty() {
            display_name = identity.name.clone();
        }

        let full_address = [
            details.address.as_str(),
            details.city.as_str(),
            details.state.as_str(),
            details.country.as_str(),
        ]
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

        let summary = non_empty_or(
            &details.summary,
            non_empty_or(&data.job_description, SUMMARY_PLACEHOLDER),
        );

        RenderContext {
            display_name,
            display_email: non_empty_or(&details.email, &identity.email),
            phone: &details.phone,
            full_address,
            summary,
            target_role: &data.target_role,
            region: data.preferences.region.as_str(),
            photo: if data.preferences.photo {
                data.profile_image_data.as_ref()
            } else {
                None
            },
        }
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Splits a skill item's comma-joined list into trimmed tags for chip-style
/// rendering. Empty tokens are dropped.
pub(crate) fn skill_tags(items: &str) -> Vec<&str> {
    items
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{PersonalDetails, Preferences, SkillItem};

    fn identity() -> AccountIdentity {
        AccountIdentity {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
        }
    }

    fn data_with_details(details: PersonalDetails) -> ResumeData {
        ResumeData {
            personal_details: details,
            ..Default::default()
        }
    }

    #[test]
    fn test_address_joins_only_non_empty_segments() {
        let data = data_with_details(PersonalDetails {
            city: "Austin".to_string(),
            state: "TX".to_string(),
            ..Default::default()
        });
        let identity = identity();
        let ctx = RenderContext::derive(&data, &identity);
        assert_eq!(ctx.full_address, "Austin, TX");
    }

    #[test]
    fn test_address_all_empty_is_omitted_from_output() {
        let data = data_with_details(PersonalDetails::default());
        let identity = identity();
        let ctx = RenderContext::derive(&data, &identity);
        assert_eq!(ctx.full_address, "");

        for template in TemplateId::ALL {
            let html = render(&data, Some(template.id()), &identity);
            // No dangling separators from an empty address join.
            assert!(!html.contains(", ,"), "{} leaked separators", template.id());
        }
    }

    #[test]
    fn test_display_name_prefers_editable_details() {
        let data = data_with_details(PersonalDetails {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        });
        let identity = identity();
        let ctx = RenderContext::derive(&data, &identity);
        assert_eq!(ctx.display_name, "Ada Lovelace");
    }

    #[test]
    fn test_display_name_falls_back_to_account_name() {
        let data = data_with_details(PersonalDetails::default());
        let identity = identity();
        let ctx = RenderContext::derive(&data, &identity);
        assert_eq!(ctx.display_name, "Grace Hopper");
    }

    #[test]
    fn test_display_email_falls_back_to_account_email() {
        let data = data_with_details(PersonalDetails::default());
        let identity = identity();
        let ctx = RenderContext::derive(&data, &identity);
        assert_eq!(ctx.display_email, "grace@example.com");

        let data = data_with_details(PersonalDetails {
            email: "edited@example.com".to_string(),
            ..Default::default()
        });
        let ctx = RenderContext::derive(&data, &identity);
        assert_eq!(ctx.display_email, "edited@example.com");
    }

    #[test]
    fn test_summary_fallback_chain() {
        let identity = identity();

        let mut data = data_with_details(PersonalDetails {
            summary: "Edited summary".to_string(),
            ..Default::default()
        });
        data.job_description = "JD text".to_string();
        let ctx = RenderContext::derive(&data, &identity);
        assert_eq!(ctx.summary, "Edited summary");

        data.personal_details.summary.clear();
        let ctx = RenderContext::derive(&data, &identity);
        assert_eq!(ctx.summary, "JD text");

        data.job_description.clear();
        let ctx = RenderContext::derive(&data, &identity);
        assert_eq!(ctx.summary, SUMMARY_PLACEHOLDER);
    }

    #[test]
    fn test_unknown_template_falls_back_to_default_layout() {
        let data = ResumeData::default();
        let identity = identity();
        let unknown = render(&data, Some("nonexistent_template_xyz"), &identity);
        let default = render(&data, Some("classic_pro"), &identity);
        assert_eq!(unknown, default);
    }

    #[test]
    fn test_missing_template_id_uses_default_layout() {
        let data = ResumeData::default();
        let identity = identity();
        assert_eq!(render(&data, None, &identity), render(&data, Some("classic_pro"), &identity));
    }

    #[test]
    fn test_catalog_ids_resolve_to_themselves() {
        for template in TemplateId::ALL {
            assert_eq!(TemplateId::resolve(Some(template.id())), template);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut data = ResumeData::default();
        data.target_role = "Platform Engineer".to_string();
        data.skill_items.push(SkillItem {
            id: "1".to_string(),
            category: "Technical".to_string(),
            items: "Rust, SQL".to_string(),
        });
        let identity = identity();
        for template in TemplateId::ALL {
            let first = render(&data, Some(template.id()), &identity);
            let second = render(&data, Some(template.id()), &identity);
            assert_eq!(first, second, "{} is not deterministic", template.id());
        }
    }

    #[test]
    fn test_layouts_are_visually_distinct() {
        let data = ResumeData::default();
        let identity = identity();
        let rendered: Vec<String> = TemplateId::ALL
            .iter()
            .map(|t| render(&data, Some(t.id()), &identity))
            .collect();
        for i in 0..rendered.len() {
            for j in (i + 1)..rendered.len() {
                assert_ne!(rendered[i], rendered[j]);
            }
        }
    }

    #[test]
    fn test_photo_requires_both_preference_and_image() {
        let identity = identity();
        let image = ImageData {
            mime_type: "image/png".to_string(),
            data: "aGVsbG8=".to_string(),
        };

        // Image present but preference off: no img region anywhere.
        let mut data = ResumeData {
            profile_image_data: Some(image.clone()),
            ..Default::default()
        };
        for template in TemplateId::ALL {
            let html = render(&data, Some(template.id()), &identity);
            assert!(!html.contains("<img"), "{} rendered a gated photo", template.id());
        }

        // Preference on but no image: still nothing to render.
        data.profile_image_data = None;
        data.preferences = Preferences {
            photo: true,
            ..Default::default()
        };
        for template in TemplateId::ALL {
            let html = render(&data, Some(template.id()), &identity);
            assert!(!html.contains("<img"), "{} rendered a missing photo", template.id());
        }

        // Both present: the photo-bearing layouts embed the data URI.
        data.profile_image_data = Some(image);
        let html = render(&data, Some("modern_tech"), &identity);
        assert!(html.contains("data:image/png;base64,aGVsbG8="));
    }

    #[test]
    fn test_skill_tags_split_and_trim() {
        assert_eq!(
            skill_tags("React,  TypeScript , Node.js,"),
            vec!["React", "TypeScript", "Node.js"]
        );
        assert!(skill_tags("").is_empty());
    }

    #[test]
    fn test_rendered_text_is_escaped() {
        let data = data_with_details(PersonalDetails {
            first_name: "<script>".to_string(),
            last_name: "alert('x')".to_string(),
            ..Default::default()
        });
        let identity = identity();
        let html = render(&data, Some("classic_pro"), &identity);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
