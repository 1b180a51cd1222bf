//! Response Decoder — splits one free-form generation reply into named
//! sections using the fixed marker protocol.
//!
//! The generation service returns a single text blob containing literal
//! `MARKER_NAME:` headers in a canonical order. Sections are optional by
//! design (no cover letter requested, model skipped a version), so decoding
//! never fails: an absent marker just leaves its field empty, and a bad JSON
//! section is logged and dropped without touching the other sections. Every
//! extraction re-scans the full original input; nothing is consumed.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// The marker protocol, in canonical order. Bit-exact contract with the
/// generation prompt: case-sensitive, trailing colon included.
pub const MARKERS: [&str; 9] = [
    "RESUME_JSON:",
    "GAP_AND_FIX_LIST:",
    "RESUME_ATS:",
    "RESUME_HUMAN:",
    "RESUME_TARGETED:",
    "RESUME_WITH_PHOTO:",
    "COVER_LETTER_FULL:",
    "COVER_LETTER_SHORT:",
    "COLD_EMAIL:",
];

/// One decoded generation reply. Immutable after construction; `raw` always
/// holds the original input untouched for diagnostics and fallback display.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_and_fix: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_ats: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_human: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_targeted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter_short: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cold_email: Option<String>,
    pub raw: String,
}

impl ParsedResponse {
    /// Number of sections recovered from the reply. Zero on a reply that
    /// carries no recognizable markers at all — callers use this to flag
    /// likely prompt/marker drift.
    pub fn section_count(&self) -> usize {
        [
            self.json.is_some(),
            self.gap_and_fix.is_some(),
            self.resume_ats.is_some(),
            self.resume_human.is_some(),
            self.resume_targeted.is_some(),
            self.resume_photo.is_some(),
            self.cover_letter_full.is_some(),
            self.cover_letter_short.is_some(),
            self.cold_email.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// Decodes a raw generation reply into its sections. Never fails; malformed
/// or partial input yields a partially (or entirely) empty result.
pub fn decode(raw: &str) -> ParsedResponse {
    let mut out = ParsedResponse {
        raw: raw.to_string(),
        ..Default::default()
    };

    if let Some(json_str) = extract(raw, "RESUME_JSON:", Some("GAP_AND_FIX_LIST:")) {
        // The model occasionally wraps the payload in a markdown code fence.
        let clean = json_str.replace("```json", "").replace("```", "");
        match serde_json::from_str::<Value>(clean.trim()) {
            Ok(value) => out.json = Some(value),
            Err(e) => warn!("failed to parse RESUME_JSON section: {e}"),
        }
    }

    out.gap_and_fix = extract(raw, "GAP_AND_FIX_LIST:", Some("RESUME_ATS:")).map(|list| {
        list.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    });

    out.resume_ats = extract(raw, "RESUME_ATS:", Some("RESUME_HUMAN:"));
    out.resume_human = extract(raw, "RESUME_HUMAN:", Some("RESUME_TARGETED:"));
    out.resume_targeted = extract(raw, "RESUME_TARGETED:", Some("RESUME_WITH_PHOTO:"));
    out.resume_photo = extract(raw, "RESUME_WITH_PHOTO:", Some("COVER_LETTER_FULL:"));
    out.cover_letter_full = extract(raw, "COVER_LETTER_FULL:", Some("COVER_LETTER_SHORT:"));
    out.cover_letter_short = extract(raw, "COVER_LETTER_SHORT:", Some("COLD_EMAIL:"));
    out.cold_email = extract(raw, "COLD_EMAIL:", None);

    out
}

/// Extracts the content of one section, trimmed.
///
/// Content starts right after the first occurrence of `start_marker`. It ends
/// at the canonical successor (`end_marker`) when that appears later in the
/// input; when the successor was omitted by the model, the earliest
/// occurrence of any known marker after the content start terminates the
/// section instead, so segmentation survives skipped sections. No marker at
/// all means the section runs to end of input.
fn extract(raw: &str, start_marker: &str, end_marker: Option<&str>) -> Option<String> {
    let start = raw.find(start_marker)? + start_marker.len();
    let rest = &raw[start..];

    let end = match end_marker.and_then(|marker| rest.find(marker)) {
        Some(idx) => idx,
        None => MARKERS
            .iter()
            .filter_map(|marker| rest.find(marker))
            .min()
            .unwrap_or(rest.len()),
    };

    Some(rest[..end].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_response() -> String {
        [
            "RESUME_JSON:\n{\"header\": {\"name\": \"Jane Doe\"}}",
            "GAP_AND_FIX_LIST:\n- Add metrics to role 1\n\n- Clarify dates",
            "RESUME_ATS:\nATS VERSION",
            "RESUME_HUMAN:\nHUMAN VERSION",
            "RESUME_TARGETED:\nTARGETED VERSION",
            "RESUME_WITH_PHOTO:\nPHOTO VERSION",
            "COVER_LETTER_FULL:\nFULL LETTER",
            "COVER_LETTER_SHORT:\nSHORT LETTER",
            "COLD_EMAIL:\nCOLD EMAIL BODY",
        ]
        .join("\n")
    }

    #[test]
    fn test_decode_full_response_recovers_every_section() {
        let input = full_response();
        let parsed = decode(&input);

        assert_eq!(parsed.json.as_ref().unwrap()["header"]["name"], "Jane Doe");
        assert_eq!(
            parsed.gap_and_fix.as_deref().unwrap(),
            ["- Add metrics to role 1", "- Clarify dates"]
        );
        assert_eq!(parsed.resume_ats.as_deref(), Some("ATS VERSION"));
        assert_eq!(parsed.resume_human.as_deref(), Some("HUMAN VERSION"));
        assert_eq!(parsed.resume_targeted.as_deref(), Some("TARGETED VERSION"));
        assert_eq!(parsed.resume_photo.as_deref(), Some("PHOTO VERSION"));
        assert_eq!(parsed.cover_letter_full.as_deref(), Some("FULL LETTER"));
        assert_eq!(parsed.cover_letter_short.as_deref(), Some("SHORT LETTER"));
        assert_eq!(parsed.cold_email.as_deref(), Some("COLD EMAIL BODY"));
        assert_eq!(parsed.section_count(), 9);
    }

    #[test]
    fn test_raw_is_preserved_verbatim() {
        let input = full_response();
        let parsed = decode(&input);
        assert_eq!(parsed.raw, input);
    }

    #[test]
    fn test_partial_response_leaves_missing_sections_absent() {
        let parsed = decode("RESUME_ATS:\nfoo\nRESUME_HUMAN:\nbar");
        assert_eq!(parsed.resume_ats.as_deref(), Some("foo"));
        assert_eq!(parsed.resume_human.as_deref(), Some("bar"));
        assert!(parsed.json.is_none());
        assert!(parsed.gap_and_fix.is_none());
        assert!(parsed.resume_targeted.is_none());
        assert!(parsed.resume_photo.is_none());
        assert!(parsed.cover_letter_full.is_none());
        assert!(parsed.cover_letter_short.is_none());
        assert!(parsed.cold_email.is_none());
    }

    #[test]
    fn test_section_content_never_includes_terminating_marker() {
        let parsed = decode("RESUME_ATS:\nfoo\nRESUME_HUMAN:\nbar");
        assert_eq!(parsed.resume_ats.as_deref(), Some("foo"));
        assert!(!parsed.resume_ats.unwrap().contains("RESUME_HUMAN"));
    }

    #[test]
    fn test_skipped_successor_falls_back_to_earliest_known_marker() {
        // RESUME_HUMAN is omitted: RESUME_ATS must still stop at the next
        // marker that is actually present, not swallow the rest of the reply.
        let parsed = decode("RESUME_ATS:\nats text\nCOVER_LETTER_FULL:\nletter");
        assert_eq!(parsed.resume_ats.as_deref(), Some("ats text"));
        assert_eq!(parsed.cover_letter_full.as_deref(), Some("letter"));
    }

    #[test]
    fn test_last_present_section_runs_to_end_of_input() {
        let parsed = decode("COLD_EMAIL:\nHello,\n\nShort pitch.\nThanks");
        assert_eq!(
            parsed.cold_email.as_deref(),
            Some("Hello,\n\nShort pitch.\nThanks")
        );
    }

    #[test]
    fn test_invalid_json_section_is_dropped_but_rest_decodes() {
        let input = "RESUME_JSON:\n{not valid json!\nGAP_AND_FIX_LIST:\n- fix\nRESUME_ATS:\nats";
        let parsed = decode(input);
        assert!(parsed.json.is_none());
        assert_eq!(parsed.gap_and_fix.as_deref().unwrap(), ["- fix"]);
        assert_eq!(parsed.resume_ats.as_deref(), Some("ats"));
    }

    #[test]
    fn test_json_section_strips_code_fences() {
        let input = "RESUME_JSON:\n```json\n{\"summary\": \"hi\"}\n```\nGAP_AND_FIX_LIST:\n- x";
        let parsed = decode(input);
        assert_eq!(parsed.json.unwrap()["summary"], "hi");
    }

    #[test]
    fn test_gap_list_drops_blank_lines_and_trims() {
        let input = "GAP_AND_FIX_LIST:\n  - one  \n\n   \n- two\n";
        let parsed = decode(input);
        assert_eq!(parsed.gap_and_fix.as_deref().unwrap(), ["- one", "- two"]);
    }

    #[test]
    fn test_empty_input_decodes_to_empty_response() {
        let parsed = decode("");
        assert_eq!(parsed.section_count(), 0);
        assert_eq!(parsed.raw, "");
    }

    #[test]
    fn test_markerless_prose_decodes_to_zero_sections() {
        let parsed = decode("I'm sorry, I cannot help with that request.");
        assert_eq!(parsed.section_count(), 0);
        assert_eq!(parsed.raw, "I'm sorry, I cannot help with that request.");
    }

    #[test]
    fn test_sections_preserve_internal_newlines() {
        let input = "RESUME_HUMAN:\nLine one\n\nLine three\nRESUME_TARGETED:\nx";
        let parsed = decode(input);
        assert_eq!(parsed.resume_human.as_deref(), Some("Line one\n\nLine three"));
    }
}
