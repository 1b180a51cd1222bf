//! Banner-header two-column layout: purple header band with contact chips
//! and an optional circular photo, timeline experience on the left, cards on
//! the right.

use crate::resume::ResumeData;
use crate::templates::html::{esc, img_src, page};
use crate::templates::{skill_tags, RenderContext};

const CSS: &str = "\
.resume-page { font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif; color: #1e293b; }\n\
.banner { background: #7e22ce; color: #fff; padding: 40px; display: flex; justify-content: space-between; align-items: flex-start; }\n\
.banner h1 { font-size: 40px; font-weight: 800; text-transform: uppercase; letter-spacing: -1px; margin: 0 0 8px; }\n\
.banner .role { font-size: 18px; color: #e9d5ff; letter-spacing: 2px; margin-bottom: 20px; }\n\
.banner .contact { font-size: 13px; color: #f3e8ff; }\n\
.banner .contact span { margin-right: 24px; }\n\
.banner .photo { width: 128px; height: 128px; border-radius: 50%; border: 4px solid #fff; overflow: hidden; flex-shrink: 0; background: #fff; }\n\
.banner .photo img { width: 100%; height: 100%; object-fit: cover; }\n\
.columns { display: flex; gap: 40px; padding: 40px; }\n\
.col-main { flex: 1; }\n\
.col-side { width: 33%; }\n\
h3 { font-size: 15px; font-weight: bold; color: #7e22ce; text-transform: uppercase; margin: 0 0 14px; }\n\
h3::before { content: ''; display: inline-block; width: 32px; height: 4px; background: #7e22ce; margin-right: 8px; vertical-align: middle; }\n\
section { margin-bottom: 32px; }\n\
.summary { font-size: 13px; line-height: 1.7; color: #475569; margin: 0; }\n\
.timeline-entry { position: relative; padding-left: 24px; border-left: 2px solid #f3e8ff; margin-bottom: 24px; }\n\
.timeline-entry::before { content: ''; position: absolute; left: -9px; top: 6px; width: 12px; height: 12px; border-radius: 50%; border: 2px solid #a855f7; background: #fff; }\n\
.entry-head { display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 2px; }\n\
.entry-role { font-weight: bold; }\n\
.entry-dates { font-size: 11px; font-weight: 600; color: #9333ea; background: #faf5ff; padding: 2px 8px; border-radius: 4px; }\n\
.entry-company { font-size: 13px; font-weight: 600; color: #64748b; margin-bottom: 8px; }\n\
.entry-description { font-size: 13px; line-height: 1.6; color: #475569; white-space: pre-wrap; margin: 0; }\n\
.edu-card { background: #f8fafc; border: 1px solid #f1f5f9; border-radius: 8px; padding: 20px; }\n\
.edu-card h3::before { content: none; }\n\
.edu-degree { font-weight: bold; font-size: 13px; }\n\
.edu-school { font-size: 12px; color: #64748b; }\n\
.edu-dates { font-size: 12px; color: #a855f7; font-weight: 500; margin-bottom: 14px; }\n\
.skill-category { font-size: 11px; font-weight: bold; color: #94a3b8; text-transform: uppercase; letter-spacing: 1px; margin-bottom: 8px; }\n\
.chips { margin-bottom: 14px; }\n\
.chip { display: inline-block; background: #9333ea; color: #fff; font-size: 11px; padding: 3px 8px; border-radius: 4px; margin: 0 6px 6px 0; font-weight: 500; }\n\
.empty { color: #cbd5e1; font-style: italic; font-size: 13px; }\n";

pub(crate) fn render(data: &ResumeData, ctx: &RenderContext) -> String {
    let mut body = String::new();
    body.push_str("<div class=\"resume-page\">\n<div class=\"banner\">\n<div>\n");
    body.push_str(&format!("<h1>{}</h1>\n", esc(&ctx.display_name)));
    let role = if ctx.target_role.is_empty() {
        "Target Role"
    } else {
        ctx.target_role
    };
    body.push_str(&format!("<div class=\"role\">{}</div>\n", esc(role)));

    body.push_str("<div class=\"contact\">");
    body.push_str(&format!("<span>{}</span>", esc(ctx.display_email)));
    if !ctx.phone.is_empty() {
        body.push_str(&format!("<span>{}</span>", esc(ctx.phone)));
    }
    if !ctx.full_address.is_empty() {
        body.push_str(&format!("<span>{}</span>", esc(&ctx.full_address)));
    }
    body.push_str("</div>\n</div>\n");

    if let Some(photo) = ctx.photo {
        body.push_str(&format!(
            "<div class=\"photo\"><img src=\"{}\" alt=\"\"></div>\n",
            img_src(photo)
        ));
    }
    body.push_str("</div>\n");

    body.push_str("<div class=\"columns\">\n<div class=\"col-main\">\n");
    body.push_str("<section>\n<h3>Profile</h3>\n");
    body.push_str(&format!("<p class=\"summary\">{}</p>\n</section>\n", esc(ctx.summary)));

    body.push_str("<section>\n<h3>Experience</h3>\n");
    if data.experience_items.is_empty() {
        body.push_str("<div class=\"empty\">No experience added.</div>\n");
    }
    for exp in &data.experience_items {
        body.push_str("<div class=\"timeline-entry\">\n<div class=\"entry-head\">");
        body.push_str(&format!("<span class=\"entry-role\">{}</span>", esc(&exp.role)));
        body.push_str(&format!(
            "<span class=\"entry-dates\">{}</span></div>\n",
            esc(&exp.dates)
        ));
        body.push_str(&format!(
            "<div class=\"entry-company\">{}</div>\n",
            esc(&exp.company)
        ));
        body.push_str(&format!(
            "<p class=\"entry-description\">{}</p>\n</div>\n",
            esc(&exp.description)
        ));
    }
    body.push_str("</section>\n</div>\n");

    body.push_str("<div class=\"col-side\">\n<div class=\"edu-card\">\n<h3>Education</h3>\n");
    for edu in &data.education_items {
        body.push_str(&format!("<div class=\"edu-degree\">{}</div>\n", esc(&edu.degree)));
        body.push_str(&format!("<div class=\"edu-school\">{}</div>\n", esc(&edu.school)));
        body.push_str(&format!("<div class=\"edu-dates\">{}</div>\n", esc(&edu.dates)));
    }
    body.push_str("</div>\n<section style=\"margin-top: 32px;\">\n<h3>Expertise</h3>\n");
    for skill in &data.skill_items {
        body.push_str(&format!(
            "<div class=\"skill-category\">{}</div>\n<div class=\"chips\">",
            esc(&skill.category)
        ));
        for tag in skill_tags(&skill.items) {
            body.push_str(&format!("<span class=\"chip\">{}</span>", esc(tag)));
        }
        body.push_str("</div>\n");
    }
    body.push_str("</section>\n</div>\n</div>\n</div>");

    page(&ctx.display_name, CSS, &body)
}
