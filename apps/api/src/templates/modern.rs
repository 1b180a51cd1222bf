//! Dark-sidebar two-column layout: contact, education, and skills in a slate
//! panel, experience in the main column.

use crate::resume::ResumeData;
use crate::templates::html::{esc, img_src, page};
use crate::templates::RenderContext;

const CSS: &str = "\
.resume-page { display: flex; font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif; color: #1e293b; }\n\
.sidebar { width: 32%; background: #0f172a; color: #fff; padding: 40px 24px; box-sizing: border-box; }\n\
.photo { width: 128px; height: 128px; border-radius: 50%; overflow: hidden; border: 4px solid #334155; margin: 0 auto 24px; }\n\
.photo img { width: 100%; height: 100%; object-fit: cover; }\n\
.sidebar h3 { color: #94a3b8; text-transform: uppercase; letter-spacing: 2px; font-size: 11px; border-bottom: 1px solid #334155; padding-bottom: 4px; margin: 24px 0 12px; }\n\
.sidebar .block { font-size: 13px; line-height: 1.6; }\n\
.sidebar .line { margin-bottom: 6px; word-break: break-word; }\n\
.sidebar .muted { opacity: 0.8; }\n\
.edu-degree { font-weight: bold; font-size: 13px; }\n\
.edu-school { font-size: 12px; color: #94a3b8; }\n\
.edu-dates { font-size: 12px; color: #64748b; font-style: italic; margin-bottom: 12px; }\n\
.skill-category { font-size: 12px; font-weight: 600; color: #60a5fa; margin-bottom: 2px; }\n\
.skill-items { font-size: 12px; line-height: 1.5; opacity: 0.8; margin-bottom: 10px; }\n\
.main { flex: 1; padding: 40px 32px; box-sizing: border-box; }\n\
.main header { border-bottom: 2px solid #f1f5f9; padding-bottom: 24px; margin-bottom: 32px; }\n\
.main h1 { font-size: 32px; text-transform: uppercase; letter-spacing: 1px; margin: 0 0 6px; color: #0f172a; }\n\
.main .role { font-size: 18px; color: #2563eb; letter-spacing: 1px; }\n\
.main .summary { margin-top: 16px; font-size: 13px; line-height: 1.6; color: #475569; }\n\
.main h3 { font-size: 16px; text-transform: uppercase; letter-spacing: 2px; color: #0f172a; border-bottom: 1px solid #e2e8f0; padding-bottom: 8px; margin: 0 0 16px; }\n\
.entry { margin-bottom: 24px; }\n\
.entry-head { display: flex; justify-content: space-between; align-items: baseline; }\n\
.entry-role { font-weight: bold; font-size: 16px; }\n\
.entry-dates { font-size: 12px; font-weight: 600; color: #64748b; background: #f1f5f9; padding: 2px 8px; border-radius: 4px; }\n\
.entry-company { color: #2563eb; font-size: 13px; font-weight: 500; margin: 2px 0 8px; }\n\
.entry-description { font-size: 13px; line-height: 1.6; color: #475569; white-space: pre-wrap; margin: 0; }\n\
.empty { color: #cbd5e1; font-style: italic; padding: 16px; border: 1px dashed #e2e8f0; border-radius: 4px; font-size: 13px; }\n";

pub(crate) fn render(data: &ResumeData, ctx: &RenderContext) -> String {
    let mut body = String::new();
    body.push_str("<div class=\"resume-page\">\n<div class=\"sidebar\">\n");

    if let Some(photo) = ctx.photo {
        body.push_str(&format!(
            "<div class=\"photo\"><img src=\"{}\" alt=\"\"></div>\n",
            img_src(photo)
        ));
    }

    body.push_str("<h3>Contact</h3>\n<div class=\"block\">\n");
    body.push_str(&format!("<div class=\"line\">{}</div>\n", esc(ctx.display_email)));
    if !ctx.phone.is_empty() {
        body.push_str(&format!("<div class=\"line\">{}</div>\n", esc(ctx.phone)));
    }
    if !ctx.full_address.is_empty() {
        body.push_str(&format!(
            "<div class=\"line muted\">{}</div>\n",
            esc(&ctx.full_address)
        ));
    }
    body.push_str("</div>\n");

    if !data.education_items.is_empty() {
        body.push_str("<h3>Education</h3>\n");
        for edu in &data.education_items {
            body.push_str(&format!("<div class=\"edu-degree\">{}</div>\n", esc(&edu.degree)));
            body.push_str(&format!("<div class=\"edu-school\">{}</div>\n", esc(&edu.school)));
            body.push_str(&format!("<div class=\"edu-dates\">{}</div>\n", esc(&edu.dates)));
        }
    }

    if !data.skill_items.is_empty() {
        body.push_str("<h3>Skills</h3>\n");
        for skill in &data.skill_items {
            body.push_str(&format!(
                "<div class=\"skill-category\">{}</div>\n",
                esc(&skill.category)
            ));
            body.push_str(&format!("<div class=\"skill-items\">{}</div>\n", esc(&skill.items)));
        }
    }
    body.push_str("</div>\n");

    body.push_str("<div class=\"main\">\n<header>\n");
    body.push_str(&format!("<h1>{}</h1>\n", esc(&ctx.display_name)));
    let role = if ctx.target_role.is_empty() {
        "Target Role"
    } else {
        ctx.target_role
    };
    body.push_str(&format!("<div class=\"role\">{}</div>\n", esc(role)));
    body.push_str(&format!("<p class=\"summary\">{}</p>\n</header>\n", esc(ctx.summary)));

    body.push_str("<h3>Experience</h3>\n");
    if data.experience_items.is_empty() {
        body.push_str("<div class=\"empty\">Add experience items to see them here.</div>\n");
    }
    for exp in &data.experience_items {
        body.push_str("<div class=\"entry\">\n<div class=\"entry-head\">");
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
    body.push_str("</div>\n</div>");

    page(&ctx.display_name, CSS, &body)
}
