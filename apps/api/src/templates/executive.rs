//! Serif executive single-column layout: heavy ruled header, justified
//! profile, and a three-column core-competency grid built from the flattened
//! skill tags.

use crate::resume::ResumeData;
use crate::templates::html::{esc, page};
use crate::templates::{skill_tags, RenderContext};

const CSS: &str = "\
.resume-page { padding: 25mm; font-family: Georgia, 'Times New Roman', serif; color: #0f172a; }\n\
header { display: flex; justify-content: space-between; align-items: flex-end; border-bottom: 4px solid #0f172a; padding-bottom: 24px; margin-bottom: 32px; }\n\
header h1 { font-size: 34px; text-transform: uppercase; letter-spacing: -0.5px; margin: 0 0 8px; }\n\
header .role { font-size: 16px; font-weight: bold; text-transform: uppercase; letter-spacing: 2px; color: #065f46; }\n\
.contact { text-align: right; font-size: 13px; color: #475569; line-height: 1.7; }\n\
section { margin-bottom: 32px; }\n\
h3 { font-size: 12px; text-transform: uppercase; letter-spacing: 3px; border-bottom: 1px solid #cbd5e1; padding-bottom: 4px; margin: 0 0 14px; }\n\
.profile { font-size: 13px; line-height: 1.9; text-align: justify; color: #1e293b; margin: 0; }\n\
.competencies { display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 8px 16px; }\n\
.competency { font-size: 13px; color: #334155; font-weight: 500; }\n\
.competency::before { content: ''; display: inline-block; width: 6px; height: 6px; border-radius: 50%; background: #047857; margin-right: 8px; vertical-align: middle; }\n\
.entry { margin-bottom: 24px; }\n\
.entry-head { display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 2px; }\n\
.entry-company { font-size: 17px; font-weight: bold; }\n\
.entry-dates { font-size: 13px; font-weight: bold; }\n\
.entry-role { font-size: 14px; font-weight: bold; font-style: italic; color: #065f46; margin-bottom: 8px; }\n\
.entry-description { font-size: 13px; line-height: 1.7; color: #334155; white-space: pre-wrap; margin: 0; padding-left: 10px; border-left: 2px solid #e2e8f0; }\n\
.edu-row { display: flex; justify-content: space-between; font-size: 13px; margin-bottom: 10px; }\n\
.edu-school { font-weight: bold; }\n\
.edu-degree { font-style: italic; color: #334155; }\n\
.edu-dates { font-weight: 500; color: #475569; }\n";

pub(crate) fn render(data: &ResumeData, ctx: &RenderContext) -> String {
    let mut body = String::new();
    body.push_str("<div class=\"resume-page\">\n<header>\n<div>\n");
    body.push_str(&format!("<h1>{}</h1>\n", esc(&ctx.display_name)));
    let role = if ctx.target_role.is_empty() {
        "Executive Professional"
    } else {
        ctx.target_role
    };
    body.push_str(&format!("<div class=\"role\">{}</div>\n</div>\n", esc(role)));

    body.push_str("<div class=\"contact\">\n");
    body.push_str(&format!("<div>{}</div>\n", esc(ctx.display_email)));
    if !ctx.phone.is_empty() {
        body.push_str(&format!("<div>{}</div>\n", esc(ctx.phone)));
    }
    if !ctx.full_address.is_empty() {
        body.push_str(&format!("<div>{}</div>\n", esc(&ctx.full_address)));
    }
    body.push_str("</div>\n</header>\n");

    body.push_str("<section>\n<h3>Executive Profile</h3>\n");
    body.push_str(&format!("<p class=\"profile\">{}</p>\n</section>\n", esc(ctx.summary)));

    if !data.skill_items.is_empty() {
        body.push_str("<section>\n<h3>Core Competencies</h3>\n<div class=\"competencies\">\n");
        for skill in &data.skill_items {
            for tag in skill_tags(&skill.items) {
                body.push_str(&format!("<div class=\"competency\">{}</div>\n", esc(tag)));
            }
        }
        body.push_str("</div>\n</section>\n");
    }

    body.push_str("<section>\n<h3>Professional Experience</h3>\n");
    for exp in &data.experience_items {
        body.push_str("<div class=\"entry\">\n<div class=\"entry-head\">");
        body.push_str(&format!(
            "<span class=\"entry-company\">{}</span>",
            esc(&exp.company)
        ));
        body.push_str(&format!(
            "<span class=\"entry-dates\">{}</span></div>\n",
            esc(&exp.dates)
        ));
        body.push_str(&format!("<div class=\"entry-role\">{}</div>\n", esc(&exp.role)));
        body.push_str(&format!(
            "<p class=\"entry-description\">{}</p>\n</div>\n",
            esc(&exp.description)
        ));
    }
    body.push_str("</section>\n");

    body.push_str("<section>\n<h3>Education</h3>\n");
    for edu in &data.education_items {
        body.push_str("<div class=\"edu-row\"><div>");
        body.push_str(&format!("<span class=\"edu-school\">{}</span>", esc(&edu.school)));
        body.push_str(&format!(
            ", <span class=\"edu-degree\">{}</span></div>",
            esc(&edu.degree)
        ));
        body.push_str(&format!("<div class=\"edu-dates\">{}</div></div>\n", esc(&edu.dates)));
    }
    body.push_str("</section>\n</div>");

    page(&ctx.display_name, CSS, &body)
}
