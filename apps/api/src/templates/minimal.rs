//! Centered-minimal layout: airy uppercase header, pipe-separated contact
//! line, and a two-column education/skills footer grid.

use crate::resume::ResumeData;
use crate::templates::html::{esc, page};
use crate::templates::RenderContext;

const CSS: &str = "\
.resume-page { padding: 20mm; font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif; color: #1e293b; }\n\
header { text-align: center; margin-bottom: 40px; }\n\
header h1 { font-size: 26px; font-weight: 300; text-transform: uppercase; letter-spacing: 6px; margin: 0 0 8px; color: #0f172a; }\n\
header .role { font-size: 13px; font-weight: 500; color: #64748b; text-transform: uppercase; letter-spacing: 2px; margin-bottom: 16px; }\n\
.contact { font-size: 11px; color: #94a3b8; font-weight: 500; }\n\
.contact span + span::before { content: ' | '; }\n\
.label { font-size: 11px; font-weight: bold; color: #94a3b8; text-transform: uppercase; letter-spacing: 3px; margin-bottom: 12px; }\n\
section { margin-bottom: 32px; }\n\
.summary { font-size: 13px; line-height: 1.7; color: #475569; border-left: 2px solid #e2e8f0; padding-left: 16px; margin: 0; }\n\
.entry { margin-bottom: 24px; }\n\
.entry-head { display: flex; justify-content: space-between; align-items: flex-end; margin-bottom: 2px; }\n\
.entry-role { font-weight: bold; font-size: 13px; }\n\
.entry-dates { font-size: 11px; color: #94a3b8; }\n\
.entry-company { font-size: 11px; font-weight: 600; color: #64748b; text-transform: uppercase; letter-spacing: 1px; margin-bottom: 8px; }\n\
.entry-description { font-size: 13px; line-height: 1.6; color: #475569; white-space: pre-line; margin: 0; }\n\
.footer-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 32px; }\n\
.edu-school { font-size: 13px; font-weight: bold; }\n\
.edu-degree { font-size: 12px; color: #475569; }\n\
.edu-dates { font-size: 12px; color: #94a3b8; margin-bottom: 14px; }\n\
.skill-line { font-size: 12px; margin-bottom: 10px; }\n\
.skill-category { font-weight: bold; color: #475569; }\n\
.skill-items { color: #64748b; }\n";

pub(crate) fn render(data: &ResumeData, ctx: &RenderContext) -> String {
    let mut body = String::new();
    body.push_str("<div class=\"resume-page\">\n<header>\n");
    body.push_str(&format!("<h1>{}</h1>\n", esc(&ctx.display_name)));
    body.push_str(&format!("<div class=\"role\">{}</div>\n", esc(ctx.target_role)));

    body.push_str("<div class=\"contact\">");
    body.push_str(&format!("<span>{}</span>", esc(ctx.display_email)));
    if !ctx.phone.is_empty() {
        body.push_str(&format!("<span>{}</span>", esc(ctx.phone)));
    }
    if !ctx.full_address.is_empty() {
        body.push_str(&format!("<span>{}</span>", esc(&ctx.full_address)));
    } else {
        body.push_str(&format!("<span>{}</span>", esc(ctx.region)));
    }
    body.push_str("</div>\n</header>\n");

    body.push_str("<section>\n<div class=\"label\">Professional Summary</div>\n");
    body.push_str(&format!("<p class=\"summary\">{}</p>\n</section>\n", esc(ctx.summary)));

    body.push_str("<section>\n<div class=\"label\">Experience</div>\n");
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
    body.push_str("</section>\n");

    body.push_str("<div class=\"footer-grid\">\n<section>\n<div class=\"label\">Education</div>\n");
    for edu in &data.education_items {
        body.push_str(&format!("<div class=\"edu-school\">{}</div>\n", esc(&edu.school)));
        body.push_str(&format!("<div class=\"edu-degree\">{}</div>\n", esc(&edu.degree)));
        body.push_str(&format!("<div class=\"edu-dates\">{}</div>\n", esc(&edu.dates)));
    }
    body.push_str("</section>\n<section>\n<div class=\"label\">Skills</div>\n");
    for skill in &data.skill_items {
        body.push_str(&format!(
            "<div class=\"skill-line\"><span class=\"skill-category\">{}: </span><span class=\"skill-items\">{}</span></div>\n",
            esc(&skill.category),
            esc(&skill.items)
        ));
    }
    body.push_str("</section>\n</div>\n</div>");

    page(&ctx.display_name, CSS, &body)
}
