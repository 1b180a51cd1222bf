//! Classic serif single-column layout with a centered header. The default
//! layout and the fallback for unknown template identifiers.

use crate::resume::ResumeData;
use crate::templates::html::{esc, page};
use crate::templates::RenderContext;

const CSS: &str = "\
.resume-page { padding: 25mm; font-family: Georgia, 'Times New Roman', serif; color: #0f172a; }\n\
header { text-align: center; border-bottom: 2px solid #1e293b; padding-bottom: 24px; margin-bottom: 32px; }\n\
header h1 { font-size: 28px; text-transform: uppercase; letter-spacing: 2px; margin: 0 0 8px; }\n\
.contact { font-size: 13px; color: #475569; }\n\
.contact span + span::before { content: '  \\2022  '; white-space: pre; }\n\
.role { font-size: 15px; font-weight: bold; text-transform: uppercase; letter-spacing: 3px; margin-top: 10px; }\n\
section { margin-bottom: 24px; }\n\
h3 { font-size: 12px; text-transform: uppercase; letter-spacing: 2px; border-bottom: 1px solid #cbd5e1; padding-bottom: 4px; margin: 0 0 12px; }\n\
.entry { margin-bottom: 18px; }\n\
.entry-head { display: flex; justify-content: space-between; align-items: baseline; }\n\
.company { font-weight: bold; font-size: 15px; }\n\
.dates { font-size: 13px; font-style: italic; color: #475569; }\n\
.position { font-size: 13px; font-weight: 600; margin: 2px 0 6px; }\n\
p.body, .description { font-size: 13px; line-height: 1.6; color: #334155; margin: 0; }\n\
.description { white-space: pre-wrap; }\n\
.edu-row { display: flex; justify-content: space-between; font-size: 13px; margin-bottom: 8px; }\n\
.school { font-weight: bold; }\n\
.skills-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 6px 32px; font-size: 13px; }\n\
.skill-category { font-weight: bold; margin-right: 6px; }\n\
.empty { color: #cbd5e1; font-size: 13px; }\n";

pub(crate) fn render(data: &ResumeData, ctx: &RenderContext) -> String {
    let mut body = String::new();
    body.push_str("<div class=\"resume-page\">\n<header>\n");
    body.push_str(&format!("<h1>{}</h1>\n", esc(&ctx.display_name)));

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
    body.push_str("</div>\n");

    if !ctx.target_role.is_empty() {
        body.push_str(&format!("<div class=\"role\">{}</div>\n", esc(ctx.target_role)));
    }
    body.push_str("</header>\n");

    body.push_str("<section>\n<h3>Professional Summary</h3>\n");
    body.push_str(&format!("<p class=\"body\">{}</p>\n</section>\n", esc(ctx.summary)));

    body.push_str("<section>\n<h3>Work Experience</h3>\n");
    if data.experience_items.is_empty() {
        body.push_str("<div class=\"empty\">No experience added yet.</div>\n");
    }
    for exp in &data.experience_items {
        body.push_str("<div class=\"entry\">\n<div class=\"entry-head\">");
        body.push_str(&format!("<span class=\"company\">{}</span>", esc(&exp.company)));
        body.push_str(&format!("<span class=\"dates\">{}</span></div>\n", esc(&exp.dates)));
        body.push_str(&format!("<div class=\"position\">{}</div>\n", esc(&exp.role)));
        body.push_str(&format!(
            "<p class=\"description\">{}</p>\n</div>\n",
            esc(&exp.description)
        ));
    }
    body.push_str("</section>\n");

    body.push_str("<section>\n<h3>Education</h3>\n");
    for edu in &data.education_items {
        body.push_str("<div class=\"edu-row\"><div>");
        body.push_str(&format!("<div class=\"school\">{}</div>", esc(&edu.school)));
        body.push_str(&format!("<div>{}</div></div>", esc(&edu.degree)));
        body.push_str(&format!("<div class=\"dates\">{}</div></div>\n", esc(&edu.dates)));
    }
    body.push_str("</section>\n");

    body.push_str("<section>\n<h3>Skills</h3>\n<div class=\"skills-grid\">\n");
    for skill in &data.skill_items {
        body.push_str(&format!(
            "<div><span class=\"skill-category\">{}:</span>{}</div>\n",
            esc(&skill.category),
            esc(&skill.items)
        ));
    }
    body.push_str("</div>\n</section>\n</div>");

    page(&ctx.display_name, CSS, &body)
}
