//! Dense three-column grid layout: two-thirds main column for summary and
//! experience, one-third rail for the photo, skills, and education cards.

use crate::resume::ResumeData;
use crate::templates::html::{esc, img_src, page};
use crate::templates::RenderContext;

const CSS: &str = "\
.resume-page { padding: 15mm; font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif; color: #1e293b; }\n\
header { display: flex; justify-content: space-between; align-items: flex-end; border-bottom: 2px solid #f97316; padding-bottom: 16px; margin-bottom: 24px; }\n\
header h1 { font-size: 34px; font-weight: 800; line-height: 1; margin: 0 0 4px; color: #0f172a; }\n\
header .role { color: #ea580c; font-weight: bold; font-size: 17px; }\n\
.contact { text-align: right; font-size: 11px; font-weight: 500; color: #475569; line-height: 1.6; }\n\
.grid { display: grid; grid-template-columns: 2fr 1fr; gap: 24px; }\n\
.rail { border-left: 1px solid #f1f5f9; padding-left: 16px; }\n\
h3 { font-size: 13px; font-weight: 900; color: #ea580c; text-transform: uppercase; margin: 0 0 10px; }\n\
section { margin-bottom: 24px; }\n\
.summary { font-size: 12px; line-height: 1.6; color: #334155; text-align: justify; margin: 0; }\n\
.entry { border-left: 2px solid #e2e8f0; padding-left: 12px; margin-bottom: 16px; }\n\
.entry-head { display: flex; justify-content: space-between; align-items: baseline; }\n\
.entry-role { font-weight: bold; font-size: 13px; }\n\
.entry-dates { font-size: 10px; font-weight: bold; color: #64748b; background: #f1f5f9; padding: 1px 6px; border-radius: 3px; }\n\
.entry-company { font-size: 12px; font-weight: bold; color: #475569; margin-bottom: 4px; }\n\
.entry-description { font-size: 12px; line-height: 1.6; color: #475569; white-space: pre-wrap; margin: 0; }\n\
.photo { width: 96px; height: 96px; border: 1px solid #e2e8f0; padding: 4px; box-sizing: border-box; margin-bottom: 16px; }\n\
.photo img { width: 100%; height: 100%; object-fit: cover; }\n\
.skill-category { font-size: 10px; font-weight: bold; color: #334155; text-transform: uppercase; margin-bottom: 2px; }\n\
.skill-items { font-size: 12px; color: #475569; line-height: 1.4; margin-bottom: 10px; }\n\
.edu-card { background: #f8fafc; border-radius: 4px; padding: 8px; margin-bottom: 10px; }\n\
.edu-degree { font-size: 12px; font-weight: bold; line-height: 1.3; }\n\
.edu-school { font-size: 10px; color: #475569; margin-top: 4px; }\n\
.edu-dates { font-size: 10px; color: #94a3b8; font-style: italic; }\n";

pub(crate) fn render(data: &ResumeData, ctx: &RenderContext) -> String {
    let mut body = String::new();
    body.push_str("<div class=\"resume-page\">\n<header>\n<div>\n");
    body.push_str(&format!("<h1>{}</h1>\n", esc(&ctx.display_name)));
    body.push_str(&format!("<div class=\"role\">{}</div>\n</div>\n", esc(ctx.target_role)));

    body.push_str("<div class=\"contact\">\n");
    body.push_str(&format!("<div>{}</div>\n", esc(ctx.display_email)));
    if !ctx.phone.is_empty() {
        body.push_str(&format!("<div>{}</div>\n", esc(ctx.phone)));
    }
    if !ctx.full_address.is_empty() {
        body.push_str(&format!("<div>{}</div>\n", esc(&ctx.full_address)));
    }
    body.push_str("</div>\n</header>\n");

    body.push_str("<div class=\"grid\">\n<div>\n");
    body.push_str("<section>\n<h3>Summary</h3>\n");
    body.push_str(&format!("<p class=\"summary\">{}</p>\n</section>\n", esc(ctx.summary)));

    body.push_str("<section>\n<h3>Experience</h3>\n");
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
    body.push_str("</section>\n</div>\n");

    body.push_str("<div class=\"rail\">\n");
    if let Some(photo) = ctx.photo {
        body.push_str(&format!(
            "<div class=\"photo\"><img src=\"{}\" alt=\"\"></div>\n",
            img_src(photo)
        ));
    }

    body.push_str("<section>\n<h3>Skills</h3>\n");
    for skill in &data.skill_items {
        body.push_str(&format!(
            "<div class=\"skill-category\">{}</div>\n",
            esc(&skill.category)
        ));
        body.push_str(&format!("<div class=\"skill-items\">{}</div>\n", esc(&skill.items)));
    }
    body.push_str("</section>\n");

    body.push_str("<section>\n<h3>Education</h3>\n");
    for edu in &data.education_items {
        body.push_str("<div class=\"edu-card\">");
        body.push_str(&format!("<div class=\"edu-degree\">{}</div>", esc(&edu.degree)));
        body.push_str(&format!("<div class=\"edu-school\">{}</div>", esc(&edu.school)));
        body.push_str(&format!("<div class=\"edu-dates\">{}</div></div>\n", esc(&edu.dates)));
    }
    body.push_str("</section>\n</div>\n</div>\n</div>");

    page(&ctx.display_name, CSS, &body)
}
