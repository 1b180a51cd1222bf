//! Minimal HTML assembly helpers shared by the layout functions.

use crate::resume::ImageData;

/// Escapes text for interpolation into element bodies and attribute values.
pub(crate) fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Inline data URI for an embedded profile photo.
pub(crate) fn img_src(image: &ImageData) -> String {
    format!("data:{};base64,{}", image.mime_type, image.data)
}

/// Wraps a layout body in a complete printable document. Every layout ships
/// its own stylesheet; the shared shell only pins the page box.
pub(crate) fn page(title: &str, css: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <style>\n@page {{ size: A4; margin: 0; }}\n\
         body {{ margin: 0; -webkit-print-color-adjust: exact; print-color-adjust: exact; }}\n\
         .resume-page {{ width: 210mm; min-height: 297mm; margin: 0 auto; background: #fff; \
         box-sizing: border-box; }}\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        esc(title),
        css,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_esc_handles_all_special_characters() {
        assert_eq!(
            esc(r#"<a href="x">Q&A 'quotes'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Q&amp;A &#39;quotes&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_esc_leaves_plain_text_untouched() {
        assert_eq!(esc("Jane Doe"), "Jane Doe");
    }

    #[test]
    fn test_img_src_embeds_mime_and_payload() {
        let image = ImageData {
            mime_type: "image/jpeg".to_string(),
            data: "QUJD".to_string(),
        };
        assert_eq!(img_src(&image), "data:image/jpeg;base64,QUJD");
    }
}
