use crate::frame::Frame;
use crate::renderer::css;

pub const TITLE: &str = "StartPage";
pub const HEADING: &str = "Start page";

/// Renders the complete start page document. Output depends only on
/// `frames`, so identical input always yields identical bytes.
pub fn render_page(frames: &[Frame]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"en\">\n");
    out.push_str("<head>\n");
    out.push_str(&format!("<title>{}</title>\n", TITLE));
    out.push_str("<meta charset=\"UTF-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    // The stylesheet lives in the body, not the head.
    out.push_str("<style type=\"text/css\">\n");
    out.push_str(&css::stylesheet());
    out.push_str("</style>\n");
    out.push_str(&format!("<h1>{}</h1>\n", HEADING));
    out.push_str("<div class=\"container\">\n");
    for frame in frames {
        render_frame(&mut out, frame);
    }
    out.push_str("</div>\n");
    out.push_str("</body>\n");
    out.push_str("</html>\n");
    out
}

fn render_frame(out: &mut String, frame: &Frame) {
    out.push_str("<div>\n");
    out.push_str(&format!("<h2>{}</h2>\n", html_escape(&frame.name)));
    out.push_str("<ul>\n");
    for link in &frame.links {
        out.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            html_escape(&link.url),
            html_escape(&link.label)
        ));
    }
    out.push_str("</ul>\n");
    out.push_str("</div>\n");
}

pub fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".into(),
            '<' => "&lt;".into(),
            '>' => "&gt;".into(),
            '"' => "&quot;".into(),
            '\'' => "&#39;".into(),
            _ => c.to_string(),
        })
        .collect()
}
