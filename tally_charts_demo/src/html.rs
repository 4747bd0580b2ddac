// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal HTML page for the dashboard charts.

use kurbo::Size;

/// One chart slot on the page.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    /// Pixel size of the mount element.
    pub(crate) mount: Size,
    /// Inline SVG markup, or `None` for a blank mount.
    pub(crate) svg: Option<String>,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 2em; }\n\
         .chart { border: 1px solid #ddd; margin-bottom: 2em; }\n\
         </style>\n</head>\n<body>\n",
    );
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));

    for section in sections {
        out.push_str(&format!("<h2>{}</h2>\n", escape_html(&section.title)));
        out.push_str(&format!(
            "<div class=\"chart\" style=\"width: {}px; height: {}px;\">\n",
            section.mount.width, section.mount.height
        ));
        if let Some(svg) = &section.svg {
            out.push_str(svg);
        }
        out.push_str("</div>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_become_sized_mounts() {
        let html = render_report(
            "Reviews & more",
            &[
                HtmlSection {
                    title: "A".to_string(),
                    mount: Size::new(300.0, 100.0),
                    svg: Some("<svg></svg>".to_string()),
                },
                HtmlSection {
                    title: "B".to_string(),
                    mount: Size::new(200.0, 50.0),
                    svg: None,
                },
            ],
        );
        assert!(html.contains("<title>Reviews &amp; more</title>"), "{html}");
        assert!(
            html.contains("style=\"width: 300px; height: 100px;\">\n<svg></svg></div>"),
            "{html}"
        );
        assert!(
            html.contains(r#"style="width: 200px; height: 50px;">"#),
            "{html}"
        );
    }
}
