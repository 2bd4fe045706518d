//! Standalone host page for a compiled program.

use konvac_core::config::DEFAULT_KONVA_URL;

use crate::codegen::CONTAINER_BINDING;

/// Id of the element the stage is mounted into.
pub const CONTAINER_ELEMENT_ID: &str = "konva-container";

#[derive(Debug, Clone)]
pub struct HtmlOptions {
    pub title: String,
    pub konva_url: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "Konva scene".to_string(),
            konva_url: DEFAULT_KONVA_URL.to_string(),
        }
    }
}

/// Wrap a program in an HTML page that loads Konva, creates the container
/// element and binds `container` to it before the program runs.
pub fn wrap_program(program: &str, options: &HtmlOptions) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    page.push_str("  <meta charset=\"utf-8\">\n");
    page.push_str(&format!("  <title>{}</title>\n", escape_html(&options.title)));
    page.push_str(&format!(
        "  <script src=\"{}\"></script>\n",
        escape_html(&options.konva_url)
    ));
    page.push_str("</head>\n<body>\n");
    page.push_str(&format!("  <div id=\"{CONTAINER_ELEMENT_ID}\"></div>\n"));
    page.push_str("  <script>\n    (function () {\n");
    page.push_str(&format!(
        "      const {CONTAINER_BINDING} = document.getElementById('{CONTAINER_ELEMENT_ID}');\n"
    ));
    for line in program.lines() {
        if line.is_empty() {
            page.push('\n');
        } else {
            page.push_str("      ");
            page.push_str(line);
            page.push('\n');
        }
    }
    page.push_str("    })();\n  </script>\n</body>\n</html>\n");
    page
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
            c => out.push(c),
        }
    }
    out
}
