//! HTML emission
//!
//! Walks the render tree into a self-contained HTML document. The page
//! scaffold lives in a template string rather than `format!()` because
//! the embedded stylesheet is full of `{}` pairs.

use crate::config::DashboardConfig;
use crate::render::{self, Node};
use crate::state::DashboardState;

/// Render the full dashboard page for the configured primary branch.
pub fn render_page(state: &DashboardState, config: &DashboardConfig) -> String {
    let branch = config.primary_branch();

    let mut body = String::new();
    write_node(&mut body, &render::latest_section(state, &config.repo, branch));
    body.push('\n');
    write_node(&mut body, &render::info_section(state, branch));

    let generated = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();

    TEMPLATE
        .replace("__REPO__", &escape_text(&config.repo))
        .replace("__BODY__", &body)
        .replace("__GENERATED__", &generated)
}

/// Emit a single render-tree node as HTML.
pub fn node_to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element { tag, attrs, children } => {
            out.push('<');
            out.push_str(tag);
            for (name, value) in attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
            out.push('>');
            for child in children {
                write_node(out, child);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
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

const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>test262 conformance — __REPO__</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  main { padding: 12px 16px; }
  section { margin-bottom: 16px; }
  h2 { font-size: 18px; }
  ul { margin: 4px 0; }
  li { padding: 1px 0; }
  a { color: #5570d4; }
  footer { padding: 8px 16px; border-top: 1px solid #ddd; color: #777; font-size: 12px; }
</style>
</head>
<body>
<header>
  <h1>test262 conformance — __REPO__</h1>
</header>
<main>
__BODY__
</main>
<footer>Generated __GENERATED__</footer>
</body>
</html>
"#;
