//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection for the
//! markdown-bearing content fields (about text, project descriptions).

use pulldown_cmark::{Options, Parser, html};

/// Extensions enabled for content fields. The about bio and project
/// descriptions use strikethrough and tables; nothing else is needed.
const CONTENT_EXTENSIONS: Options = Options::ENABLE_STRIKETHROUGH.union(Options::ENABLE_TABLES);

/// Convert a markdown content field to sanitized HTML.
///
/// The output is sanitized with `ammonia`, which strips dangerous
/// elements and attributes, so the result is safe to inject via
/// `inner_html`.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, CONTENT_EXTENSIONS);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    ammonia::clean(&html_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_emphasis() {
        let html = markdown_to_html("I build **web** things");
        assert!(html.contains("<strong>web</strong>"));
    }

    #[test]
    fn test_renders_tables_and_strikethrough() {
        let html = markdown_to_html("| a |\n| - |\n| b |\n\n~~old~~");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>old</del>"));
    }

    #[test]
    fn test_strips_script_tags() {
        let html = markdown_to_html("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }
}
