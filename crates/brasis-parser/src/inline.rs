//! Inline markup.
//!
//! Handles strong/emphasis toggles, inline code, the `<<BR>>` macro, wiki
//! links and bare URLs. Toggles stay open across lines until the enclosing
//! block closes them with [`InlineParser::close`].

use std::sync::LazyLock;

use brasis_core::Formatter;
use regex::Regex;

/// Regex for inline constructs; `'''` is listed before `''` so it wins.
static INLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<code>\{\{\{(?P<code_text>.*?)\}\}\})",
        r"|(?P<strong>''')",
        r"|(?P<emph>'')",
        r"|(?P<macro><<(?P<macro_name>[A-Za-z][A-Za-z0-9]*)(?:\([^)]*\))?>>)",
        r"|(?P<link>\[\[(?P<link_target>[^\]|]+)(?:\|(?P<link_label>[^\]]+))?\]\])",
        r#"|(?P<url>https?://[^\s<>"]+)"#,
    ))
    .unwrap()
});

/// An inline toggle that can stay open across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toggle {
    Strong,
    Emphasis,
}

/// Stateful inline formatter.
#[derive(Debug, Clone, Default)]
pub struct InlineParser {
    /// Open toggles, innermost last
    open: Vec<Toggle>,
}

impl InlineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any toggle is still open.
    pub fn has_open(&self) -> bool {
        !self.open.is_empty()
    }

    /// Format inline markup in `text`.
    ///
    /// # Example
    ///
    /// ```
    /// use brasis_parser::InlineParser;
    /// use brasis_render::HtmlFormatter;
    ///
    /// let mut inline = InlineParser::new();
    /// let html = inline.format(&HtmlFormatter::new(), "a '''b''' <c>");
    /// assert_eq!(html, "a <strong>b</strong> &lt;c&gt;");
    /// ```
    pub fn format(&mut self, formatter: &dyn Formatter, text: &str) -> String {
        let mut out = String::new();
        let mut last = 0;

        for caps in INLINE_RE.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_str(&formatter.text(&text[last..whole.start()]));

            if let Some(code) = caps.name("code_text") {
                out.push_str(&formatter.code(true));
                out.push_str(&formatter.text(code.as_str()));
                out.push_str(&formatter.code(false));
            } else if caps.name("strong").is_some() {
                out.push_str(&self.toggle(formatter, Toggle::Strong));
            } else if caps.name("emph").is_some() {
                out.push_str(&self.toggle(formatter, Toggle::Emphasis));
            } else if let Some(name) = caps.name("macro_name") {
                if name.as_str() == "BR" {
                    out.push_str(&formatter.linebreak(false));
                } else {
                    // Unknown macros are shown as written
                    out.push_str(&formatter.text(whole.as_str()));
                }
            } else if let Some(target) = caps.name("link_target") {
                let target = target.as_str().trim();
                let label = caps.name("link_label").map_or(target, |m| m.as_str().trim());
                out.push_str(&formatter.link(true, target));
                out.push_str(&formatter.text(label));
                out.push_str(&formatter.link(false, ""));
            } else if let Some(url) = caps.name("url") {
                out.push_str(&formatter.link(true, url.as_str()));
                out.push_str(&formatter.text(url.as_str()));
                out.push_str(&formatter.link(false, ""));
            }

            last = whole.end();
        }

        out.push_str(&formatter.text(&text[last..]));
        out
    }

    /// Close all open toggles, innermost first.
    pub fn close(&mut self, formatter: &dyn Formatter) -> String {
        let mut out = String::new();
        while let Some(toggle) = self.open.pop() {
            out.push_str(&Self::tag(formatter, toggle, false));
        }
        out
    }

    fn toggle(&mut self, formatter: &dyn Formatter, toggle: Toggle) -> String {
        match self.open.iter().rposition(|t| *t == toggle) {
            Some(pos) => {
                self.open.remove(pos);
                Self::tag(formatter, toggle, false)
            }
            None => {
                self.open.push(toggle);
                Self::tag(formatter, toggle, true)
            }
        }
    }

    fn tag(formatter: &dyn Formatter, toggle: Toggle, on: bool) -> String {
        match toggle {
            Toggle::Strong => formatter.strong(on),
            Toggle::Emphasis => formatter.emphasis(on),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brasis_render::HtmlFormatter;

    fn format(text: &str) -> String {
        InlineParser::new().format(&HtmlFormatter::new(), text)
    }

    #[test]
    fn test_plain_text_is_escaped() {
        assert_eq!(format("a & b"), "a &amp; b");
    }

    #[test]
    fn test_strong_and_emphasis() {
        assert_eq!(
            format("'''bold''' and ''it''"),
            "<strong>bold</strong> and <em>it</em>"
        );
    }

    #[test]
    fn test_inline_code_is_literal() {
        assert_eq!(format("{{{'''x''' <y>}}}"), "<tt>'''x''' &lt;y&gt;</tt>");
    }

    #[test]
    fn test_br_macro() {
        assert_eq!(format("one<<BR>>two"), "one<br>two");
        assert_eq!(format("<<TableOfContents>>"), "&lt;&lt;TableOfContents&gt;&gt;");
    }

    #[test]
    fn test_links() {
        assert_eq!(
            format("[[FrontPage|home]]"),
            "<a href=\"FrontPage\">home</a>"
        );
        assert_eq!(format("[[FrontPage]]"), "<a href=\"FrontPage\">FrontPage</a>");
        assert_eq!(
            format("see https://example.org/x"),
            "see <a href=\"https://example.org/x\">https://example.org/x</a>"
        );
    }

    #[test]
    fn test_toggle_stays_open_across_lines() {
        let html = HtmlFormatter::new();
        let mut inline = InlineParser::new();
        assert_eq!(inline.format(&html, "'''start"), "<strong>start");
        assert!(inline.has_open());
        assert_eq!(inline.format(&html, "end'''"), "end</strong>");
        assert!(!inline.has_open());
    }

    #[test]
    fn test_close_innermost_first() {
        let html = HtmlFormatter::new();
        let mut inline = InlineParser::new();
        inline.format(&html, "'''a ''b");
        assert_eq!(inline.close(&html), "</em></strong>");
        assert_eq!(inline.close(&html), "");
    }
}
