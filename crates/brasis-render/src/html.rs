//! HTML formatter.
//!
//! Produces HTML fragments for the primitives in [`Formatter`].

use brasis_config::HtmlConfig;
use brasis_core::Formatter;

/// HTML implementation of [`Formatter`].
#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter {
    /// Emit `<br />` and `<hr />` instead of `<br>` and `<hr>`
    pub xhtml: bool,
}

impl HtmlFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from the `[html]` config section.
    pub fn from_config(config: &HtmlConfig) -> Self {
        Self { xhtml: config.xhtml }
    }

    fn void(&self, tag: &str) -> String {
        if self.xhtml {
            format!("<{} />", tag)
        } else {
            format!("<{}>", tag)
        }
    }
}

/// Opening or closing tag.
fn tag(on: bool, name: &str) -> String {
    if on {
        format!("<{}>", name)
    } else {
        format!("</{}>", name)
    }
}

impl Formatter for HtmlFormatter {
    fn text(&self, text: &str) -> String {
        html_escape::encode_text(text).into_owned()
    }

    fn linebreak(&self, preformatted: bool) -> String {
        if preformatted {
            "\n".to_string()
        } else {
            self.void("br")
        }
    }

    fn paragraph(&self, on: bool) -> String {
        tag(on, "p")
    }

    fn heading(&self, on: bool, depth: usize) -> String {
        let depth = depth.clamp(1, 6);
        tag(on, &format!("h{}", depth))
    }

    fn rule(&self) -> String {
        self.void("hr")
    }

    fn bullet_list(&self, on: bool) -> String {
        tag(on, "ul")
    }

    fn number_list(&self, on: bool, numbering: char) -> String {
        match (on, numbering) {
            (true, '1') => "<ol>".to_string(),
            (true, kind) => format!("<ol type=\"{}\">", kind),
            (false, _) => "</ol>".to_string(),
        }
    }

    fn listitem(&self, on: bool, bulleted: bool) -> String {
        match (on, bulleted) {
            (true, true) => "<li>".to_string(),
            (true, false) => "<li style=\"list-style-type:none\">".to_string(),
            (false, _) => "</li>".to_string(),
        }
    }

    fn definition_list(&self, on: bool) -> String {
        tag(on, "dl")
    }

    fn definition_term(&self, on: bool) -> String {
        tag(on, "dt")
    }

    fn definition_desc(&self, on: bool) -> String {
        tag(on, "dd")
    }

    fn table(&self, on: bool) -> String {
        tag(on, "table")
    }

    fn table_row(&self, on: bool) -> String {
        tag(on, "tr")
    }

    fn table_cell(&self, on: bool) -> String {
        tag(on, "td")
    }

    fn preformatted(&self, on: bool) -> String {
        tag(on, "pre")
    }

    fn strong(&self, on: bool) -> String {
        tag(on, "strong")
    }

    fn emphasis(&self, on: bool) -> String {
        tag(on, "em")
    }

    fn code(&self, on: bool) -> String {
        tag(on, "tt")
    }

    fn link(&self, on: bool, href: &str) -> String {
        if on {
            format!(
                "<a href=\"{}\">",
                html_escape::encode_double_quoted_attribute(href)
            )
        } else {
            "</a>".to_string()
        }
    }
}
