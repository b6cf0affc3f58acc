//! Output primitives.
//!
//! A [`Formatter`] turns structural events into output markup. Every
//! method returns the fragment for one primitive; `on` selects the opening
//! or closing form. Formatters are stateless so one instance can be shared
//! between a scanner and the line-break policy wrapped around it.

/// Renders primitive output elements.
pub trait Formatter {
    /// Escaped plain text.
    fn text(&self, text: &str) -> String;

    /// A single forced line break.
    ///
    /// Inside preformatted content the break is a literal newline.
    fn linebreak(&self, preformatted: bool) -> String;

    fn paragraph(&self, on: bool) -> String;

    /// Heading of the given depth (1-based).
    fn heading(&self, on: bool, depth: usize) -> String;

    /// Horizontal rule.
    fn rule(&self) -> String;

    fn bullet_list(&self, on: bool) -> String;

    /// Ordered list; `numbering` is one of `1`, `a`, `A`, `i`, `I`.
    fn number_list(&self, on: bool, numbering: char) -> String;

    /// List item. A `bulleted` of false hides the list marker.
    fn listitem(&self, on: bool, bulleted: bool) -> String;

    fn definition_list(&self, on: bool) -> String;

    fn definition_term(&self, on: bool) -> String;

    fn definition_desc(&self, on: bool) -> String;

    fn table(&self, on: bool) -> String;

    fn table_row(&self, on: bool) -> String;

    fn table_cell(&self, on: bool) -> String;

    fn preformatted(&self, on: bool) -> String;

    fn strong(&self, on: bool) -> String;

    fn emphasis(&self, on: bool) -> String;

    fn code(&self, on: bool) -> String;

    /// Hyperlink; `href` is only read when `on` is true.
    fn link(&self, on: bool, href: &str) -> String;
}
