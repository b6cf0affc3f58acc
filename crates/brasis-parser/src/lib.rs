//! Brasis Parser
//!
//! A line-at-a-time scanner for MoinMoin-style wiki markup. It implements
//! [`MarkupScanner`]: each call to `scan` renders one source line through a
//! [`Formatter`] and updates the running block context (paragraph, lists,
//! table, preformatted block).
//!
//! # Example
//!
//! ```
//! use brasis_core::MarkupScanner;
//! use brasis_parser::WikiScanner;
//! use brasis_render::HtmlFormatter;
//!
//! let html = HtmlFormatter::new();
//! let mut scanner = WikiScanner::new();
//!
//! assert_eq!(scanner.scan(&html, "= Hello =", false).unwrap(), "<h1>Hello</h1>");
//! assert_eq!(scanner.scan(&html, "* item", false).unwrap(), "<ul><li>item");
//! assert!(scanner.context().in_list);
//! assert_eq!(scanner.finish(&html).unwrap(), "</li></ul>");
//! ```

pub mod inline;
pub mod rules;

pub use inline::InlineParser;
pub use rules::{block, classify, Block, ListMarker};

use brasis_core::{Classification, Formatter, ListKind, MarkupScanner, Result, ScanContext};

/// One open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListLevel {
    indent: usize,
    kind: ListKind,
    item_open: bool,
}

/// Wiki line scanner.
#[derive(Debug, Clone, Default)]
pub struct WikiScanner {
    /// Open lists, innermost last
    lists: Vec<ListLevel>,
    inline: InlineParser,
    in_p: bool,
    in_table: bool,
    in_pre: bool,
    /// The current line terminated a preformatted block
    pre_closed: bool,
    line_was_empty: bool,
    /// The previous source line was blank
    prev_blank: bool,
}

impl WikiScanner {
    /// Create a scanner at the start of a document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_list(&self) -> bool {
        !self.lists.is_empty()
    }

    /// Current list nesting depth.
    pub fn list_depth(&self) -> usize {
        self.lists.len()
    }

    pub fn in_paragraph(&self) -> bool {
        self.in_p
    }

    fn scan_pre(&mut self, formatter: &dyn Formatter, line: &str) -> String {
        self.line_was_empty = false;
        self.prev_blank = false;
        if rules::is_pre_close(line) {
            self.in_pre = false;
            self.pre_closed = true;
            formatter.preformatted(false)
        } else {
            let mut out = formatter.text(line);
            out.push_str(&formatter.linebreak(true));
            out
        }
    }

    fn text_line(
        &mut self,
        formatter: &dyn Formatter,
        out: &mut String,
        indent: usize,
        text: &str,
        inhibit_p: bool,
    ) {
        self.close_table(formatter, out);

        // Deeper indentation than the innermost list continues its item
        while self.lists.last().is_some_and(|level| level.indent >= indent) {
            self.pop_list(formatter, out);
        }

        if self.lists.is_empty() && !self.in_p && !inhibit_p {
            out.push_str(&formatter.paragraph(true));
            self.in_p = true;
        }
        out.push_str(&self.inline.format(formatter, text));
    }

    fn table_row(&mut self, formatter: &dyn Formatter, out: &mut String, cells: &[&str]) {
        self.close_paragraph(formatter, out);
        self.close_lists(formatter, out);

        if !self.in_table {
            out.push_str(&formatter.table(true));
            self.in_table = true;
        }

        out.push_str(&formatter.table_row(true));
        for cell in cells {
            out.push_str(&formatter.table_cell(true));
            out.push_str(&self.inline.format(formatter, cell.trim()));
            out.push_str(&self.inline.close(formatter));
            out.push_str(&formatter.table_cell(false));
        }
        out.push_str(&formatter.table_row(false));
    }

    /// Make room for a new item of `kind` at `indent`.
    ///
    /// Closes deeper lists and lists of another kind at the same indent,
    /// closes the previous sibling item, or opens a new (nested) list.
    fn open_item(
        &mut self,
        formatter: &dyn Formatter,
        out: &mut String,
        indent: usize,
        kind: ListKind,
    ) {
        while self
            .lists
            .last()
            .is_some_and(|level| level.indent > indent || (level.indent == indent && level.kind != kind))
        {
            self.pop_list(formatter, out);
        }

        let sibling = self.lists.last().is_some_and(|level| level.indent == indent);
        if sibling {
            self.close_item(formatter, out);
        } else {
            out.push_str(&list_tag(formatter, kind, true));
            self.lists.push(ListLevel {
                indent,
                kind,
                item_open: false,
            });
        }

        if let Some(level) = self.lists.last_mut() {
            level.item_open = true;
        }
    }

    fn close_item(&mut self, formatter: &dyn Formatter, out: &mut String) {
        let Some(level) = self.lists.last_mut() else {
            return;
        };
        if !level.item_open {
            return;
        }
        level.item_open = false;
        let kind = level.kind;

        out.push_str(&self.inline.close(formatter));
        match kind {
            ListKind::Definition => out.push_str(&formatter.definition_desc(false)),
            _ => out.push_str(&formatter.listitem(false, true)),
        }
    }

    fn pop_list(&mut self, formatter: &dyn Formatter, out: &mut String) {
        self.close_item(formatter, out);
        if let Some(level) = self.lists.pop() {
            out.push_str(&list_tag(formatter, level.kind, false));
        }
    }

    fn close_lists(&mut self, formatter: &dyn Formatter, out: &mut String) {
        while !self.lists.is_empty() {
            self.pop_list(formatter, out);
        }
    }

    fn close_paragraph(&mut self, formatter: &dyn Formatter, out: &mut String) {
        if self.in_p {
            out.push_str(&self.inline.close(formatter));
            out.push_str(&formatter.paragraph(false));
            self.in_p = false;
        }
    }

    fn close_table(&mut self, formatter: &dyn Formatter, out: &mut String) {
        if self.in_table {
            out.push_str(&formatter.table(false));
            self.in_table = false;
        }
    }

    fn close_blocks(&mut self, formatter: &dyn Formatter, out: &mut String) {
        self.close_paragraph(formatter, out);
        self.close_table(formatter, out);
        self.close_lists(formatter, out);
    }
}

fn list_tag(formatter: &dyn Formatter, kind: ListKind, on: bool) -> String {
    match kind {
        ListKind::Bullet => formatter.bullet_list(on),
        ListKind::Ordered(numbering) => formatter.number_list(on, numbering),
        ListKind::Definition => formatter.definition_list(on),
    }
}

impl MarkupScanner for WikiScanner {
    fn scan(&mut self, formatter: &dyn Formatter, line: &str, inhibit_p: bool) -> Result<String> {
        self.pre_closed = false;
        if self.in_pre {
            return Ok(self.scan_pre(formatter, line));
        }

        let blank = line.trim().is_empty();
        self.line_was_empty = blank || self.prev_blank;
        self.prev_blank = blank;

        let mut out = String::new();

        // Blank lines end paragraphs and tables; lists survive them
        if blank {
            self.close_paragraph(formatter, &mut out);
            self.close_table(formatter, &mut out);
            return Ok(out);
        }

        match rules::block(line) {
            Block::PreOpen => {
                self.close_paragraph(formatter, &mut out);
                self.close_table(formatter, &mut out);
                out.push_str(&formatter.preformatted(true));
                self.in_pre = true;
            }
            Block::PreClose => {
                // Stray terminator outside a block is plain text
                let indent = rules::indent_of(line);
                self.text_line(formatter, &mut out, indent, line.trim(), inhibit_p);
            }
            Block::Heading { level, title } => {
                self.close_blocks(formatter, &mut out);
                out.push_str(&formatter.heading(true, level));
                out.push_str(&self.inline.format(formatter, title));
                out.push_str(&self.inline.close(formatter));
                out.push_str(&formatter.heading(false, level));
            }
            Block::Rule => {
                self.close_blocks(formatter, &mut out);
                out.push_str(&formatter.rule());
            }
            Block::TableRow(cells) => {
                self.table_row(formatter, &mut out, &cells);
            }
            Block::ListItem {
                indent,
                marker,
                text,
            } => {
                self.close_paragraph(formatter, &mut out);
                self.close_table(formatter, &mut out);
                self.open_item(formatter, &mut out, indent, marker.list_kind());
                out.push_str(&formatter.listitem(true, marker.is_bulleted()));
                out.push_str(&self.inline.format(formatter, text));
            }
            Block::Definition { indent, term, desc } => {
                self.close_paragraph(formatter, &mut out);
                self.close_table(formatter, &mut out);
                self.open_item(formatter, &mut out, indent, ListKind::Definition);
                if !term.is_empty() {
                    out.push_str(&formatter.definition_term(true));
                    out.push_str(&self.inline.format(formatter, term));
                    out.push_str(&self.inline.close(formatter));
                    out.push_str(&formatter.definition_term(false));
                }
                out.push_str(&formatter.definition_desc(true));
                out.push_str(&self.inline.format(formatter, desc));
            }
            Block::Text { indent, text } => {
                self.text_line(formatter, &mut out, indent, text, inhibit_p);
            }
        }

        Ok(out)
    }

    fn context(&self) -> ScanContext {
        ScanContext {
            in_table: self.in_table,
            // The terminator line still belongs to the block
            in_pre: self.in_pre || self.pre_closed,
            in_list: self.in_list(),
            line_was_empty: self.line_was_empty,
        }
    }

    fn classify(&self, line: &str) -> Classification {
        rules::classify(line)
    }

    fn finish(&mut self, formatter: &dyn Formatter) -> Result<String> {
        let mut out = String::new();
        self.close_blocks(formatter, &mut out);
        if self.in_pre {
            out.push_str(&formatter.preformatted(false));
        }
        self.reset();
        Ok(out)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
