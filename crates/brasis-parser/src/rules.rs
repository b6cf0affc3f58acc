//! Line grammar rules.
//!
//! Two views of the same grammar live here:
//!
//! - [`classify`] runs one combined regex over a raw line and reports which
//!   named rule groups matched (leftmost match wins, block rules are tried
//!   before inline rules at the same position).
//! - [`block`] splits a non-blank line into the block construct the scanner
//!   renders, with its captured parts.

use std::sync::LazyLock;

use brasis_core::{Classification, ListKind};
use regex::Regex;

/// Named rule fragments, in match priority order.
const SCAN_RULES: &[(&str, &str)] = &[
    ("pre", r"^\s*\{\{\{(?:#!\S*)?\s*$|^\s*\}\}\}\s*$"),
    (
        "heading",
        r"^\s*(?:=\s.*\s=|==\s.*\s==|===\s.*\s===|====\s.*\s====|=====\s.*\s=====)\s*$",
    ),
    ("rule", r"^\s*-{4,}\s*$"),
    ("table", r"^\s*\|\|.*\|\|\s*$"),
    ("li", r"^\s*\*(?:\s|$)"),
    ("li_none", r"^\s*\.(?:\s|$)"),
    ("ol", r"^(?:\s*[0-9]+|\s+[aAiI])\.(?:#[0-9]+)?(?:\s|$)"),
    ("dl", r"^\s+.*?::\s"),
    ("code", r"\{\{\{.*?\}\}\}"),
    ("strong", r"'''"),
    ("emph", r"''"),
    ("macro", r"<<[A-Za-z][A-Za-z0-9]*(?:\([^)]*\))?>>"),
    ("link", r"\[\[[^\]]+\]\]"),
    ("url", r#"https?://[^\s<>"]+"#),
];

/// Combined scan regex built from [`SCAN_RULES`].
static SCAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = SCAN_RULES
        .iter()
        .map(|(name, rule)| format!("(?P<{}>{})", name, rule))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern).unwrap()
});

/// Regex for a preformatted block opener, optionally naming a parser (`{{{#!python`)
static PRE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\{\{\{(?:#!\S*)?\s*$").unwrap());

/// Regex for a preformatted block terminator
static PRE_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\}\}\}\s*$").unwrap());

/// Regex for headings; marker lengths are compared separately
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(=+)\s+(.*?)\s+(=+)\s*$").unwrap());

/// Regex for horizontal rules
static RULE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*-{4,}\s*$").unwrap());

/// Regex for table rows
static TABLE_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\|\|(.*)\|\|\s*$").unwrap());

/// Regex for list items: `*`, `.`, `1.`, and (indented) `a.`, `A.`, `i.`, `I.`
static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)(\*|\.|[0-9]+\.|[aAiI]\.)(?:#[0-9]+)?(?:\s+(.*))?$").unwrap()
});

/// Regex for definition list entries
static DEFINITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s+)(.*?)::\s+(.*)$").unwrap());

/// Deepest heading level of the grammar.
pub const MAX_HEADING_LEVEL: usize = 5;

/// Classify a raw line by the rule groups it matches.
///
/// Lines no rule matches yield an empty classification.
///
/// # Example
///
/// ```
/// use brasis_core::LineCategory;
/// use brasis_parser::rules::classify;
///
/// assert!(classify("== Title ==").contains(LineCategory::Heading));
/// assert!(classify(" * item").contains(LineCategory::ListItem));
/// assert!(classify("just text").is_empty());
/// ```
pub fn classify(line: &str) -> Classification {
    match SCAN_RE.captures(line) {
        Some(caps) => Classification::from_group_names(
            SCAN_RE
                .capture_names()
                .flatten()
                .filter(|name| caps.name(name).is_some()),
        ),
        None => Classification::empty(),
    }
}

/// List item marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `*`
    Bullet,
    /// `.`
    NoBullet,
    /// `1.`, `a.`, `A.`, `i.`, `I.` with the numbering type
    Ordered(char),
}

impl ListMarker {
    fn parse(marker: &str) -> Option<Self> {
        match marker {
            "*" => Some(ListMarker::Bullet),
            "." => Some(ListMarker::NoBullet),
            m if m.ends_with('.') => {
                let body = m.trim_end_matches('.');
                if !body.is_empty() && body.chars().all(|c| c.is_ascii_digit()) {
                    Some(ListMarker::Ordered('1'))
                } else {
                    body.chars().next().map(ListMarker::Ordered)
                }
            }
            _ => None,
        }
    }

    /// The kind of list this marker belongs to.
    pub fn list_kind(&self) -> ListKind {
        match self {
            ListMarker::Bullet | ListMarker::NoBullet => ListKind::Bullet,
            ListMarker::Ordered(numbering) => ListKind::Ordered(*numbering),
        }
    }

    /// Whether the item shows its marker.
    pub fn is_bulleted(&self) -> bool {
        !matches!(self, ListMarker::NoBullet)
    }
}

/// Block construct of a non-blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// `{{{` on its own line
    PreOpen,
    /// `}}}` on its own line
    PreClose,
    Heading {
        level: usize,
        title: &'a str,
    },
    Rule,
    /// Cells between the outer `||` markers
    TableRow(Vec<&'a str>),
    ListItem {
        indent: usize,
        marker: ListMarker,
        text: &'a str,
    },
    Definition {
        indent: usize,
        term: &'a str,
        desc: &'a str,
    },
    Text {
        indent: usize,
        text: &'a str,
    },
}

/// Count leading whitespace characters.
pub fn indent_of(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Whether a line terminates a preformatted block.
pub fn is_pre_close(line: &str) -> bool {
    PRE_CLOSE_RE.is_match(line)
}

/// Split a line into its block construct.
pub fn block(line: &str) -> Block<'_> {
    if PRE_OPEN_RE.is_match(line) {
        return Block::PreOpen;
    }
    if PRE_CLOSE_RE.is_match(line) {
        return Block::PreClose;
    }
    if let Some(heading) = heading(line) {
        return heading;
    }
    if RULE_RE.is_match(line) {
        return Block::Rule;
    }
    if let Some(caps) = TABLE_ROW_RE.captures(line) {
        let inner = caps.get(1).map_or("", |m| m.as_str());
        return Block::TableRow(inner.split("||").collect());
    }
    if let Some(item) = list_item(line) {
        return item;
    }
    if let Some(caps) = DEFINITION_RE.captures(line) {
        return Block::Definition {
            indent: caps.get(1).map_or(0, |m| m.as_str().chars().count()),
            term: caps.get(2).map_or("", |m| m.as_str().trim()),
            desc: caps.get(3).map_or("", |m| m.as_str()),
        };
    }
    Block::Text {
        indent: indent_of(line),
        text: line.trim(),
    }
}

fn heading(line: &str) -> Option<Block<'_>> {
    let caps = HEADING_RE.captures(line)?;
    let open = caps.get(1)?.as_str().len();
    let close = caps.get(3)?.as_str().len();
    if open != close || open > MAX_HEADING_LEVEL {
        return None;
    }
    Some(Block::Heading {
        level: open,
        title: caps.get(2).map_or("", |m| m.as_str()),
    })
}

fn list_item(line: &str) -> Option<Block<'_>> {
    let caps = LIST_ITEM_RE.captures(line)?;
    let indent = caps.get(1).map_or(0, |m| m.as_str().chars().count());
    let marker = ListMarker::parse(caps.get(2)?.as_str())?;
    // Letter numbering needs indentation so sentences like "I. e." stay text
    if indent == 0 && matches!(marker, ListMarker::Ordered(c) if c != '1') {
        return None;
    }
    Some(Block::ListItem {
        indent,
        marker,
        text: caps.get(3).map_or("", |m| m.as_str()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use brasis_core::LineCategory;

    fn only(line: &str) -> Option<LineCategory> {
        let class = classify(line);
        assert!(class.len() <= 1, "{} matched {}", line, class);
        let first = class.iter().next();
        first
    }

    #[test]
    fn test_classify_block_rules() {
        assert_eq!(only("= Title ="), Some(LineCategory::Heading));
        assert_eq!(only("===== Deep ====="), Some(LineCategory::Heading));
        assert_eq!(only("||a||b||"), Some(LineCategory::TableRow));
        assert_eq!(only("* item"), Some(LineCategory::ListItem));
        assert_eq!(only("  . loose"), Some(LineCategory::ListItemNone));
        assert_eq!(only("1. first"), Some(LineCategory::OrderedList));
        assert_eq!(only(" a.#3 third"), Some(LineCategory::OrderedList));
        assert_eq!(only(" term:: desc"), Some(LineCategory::DefinitionList));
        assert_eq!(only("{{{"), Some(LineCategory::Preformatted));
        assert_eq!(only("}}}"), Some(LineCategory::Preformatted));
        assert_eq!(only("-----"), Some(LineCategory::Rule));
    }

    #[test]
    fn test_classify_unbalanced_heading() {
        assert_eq!(only("== Title ="), None);
        assert_eq!(only("====== Six ======"), None);
    }

    #[test]
    fn test_classify_leftmost_inline_match() {
        assert_eq!(only("some '''bold''' text"), Some(LineCategory::Strong));
        assert_eq!(only("an ''em'' word"), Some(LineCategory::Emphasis));
        assert_eq!(only("see {{{x}}} and '''y'''"), Some(LineCategory::InlineCode));
        assert_eq!(only("break<<BR>>here"), Some(LineCategory::Macro));
        assert_eq!(only("go to [[Page]]"), Some(LineCategory::Link));
        assert_eq!(only("visit https://example.org now"), Some(LineCategory::Url));
    }

    #[test]
    fn test_classify_block_beats_inline() {
        assert_eq!(only("* '''bold''' item"), Some(LineCategory::ListItem));
        assert_eq!(only("= ''Title'' ="), Some(LineCategory::Heading));
    }

    #[test]
    fn test_classify_plain_text() {
        assert!(classify("").is_empty());
        assert!(classify("plain words").is_empty());
        assert!(classify("*bold*").is_empty());
        assert!(classify("1.5 million").is_empty());
        assert!(classify("I. e. not a list").is_empty());
    }

    #[test]
    fn test_block_heading() {
        assert_eq!(
            block("== Two words =="),
            Block::Heading {
                level: 2,
                title: "Two words"
            }
        );
        assert!(matches!(block("== Title ="), Block::Text { .. }));
    }

    #[test]
    fn test_block_table_row() {
        assert_eq!(block("||a|| b ||"), Block::TableRow(vec!["a", " b "]));
    }

    #[test]
    fn test_block_list_items() {
        assert_eq!(
            block("  * item"),
            Block::ListItem {
                indent: 2,
                marker: ListMarker::Bullet,
                text: "item"
            }
        );
        assert_eq!(
            block("10. tenth"),
            Block::ListItem {
                indent: 0,
                marker: ListMarker::Ordered('1'),
                text: "tenth"
            }
        );
        assert_eq!(
            block(" i. roman"),
            Block::ListItem {
                indent: 1,
                marker: ListMarker::Ordered('i'),
                text: "roman"
            }
        );
        assert!(matches!(block("I. think"), Block::Text { .. }));
    }

    #[test]
    fn test_block_definition() {
        assert_eq!(
            block(" term:: the meaning"),
            Block::Definition {
                indent: 1,
                term: "term",
                desc: "the meaning"
            }
        );
    }

    #[test]
    fn test_block_text() {
        assert_eq!(
            block("   indented words "),
            Block::Text {
                indent: 3,
                text: "indented words"
            }
        );
    }

    #[test]
    fn test_marker_kinds() {
        assert_eq!(ListMarker::NoBullet.list_kind(), ListKind::Bullet);
        assert!(!ListMarker::NoBullet.is_bulleted());
        assert_eq!(ListMarker::Ordered('A').list_kind(), ListKind::Ordered('A'));
    }
}
