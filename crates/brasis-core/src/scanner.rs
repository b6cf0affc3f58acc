//! Scanner-facing types and traits.
//!
//! A [`MarkupScanner`] renders wiki lines and keeps the running block
//! context of a document (lists, tables, preformatted blocks). Anything
//! that consumes a document line by line implements [`LineProcessor`].

use std::collections::BTreeSet;

use crate::enums::LineCategory;
use crate::error::Result;
use crate::formatter::Formatter;

/// The set of structural categories a line matched.
///
/// An empty classification means no rule matched, which is also what a
/// scanner reports for lines it cannot classify.
///
/// # Example
///
/// ```
/// use brasis_core::{Classification, LineCategory};
///
/// let class = Classification::from_group_names(["li", "unknown"]);
/// assert!(class.contains(LineCategory::ListItem));
/// assert!(class.intersects(&[LineCategory::TableRow, LineCategory::ListItem]));
/// assert_eq!(class.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    categories: BTreeSet<LineCategory>,
}

impl Classification {
    /// A classification with no categories.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from rule group labels, ignoring labels that name no category.
    pub fn from_group_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .filter_map(LineCategory::from_group_name)
            .collect()
    }

    pub fn insert(&mut self, category: LineCategory) {
        self.categories.insert(category);
    }

    pub fn contains(&self, category: LineCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Whether any of `categories` is present.
    pub fn intersects(&self, categories: &[LineCategory]) -> bool {
        categories.iter().any(|c| self.categories.contains(c))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = LineCategory> + '_ {
        self.categories.iter().copied()
    }
}

impl FromIterator<LineCategory> for Classification {
    fn from_iter<T: IntoIterator<Item = LineCategory>>(iter: T) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.categories.iter().map(|c| c.group_name()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// Block context of the scanner after it rendered a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanContext {
    /// Inside a table
    pub in_table: bool,
    /// Inside a preformatted block
    pub in_pre: bool,
    /// Inside any list
    pub in_list: bool,
    /// The line is blank or directly follows a blank line
    pub line_was_empty: bool,
}

/// A wiki line scanner.
///
/// Implementations render one line at a time and carry block state
/// between lines until [`MarkupScanner::reset`] is called.
pub trait MarkupScanner {
    /// Render a single line.
    ///
    /// With `inhibit_p` set, plain text does not open a paragraph.
    fn scan(&mut self, formatter: &dyn Formatter, line: &str, inhibit_p: bool) -> Result<String>;

    /// Context flags as of the last scanned line.
    fn context(&self) -> ScanContext;

    /// Match the grammar rules against a raw line.
    ///
    /// This does not touch the running state.
    fn classify(&self, line: &str) -> Classification;

    /// Close every open structure and return the closing markup.
    fn finish(&mut self, formatter: &dyn Formatter) -> Result<String>;

    /// Forget all running state.
    fn reset(&mut self);
}

/// Consumes a document line by line.
///
/// A document driver calls [`LineProcessor::reset`] before the first line
/// and after [`LineProcessor::finish`].
pub trait LineProcessor {
    /// Render one line.
    fn process_line(&mut self, line: &str) -> Result<String>;

    /// Close the document and return any trailing markup.
    fn finish(&mut self) -> Result<String>;

    /// Return to the initial state.
    fn reset(&mut self);
}
