//! Core enums for brasis line classification.
//!
//! A scanner reports the structural roles of a line as [`LineCategory`]
//! values. The group names match the rule labels of the wiki grammar so
//! that a classification can be looked up by name.

/// A structural role a single wiki line may match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineCategory {
    /// Bulleted list item (`* item`)
    ListItem,
    /// List item without a bullet (`. item`)
    ListItemNone,
    /// Ordered list item (`1. item`, `a. item`, ...)
    OrderedList,
    /// Definition list entry (` term:: description`)
    DefinitionList,
    /// Table row (`||cell||cell||`)
    TableRow,
    /// Heading (`= title =`)
    Heading,
    /// Preformatted block marker (`{{{` or `}}}` on its own)
    Preformatted,
    /// Horizontal rule (`----`)
    Rule,
    /// Inline code (`{{{code}}}`)
    InlineCode,
    /// Strong toggle (`'''`)
    Strong,
    /// Emphasis toggle (`''`)
    Emphasis,
    /// Macro call (`<<BR>>`)
    Macro,
    /// Wiki link (`[[target|label]]`)
    Link,
    /// Bare URL
    Url,
}

impl LineCategory {
    /// All categories, in rule order.
    pub const ALL: [LineCategory; 14] = [
        LineCategory::Preformatted,
        LineCategory::Heading,
        LineCategory::Rule,
        LineCategory::TableRow,
        LineCategory::ListItem,
        LineCategory::ListItemNone,
        LineCategory::OrderedList,
        LineCategory::DefinitionList,
        LineCategory::InlineCode,
        LineCategory::Strong,
        LineCategory::Emphasis,
        LineCategory::Macro,
        LineCategory::Link,
        LineCategory::Url,
    ];

    /// Rule group label of this category.
    pub fn group_name(&self) -> &'static str {
        match self {
            LineCategory::ListItem => "li",
            LineCategory::ListItemNone => "li_none",
            LineCategory::OrderedList => "ol",
            LineCategory::DefinitionList => "dl",
            LineCategory::TableRow => "table",
            LineCategory::Heading => "heading",
            LineCategory::Preformatted => "pre",
            LineCategory::Rule => "rule",
            LineCategory::InlineCode => "code",
            LineCategory::Strong => "strong",
            LineCategory::Emphasis => "emph",
            LineCategory::Macro => "macro",
            LineCategory::Link => "link",
            LineCategory::Url => "url",
        }
    }

    /// Look up a category by its rule group label.
    ///
    /// # Example
    ///
    /// ```
    /// use brasis_core::LineCategory;
    /// assert_eq!(LineCategory::from_group_name("li_none"), Some(LineCategory::ListItemNone));
    /// assert_eq!(LineCategory::from_group_name("smiley"), None);
    /// ```
    pub fn from_group_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.group_name() == name)
    }

    /// Whether this category belongs to any kind of list.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            LineCategory::ListItem
                | LineCategory::ListItemNone
                | LineCategory::OrderedList
                | LineCategory::DefinitionList
        )
    }
}

impl std::fmt::Display for LineCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.group_name())
    }
}

/// Represents the type of list being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Unordered list (`*` and `.` items)
    Bullet,
    /// Ordered list with its numbering type (`1`, `a`, `A`, `i`, `I`)
    Ordered(char),
    /// Definition list
    Definition,
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Bullet => write!(f, "bullet"),
            ListKind::Ordered(kind) => write!(f, "ordered({})", kind),
            ListKind::Definition => write!(f, "definition"),
        }
    }
}
