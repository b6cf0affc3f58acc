//! Carried line-break state.
//!
//! [`BreakState`] holds the two flags carried from one line to the next
//! and applies the break policy for a line given its classification and
//! the scanner context.

use brasis_core::{Classification, LineCategory, ScanContext};

/// Categories that never receive a break before themselves.
pub const SUPPRESS_CURRENT: &[LineCategory] = &[
    LineCategory::ListItem,
    LineCategory::ListItemNone,
    LineCategory::OrderedList,
    LineCategory::DefinitionList,
    LineCategory::TableRow,
];

/// Categories after which the following line never receives a break.
pub const SUPPRESS_NEXT: &[LineCategory] = &[LineCategory::Heading, LineCategory::TableRow];

/// Per-document state of the line-break policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreakState {
    /// A break goes before the next eligible line
    pub pending_break: bool,
    /// The previous line was inside a list
    pub was_in_list: bool,
}

impl BreakState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the current line may be preceded by a break.
    ///
    /// A break is ruled out for list items and table rows, inside tables
    /// and preformatted blocks, on the line where list membership changes,
    /// and at paragraph boundaries.
    pub fn can_break_now(&self, class: &Classification, ctx: &ScanContext) -> bool {
        !(class.intersects(SUPPRESS_CURRENT)
            || ctx.in_table
            || ctx.in_pre
            || self.was_in_list != ctx.in_list
            || ctx.line_was_empty)
    }

    /// Whether the line after the current one may be preceded by a break.
    pub fn can_break_next(class: &Classification, ctx: &ScanContext) -> bool {
        !(class.intersects(SUPPRESS_NEXT) || ctx.in_table || ctx.in_pre)
    }

    /// Apply the policy for one line and advance to the next.
    ///
    /// Returns true when a break must be inserted before the current line.
    ///
    /// # Example
    ///
    /// ```
    /// use brasis_core::{Classification, ScanContext};
    /// use brasis_linebreak::BreakState;
    ///
    /// let mut state = BreakState::new();
    /// let plain = Classification::empty();
    /// let ctx = ScanContext::default();
    ///
    /// assert!(!state.advance(&plain, &ctx)); // nothing pending yet
    /// assert!(state.advance(&plain, &ctx));
    /// ```
    pub fn advance(&mut self, class: &Classification, ctx: &ScanContext) -> bool {
        let emit = self.pending_break && self.can_break_now(class, ctx);
        self.pending_break = Self::can_break_next(class, ctx);
        self.was_in_list = ctx.in_list;
        emit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(categories: &[LineCategory]) -> Classification {
        categories.iter().copied().collect()
    }

    fn pending() -> BreakState {
        BreakState {
            pending_break: true,
            was_in_list: false,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = BreakState::new();
        assert!(!state.pending_break);
        assert!(!state.was_in_list);
    }

    #[test]
    fn test_plain_lines_break_after_first() {
        let mut state = BreakState::new();
        let ctx = ScanContext::default();
        assert!(!state.advance(&Classification::empty(), &ctx));
        assert!(state.pending_break);
        assert!(state.advance(&Classification::empty(), &ctx));
    }

    #[test]
    fn test_suppress_current_categories() {
        let ctx = ScanContext::default();
        for category in SUPPRESS_CURRENT {
            let mut state = pending();
            assert!(!state.advance(&class(&[*category]), &ctx), "{}", category);
        }
    }

    #[test]
    fn test_suppress_next_categories() {
        let ctx = ScanContext::default();
        for category in SUPPRESS_NEXT {
            let mut state = pending();
            state.advance(&class(&[*category]), &ctx);
            assert!(!state.pending_break, "{}", category);
        }
    }

    #[test]
    fn test_list_item_still_sets_pending() {
        let mut state = BreakState::new();
        let ctx = ScanContext {
            in_list: true,
            ..Default::default()
        };
        state.advance(&class(&[LineCategory::ListItem]), &ctx);
        assert!(state.pending_break);
        assert!(state.was_in_list);
    }

    #[test]
    fn test_table_and_pre_context() {
        for ctx in [
            ScanContext {
                in_table: true,
                ..Default::default()
            },
            ScanContext {
                in_pre: true,
                ..Default::default()
            },
        ] {
            let mut state = pending();
            assert!(!state.advance(&Classification::empty(), &ctx));
            assert!(!state.pending_break);
        }
    }

    #[test]
    fn test_list_transition_suppresses() {
        let entering = ScanContext {
            in_list: true,
            ..Default::default()
        };
        let mut state = pending();
        assert!(!state.advance(&Classification::empty(), &entering));

        let leaving = ScanContext::default();
        let mut state = BreakState {
            pending_break: true,
            was_in_list: true,
        };
        assert!(!state.advance(&Classification::empty(), &leaving));
        assert!(!state.was_in_list);
    }

    #[test]
    fn test_staying_in_list_allows_break() {
        let ctx = ScanContext {
            in_list: true,
            ..Default::default()
        };
        let mut state = BreakState {
            pending_break: true,
            was_in_list: true,
        };
        assert!(state.advance(&Classification::empty(), &ctx));
    }

    #[test]
    fn test_paragraph_boundary_suppresses() {
        let ctx = ScanContext {
            line_was_empty: true,
            ..Default::default()
        };
        let mut state = pending();
        assert!(!state.advance(&Classification::empty(), &ctx));
        assert!(state.pending_break);
    }

    #[test]
    fn test_inline_categories_do_not_suppress() {
        let ctx = ScanContext::default();
        let mut state = pending();
        assert!(state.advance(&class(&[LineCategory::Strong]), &ctx));
    }

    #[test]
    fn test_reset() {
        let mut state = BreakState {
            pending_break: true,
            was_in_list: true,
        };
        state.reset();
        assert_eq!(state, BreakState::default());
    }
}
