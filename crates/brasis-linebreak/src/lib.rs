//! Brasis Line Break
//!
//! Preserves source line breaks when rendering wiki markup. The
//! [`LineBreakDecider`] wraps a [`MarkupScanner`](brasis_core::MarkupScanner)
//! and prepends the formatter's line break to a line's output when the
//! previous line left a break pending and the current line may take one.
//!
//! # Policy
//!
//! No break is inserted before:
//! - list items, definition entries and table rows ([`SUPPRESS_CURRENT`])
//! - any line inside a table or preformatted block
//! - the line on which a list starts or ends
//! - a blank line or the first line after one
//!
//! No break is left pending after headings and table rows
//! ([`SUPPRESS_NEXT`]), nor after lines inside a table or preformatted
//! block. Inside tables an explicit `<<BR>>` is the only way to break a
//! line.
//!
//! # Example
//!
//! ```
//! use brasis_linebreak::LineBreakDecider;
//! use brasis_parser::WikiScanner;
//! use brasis_render::HtmlFormatter;
//!
//! let mut decider = LineBreakDecider::new(WikiScanner::new(), HtmlFormatter::new());
//!
//! assert_eq!(decider.process("para one", false).unwrap(), "<p>para one");
//! assert_eq!(decider.process("para two", false).unwrap(), "<br>para two");
//! assert_eq!(decider.process("", false).unwrap(), "</p>");
//! assert_eq!(decider.process("* item", false).unwrap(), "<ul><li>item");
//! assert_eq!(decider.process("para three", false).unwrap(), "</li></ul><p>para three");
//! ```

pub mod decider;
pub mod plain;
pub mod state;

pub use decider::LineBreakDecider;
pub use plain::PlainProcessor;
pub use state::{BreakState, SUPPRESS_CURRENT, SUPPRESS_NEXT};
