//! The line-break decider.

use brasis_core::{Formatter, LineProcessor, MarkupScanner, Result};
use log::trace;

use crate::state::BreakState;

/// Wraps a [`MarkupScanner`] and inserts line breaks between source lines
/// that would otherwise run together in one paragraph.
///
/// One decider serves one document pass at a time; call
/// [`LineBreakDecider::reset`] (or let a document driver do it) between
/// documents.
#[derive(Debug)]
pub struct LineBreakDecider<S, F> {
    scanner: S,
    formatter: F,
    state: BreakState,
}

impl<S: MarkupScanner, F: Formatter> LineBreakDecider<S, F> {
    pub fn new(scanner: S, formatter: F) -> Self {
        Self {
            scanner,
            formatter,
            state: BreakState::new(),
        }
    }

    /// The carried state.
    pub fn state(&self) -> BreakState {
        self.state
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    pub fn into_parts(self) -> (S, F) {
        (self.scanner, self.formatter)
    }

    /// Render one line, prefixed with a break when the policy allows it.
    ///
    /// Scanner errors propagate unchanged and leave the carried state as
    /// it was.
    pub fn process(&mut self, line: &str, inhibit_p: bool) -> Result<String> {
        let rendered = self.scanner.scan(&self.formatter, line, inhibit_p)?;

        // The render call does not report what it matched, so match again
        let class = self.scanner.classify(line);
        let ctx = self.scanner.context();

        let emit = self.state.advance(&class, &ctx);
        trace!(
            "line {:?}: class={} ctx={:?} break={} next={}",
            line,
            class,
            ctx,
            emit,
            self.state.pending_break
        );

        if emit {
            let mut output = self.formatter.linebreak(false);
            output.push_str(&rendered);
            Ok(output)
        } else {
            Ok(rendered)
        }
    }

    /// Close open structures and return the closing markup.
    pub fn finish(&mut self) -> Result<String> {
        self.scanner.finish(&self.formatter)
    }

    /// Reset the carried state and the scanner.
    pub fn reset(&mut self) {
        self.state.reset();
        self.scanner.reset();
    }
}

impl<S: MarkupScanner, F: Formatter> LineProcessor for LineBreakDecider<S, F> {
    fn process_line(&mut self, line: &str) -> Result<String> {
        self.process(line, false)
    }

    fn finish(&mut self) -> Result<String> {
        LineBreakDecider::finish(self)
    }

    fn reset(&mut self) {
        LineBreakDecider::reset(self)
    }
}
