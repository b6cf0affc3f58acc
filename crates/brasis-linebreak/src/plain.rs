//! Scanner output without line-break preservation.

use brasis_core::{Formatter, LineProcessor, MarkupScanner, Result};

/// Feeds lines straight through a [`MarkupScanner`].
///
/// This is the baseline rendering where consecutive lines run together
/// in one paragraph.
#[derive(Debug)]
pub struct PlainProcessor<S, F> {
    scanner: S,
    formatter: F,
}

impl<S: MarkupScanner, F: Formatter> PlainProcessor<S, F> {
    pub fn new(scanner: S, formatter: F) -> Self {
        Self { scanner, formatter }
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    pub fn into_parts(self) -> (S, F) {
        (self.scanner, self.formatter)
    }
}

impl<S: MarkupScanner, F: Formatter> LineProcessor for PlainProcessor<S, F> {
    fn process_line(&mut self, line: &str) -> Result<String> {
        self.scanner.scan(&self.formatter, line, false)
    }

    fn finish(&mut self) -> Result<String> {
        self.scanner.finish(&self.formatter)
    }

    fn reset(&mut self) {
        self.scanner.reset();
    }
}
