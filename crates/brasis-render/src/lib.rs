//! Brasis Render
//!
//! This crate provides the HTML output side of brasis:
//!
//! - [`HtmlFormatter`] - HTML fragments for every output primitive
//! - [`Renderer`] - the document formatting driver that feeds lines to a
//!   [`LineProcessor`] and writes the result
//!
//! # Example
//!
//! ```
//! use brasis_core::{LineProcessor, Result};
//! use brasis_render::Renderer;
//!
//! struct Upper;
//!
//! impl LineProcessor for Upper {
//!     fn process_line(&mut self, line: &str) -> Result<String> {
//!         Ok(line.to_uppercase())
//!     }
//!     fn finish(&mut self) -> Result<String> { Ok(String::new()) }
//!     fn reset(&mut self) {}
//! }
//!
//! let mut output = Vec::new();
//! let mut renderer = Renderer::new(&mut output);
//! renderer.render_document(&mut Upper, "a\nb").unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "A\nB\n");
//! ```

pub mod html;

pub use html::HtmlFormatter;

use std::io::{BufRead, Write};

use brasis_config::HtmlConfig;
use brasis_core::{BrasisError, LineProcessor, Result};
use log::{debug, trace};

/// Document formatting driver.
///
/// Every pass resets the processor before the first line and again after
/// the last one, so no per-document state survives into the next pass.
pub struct Renderer<W: Write> {
    /// Output writer
    writer: W,
    /// Wrap output in a complete HTML document
    standalone: bool,
    /// Title for standalone documents
    title: String,
    /// A standalone wrapper opened by `begin` is still open
    wrapped: bool,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer that writes bare HTML fragments.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            standalone: false,
            title: String::new(),
            wrapped: false,
        }
    }

    /// Create a renderer from the `[html]` config section.
    pub fn with_config(writer: W, config: &HtmlConfig) -> Self {
        Self {
            writer,
            standalone: config.standalone,
            title: config.title.clone(),
            wrapped: false,
        }
    }

    pub fn set_standalone(&mut self, standalone: bool) {
        self.standalone = standalone;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Open one standalone wrapper shared by every following pass.
    ///
    /// Without `begin`, each pass in standalone mode is wrapped on its own.
    pub fn begin(&mut self) -> Result<()> {
        if self.standalone && !self.wrapped {
            self.write_header()?;
            self.wrapped = true;
        }
        Ok(())
    }

    /// Close the wrapper opened by [`Renderer::begin`].
    pub fn end(&mut self) -> Result<()> {
        if self.wrapped {
            self.write_footer()?;
            self.wrapped = false;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Render a whole document held in memory.
    pub fn render_document(&mut self, processor: &mut dyn LineProcessor, text: &str) -> Result<()> {
        self.render_lines(processor, text.lines())
    }

    /// Render a document given as a sequence of lines.
    pub fn render_lines<I, S>(&mut self, processor: &mut dyn LineProcessor, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.pass(processor, lines.into_iter().map(Ok))
    }

    /// Render a document read line by line.
    pub fn render_reader<R: BufRead>(
        &mut self,
        processor: &mut dyn LineProcessor,
        reader: R,
    ) -> Result<()> {
        self.pass(processor, reader.lines().map(|l| l.map_err(BrasisError::from)))
    }

    fn pass<I, S>(&mut self, processor: &mut dyn LineProcessor, lines: I) -> Result<()>
    where
        I: Iterator<Item = Result<S>>,
        S: AsRef<str>,
    {
        processor.reset();
        let result = self.write_pass(processor, lines);
        processor.reset();
        result
    }

    fn write_pass<I, S>(&mut self, processor: &mut dyn LineProcessor, lines: I) -> Result<()>
    where
        I: Iterator<Item = Result<S>>,
        S: AsRef<str>,
    {
        let wrap = self.standalone && !self.wrapped;
        if wrap {
            self.write_header()?;
        }

        let mut count = 0usize;
        for line in lines {
            let line = line?;
            let fragment = processor.process_line(line.as_ref())?;
            trace!("line {}: {:?} -> {:?}", count + 1, line.as_ref(), fragment);
            if !fragment.is_empty() {
                self.writer.write_all(fragment.as_bytes())?;
                // Preformatted lines end in their own line break
                if !fragment.ends_with('\n') {
                    writeln!(self.writer)?;
                }
            }
            count += 1;
        }

        let closing = processor.finish()?;
        if !closing.is_empty() {
            writeln!(self.writer, "{}", closing)?;
        }

        if wrap {
            self.write_footer()?;
        }

        self.writer.flush()?;
        debug!("Rendered document of {} lines", count);
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "<!DOCTYPE html>")?;
        writeln!(self.writer, "<html>")?;
        writeln!(self.writer, "<head>")?;
        writeln!(self.writer, "<meta charset=\"utf-8\">")?;
        writeln!(
            self.writer,
            "<title>{}</title>",
            html_escape::encode_text(&self.title)
        )?;
        writeln!(self.writer, "</head>")?;
        writeln!(self.writer, "<body>")?;
        Ok(())
    }

    fn write_footer(&mut self) -> Result<()> {
        writeln!(self.writer, "</body>")?;
        writeln!(self.writer, "</html>")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records lifecycle calls and echoes lines.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        fail_on: Option<String>,
    }

    impl LineProcessor for Recorder {
        fn process_line(&mut self, line: &str) -> Result<String> {
            if self.fail_on.as_deref() == Some(line) {
                return Err(BrasisError::Scan(format!("cannot scan {}", line)));
            }
            self.calls.push(format!("line:{}", line));
            Ok(line.to_string())
        }

        fn finish(&mut self) -> Result<String> {
            self.calls.push("finish".to_string());
            Ok("end".to_string())
        }

        fn reset(&mut self) {
            self.calls.push("reset".to_string());
        }
    }

    fn render(processor: &mut Recorder, text: &str) -> (Result<()>, String) {
        let mut output = Vec::new();
        let result = Renderer::new(&mut output).render_document(processor, text);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_reset_before_and_after_pass() {
        let mut recorder = Recorder::default();
        let (result, output) = render(&mut recorder, "a\nb");
        assert!(result.is_ok());
        assert_eq!(output, "a\nb\nend\n");
        assert_eq!(
            recorder.calls,
            vec!["reset", "line:a", "line:b", "finish", "reset"]
        );
    }

    #[test]
    fn test_reset_after_failed_pass() {
        let mut recorder = Recorder {
            fail_on: Some("bad".to_string()),
            ..Default::default()
        };
        let (result, output) = render(&mut recorder, "ok\nbad\nnever");
        assert!(matches!(result, Err(BrasisError::Scan(_))));
        assert_eq!(output, "ok\n");
        assert_eq!(recorder.calls, vec!["reset", "line:ok", "reset"]);
    }

    #[test]
    fn test_empty_fragments_are_skipped() {
        let mut recorder = Recorder::default();
        let (_, output) = render(&mut recorder, "a\n\nb");
        assert_eq!(output, "a\nb\nend\n");
    }

    #[test]
    fn test_fragment_with_own_newline_is_not_doubled() {
        let mut recorder = Recorder::default();
        let mut output = Vec::new();
        Renderer::new(&mut output)
            .render_lines(&mut recorder, ["a", "b\n", "\n", "c"])
            .unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "a\nb\n\nc\nend\n");
    }

    #[test]
    fn test_standalone_wrapper() {
        let mut recorder = Recorder::default();
        let mut output = Vec::new();
        {
            let mut renderer = Renderer::new(&mut output);
            renderer.set_standalone(true);
            renderer.set_title("A & B");
            renderer.render_document(&mut recorder, "x").unwrap();
        }
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("<!DOCTYPE html>\n"));
        assert!(output.contains("<title>A &amp; B</title>"));
        assert!(output.ends_with("x\nend\n</body>\n</html>\n"));
    }

    #[test]
    fn test_begin_end_share_one_wrapper() {
        let mut recorder = Recorder::default();
        let mut output = Vec::new();
        {
            let mut renderer = Renderer::new(&mut output);
            renderer.set_standalone(true);
            renderer.begin().unwrap();
            renderer.render_document(&mut recorder, "x").unwrap();
            renderer.render_document(&mut recorder, "y").unwrap();
            renderer.end().unwrap();
        }
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("<!DOCTYPE html>").count(), 1);
        assert_eq!(output.matches("</html>").count(), 1);
        assert!(output.ends_with("<body>\nx\nend\ny\nend\n</body>\n</html>\n"));
    }

    #[test]
    fn test_begin_end_without_standalone_write_nothing() {
        let mut recorder = Recorder::default();
        let mut output = Vec::new();
        {
            let mut renderer = Renderer::new(&mut output);
            renderer.begin().unwrap();
            renderer.render_document(&mut recorder, "x").unwrap();
            renderer.end().unwrap();
        }
        assert_eq!(String::from_utf8(output).unwrap(), "x\nend\n");
    }

    #[test]
    fn test_render_reader() {
        let mut recorder = Recorder::default();
        let mut output = Vec::new();
        Renderer::new(&mut output)
            .render_reader(&mut recorder, "one\ntwo\n".as_bytes())
            .unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "one\ntwo\nend\n");
    }
}
