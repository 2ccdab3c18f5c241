use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
    sync::{Arc, Mutex},
};

use crate::interpreter::evaluator::utils::lock;

/// Whitespace-delimited word reader over a buffered input.
struct WordReader {
    reader:  Box<dyn BufRead + Send>,
    pending: VecDeque<String>,
}

impl WordReader {
    /// Returns the next whitespace-delimited word, reading more lines as
    /// needed. `Ok(None)` means end of input.
    fn next_word(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Ok(Some(word));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// The program's only window to the outside: standard output for `print`,
/// standard input for `read`.
///
/// A console is shared by the main thread and every threadloop, so both
/// streams sit behind their own lock; a `print` never interleaves with
/// another `print` mid-line.
#[derive(Clone)]
pub struct Console {
    output: Arc<Mutex<Box<dyn Write + Send>>>,
    input:  Arc<Mutex<WordReader>>,
}

impl Console {
    /// Creates a console over arbitrary streams.
    pub fn new(output: impl Write + Send + 'static, input: impl BufRead + Send + 'static) -> Self {
        Self { output: Arc::new(Mutex::new(Box::new(output))),
               input:  Arc::new(Mutex::new(WordReader { reader:  Box::new(input),
                                                        pending: VecDeque::new(), })), }
    }

    /// Creates a console bound to the process's standard output and input.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::BufReader::new(io::stdin()))
    }

    /// Creates a console whose output is collected into a shared buffer and
    /// whose input is the given text.
    ///
    /// # Example
    /// ```
    /// use hrl::interpreter::console::Console;
    ///
    /// let (console, output) = Console::captured("12 7");
    /// console.write_line("hello").unwrap();
    /// assert_eq!(console.read_word().unwrap(), Some("12".to_string()));
    /// assert_eq!(String::from_utf8(output.lock().unwrap().clone()).unwrap(), "hello\n");
    /// ```
    #[must_use]
    pub fn captured(input: &str) -> (Self, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let console = Self::new(SharedBuffer(Arc::clone(&buffer)),
                                io::Cursor::new(input.as_bytes().to_vec()));
        (console, buffer)
    }

    /// Writes `text` followed by a newline and flushes.
    ///
    /// # Errors
    /// Propagates I/O errors from the underlying stream.
    pub fn write_line(&self, text: &str) -> io::Result<()> {
        let mut output = lock(&self.output);
        writeln!(output, "{text}")?;
        output.flush()
    }

    /// Blocks until the next whitespace-delimited word is available.
    ///
    /// # Errors
    /// Propagates I/O errors from the underlying stream.
    pub fn read_word(&self) -> io::Result<Option<String>> {
        lock(&self.input).next_word()
    }
}

/// `Write` adapter appending to a shared byte buffer.
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock(&self.0).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_span_lines() {
        let (console, _) = Console::captured("1 2\n\n  3\n");
        assert_eq!(console.read_word().unwrap(), Some("1".to_string()));
        assert_eq!(console.read_word().unwrap(), Some("2".to_string()));
        assert_eq!(console.read_word().unwrap(), Some("3".to_string()));
        assert_eq!(console.read_word().unwrap(), None);
    }
}
