//! Line input for the terminal front end.

use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin, stdin,
};

/// Reads prompts line by line from one buffered reader, so input that
/// arrives in a single chunk (pasted or piped) is not lost between reads.
pub struct PromptReader<R> {
    lines: Lines<R>,
}

impl PromptReader<BufReader<Stdin>> {
    /// Creates a reader over the process's standard input.
    #[inline]
    pub fn stdin() -> Self {
        Self::new(BufReader::new(stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> PromptReader<R> {
    /// Creates a reader over `reader`.
    #[inline]
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    /// Returns the next line without its terminator, or `None` at the end
    /// of input. Other whitespace is kept.
    pub async fn next_prompt(&mut self) -> Option<String> {
        match self.lines.next_line().await {
            Ok(line) => line,
            Err(err) => {
                error!("error reading input: {err}");
                None
            }
        }
    }
}
