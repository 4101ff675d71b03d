//! Character sources feeding the analysis pipeline.
//!
//! A [`CharSource`] is read exactly once, synchronously, when a
//! [`TokenStream`](crate::analysis::analyzer::TokenStream) is reset onto it.
//! Any failure to read surfaces as a resource error.

use std::io::Read;

use crate::error::{FalxError, Result};

/// Sequential access to raw input text.
pub trait CharSource {
    /// Append the remaining input to `buf`.
    fn read_into(&mut self, buf: &mut String) -> Result<()>;
}

impl CharSource for &str {
    fn read_into(&mut self, buf: &mut String) -> Result<()> {
        buf.push_str(self);
        *self = "";
        Ok(())
    }
}

impl CharSource for String {
    fn read_into(&mut self, buf: &mut String) -> Result<()> {
        buf.push_str(self);
        self.clear();
        Ok(())
    }
}

/// Adapts any [`std::io::Read`] into a [`CharSource`].
///
/// The bytes must be valid UTF-8.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn read_into(&mut self, buf: &mut String) -> Result<()> {
        self.reader
            .read_to_string(buf)
            .map_err(|e| FalxError::resource(format!("Failed to read input: {e}")))?;
        Ok(())
    }
}
