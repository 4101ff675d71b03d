//! Pull-based token streams.
//!
//! A [`TokenStream`] owns everything that changes while one input is being
//! analyzed: the input buffer and the tokenizer cursor. The tokenizer and the
//! filter chain are shared, immutable configuration. Calling
//! [`TokenStream::reset`] re-arms the stream on new input and keeps the buffer
//! allocation, so nothing from the previous input can leak into the next one.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::analysis::char_source::CharSource;
use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::{Tokenizer, TokenizerState};
use crate::error::Result;

/// Buffers larger than this are dropped instead of pooled.
const MAX_POOLED_CAPACITY: usize = 1 << 20;

/// Bounded pool of input buffers shared by the streams of one analyzer.
#[derive(Debug)]
pub(crate) struct BufferPool {
    buffers: Mutex<Vec<String>>,
    max_buffers: usize,
}

impl BufferPool {
    pub(crate) fn new(max_buffers: usize) -> Self {
        BufferPool {
            buffers: Mutex::new(Vec::new()),
            max_buffers,
        }
    }

    pub(crate) fn take(&self) -> String {
        self.buffers.lock().pop().unwrap_or_default()
    }

    pub(crate) fn give(&self, mut buffer: String) {
        if buffer.capacity() == 0 || buffer.capacity() > MAX_POOLED_CAPACITY {
            return;
        }
        buffer.clear();

        let mut buffers = self.buffers.lock();
        if buffers.len() < self.max_buffers {
            buffers.push(buffer);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.buffers.lock().len()
    }
}

/// A stream of analyzed tokens over one input.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use falx::analysis::analyzer::stream::TokenStream;
/// use falx::analysis::token_filter::Filter;
/// use falx::analysis::token_filter::lowercase::LowercaseFilter;
/// use falx::analysis::tokenizer::word_break::WordBreakTokenizer;
///
/// let filters: Vec<Arc<dyn Filter>> = vec![Arc::new(LowercaseFilter::new())];
/// let mut stream = TokenStream::new(Arc::new(WordBreakTokenizer::new()), filters.into());
///
/// let mut first = "Hello World";
/// stream.reset(&mut first).unwrap();
/// assert_eq!(stream.next_token().unwrap().text, "hello");
///
/// let mut second = "Bună ziua";
/// stream.reset(&mut second).unwrap();
/// assert_eq!(stream.next_token().unwrap().text, "bună");
/// assert_eq!(stream.next_token().unwrap().text, "ziua");
/// assert!(stream.next_token().is_none());
/// ```
pub struct TokenStream {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Arc<[Arc<dyn Filter>]>,
    buffer: String,
    state: TokenizerState,
    pool: Option<Arc<BufferPool>>,
}

impl TokenStream {
    /// Create an empty stream; call [`reset`](Self::reset) to bind it to input.
    pub fn new(tokenizer: Arc<dyn Tokenizer>, filters: Arc<[Arc<dyn Filter>]>) -> Self {
        TokenStream {
            tokenizer,
            filters,
            buffer: String::new(),
            state: TokenizerState::new(),
            pool: None,
        }
    }

    /// Create a stream whose buffer comes from, and returns to, `pool`.
    pub(crate) fn pooled(
        tokenizer: Arc<dyn Tokenizer>,
        filters: Arc<[Arc<dyn Filter>]>,
        pool: Arc<BufferPool>,
    ) -> Self {
        TokenStream {
            tokenizer,
            filters,
            buffer: pool.take(),
            state: TokenizerState::new(),
            pool: Some(pool),
        }
    }

    /// Re-arm the stream on new input.
    ///
    /// On a read failure the stream is left empty and the error is returned.
    pub fn reset(&mut self, input: &mut dyn CharSource) -> Result<()> {
        self.buffer.clear();
        self.state.reset();

        if let Err(e) = input.read_into(&mut self.buffer) {
            self.buffer.clear();
            return Err(e);
        }
        Ok(())
    }

    /// Pull the next surviving token.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            let token = self.tokenizer.next_token(&self.buffer, &mut self.state)?;
            let survivor = self
                .filters
                .iter()
                .try_fold(token, |token, filter| filter.apply(token));
            if survivor.is_some() {
                return survivor;
            }
        }
    }

    /// The text currently being analyzed.
    pub fn input(&self) -> &str {
        &self.buffer
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        if let Some(pool) = self.pool.take() {
            pool.give(std::mem::take(&mut self.buffer));
        }
    }
}

impl fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStream")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .field("offset", &self.state.offset)
            .field("position", &self.state.position)
            .finish()
    }
}
