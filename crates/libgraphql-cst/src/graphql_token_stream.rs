//! Bounded lookahead over any [`GraphQLTokenSource`].

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use std::collections::VecDeque;

/// Buffers tokens from a [`GraphQLTokenSource`] so the parser can peek ahead
/// without re-lexing.
///
/// Unconsumed tokens live at the back of a [`VecDeque`]; `consume()` pops
/// from the front.
pub struct GraphQLTokenStream<
    'src,
    TTokenSource: GraphQLTokenSource<'src>,
> {
    token_source: TTokenSource,
    buffer: VecDeque<GraphQLToken<'src>>,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>>
    GraphQLTokenStream<'src, TTokenSource>
{
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
        }
    }

    /// Advances to the next token and returns it. `None` once the stream is
    /// exhausted.
    pub fn consume(&mut self) -> Option<GraphQLToken<'src>> {
        self.ensure_buffer_has(1);
        self.buffer.pop_front()
    }

    pub fn current_buffer_len(&self) -> usize {
        self.buffer.len()
    }

    fn ensure_buffer_has(&mut self, count: usize) {
        while self.buffer.len() < count {
            match self.token_source.next() {
                Some(token) => self.buffer.push_back(token),
                None => break,
            }
        }
    }

    /// `true` when nothing remains or the next token is `Eof`.
    pub fn is_at_end(&mut self) -> bool {
        match self.peek() {
            None => true,
            Some(token) => matches!(token.kind, GraphQLTokenKind::Eof),
        }
    }

    #[inline]
    pub fn peek(&mut self) -> Option<&GraphQLToken<'src>> {
        self.peek_nth(0)
    }

    /// Peeks at the nth unconsumed token. `peek_nth(0)` is `peek()`.
    pub fn peek_nth(&mut self, n: usize) -> Option<&GraphQLToken<'src>> {
        self.ensure_buffer_has(n + 1);
        self.buffer.get(n)
    }
}
