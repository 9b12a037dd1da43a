pub mod token;

use nom::{
    branch::alt,
    bytes::complete::{tag, take, take_while, take_while1},
    combinator::map,
    error::{Error, ParseError},
    IResult,
};
use nom_locate::LocatedSpan;
use token::{Token, TokenKind};

pub type Span<'a> = LocatedSpan<&'a str>;

/// Byte scanner over a single source buffer, one token per `next_token`
/// call. The stream never ends: exhausted input repeats `Eof`, and bytes
/// that start no token come back as `Illegal` rather than an error.
pub struct Lexer<'a> {
    remaining: Span<'a>,
    eof_emitted: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            remaining: Span::new(input),
            eof_emitted: false,
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.remaining.fragment().is_empty() {
            return Token::eof(self.remaining.location_line());
        }

        let result: IResult<Span<'a>, Token> = alt((
            Self::symbol_lexer(),
            Self::number_lexer(),
            Self::word_lexer(),
            Self::illegal_lexer(),
        ))(self.remaining);

        match result {
            Ok((rest, token)) => {
                self.remaining = rest;
                token
            }
            // `illegal_lexer` accepts any non-empty input.
            Err(e) => panic!("unreachable: {:?}", e),
        }
    }

    fn skip_whitespace(&mut self) {
        if let Ok((rest, _)) = Self::whitespace::<Error<Span<'a>>>(self.remaining) {
            self.remaining = rest;
        }
    }

    fn symbol_lexer<E>() -> impl FnMut(Span<'a>) -> IResult<Span<'a>, Token, E>
    where
        E: ParseError<Span<'a>>,
    {
        alt((
            Self::static_token_lexer_generator("==", TokenKind::Eq),
            Self::static_token_lexer_generator("=", TokenKind::Assign),
            Self::static_token_lexer_generator("+", TokenKind::Plus),
            Self::static_token_lexer_generator("-", TokenKind::Minus),
            Self::static_token_lexer_generator("!=", TokenKind::NotEq),
            Self::static_token_lexer_generator("!", TokenKind::Bang),
            Self::static_token_lexer_generator("*", TokenKind::Asterisk),
            Self::static_token_lexer_generator("/", TokenKind::Slash),
            Self::static_token_lexer_generator("<", TokenKind::Lt),
            Self::static_token_lexer_generator(">", TokenKind::Gt),
            Self::static_token_lexer_generator("(", TokenKind::LParen),
            Self::static_token_lexer_generator(")", TokenKind::RParen),
            Self::static_token_lexer_generator("{", TokenKind::LBrace),
            Self::static_token_lexer_generator("}", TokenKind::RBrace),
            Self::static_token_lexer_generator(",", TokenKind::Comma),
            Self::static_token_lexer_generator(";", TokenKind::Semicolon),
        ))
    }

    fn static_token_lexer_generator<E>(
        symbol: &'a str,
        kind: TokenKind,
    ) -> impl FnMut(Span<'a>) -> IResult<Span<'a>, Token, E>
    where
        E: ParseError<Span<'a>>,
    {
        map(tag(symbol), move |span: Span<'a>| {
            Token::new(kind, *span.fragment(), span.location_line())
        })
    }

    /// Maximal `[A-Za-z_]` run resolved through the keyword table. Digits
    /// never join a word: `x2` is an identifier followed by an integer.
    fn word_lexer<E>() -> impl FnMut(Span<'a>) -> IResult<Span<'a>, Token, E>
    where
        E: ParseError<Span<'a>>,
    {
        map(
            take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
            |word: Span<'a>| {
                let kind = TokenKind::lookup_ident(word.fragment());
                Token::new(kind, *word.fragment(), word.location_line())
            },
        )
    }

    /// Maximal digit run. The literal stays text; the parser converts it
    /// to `i64` so an oversized literal is a recorded error, not a panic.
    fn number_lexer<E>() -> impl FnMut(Span<'a>) -> IResult<Span<'a>, Token, E>
    where
        E: ParseError<Span<'a>>,
    {
        map(
            take_while1(|c: char| c.is_ascii_digit()),
            |number: Span<'a>| Token::new(TokenKind::Int, *number.fragment(), number.location_line()),
        )
    }

    fn illegal_lexer<E>() -> impl FnMut(Span<'a>) -> IResult<Span<'a>, Token, E>
    where
        E: ParseError<Span<'a>>,
    {
        map(take(1usize), |byte: Span<'a>| {
            Token::new(TokenKind::Illegal, *byte.fragment(), byte.location_line())
        })
    }

    fn whitespace<E>(i: Span<'a>) -> IResult<Span<'a>, Span<'a>, E>
    where
        E: ParseError<Span<'a>>,
    {
        let whitespace_chars = " \t\r\n";

        take_while(move |c| whitespace_chars.contains(c))(i)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields every token up to and including the first `Eof`, then ends.
    fn next(&mut self) -> Option<Token> {
        if self.eof_emitted {
            return None;
        }

        let token = self.next_token();
        self.eof_emitted = token.kind == TokenKind::Eof;
        Some(token)
    }
}
