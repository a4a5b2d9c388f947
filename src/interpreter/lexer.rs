use log::trace;
use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords are accepted in their Arabic spelling and in an ASCII alias. A
/// keyword only wins over an identifier on an exact match, so `variable` or
/// `iffy` are still identifiers.
///
/// Any run of Unicode whitespace separates tokens and is never emitted.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
#[logos(error = LexError)]
pub enum Token {
    /// `متغير` or `var`
    #[token("متغير")]
    #[token("var")]
    Var,
    /// `اذا` or `if`
    #[token("اذا")]
    #[token("if")]
    If,
    /// `طالما` or `while`
    #[token("طالما")]
    #[token("while")]
    While,
    /// Identifier tokens; variable names such as `x` or `total_sum`. The first
    /// character is an ASCII letter or `_`, the rest may be any Unicode word
    /// character.
    #[regex(r"[a-zA-Z_]\w*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42` or `٤٢`.
    #[regex(r"[0-9٠-٩۰-۹]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// End of input. Never matched by the scanner; [`tokenize`] appends it.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Var => write!(f, "'var'"),
            Self::If => write!(f, "'if'"),
            Self::While => write!(f, "'while'"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Integer(n) => write!(f, "integer {n}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::Greater => write!(f, "'>'"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::Less => write!(f, "'<'"),
            Self::LessEqual => write!(f, "'<='"),
            Self::Equals => write!(f, "'='"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::Semicolon => write!(f, "';'"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Why the scanner rejected a slice of input.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No token pattern matches at this position.
    #[default]
    UnrecognizedCharacter,
    /// A run of digits does not fit in a 64-bit signed integer.
    IntegerTooLarge,
}

/// Parses an integer literal from the current token slice.
///
/// ASCII, Arabic-Indic and Extended Arabic-Indic digits may be mixed freely.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().chars().try_fold(0_i64, |acc, c| {
                           acc.checked_mul(10)
                              .and_then(|acc| acc.checked_add(i64::from(decimal_digit(c))))
                              .ok_or(LexError::IntegerTooLarge)
                       })
}

/// Value of a digit accepted by the integer pattern.
const fn decimal_digit(c: char) -> u32 {
    match c {
        '٠'..='٩' => c as u32 - '٠' as u32,
        '۰'..='۹' => c as u32 - '۰' as u32,
        _ => c as u32 - '0' as u32,
    }
}

/// Converts a source string into `(Token, line)` pairs.
///
/// The returned sequence is always terminated by exactly one
/// [`Token::Eof`], which carries the line the input ended on. Tokenizing the
/// same string twice yields the same sequence.
///
/// # Errors
/// - `ParseError::UnexpectedCharacter` for a character no token pattern
///   accepts, with its line and column.
/// - `ParseError::LiteralTooLarge` for an integer literal outside the `i64`
///   range.
///
/// # Example
/// ```
/// use nahw::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("var x = 1;").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Var,
///                 Token::Identifier("x".to_string()),
///                 Token::Equals,
///                 Token::Integer(1),
///                 Token::Semicolon,
///                 Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut lines = LineCounter::default();

    while let Some(token) = lexer.next() {
        let line = lines.line_at(source, lexer.span().start);
        match token {
            Ok(tok) => {
                trace!("line {line}: {tok}");
                tokens.push((tok, line));
            },
            Err(LexError::IntegerTooLarge) => {
                return Err(ParseError::LiteralTooLarge { literal: lexer.slice().to_string(),
                                                         line });
            },
            Err(LexError::UnrecognizedCharacter) => {
                let span = lexer.span();
                let character = source[span.start..].chars().next().unwrap_or_default();
                return Err(ParseError::UnexpectedCharacter { character,
                                                             line,
                                                             column: column_of(source,
                                                                               span.start) });
            },
        }
    }

    tokens.push((Token::Eof, lines.line_at(source, source.len())));
    Ok(tokens)
}

/// Tracks the line number while offsets move forward through the source.
///
/// Skipped whitespace is never seen by [`tokenize`], so line breaks are
/// counted between the previous offset and the next one instead.
struct LineCounter {
    line:    usize,
    scanned: usize,
}

impl Default for LineCounter {
    fn default() -> Self {
        Self { line:    1,
               scanned: 0, }
    }
}

impl LineCounter {
    /// One-based line of the byte offset `offset`, which must not be behind
    /// the previous one.
    fn line_at(&mut self, source: &str, offset: usize) -> usize {
        self.line += source[self.scanned..offset].matches('\n').count();
        self.scanned = offset;
        self.line
    }
}

/// One-based column, counted in characters, of the byte offset `offset`.
fn column_of(source: &str, offset: usize) -> usize {
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    source[line_start..offset].chars().count() + 1
}
