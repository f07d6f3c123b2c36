//! The scanner that produces tokens from source text.

use super::token::MAX_PUNCTUATOR_LEN;
use super::{Span, Token, TokenKind};

/// A cursor over JavaScript source that yields one token at a time.
///
/// The scanner is a byte offset plus the current line, so cloning it is the
/// cheap way to look ahead.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
        }
    }

    /// Returns the next token, or `Eof` (repeatedly) once the source is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let (start, line) = (self.pos, self.line);
        let Some(ch) = self.peek() else {
            return Token::new(TokenKind::Eof, Span::new(start, start, line));
        };

        let kind = match ch {
            '"' | '\'' => self.scan_string(ch),
            '0'..='9' => self.scan_number(ch),
            c if is_id_start(c) => self.scan_word(),
            _ => self.scan_punctuator(),
        };

        Token::new(kind, Span::new(start, self.pos, line))
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Consumes `len` bytes, counting the line terminators inside them.
    /// `\r\n` is one terminator, counted at its `\n`.
    fn bump(&mut self, len: usize) {
        let source = self.source;
        let consumed = &source[self.pos..self.pos + len];
        for (offset, ch) in consumed.char_indices() {
            let breaks = match ch {
                '\r' => !source[self.pos + offset + 1..].starts_with('\n'),
                c => is_line_terminator(c),
            };
            if breaks {
                self.line += 1;
            }
        }
        self.pos += len;
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.bump(len);
        &rest[..len]
    }

    fn skip_trivia(&mut self) {
        loop {
            let rest = self.rest();
            if rest.starts_with("//") {
                self.bump(rest.find(is_line_terminator).unwrap_or(rest.len()));
            } else if let Some(body) = rest.strip_prefix("/*") {
                // An unterminated comment runs to the end of input.
                self.bump(body.find("*/").map_or(rest.len(), |end| end + 4));
            } else if self.peek().is_some_and(char::is_whitespace) {
                self.eat_while(char::is_whitespace);
            } else {
                break;
            }
        }
    }

    /// Longest match against the punctuator table.
    fn scan_punctuator(&mut self) -> TokenKind {
        let rest = self.rest();
        for len in (1..=MAX_PUNCTUATOR_LEN.min(rest.len())).rev() {
            if let Some(kind) = rest.get(..len).and_then(TokenKind::punctuator) {
                self.bump(len);
                return kind;
            }
        }

        let width = rest.chars().next().map_or(1, char::len_utf8);
        self.bump(width);
        TokenKind::Invalid
    }

    fn scan_string(&mut self, quote: char) -> TokenKind {
        self.bump(quote.len_utf8());
        let mut value = String::new();

        loop {
            let Some(ch) = self.peek() else {
                return TokenKind::Invalid;
            };
            self.bump(ch.len_utf8());

            match ch {
                '\n' | '\r' => return TokenKind::Invalid,
                '\\' => {
                    let Some(escaped) = self.peek() else {
                        return TokenKind::Invalid;
                    };
                    self.bump(escaped.len_utf8());
                    if escaped == '\r' && self.peek() == Some('\n') {
                        self.bump(1);
                    }
                    if let Some(c) = unescape(escaped) {
                        value.push(c);
                    }
                }
                c if c == quote => return TokenKind::String(value),
                c => value.push(c),
            }
        }
    }

    fn scan_number(&mut self, first: char) -> TokenKind {
        if first == '0' {
            let radix = match self.peek_second() {
                Some('x' | 'X') => Some(16),
                Some('o' | 'O') => Some(8),
                Some('b' | 'B') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                self.bump(2);
                let digits = self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
                return u64::from_str_radix(&digits.replace('_', ""), radix)
                    .map_or(TokenKind::Invalid, |n| TokenKind::Number(n as f64));
            }
        }

        let mut text = self.eat_digits();

        // `1.` is a complete number, but `1.toString` is member access.
        let member_access = self
            .peek_second()
            .is_some_and(|c| is_id_start(c) && !matches!(c, 'e' | 'E'));
        if self.peek() == Some('.') && !member_access {
            self.bump(1);
            text.push('.');
            text.push_str(&self.eat_digits());
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.bump(1);
            text.push('e');
            if let Some(sign @ ('+' | '-')) = self.peek() {
                self.bump(1);
                text.push(sign);
            }
            text.push_str(&self.eat_digits());
        }

        text.parse::<f64>().map_or(TokenKind::Invalid, TokenKind::Number)
    }

    /// Decimal digits with `_` separators removed.
    fn eat_digits(&mut self) -> String {
        self.eat_while(|c| c.is_ascii_digit() || c == '_')
            .replace('_', "")
    }

    fn scan_word(&mut self) -> TokenKind {
        let word = self.eat_while(is_id_continue);
        TokenKind::keyword(word).unwrap_or_else(|| TokenKind::Identifier(word.to_string()))
    }
}

/// The character an escape sequence stands for; `None` for a line continuation.
fn unescape(escaped: char) -> Option<char> {
    match escaped {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'v' => Some('\u{b}'),
        '0' => Some('\0'),
        '\n' | '\r' | '\u{2028}' | '\u{2029}' => None,
        other => Some(other),
    }
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn is_id_start(ch: char) -> bool {
    ch == '_' || ch == '$' || unicode_xid::UnicodeXID::is_xid_start(ch)
}

fn is_id_continue(ch: char) -> bool {
    ch == '_' || ch == '$' || unicode_xid::UnicodeXID::is_xid_continue(ch)
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Scanner::new(src).map(|t| t.kind).collect()
    }

    #[test]
    fn test_brackets() {
        assert_eq!(
            kinds("{ } ( ) [ ]"),
            vec![
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds("42 3.25 0xff 0b1010 0o17 1_000 2e3 5E-1"),
            vec![
                TokenKind::Number(42.0),
                TokenKind::Number(3.25),
                TokenKind::Number(255.0),
                TokenKind::Number(10.0),
                TokenKind::Number(15.0),
                TokenKind::Number(1000.0),
                TokenKind::Number(2000.0),
                TokenKind::Number(0.5),
            ]
        );
    }

    #[test]
    fn test_malformed_numbers_are_invalid() {
        assert_eq!(kinds("0b102"), vec![TokenKind::Invalid]);
        assert_eq!(kinds("0x"), vec![TokenKind::Invalid]);
        assert_eq!(kinds("1e"), vec![TokenKind::Invalid]);
    }

    #[test]
    fn test_trailing_dot_numbers() {
        assert_eq!(
            kinds("1. 2.e1 3.;"),
            vec![
                TokenKind::Number(1.0),
                TokenKind::Number(20.0),
                TokenKind::Number(3.0),
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_number_followed_by_member_access() {
        assert_eq!(
            kinds("1.toString"),
            vec![
                TokenKind::Number(1.0),
                TokenKind::Dot,
                TokenKind::Identifier("toString".into())
            ]
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            kinds(r#""hello" 'wo\'rld' "a\tb""#),
            vec![
                TokenKind::String("hello".into()),
                TokenKind::String("wo'rld".into()),
                TokenKind::String("a\tb".into()),
            ]
        );
    }

    #[test]
    fn test_unterminated_string_is_invalid() {
        assert_eq!(kinds("'abc"), vec![TokenKind::Invalid]);
        assert_eq!(
            kinds("'abc\nx"),
            vec![TokenKind::Invalid, TokenKind::Identifier("x".into())]
        );
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("function let foo _bar $baz yield"),
            vec![
                TokenKind::Function,
                TokenKind::Let,
                TokenKind::Identifier("foo".into()),
                TokenKind::Identifier("_bar".into()),
                TokenKind::Identifier("$baz".into()),
                TokenKind::Identifier("yield".into()),
            ]
        );
    }

    #[test]
    fn test_longest_punctuator_wins() {
        assert_eq!(
            kinds("a >>>= b >> c"),
            vec![
                TokenKind::Identifier("a".into()),
                TokenKind::UnsignedRightShiftEqual,
                TokenKind::Identifier("b".into()),
                TokenKind::RightShift,
                TokenKind::Identifier("c".into()),
            ]
        );
        assert_eq!(
            kinds("x=>y"),
            vec![
                TokenKind::Identifier("x".into()),
                TokenKind::Equal,
                TokenKind::GreaterThan,
                TokenKind::Identifier("y".into()),
            ]
        );
    }

    #[test]
    fn test_compound_assignment_operators() {
        assert_eq!(
            kinds("+= -= *= /= %= **= <<= >>= &= |= ^= &&= ||= ??="),
            vec![
                TokenKind::PlusEqual,
                TokenKind::MinusEqual,
                TokenKind::StarEqual,
                TokenKind::SlashEqual,
                TokenKind::PercentEqual,
                TokenKind::StarStarEqual,
                TokenKind::LeftShiftEqual,
                TokenKind::RightShiftEqual,
                TokenKind::AmpersandEqual,
                TokenKind::PipeEqual,
                TokenKind::CaretEqual,
                TokenKind::AmpersandAmpersandEqual,
                TokenKind::PipePipeEqual,
                TokenKind::QuestionQuestionEqual,
            ]
        );
    }

    #[test]
    fn test_update_operators() {
        assert_eq!(
            kinds("x++ --y"),
            vec![
                TokenKind::Identifier("x".into()),
                TokenKind::PlusPlus,
                TokenKind::MinusMinus,
                TokenKind::Identifier("y".into()),
            ]
        );
    }

    #[test]
    fn test_stray_character_is_invalid() {
        assert_eq!(
            kinds("a # b"),
            vec![
                TokenKind::Identifier("a".into()),
                TokenKind::Invalid,
                TokenKind::Identifier("b".into()),
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("1 // line\n2 /* multi\nline */ 3 /* open"),
            vec![
                TokenKind::Number(1.0),
                TokenKind::Number(2.0),
                TokenKind::Number(3.0)
            ]
        );
    }

    #[test]
    fn test_division_vs_comment() {
        assert_eq!(
            kinds("6 / 2"),
            vec![TokenKind::Number(6.0), TokenKind::Slash, TokenKind::Number(2.0)]
        );
    }

    #[test]
    fn test_line_tracking() {
        let lines: Vec<u32> = Scanner::new("a\nb\r\n\n  c /* x\ny */ d")
            .map(|t| t.line())
            .collect();
        assert_eq!(lines, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_carriage_return_and_unicode_line_breaks() {
        let lines: Vec<u32> = Scanner::new("a\rb\r\nc\u{2028}d\u{2029}e\n\rf")
            .map(|t| t.line())
            .collect();
        assert_eq!(lines, vec![1, 2, 3, 4, 5, 7]);
    }

    #[test]
    fn test_line_comment_ends_at_carriage_return() {
        let tokens: Vec<Token> = Scanner::new("// note\rx").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier("x".into()));
        assert_eq!(tokens[0].line(), 2);
    }

    #[test]
    fn test_string_line_continuation() {
        assert_eq!(kinds("'a\\\r\nb' c"), vec![
            TokenKind::String("ab".into()),
            TokenKind::Identifier("c".into()),
        ]);
        assert_eq!(
            Scanner::new("'a\\\r\nb' c").last().map(|t| t.line()),
            Some(2)
        );
    }

    #[test]
    fn test_eof_line_is_last_line() {
        let mut scanner = Scanner::new("x\n\n");
        scanner.next_token();
        assert_eq!(scanner.next_token().line(), 3);
        assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_spans_are_byte_ranges() {
        let tokens: Vec<Token> = Scanner::new("ab += 'é'").collect();
        assert_eq!(tokens[0].span, Span::new(0, 2, 1));
        assert_eq!(tokens[1].span, Span::new(3, 5, 1));
        assert_eq!(tokens[2].span, Span::new(6, 10, 1));
    }
}
