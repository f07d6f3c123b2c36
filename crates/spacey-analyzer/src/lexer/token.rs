//! Tokens and source positions.

use std::fmt;

/// Byte range of a token plus the line it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    /// 1-based
    pub line: u32,
}

impl Span {
    pub fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }
}

/// A token produced by the [`Scanner`](super::Scanner).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The line this token starts on.
    pub fn line(&self) -> u32 {
        self.span.line
    }
}

/// Token kinds understood by the parser.
///
/// Reserved words the parser has no rule for (`class` aside) are scanned as
/// plain identifiers.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    String(String),
    Identifier(String),

    // Keywords
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Default,
    Delete,
    Do,
    Else,
    False,
    Finally,
    For,
    Function,
    If,
    In,
    Instanceof,
    Let,
    New,
    Null,
    Return,
    Switch,
    This,
    Throw,
    True,
    Try,
    Typeof,
    Var,
    Void,
    While,

    // Brackets and separators
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Dot,
    Semicolon,
    Comma,
    Question,
    Colon,

    // Operators
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    EqualEqual,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    StarStar,
    PlusPlus,
    MinusMinus,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    Ampersand,
    Pipe,
    Caret,
    Bang,
    Tilde,
    AmpersandAmpersand,
    PipePipe,
    QuestionQuestion,

    // Assignment
    Equal,
    PlusEqual,
    MinusEqual,
    StarEqual,
    SlashEqual,
    PercentEqual,
    StarStarEqual,
    LeftShiftEqual,
    RightShiftEqual,
    UnsignedRightShiftEqual,
    AmpersandEqual,
    PipeEqual,
    CaretEqual,
    AmpersandAmpersandEqual,
    PipePipeEqual,
    QuestionQuestionEqual,

    Eof,
    /// Unterminated string, malformed number or stray character
    Invalid,
}

/// Longest punctuator, in bytes.
pub(crate) const MAX_PUNCTUATOR_LEN: usize = 4;

impl TokenKind {
    /// Looks up a reserved word.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "break" => TokenKind::Break,
            "case" => TokenKind::Case,
            "catch" => TokenKind::Catch,
            "class" => TokenKind::Class,
            "const" => TokenKind::Const,
            "continue" => TokenKind::Continue,
            "default" => TokenKind::Default,
            "delete" => TokenKind::Delete,
            "do" => TokenKind::Do,
            "else" => TokenKind::Else,
            "false" => TokenKind::False,
            "finally" => TokenKind::Finally,
            "for" => TokenKind::For,
            "function" => TokenKind::Function,
            "if" => TokenKind::If,
            "in" => TokenKind::In,
            "instanceof" => TokenKind::Instanceof,
            "let" => TokenKind::Let,
            "new" => TokenKind::New,
            "null" => TokenKind::Null,
            "return" => TokenKind::Return,
            "switch" => TokenKind::Switch,
            "this" => TokenKind::This,
            "throw" => TokenKind::Throw,
            "true" => TokenKind::True,
            "try" => TokenKind::Try,
            "typeof" => TokenKind::Typeof,
            "var" => TokenKind::Var,
            "void" => TokenKind::Void,
            "while" => TokenKind::While,
            _ => return None,
        };
        Some(kind)
    }

    /// Looks up an operator or bracket by its exact text.
    pub fn punctuator(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "{" => TokenKind::LeftBrace,
            "}" => TokenKind::RightBrace,
            "(" => TokenKind::LeftParen,
            ")" => TokenKind::RightParen,
            "[" => TokenKind::LeftBracket,
            "]" => TokenKind::RightBracket,
            "." => TokenKind::Dot,
            ";" => TokenKind::Semicolon,
            "," => TokenKind::Comma,
            "?" => TokenKind::Question,
            ":" => TokenKind::Colon,
            "<" => TokenKind::LessThan,
            ">" => TokenKind::GreaterThan,
            "<=" => TokenKind::LessThanEqual,
            ">=" => TokenKind::GreaterThanEqual,
            "==" => TokenKind::EqualEqual,
            "!=" => TokenKind::NotEqual,
            "===" => TokenKind::StrictEqual,
            "!==" => TokenKind::StrictNotEqual,
            "+" => TokenKind::Plus,
            "-" => TokenKind::Minus,
            "*" => TokenKind::Star,
            "/" => TokenKind::Slash,
            "%" => TokenKind::Percent,
            "**" => TokenKind::StarStar,
            "++" => TokenKind::PlusPlus,
            "--" => TokenKind::MinusMinus,
            "<<" => TokenKind::LeftShift,
            ">>" => TokenKind::RightShift,
            ">>>" => TokenKind::UnsignedRightShift,
            "&" => TokenKind::Ampersand,
            "|" => TokenKind::Pipe,
            "^" => TokenKind::Caret,
            "!" => TokenKind::Bang,
            "~" => TokenKind::Tilde,
            "&&" => TokenKind::AmpersandAmpersand,
            "||" => TokenKind::PipePipe,
            "??" => TokenKind::QuestionQuestion,
            "=" => TokenKind::Equal,
            "+=" => TokenKind::PlusEqual,
            "-=" => TokenKind::MinusEqual,
            "*=" => TokenKind::StarEqual,
            "/=" => TokenKind::SlashEqual,
            "%=" => TokenKind::PercentEqual,
            "**=" => TokenKind::StarStarEqual,
            "<<=" => TokenKind::LeftShiftEqual,
            ">>=" => TokenKind::RightShiftEqual,
            ">>>=" => TokenKind::UnsignedRightShiftEqual,
            "&=" => TokenKind::AmpersandEqual,
            "|=" => TokenKind::PipeEqual,
            "^=" => TokenKind::CaretEqual,
            "&&=" => TokenKind::AmpersandAmpersandEqual,
            "||=" => TokenKind::PipePipeEqual,
            "??=" => TokenKind::QuestionQuestionEqual,
            _ => return None,
        };
        Some(kind)
    }

    /// Source text of a fixed token; `None` for literals, identifiers and markers.
    pub fn text(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Number(_)
            | TokenKind::String(_)
            | TokenKind::Identifier(_)
            | TokenKind::Eof
            | TokenKind::Invalid => return None,
            TokenKind::Break => "break",
            TokenKind::Case => "case",
            TokenKind::Catch => "catch",
            TokenKind::Class => "class",
            TokenKind::Const => "const",
            TokenKind::Continue => "continue",
            TokenKind::Default => "default",
            TokenKind::Delete => "delete",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::Finally => "finally",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::If => "if",
            TokenKind::In => "in",
            TokenKind::Instanceof => "instanceof",
            TokenKind::Let => "let",
            TokenKind::New => "new",
            TokenKind::Null => "null",
            TokenKind::Return => "return",
            TokenKind::Switch => "switch",
            TokenKind::This => "this",
            TokenKind::Throw => "throw",
            TokenKind::True => "true",
            TokenKind::Try => "try",
            TokenKind::Typeof => "typeof",
            TokenKind::Var => "var",
            TokenKind::Void => "void",
            TokenKind::While => "while",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::LessThanEqual => "<=",
            TokenKind::GreaterThanEqual => ">=",
            TokenKind::EqualEqual => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::StrictEqual => "===",
            TokenKind::StrictNotEqual => "!==",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::StarStar => "**",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::LeftShift => "<<",
            TokenKind::RightShift => ">>",
            TokenKind::UnsignedRightShift => ">>>",
            TokenKind::Ampersand => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Bang => "!",
            TokenKind::Tilde => "~",
            TokenKind::AmpersandAmpersand => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::QuestionQuestion => "??",
            TokenKind::Equal => "=",
            TokenKind::PlusEqual => "+=",
            TokenKind::MinusEqual => "-=",
            TokenKind::StarEqual => "*=",
            TokenKind::SlashEqual => "/=",
            TokenKind::PercentEqual => "%=",
            TokenKind::StarStarEqual => "**=",
            TokenKind::LeftShiftEqual => "<<=",
            TokenKind::RightShiftEqual => ">>=",
            TokenKind::UnsignedRightShiftEqual => ">>>=",
            TokenKind::AmpersandEqual => "&=",
            TokenKind::PipeEqual => "|=",
            TokenKind::CaretEqual => "^=",
            TokenKind::AmpersandAmpersandEqual => "&&=",
            TokenKind::PipePipeEqual => "||=",
            TokenKind::QuestionQuestionEqual => "??=",
        };
        Some(text)
    }
}

/// How a token is named in syntax error messages.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::String(s) => write!(f, "string {:?}", s),
            TokenKind::Identifier(name) => write!(f, "identifier '{}'", name),
            TokenKind::Eof => f.write_str("end of input"),
            TokenKind::Invalid => f.write_str("invalid or unexpected token"),
            other => write!(f, "token '{}'", other.text().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_line() {
        let token = Token::new(TokenKind::Number(42.0), Span::new(7, 9, 3));
        assert_eq!(token.line(), 3);
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
        assert_eq!(TokenKind::keyword("instanceof"), Some(TokenKind::Instanceof));
        assert_eq!(TokenKind::keyword("yield"), None);
        assert_eq!(TokenKind::keyword("While"), None);
    }

    #[test]
    fn test_punctuator_text_agrees_with_lookup() {
        for text in ["{", ">>>=", "??", "!==", "**=", "~", "&&="] {
            let kind = TokenKind::punctuator(text).unwrap();
            assert_eq!(kind.text(), Some(text));
            assert!(text.len() <= MAX_PUNCTUATOR_LEN);
        }
        assert_eq!(TokenKind::punctuator("=>"), None);
    }

    #[test]
    fn test_keyword_text_agrees_with_lookup() {
        for word in ["break", "function", "typeof", "null"] {
            assert_eq!(TokenKind::keyword(word).unwrap().text(), Some(word));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::RightParen.to_string(), "token ')'");
        assert_eq!(TokenKind::Else.to_string(), "token 'else'");
        assert_eq!(TokenKind::Identifier("x".into()).to_string(), "identifier 'x'");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
    }
}
