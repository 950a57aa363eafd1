use crate::error::{ParseError, Position, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Identifier,
    String,
    Char,
    Number,
    Dot,
    Comma,
    DoubleColon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Less,
    Greater,
    Question,
    Equals,
    Minus,
    Plus,
    Bang,
    Tilde,
    Eof,
}

/// A token. Literal lexemes keep their exact source text, quotes included.
#[derive(Debug, Clone)]
pub struct Token {
    pub typ: TokenType,
    pub lexeme: String,
    pub pos: Position,
}

impl Token {
    /// How the token reads in an error message.
    pub fn describe(&self) -> String {
        match self.typ {
            TokenType::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }

    /// True for an identifier written with the `@` escape, e.g. `@class`.
    pub fn is_verbatim_identifier(&self) -> bool {
        self.typ == TokenType::Identifier && self.lexeme.starts_with('@')
    }
}

pub struct Lexer {
    input: Vec<char>,
    current: usize,
    offset: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            current: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token {
                    typ: TokenType::Eof,
                    lexeme: String::new(),
                    pos: self.current_position(),
                });
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token> {
        let pos = self.current_position();
        let Some(ch) = self.current_char() else {
            return Err(ParseError::EmptyInput);
        };

        let single = match ch {
            '.' if !self.peek().is_some_and(|c| c.is_ascii_digit()) => Some(TokenType::Dot),
            ',' => Some(TokenType::Comma),
            '(' => Some(TokenType::LParen),
            ')' => Some(TokenType::RParen),
            '[' => Some(TokenType::LBracket),
            ']' => Some(TokenType::RBracket),
            '<' => Some(TokenType::Less),
            '>' => Some(TokenType::Greater),
            '?' => Some(TokenType::Question),
            '=' => Some(TokenType::Equals),
            '-' => Some(TokenType::Minus),
            '+' => Some(TokenType::Plus),
            '!' => Some(TokenType::Bang),
            '~' => Some(TokenType::Tilde),
            _ => None,
        };
        if let Some(typ) = single {
            self.advance();
            return Ok(Token {
                typ,
                lexeme: ch.to_string(),
                pos,
            });
        }

        match ch {
            ':' if self.peek() == Some(':') => {
                self.advance();
                self.advance();
                Ok(Token {
                    typ: TokenType::DoubleColon,
                    lexeme: "::".to_string(),
                    pos,
                })
            }
            '"' => self.read_string(),
            '\'' => self.read_char(),
            '@' if self.peek() == Some('"') => self.read_verbatim_string(),
            '@' if self.peek().is_some_and(is_identifier_start) => self.read_identifier(),
            _ if ch.is_ascii_digit() || ch == '.' => self.read_number(),
            _ if is_identifier_start(ch) => self.read_identifier(),
            _ => Err(ParseError::UnexpectedChar { ch, pos }),
        }
    }

    fn read_identifier(&mut self) -> Result<Token> {
        let pos = self.current_position();
        let start = self.current;

        if self.current_char() == Some('@') {
            self.advance();
        }
        while self.current_char().is_some_and(is_identifier_char) {
            self.advance();
        }

        Ok(Token {
            typ: TokenType::Identifier,
            lexeme: self.lexeme_from(start),
            pos,
        })
    }

    fn read_string(&mut self) -> Result<Token> {
        let pos = self.current_position();
        let start = self.current;
        self.advance(); // Skip opening '"'

        loop {
            match self.current_char() {
                None | Some('\n') => return Err(ParseError::UnterminatedString { pos }),
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => self.read_escape()?,
                Some(_) => self.advance(),
            }
        }

        Ok(Token {
            typ: TokenType::String,
            lexeme: self.lexeme_from(start),
            pos,
        })
    }

    /// `@"..."`: no escapes, `""` stands for one quote.
    fn read_verbatim_string(&mut self) -> Result<Token> {
        let pos = self.current_position();
        let start = self.current;
        self.advance(); // Skip '@'
        self.advance(); // Skip opening '"'

        loop {
            match self.current_char() {
                None => return Err(ParseError::UnterminatedString { pos }),
                Some('"') if self.peek() == Some('"') => {
                    self.advance();
                    self.advance();
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some(_) => self.advance(),
            }
        }

        Ok(Token {
            typ: TokenType::String,
            lexeme: self.lexeme_from(start),
            pos,
        })
    }

    fn read_char(&mut self) -> Result<Token> {
        let pos = self.current_position();
        let start = self.current;
        self.advance(); // Skip opening '\''

        match self.current_char() {
            None | Some('\n') | Some('\'') => return Err(ParseError::UnterminatedChar { pos }),
            Some('\\') => self.read_escape()?,
            Some(_) => self.advance(),
        }
        if self.current_char() != Some('\'') {
            return Err(ParseError::UnterminatedChar { pos });
        }
        self.advance();

        Ok(Token {
            typ: TokenType::Char,
            lexeme: self.lexeme_from(start),
            pos,
        })
    }

    /// Validate one escape sequence; the cursor sits on the backslash.
    fn read_escape(&mut self) -> Result<()> {
        self.advance(); // Skip '\\'
        let pos = self.current_position();
        let Some(ch) = self.current_char() else {
            return Err(ParseError::UnterminatedString { pos });
        };
        self.advance();

        let (min, max) = match ch {
            '\'' | '"' | '\\' | '0' | 'a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' => return Ok(()),
            'u' => (4, 4),
            'U' => (8, 8),
            'x' => (1, 4),
            other => return Err(ParseError::InvalidEscape { ch: other, pos }),
        };

        let mut digits = 0;
        while digits < max && self.current_char().is_some_and(|c| c.is_ascii_hexdigit()) {
            self.advance();
            digits += 1;
        }
        if digits < min {
            return Err(ParseError::InvalidEscape { ch, pos });
        }
        Ok(())
    }

    fn read_number(&mut self) -> Result<Token> {
        let pos = self.current_position();
        let start = self.current;

        let radix = match (self.current_char(), self.peek()) {
            (Some('0'), Some('x') | Some('X')) => Some(16),
            (Some('0'), Some('b') | Some('B')) => Some(2),
            _ => None,
        };
        let mut is_real = false;
        if let Some(radix) = radix {
            self.advance();
            self.advance();
            if self.read_digits(radix) == 0 {
                return Err(self.expected_digits("hexadecimal or binary digits"));
            }
        } else {
            self.read_digits(10);
            if self.current_char() == Some('.') && self.peek().is_some_and(|c| c.is_ascii_digit())
            {
                self.advance();
                self.read_digits(10);
                is_real = true;
            }
            if matches!(self.current_char(), Some('e') | Some('E')) {
                self.advance();
                if matches!(self.current_char(), Some('+') | Some('-')) {
                    self.advance();
                }
                if self.read_digits(10) == 0 {
                    return Err(self.expected_digits("exponent digits"));
                }
                is_real = true;
            }
        }

        self.read_suffix(radix.is_none(), is_real);

        if let Some(ch) = self.current_char().filter(|c| is_identifier_char(*c)) {
            return Err(ParseError::UnexpectedChar {
                ch,
                pos: self.current_position(),
            });
        }

        Ok(Token {
            typ: TokenType::Number,
            lexeme: self.lexeme_from(start),
            pos,
        })
    }

    /// Consume at most one type suffix. Integers take `u`, `l`, `ul` or `lu`;
    /// decimal integers and reals take `f`, `d` or `m`. Anything left over
    /// trips the trailing identifier check.
    fn read_suffix(&mut self, decimal: bool, is_real: bool) {
        let Some(ch) = self.current_char() else {
            return;
        };
        match ch.to_ascii_lowercase() {
            'f' | 'd' | 'm' if decimal => self.advance(),
            'u' | 'l' if !is_real => {
                self.advance();
                let pair = if ch.eq_ignore_ascii_case(&'u') { 'l' } else { 'u' };
                if self
                    .current_char()
                    .is_some_and(|c| c.eq_ignore_ascii_case(&pair))
                {
                    self.advance();
                }
            }
            _ => {}
        }
    }

    /// Digits of `radix` with `_` separators; returns the digit count.
    fn read_digits(&mut self, radix: u32) -> usize {
        let mut digits = 0;
        while let Some(ch) = self.current_char() {
            if ch.is_digit(radix) {
                digits += 1;
            } else if ch != '_' {
                break;
            }
            self.advance();
        }
        digits
    }

    fn expected_digits(&self, expected: &str) -> ParseError {
        ParseError::Expected {
            expected: expected.to_string(),
            found: self
                .current_char()
                .map_or_else(|| "end of input".to_string(), |c| format!("'{}'", c)),
            pos: self.current_position(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn lexeme_from(&self, start: usize) -> String {
        self.input[start..self.current].iter().collect()
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.current).copied()
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.current + 1).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.current += 1;
            self.offset += ch.len_utf8();

            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.input.len()
    }

    fn current_position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(input: &str) -> Vec<TokenType> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.typ)
            .collect()
    }

    #[test]
    fn test_tokenize_qualified_generic() {
        assert_eq!(
            types("global::System.List<int>"),
            vec![
                TokenType::Identifier,
                TokenType::DoubleColon,
                TokenType::Identifier,
                TokenType::Dot,
                TokenType::Identifier,
                TokenType::Less,
                TokenType::Identifier,
                TokenType::Greater,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_string_lexeme_keeps_source_text() {
        let tokens = Lexer::new(r#""a\"b""#).tokenize().unwrap();
        assert_eq!(tokens[0].typ, TokenType::String);
        assert_eq!(tokens[0].lexeme, r#""a\"b""#);
    }

    #[test]
    fn test_verbatim_string() {
        let tokens = Lexer::new(r#"@"C:\dir ""x""""#).tokenize().unwrap();
        assert_eq!(tokens[0].typ, TokenType::String);
        assert_eq!(tokens[1].typ, TokenType::Eof);
    }

    #[test]
    fn test_numbers() {
        for input in ["0", "42", "1_000", "0xFF", "3.14", "1e10", "2.5f", "10UL", "1.0m", ".5"] {
            let tokens = Lexer::new(input).tokenize().unwrap();
            assert_eq!(tokens[0].typ, TokenType::Number, "{}", input);
            assert_eq!(tokens[0].lexeme, input);
        }
    }

    #[test]
    fn test_malformed_numbers() {
        for input in [
            "1e", "1e+", "0x", "0b", "0b12", "1.5u", "1.5L", "0x1m", "5uuu", "1ffm", "1ul2", "3lu_",
        ] {
            let err = Lexer::new(input).tokenize().unwrap_err();
            assert!(
                matches!(
                    err,
                    ParseError::UnexpectedChar { .. } | ParseError::Expected { .. }
                ),
                "{}: {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_number_suffix_pairs() {
        for input in [
            "1u", "1L", "1ul", "1LU", "1Ul", "0b1010_0101", "0x1Fu", "7d", "7m", "2E-3f",
        ] {
            let tokens = Lexer::new(input).tokenize().unwrap();
            assert_eq!(tokens[0].typ, TokenType::Number, "{}", input);
            assert_eq!(tokens[0].lexeme, input);
        }
    }

    #[test]
    fn test_missing_exponent_digits() {
        let err = Lexer::new("1e").tokenize().unwrap_err();
        assert_eq!(
            err,
            ParseError::Expected {
                expected: "exponent digits".to_string(),
                found: "end of input".to_string(),
                pos: Position::new(2, 1, 3),
            }
        );
    }

    #[test]
    fn test_verbatim_identifier() {
        let tokens = Lexer::new("@class").tokenize().unwrap();
        assert!(tokens[0].is_verbatim_identifier());
        assert_eq!(tokens[0].lexeme, "@class");
    }

    #[test]
    fn test_unterminated_string() {
        let err = Lexer::new("\"abc").tokenize().unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedString { .. }));
    }

    #[test]
    fn test_invalid_escape() {
        let err = Lexer::new(r#""\q""#).tokenize().unwrap_err();
        assert!(matches!(err, ParseError::InvalidEscape { ch: 'q', .. }));
    }

    #[test]
    fn test_unexpected_char_position() {
        let err = Lexer::new("a\n  #").tokenize().unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedChar {
                ch: '#',
                pos: Position::new(4, 2, 3)
            }
        );
    }
}
