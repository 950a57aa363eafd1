use super::lexer::{Lexer, Token, TokenType};
use crate::{
    ExpressionSyntax, LiteralExpressionSyntax, NameSyntax, PredefinedType, TypeSyntax,
    error::{ParseError, Result},
    expr::{LiteralKind, PrefixOperator},
    kind::is_reserved_keyword,
};

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Tokenize `input` and refuse empty input.
    pub fn for_input(input: &str) -> Result<Self> {
        let tokens = Lexer::new(input).tokenize()?;
        let parser = Parser::new(tokens);
        if parser.check(TokenType::Eof) {
            return Err(ParseError::EmptyInput);
        }
        Ok(parser)
    }

    /// Fail unless every token was consumed.
    pub fn finish(&self, parsed: &'static str) -> Result<()> {
        let token = self.current_token()?;
        if token.typ == TokenType::Eof {
            Ok(())
        } else {
            Err(ParseError::TrailingInput {
                found: token.describe(),
                parsed,
                pos: token.pos,
            })
        }
    }

    /// `[alias::] Simple ('.' Simple)*`
    pub fn parse_name(&mut self) -> Result<NameSyntax> {
        let first = self.parse_simple_name()?;

        let mut name = if self.check(TokenType::DoubleColon) {
            let alias = match first {
                NameSyntax::Identifier(alias) => alias,
                other => {
                    let token = self.current_token()?;
                    return Err(ParseError::Expected {
                        expected: "an identifier before '::'".to_string(),
                        found: format!("'{}'", other),
                        pos: token.pos,
                    });
                }
            };
            self.advance(); // Skip '::'
            NameSyntax::AliasQualified {
                alias,
                name: Box::new(self.parse_simple_name()?),
            }
        } else {
            first
        };

        while self.check(TokenType::Dot) {
            self.advance(); // Skip '.'
            name = NameSyntax::qualified(name, self.parse_simple_name()?);
        }

        Ok(name)
    }

    /// `Name<TypeArgs>?` followed by any number of `[]`, `[,]` and `?` suffixes.
    pub fn parse_type(&mut self) -> Result<TypeSyntax> {
        let token = self.current_token()?.clone();
        let mut ty = match PredefinedType::from_keyword(&token.lexeme) {
            Some(predefined) if token.typ == TokenType::Identifier => {
                self.advance();
                TypeSyntax::Predefined(predefined)
            }
            _ => TypeSyntax::Name(self.parse_name()?),
        };

        loop {
            if self.check(TokenType::Question) {
                self.advance();
                ty = TypeSyntax::nullable(ty);
            } else if self.check(TokenType::LBracket) {
                self.advance();
                let mut rank = 1;
                while self.check(TokenType::Comma) {
                    self.advance();
                    rank += 1;
                }
                self.expect(TokenType::RBracket, "']'")?;
                ty = TypeSyntax::Array {
                    element: Box::new(ty),
                    rank,
                };
            } else {
                break;
            }
        }

        Ok(ty)
    }

    /// `Unary ['=' Expression]`; the left side of `=` must be a name.
    pub fn parse_expression(&mut self) -> Result<ExpressionSyntax> {
        let start = self.current_token()?.pos;
        let left = self.parse_unary()?;

        if !self.check(TokenType::Equals) {
            return Ok(left);
        }
        if !matches!(left, ExpressionSyntax::Name(NameSyntax::Identifier(_))) {
            return Err(ParseError::InvalidAssignmentTarget {
                found: left.to_string(),
                pos: start,
            });
        }
        self.advance(); // Skip '='
        let right = self.parse_expression()?;
        Ok(ExpressionSyntax::assignment(left, right))
    }

    fn parse_unary(&mut self) -> Result<ExpressionSyntax> {
        let operator = match self.current_token()?.typ {
            TokenType::Minus => Some(PrefixOperator::Minus),
            TokenType::Plus => Some(PrefixOperator::Plus),
            TokenType::Bang => Some(PrefixOperator::Not),
            TokenType::Tilde => Some(PrefixOperator::Complement),
            _ => None,
        };

        match operator {
            Some(operator) => {
                self.advance();
                Ok(ExpressionSyntax::Prefix {
                    operator,
                    operand: Box::new(self.parse_unary()?),
                })
            }
            None => self.parse_postfix(),
        }
    }

    fn parse_postfix(&mut self) -> Result<ExpressionSyntax> {
        let mut expr = self.parse_primary()?;
        while self.check(TokenType::Dot) {
            self.advance(); // Skip '.'
            let name = self.expect_identifier("a member name")?;
            expr = ExpressionSyntax::member_access(expr, name);
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<ExpressionSyntax> {
        let token = self.current_token()?.clone();

        match token.typ {
            TokenType::String => self.literal(LiteralKind::String, token),
            TokenType::Char => self.literal(LiteralKind::Char, token),
            TokenType::Number => self.literal(LiteralKind::Numeric, token),
            TokenType::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenType::RParen, "')'")?;
                Ok(ExpressionSyntax::Parenthesized(Box::new(inner)))
            }
            TokenType::Identifier => match token.lexeme.as_str() {
                "true" => self.literal(LiteralKind::True, token),
                "false" => self.literal(LiteralKind::False, token),
                "null" => self.literal(LiteralKind::Null, token),
                "typeof" => {
                    self.advance();
                    self.expect(TokenType::LParen, "'('")?;
                    let ty = self.parse_type()?;
                    self.expect(TokenType::RParen, "')'")?;
                    Ok(ExpressionSyntax::TypeOf(ty))
                }
                "nameof" if self.peek_is(TokenType::LParen) => {
                    self.advance();
                    self.advance();
                    let inner = self.parse_expression()?;
                    self.expect(TokenType::RParen, "')'")?;
                    Ok(ExpressionSyntax::NameOf(Box::new(inner)))
                }
                word => match PredefinedType::from_keyword(word) {
                    Some(predefined) => {
                        self.advance();
                        Ok(ExpressionSyntax::PredefinedType(predefined))
                    }
                    None => self.parse_name_expression(),
                },
            },
            _ => Err(ParseError::Expected {
                expected: "an expression".to_string(),
                found: token.describe(),
                pos: token.pos,
            }),
        }
    }

    /// `Identifier` or `alias::Identifier`; dotted tails become member accesses.
    fn parse_name_expression(&mut self) -> Result<ExpressionSyntax> {
        let identifier = self.expect_identifier("an expression")?;
        if !self.check(TokenType::DoubleColon) {
            return Ok(ExpressionSyntax::identifier(identifier));
        }
        self.advance(); // Skip '::'
        let name = self.expect_identifier("a name")?;
        Ok(ExpressionSyntax::Name(NameSyntax::AliasQualified {
            alias: identifier,
            name: Box::new(NameSyntax::identifier(name)),
        }))
    }

    fn literal(&mut self, kind: LiteralKind, token: Token) -> Result<ExpressionSyntax> {
        self.advance();
        Ok(LiteralExpressionSyntax::from_token(kind, token.lexeme).into())
    }

    /// `Identifier` or `Identifier<TypeArgs>`.
    fn parse_simple_name(&mut self) -> Result<NameSyntax> {
        let identifier = self.expect_identifier("a name")?;
        if !self.check(TokenType::Less) {
            return Ok(NameSyntax::Identifier(identifier));
        }

        self.advance(); // Skip '<'
        let mut type_arguments = vec![self.parse_type()?];
        while self.check(TokenType::Comma) {
            self.advance();
            type_arguments.push(self.parse_type()?);
        }
        self.expect(TokenType::Greater, "'>'")?;

        Ok(NameSyntax::generic(identifier, type_arguments))
    }

    fn expect_identifier(&mut self, context: &'static str) -> Result<String> {
        let token = self.current_token()?.clone();
        if token.typ != TokenType::Identifier {
            return Err(ParseError::Expected {
                expected: "an identifier".to_string(),
                found: token.describe(),
                pos: token.pos,
            });
        }
        if !token.is_verbatim_identifier() && is_reserved_keyword(&token.lexeme) {
            return Err(ParseError::ReservedKeyword {
                keyword: token.lexeme,
                context,
                pos: token.pos,
            });
        }
        self.advance();
        Ok(token.lexeme)
    }

    fn expect(&mut self, typ: TokenType, expected: &str) -> Result<()> {
        let token = self.current_token()?;
        if token.typ != typ {
            return Err(ParseError::Expected {
                expected: expected.to_string(),
                found: token.describe(),
                pos: token.pos,
            });
        }
        self.advance();
        Ok(())
    }

    fn current_token(&self) -> Result<&Token> {
        self.tokens.get(self.current).ok_or(ParseError::EmptyInput)
    }

    fn check(&self, typ: TokenType) -> bool {
        self.current_token().is_ok_and(|token| token.typ == typ)
    }

    fn peek_is(&self, typ: TokenType) -> bool {
        self.tokens
            .get(self.current + 1)
            .is_some_and(|token| token.typ == typ)
    }

    fn advance(&mut self) {
        if !self.check(TokenType::Eof) {
            self.current += 1;
        }
    }
}
