//! Expression parser
//!
//! A lexer emitting typed tokens and a recursive descent parser with the
//! engine's operator precedence.
//!
//! Variables, quoted text and hexadecimal literals are resolved to numerals
//! *before* parsing (see [`crate::resolve`]); a symbol token reaching the
//! parser means the expression is unresolvable and is reported as such.

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};
use solvent_core::scan;

/// Parse an arithmetic expression into an AST
///
/// # Example
/// ```rust
/// use solvent_formula::parse_expression;
///
/// let ast = parse_expression("1+2").unwrap();
/// let ast = parse_expression("(2+3)*4").unwrap();
/// let ast = parse_expression("2^-1").unwrap();
/// ```
pub fn parse_expression(input: &str) -> FormulaResult<Expr> {
    let mut parser = ExprParser::new(input)?;
    let expr = parser.parse_additive()?;

    // Make sure we consumed all input
    match parser.current_token() {
        Token::Eof => Ok(expr),
        Token::RightParen => Err(FormulaError::UnbalancedBracket(input.to_string())),
        token => Err(FormulaError::Parse(format!(
            "Unexpected token after expression: {:?}",
            token
        ))),
    }
}

/// Token types
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    // Literals
    Number(f64),
    /// Hexadecimal literal, raw text including the `0x` prefix
    Hex(String),
    /// Quoted text, without the surrounding quotes
    QuotedText(String),

    // Identifiers
    Variable(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,

    // Delimiters
    LeftParen,
    RightParen,

    // End of input
    Eof,
}

/// Scan `input` into its full token sequence, `Eof` included.
pub(crate) fn tokenize(input: &str) -> FormulaResult<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token == Token::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

/// Expression lexer
struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn next_token(&mut self) -> FormulaResult<Token> {
        self.skip_whitespace();

        let c = match self.peek_char() {
            Some(c) => c,
            None => return Ok(Token::Eof),
        };

        // Single-character tokens
        match c {
            '+' => {
                self.advance();
                return Ok(Token::Plus);
            }
            '-' => {
                self.advance();
                return Ok(Token::Minus);
            }
            '*' => {
                self.advance();
                return Ok(Token::Star);
            }
            '/' => {
                self.advance();
                return Ok(Token::Slash);
            }
            '%' => {
                self.advance();
                return Ok(Token::Percent);
            }
            '^' => {
                self.advance();
                return Ok(Token::Caret);
            }
            '(' => {
                self.advance();
                return Ok(Token::LeftParen);
            }
            ')' => {
                self.advance();
                return Ok(Token::RightParen);
            }
            _ => {}
        }

        // Quoted text
        if c == '"' {
            return self.scan_quoted_text();
        }

        // Hexadecimal literal
        if c == '0' && matches!(self.peek_char_at(1), Some('x') | Some('X')) {
            return self.scan_hex();
        }

        // Number
        if c.is_ascii_digit()
            || (c == '.' && self.peek_char_at(1).map_or(false, |c| c.is_ascii_digit()))
        {
            return self.scan_number();
        }

        // Variable identifier
        if c.is_ascii_alphabetic() || c == '_' {
            return self.scan_variable();
        }

        Err(FormulaError::Parse(format!(
            "Unexpected character '{}' in expression",
            c
        )))
    }

    fn scan_quoted_text(&mut self) -> FormulaResult<Token> {
        self.advance(); // Skip opening quote

        let rest = &self.input[self.pos..];
        let inner = scan::read_until(rest, '"');
        if inner.len() == rest.len() {
            return Err(FormulaError::Parse("Unterminated quoted text".into()));
        }

        self.pos += inner.len() + 1; // Contents plus closing quote
        Ok(Token::QuotedText(inner.to_string()))
    }

    fn scan_hex(&mut self) -> FormulaResult<Token> {
        let start = self.pos;
        self.advance(); // '0'
        self.advance(); // 'x'

        let digit_start = self.pos;
        while self.peek_char().map_or(false, |c| c.is_ascii_hexdigit()) {
            self.advance();
        }
        if self.pos == digit_start {
            return Err(FormulaError::Parse(format!(
                "Malformed hexadecimal literal: '{}'",
                &self.input[start..self.pos]
            )));
        }

        Ok(Token::Hex(self.input[start..self.pos].to_string()))
    }

    fn scan_number(&mut self) -> FormulaResult<Token> {
        let start = self.pos;

        // Integer part
        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }

        // Decimal part
        if self.peek_char() == Some('.')
            && self.peek_char_at(1).map_or(false, |c| c.is_ascii_digit())
        {
            self.advance();
            while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let num_str = &self.input[start..self.pos];
        let num: f64 = num_str
            .parse()
            .map_err(|_| FormulaError::Parse(format!("Malformed numeral: '{}'", num_str)))?;
        Ok(Token::Number(num))
    }

    fn scan_variable(&mut self) -> FormulaResult<Token> {
        let start = self.pos;
        while self
            .peek_char()
            .map_or(false, |c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }
        Ok(Token::Variable(self.input[start..self.pos].to_string()))
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_whitespace()) {
            self.advance();
        }
    }
}

/// Expression parser
struct ExprParser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
    current_token: Token,
}

impl<'a> ExprParser<'a> {
    fn new(input: &'a str) -> FormulaResult<Self> {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token()?;
        Ok(Self {
            input,
            lexer,
            current_token,
        })
    }

    fn current_token(&self) -> &Token {
        &self.current_token
    }

    fn consume(&mut self) -> FormulaResult<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current_token, next))
    }

    // === Expression parsing with precedence ===
    // Precedence (lowest to highest):
    // 1. Addition/Subtraction: +, -
    // 2. Multiplication/Division: *, /
    // 3. Modulo: %
    // 4. Power: ^ (left associative: 2^3^2 is (2^3)^2)
    //
    // A sign at the head of a (sub)expression binds loosest, applying to the
    // first fully-reduced additive operand: -2^2 is -(2^2). A sign directly
    // after a binary operator applies to that operator's right operand as
    // reduced by the higher levels: 2*-3%5 is 2*(-(3%5)), 2^-1 is 2^(-1).

    fn parse_additive(&mut self) -> FormulaResult<Expr> {
        let negate = match self.current_token() {
            Token::Minus => {
                self.consume()?;
                true
            }
            Token::Plus => {
                self.consume()?;
                false
            }
            _ => false,
        };

        let mut left = self.parse_multiplicative()?;
        if negate {
            left = Expr::UnaryOp {
                op: UnaryOperator::Negate,
                operand: Box::new(left),
            };
        }

        loop {
            let op = match self.current_token() {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.consume()?;
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> FormulaResult<Expr> {
        let mut left = self.parse_modulo()?;

        loop {
            let op = match self.current_token() {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };

            self.consume()?;
            let right = self.parse_signed(Self::parse_modulo)?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_modulo(&mut self) -> FormulaResult<Expr> {
        let mut left = self.parse_power()?;

        while matches!(self.current_token(), Token::Percent) {
            self.consume()?;
            let right = self.parse_signed(Self::parse_power)?;
            left = Expr::BinaryOp {
                op: BinaryOperator::Modulo,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_power(&mut self) -> FormulaResult<Expr> {
        let mut left = self.parse_primary()?;

        while matches!(self.current_token(), Token::Caret) {
            self.consume()?;
            let right = self.parse_signed(Self::parse_primary)?;
            left = Expr::BinaryOp {
                op: BinaryOperator::Power,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse an optional sign followed by `inner`, wrapping in a negation
    /// when the sign is `-`.
    fn parse_signed(&mut self, inner: fn(&mut Self) -> FormulaResult<Expr>) -> FormulaResult<Expr> {
        match self.current_token() {
            Token::Minus => {
                self.consume()?;
                let operand = inner(self)?;
                Ok(Expr::UnaryOp {
                    op: UnaryOperator::Negate,
                    operand: Box::new(operand),
                })
            }
            Token::Plus => {
                self.consume()?;
                inner(self)
            }
            _ => inner(self),
        }
    }

    fn parse_primary(&mut self) -> FormulaResult<Expr> {
        match self.current_token().clone() {
            Token::Number(n) => {
                self.consume()?;
                Ok(Expr::Number(n))
            }

            Token::LeftParen => {
                self.consume()?;
                let expr = self.parse_additive()?;
                if !matches!(self.current_token(), Token::RightParen) {
                    return Err(FormulaError::UnbalancedBracket(self.input.to_string()));
                }
                self.consume()?;
                Ok(expr)
            }

            Token::Variable(name) => Err(FormulaError::UnknownSymbol(name)),

            token => Err(FormulaError::Parse(format!(
                "Unexpected token in expression: {:?}",
                token
            ))),
        }
    }
}
