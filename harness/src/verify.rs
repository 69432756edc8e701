//! Independent checker for solver output.
//!
//! Parses a solution line of the form `"<expr> = 24"` with a small
//! recursive-descent parser (integers, `+ - * /`, parentheses, unary minus),
//! re-evaluates it, and checks both the value and the multiset of numbers
//! used. Nothing here shares code with the search, so a passing check is
//! evidence the solver's bookkeeping is right.

use thought_kernel::numeric::is_close;

use crate::worlds::point24::{GOAL_REL_TOL, TARGET};

/// Parsed arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(i64),
    Neg(Box<Expr>),
    Binary {
        op: char,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Evaluate in `f64`. Division by zero yields an infinity or NaN.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(&self) -> f64 {
        match self {
            Self::Literal(n) => *n as f64,
            Self::Neg(inner) => -inner.value(),
            Self::Binary { op, lhs, rhs } => {
                let (l, r) = (lhs.value(), rhs.value());
                match op {
                    '+' => l + r,
                    '-' => l - r,
                    '*' => l * r,
                    _ => l / r,
                }
            }
        }
    }

    /// Integer literals in left-to-right order.
    #[must_use]
    pub fn literals(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.collect_literals(&mut out);
        out
    }

    fn collect_literals(&self, out: &mut Vec<i64>) {
        match self {
            Self::Literal(n) => out.push(*n),
            Self::Neg(inner) => inner.collect_literals(out),
            Self::Binary { lhs, rhs, .. } => {
                lhs.collect_literals(out);
                rhs.collect_literals(out);
            }
        }
    }
}

/// Expression parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// Input ended where an operand or `)` was expected.
    UnexpectedEnd,
    /// A character that cannot start or continue the expression.
    UnexpectedChar { position: usize, found: char },
    /// An integer literal does not fit in `i64`.
    LiteralOverflow { position: usize },
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEnd => write!(f, "unexpected end of expression"),
            Self::UnexpectedChar { position, found } => {
                write!(f, "unexpected {found:?} at byte {position}")
            }
            Self::LiteralOverflow { position } => {
                write!(f, "integer literal at byte {position} overflows i64")
            }
        }
    }
}

impl std::error::Error for ExprError {}

/// Parse an arithmetic expression.
///
/// # Errors
///
/// Returns [`ExprError`] on malformed input or trailing characters.
pub fn parse_expr(input: &str) -> Result<Expr, ExprError> {
    let mut parser = Parser {
        bytes: input.as_bytes(),
        pos: 0,
    };
    let expr = parser.expr()?;
    parser.skip_ws();
    match parser.peek() {
        None => Ok(expr),
        Some(c) => Err(ExprError::UnexpectedChar {
            position: parser.pos,
            found: char::from(c),
        }),
    }
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn expr(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.term()?;
        loop {
            self.skip_ws();
            let op = match self.peek() {
                Some(b'+') => '+',
                Some(b'-') => '-',
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
    }

    fn term(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.factor()?;
        loop {
            self.skip_ws();
            let op = match self.peek() {
                Some(b'*') => '*',
                Some(b'/') => '/',
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.factor()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
    }

    fn factor(&mut self) -> Result<Expr, ExprError> {
        self.skip_ws();
        match self.peek() {
            None => Err(ExprError::UnexpectedEnd),
            Some(b'-') => {
                self.pos += 1;
                Ok(Expr::Neg(Box::new(self.factor()?)))
            }
            Some(b'(') => {
                self.pos += 1;
                let inner = self.expr()?;
                self.skip_ws();
                match self.peek() {
                    Some(b')') => {
                        self.pos += 1;
                        Ok(inner)
                    }
                    Some(c) => Err(ExprError::UnexpectedChar {
                        position: self.pos,
                        found: char::from(c),
                    }),
                    None => Err(ExprError::UnexpectedEnd),
                }
            }
            Some(c) if c.is_ascii_digit() => self.literal(),
            Some(c) => Err(ExprError::UnexpectedChar {
                position: self.pos,
                found: char::from(c),
            }),
        }
    }

    fn literal(&mut self) -> Result<Expr, ExprError> {
        let start = self.pos;
        let mut n: i64 = 0;
        while let Some(c) = self.peek().filter(u8::is_ascii_digit) {
            n = n
                .checked_mul(10)
                .and_then(|n| n.checked_add(i64::from(c - b'0')))
                .ok_or(ExprError::LiteralOverflow { position: start })?;
            self.pos += 1;
        }
        Ok(Expr::Literal(n))
    }
}

/// Why a solution line failed verification.
#[derive(Debug, Clone, PartialEq)]
pub enum VerifyError {
    /// The line has no `" = "` separator.
    MissingTarget,
    /// The right-hand side is not the puzzle target.
    WrongTarget { found: String },
    /// The left-hand side failed to parse.
    Parse(ExprError),
    /// The expression does not use exactly the hand's numbers.
    WrongNumbers { expected: Vec<i64>, found: Vec<i64> },
    /// The expression does not evaluate to the target.
    NotClose { value: f64 },
}

impl std::fmt::Display for VerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTarget => write!(f, "solution line has no \" = \" separator"),
            Self::WrongTarget { found } => write!(f, "solution targets {found}, not 24"),
            Self::Parse(e) => write!(f, "solution expression: {e}"),
            Self::WrongNumbers { expected, found } => {
                write!(f, "solution uses {found:?}, hand is {expected:?}")
            }
            Self::NotClose { value } => write!(f, "solution evaluates to {value}, not 24"),
        }
    }
}

impl std::error::Error for VerifyError {}

impl From<ExprError> for VerifyError {
    fn from(e: ExprError) -> Self {
        Self::Parse(e)
    }
}

/// Verify a solver line against the hand it was produced from.
///
/// Returns the evaluated value on success.
///
/// # Errors
///
/// Returns [`VerifyError`] if the line is malformed, uses different numbers
/// than `numbers` (as a multiset), or does not evaluate to 24 within the
/// goal tolerance.
pub fn verify_solution(line: &str, numbers: &[i64]) -> Result<f64, VerifyError> {
    let (lhs, rhs) = line.rsplit_once(" = ").ok_or(VerifyError::MissingTarget)?;
    if rhs.trim() != "24" {
        return Err(VerifyError::WrongTarget {
            found: rhs.trim().to_string(),
        });
    }

    let expr = parse_expr(lhs)?;

    let mut expected = numbers.to_vec();
    expected.sort_unstable();
    let mut found = expr.literals();
    found.sort_unstable();
    if expected != found {
        return Err(VerifyError::WrongNumbers { expected, found });
    }

    let value = expr.value();
    if !is_close(value, TARGET, GOAL_REL_TOL, 0.0) {
        return Err(VerifyError::NotClose { value });
    }
    Ok(value)
}
