use crate::parse::ast::{CurveGeometry, Expression, StepLiteral};
use crate::parse::error::SyntaxError;
use crate::parse::lexer::{Span, Token, TokenKind, lex};

/// Parse a prompt written in the blending grammar.
///
/// Either the whole prompt parses or a [`SyntaxError`] is returned; there is no partial
/// result.
pub fn parse(src: &str) -> Result<Expression, SyntaxError> {
    let mut p = Parser {
        tokens: lex(src),
        pos: 0,
    };
    let expr = p.parse_prompt(Scope::TopLevel)?;
    p.expect_eof()?;
    Ok(expr)
}

/// Which tokens end the prompt currently being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    TopLevel,
    /// Inside `[...]`: `:` and `]` terminate, `|` is text.
    Edit,
    /// Inside `{...}`: `:`, `|` and `}` terminate.
    Fuse,
}

/// One `:`-separated part of an edit group.
struct Segment {
    expr: Expression,
    start: usize,
}

impl Segment {
    fn text(&self) -> Option<&str> {
        match &self.expr {
            Expression::Leaf(text) => Some(text),
            _ => None,
        }
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn bump(&mut self) -> Token {
        let t = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        t
    }

    fn span(&self) -> Span {
        self.peek().span
    }

    fn expect_eof(&self) -> Result<(), SyntaxError> {
        match &self.peek().kind {
            TokenKind::Eof => Ok(()),
            other => Err(SyntaxError::new(
                self.span().start,
                format!("expected end of prompt, found {other:?}"),
            )),
        }
    }

    fn parse_prompt(&mut self, scope: Scope) -> Result<Expression, SyntaxError> {
        let mut expr = Expression::Leaf(String::new());
        loop {
            let start = self.span().start;
            let part = match (self.peek().kind.clone(), scope) {
                (TokenKind::Text(s), _) => {
                    self.bump();
                    Expression::Leaf(s)
                }
                (TokenKind::LBracket, _) => self.parse_edit_group()?,
                (TokenKind::LBrace, _) => self.parse_fuse_group()?,
                (TokenKind::Colon, Scope::TopLevel) => {
                    self.bump();
                    Expression::Leaf(":".to_owned())
                }
                (TokenKind::Pipe, Scope::TopLevel | Scope::Edit) => {
                    self.bump();
                    Expression::Leaf("|".to_owned())
                }
                (TokenKind::RBracket, Scope::TopLevel | Scope::Fuse) => {
                    return Err(SyntaxError::new(start, "unmatched ']'"));
                }
                (TokenKind::RBrace, Scope::TopLevel | Scope::Edit) => {
                    return Err(SyntaxError::new(start, "unmatched '}'"));
                }
                _ => break,
            };
            expr = expr.concat(part);
        }
        Ok(expr)
    }

    fn parse_edit_group(&mut self) -> Result<Expression, SyntaxError> {
        let open = self.bump().span.start;
        let mut segments = Vec::new();
        loop {
            let start = self.span().start;
            let expr = self.parse_prompt(Scope::Edit)?;
            segments.push(Segment { expr, start });
            match self.bump().kind {
                TokenKind::Colon => {}
                TokenKind::RBracket => break,
                _ => return Err(SyntaxError::new(open, "unclosed '[' group")),
            }
        }

        if segments.len() == 1 {
            let inner = segments.pop().map_or(Expression::Leaf(String::new()), |s| s.expr);
            return Ok(Expression::Leaf("[".to_owned())
                .concat(inner)
                .concat(Expression::Leaf("]".to_owned())));
        }

        let mut geometry = None;
        if let Some(last) = segments.last()
            && let Some(text) = last.text()
            && text.trim_start().starts_with(|c: char| c.is_ascii_alphabetic())
        {
            geometry = Some(parse_geometry(text, last.start)?);
            segments.pop();
        }

        let Some(steps_segment) = segments.pop() else {
            return Err(SyntaxError::new(open, "expected a step list"));
        };
        let Some(steps_text) = steps_segment.text() else {
            return Err(SyntaxError::new(
                steps_segment.start,
                "expected a step list, found a nested group",
            ));
        };
        let steps = parse_steps(steps_text, steps_segment.start)?;
        let children: Vec<Expression> = segments.into_iter().map(|s| s.expr).collect();

        let n = children.len();
        let k = steps.len();
        if n >= 2 && k == n {
            return Ok(Expression::Curve {
                children,
                geometry: geometry.unwrap_or(CurveGeometry::Linear),
                stops: steps,
            });
        }
        if geometry.is_some() {
            return Err(SyntaxError::new(
                open,
                format!("a curve needs one stop per prompt ({n} prompts, {k} stops)"),
            ));
        }
        if steps.contains(&StepLiteral::Auto) {
            return Err(SyntaxError::new(
                steps_segment.start,
                "prompt editing steps cannot be blank",
            ));
        }
        if n >= 2 && k + 1 == n {
            return Ok(Expression::Sequence {
                children,
                boundaries: steps,
            });
        }
        if n == 1 && k == 1 {
            // `[to:when]` adds `to` once `when` is reached.
            let mut children = children;
            children.insert(0, Expression::Leaf(String::new()));
            return Ok(Expression::Sequence {
                children,
                boundaries: steps,
            });
        }
        Err(SyntaxError::new(
            open,
            format!("{n} prompts cannot take {k} steps (expected {} or {n})", n.saturating_sub(1)),
        ))
    }

    fn parse_fuse_group(&mut self) -> Result<Expression, SyntaxError> {
        let open = self.bump().span.start;
        let mut children = Vec::new();
        let mut weights = Vec::new();
        let mut any_weight = false;
        loop {
            children.push(self.parse_prompt(Scope::Fuse)?);

            let mut weight = 1.0;
            if self.peek().kind == TokenKind::Colon {
                self.bump();
                let t = self.bump();
                let TokenKind::Text(text) = t.kind else {
                    return Err(SyntaxError::new(t.span.start, "expected a weight after ':'"));
                };
                weight = parse_weight(&text, t.span.start)?;
                any_weight = true;
            }
            weights.push(weight);

            let t = self.bump();
            match t.kind {
                TokenKind::Pipe => {}
                TokenKind::RBrace => break,
                TokenKind::Eof => return Err(SyntaxError::new(open, "unclosed '{' group")),
                other => {
                    return Err(SyntaxError::new(
                        t.span.start,
                        format!("expected '|' or '}}', found {other:?}"),
                    ));
                }
            }
        }

        if children.len() == 1 {
            if any_weight {
                return Err(SyntaxError::new(
                    open,
                    "a weighted fuse group needs at least two alternatives",
                ));
            }
            let inner = children.pop().unwrap_or(Expression::Leaf(String::new()));
            return Ok(Expression::Leaf("{".to_owned())
                .concat(inner)
                .concat(Expression::Leaf("}".to_owned())));
        }

        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(SyntaxError::new(open, "fuse weights must not all be zero"));
        }

        Ok(Expression::Fuse { children, weights })
    }
}

fn parse_weight(text: &str, offset: usize) -> Result<f64, SyntaxError> {
    let trimmed = text.trim();
    let lead = text.len() - text.trim_start().len();
    let v: f64 = trimmed
        .parse()
        .map_err(|_| SyntaxError::new(offset + lead, format!("malformed weight '{trimmed}'")))?;
    if !v.is_finite() || v < 0.0 {
        return Err(SyntaxError::new(
            offset + lead,
            format!("weight must be finite and >= 0, got '{trimmed}'"),
        ));
    }
    Ok(v)
}

fn parse_steps(text: &str, offset: usize) -> Result<Vec<StepLiteral>, SyntaxError> {
    let mut out = Vec::new();
    let mut piece_offset = offset;
    for piece in text.split(',') {
        let at = piece_offset + (piece.len() - piece.trim_start().len());
        out.push(parse_step(piece.trim(), at)?);
        piece_offset += piece.len() + 1;
    }
    Ok(out)
}

fn parse_step(s: &str, offset: usize) -> Result<StepLiteral, SyntaxError> {
    if s.is_empty() {
        return Ok(StepLiteral::Auto);
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return s
            .parse()
            .map(StepLiteral::Absolute)
            .map_err(|_| SyntaxError::new(offset, format!("step '{s}' is out of range")));
    }
    let v: f64 = s
        .parse()
        .map_err(|_| SyntaxError::new(offset, format!("malformed step '{s}'")))?;
    if !v.is_finite() || v < 0.0 {
        return Err(SyntaxError::new(
            offset,
            format!("step must be finite and >= 0, got '{s}'"),
        ));
    }
    if v < 1.0 {
        Ok(StepLiteral::Fraction(v))
    } else {
        Ok(StepLiteral::Absolute(v.floor() as usize))
    }
}

fn parse_geometry(text: &str, offset: usize) -> Result<CurveGeometry, SyntaxError> {
    let lead = text.len() - text.trim_start().len();
    let at = offset + lead;
    let s = text.trim();
    let name_len = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    let (name, rest) = s.split_at(name_len);
    let rest = rest.trim();

    match name {
        "linear" if rest.is_empty() => Ok(CurveGeometry::Linear),
        "bezier" if rest.is_empty() => Ok(CurveGeometry::Bezier {
            control_points: CurveGeometry::DEFAULT_BEZIER.to_vec(),
        }),
        "bezier" => {
            let Some(inner) = rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) else {
                return Err(SyntaxError::new(
                    at + name_len,
                    "expected '(' control points ')' after 'bezier'",
                ));
            };
            let control_points = inner
                .split(',')
                .map(|p| {
                    let p = p.trim();
                    p.parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .ok_or_else(|| {
                            SyntaxError::new(at, format!("malformed control point '{p}'"))
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(CurveGeometry::Bezier { control_points })
        }
        "linear" => Err(SyntaxError::new(
            at + name_len,
            "'linear' takes no arguments",
        )),
        other => Err(SyntaxError::new(at, format!("unknown geometry '{other}'"))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parse/parser.rs"]
mod tests;
