#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    /// A run of literal prompt text (escapes kept verbatim).
    Text(String),

    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Colon,
    Pipe,

    Eof,
}

/// Split a prompt into structural tokens and text runs.
///
/// `:` and `|` nested inside parentheses within the current group are text, so attention
/// syntax like `(cat:1.2)` never splits a group. Lexing is total: balance errors are the
/// parser's to report.
pub(crate) fn lex(input: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut text = String::new();
    let mut text_start = 0usize;
    // One open-paren counter per open group; the bottom entry is the top level.
    let mut paren_depths: Vec<u32> = vec![0];
    let mut chars = input.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let depth = paren_depths.last().copied().unwrap_or(0);
        let kind = match c {
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            ':' if depth == 0 => Some(TokenKind::Colon),
            '|' if depth == 0 => Some(TokenKind::Pipe),
            _ => None,
        };

        let Some(kind) = kind else {
            if text.is_empty() {
                text_start = i;
            }
            text.push(c);
            match c {
                '\\' => {
                    if let Some((_, escaped)) = chars.next() {
                        text.push(escaped);
                    }
                }
                '(' => {
                    if let Some(d) = paren_depths.last_mut() {
                        *d += 1;
                    }
                }
                ')' => {
                    if let Some(d) = paren_depths.last_mut() {
                        *d = d.saturating_sub(1);
                    }
                }
                _ => {}
            }
            continue;
        };

        flush_text(&mut out, &mut text, text_start, i);
        match kind {
            TokenKind::LBracket | TokenKind::LBrace => paren_depths.push(0),
            TokenKind::RBracket | TokenKind::RBrace if paren_depths.len() > 1 => {
                paren_depths.pop();
            }
            _ => {}
        }
        out.push(Token {
            kind,
            span: Span {
                start: i,
                end: i + c.len_utf8(),
            },
        });
    }

    flush_text(&mut out, &mut text, text_start, input.len());
    out.push(Token {
        kind: TokenKind::Eof,
        span: Span {
            start: input.len(),
            end: input.len(),
        },
    });

    out
}

fn flush_text(out: &mut Vec<Token>, text: &mut String, start: usize, end: usize) {
    if text.is_empty() {
        return;
    }
    out.push(Token {
        kind: TokenKind::Text(std::mem::take(text)),
        span: Span { start, end },
    });
}

#[cfg(test)]
#[path = "../../tests/unit/parse/lexer.rs"]
mod tests;
