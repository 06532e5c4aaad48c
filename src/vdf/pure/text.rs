//! Text KeyValues decoder
//!
//! Grammar, as Steam writes it:
//! - tokens are `"quoted strings"` (with `\\ \" \n \t` escapes) or bare words
//! - a key is followed by either a value token or a `{ ... }` block
//! - `// comments` run to the end of the line
//! - `[$CONDITION]` markers may trail a value and are ignored

use crate::error::{ProtonError, Result};
use crate::vdf::pure::MAX_NESTING_DEPTH;
use crate::vdf::types::{Document, Value};

#[derive(Debug, PartialEq)]
enum Token {
    Str(String),
    Open,
    Close,
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
        }
    }

    fn error(&self, message: impl std::fmt::Display) -> ProtonError {
        ProtonError::decode("text vdf", format!("line {}: {}", self.line, message))
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.chars.peek() {
                Some('\n') => {
                    self.line += 1;
                    self.chars.next();
                }
                Some(c) if c.is_whitespace() => {
                    self.chars.next();
                }
                Some('/') => {
                    let mut ahead = self.chars.clone();
                    ahead.next();
                    if ahead.peek() != Some(&'/') {
                        return;
                    }
                    while let Some(c) = self.chars.peek() {
                        if *c == '\n' {
                            break;
                        }
                        self.chars.next();
                    }
                }
                // Conditional markers such as [$WIN32]
                Some('[') => {
                    for c in self.chars.by_ref() {
                        if c == ']' {
                            break;
                        }
                    }
                }
                _ => return,
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_trivia();
        let Some(c) = self.chars.next() else {
            return Ok(None);
        };
        match c {
            '{' => Ok(Some(Token::Open)),
            '}' => Ok(Some(Token::Close)),
            '"' => self.quoted().map(|s| Some(Token::Str(s))),
            c => {
                let mut word = String::from(c);
                while let Some(&c) = self.chars.peek() {
                    if c.is_whitespace() || c == '{' || c == '}' || c == '"' {
                        break;
                    }
                    word.push(c);
                    self.chars.next();
                }
                Ok(Some(Token::Str(word)))
            }
        }
    }

    fn quoted(&mut self) -> Result<String> {
        let mut out = String::new();
        loop {
            match self.chars.next() {
                None => return Err(self.error("unterminated string")),
                Some('"') => return Ok(out),
                Some('\\') => match self.chars.next() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('\\') => out.push('\\'),
                    Some('"') => out.push('"'),
                    // Unknown escapes are kept verbatim; Windows paths rely on it
                    Some(other) => {
                        out.push('\\');
                        out.push(other);
                    }
                    None => return Err(self.error("unterminated string")),
                },
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    out.push(c);
                }
            }
        }
    }
}

/// Decode a text KeyValues file
pub fn parse_text(bytes: &[u8]) -> Result<Document> {
    let input = std::str::from_utf8(bytes)
        .map_err(|e| ProtonError::decode("text vdf", format!("invalid UTF-8: {}", e)))?;
    // Some editors leave a byte order mark behind
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);

    let mut lexer = Lexer::new(input);
    let doc = parse_block(&mut lexer, 0)?;
    Ok(doc)
}

fn parse_block(lexer: &mut Lexer<'_>, depth: usize) -> Result<Document> {
    if depth > MAX_NESTING_DEPTH {
        return Err(lexer.error("nesting too deep"));
    }
    let nested = depth > 0;
    let mut doc = Document::new();
    loop {
        let key = match lexer.next_token()? {
            Some(Token::Str(key)) => key,
            Some(Token::Close) if nested => return Ok(doc),
            Some(Token::Close) => return Err(lexer.error("unexpected '}'")),
            Some(Token::Open) => return Err(lexer.error("unexpected '{' where a key was expected")),
            None if nested => return Err(lexer.error("unexpected end of file inside a block")),
            None => return Ok(doc),
        };

        match lexer.next_token()? {
            Some(Token::Str(value)) => doc.insert(key, Value::Str(value)),
            Some(Token::Open) => {
                let child = parse_block(lexer, depth + 1)?;
                doc.insert(key, Value::Doc(child));
            }
            Some(Token::Close) | None => {
                return Err(lexer.error(format!("key '{}' has no value", key)));
            }
        }
    }
}
