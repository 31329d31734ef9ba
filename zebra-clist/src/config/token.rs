use std::iter::{self, from_fn};

use anyhow::{Result, bail};

#[derive(Debug, PartialEq)]
pub enum Token {
    String(String),
    Comment(String),
    LeftBrace,
    RightBrace,
    SemiColon,
}

fn is_word_char(c: &char) -> bool {
    !c.is_whitespace() && !matches!(c, '{' | '}' | ';' | '"')
}

// Quoted string body after the opening quote. Backslash escapes the next char.
fn quoted<I: Iterator<Item = char>>(chars: &mut I) -> Result<String> {
    let mut s = String::new();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Ok(s),
            '\\' => match chars.next() {
                Some(c) => s.push(c),
                None => break,
            },
            c => s.push(c),
        }
    }
    bail!("unterminated quoted string: \"{}", s)
}

pub fn tokenizer(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::<Token>::new();
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            ch if ch.is_whitespace() => {
                continue;
            }
            '"' => {
                tokens.push(Token::String(quoted(&mut chars)?));
            }
            '#' => {
                let s: String = chars.by_ref().take_while(|c| c != &'\n').collect();
                tokens.push(Token::Comment(s));
            }
            '{' => tokens.push(Token::LeftBrace),
            '}' => tokens.push(Token::RightBrace),
            ';' => tokens.push(Token::SemiColon),
            _ => {
                let s: String = iter::once(ch)
                    .chain(from_fn(|| chars.by_ref().next_if(is_word_char)))
                    .collect();
                tokens.push(Token::String(s));
            }
        }
    }
    Ok(tokens)
}
