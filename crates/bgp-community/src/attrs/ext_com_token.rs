use std::str::FromStr;

use crate::{CommunityParseError, ExtCommunitySubType, RouteDistinguisher};

#[derive(Debug, PartialEq)]
pub enum Token {
    Rd(RouteDistinguisher),
    SubType(ExtCommunitySubType),
}

pub fn tokenizer(input: &str) -> Result<Vec<Token>, CommunityParseError> {
    let mut tokens = Vec::<Token>::new();
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            ch if ch.is_whitespace() => continue,

            '0'..='9' => {
                let s: String = std::iter::once(ch)
                    .chain(std::iter::from_fn(|| {
                        chars
                            .by_ref()
                            .next_if(|c| c.is_ascii_digit() || c == &'.' || c == &':')
                    }))
                    .collect();

                tokens.push(Token::Rd(RouteDistinguisher::from_str(&s)?));
            }

            'a'..='z' => {
                let s: String = std::iter::once(ch)
                    .chain(std::iter::from_fn(|| {
                        chars.by_ref().next_if(|c| c.is_ascii_alphabetic())
                    }))
                    .collect();
                let sub_type = match s.as_str() {
                    "rt" => ExtCommunitySubType::RouteTarget,
                    "soo" => ExtCommunitySubType::RouteOrigin,
                    _ => return Err(CommunityParseError::UnknownKeyword(s)),
                };
                tokens.push(Token::SubType(sub_type));
                // "rt:100:200" form.
                if chars.peek() == Some(&':') {
                    chars.next();
                }
            }

            other => return Err(CommunityParseError::UnexpectedChar(other)),
        }
    }
    Ok(tokens)
}
