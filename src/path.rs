use crate::error::{PathError, Result};
use crate::matcher::{MatchExact, MatchMulti, MatchPattern, Matcher};
use crate::value::Value;

const SEPARATOR: char = '.';
const ESCAPE: char = '\\';
const MULTI_TOKEN: &str = "**";

/// Compile a delimited textual path into a matcher sequence.
///
/// Segments split on an unescaped `.`; `\` escapes the next character.
/// A token without `*` compiles to an exact matcher (or, when
/// `case_insensitive`, to a pattern matcher, since exact matching has no
/// case folding). A token of exactly `**` compiles to recursive descent;
/// `**` embedded anywhere else is invalid. Any other token containing
/// `*` compiles to a pattern matcher.
pub fn parse_path(text: &str, case_insensitive: bool) -> Result<Vec<Matcher>> {
	let tokens = split_escaped(text, SEPARATOR, ESCAPE);
	let mut matchers = Vec::with_capacity(tokens.len());

	for token in tokens {
		if token == MULTI_TOKEN {
			matchers.push(Matcher::Multi(MatchMulti { stay_first: false }));
		} else if token.contains(MULTI_TOKEN) {
			return Err(PathError::InvalidPath { path: text.to_owned() });
		} else if !token.contains('*') && !case_insensitive {
			matchers.push(Matcher::Exact(MatchExact {
				value: Value::Str(token),
			}));
		} else {
			matchers.push(Matcher::Pattern(MatchPattern {
				pattern: token,
				only_string_keys: false,
				case_insensitive,
			}));
		}
	}

	Ok(matchers)
}

/// Compile a textual path, panicking on invalid input.
pub fn must_parse_path(text: &str, case_insensitive: bool) -> Vec<Matcher> {
	match parse_path(text, case_insensitive) {
		Ok(matchers) => matchers,
		Err(err) => panic!("{err}"),
	}
}

/// Split on an unescaped separator. The escape character makes the next
/// character literal; a trailing escape stands for itself.
fn split_escaped(text: &str, separator: char, escape: char) -> Vec<String> {
	let mut tokens = Vec::new();
	let mut token = String::new();
	let mut chars = text.chars();

	while let Some(c) = chars.next() {
		if c == separator {
			tokens.push(std::mem::take(&mut token));
		} else if c == escape {
			match chars.next() {
				Some(escaped) => token.push(escaped),
				None => token.push(c),
			}
		} else {
			token.push(c);
		}
	}
	tokens.push(token);
	tokens
}
