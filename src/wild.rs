//! Wildcard string matching used by pattern matchers.
//!
//! Shell-glob style: `*` matches any run of characters, every other
//! character matches itself. Case folding is ASCII-only.

/// Whether `text` matches the wildcard `pattern`.
pub fn wild_match(pattern: &str, text: &str, case_insensitive: bool) -> bool {
	let pattern = pattern.as_bytes();
	let text = text.as_bytes();

	let mut p = 0_usize;
	let mut t = 0_usize;
	let mut star: Option<usize> = None;
	let mut star_t = 0_usize;

	while t < text.len() {
		if p < pattern.len() && pattern[p] == b'*' {
			star = Some(p);
			star_t = t;
			p += 1;
		} else if p < pattern.len() && byte_eq(pattern[p], text[t], case_insensitive) {
			p += 1;
			t += 1;
		} else if let Some(star_p) = star {
			// Backtrack: let the last star absorb one more byte.
			p = star_p + 1;
			star_t += 1;
			t = star_t;
		} else {
			return false;
		}
	}

	while p < pattern.len() && pattern[p] == b'*' {
		p += 1;
	}
	p == pattern.len()
}

fn byte_eq(a: u8, b: u8, case_insensitive: bool) -> bool {
	if case_insensitive {
		a.to_ascii_lowercase() == b.to_ascii_lowercase()
	} else {
		a == b
	}
}

#[cfg(test)]
mod tests {
	use super::wild_match;

	#[test]
	fn literal_patterns_match_exactly() {
		assert!(wild_match("name", "name", false));
		assert!(!wild_match("name", "names", false));
		assert!(!wild_match("names", "name", false));
		assert!(!wild_match("", "x", false));
		assert!(wild_match("", "", false));
	}

	#[test]
	fn star_matches_any_run() {
		assert!(wild_match("*", "", false));
		assert!(wild_match("*", "anything", false));
		assert!(wild_match("a*", "abc", false));
		assert!(wild_match("*c", "abc", false));
		assert!(wild_match("a*c", "abc", false));
		assert!(wild_match("a*c", "ac", false));
		assert!(!wild_match("a*c", "abd", false));
	}

	#[test]
	fn multiple_stars_backtrack() {
		assert!(wild_match("*a*b*", "xaxbx", false));
		assert!(wild_match("a*b*c", "aXbYbZc", false));
		assert!(!wild_match("a*b*c", "acb", false));
	}

	#[test]
	fn ascii_case_folding_is_optional() {
		assert!(!wild_match("JoHn", "john", false));
		assert!(wild_match("JoHn", "john", true));
		assert!(wild_match("j*N", "JohN", true));
	}
}
