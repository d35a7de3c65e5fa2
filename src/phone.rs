use std::collections::BTreeSet;

use log::trace;

/// Slice lengths taken from both ends of the digit string.
const SLICE_LENGTHS: [usize; 5] = [2, 3, 4, 5, 6];

/// Tokens shorter or longer than this window are degenerate artifacts and
/// dropped from the derived set.
const TOKEN_LENGTH_WINDOW: (usize, usize) = (2, 10);

/// Digit-only projection of an arbitrary phone string.
pub(crate) fn digits_only(phone: &str) -> String {
    phone.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

/// Derive the meaningful substrings of a digit string: the full string,
/// fixed-length prefixes and suffixes, and the full reversal. Slices longer
/// than the available digits are skipped. An empty digit string yields an
/// empty set.
///
/// Expects the ASCII-digit output of [`digits_only`]; byte slicing and byte
/// lengths below rely on it.
pub(crate) fn phone_tokens(digits: &str) -> BTreeSet<String> {
    debug_assert!(digits.chars().all(|ch| ch.is_ascii_digit()));

    let mut tokens: BTreeSet<String> = BTreeSet::new();
    if digits.is_empty() {
        return tokens;
    }

    let n = digits.len();
    tokens.insert(digits.to_string());

    for length in SLICE_LENGTHS {
        if n >= length {
            tokens.insert(digits[..length].to_string());
            tokens.insert(digits[n - length..].to_string());
        }
    }

    tokens.insert(digits.chars().rev().collect());

    let (min, max) = TOKEN_LENGTH_WINDOW;
    tokens.retain(|token| (min..=max).contains(&token.len()));

    trace!("Derived {} phone tokens from {} digits", tokens.len(), n);
    tokens
}
