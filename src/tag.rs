//! Tag code validation and normalization.
//!
//! Printed Mojo tags carry a code of the form `MOJ-XXX-XXX`. The code
//! alphabet is restricted to `A-Z` and `2-9` so that `0`/`O` and `1`/`I`
//! can never both appear on a printed tag. Scanned or hand-typed input
//! is normalized with [`sanitize`] before validation, which recovers the
//! common `0`→`O` and `1`→`I` substitutions without weakening uniqueness.

/// Literal prefix every tag code starts with.
pub const TAG_PREFIX: &str = "MOJ-";

/// Total length of a canonical tag code (`MOJ-XXX-XXX`).
pub const TAG_LENGTH: usize = 11;

/// Check whether a character belongs to the tag code alphabet.
///
/// The alphabet is `{A-Z, 2-9}`: uppercase letters plus digits without
/// the visually ambiguous `0` and `1`.
fn is_code_char(c: char) -> bool {
    c.is_ascii_uppercase() || ('2'..='9').contains(&c)
}

/// Validate a tag code against the canonical `MOJ-XXX-XXX` format.
///
/// Case-sensitive and strict: callers that accept user input should run
/// [`sanitize`] first.
pub fn is_valid_tag(input: &str) -> bool {
    if input.len() != TAG_LENGTH || !input.starts_with(TAG_PREFIX) {
        return false;
    }

    let rest = &input[TAG_PREFIX.len()..];
    let (first, second) = match rest.split_once('-') {
        Some(parts) => parts,
        None => return false,
    };

    first.len() == 3
        && second.len() == 3
        && first.chars().all(is_code_char)
        && second.chars().all(is_code_char)
}

/// Normalize raw tag input before validation.
///
/// Uppercases and maps `0`→`O`, `1`→`I`. Idempotent. This runs before
/// any uniqueness check, never after.
pub fn sanitize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            '0' => 'O',
            '1' => 'I',
            upper => upper,
        })
        .collect()
}
