//! Locale-aware string ordering for name sorts
//!
//! Approximates the browser's default collation (root locale):
//!
//! 1. Primary: case-insensitive, with character classes ordered
//!    whitespace/punctuation/symbols < digits < letters.
//! 2. Tertiary: at the first case difference, lower case sorts first.
//! 3. Final tie-break on raw code points, so the order is total.
//!
//! Accent folding and contractions are not modeled.

use std::cmp::Ordering;

/// Character class rank for the primary level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Ignorable,
    Digit,
    Letter,
}

fn char_class(c: char) -> CharClass {
    if c.is_alphabetic() {
        CharClass::Letter
    } else if c.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Ignorable
    }
}

fn primary_key(c: char) -> (CharClass, char) {
    let folded = c.to_lowercase().next().unwrap_or(c);
    (char_class(c), folded)
}

/// Compare two strings the way the dashboard's name sort does.
///
/// ## Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use experiment_showcase::query::locale_cmp;
///
/// // Case-insensitive first: "apple" < "Banana" (byte order says otherwise)
/// assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
/// // Case breaks ties: lower before upper
/// assert_eq!(locale_cmp("abc", "ABC"), Ordering::Less);
/// // Punctuation sorts before digits, digits before letters
/// assert_eq!(locale_cmp("_x", "1x"), Ordering::Less);
/// ```
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_key)
        .cmp(b.chars().map(primary_key))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}
