//! Byte strings, characters, strings, and atom-like identifiers, all built
//! from `byte`/`integer_in_range` plus the `list_of`/`map`/`scale`
//! combinators already defined elsewhere.

use crate::collect::{list_of, tuple};
use crate::frequency::{frequency, one_of, Weighted};
use crate::generator::Generator;
use crate::map::map;
use crate::primitive::constant;
use crate::size::scale;

/// A byte string: `list_of(byte())`.
pub fn byte_string() -> Generator<Vec<u8>> {
    list_of(crate::primitive::byte())
}

/// A uniform character in the inclusive code-point range `lo..=hi`.
///
/// # Panics
/// Panics if `lo > hi`.
pub fn char_in_range(lo: char, hi: char) -> Generator<char> {
    let lo_u = lo as u32;
    let hi_u = hi as u32;
    assert!(lo_u <= hi_u, "char_in_range: empty range {lo:?}..={hi:?}");
    map(
        crate::primitive::integer_in_range(lo_u as i64..=hi_u as i64),
        move |n| char::from_u32(n as u32).unwrap_or(lo),
    )
}

/// An ASCII letter, upper or lower case with equal probability.
pub fn letter() -> Generator<char> {
    one_of(vec![char_in_range('a', 'z'), char_in_range('A', 'Z')])
}

/// An ASCII digit `'0'..='9'`.
pub fn digit() -> Generator<char> {
    char_in_range('0', '9')
}

/// Any ASCII character (code points `0..=127`).
pub fn ascii_char() -> Generator<char> {
    char_in_range(0u8 as char, 127u8 as char)
}

/// A string built from a character generator: `list_of(char_gen)` collected
/// into a `String`.
pub fn string_of(char_generator: Generator<char>) -> Generator<String> {
    map(list_of(char_generator), |chars: Vec<char>| {
        chars.into_iter().collect()
    })
}

/// A string of ASCII characters.
pub fn ascii_string() -> Generator<String> {
    string_of(ascii_char())
}

/// A string of ASCII letters.
pub fn word() -> Generator<String> {
    string_of(letter())
}

fn first_char() -> Generator<char> {
    frequency(vec![
        Weighted::new(10, char_in_range('a', 'z')),
        Weighted::new(4, char_in_range('A', 'Z')),
        Weighted::new(1, constant('_')),
    ])
}

fn atom_char() -> Generator<char> {
    frequency(vec![
        Weighted::new(12, char_in_range('a', 'z')),
        Weighted::new(4, char_in_range('A', 'Z')),
        Weighted::new(4, digit()),
        Weighted::new(1, constant('_')),
    ])
}

/// An identifier-shaped string: a three-class first character (lowercase
/// letter, uppercase letter, or underscore) followed by zero or more
/// identifier characters, sized by `⌊√size⌋` capped at `256` rather than
/// `size` directly: atoms grow far more slowly than lists of them do.
pub fn atom() -> Generator<String> {
    let body = crate::bind::bind(first_char(), |first: char| {
        map(list_of(atom_char()), move |rest: Vec<char>| {
            let mut built = String::new();
            built.push(first);
            built.extend(rest);
            built
        })
    });
    scale(body, |size| ((size as f64).sqrt().floor() as i64).min(256))
}

/// `list_of(tuple((atom(), vg)))`.
pub fn keyword_of<V>(vg: Generator<V>) -> Generator<Vec<(String, V)>>
where
    V: Clone + Send + Sync + 'static,
{
    list_of(tuple((atom(), vg)))
}
