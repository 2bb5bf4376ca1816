//! Locale-aware string comparison.
//!
//! Strings are compared in levels, the way a default-locale collator does:
//! base letters first, then accents, then case. Only identical strings
//! compare equal.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Coarse character classes, in collation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Symbol,
    Digit,
    Letter,
}

fn char_class(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Symbol
    }
}

/// One base character with the weights for each comparison level.
#[derive(Debug)]
struct Element {
    class: CharClass,
    base: char,
    marks: Vec<char>,
    upper: bool,
}

fn elements(s: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::new();
    for c in s.nfd() {
        if is_combining_mark(c) {
            // A leading mark has nothing to attach to and weighs as a symbol.
            match out.last_mut() {
                Some(last) => last.marks.push(c),
                None => out.push(Element {
                    class: CharClass::Symbol,
                    base: c,
                    marks: Vec::new(),
                    upper: false,
                }),
            }
            continue;
        }
        let base = c.to_lowercase().next().unwrap_or(c);
        out.push(Element {
            class: char_class(c),
            base,
            marks: Vec::new(),
            upper: c.is_uppercase(),
        });
    }
    out
}

/// Compare two strings the way a default-locale collator would.
///
/// - Primary: base characters, case and accents ignored; whitespace sorts
///   before symbols, symbols before digits, digits before letters.
/// - Secondary: accents.
/// - Tertiary: lowercase before uppercase.
/// - Finally code points, so `Equal` means the strings are identical.
///
/// ```
/// use std::cmp::Ordering;
/// use gridform::collate::locale_compare;
///
/// assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_compare("a", "A"), Ordering::Less);
/// assert_eq!(locale_compare("résumé", "resume"), Ordering::Greater);
/// ```
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let ea = elements(a);
    let eb = elements(b);

    let primary = ea
        .iter()
        .map(|e| (e.class, e.base))
        .cmp(eb.iter().map(|e| (e.class, e.base)));
    if primary != Ordering::Equal {
        return primary;
    }

    let secondary = ea
        .iter()
        .map(|e| e.marks.as_slice())
        .cmp(eb.iter().map(|e| e.marks.as_slice()));
    if secondary != Ordering::Equal {
        return secondary;
    }

    let tertiary = ea
        .iter()
        .map(|e| e.upper)
        .cmp(eb.iter().map(|e| e.upper));
    if tertiary != Ordering::Equal {
        return tertiary;
    }

    a.cmp(b)
}
