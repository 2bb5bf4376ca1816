use std::cmp::Ordering;

use gridform::collate::locale_compare;
use gridform::table::Alignment;
use gridform::text::{char_width, display_width, fit, truncate_to_width};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_wide() {
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("a日b"), 4);
    assert_eq!(char_width('日'), 2);
    assert_eq!(char_width('a'), 1);
}

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate_to_width("hello", 5), "hello");
    assert_eq!(truncate_to_width("hello", 10), "hello");
}

#[test]
fn test_truncate_overflow() {
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(truncate_to_width("hello", 1), "…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_truncate_does_not_split_wide_chars() {
    // "日" takes two cells; only one is left before the ellipsis
    assert_eq!(truncate_to_width("a日本", 3), "a…");
}

#[test]
fn test_fit_alignments() {
    assert_eq!(fit("ab", 5, Alignment::Left), "ab   ");
    assert_eq!(fit("ab", 5, Alignment::Right), "   ab");
    assert_eq!(fit("ab", 5, Alignment::Center), " ab  ");
    assert_eq!(fit("abcdef", 4, Alignment::Left), "abc…");
}

#[test]
fn test_collate_ignores_case_at_first_level() {
    assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
    assert_eq!(locale_compare("Apple", "banana"), Ordering::Less);
}

#[test]
fn test_collate_lowercase_first_on_tie() {
    assert_eq!(locale_compare("zoe", "Zoe"), Ordering::Less);
    assert_eq!(locale_compare("Zoe", "zoe"), Ordering::Greater);
}

#[test]
fn test_collate_accents() {
    assert_eq!(locale_compare("é", "f"), Ordering::Less);
    assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
    // composed and decomposed forms weigh the same up to code points
    assert_ne!(locale_compare("\u{e9}", "e\u{301}"), Ordering::Equal);
    assert_eq!(locale_compare("\u{e9}", "f"), locale_compare("e\u{301}", "f"));
}

#[test]
fn test_collate_classes() {
    assert_eq!(locale_compare("a b", "ab"), Ordering::Less);
    assert_eq!(locale_compare("-x", "x"), Ordering::Less);
    assert_eq!(locale_compare("9", "a"), Ordering::Less);
    assert_eq!(locale_compare("item 10", "item 9"), Ordering::Less);
}

#[test]
fn test_collate_prefix_sorts_first() {
    assert_eq!(locale_compare("Amy", "Amyx"), Ordering::Less);
    assert_eq!(locale_compare("", "a"), Ordering::Less);
}

#[test]
fn test_collate_equal_only_when_identical() {
    assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    assert_ne!(locale_compare("same", "Same"), Ordering::Equal);
}
