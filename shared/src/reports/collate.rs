//! Locale-style string ordering for report rows

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Letters that carry no canonical decomposition but sort with a base letter
fn base_letters(c: char) -> Option<&'static str> {
    match c {
        'ł' => Some("l"),
        'ø' => Some("o"),
        'đ' | 'ð' => Some("d"),
        'ı' => Some("i"),
        'ß' => Some("ss"),
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        _ => None,
    }
}

/// Primary collation key: case and accents are ignored
///
/// Input is decomposed (NFD) and its combining marks dropped, so precomposed
/// and decomposed spellings share a key.
pub fn collation_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
    {
        match base_letters(c) {
            Some(base) => key.push_str(base),
            None => key.push(c),
        }
    }
    key
}

/// Compare two strings the way a user-facing sorted list expects
///
/// "Álvaro" sorts next to "alvaro"; strings equal under the key are ordered by
/// their raw form so the result is total and deterministic.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_accent_insensitive_primary_order() {
        assert_eq!(locale_cmp("Álvaro", "beto"), Ordering::Less);
        assert_eq!(locale_cmp("alvaro", "Beto"), Ordering::Less);
        assert_eq!(locale_cmp("Montería", "Monteria"), Ordering::Greater);
        assert_eq!(locale_cmp("ñame", "oso"), Ordering::Less);
    }

    #[test]
    fn test_decomposed_and_uncommon_accents() {
        assert_eq!(locale_cmp("A\u{301}lvaro", "Alz"), Ordering::Less);
        assert_eq!(locale_cmp("Ýoli", "Zoe"), Ordering::Less);
        assert_eq!(locale_cmp("Łukasz", "Mario"), Ordering::Less);
        assert_eq!(collation_key("A\u{301}lvaro"), collation_key("Álvaro"));
        assert_eq!(collation_key("Øster"), "oster");
    }

    #[test]
    fn test_numeric_ids_sort_as_strings() {
        let mut ids = vec!["12877", "10210", "12871", "9"];
        ids.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(ids, vec!["10210", "12871", "12877", "9"]);
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(locale_cmp("A1", "A1"), Ordering::Equal);
    }
}
