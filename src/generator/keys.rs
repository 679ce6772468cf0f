use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

/// Matches a key that cannot sit bare in field position: leading digit, or any
/// character outside `[a-zA-Z0-9_$]`.
static UNSAFE_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d|[^a-zA-Z0-9_$]").expect("unsafe key regex should be valid")
});

/// Field-position form of a key: quoted verbatim when unsafe, unchanged otherwise.
///
/// Used for nested interface fields, where a quoted string-literal field name
/// is always valid TypeScript.
pub fn safe_key(key: &str) -> String {
    if UNSAFE_KEY.is_match(key) {
        format!("'{key}'")
    } else {
        key.to_string()
    }
}

/// Display form of a key, used for the root `DesignTokens` property names.
///
/// Digit-leading keys move the leading digit run to the end (`2xl` → `xl2`) so
/// the result stays a bare identifier; the suffix is left as authored. All
/// other keys are camel-cased at `-`/`_` boundaries and stripped of anything
/// outside `[a-zA-Z0-9]`.
///
/// Deliberately asymmetric with [`raw_key`], which quotes digit-leading keys
/// instead of reordering them.
pub fn camel_case_key(key: &str) -> String {
    if key.starts_with(|c: char| c.is_ascii_digit()) {
        let digits_end = key
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(key.len());
        let (digits, suffix) = key.split_at(digits_end);
        return format!("{suffix}{digits}");
    }
    camel_strip(key)
}

/// Runtime-value form of a key: quoted when unsafe (digit-leading included),
/// camel-cased and stripped otherwise.
pub fn raw_key(key: &str) -> String {
    if UNSAFE_KEY.is_match(key) {
        format!("'{key}'")
    } else {
        camel_strip(key)
    }
}

/// A separator followed by a character upper-cases that character; anything
/// left outside `[a-zA-Z0-9]` is then stripped. A trailing separator has
/// nothing to consume and is stripped with the rest.
fn camel_strip(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if (c == '-' || c == '_') && chars.peek().is_some() {
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
            }
        } else {
            out.push(c);
        }
    }
    out.retain(|c| c.is_ascii_alphanumeric());
    out
}

/// Sort field names for type emission: non-numeric names first in
/// case-insensitive lexicographic order, all-digit names last in ascending
/// numeric order. Purely a function of the name set, so emission order is
/// independent of token insertion order.
pub fn sort_keys(keys: &mut [&str]) {
    keys.sort_by(|a, b| match (is_all_digits(a), is_all_digits(b)) {
        (true, true) => numeric_cmp(a, b),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => locale_cmp(a, b),
    });
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn numeric_cmp(a: &str, b: &str) -> Ordering {
    match (a.parse::<u128>(), b.parse::<u128>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        // Out-of-range digit runs: magnitude follows length
        _ => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
    }
}

/// Case-insensitive comparison with a byte-order tiebreak, so ordering stays
/// deterministic across runs and hosts.
fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_key_passes_identifiers() {
        assert_eq!(safe_key("primary"), "primary");
        assert_eq!(safe_key("font_weight"), "font_weight");
        assert_eq!(safe_key("$base"), "$base");
    }

    #[test]
    fn test_safe_key_quotes_unsafe() {
        assert_eq!(safe_key("2xl"), "'2xl'");
        assert_eq!(safe_key("font-size"), "'font-size'");
        assert_eq!(safe_key("10"), "'10'");
    }

    #[test]
    fn test_camel_case_key_moves_leading_digits() {
        assert_eq!(camel_case_key("2xl"), "xl2");
        assert_eq!(camel_case_key("10"), "10");
        assert_eq!(camel_case_key("3xs-wide"), "xs-wide3");
    }

    #[test]
    fn test_camel_case_key_reorder_round_trips() {
        for key in ["2xl", "3xs", "10grid", "4"] {
            let display = camel_case_key(key);
            let digits_start = display
                .rfind(|c: char| !c.is_ascii_digit())
                .map(|i| i + 1)
                .unwrap_or(0);
            let reassembled = format!("{}{}", &display[digits_start..], &display[..digits_start]);
            assert_eq!(reassembled, key);
        }
    }

    #[test]
    fn test_camel_case_key_camel_cases_separators() {
        assert_eq!(camel_case_key("font-size"), "fontSize");
        assert_eq!(camel_case_key("font_weight"), "fontWeight");
        assert_eq!(camel_case_key("a-b-c"), "aBC");
        assert_eq!(camel_case_key("trailing-"), "trailing");
    }

    #[test]
    fn test_camel_case_key_strips_leftovers() {
        assert_eq!(camel_case_key("a--b"), "ab");
        assert_eq!(camel_case_key("base.size"), "basesize");
        assert_eq!(camel_case_key("$cash"), "cash");
    }

    #[test]
    fn test_raw_key_quotes_digit_leading() {
        // Asymmetry with camel_case_key: quoted, not reordered
        assert_eq!(raw_key("2xl"), "'2xl'");
        assert_eq!(raw_key("font-size"), "'font-size'");
        assert_eq!(raw_key("font_weight"), "fontWeight");
        assert_eq!(raw_key("primary"), "primary");
    }

    #[test]
    fn test_sort_keys_numeric_last_ascending() {
        let mut keys = vec!["20", "base", "10", "white", "5"];
        sort_keys(&mut keys);
        assert_eq!(keys, vec!["base", "white", "5", "10", "20"]);
    }

    #[test]
    fn test_sort_keys_ignores_insertion_order() {
        let mut a = vec!["sm", "xs", "lg"];
        let mut b = vec!["lg", "sm", "xs"];
        sort_keys(&mut a);
        sort_keys(&mut b);
        assert_eq!(a, b);
        assert_eq!(a, vec!["lg", "sm", "xs"]);
    }

    #[test]
    fn test_sort_keys_case_insensitive() {
        let mut keys = vec!["Zebra", "apple", "Mango"];
        sort_keys(&mut keys);
        assert_eq!(keys, vec!["apple", "Mango", "Zebra"]);
    }
}
