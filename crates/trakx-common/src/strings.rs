//! String helpers.

use std::collections::HashSet;

/// Splits a comma separated list into trimmed, lowercased, distinct entries.
///
/// Empty entries are dropped and the first occurrence of each value keeps its
/// position. Blank input gives an empty list.
pub fn split_csv_to_lowercase_distinct(csv: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    csv.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// Uppercases the first character, leaving the rest untouched.
pub fn first_char_to_upper(input: Option<&str>) -> Option<String> {
    let input = input?;
    let mut chars = input.chars();
    Some(match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    })
}

/// Lowercase hexadecimal rendering of `bytes`, without separators.
pub fn to_hex_string(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Percent-encodes everything but RFC 3986 unreserved characters.
pub fn url_encode(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_handles_blank_input() {
        assert!(split_csv_to_lowercase_distinct(" ").is_empty());
        assert!(split_csv_to_lowercase_distinct("").is_empty());
        assert!(split_csv_to_lowercase_distinct("\t").is_empty());
        assert!(split_csv_to_lowercase_distinct(" , ,").is_empty());
    }

    #[test]
    fn split_csv_trims_and_lowercases() {
        assert_eq!(
            split_csv_to_lowercase_distinct("\tabc, dEf, ghi,HELLO "),
            vec!["abc", "def", "ghi", "hello"]
        );
    }

    #[test]
    fn split_csv_removes_duplicates() {
        assert_eq!(
            split_csv_to_lowercase_distinct("\tabc, def, ghi,GHI,Abc,hello "),
            vec!["abc", "def", "ghi", "hello"]
        );
    }

    #[test]
    fn first_char_to_upper_cases() {
        let cases = [
            (None, None),
            (Some(""), Some("")),
            (Some("a"), Some("A")),
            (Some("A"), Some("A")),
            (Some("1"), Some("1")),
            (Some("_a"), Some("_a")),
            (Some("AbC"), Some("AbC")),
            (Some("def"), Some("Def")),
            (Some("1bc"), Some("1bc")),
            (Some("éa"), Some("Éa")),
        ];
        for (input, expected) in cases {
            assert_eq!(
                first_char_to_upper(input).as_deref(),
                expected,
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn hex_and_url_encoding() {
        assert_eq!(to_hex_string(&[0x00, 0xAB, 0x10, 0xff]), "00ab10ff");
        assert_eq!(to_hex_string(&[]), "");
        assert_eq!(url_encode("a b&c=d/é"), "a%20b%26c%3Dd%2F%C3%A9");
        assert_eq!(url_encode("safe-_.~"), "safe-_.~");
    }
}
