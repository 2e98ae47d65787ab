//! Text helpers for detail display values.

use crate::raw::NOT_AVAILABLE;

/// Capitalize the first alphanumeric character of every whitespace-separated
/// word, leaving the rest of the word untouched.
///
/// `"euro"` becomes `"Euro"`, `"united states dollar"` becomes
/// `"United States Dollar"`, `"(old) franc"` becomes `"(Old) Franc"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            in_word = false;
            out.push(ch);
        } else if !in_word && ch.is_alphanumeric() {
            in_word = true;
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Join display values with `", "`, or `"N/A"` when there are none.
pub fn join_or_not_available<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = values
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("euro"), "Euro");
        assert_eq!(title_case("united states dollar"), "United States Dollar");
        assert_eq!(title_case("Swiss franc"), "Swiss Franc");
    }

    #[test]
    fn title_case_skips_leading_punctuation() {
        assert_eq!(title_case("(old) franc"), "(Old) Franc");
    }

    #[test]
    fn title_case_keeps_rest_of_word_and_spacing() {
        assert_eq!(title_case("cfa  franc bceao"), "Cfa  Franc Bceao");
        assert_eq!(title_case("new zealand dollar"), "New Zealand Dollar");
        assert_eq!(title_case("écu"), "Écu");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn join_uses_comma_space() {
        assert_eq!(join_or_not_available(["Euro", "Swiss Franc"]), "Euro, Swiss Franc");
    }

    #[test]
    fn join_of_nothing_is_not_available() {
        assert_eq!(join_or_not_available(Vec::<String>::new()), "N/A");
    }
}
