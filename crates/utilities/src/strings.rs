//! String helpers. All operate on `char`s, not bytes.

pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// Spaces are ignored and comparison is case-insensitive.
pub fn is_palindrome(input: &str) -> bool {
    let cleaned: Vec<char> = input
        .chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// Number of non-empty, space-separated words.
pub fn word_count(input: &str) -> usize {
    input.split(' ').filter(|w| !w.is_empty()).count()
}

pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_strings() {
        assert_eq!(reverse("hello"), "olleh");
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("añb"), "bña");
    }

    #[test]
    fn palindromes() {
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("A man a plan a canal Panama"));
        assert!(!is_palindrome("hello"));
        assert!(is_palindrome(""));
    }

    #[test]
    fn word_counts() {
        for (input, expected) in [
            ("hello world", 2),
            ("one", 1),
            ("  spaced   out  ", 2),
            ("", 0),
            ("   ", 0),
        ] {
            assert_eq!(word_count(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("world"), "World");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn reversing_twice_is_identity(s in ".{0,64}") {
                prop_assert_eq!(reverse(&reverse(&s)), s);
            }

            #[test]
            fn word_and_reverse_are_palindromes(s in "[a-z ]{0,32}") {
                let mirrored = format!("{s}{}", reverse(&s));
                prop_assert!(is_palindrome(&mirrored));
            }
        }
    }
}
