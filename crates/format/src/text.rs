//! camelCase identifier to display label conversion.

/// Converts a camelCase identifier into a space-separated, capitalized
/// phrase.
///
/// The first character is uppercased; every later uppercase character is
/// replaced by a space plus its lowercase form; everything else passes
/// through unchanged. `"myFieldName"` becomes `"My field name"`.
pub fn camel_case_to_words(identifier: &str) -> String {
    let mut words = String::with_capacity(identifier.len() + 4);
    for ch in identifier.chars() {
        if words.is_empty() {
            words.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            words.push(' ');
            words.extend(ch.to_lowercase());
        } else {
            words.push(ch);
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_camel_case_words() {
        assert_eq!(camel_case_to_words("myFieldName"), "My field name");
        assert_eq!(camel_case_to_words("blockStart"), "Block start");
    }

    #[test]
    fn single_word_is_capitalized() {
        assert_eq!(camel_case_to_words("id"), "Id");
        assert_eq!(camel_case_to_words("name"), "Name");
    }

    #[test]
    fn already_capitalized_first_letter() {
        assert_eq!(camel_case_to_words("MyField"), "My field");
    }

    #[test]
    fn consecutive_uppercase_splits_each_letter() {
        assert_eq!(camel_case_to_words("parseURL"), "Parse u r l");
    }

    #[test]
    fn empty_input() {
        assert_eq!(camel_case_to_words(""), "");
    }

    #[test]
    fn lowercase_tail_passes_through() {
        assert_eq!(camel_case_to_words("academicYear2024"), "Academic year2024");
    }
}
