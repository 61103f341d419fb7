//! Boolean-mode full-text query construction.

/// Characters with syntactic meaning in boolean-mode full-text grammar.
const OPERATOR_CHARS: &[char] = &['+', '-', '<', '>', '(', ')', '~', '"', '*'];

/// Turns free-text input into a sanitized boolean-mode query string.
///
/// Each whitespace-separated token is stripped of operator characters and
/// rendered as a required prefix match (`+token*`). When every token is
/// stripped to nothing the original input is returned unchanged so the
/// caller never silently matches everything with an empty query.
pub fn build_boolean_query(input: &str) -> String {
    let terms: Vec<String> = input
        .split_whitespace()
        .filter_map(|token| {
            let cleaned: String = token.chars().filter(|c| !OPERATOR_CHARS.contains(c)).collect();
            if cleaned.is_empty() {
                None
            } else {
                Some(format!("+{cleaned}*"))
            }
        })
        .collect();

    if terms.is_empty() {
        input.to_string()
    } else {
        terms.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_required_prefix_terms() {
        assert_eq!(build_boolean_query("hello world"), "+hello* +world*");
    }

    #[test]
    fn strips_operator_characters() {
        assert_eq!(build_boolean_query("a\"b"), "+ab*");
        assert_eq!(build_boolean_query("(steel) +rod*"), "+steel* +rod*");
    }

    #[test]
    fn collapses_extra_whitespace() {
        assert_eq!(build_boolean_query("  alpha \t beta  "), "+alpha* +beta*");
    }

    #[test]
    fn all_stripped_input_falls_back_to_original() {
        assert_eq!(build_boolean_query("+-<>()~\"*"), "+-<>()~\"*");
        assert_eq!(build_boolean_query(""), "");
    }

    #[test]
    fn is_deterministic() {
        let input = "a +b c\"d";
        assert_eq!(build_boolean_query(input), build_boolean_query(input));
    }
}
