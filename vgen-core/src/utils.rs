//! Shared string utilities for naming generated code.

/// Capitalize every whitespace-separated word: first character upper-cased,
/// the rest lower-cased (e.g., "productITEM" -> "Productitem").
///
/// Whitespace is preserved verbatim.
pub fn capitalize(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            at_word_start = false;
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

/// Naive plural used for table names and route segments (e.g., "product" -> "products").
///
/// Irregular plurals are not handled: "category" -> "categorys".
pub fn pluralize(s: &str) -> String {
    format!("{}s", s)
}

/// Check whether `s` can be used verbatim as a Swift identifier.
///
/// Accepts ASCII letters, digits and `_`, not starting with a digit.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        None => false,
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => false,
        Some(_) => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("product"), "Product");
        assert_eq!(capitalize("Product"), "Product");
        assert_eq!(capitalize("PRODUCT"), "Product");
        assert_eq!(capitalize("productItem"), "Productitem");
        assert_eq!(capitalize("blog post"), "Blog Post");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("product"), "products");
        assert_eq!(pluralize("category"), "categorys");
        assert_eq!(pluralize(""), "s");
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("title"));
        assert!(is_valid_identifier("inStock"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("field2"));

        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2fast"));
        assert!(!is_valid_identifier("first-name"));
        assert!(!is_valid_identifier("blog post"));
        assert!(!is_valid_identifier("price$"));
    }
}
