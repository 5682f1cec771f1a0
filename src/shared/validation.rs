use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationErrors;

lazy_static! {
    /// Regex for validating employee codes
    /// Letters, digits, hyphens and underscores, 1 to 50 characters
    /// - Valid: "E0001", "sato_k", "dev-01"
    /// - Invalid: "", "sato k", "佐藤", "a@b"
    pub static ref EMPLOYEE_CODE_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_-]{1,50}$").unwrap();
}

/// Flatten validator errors into display messages.
///
/// `fields` pairs each form field with the message shown when it fails, in
/// the order messages appear on the form. Failing fields not listed are
/// appended afterwards in name order, using their own message or error code.
pub fn error_messages(errors: &ValidationErrors, fields: &[(&str, &str)]) -> Vec<String> {
    let field_errors = errors.field_errors();

    let mut messages: Vec<String> = fields
        .iter()
        .filter(|(name, _)| field_errors.contains_key(*name))
        .map(|(_, message)| message.to_string())
        .collect();

    let mut rest: Vec<&str> = field_errors
        .keys()
        .map(|k| &**k)
        .filter(|k| !fields.iter().any(|(name, _)| name == k))
        .collect();
    rest.sort_unstable();

    messages.extend(
        rest.into_iter()
            .filter_map(|name| field_errors.get(name))
            .flat_map(|errs| errs.iter())
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            }),
    );

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use validator::ValidationError;

    #[test]
    fn test_employee_code_regex_valid() {
        assert!(EMPLOYEE_CODE_REGEX.is_match("E0001"));
        assert!(EMPLOYEE_CODE_REGEX.is_match("sato_k"));
        assert!(EMPLOYEE_CODE_REGEX.is_match("dev-01"));
        assert!(EMPLOYEE_CODE_REGEX.is_match(&"a".repeat(50)));
    }

    #[test]
    fn test_employee_code_regex_invalid() {
        assert!(!EMPLOYEE_CODE_REGEX.is_match(""));
        assert!(!EMPLOYEE_CODE_REGEX.is_match("sato k")); // space
        assert!(!EMPLOYEE_CODE_REGEX.is_match("a@b"));
        assert!(!EMPLOYEE_CODE_REGEX.is_match(&"a".repeat(51)));
    }

    #[test]
    fn test_error_messages_follow_field_order() {
        let mut errors = ValidationErrors::new();
        errors.add("content", ValidationError::new("length"));
        errors.add("title", ValidationError::new("length"));
        errors.add(
            "zzz",
            ValidationError::new("custom").with_message(Cow::Borrowed("own message")),
        );
        errors.add("yyy", ValidationError::new("custom_code"));

        let messages = error_messages(
            &errors,
            &[
                ("date", "date msg"),
                ("title", "title msg"),
                ("content", "content msg"),
            ],
        );
        assert_eq!(
            messages,
            vec!["title msg", "content msg", "custom_code", "own message"]
        );
    }
}
