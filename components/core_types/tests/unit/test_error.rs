//! Unit tests for JsError and ErrorKind

use core_types::{ErrorKind, JsError, Value};

#[cfg(test)]
mod error_kind_tests {
    use super::*;

    #[test]
    fn test_error_kind_equality() {
        assert_eq!(ErrorKind::SyntaxError, ErrorKind::SyntaxError);
        assert_eq!(ErrorKind::SyntaxError.name(), "SyntaxError");
    }

    #[test]
    fn test_error_kind_debug() {
        let debug_str = format!("{:?}", ErrorKind::SyntaxError);
        assert!(debug_str.contains("SyntaxError"));
    }
}

#[cfg(test)]
mod js_error_tests {
    use super::*;

    #[test]
    fn test_js_error_constructors() {
        assert_eq!(JsError::syntax_error("x").kind, ErrorKind::SyntaxError);
        assert_eq!(JsError::new(ErrorKind::SyntaxError, "x"), JsError::syntax_error("x"));
    }

    #[test]
    fn test_js_error_message_kept() {
        let error = JsError::new(ErrorKind::SyntaxError, "Unexpected token");
        assert_eq!(error.message, "Unexpected token");
        assert_eq!(error.to_string(), "SyntaxError: Unexpected token");
    }

    #[test]
    fn test_js_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(JsError::syntax_error("bad flags"));
        assert_eq!(error.to_string(), "SyntaxError: bad flags");
    }

    #[test]
    fn test_invalid_regexp_raises_syntax_error() {
        let error = Value::regexp("[a-", "").unwrap_err();
        assert_eq!(error.kind, ErrorKind::SyntaxError);
        assert!(error.message.contains("Invalid regular expression"));
    }

    #[test]
    fn test_unicode_sets_flag_accepted() {
        let re = Value::regexp("[a-z]", "v").unwrap();
        assert_eq!(re.to_string(), "/[a-z]/v");
        assert!(Value::regexp("a", "uv").is_err());
    }

    #[test]
    fn test_invalid_regexp_flags_raise_syntax_error() {
        let error = Value::regexp("a", "gx").unwrap_err();
        assert_eq!(error.kind, ErrorKind::SyntaxError);
        assert!(error.message.contains("flags"));
    }
}
