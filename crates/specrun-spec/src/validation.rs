//! Spec type name validation.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::spec::SpecType;

/// Regex pattern for valid spec type names.
/// Format: `::`-separated path segments, each starting with a letter or
/// underscore, followed by letters, digits, or underscores.
const SPEC_NAME_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$";

static SPEC_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn spec_name_regex() -> &'static Regex {
    SPEC_NAME_REGEX.get_or_init(|| Regex::new(SPEC_NAME_PATTERN).expect("invalid regex pattern"))
}

/// Errors produced by spec type validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecTypeError {
    /// The descriptor has an empty name.
    #[error("spec type name is empty")]
    EmptyName,
    /// The name is not a valid type path.
    #[error("invalid spec type name: '{0}'")]
    InvalidName(String),
}

/// Checks if a spec type name is valid.
///
/// # Arguments
/// * `name` - The name to validate
///
/// # Returns
/// * `true` if the name is a valid type path, `false` otherwise.
pub fn is_valid_spec_name(name: &str) -> bool {
    spec_name_regex().is_match(name)
}

/// Validates a spec type descriptor.
///
/// Descriptors come from the scanner; a malformed name would make every
/// downstream report and failure message ambiguous, so hosts validate
/// before starting a batch.
pub fn validate_spec_type(spec_type: &SpecType) -> Result<(), SpecTypeError> {
    let name = spec_type.name();
    if name.is_empty() {
        return Err(SpecTypeError::EmptyName);
    }
    if !is_valid_spec_name(name) {
        return Err(SpecTypeError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_spec_names() {
        for name in [
            "FooSpec",
            "snake_case_spec",
            "_Internal",
            "tests::FooSpec",
            "my_crate::nested::module::BarSpec",
            "Spec2",
        ] {
            assert!(is_valid_spec_name(name), "expected valid: {}", name);
        }
    }

    #[test]
    fn test_invalid_spec_names() {
        for name in [
            "",
            "2Spec",
            "Foo-Spec",
            "Foo Spec",
            "foo::",
            "::FooSpec",
            "foo::::Bar",
        ] {
            assert!(!is_valid_spec_name(name), "expected invalid: {}", name);
        }
    }

    #[test]
    fn test_validate_spec_type_ok() {
        let spec_type = SpecType::named("tests::FooSpec");
        assert!(validate_spec_type(&spec_type).is_ok());
    }

    #[test]
    fn test_validate_spec_type_empty_name() {
        let spec_type = SpecType::named("");
        assert_eq!(validate_spec_type(&spec_type), Err(SpecTypeError::EmptyName));
    }

    #[test]
    fn test_validate_spec_type_invalid_name() {
        let spec_type = SpecType::named("Foo Spec");
        assert_eq!(
            validate_spec_type(&spec_type),
            Err(SpecTypeError::InvalidName("Foo Spec".to_string()))
        );
    }
}
