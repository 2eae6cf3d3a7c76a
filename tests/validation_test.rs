use devstart::error::{Error, NameError};
use devstart::validation::{derive_package_name, validate_name, validate_python_version};

fn rejection_reason(name: &str) -> NameError {
    match validate_name(name) {
        Err(Error::InvalidName { reason, .. }) => reason,
        other => panic!("expected InvalidName for '{}', got {:?}", name, other),
    }
}

#[test]
fn test_accepts_valid_identifiers() {
    for name in ["myproject", "my_project", "_private", "snake_case_2", "CamelCase"] {
        assert_eq!(validate_name(name).unwrap(), name);
    }
}

#[test]
fn test_rejects_empty_and_whitespace() {
    assert_eq!(rejection_reason(""), NameError::Empty);
    assert_eq!(rejection_reason("   "), NameError::Empty);
    assert_eq!(rejection_reason("\t\n"), NameError::Empty);
}

#[test]
fn test_rejects_invalid_identifier_syntax() {
    for name in ["my-project", "my project", "9project", "a.b", "src/evil", "pkg\\evil", "héllo", "日本語"] {
        assert_eq!(rejection_reason(name), NameError::InvalidIdentifier, "name: {:?}", name);
    }
}

#[test]
fn test_rejects_python_keywords() {
    for name in ["class", "import", "return", "async", "True", "None", "lambda"] {
        assert_eq!(rejection_reason(name), NameError::Keyword, "name: {:?}", name);
    }
}

#[test]
fn test_rejects_dunder_names() {
    for name in ["__main__", "__init__", "__my_project__"] {
        assert_eq!(rejection_reason(name), NameError::Dunder, "name: {:?}", name);
    }
}

#[test]
fn test_rejects_stdlib_and_reserved_names() {
    for name in ["json", "os", "sys", "logging", "tomllib", "test", "tests", "setup", "site"] {
        assert_eq!(rejection_reason(name), NameError::ReservedModule, "name: {:?}", name);
    }
}

#[test]
fn test_single_underscore_is_valid() {
    // starts and ends with an underscore but is not dunder-shaped
    assert!(validate_name("_").is_ok());
}

#[test]
fn test_derive_package_name_sanitizes() {
    assert_eq!(derive_package_name("my-app", "fallback"), "my_app");
    assert_eq!(derive_package_name("My App 2", "fallback"), "My_App_2");
    assert_eq!(derive_package_name("plain", "fallback"), "plain");
}

#[test]
fn test_derive_package_name_corrects_leading_digit() {
    assert_eq!(derive_package_name("3demo", "fallback"), "_3demo");
    assert_eq!(derive_package_name("9project", "fallback"), "_9project");
}

#[test]
fn test_derive_package_name_falls_back_when_empty() {
    assert_eq!(derive_package_name("", "fallback"), "fallback");
}

#[test]
fn test_python_version_format() {
    assert!(validate_python_version("3.14").is_ok());
    assert!(validate_python_version("3.9").is_ok());
    assert!(validate_python_version("10.0").is_ok());

    for version in ["3", "3.x", "3.14.1", "py3.14", "", "3."] {
        assert!(
            matches!(
                validate_python_version(version),
                Err(Error::InvalidPythonVersion { .. })
            ),
            "version: {:?}",
            version
        );
    }
}
