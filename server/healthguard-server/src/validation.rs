//! Request validation utilities shared by the handlers
//!
//! Payload types implement [`RequestValidation`]; the macros below keep the
//! error messages and field attribution uniform.

use crate::error::ApiError;

/// Trait for validating request payloads before they are converted into
/// engine input
pub trait RequestValidation {
    /// Returns `Err(ApiError::Validation)` naming the first failing field
    fn validate(&self) -> Result<(), ApiError>;
}

/// Fail with a field-attributed validation error unless `$predicate` holds
///
/// ```rust,ignore
/// validate_field!("age", age >= 1, "age must be at least 1");
/// ```
#[macro_export]
macro_rules! validate_field {
    ($field:expr, $predicate:expr, $message:expr) => {
        if !$predicate {
            return Err($crate::error::ApiError::field($field, $message));
        }
    };
}

/// Fail unless an optional field was supplied
///
/// ```rust,ignore
/// validate_present!("gender", self.gender, "gender is required");
/// ```
#[macro_export]
macro_rules! validate_present {
    ($field:expr, $value:expr, $message:expr) => {
        $crate::validate_field!($field, $value.is_some(), $message);
    };
}

/// Fail unless a numeric value lies within `$min..=$max`
#[macro_export]
macro_rules! validate_range {
    ($field:expr, $value:expr, $min:expr, $max:expr, $message:expr) => {
        $crate::validate_field!($field, ($min..=$max).contains(&$value), $message);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRequest {
        name: Option<String>,
        age: i64,
    }

    impl RequestValidation for TestRequest {
        fn validate(&self) -> Result<(), ApiError> {
            validate_present!("name", self.name, "name is required");
            validate_range!("age", self.age, 1, 150, "age must be between 1 and 150");
            Ok(())
        }
    }

    #[test]
    fn test_validation_success() {
        let request = TestRequest {
            name: Some("Asha".to_string()),
            age: 30,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validation_missing_field() {
        let request = TestRequest { name: None, age: 30 };
        match request.validate() {
            Err(ApiError::Validation { field_errors: Some(fields), .. }) => {
                assert!(fields.contains_key("name"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_validation_age_out_of_range() {
        let request = TestRequest {
            name: Some("Asha".to_string()),
            age: 0,
        };
        assert!(request.validate().is_err());
    }
}
