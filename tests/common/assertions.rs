//! Custom assertion macros for decode results
//!
//! Wrap the common checks on `Result<_, DecodeError>` so test failures show
//! the offending error instead of a bare `unwrap` panic.

/// Assert that a decode succeeded and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {}", $message, e),
        }
    };
}

/// Assert that a decode failed with a given error pattern
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        assert!($result.is_err(), "Expected Err, got Ok");
    };
    ($result:expr, $pattern:pat) => {
        match $result {
            Err($pattern) => {}
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => panic!("Expected different error variant, got: {:?}", e),
        }
    };
}

/// Assert that a decode failed on a mandatory field at the given path
#[macro_export]
macro_rules! assert_missing_field {
    ($result:expr, $resource:expr, $path:expr) => {
        match $result {
            Err(social_api_model::shared::error::DecodeError::MissingMandatoryField {
                resource,
                field,
            }) => {
                assert_eq!(resource, $resource);
                assert_eq!(field, $path);
            }
            Ok(value) => panic!("Expected MissingMandatoryField, got Ok: {:?}", value),
            Err(e) => panic!("Expected MissingMandatoryField, got: {:?}", e),
        }
    };
}

/// Assert that a decode failed on a malformed field and return its raw value
#[macro_export]
macro_rules! assert_malformed_field {
    ($result:expr, $path:expr) => {
        match $result {
            Err(social_api_model::shared::error::DecodeError::MalformedField {
                field, raw, ..
            }) => {
                assert_eq!(field, $path);
                raw
            }
            Ok(value) => panic!("Expected MalformedField, got Ok: {:?}", value),
            Err(e) => panic!("Expected MalformedField, got: {:?}", e),
        }
    };
}

/// Assert that two floats are approximately equal
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {
        let diff: f64 = ($left - $right).abs();
        assert!(
            diff < $epsilon,
            "Values are not approximately equal: {} vs {} (diff: {})",
            $left,
            $right,
            diff
        );
    };
}
