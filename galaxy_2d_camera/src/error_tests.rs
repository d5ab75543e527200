//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_degenerate_bounds_display() {
    let err = Error::DegenerateBounds("right == left (0)".to_string());
    let display = format!("{}", err);
    assert!(display.starts_with("Degenerate bounds"));
    assert!(display.contains("right == left (0)"));
}

#[test]
fn test_singular_transform_display() {
    let err = Error::SingularTransform("scale.y is 0".to_string());
    assert_eq!(format!("{}", err), "Singular transform: scale.y is 0");
}

#[test]
fn test_invalid_parameter_display() {
    let err = Error::InvalidParameter("zoom must be > 0, got -2".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid parameter"));
    assert!(display.contains("-2"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::DegenerateBounds("far == near".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug_names_variant() {
    assert!(format!("{:?}", Error::DegenerateBounds("x".into())).contains("DegenerateBounds"));
    assert!(format!("{:?}", Error::SingularTransform("x".into())).contains("SingularTransform"));
    assert!(format!("{:?}", Error::InvalidParameter("x".into())).contains("InvalidParameter"));
}

#[test]
fn test_error_clone_and_eq() {
    let err = Error::SingularTransform("scale.x is 0".to_string());
    assert_eq!(err.clone(), err);
    assert_ne!(err, Error::InvalidParameter("scale.x is 0".to_string()));
}

// ============================================================================
// RESULT TYPE TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<f64> {
        Err(Error::DegenerateBounds("bottom == top".to_string()))
    }

    fn outer() -> Result<f64> {
        let value = inner()?;
        Ok(value * 2.0)
    }

    match outer() {
        Err(Error::DegenerateBounds(msg)) => assert_eq!(msg, "bottom == top"),
        other => panic!("unexpected result: {:?}", other),
    }
}
