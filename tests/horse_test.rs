use hippodrome::domain::model::{MAX_STRIDE_FACTOR, MIN_STRIDE_FACTOR};
use hippodrome::{HippodromeError, Horse};

#[test]
fn test_null_name_rejected() {
    let err = Horse::with_distance(None, 1.0, 1.0).unwrap_err();
    assert!(matches!(err, HippodromeError::NullName));
    assert_eq!(err.to_string(), "Name cannot be null.");
}

#[test]
fn test_blank_names_rejected() {
    for name in ["", " ", "\t", "  \n "] {
        let err = Horse::with_distance(name, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, HippodromeError::BlankName), "name {:?}", name);
        assert_eq!(err.to_string(), "Name cannot be blank.");
    }
}

#[test]
fn test_negative_speed_rejected() {
    let err = Horse::with_distance("Name", -1.0, 1.0).unwrap_err();
    assert!(matches!(err, HippodromeError::NegativeSpeed));
    assert_eq!(err.to_string(), "Speed cannot be negative.");
}

#[test]
fn test_negative_distance_rejected() {
    let err = Horse::with_distance("Name", 1.0, -1.0).unwrap_err();
    assert!(matches!(err, HippodromeError::NegativeDistance));
    assert_eq!(err.to_string(), "Distance cannot be negative.");
}

#[test]
fn test_negative_infinity_reported_as_negative() {
    let err = Horse::new("Name", f64::NEG_INFINITY).unwrap_err();
    assert_eq!(err.to_string(), "Speed cannot be negative.");

    let err = Horse::with_distance("Name", 1.0, f64::NEG_INFINITY).unwrap_err();
    assert_eq!(err.to_string(), "Distance cannot be negative.");
}

#[test]
fn test_nan_and_positive_infinity_rejected_as_non_finite() {
    let err = Horse::new("Name", f64::NAN).unwrap_err();
    assert_eq!(err.to_string(), "Speed must be a finite number.");

    let err = Horse::new("Name", f64::INFINITY).unwrap_err();
    assert_eq!(err.to_string(), "Speed must be a finite number.");

    let err = Horse::with_distance("Name", 1.0, f64::NAN).unwrap_err();
    assert_eq!(err.to_string(), "Distance must be a finite number.");
}

#[test]
fn test_accessors_return_constructor_values() {
    let horse = Horse::with_distance("Test", 1.5, 2.5).unwrap();
    assert_eq!(horse.name(), "Test");
    assert_eq!(horse.speed(), 1.5);
    assert_eq!(horse.distance(), 2.5);
}

#[test]
fn test_distance_defaults_to_zero() {
    let horse = Horse::new("Name", 1.0).unwrap();
    assert_eq!(horse.distance(), 0.0);
}

#[test]
fn test_advance_requests_stride_range() {
    let mut requested = Vec::new();
    let mut horse = Horse::new("Name", 10.0).unwrap();

    horse.advance(&mut |min: f64, max: f64| {
        requested.push((min, max));
        0.5
    });

    assert_eq!(requested, vec![(0.2, 0.9)]);
    assert_eq!((MIN_STRIDE_FACTOR, MAX_STRIDE_FACTOR), (0.2, 0.9));
}

#[test]
fn test_advance_applies_distance_formula() {
    for value in [0.2, 0.5, 0.9] {
        let initial_speed = 10.0;
        let initial_distance = 5.0;
        let mut horse = Horse::with_distance("Name", initial_speed, initial_distance).unwrap();

        horse.advance(&mut |_: f64, _: f64| value);

        let expected = initial_distance + initial_speed * value;
        assert_eq!(horse.distance(), expected, "random value {}", value);
    }
}

#[test]
fn test_advance_with_half_from_five_reaches_ten() {
    let mut horse = Horse::with_distance("Name", 10.0, 5.0).unwrap();
    horse.advance(&mut |_: f64, _: f64| 0.5);
    assert_eq!(horse.distance(), 10.0);
}

#[test]
fn test_advance_keeps_name_and_speed() {
    let mut horse = Horse::new("Name", 3.0).unwrap();
    horse.advance(&mut |_: f64, _: f64| 0.4);
    horse.advance(&mut |_: f64, _: f64| 0.4);
    assert_eq!(horse.name(), "Name");
    assert_eq!(horse.speed(), 3.0);
    assert!((horse.distance() - 2.4).abs() < 1e-12);
}
