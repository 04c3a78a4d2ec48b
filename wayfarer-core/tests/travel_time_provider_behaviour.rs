//! Behavioural tests for `TravelTimeProvider` implementations.

use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use std::time::Duration;
use wayfarer_core::{
    HaversineTravelTime, PointOfInterest, TravelTimeError, TravelTimeProvider, minutes_between,
};

#[fixture]
fn provider() -> HaversineTravelTime {
    HaversineTravelTime
}

#[fixture]
fn result() -> RefCell<Result<Vec<Vec<Duration>>, TravelTimeError>> {
    RefCell::new(Ok(Vec::new()))
}

#[given("a great-circle travel-time provider")]
fn given_provider(
    #[from(provider)] _provider: &HaversineTravelTime,
    #[from(result)] result: &RefCell<Result<Vec<Vec<Duration>>, TravelTimeError>>,
) {
    *result.borrow_mut() = Ok(Vec::new());
}

#[when("I request travel times for two stops fifteen kilometres apart")]
fn request_two(
    #[from(provider)] provider: &HaversineTravelTime,
    #[from(result)] result: &RefCell<Result<Vec<Vec<Duration>>, TravelTimeError>>,
) {
    // 0.135 degrees of latitude is just over 15 km.
    let pois = vec![
        PointOfInterest::new(1, Coord { x: 77.2, y: 28.6 }),
        PointOfInterest::new(2, Coord { x: 77.2, y: 28.735 }),
    ];
    *result.borrow_mut() = provider.get_travel_time_matrix(&pois);
}

#[when("I request travel times for no stops")]
fn request_none(
    #[from(provider)] provider: &HaversineTravelTime,
    #[from(result)] result: &RefCell<Result<Vec<Vec<Duration>>, TravelTimeError>>,
) {
    let pois: Vec<PointOfInterest> = Vec::new();
    *result.borrow_mut() = provider.get_travel_time_matrix(&pois);
}

#[then("a 2x2 matrix is returned")]
fn then_matrix(#[from(result)] result: &RefCell<Result<Vec<Vec<Duration>>, TravelTimeError>>) {
    let borrow = result.borrow();
    let matrix = borrow.as_ref().expect("expected Ok result");
    assert_eq!(matrix.len(), 2);
    assert!(matrix.iter().all(|row| row.len() == 2));
}

#[then("the transfer takes an hour each way")]
fn then_hour(#[from(result)] result: &RefCell<Result<Vec<Vec<Duration>>, TravelTimeError>>) {
    let borrow = result.borrow();
    let matrix = borrow.as_ref().expect("expected Ok result");
    assert_eq!(minutes_between(matrix, 0, 1), 60);
    assert_eq!(minutes_between(matrix, 1, 0), 60);
    assert_eq!(minutes_between(matrix, 0, 0), 0);
}

#[then("an error is returned")]
fn then_error(#[from(result)] result: &RefCell<Result<Vec<Vec<Duration>>, TravelTimeError>>) {
    assert!(result.borrow().is_err(), "expected an error");
}

#[scenario(path = "tests/features/travel_time_provider.feature", index = 0)]
fn matrix_returned(
    provider: HaversineTravelTime,
    result: RefCell<Result<Vec<Vec<Duration>>, TravelTimeError>>,
) {
    let _ = (provider, result);
}

#[scenario(path = "tests/features/travel_time_provider.feature", index = 1)]
fn error_on_empty(
    provider: HaversineTravelTime,
    result: RefCell<Result<Vec<Vec<Duration>>, TravelTimeError>>,
) {
    let _ = (provider, result);
}
