//! Behavioural tests for the day-schedule overlap validator.

use chrono::NaiveDate;
use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use wayfarer_core::{
    DaySchedule, PointOfInterest, ScheduleConflict, ScheduledVisit, TimeOfDay, TimeSlot,
};

#[derive(Default)]
struct World {
    visits: RefCell<Vec<ScheduledVisit>>,
    outcome: RefCell<Option<Result<(), ScheduleConflict>>>,
}

#[fixture]
fn world() -> World {
    World::default()
}

fn book(world: &World, id: u64, hour: u32, length: u32) {
    world.visits.borrow_mut().push(ScheduledVisit::new(
        PointOfInterest::new(id, Coord { x: 0.0, y: 0.0 }),
        TimeSlot::starting_at(TimeOfDay::from_hm(hour, 0), length),
    ));
}

#[given("a ninety minute visit booked at nine")]
fn long_morning_visit(world: &World) {
    book(world, 1, 9, 90);
}

#[given("an hour visit booked at ten")]
fn visit_at_ten(world: &World) {
    book(world, 2, 10, 60);
}

#[given("an hour visit booked at eleven")]
fn visit_at_eleven(world: &World) {
    book(world, 3, 11, 60);
}

#[when("the day is validated")]
fn validate(world: &World) {
    let date = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
    let day = DaySchedule::new(date, world.visits.borrow().clone());
    *world.outcome.borrow_mut() = Some(day.validate());
}

#[then("the day is accepted")]
fn accepted(world: &World) {
    let outcome = world.outcome.borrow();
    assert_eq!(outcome.as_ref(), Some(&Ok(())));
}

#[then("a conflict between the first two visits is reported")]
fn conflict(world: &World) {
    let outcome = world.outcome.borrow();
    let Some(Err(found)) = outcome.as_ref() else {
        panic!("expected a conflict, got {outcome:?}");
    };
    assert_eq!((found.first, found.second), (1, 2));
}

#[scenario(path = "tests/features/day_schedule.feature", index = 0)]
fn back_to_back_visits(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/day_schedule.feature", index = 1)]
fn overlapping_visits(world: World) {
    let _ = world;
}
