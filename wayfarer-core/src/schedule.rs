//! Day schedules, their overlap validator and the trip-level result.

use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PointOfInterest, TimeSlot};

/// A point of interest booked into a slot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduledVisit {
    /// The place being visited.
    pub poi: PointOfInterest,
    /// When the visit happens.
    pub slot: TimeSlot,
}

impl ScheduledVisit {
    /// Pair a point with its slot.
    #[must_use]
    pub const fn new(poi: PointOfInterest, slot: TimeSlot) -> Self {
        Self { poi, slot }
    }
}

/// Two visits on the same day whose slots overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("visit {first} at {first_slot} overlaps visit {second} at {second_slot}")]
pub struct ScheduleConflict {
    /// Identifier of the earlier-listed visit.
    pub first: u64,
    /// Slot of the earlier-listed visit.
    pub first_slot: TimeSlot,
    /// Identifier of the later-listed visit.
    pub second: u64,
    /// Slot of the later-listed visit.
    pub second_slot: TimeSlot,
}

/// One calendar day of visits, ordered by start time.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use geo::Coord;
/// use wayfarer_core::{DaySchedule, PointOfInterest, ScheduledVisit, TimeOfDay, TimeSlot};
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 20).expect("valid date");
/// let late = ScheduledVisit::new(
///     PointOfInterest::new(2, Coord { x: 0.0, y: 0.0 }),
///     TimeSlot::starting_at(TimeOfDay::from_hm(11, 0), 60),
/// );
/// let early = ScheduledVisit::new(
///     PointOfInterest::new(1, Coord { x: 0.0, y: 0.0 }),
///     TimeSlot::starting_at(TimeOfDay::from_hm(9, 0), 60),
/// );
/// let day = DaySchedule::new(date, vec![late, early]);
/// assert_eq!(day.visits()[0].poi.id, 1);
/// assert!(day.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DaySchedule {
    date: NaiveDate,
    visits: Vec<ScheduledVisit>,
}

impl DaySchedule {
    /// Build a schedule, sorting visits by start time. Equal starts keep
    /// their relative order.
    #[must_use]
    pub fn new(date: NaiveDate, mut visits: Vec<ScheduledVisit>) -> Self {
        visits.sort_by_key(|visit| visit.slot.start());
        Self { date, visits }
    }

    /// A day with nothing booked.
    #[must_use]
    pub const fn free_day(date: NaiveDate) -> Self {
        Self {
            date,
            visits: Vec::new(),
        }
    }

    /// Calendar date of the day.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Visits ordered by start time.
    #[must_use]
    pub fn visits(&self) -> &[ScheduledVisit] {
        &self.visits
    }

    /// Whether nothing is booked.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.visits.is_empty()
    }

    /// Slot booked for the point with `id`, if any.
    #[must_use]
    pub fn slot_for(&self, id: u64) -> Option<TimeSlot> {
        self.visits
            .iter()
            .find(|visit| visit.poi.id == id)
            .map(|visit| visit.slot)
    }

    /// Visits booked on a weekday their point is closed.
    ///
    /// Closures do not constrain scheduling; this list lets callers warn.
    pub fn closed_visits(&self) -> impl Iterator<Item = &ScheduledVisit> + '_ {
        self.visits
            .iter()
            .filter(move |visit| !visit.poi.is_open_on(self.date))
    }

    /// Check that no two visits overlap.
    ///
    /// # Errors
    ///
    /// Returns the first overlapping pair found.
    pub fn validate(&self) -> Result<(), ScheduleConflict> {
        for (index, first) in self.visits.iter().enumerate() {
            for second in self.visits.iter().skip(index.saturating_add(1)) {
                if first.slot.overlaps(&second.slot) {
                    return Err(ScheduleConflict {
                        first: first.poi.id,
                        first_slot: first.slot,
                        second: second.poi.id,
                        second_slot: second.slot,
                    });
                }
            }
        }
        Ok(())
    }
}

/// A day that could not hold every point routed to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartialSchedule {
    /// The overlap-free part of the day.
    pub schedule: DaySchedule,
    /// Points dropped from the day.
    pub unscheduled: Vec<PointOfInterest>,
    /// Whether conflict repair reached a fixed point before its pass cap.
    pub repair_converged: bool,
}

/// Result of scheduling one day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum DayOutcome {
    /// Every routed point received a slot.
    Complete(DaySchedule),
    /// Some points could not be placed.
    Partial(PartialSchedule),
}

impl DayOutcome {
    /// The overlap-free schedule of the day.
    #[must_use]
    pub const fn schedule(&self) -> &DaySchedule {
        match self {
            Self::Complete(schedule) => schedule,
            Self::Partial(partial) => &partial.schedule,
        }
    }

    /// Points that were routed to the day but not placed.
    #[must_use]
    pub fn unscheduled(&self) -> &[PointOfInterest] {
        match self {
            Self::Complete(_) => &[],
            Self::Partial(partial) => &partial.unscheduled,
        }
    }

    /// Whether every routed point was placed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// The full multi-day plan.
///
/// Every supplied point appears exactly once across the days, either booked
/// in a schedule or listed as unscheduled on a partial day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TripItinerary {
    days: Vec<DayOutcome>,
    points: Vec<PointOfInterest>,
}

impl TripItinerary {
    /// Assemble an itinerary from per-day outcomes and the supplied points.
    #[must_use]
    pub const fn new(days: Vec<DayOutcome>, points: Vec<PointOfInterest>) -> Self {
        Self { days, points }
    }

    /// Per-day outcomes in date order.
    #[must_use]
    pub fn days(&self) -> &[DayOutcome] {
        &self.days
    }

    /// Every point supplied to the planner, in input order.
    #[must_use]
    pub fn points(&self) -> &[PointOfInterest] {
        &self.points
    }

    /// Dates covered by the trip.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|day| day.schedule().date())
    }

    /// Every booked visit across the trip.
    pub fn visits(&self) -> impl Iterator<Item = &ScheduledVisit> + '_ {
        self.days.iter().flat_map(|day| day.schedule().visits())
    }

    /// Points that could not be placed on any day.
    pub fn unscheduled(&self) -> impl Iterator<Item = &PointOfInterest> + '_ {
        self.days.iter().flat_map(DayOutcome::unscheduled)
    }

    /// Whether every day is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.days.iter().all(DayOutcome::is_complete)
    }
}
