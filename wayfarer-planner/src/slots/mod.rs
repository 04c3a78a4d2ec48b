//! Time-slot assignment for one day's route.
//!
//! Points are bucketed by preferred time and packed window by window behind
//! a moving cursor that accounts for travel between consecutive stops.
//! Points that do not fit get a fallback slot after the last booked visit,
//! and a bounded repair loop then pushes apart anything that overlaps. If
//! repair cannot settle the day, the overlapping stragglers are returned as
//! unscheduled rather than left double-booked.

mod repair;
mod window;

use chrono::NaiveDate;
use wayfarer_core::{
    DayOutcome, DaySchedule, DurationPolicy, PartialSchedule, PointOfInterest, PreferredTime,
    ScheduledVisit, TimeOfDay, TimeSlot, TravelTimeMatrix, minutes_between,
};

use repair::{Placement, conflicts, evict_overlaps, probe, resolve};

pub use repair::REPAIR_BUFFER_MINUTES;
pub use window::{
    BUSY_DAY_STOPS, DAY_START, EXTENDED_CLOSE, LATEST_START, LUNCH_END, TimeWindow,
    adjust_for_preference, day_windows,
};

/// Default cap on conflict-repair passes.
pub const DEFAULT_REPAIR_PASSES: usize = 10;

/// Gap between the latest booked visit and a fallback slot.
pub const FALLBACK_GAP_MINUTES: u32 = 30;

/// One day's scheduling input.
#[derive(Debug, Clone, Copy)]
pub struct DayRequest<'a> {
    /// Calendar date of the day.
    pub date: NaiveDate,
    /// Stops in visiting order.
    pub route: &'a [PointOfInterest],
    /// Travel times indexed like `route`.
    pub travel: &'a TravelTimeMatrix,
    /// Length of the whole trip in days.
    pub day_count: usize,
}

/// Assigns non-overlapping, quarter-hour aligned slots to a route.
///
/// Every slot is exactly [`DurationPolicy::slot_minutes`] long.
#[derive(Debug)]
pub struct SlotScheduler<'p, D: ?Sized> {
    policy: &'p D,
    repair_passes: usize,
}

impl<'p, D> SlotScheduler<'p, D>
where
    D: DurationPolicy + ?Sized,
{
    /// Scheduler sizing visits with `policy`.
    #[must_use]
    pub const fn new(policy: &'p D) -> Self {
        Self {
            policy,
            repair_passes: DEFAULT_REPAIR_PASSES,
        }
    }

    /// Override the repair pass cap.
    #[must_use]
    pub const fn with_repair_passes(mut self, passes: usize) -> Self {
        self.repair_passes = passes;
        self
    }

    /// Schedule a day.
    ///
    /// Returns [`DayOutcome::Complete`] when every stop was booked and
    /// [`DayOutcome::Partial`] when repair had to evict stops.
    #[must_use]
    pub fn schedule(&self, day: &DayRequest<'_>) -> DayOutcome {
        if day.route.is_empty() {
            return DayOutcome::Complete(DaySchedule::free_day(day.date));
        }

        let mut placed = Vec::with_capacity(day.route.len());
        let mut leftovers = Vec::new();
        let mut cursor = DAY_START;
        for window in day_windows(day.route.len(), day.day_count) {
            let bucket: Vec<usize> = day
                .route
                .iter()
                .enumerate()
                .filter(|(_, poi)| poi.preferred_time == window.preference)
                .map(|(index, _)| index)
                .collect();
            if bucket.is_empty() {
                continue;
            }
            cursor = self.fill_window(day, &window, &bucket, cursor, &mut placed, &mut leftovers);
            if window.preference == PreferredTime::Morning {
                cursor = cursor.max(LUNCH_END);
            }
        }

        leftovers.sort_unstable();
        for index in leftovers {
            self.place_fallback(day, index, &mut placed);
        }

        let converged = resolve(&mut placed, self.repair_passes);
        if !converged {
            log::warn!(
                "conflict repair on {} did not converge after {} passes",
                day.date,
                self.repair_passes
            );
        }
        let (kept, evicted) = evict_overlaps(placed);
        outcome(day, &kept, &evicted, converged)
    }

    /// Pack `bucket` into `window`, returning the cursor after the last stop.
    ///
    /// Points that do not fit are appended to `leftovers`.
    fn fill_window(
        &self,
        day: &DayRequest<'_>,
        window: &TimeWindow,
        bucket: &[usize],
        from: TimeOfDay,
        placed: &mut Vec<Placement>,
        leftovers: &mut Vec<usize>,
    ) -> TimeOfDay {
        let mut cursor = from.max(window.start);
        for (position, &index) in bucket.iter().enumerate() {
            let Some(poi) = day.route.get(index) else {
                continue;
            };
            cursor = cursor.ceil_to_quarter();
            let length = self.policy.slot_minutes(poi);
            let next = bucket.get(position.saturating_add(1)).copied();

            if cursor.plus_minutes(length) > window.end && next.is_some() {
                leftovers.extend(bucket.iter().skip(position).copied());
                break;
            }

            let start = adjust_for_preference(poi.preferred_time, cursor)
                .max(window.start)
                .min(window.latest_start(length));
            let candidate = TimeSlot::starting_at(start, length);
            let booked = if conflicts(&candidate, placed, None) {
                probe(cursor, length, placed, None)
            } else {
                Some(candidate)
            };
            let Some(slot) = booked else {
                leftovers.push(index);
                continue;
            };
            placed.push(Placement { index, slot });

            let Some(next_index) = next else {
                cursor = slot.end();
                break;
            };
            cursor = slot
                .end()
                .plus_minutes(minutes_between(day.travel, index, next_index))
                .ceil_to_quarter();
            if cursor > LATEST_START {
                leftovers.extend(bucket.iter().skip(position.saturating_add(1)).copied());
                break;
            }
        }
        cursor
    }

    /// Book `index` after the latest visit, or at 09:00 when that is too late.
    ///
    /// The fallback slot may overlap; repair deals with it.
    fn place_fallback(&self, day: &DayRequest<'_>, index: usize, placed: &mut Vec<Placement>) {
        let Some(poi) = day.route.get(index) else {
            return;
        };
        let latest_end = placed
            .iter()
            .map(|placement| placement.slot.end())
            .max()
            .map_or(DAY_START, |end| end.max(DAY_START));
        let after_gap = latest_end
            .plus_minutes(FALLBACK_GAP_MINUTES)
            .ceil_to_quarter();
        let start = if after_gap > EXTENDED_CLOSE {
            DAY_START
        } else {
            after_gap
        };
        log::debug!("fallback slot at {start} for point {} on {}", poi.id, day.date);
        placed.push(Placement {
            index,
            slot: TimeSlot::starting_at(start, self.policy.slot_minutes(poi)),
        });
    }
}

/// Assemble the day's result from kept and evicted placements.
fn outcome(
    day: &DayRequest<'_>,
    kept: &[Placement],
    evicted: &[Placement],
    converged: bool,
) -> DayOutcome {
    let visits = kept
        .iter()
        .filter_map(|placement| {
            day.route
                .get(placement.index)
                .map(|poi| ScheduledVisit::new(poi.clone(), placement.slot))
        })
        .collect();
    let schedule = DaySchedule::new(day.date, visits);
    debug_assert!(schedule.validate().is_ok(), "schedule must be overlap-free");

    if evicted.is_empty() {
        log::debug!("scheduled {} visits on {}", kept.len(), day.date);
        return DayOutcome::Complete(schedule);
    }

    let mut unscheduled_indices: Vec<usize> =
        evicted.iter().map(|placement| placement.index).collect();
    unscheduled_indices.sort_unstable();
    let unscheduled: Vec<PointOfInterest> = unscheduled_indices
        .into_iter()
        .filter_map(|index| day.route.get(index).cloned())
        .collect();
    log::warn!(
        "{} of {} stops on {} could not be scheduled",
        unscheduled.len(),
        day.route.len(),
        day.date
    );
    DayOutcome::Partial(PartialSchedule {
        schedule,
        unscheduled,
        repair_converged: converged,
    })
}
