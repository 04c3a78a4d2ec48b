//! Time-of-day windows and preference biasing.

use wayfarer_core::{PreferredTime, TimeOfDay};

/// First bookable minute of a day.
pub const DAY_START: TimeOfDay = TimeOfDay::from_hm(9, 0);
/// The cursor is held here after a morning block.
pub const LUNCH_END: TimeOfDay = TimeOfDay::from_hm(13, 0);
/// Late close used for busy days and single-day trips.
pub const EXTENDED_CLOSE: TimeOfDay = TimeOfDay::from_hm(21, 0);
/// No visit may start after this time.
pub const LATEST_START: TimeOfDay = TimeOfDay::from_hm(23, 0);

const MORNING_END: TimeOfDay = TimeOfDay::from_hm(12, 0);
const AFTERNOON_END: TimeOfDay = TimeOfDay::from_hm(16, 0);
const REGULAR_CLOSE: TimeOfDay = TimeOfDay::from_hm(19, 0);
const AFTERNOON_CANONICAL: TimeOfDay = TimeOfDay::from_hm(14, 0);

/// Days with more stops than this close late.
pub const BUSY_DAY_STOPS: usize = 5;

/// A half-open band of the day reserved for one preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Points with this preference are packed into the window.
    pub preference: PreferredTime,
    /// Window opening time.
    pub start: TimeOfDay,
    /// Window closing time (exclusive).
    pub end: TimeOfDay,
}

impl TimeWindow {
    /// Latest start at which a visit of `length` minutes still ends inside
    /// the window, never earlier than the opening time.
    #[must_use]
    pub const fn latest_start(&self, length: u32) -> TimeOfDay {
        let latest = self.end.minus_minutes(length);
        if latest.minutes() < self.start.minutes() {
            self.start
        } else {
            latest
        }
    }
}

/// The four windows of a day in packing order.
///
/// Evening and anytime windows close at 21:00 instead of 19:00 when the day
/// holds more than five stops or the trip is a single day.
///
/// # Examples
/// ```
/// use wayfarer_core::{PreferredTime, TimeOfDay};
/// use wayfarer_planner::slots::day_windows;
///
/// let [morning, _, _, anytime] = day_windows(3, 1);
/// assert_eq!(morning.preference, PreferredTime::Morning);
/// assert_eq!(anytime.end, TimeOfDay::from_hm(21, 0));
/// ```
#[must_use]
pub const fn day_windows(stop_count: usize, day_count: usize) -> [TimeWindow; 4] {
    let close = if stop_count > BUSY_DAY_STOPS || day_count == 1 {
        EXTENDED_CLOSE
    } else {
        REGULAR_CLOSE
    };
    [
        TimeWindow {
            preference: PreferredTime::Morning,
            start: DAY_START,
            end: MORNING_END,
        },
        TimeWindow {
            preference: PreferredTime::Afternoon,
            start: LUNCH_END,
            end: AFTERNOON_END,
        },
        TimeWindow {
            preference: PreferredTime::Evening,
            start: AFTERNOON_END,
            end: close,
        },
        TimeWindow {
            preference: PreferredTime::Anytime,
            start: DAY_START,
            end: close,
        },
    ]
}

/// Bias `suggested` towards the band matching `preference`.
///
/// A suggestion already inside the band (morning 9 to 12, afternoon 12 to
/// 16, evening 16 to 19, by hour) is kept. Otherwise the canonical time of
/// the band is returned: 09:00, 14:00 or 16:00. Anytime keeps the suggestion.
#[must_use]
pub const fn adjust_for_preference(preference: PreferredTime, suggested: TimeOfDay) -> TimeOfDay {
    let hour = suggested.hour();
    match preference {
        PreferredTime::Morning if hour >= 9 && hour < 12 => suggested,
        PreferredTime::Morning => DAY_START,
        PreferredTime::Afternoon if hour >= 12 && hour < 16 => suggested,
        PreferredTime::Afternoon => AFTERNOON_CANONICAL,
        PreferredTime::Evening if hour >= 16 && hour < 19 => suggested,
        PreferredTime::Evening => AFTERNOON_END,
        PreferredTime::Anytime => suggested,
    }
}
