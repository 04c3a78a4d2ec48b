//! Wall-clock times and half-open visit slots on a 15-minute grid.
//!
//! [`TimeOfDay`] counts minutes from midnight. It deliberately does not wrap:
//! a visit pushed late by conflict repair may end after `24:00`, and the
//! value stays comparable with the rest of the day.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Grid size for every slot boundary, in minutes.
pub const QUARTER_HOUR: u32 = 15;

/// Minutes since midnight.
///
/// # Examples
/// ```
/// use wayfarer_core::TimeOfDay;
///
/// let t = TimeOfDay::from_hm(8, 50);
/// assert_eq!(t.ceil_to_quarter(), TimeOfDay::from_hm(9, 0));
/// assert_eq!(TimeOfDay::from_hm(10, 7).round_to_quarter().to_string(), "10:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Construct from hours and minutes.
    #[must_use]
    pub const fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(hours.saturating_mul(60).saturating_add(minutes))
    }

    /// Minutes since midnight.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0
    }

    /// Whole hours since midnight.
    #[must_use]
    pub const fn hour(self) -> u32 {
        self.0.div_euclid(60)
    }

    /// Minutes past the hour.
    #[must_use]
    pub const fn minute(self) -> u32 {
        self.0.rem_euclid(60)
    }

    /// Add minutes, saturating at the numeric limit.
    #[must_use]
    pub const fn plus_minutes(self, minutes: u32) -> Self {
        Self(self.0.saturating_add(minutes))
    }

    /// Subtract minutes, saturating at midnight.
    #[must_use]
    pub const fn minus_minutes(self, minutes: u32) -> Self {
        Self(self.0.saturating_sub(minutes))
    }

    /// Round to the nearest quarter hour; a remainder of up to seven minutes
    /// rounds down, anything above rounds up.
    #[must_use]
    pub const fn round_to_quarter(self) -> Self {
        Self(round_minutes_to_quarter(self.0))
    }

    /// Round up to the next quarter hour (identity on the grid).
    #[must_use]
    pub const fn ceil_to_quarter(self) -> Self {
        Self(self.0.div_ceil(QUARTER_HOUR).saturating_mul(QUARTER_HOUR))
    }

    /// Whether the time lies on the 15-minute grid.
    #[must_use]
    pub const fn is_quarter_aligned(self) -> bool {
        self.0.rem_euclid(QUARTER_HOUR) == 0
    }
}

/// Round a minute count to the nearest multiple of [`QUARTER_HOUR`].
///
/// ```
/// use wayfarer_core::time::round_minutes_to_quarter;
///
/// assert_eq!(round_minutes_to_quarter(67), 60);
/// assert_eq!(round_minutes_to_quarter(68), 75);
/// ```
#[must_use]
pub const fn round_minutes_to_quarter(minutes: u32) -> u32 {
    let remainder = minutes.rem_euclid(QUARTER_HOUR);
    if remainder <= 7 {
        minutes.saturating_sub(remainder)
    } else {
        minutes.saturating_add(QUARTER_HOUR.saturating_sub(remainder))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Errors returned when parsing a [`TimeOfDay`] from `HH:MM` text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a time formatted as HH:MM, got {input:?}")]
pub struct ParseTimeOfDayError {
    input: String,
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTimeOfDayError {
            input: s.to_owned(),
        };
        let (hour_text, minute_text) = s.split_once(':').ok_or_else(invalid)?;
        let hours: u32 = hour_text.trim().parse().map_err(|_| invalid())?;
        let minutes: u32 = minute_text.trim().parse().map_err(|_| invalid())?;
        if minutes >= 60 {
            return Err(invalid());
        }
        Ok(Self::from_hm(hours, minutes))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors returned by [`TimeSlot::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeSlotError {
    /// The slot does not end after it starts.
    #[error("slot must end after it starts ({start} .. {end})")]
    Empty {
        /// Requested start.
        start: TimeOfDay,
        /// Requested end.
        end: TimeOfDay,
    },
    /// A boundary is off the 15-minute grid.
    #[error("slot boundaries must be multiples of 15 minutes ({start} .. {end})")]
    Misaligned {
        /// Requested start.
        start: TimeOfDay,
        /// Requested end.
        end: TimeOfDay,
    },
}

/// A half-open `[start, end)` visit interval on the 15-minute grid.
///
/// # Examples
/// ```
/// use wayfarer_core::{TimeOfDay, TimeSlot};
///
/// let morning = TimeSlot::new(TimeOfDay::from_hm(9, 0), TimeOfDay::from_hm(10, 0))?;
/// let next = TimeSlot::new(TimeOfDay::from_hm(10, 0), TimeOfDay::from_hm(11, 30))?;
/// assert!(!morning.overlaps(&next));
/// assert_eq!(next.duration_minutes(), 90);
/// # Ok::<(), wayfarer_core::TimeSlotError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SlotBounds"))]
pub struct TimeSlot {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeSlot {
    /// Validate and construct a slot.
    ///
    /// # Errors
    ///
    /// Returns [`TimeSlotError::Empty`] when `end <= start` and
    /// [`TimeSlotError::Misaligned`] when a bound is off the grid.
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, TimeSlotError> {
        if end.minutes() <= start.minutes() {
            return Err(TimeSlotError::Empty { start, end });
        }
        if !start.is_quarter_aligned() || !end.is_quarter_aligned() {
            return Err(TimeSlotError::Misaligned { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a slot of `length_minutes` starting at `start`, snapping the start
    /// up onto the grid and the length to the nearest quarter (at least one).
    #[must_use]
    pub const fn starting_at(start: TimeOfDay, length_minutes: u32) -> Self {
        let aligned = start.ceil_to_quarter();
        let rounded = round_minutes_to_quarter(length_minutes);
        let length = if rounded < QUARTER_HOUR {
            QUARTER_HOUR
        } else {
            rounded
        };
        Self {
            start: aligned,
            end: aligned.plus_minutes(length),
        }
    }

    /// Slot start.
    #[must_use]
    pub const fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Slot end (exclusive).
    #[must_use]
    pub const fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Length in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether two half-open slots share any instant.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start.minutes() < other.end.minutes() && self.end.minutes() > other.start.minutes()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SlotBounds {
    start: TimeOfDay,
    end: TimeOfDay,
}

#[cfg(feature = "serde")]
impl TryFrom<SlotBounds> for TimeSlot {
    type Error = TimeSlotError;

    fn try_from(bounds: SlotBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.start, bounds.end)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
