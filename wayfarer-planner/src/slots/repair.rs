//! Conflict probing and the bounded repair loop.

use wayfarer_core::{QUARTER_HOUR, TimeOfDay, TimeSlot};

use super::window::LATEST_START;

/// Minimum gap left after the earlier visit when repair moves a later one.
pub const REPAIR_BUFFER_MINUTES: u32 = 15;

/// A slot booked for the route point at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Placement {
    pub(super) index: usize,
    pub(super) slot: TimeSlot,
}

/// Whether `slot` overlaps any placement other than the one at `skip`.
pub(super) fn conflicts(slot: &TimeSlot, placed: &[Placement], skip: Option<usize>) -> bool {
    placed
        .iter()
        .enumerate()
        .filter(|&(position, _)| Some(position) != skip)
        .any(|(_, placement)| placement.slot.overlaps(slot))
}

/// First free slot of `length` minutes starting at or after `from`.
///
/// Steps forward a quarter hour at a time and gives up once the start would
/// pass 23:00.
pub(super) fn probe(
    from: TimeOfDay,
    length: u32,
    placed: &[Placement],
    skip: Option<usize>,
) -> Option<TimeSlot> {
    let mut start = from.ceil_to_quarter();
    while start <= LATEST_START {
        let candidate = TimeSlot::starting_at(start, length);
        if !conflicts(&candidate, placed, skip) {
            return Some(candidate);
        }
        start = start.plus_minutes(QUARTER_HOUR);
    }
    None
}

fn has_overlap(placed: &[Placement]) -> bool {
    placed
        .iter()
        .enumerate()
        .any(|(position, placement)| conflicts(&placement.slot, placed, Some(position)))
}

/// Move the later of each overlapping pair past the earlier one.
///
/// Runs at most `max_passes` passes and stops early once a pass finds no
/// overlap. Returns whether the placements ended up overlap-free.
pub(super) fn resolve(placed: &mut [Placement], max_passes: usize) -> bool {
    for _ in 0..max_passes {
        let mut found = false;
        for first in 0..placed.len() {
            for second in first.saturating_add(1)..placed.len() {
                let (Some(a), Some(b)) = (placed.get(first), placed.get(second)) else {
                    continue;
                };
                if !a.slot.overlaps(&b.slot) {
                    continue;
                }
                found = true;
                let (anchor, moving) = if b.slot.start() >= a.slot.start() {
                    (*a, second)
                } else {
                    (*b, first)
                };
                relocate(placed, moving, anchor.slot.end());
            }
        }
        if !found {
            return true;
        }
    }
    !has_overlap(placed)
}

/// Move the placement at `moving` to start after `after` plus the buffer,
/// probing forward when that spot is taken. Leaves it alone if nothing is
/// free before 23:00.
fn relocate(placed: &mut [Placement], moving: usize, after: TimeOfDay) {
    let Some(current) = placed.get(moving).copied() else {
        return;
    };
    let target = after.plus_minutes(REPAIR_BUFFER_MINUTES);
    let length = current.slot.duration_minutes();
    if let Some(slot) = probe(target, length, placed, Some(moving))
        && let Some(placement) = placed.get_mut(moving)
    {
        placement.slot = slot;
    }
}

/// Split placements into an overlap-free set and the evicted rest.
///
/// Placements are considered by start time; each one that overlaps an
/// already kept placement is evicted.
pub(super) fn evict_overlaps(mut placed: Vec<Placement>) -> (Vec<Placement>, Vec<Placement>) {
    placed.sort_by_key(|placement| (placement.slot.start(), placement.index));
    let mut kept: Vec<Placement> = Vec::with_capacity(placed.len());
    let mut evicted = Vec::new();
    for placement in placed {
        if conflicts(&placement.slot, &kept, None) {
            evicted.push(placement);
        } else {
            kept.push(placement);
        }
    }
    (kept, evicted)
}
