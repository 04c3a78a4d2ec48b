//! Balanced day allocation.
//!
//! Points are shuffled, dealt round-robin across days and then rebalanced
//! so every day meets a minimum quota when volume allows. The grouping has
//! no relationship to geography: two neighbouring attractions are as likely
//! to land on different days as on the same one.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use wayfarer_core::PointOfInterest;

/// Default minimum number of stops per day.
pub const DEFAULT_MIN_PER_DAY: usize = 4;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Seed derived from the identifiers of `points` in order.
///
/// Identical lists always produce the same seed, so partitions are stable
/// without any process-wide random state.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::PointOfInterest;
/// use wayfarer_planner::content_seed;
///
/// let points: Vec<_> = (1..=3)
///     .map(|id| PointOfInterest::new(id, Coord { x: 0.0, y: 0.0 }))
///     .collect();
/// assert_eq!(content_seed(&points), content_seed(&points.clone()));
/// ```
#[must_use]
pub fn content_seed(points: &[PointOfInterest]) -> u64 {
    points.iter().fold(FNV_OFFSET_BASIS, |acc, poi| {
        (acc ^ poi.id).wrapping_mul(FNV_PRIME)
    })
}

/// Deals points across days in balanced buckets.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use geo::Coord;
/// use wayfarer_core::PointOfInterest;
/// use wayfarer_planner::BalancedPartitioner;
///
/// let points: Vec<_> = (1..=10)
///     .map(|id| PointOfInterest::new(id, Coord { x: 0.0, y: 0.0 }))
///     .collect();
/// let days = NonZeroUsize::new(2).expect("non-zero");
/// let buckets = BalancedPartitioner::default().partition_seeded(&points, days);
/// assert_eq!(buckets.len(), 2);
/// assert!(buckets.iter().all(|day| day.len() >= 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalancedPartitioner {
    min_per_day: usize,
}

impl Default for BalancedPartitioner {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PER_DAY)
    }
}

impl BalancedPartitioner {
    /// Partitioner enforcing `min_per_day` stops when volume allows.
    #[must_use]
    pub const fn new(min_per_day: usize) -> Self {
        Self { min_per_day }
    }

    /// The per-day quota.
    #[must_use]
    pub const fn min_per_day(&self) -> usize {
        self.min_per_day
    }

    /// Split `points` into `days` buckets using `rng` for the shuffle.
    ///
    /// Every input point lands in exactly one bucket. When there are at least
    /// `min_per_day * days` points every bucket receives the quota.
    pub fn partition<R>(
        &self,
        points: &[PointOfInterest],
        days: NonZeroUsize,
        rng: &mut R,
    ) -> Vec<Vec<PointOfInterest>>
    where
        R: Rng + ?Sized,
    {
        let mut shuffled = points.to_vec();
        shuffled.shuffle(rng);

        let mut buckets = vec![Vec::new(); days.get()];
        for (index, poi) in shuffled.into_iter().enumerate() {
            if let Some(bucket) = buckets.get_mut(index.rem_euclid(days.get())) {
                bucket.push(poi);
            }
        }

        let quota_total = self.min_per_day.saturating_mul(days.get());
        if points.len() >= quota_total {
            rebalance(&mut buckets, self.min_per_day);
        }
        sweep_missing(&mut buckets, points);

        log::debug!(
            "partitioned {} points into day sizes {:?}",
            points.len(),
            buckets.iter().map(Vec::len).collect::<Vec<_>>()
        );
        buckets
    }

    /// [`Self::partition`] with a generator seeded from [`content_seed`].
    #[must_use]
    pub fn partition_seeded(
        &self,
        points: &[PointOfInterest],
        days: NonZeroUsize,
    ) -> Vec<Vec<PointOfInterest>> {
        let mut rng = ChaCha8Rng::seed_from_u64(content_seed(points));
        self.partition(points, days, &mut rng)
    }
}

/// Index and length of the first bucket with the fewest points.
fn emptiest(buckets: &[Vec<PointOfInterest>]) -> Option<(usize, usize)> {
    buckets
        .iter()
        .map(Vec::len)
        .enumerate()
        .min_by_key(|&(_, len)| len)
}

/// Move points from the fullest day to the emptiest until the quota holds.
///
/// Only days holding more than the quota donate, and each donates its last
/// point. Stops when every day meets the quota or nobody can donate.
fn rebalance(buckets: &mut [Vec<PointOfInterest>], quota: usize) {
    loop {
        let Some((needy, needy_len)) = emptiest(buckets) else {
            return;
        };
        if needy_len >= quota {
            return;
        }
        // `max_by_key` returns the last maximum; reverse to favour the first.
        let donor = buckets
            .iter()
            .map(Vec::len)
            .enumerate()
            .rev()
            .max_by_key(|&(_, len)| len)
            .filter(|&(_, len)| len > quota)
            .map(|(index, _)| index);
        let Some(moved) = donor.and_then(|index| buckets.get_mut(index)?.pop()) else {
            return;
        };
        if let Some(bucket) = buckets.get_mut(needy) {
            bucket.push(moved);
        }
    }
}

/// Append any input point missing from every bucket to the emptiest bucket.
fn sweep_missing(buckets: &mut [Vec<PointOfInterest>], points: &[PointOfInterest]) {
    let placed: HashSet<u64> = buckets.iter().flatten().map(|poi| poi.id).collect();
    for poi in points.iter().filter(|poi| !placed.contains(&poi.id)) {
        log::warn!("point {} missing after allocation; appending to emptiest day", poi.id);
        if let Some((index, _)) = emptiest(buckets)
            && let Some(bucket) = buckets.get_mut(index)
        {
            bucket.push(poi.clone());
        }
    }
}
