//! `ItineraryEngine`: partition, route and schedule a whole trip.

use std::num::NonZeroUsize;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wayfarer_core::{
    DayOutcome, DaySchedule, DensityDurationPolicy, DurationPolicy, HaversineTravelTime,
    PlanError, PlanRequest, PlanRequestValidationError, Planner, PointOfInterest, TravelTimeError,
    TravelTimeMatrix, TravelTimeProvider, TripItinerary,
};

use crate::allocator::{BalancedPartitioner, DEFAULT_MIN_PER_DAY, content_seed};
use crate::route::{AnchorStrategy, NearestNeighbourRouter};
use crate::slots::{DEFAULT_REPAIR_PASSES, DayRequest, SlotScheduler};

/// Configuration for [`ItineraryEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Minimum stops per day enforced when there are enough points.
    pub min_per_day: usize,
    /// How the first stop of each day is chosen.
    pub anchor: AnchorStrategy,
    /// Upper bound on conflict-repair passes per day.
    pub repair_passes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_per_day: DEFAULT_MIN_PER_DAY,
            anchor: AnchorStrategy::default(),
            repair_passes: DEFAULT_REPAIR_PASSES,
        }
    }
}

/// Default [`Planner`] chaining allocation, routing and slot scheduling.
///
/// The engine is generic over the travel-time source and the duration
/// policy. Planning is deterministic: the shuffle generator is seeded from
/// the request's point identifiers.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use geo::Coord;
/// use wayfarer_core::{LodgingReference, PlanRequest, Planner, PointOfInterest};
/// use wayfarer_planner::ItineraryEngine;
///
/// let request = PlanRequest {
///     points: (1..=5)
///         .map(|id| PointOfInterest::new(id, Coord { x: 77.2, y: 28.6 }))
///         .collect(),
///     lodging: LodgingReference::default(),
///     start_date: NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date"),
///     day_count: 2,
/// };
/// let itinerary = ItineraryEngine::with_defaults().plan(&request)?;
/// assert_eq!(itinerary.days().len(), 2);
/// assert_eq!(itinerary.visits().count(), 5);
/// # Ok::<(), wayfarer_core::PlanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ItineraryEngine<T = HaversineTravelTime, D = DensityDurationPolicy>
where
    T: TravelTimeProvider,
    D: DurationPolicy,
{
    travel_time_provider: T,
    duration_policy: D,
    config: EngineConfig,
}

impl ItineraryEngine {
    /// Engine using great-circle travel times and the density policy.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(HaversineTravelTime, DensityDurationPolicy)
    }
}

impl<T, D> ItineraryEngine<T, D>
where
    T: TravelTimeProvider,
    D: DurationPolicy,
{
    /// Construct an engine using default configuration.
    #[must_use]
    pub fn new(travel_time_provider: T, duration_policy: D) -> Self {
        Self::with_config(travel_time_provider, duration_policy, EngineConfig::default())
    }

    /// Construct an engine with explicit configuration.
    #[must_use]
    pub const fn with_config(
        travel_time_provider: T,
        duration_policy: D,
        config: EngineConfig,
    ) -> Self {
        Self {
            travel_time_provider,
            duration_policy,
            config,
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn travel_matrix(&self, route: &[PointOfInterest]) -> Result<TravelTimeMatrix, TravelTimeError> {
        let matrix = self.travel_time_provider.get_travel_time_matrix(route)?;
        let expected = route.len();
        if matrix.len() != expected || matrix.iter().any(|row| row.len() != expected) {
            return Err(TravelTimeError::MalformedMatrix { expected });
        }
        Ok(matrix)
    }
}

impl<T, D> Planner for ItineraryEngine<T, D>
where
    T: TravelTimeProvider,
    D: DurationPolicy,
{
    fn plan(&self, request: &PlanRequest) -> Result<TripItinerary, PlanError> {
        request.validate()?;
        let day_count = NonZeroUsize::new(usize::from(request.day_count))
            .ok_or(PlanRequestValidationError::ZeroDays)?;

        let partitioner = BalancedPartitioner::new(self.config.min_per_day);
        let mut rng = ChaCha8Rng::seed_from_u64(content_seed(&request.points));
        let buckets = partitioner.partition(&request.points, day_count, &mut rng);

        let router = NearestNeighbourRouter::new(self.config.anchor);
        let scheduler = SlotScheduler::new(&self.duration_policy)
            .with_repair_passes(self.config.repair_passes);

        let mut days = Vec::with_capacity(day_count.get());
        for (date, bucket) in request.day_dates().zip(buckets) {
            if bucket.is_empty() {
                log::debug!("{date} is a free day");
                days.push(DayOutcome::Complete(DaySchedule::free_day(date)));
                continue;
            }
            let route = router.route(&bucket, &request.lodging);
            let travel = self.travel_matrix(&route)?;
            let outcome = scheduler.schedule(&DayRequest {
                date,
                route: &route,
                travel: &travel,
                day_count: day_count.get(),
            });
            log::debug!(
                "planned {date}: {} visits, {} unscheduled",
                outcome.schedule().visits().len(),
                outcome.unscheduled().len()
            );
            days.push(outcome);
        }

        Ok(TripItinerary::new(days, request.points.clone()))
    }
}
