//! Itinerary planner for Wayfarer.
//!
//! This crate provides [`ItineraryEngine`], the default implementation of the
//! [`Planner`](wayfarer_core::Planner) trait. Planning runs in three stages:
//!
//! 1. [`BalancedPartitioner`] shuffles the selected points with a generator
//!    seeded from their identifiers and deals them round-robin across days,
//!    then tops up sparse days.
//! 2. [`NearestNeighbourRouter`] orders each day greedily from an anchor stop.
//! 3. [`SlotScheduler`] walks the day's time-of-day windows, places each stop
//!    on the quarter-hour grid, falls back for leftovers and repairs overlaps.
//!
//! Every stage is synchronous and deterministic; identical requests produce
//! identical itineraries.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod allocator;
mod days;
mod engine;
mod route;
pub mod slots;

pub use allocator::{BalancedPartitioner, DEFAULT_MIN_PER_DAY, content_seed};
pub use days::suggest_day_count;
pub use engine::{EngineConfig, ItineraryEngine};
pub use route::{AnchorStrategy, NearestNeighbourRouter, ParseAnchorStrategyError};
pub use slots::{DayRequest, SlotScheduler};
