//! Dosage gauge engine
//!
//! Pure functions that place a nutrient's aggregated intake on a fixed-anchor
//! 0-100 gauge and decide whether it is over the safe limit.

pub mod classifier;
pub mod filter;
pub mod mapper;
pub mod scale;

pub use classifier::{is_over_limit, GaugeReading, IntakeStatus};
pub use filter::{partition, Partition, ResultView};
pub use mapper::{compute_fill_percent, over_map, Thresholds};
pub use scale::{
    clamp_percent, display_percent, round_to_scale, CAP_MULTIPLIER, NO_GUIDELINE_FACTOR,
    REC_LINE, UPPER_LINE,
};
