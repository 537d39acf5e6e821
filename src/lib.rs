//! Run/pass play-calling mix by score differential.
//!
//! Classifies a team's offensive drives by the score differential at the
//! moment each drive started, tallies passing and rushing attempts per
//! differential bucket, and derives a low-sample floor for presentation.

pub mod breakdown;
pub mod memory;
pub mod query;
pub mod threshold;
