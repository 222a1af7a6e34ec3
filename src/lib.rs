//! Dosage Gauge Library
//!
//! Intake gauges and over-limit classification for supplement combinations.

pub mod build_info;
pub mod gauge;
pub mod mcp;
pub mod models;
pub mod tools;
