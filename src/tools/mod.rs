//! Dosage Gauge tools module
//!
//! MCP tool implementations for the gauge service.

pub mod gauge;
pub mod status;
