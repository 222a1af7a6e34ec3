//! Dosage Gauge Status Tool
//!
//! Provides runtime status information about the gauge service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Gauge usage instructions for AI assistants
pub const GAUGE_INSTRUCTIONS: &str = r#"
# Dosage Gauge Instructions

This guide explains how to read supplement combination results with the Dosage Gauge tools.

## Overview

The combination analysis service sums each nutrient across the products a user selected.
Each nutrient arrives as:

```json
{
  "name": "Vitamin D",
  "totalAmount": 50,
  "unit": "mcg",
  "recommendedAmount": 10,
  "upperAmount": 100
}
```

`recommendedAmount` and `upperAmount` may be `null` when no guideline exists.
The gauge never sums amounts itself.

---

## The Gauge Scale

Every nutrient is drawn on the same 0-100 bar with two fixed marks:

| Mark | Position | Meaning |
|------|----------|---------|
| Recommended line | 33.33 | Total equals the recommended amount |
| Upper line | 66.67 | Total equals the safe upper limit |
| Full bar | 100 | Total reached 150% of the upper limit |

The marks do NOT move with the actual threshold values. A nutrient at its
recommended amount always sits on 33.33, however far away its upper limit is.

### Regimes

1. **Both thresholds** - linear 0 -> 33.33 up to recommended, 33.33 -> 66.67 up to
   the upper limit, then 66.67 -> 100 up to 150% of the upper limit.
2. **Upper only** - linear 0 -> 66.67 up to the upper limit, then the same overflow.
3. **Recommended only** - linear 0 -> 33.33 up to recommended. ANY amount above
   recommended jumps straight to 100.
4. **No guideline** - a small fixed bar (~23.33) when total > 0, otherwise empty.

---

## Over-Limit Classification

A nutrient is "over limit" when its fill percent is above 66.67.

- Recommended-only nutrients are over limit as soon as they pass the recommended amount.
- Nutrients with no guideline are never over limit.

---

## Tools

| Tool | Use it for |
|------|------------|
| `compute_fill_percent` | One nutrient's bar position, status and regime |
| `check_over_limit` | A yes/no answer for one nutrient |
| `analyze_combination` | A whole analysis response, filtered to the `all` or `over_limit` tab |
| `gauge_status` | Build and process information |

### analyze_combination

- Pass the `results` array exactly as received.
- `view` is `"all"` (default) or `"over_limit"` (`"전체"` / `"초과"` also work).
- Order is preserved in both views.
- `issues` lists malformed upstream data (duplicate names, negative values,
  recommended above upper). Rows are still gauged; fix the data upstream.

## Notes

- Negative or non-numeric totals are read as 0.
- A threshold of 0 is treated as missing.
- `fill_percent` in analysis rows is rounded to 2 decimals for display.
"#;

/// Runtime status of the gauge service
#[derive(Debug, Clone, Serialize)]
pub struct GaugeStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> GaugeStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        GaugeStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
