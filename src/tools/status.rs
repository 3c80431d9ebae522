//! Status Tool
//!
//! Provides runtime status information about the unitconv service.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage instructions for AI assistants
pub const CONVERSION_INSTRUCTIONS: &str = r#"
# Unit Conversion Instructions

Use `convert_units` to re-express a number in another unit of the same category.

## Parameters

| Parameter | Description |
|-----------|-------------|
| `category` | `length` or `temperature` (also `temp`, `temperature-celsius`) |
| `value` | The number to convert. Must be finite. |
| `from_unit` | Unit code the value is currently in |
| `to_unit` | Unit code to convert to |

Category names ignore case and surrounding whitespace. Unit codes ignore case
but must otherwise match exactly.

## Unit Codes

**Length:** `m`, `cm`, `mm`, `km`, `in`, `ft`, `yd`

**Temperature:** `c` (Celsius), `f` (Fahrenheit), `k` (Kelvin)

Call `list_units` for the full catalog including length factors.

## Examples

- 12 inches to feet: `{"category": "length", "value": 12, "from_unit": "in", "to_unit": "ft"}` → `1.0`
- Boiling point in Fahrenheit: `{"category": "temperature", "value": 100, "from_unit": "c", "to_unit": "f"}` → `212.0`

## Errors

- `unsupported_category`: the category is not one listed above
- `unsupported_unit`: a unit code is not valid for the category; the error
  says whether the source or the target unit was wrong
- `invalid_value`: the value is NaN or infinite
- `result_out_of_range`: the value is finite but the converted result would
  overflow (for example 1e308 km in mm)

Units are never converted across categories (no length to temperature).
Results are plain floating point; round them yourself when presenting.
"#;

/// Runtime status of the unitconv service
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    /// Build information
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,

    /// Process information
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,

    /// Conversion counters since startup
    pub conversions_succeeded: u64,
    pub conversions_failed: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    conversions_succeeded: u64,
    conversions_failed: u64,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            conversions_succeeded: 0,
            conversions_failed: 0,
        }
    }

    pub fn record_success(&mut self) {
        self.conversions_succeeded += 1;
    }

    pub fn record_failure(&mut self) {
        self.conversions_failed += 1;
    }

    /// Get the current status
    pub fn get_status(&self) -> ServiceStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ServiceStatus {
            name: build_info.name,
            version: build_info.version,
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            started_at: self.started_at,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            conversions_succeeded: self.conversions_succeeded,
            conversions_failed: self.conversions_failed,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
