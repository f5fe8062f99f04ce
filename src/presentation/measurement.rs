/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// One health measurement submitted to the add-measurements feature block
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeasurementRecord {
    /// Kind of device that produced the value, e.g. "Mobile"
    pub source_device_type: String,
    /// Application or service the value came from, e.g. "Apple Health Kit"
    pub source_name: String,
    /// What was measured, e.g. "Weight"
    pub measurement_type: String,
    /// Start of the measurement window, unix seconds
    pub measurement_timestamp_start: i64,
    /// End of the measurement window, unix seconds
    pub measurement_timestamp_end: i64,
    /// Measured value
    pub measurement_value: f64,
}

impl MeasurementRecord {
    /// Creates a point-in-time measurement
    pub fn new(
        source_device_type: impl Into<String>,
        source_name: impl Into<String>,
        measurement_type: impl Into<String>,
        timestamp: i64,
        measurement_value: f64,
    ) -> Self {
        Self {
            source_device_type: source_device_type.into(),
            source_name: source_name.into(),
            measurement_type: measurement_type.into(),
            measurement_timestamp_start: timestamp,
            measurement_timestamp_end: timestamp,
            measurement_value,
        }
    }

    /// Sets the measurement window from two instants
    #[must_use]
    pub fn with_window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.measurement_timestamp_start = start.timestamp();
        self.measurement_timestamp_end = end.timestamp();
        self
    }

    /// Start of the window as a UTC instant
    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.measurement_timestamp_start, 0)
    }
}
