use serde::Deserialize;

/// One telemetry sample as the backend reports it. Immutable once fetched.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Reading {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "sensorId")]
    pub sensor_id: String,
    #[serde(rename = "type", default)]
    pub sensor_type: Option<String>,
    pub value: f64,
    pub timestamp: String,
}

/// Aggregate counters, replaced wholesale on every poll.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_readings: u64,
    pub total_sensors: u64,
    #[serde(default)]
    pub by_type: Vec<TypeCount>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub sensor_type: String,
    pub count: u64,
}

/// One point of a per-sensor series, derived during a render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub value: f64,
    pub timestamp: String,
}

/// The result of one successful poll: all three resources together.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub stats: StatsSummary,
    pub latest: Vec<Reading>,
    pub recent: Vec<Reading>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiStatus {
    Active,
    Offline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_deserializes_backend_shape() {
        let json = r#"{"id":7,"sensorId":"s1","type":"temp","value":21.5,"timestamp":"2024-01-01T00:00:00Z"}"#;
        let reading: Reading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.id, Some(7));
        assert_eq!(reading.sensor_id, "s1");
        assert_eq!(reading.sensor_type.as_deref(), Some("temp"));
        assert_eq!(reading.value, 21.5);
    }

    #[test]
    fn reading_tolerates_missing_optional_fields() {
        let json = r#"{"sensorId":"s2","value":3,"timestamp":"2024-01-01T00:00:00Z"}"#;
        let reading: Reading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.id, None);
        assert_eq!(reading.sensor_type, None);
        assert_eq!(reading.value, 3.0);
    }

    #[test]
    fn stats_tolerate_missing_by_type() {
        let json = r#"{"totalReadings":5,"totalSensors":2}"#;
        let stats: StatsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_readings, 5);
        assert_eq!(stats.total_sensors, 2);
        assert!(stats.by_type.is_empty());
    }
}
