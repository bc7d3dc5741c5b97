use std::collections::BTreeMap;

use crate::format::parse_timestamp;
use crate::models::{Reading, SeriesPoint};

/// Partition readings into per-sensor series, chronologically ascending.
///
/// `sensor_id` is the sole grouping key; readings with the same id but
/// different types share a series. The map's key order gives the
/// lexicographic sensor order used for chart layout and palette
/// assignment, independent of fetch-arrival order.
pub fn group_by_sensor(readings: &[Reading]) -> BTreeMap<String, Vec<SeriesPoint>> {
    let mut buckets: BTreeMap<String, Vec<SeriesPoint>> = BTreeMap::new();
    for reading in readings {
        buckets
            .entry(reading.sensor_id.clone())
            .or_default()
            .push(SeriesPoint {
                value: reading.value,
                timestamp: reading.timestamp.clone(),
            });
    }
    for points in buckets.values_mut() {
        points.sort_by_key(|p| parse_timestamp(&p.timestamp));
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(sensor_id: &str, value: f64, timestamp: &str) -> Reading {
        Reading {
            id: None,
            sensor_id: sensor_id.to_string(),
            sensor_type: None,
            value,
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn every_reading_lands_in_exactly_one_bucket() {
        let readings = vec![
            reading("s2", 1.0, "2024-01-01T00:00:02Z"),
            reading("s1", 2.0, "2024-01-01T00:00:01Z"),
            reading("s2", 3.0, "2024-01-01T00:00:01Z"),
            reading("s1", 4.0, "2024-01-01T00:00:03Z"),
        ];
        let grouped = group_by_sensor(&readings);

        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, readings.len());
        assert_eq!(grouped["s1"].len(), 2);
        assert_eq!(grouped["s2"].len(), 2);
    }

    #[test]
    fn sensor_iteration_order_is_lexicographic() {
        let readings = vec![
            reading("zeta", 1.0, "2024-01-01T00:00:00Z"),
            reading("alpha", 1.0, "2024-01-01T00:00:00Z"),
            reading("mid", 1.0, "2024-01-01T00:00:00Z"),
        ];
        let grouped = group_by_sensor(&readings);
        let ids: Vec<&str> = grouped
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(ids, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn points_within_a_bucket_ascend_by_timestamp() {
        let readings = vec![
            reading("s1", 3.0, "2024-01-01T00:00:03Z"),
            reading("s1", 1.0, "2024-01-01T00:00:01Z"),
            reading("s1", 2.0, "2024-01-01T00:00:02Z"),
        ];
        let grouped = group_by_sensor(&readings);
        let values: Vec<f64> = grouped["s1"].iter().map(|p| p.value).collect();
        assert_eq!(values, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn mixed_types_share_one_series() {
        let mut a = reading("s1", 1.0, "2024-01-01T00:00:01Z");
        a.sensor_type = Some("temp".to_string());
        let mut b = reading("s1", 2.0, "2024-01-01T00:00:02Z");
        b.sensor_type = Some("humidity".to_string());

        let grouped = group_by_sensor(&[a, b]);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped["s1"].len(), 2);
    }

    #[test]
    fn unparseable_timestamps_sort_first_and_stably() {
        let readings = vec![
            reading("s1", 2.0, "2024-01-01T00:00:01Z"),
            reading("s1", 9.0, "bogus"),
            reading("s1", 8.0, "also bogus"),
        ];
        let grouped = group_by_sensor(&readings);
        let values: Vec<f64> = grouped["s1"].iter().map(|p| p.value).collect();
        assert_eq!(values, [9.0, 8.0, 2.0]);
    }
}
