use std::sync::Mutex;

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::cache::ReadingCache;
use crate::client::{ApiClient, FetchError};
use crate::format::{format_timestamp, format_update_time, format_value, parse_timestamp};
use crate::models::{ApiStatus, Reading, SeriesPoint, Snapshot, StatsSummary};
use crate::series::group_by_sensor;

/// The history table shows at most this many rows of the recent batch.
pub const HISTORY_DISPLAY_LIMIT: usize = 100;

const MISSING: &str = "—";

/// The five display regions, one update method each. The refresh pipeline
/// only talks to this trait, so tests drive it with a recording sink and
/// the egui window is just one implementation.
pub trait PresentationSink {
    fn set_status(&mut self, status: ApiStatus);
    fn show_stats(&mut self, stats: StatsPanel);
    fn show_latest(&mut self, rows: Vec<LatestRow>);
    fn show_history(&mut self, rows: Vec<HistoryRow>);
    fn show_charts(&mut self, charts: Vec<SensorSeries>);
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatsPanel {
    pub total_readings: String,
    pub total_sensors: String,
    pub last_update: String,
    pub by_type: Vec<(String, String)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LatestRow {
    pub sensor_id: String,
    pub sensor_type: String,
    pub value: String,
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryRow {
    pub id: String,
    pub sensor_id: String,
    pub sensor_type: String,
    pub value: String,
    pub timestamp: String,
}

/// One chart panel: the sensor's ascending point series plus its header
/// line. Palette color is implied by the panel's index in the sorted list.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorSeries {
    pub sensor_id: String,
    pub last_value: String,
    pub points: Vec<SeriesPoint>,
}

pub fn stats_panel(stats: &StatsSummary, last_update: Option<DateTime<Local>>) -> StatsPanel {
    StatsPanel {
        total_readings: stats.total_readings.to_string(),
        total_sensors: stats.total_sensors.to_string(),
        last_update: last_update.map_or_else(|| "–".to_string(), format_update_time),
        by_type: stats
            .by_type
            .iter()
            .map(|t| (t.sensor_type.clone(), t.count.to_string()))
            .collect(),
    }
}

/// Stable descending timestamp order; unparseable timestamps sink to the
/// bottom in their arrival order.
fn sorted_desc(readings: &[Reading]) -> Vec<&Reading> {
    let mut sorted: Vec<&Reading> = readings.iter().collect();
    sorted.sort_by(|a, b| parse_timestamp(&b.timestamp).cmp(&parse_timestamp(&a.timestamp)));
    sorted
}

fn latest_rows(readings: &[Reading]) -> Vec<LatestRow> {
    sorted_desc(readings)
        .into_iter()
        .map(|r| LatestRow {
            sensor_id: r.sensor_id.clone(),
            sensor_type: r.sensor_type.clone().unwrap_or_else(|| MISSING.to_string()),
            value: format_value(r.value),
            timestamp: format_timestamp(&r.timestamp),
        })
        .collect()
}

fn history_rows(readings: &[Reading]) -> Vec<HistoryRow> {
    sorted_desc(readings)
        .into_iter()
        .take(HISTORY_DISPLAY_LIMIT)
        .map(|r| HistoryRow {
            id: r.id.map_or_else(|| MISSING.to_string(), |id| id.to_string()),
            sensor_id: r.sensor_id.clone(),
            sensor_type: r.sensor_type.clone().unwrap_or_else(|| MISSING.to_string()),
            value: format_value(r.value),
            timestamp: format_timestamp(&r.timestamp),
        })
        .collect()
}

fn chart_series(readings: &[Reading]) -> Vec<SensorSeries> {
    group_by_sensor(readings)
        .into_iter()
        .map(|(sensor_id, points)| SensorSeries {
            last_value: points
                .last()
                .map_or_else(|| MISSING.to_string(), |p| format_value(p.value)),
            sensor_id,
            points,
        })
        .collect()
}

/// Push one successful poll into every display region.
pub fn apply_snapshot<S: PresentationSink>(
    sink: &mut S,
    snapshot: &Snapshot,
    updated_at: DateTime<Local>,
) {
    sink.set_status(ApiStatus::Active);
    sink.show_stats(stats_panel(&snapshot.stats, Some(updated_at)));
    sink.show_latest(latest_rows(&snapshot.latest));
    sink.show_history(history_rows(&snapshot.recent));
    sink.show_charts(chart_series(&snapshot.recent));
}

/// A failed poll only flips the status pill; every other region keeps its
/// last rendered content.
pub fn apply_failure<S: PresentationSink>(sink: &mut S, error: &FetchError) {
    warn!(error = %error, "refresh failed, keeping stale view");
    sink.set_status(ApiStatus::Offline);
}

/// One full refresh cycle: fetch all three resources, then apply the
/// outcome. Locks are taken only after the network work is done, so the
/// frame loop never waits on a fetch.
pub async fn refresh<S: PresentationSink>(
    client: &ApiClient,
    cache: &Mutex<ReadingCache>,
    sink: &Mutex<S>,
) {
    match client.load_all().await {
        Ok(snapshot) => {
            let now = Local::now();
            cache.lock().unwrap().set(snapshot.recent.clone(), now);
            apply_snapshot(&mut *sink.lock().unwrap(), &snapshot, now);
            debug!(readings = snapshot.recent.len(), "refresh applied");
        }
        Err(error) => {
            apply_failure(&mut *sink.lock().unwrap(), &error);
        }
    }
}
