use chrono::{DateTime, Local};

use crate::models::Reading;

/// Last-known-good reading batch, shared between the refresh worker (sole
/// writer) and the frame loop. Each successful poll replaces the whole
/// batch; a failed poll leaves it untouched, so the view keeps rendering
/// stale-but-consistent data.
#[derive(Debug, Default)]
pub struct ReadingCache {
    readings: Vec<Reading>,
    last_update: Option<DateTime<Local>>,
}

impl ReadingCache {
    pub fn get(&self) -> (&[Reading], Option<DateTime<Local>>) {
        (&self.readings, self.last_update)
    }

    pub fn set(&mut self, readings: Vec<Reading>, time: DateTime<Local>) {
        self.readings = readings;
        self.last_update = Some(time);
    }
}
