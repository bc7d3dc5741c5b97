use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use crate::cache::ReadingCache;
use crate::client::ApiClient;
use crate::view::{self, PresentationSink};

/// Run one refresh cycle on a worker thread with its own runtime.
///
/// The in-flight flag stays raised until the cycle completes; the
/// scheduler skips periodic ticks while it is up, while the manual
/// trigger ignores it (overlapping manual refreshes are last-writer-wins).
pub fn spawn_refresh<S>(
    api_base_url: String,
    cache: Arc<Mutex<ReadingCache>>,
    sink: Arc<Mutex<S>>,
    in_flight: Arc<AtomicBool>,
) where
    S: PresentationSink + Send + 'static,
{
    in_flight.store(true, Ordering::SeqCst);

    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let client = ApiClient::new(api_base_url);
            view::refresh(&client, &cache, &sink).await;
        });

        in_flight.store(false, Ordering::SeqCst);
    });
}
