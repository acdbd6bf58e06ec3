//! Default batch size and intervals.

/// Residents marked or unmarked per frame. Keeps the first frames after a
/// large city loads from hitching.
pub const MARK_BATCH_PER_TICK: usize = 2000;

/// Wall-clock seconds between taxi-wait unstick passes.
pub const UNSTICK_INTERVAL_SECS: f32 = 1.0;

/// Wall-clock seconds between stand neutralization passes.
pub const STAND_INTERVAL_SECS: f32 = 12.0;

/// Wall-clock seconds between moving-away repair passes.
pub const MOVING_AWAY_INTERVAL_SECS: f32 = 16.0;

/// Wall-clock seconds between verbose summary lines.
pub const LOG_INTERVAL_SECS: f32 = 10.0;

/// A non-forced status refresh is ignored while the snapshot is younger.
pub const STATUS_MIN_REFRESH_SECS: f64 = 240.0;

/// The verbose logger forces a refresh when the snapshot is older than this.
pub const LOG_STALE_SNAPSHOT_SECS: f64 = 30.0;

/// Ages below this are shown as minutes and seconds, above as hours and minutes.
pub const AGE_SHOW_SECONDS_MAX_SECS: u64 = 3600;

/// Taxi passengers described individually in debug logging.
pub const DEBUG_PASSENGER_DETAIL_MAX: usize = 8;

/// Shown in place of the city rows before the first snapshot.
pub const CITY_SCAN_NOT_READY: &str =
    "No transit processed yet. Open a city and let the simulation run.";

/// Shown in place of the taxi rows before the first snapshot.
pub const TAXI_SCAN_NOT_READY: &str =
    "Stats not available yet. Open a city and let the simulation run a few minutes.";

pub const ACTIVITY_NOT_READY: &str = "No activity recorded yet.";
