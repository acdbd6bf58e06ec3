//! `smart-traveler`: a headless demo city with the rider controller plugged in.
//!
//! Runs the controller over a generated population while a handful of host
//! systems keep pushing residents back towards taxis, so every pass has work
//! to do. Settings come from the JSON file named by `SMART_TRAVELER_SETTINGS`.

mod config;
mod demo_city;

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use rider_control::RiderControlPlugin;

/// Target frame time of the headless loop.
const FRAME_TIME: Duration = Duration::from_millis(16);

fn main() {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(FRAME_TIME)),
        LogPlugin {
            filter: "info,rider_control=debug".to_string(),
            ..default()
        },
    ));

    // After LogPlugin so load failures reach the log.
    app.insert_resource(config::load_settings())
        .add_plugins((RiderControlPlugin, demo_city::DemoCityPlugin));

    app.run();
}
