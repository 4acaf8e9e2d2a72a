/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use anyhow::Result;
use tracing::info;
use swath_common::{define_cli, check_cli, config::load_config_or_default};
use swath_track::{
    init_tracing,
    broadcast::LiveBroadcaster,
    config::LiveConfig,
    fix::FixLog,
    ingest::{open_source,run_live_ingest,FixStream},
    live_service::{spawn_server_task,LiveState},
    tracker::PathTracker
};

define_cli! { ARGS [about="live GPS swath tracking with websocket observers"] =
    config: Option<String> [help="pathname of RON config", long],
    source: Option<String> [help="device path or tcp://host:port"]
}

#[tokio::main]
async fn main()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    let mut config: LiveConfig = load_config_or_default( ARGS.config.as_ref())?;
    if let Some(source) = &ARGS.source { config.source = source.clone() }

    // a source we can't open is fatal, we don't start the server in this case
    let reader = open_source( &config.source, config.baud_rate).await?;
    let fix_log = config.csv_log.as_ref().map( |path| FixLog::open( path)).transpose()?;

    let tracker = PathTracker::from_config( &config).into_shared();
    let broadcaster = LiveBroadcaster::new( config.observer_queue);
    let state = LiveState { tracker: tracker.clone(), broadcaster: broadcaster.clone() };

    let server_task = spawn_server_task( &config.server, state).await?;
    info!("{:?} tracking with {} ft distance, observer page at {}", config.offset.variant, config.offset.distance_feet, config.server.url());

    let res = run_live_ingest( FixStream::new( reader), tracker, broadcaster, fix_log).await;
    server_task.abort();

    Ok(res?)
}
