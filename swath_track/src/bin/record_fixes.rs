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
use swath_track::{init_tracing, config::RecordConfig, fix::FixLog, ingest::{open_source,FixStream}};

define_cli! { ARGS [about="record GPS fixes from a receiver into an append-only CSV log"] =
    config: Option<String>   [help="pathname of RON config", long],
    csv_file: Option<String> [help="CSV log to append to", long, short],
    source: Option<String>   [help="device path or tcp://host:port"]
}

#[tokio::main]
async fn main()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    let mut config: RecordConfig = load_config_or_default( ARGS.config.as_ref())?;
    if let Some(source) = &ARGS.source { config.source = source.clone() }
    if let Some(csv_file) = &ARGS.csv_file { config.csv_file = csv_file.into() }

    let reader = open_source( &config.source, config.baud_rate).await?;
    let mut log = FixLog::open( &config.csv_file)?;
    info!("recording fixes to {:?}", log.path());

    let mut fixes = FixStream::new( reader);
    while let Some(fix) = fixes.next_fix().await? {
        println!("{fix}");
        log.append( &fix)?;
    }

    Ok(())
}
