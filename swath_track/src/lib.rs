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
#![allow(uncommon_codepoints)]

//! GPS swath tracking.
//!
//! Raw receiver lines are assembled into [`fix::Fix`] records ([`frame`]), each fix is turned into boundary
//! offset points ([`offset`]) which accumulate into left/right paths and a closed polygon while tracking is
//! enabled ([`tracker`]). Live results are pushed to websocket observers ([`broadcast`], [`live_service`]),
//! recorded fix logs can be turned into static maps ([`batch`]).

pub mod errors;
pub mod config;
pub mod fix;
pub mod offset;
pub mod frame;
pub mod tracker;
pub mod broadcast;
pub mod ingest;
pub mod live_service;
pub mod batch;

/// log filter for binaries, from RUST_LOG with a default of "info"
pub fn init_tracing () {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else( |_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter( filter).init();
}
