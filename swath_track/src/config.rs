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

use std::{net::{SocketAddr,IpAddr,Ipv4Addr}, path::PathBuf};
use serde::{Serialize,Deserialize};

use crate::offset::{ArcScale,DEFAULT_DISTANCE_FEET};

pub const DEFAULT_SOURCE: &'static str = "/dev/cu.AGAIGPS";
pub const DEFAULT_BAUD_RATE: u32 = 115200;
pub const DEFAULT_PORT: u16 = 5050;
pub const DEFAULT_OBSERVER_QUEUE: usize = 64;
pub const DEFAULT_CSV_FILE: &'static str = "gps_data.csv";

/// which offset geometry the live tracker derives per fix
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize,Default)]
pub enum OffsetVariant {
    /// left/right boundary points
    #[default]
    Lateral,
    /// front/rear corners plus a forward projection point
    Footprint,
}

#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct OffsetConfig {
    pub distance_feet: f64,
    pub variant: OffsetVariant,
    pub arc_scale: ArcScale,
}

impl Default for OffsetConfig {
    fn default()->Self {
        OffsetConfig { distance_feet: DEFAULT_DISTANCE_FEET, variant: OffsetVariant::default(), arc_scale: ArcScale::default() }
    }
}

#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub sock_addr: SocketAddr,
    pub assets_dir: Option<PathBuf>, // static observer page, served at '/'
}

impl ServerConfig {
    pub fn url (&self)->String {
        format!("http://{}", self.sock_addr)
    }

    pub fn ws_url (&self)->String {
        format!("ws://{}/ws", self.sock_addr)
    }
}

impl Default for ServerConfig {
    fn default()->Self {
        ServerConfig { sock_addr: SocketAddr::new( IpAddr::V4( Ipv4Addr::UNSPECIFIED), DEFAULT_PORT), assets_dir: None }
    }
}

/// config for the `live_swath` tracker
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct LiveConfig {
    pub source: String,
    pub baud_rate: u32,
    pub offset: OffsetConfig,
    pub server: ServerConfig,
    pub csv_log: Option<PathBuf>,
    pub reset_paths_on_enable: bool,
    pub observer_queue: usize,
}

impl Default for LiveConfig {
    fn default()->Self {
        LiveConfig {
            source: DEFAULT_SOURCE.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            offset: OffsetConfig::default(),
            server: ServerConfig::default(),
            csv_log: None,
            reset_paths_on_enable: false,
            observer_queue: DEFAULT_OBSERVER_QUEUE,
        }
    }
}

/// config for the `record_fixes` recorder
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct RecordConfig {
    pub source: String,
    pub baud_rate: u32,
    pub csv_file: PathBuf,
}

impl Default for RecordConfig {
    fn default()->Self {
        RecordConfig { source: DEFAULT_SOURCE.to_string(), baud_rate: DEFAULT_BAUD_RATE, csv_file: PathBuf::from(DEFAULT_CSV_FILE) }
    }
}
