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

use std::{fmt, fs::{self,File,OpenOptions}, path::{Path,PathBuf}};
use chrono::{DateTime,Local};
use serde::{Serialize,Deserialize};
use uom::si::{f64::{Length,Velocity}, length::foot, velocity::mile_per_hour};
use tracing::debug;

use swath_common::{angle::Bearing, geo::LatLon, datetime::{wall_clock,format_wall_clock}};
use crate::errors::Result;

/// one timestamped GPS reading. Fixes are never mutated after they got parsed
#[derive(Debug,Clone,PartialEq)]
pub struct Fix {
    pub timestamp: DateTime<Local>,
    pub position: LatLon,
    pub altitude: Length,
    pub speed: Velocity,
    pub heading: Bearing, // clockwise from true north
}

impl Fix {
    pub fn new (timestamp: DateTime<Local>, lat: f64, lon: f64, alt_ft: f64, speed_mph: f64, heading_deg: f64)->Self {
        Fix {
            timestamp,
            position: LatLon::new( lat, lon),
            altitude: Length::new::<foot>(alt_ft),
            speed: Velocity::new::<mile_per_hour>(speed_mph),
            heading: Bearing::from_degrees( heading_deg),
        }
    }

    #[inline] pub fn latitude (&self)->f64 { self.position.lat }
    #[inline] pub fn longitude (&self)->f64 { self.position.lon }
    #[inline] pub fn altitude_feet (&self)->f64 { self.altitude.get::<foot>() }
    #[inline] pub fn speed_mph (&self)->f64 { self.speed.get::<mile_per_hour>() }
}

impl fmt::Display for Fix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Timestamp: {}, Latitude: {}, Longitude: {}, Altitude: {} feet, Speed: {} mph, Heading: {} degrees",
            format_wall_clock( &self.timestamp), self.latitude(), self.longitude(), self.altitude_feet(), self.speed_mph(), self.heading.degrees())
    }
}

/* #region CSV fix log ***************************************************************************************/

/// the CSV row format of fix logs
#[derive(Debug,Serialize,Deserialize)]
pub struct FixRecord {
    #[serde(rename="Timestamp", with="wall_clock")]
    pub timestamp: DateTime<Local>,

    #[serde(rename="Latitude")]
    pub latitude: f64,

    #[serde(rename="Longitude")]
    pub longitude: f64,

    #[serde(rename="Altitude (feet)")]
    pub altitude: f64,

    #[serde(rename="Speed (mph)")]
    pub speed: f64,

    #[serde(rename="Heading (degrees)")]
    pub heading: f64,
}

impl From<&Fix> for FixRecord {
    fn from (fix: &Fix)->Self {
        FixRecord {
            timestamp: fix.timestamp,
            latitude: fix.latitude(),
            longitude: fix.longitude(),
            altitude: fix.altitude_feet(),
            speed: fix.speed_mph(),
            heading: fix.heading.degrees(),
        }
    }
}

impl From<FixRecord> for Fix {
    fn from (r: FixRecord)->Self {
        Fix::new( r.timestamp, r.latitude, r.longitude, r.altitude, r.speed, r.heading)
    }
}

/// append-only CSV log of fixes. The header row is only written if the file is new or empty,
/// existing logs are never truncated
pub struct FixLog {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl FixLog {
    pub fn open (path: impl AsRef<Path>)->Result<Self> {
        let path = path.as_ref().to_path_buf();
        let needs_header = fs::metadata(&path).map( |m| m.len() == 0).unwrap_or(true);

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let writer = csv::WriterBuilder::new().has_headers(needs_header).from_writer(file);
        debug!("opened fix log {:?} (new: {})", path, needs_header);

        Ok( FixLog{ path, writer } )
    }

    pub fn path (&self)->&Path { self.path.as_path() }

    /// each row is flushed right away - a fix log has to survive the process being killed
    pub fn append (&mut self, fix: &Fix)->Result<()> {
        self.writer.serialize( FixRecord::from(fix))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// read all fixes of a CSV fix log in file order.
/// Whitespace around fields and headers is ignored, i.e. both `Timestamp,Latitude,..` and `Timestamp, Latitude, ..` headers work
pub fn read_fix_log (path: impl AsRef<Path>)->Result<Vec<Fix>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim( csv::Trim::All)
        .from_path( path.as_ref())?;

    let mut fixes = Vec::new();
    for res in reader.deserialize::<FixRecord>() {
        fixes.push( Fix::from( res?));
    }
    Ok(fixes)
}

/* #endregion CSV fix log */
