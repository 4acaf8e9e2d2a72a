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

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, LocalResult};
use crate::errors::{Result,SwathCommonError};

/// the format we use for local wall-clock timestamps in fix logs
pub const WALL_CLOCK_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

pub fn local_now ()->DateTime<Local> { Local::now() }

pub fn format_wall_clock (date: &DateTime<Local>)->String {
    date.format( WALL_CLOCK_FORMAT).to_string()
}

/// parse a `YYYY-MM-DD HH:MM:SS` local time
/// note that wall-clock times in a DST fold are ambiguous - we take the earlier one, we don't need more precision
pub fn parse_wall_clock (s: &str)->Result<DateTime<Local>> {
    let ndt = NaiveDateTime::parse_from_str( s.trim(), WALL_CLOCK_FORMAT)?;

    match Local.from_local_datetime( &ndt) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(dt1, _) => Ok(dt1),
        LocalResult::None => Err( SwathCommonError::InvalidLocalTime( format!("forward time jump cannot be mapped: {s}")))
    }
}

/// serde support for fields that are stored as local wall-clock strings, use with `#[serde(with="wall_clock")]`
pub mod wall_clock {
    use chrono::{DateTime,Local};
    use serde::{Serializer,Deserializer,Deserialize,de::Error as DeError};

    pub fn serialize<S: Serializer> (date: &DateTime<Local>, s: S)->Result<S::Ok,S::Error> {
        s.serialize_str( &super::format_wall_clock(date))
    }

    pub fn deserialize<'de,D: Deserializer<'de>> (d: D)->Result<DateTime<Local>,D::Error> {
        let s = String::deserialize(d)?;
        super::parse_wall_clock( &s).map_err( |e| D::Error::custom( e.to_string()))
    }
}
