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

//! re-assembly of multi-line receiver records into [`Fix`] values.
//!
//! The receiver prints one record as
//! ```text
//! Lat: 46.334500 Long: -113.302100
//! Alt: 3520.5 feet Speed: 12.3 mph
//! Heading: 308.0 degrees
//! ```
//! where the number of physical lines varies. A record starts with a line that begins with `Lat:` and is
//! complete with the first line that contains `Heading`. Records that don't match the field pattern are dropped.

use chrono::{DateTime,Local};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::fix::Fix;

pub const START_MARKER: &'static str = "Lat:";
pub const TERMINAL_MARKER: &'static str = "Heading";

/// upper bound for the accumulated text of one record. Receiver records are about 100 bytes
pub const MAX_RECORD_LEN: usize = 1024;

lazy_static! {
    static ref RECORD_RE: Regex = Regex::new(
        r"^Lat: ([\d.-]+)\s*Long: ([\d.-]+)\s*Alt: ([\d.-]+) feet\s*Speed: ([\d.-]+) mph\s*Heading: ([\d.-]+) degrees"
    ).unwrap();
}

/// parse a complete (single line) record. Returns `None` if it does not match the field pattern
pub fn parse_record (record: &str, timestamp: DateTime<Local>)->Option<Fix> {
    let caps = RECORD_RE.captures( record)?;

    let lat: f64 = caps[1].parse().ok()?;
    let lon: f64 = caps[2].parse().ok()?;
    let alt: f64 = caps[3].parse().ok()?;
    let spd: f64 = caps[4].parse().ok()?;
    let hdg: f64 = caps[5].parse().ok()?;

    Some( Fix::new( timestamp, lat, lon, alt, spd, hdg))
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum FrameState {
    Idle,
    Accumulating,
}

/// the line level state machine. Each instance owns its frame buffer, i.e. there is one per ingest loop
#[derive(Debug)]
pub struct FrameAssembler {
    state: FrameState,
    buf: String,
}

impl FrameAssembler {
    pub fn new ()->Self {
        FrameAssembler { state: FrameState::Idle, buf: String::with_capacity(128) }
    }

    pub fn state (&self)->FrameState { self.state }

    /// the partial record that is currently accumulated (empty if idle)
    pub fn pending (&self)->&str { self.buf.as_str() }

    /// feed the next line, stamping a completed fix with the current local time
    pub fn push_line (&mut self, line: &str)->Option<Fix> {
        self.push_line_at( line, Local::now())
    }

    pub fn push_line_at (&mut self, line: &str, timestamp: DateTime<Local>)->Option<Fix> {
        let line = line.trim();

        if line.starts_with( START_MARKER) {
            if self.state == FrameState::Accumulating {
                debug!("discarding incomplete record: {}", self.buf);
            }
            self.buf.clear();
            if line.len() > MAX_RECORD_LEN {
                debug!("dropping oversized record start of {} bytes", line.len());
                self.state = FrameState::Idle;
                return None
            }
            self.buf.push_str( line);
            self.state = FrameState::Accumulating;

            if line.contains( TERMINAL_MARKER) { // single line record
                return self.complete( timestamp)
            }

        } else if self.state == FrameState::Accumulating {
            if self.buf.len() + line.len() + 1 > MAX_RECORD_LEN {
                debug!("dropping record without terminal line after {} bytes", self.buf.len());
                self.reset();
                return None
            }
            self.buf.push(' ');
            self.buf.push_str( line);

            if line.contains( TERMINAL_MARKER) {
                return self.complete( timestamp)
            }
        }

        None
    }

    fn complete (&mut self, timestamp: DateTime<Local>)->Option<Fix> {
        let fix = parse_record( &self.buf, timestamp);
        if fix.is_none() {
            debug!("dropping malformed record: {}", self.buf);
        }

        self.reset();
        fix
    }

    fn reset (&mut self) {
        self.buf.clear();
        self.state = FrameState::Idle;
    }
}

impl Default for FrameAssembler {
    fn default()->Self { FrameAssembler::new() }
}
