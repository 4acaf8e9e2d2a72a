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

use std::sync::Arc;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug,info};

use swath_common::geo::LatLon;
use crate::{
    config::{LiveConfig,OffsetConfig,OffsetVariant},
    fix::Fix,
    offset::{DistanceMode,GeodesicOffset,OffsetPoint,OffsetRole}
};

/// the tracker handle shared between the ingest loop and the observer service
pub type SharedTracker = Arc<Mutex<PathTracker>>;

/// append-only sequence of offset positions for one role, in fix arrival order
#[derive(Debug,Clone)]
pub struct Path {
    role: OffsetRole,
    points: Vec<LatLon>,
}

impl Path {
    pub fn new (role: OffsetRole)->Self { Path { role, points: Vec::new() } }

    pub fn push (&mut self, p: &OffsetPoint) {
        self.points.push( p.position)
    }

    pub fn positions (&self)->&[LatLon] { self.points.as_slice() }
    pub fn len (&self)->usize { self.points.len() }
    pub fn is_empty (&self)->bool { self.points.is_empty() }

    fn clear (&mut self) {
        debug!("clearing {} path with {} points", self.role, self.points.len());
        self.points.clear()
    }
}

/// closed ring `left ++ reverse(right) ++ [left[0]]`. This is empty if `left` is empty
pub fn combined_polygon (left: &[LatLon], right: &[LatLon])->Vec<LatLon> {
    if let Some(first) = left.first() {
        let mut ring = Vec::with_capacity( left.len() + right.len() + 1);
        ring.extend_from_slice( left);
        ring.extend( right.iter().rev());
        ring.push( *first);
        ring
    } else {
        Vec::new()
    }
}

/// on/off window in which offsets accumulate. Paths are only cleared explicitly
#[derive(Debug,Clone)]
pub struct TrackingSession {
    active: bool,
    left: Path,
    right: Path,
}

impl TrackingSession {
    pub fn new ()->Self {
        TrackingSession { active: false, left: Path::new( OffsetRole::Left), right: Path::new( OffsetRole::Right) }
    }

    pub fn is_active (&self)->bool { self.active }
    pub fn left (&self)->&Path { &self.left }
    pub fn right (&self)->&Path { &self.right }

    /// flip the active flag and return the new value
    pub fn toggle (&mut self)->bool {
        self.active = !self.active;
        self.active
    }

    /// both sides are always appended together so that they keep the same length
    pub fn append (&mut self, left: &OffsetPoint, right: &OffsetPoint) {
        self.left.push( left);
        self.right.push( right);
    }

    pub fn combined (&self)->Vec<LatLon> {
        combined_polygon( self.left.positions(), self.right.positions())
    }

    pub fn clear_paths (&mut self) {
        self.left.clear();
        self.right.clear();
    }
}

impl Default for TrackingSession {
    fn default()->Self { TrackingSession::new() }
}

/// the derived geometry for one fix while tracking is active
#[derive(Debug,Clone,PartialEq,Serialize)]
#[serde(untagged)]
pub enum TrackGeometry {
    Lateral {
        left: LatLon,
        center: LatLon,
        right: LatLon,
        combined: Vec<LatLon>,
    },
    Footprint {
        front: [LatLon;2], // [front_left, front_right]
        combined: Vec<LatLon>,
        front_projection: LatLon,
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct TrackUpdate {
    pub position: LatLon,
    pub geometry: Option<TrackGeometry>,
}

/// turns fixes into session paths and per-fix geometry
#[derive(Debug)]
pub struct PathTracker {
    session: TrackingSession,
    offsetter: GeodesicOffset,
    distance_feet: f64,
    variant: OffsetVariant,
    reset_paths_on_enable: bool,
}

impl PathTracker {
    pub fn new (offset_config: &OffsetConfig, reset_paths_on_enable: bool)->Self {
        PathTracker {
            session: TrackingSession::new(),
            offsetter: GeodesicOffset::new( offset_config.arc_scale),
            distance_feet: offset_config.distance_feet,
            variant: offset_config.variant,
            reset_paths_on_enable
        }
    }

    pub fn from_config (config: &LiveConfig)->Self {
        PathTracker::new( &config.offset, config.reset_paths_on_enable)
    }

    pub fn into_shared (self)->SharedTracker { Arc::new( Mutex::new(self)) }

    pub fn session (&self)->&TrackingSession { &self.session }
    pub fn is_active (&self)->bool { self.session.is_active() }

    pub fn toggle (&mut self)->bool {
        let active = self.session.toggle();
        if active && self.reset_paths_on_enable {
            self.session.clear_paths();
        }
        info!("tracking {}", if active {"enabled"} else {"disabled"});
        active
    }

    pub fn on_fix (&mut self, fix: &Fix)->TrackUpdate {
        let position = fix.position;

        let geometry = match self.variant {
            OffsetVariant::Lateral => {
                let lat = self.offsetter.lateral( fix, None, self.distance_feet, DistanceMode::HalfWidth);
                if self.session.is_active() {
                    self.session.append( &lat.left, &lat.right);
                    Some( TrackGeometry::Lateral {
                        left: lat.left.position,
                        center: position,
                        right: lat.right.position,
                        combined: self.session.combined()
                    })
                } else {
                    None
                }
            }
            OffsetVariant::Footprint => {
                let fp = self.offsetter.footprint( fix, self.distance_feet);
                if self.session.is_active() {
                    // the paths follow the trailing edge of the footprint
                    self.session.append( &fp.rear_left, &fp.rear_right);
                    Some( TrackGeometry::Footprint {
                        front: [fp.front_left.position, fp.front_right.position],
                        combined: self.session.combined(),
                        front_projection: fp.front_projection.position
                    })
                } else {
                    None
                }
            }
        };

        TrackUpdate { position, geometry }
    }
}
