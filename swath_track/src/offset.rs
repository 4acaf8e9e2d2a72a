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

//! geodesic offset points around a fix.
//!
//! All offsets use the spherical destination-point formula on a sphere with radius [`EARTH_RADIUS_FEET`].
//! Everything in here is total over f64 inputs - there is no range check for latitudes or longitudes.

use std::fmt;
use serde::{Serialize,Deserialize};
use uom::si::{f64::Length, length::{foot,meter}};

use swath_common::{sin,cos,asin,atan2,rad,deg};
use swath_common::{angle::Bearing, geo::LatLon, geo_constants::EARTH_RADIUS_FEET};
use crate::fix::Fix;

/// the default total width (or length) of the tracked footprint
pub const DEFAULT_DISTANCE_FEET: f64 = 30.0;

/// how the distance handed to [`GeodesicOffset`] is applied
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum DistanceMode {
    /// distance is the total width around a center, each side gets half of it
    HalfWidth,
    /// distance is used as given
    Full
}

impl DistanceMode {
    pub fn effective_feet (&self, distance_feet: f64)->f64 {
        match self {
            DistanceMode::HalfWidth => distance_feet / 2.0,
            DistanceMode::Full => distance_feet
        }
    }
}

/// conversion of a ground distance into an angular distance
///
/// `Reference` divides the distance in *meters* by the earth radius in *feet*, i.e. offsets come out at
/// 0.3048 of their nominal size. Existing maps and marker positions use this scale.
/// `Consistent` uses feet on both sides
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize,Default)]
pub enum ArcScale {
    #[default]
    Reference,
    Consistent
}

impl ArcScale {
    pub fn angular_distance (&self, distance: Length)->f64 {
        match self {
            ArcScale::Reference => distance.get::<meter>() / EARTH_RADIUS_FEET,
            ArcScale::Consistent => distance.get::<foot>() / EARTH_RADIUS_FEET,
        }
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
#[serde(rename_all="snake_case")]
pub enum OffsetRole {
    Left,
    Right,
    FrontLeft,
    FrontRight,
    RearLeft,
    RearRight,
    FrontProjection,
}

impl OffsetRole {
    pub const LATERAL: [OffsetRole;2] = [OffsetRole::Left, OffsetRole::Right];
    pub const CORNERS: [OffsetRole;4] = [OffsetRole::FrontLeft, OffsetRole::FrontRight, OffsetRole::RearLeft, OffsetRole::RearRight];

    /// the bearing from the center to this role. Corners lie on the lateral line through the fix,
    /// i.e. front and rear corners of one side coincide with the lateral offset of that side
    fn bearing (&self, heading: Bearing)->Bearing {
        match self {
            OffsetRole::Left | OffsetRole::FrontLeft | OffsetRole::RearLeft => heading.left(),
            OffsetRole::Right | OffsetRole::FrontRight | OffsetRole::RearRight => heading.right(),
            OffsetRole::FrontProjection => heading,
        }
    }
}

impl fmt::Display for OffsetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OffsetRole::Left => "left",
            OffsetRole::Right => "right",
            OffsetRole::FrontLeft => "front_left",
            OffsetRole::FrontRight => "front_right",
            OffsetRole::RearLeft => "rear_left",
            OffsetRole::RearRight => "rear_right",
            OffsetRole::FrontProjection => "front_projection",
        };
        f.write_str(s)
    }
}

/// a derived position with the role it plays in the footprint
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct OffsetPoint {
    pub role: OffsetRole,
    pub position: LatLon,
}

impl OffsetPoint {
    pub fn new (role: OffsetRole, position: LatLon)->Self { OffsetPoint{role,position} }
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct LateralOffsets {
    pub left: OffsetPoint,
    pub right: OffsetPoint,
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct FootprintOffsets {
    pub front_left: OffsetPoint,
    pub front_right: OffsetPoint,
    pub rear_left: OffsetPoint,
    pub rear_right: OffsetPoint,
    pub front_projection: OffsetPoint,
}

/// spherical destination point for given start, initial bearing and angular distance δ (radians)
pub fn destination (start: &LatLon, bearing: Bearing, δ: f64)->LatLon {
    let φ1 = rad(start.lat);
    let λ1 = rad(start.lon);
    let θ = bearing.radians();

    let φ2 = asin( sin(φ1) * cos(δ) + cos(φ1) * sin(δ) * cos(θ));
    let λ2 = λ1 + atan2( sin(θ) * sin(δ) * cos(φ1), cos(δ) - sin(φ1) * sin(φ2));

    LatLon::new( deg(φ2), deg(λ2))
}

/// the single parameterized offset calculator used by live tracking, batch export and tools
#[derive(Debug,Clone,Copy,Default)]
pub struct GeodesicOffset {
    arc_scale: ArcScale,
}

impl GeodesicOffset {
    pub fn new (arc_scale: ArcScale)->Self { GeodesicOffset{arc_scale} }

    /// angular distance for a distance in feet after applying the distance mode
    pub fn angular_distance (&self, distance_feet: f64, mode: DistanceMode)->f64 {
        let d = Length::new::<foot>( mode.effective_feet( distance_feet));
        self.arc_scale.angular_distance(d)
    }

    /// compute the offset points for the requested roles, in the order of `roles`.
    /// `heading_override` replaces the heading of the fix if set
    pub fn offset (&self, fix: &Fix, heading_override: Option<Bearing>, distance_feet: f64, mode: DistanceMode, roles: &[OffsetRole])->Vec<OffsetPoint> {
        let heading = heading_override.unwrap_or( fix.heading);
        let δ = self.angular_distance( distance_feet, mode);

        roles.iter().map( |role| {
            OffsetPoint::new( *role, destination( &fix.position, role.bearing( heading), δ))
        }).collect()
    }

    pub fn lateral (&self, fix: &Fix, heading_override: Option<Bearing>, distance_feet: f64, mode: DistanceMode)->LateralOffsets {
        let heading = heading_override.unwrap_or( fix.heading);
        let δ = self.angular_distance( distance_feet, mode);

        LateralOffsets {
            left: OffsetPoint::new( OffsetRole::Left, destination( &fix.position, heading.left(), δ)),
            right: OffsetPoint::new( OffsetRole::Right, destination( &fix.position, heading.right(), δ)),
        }
    }

    /// corners at half distance left and right of the fix plus the full distance projection ahead of it.
    /// The projection always converts feet directly, it is not subject to the arc scale
    pub fn footprint (&self, fix: &Fix, distance_feet: f64)->FootprintOffsets {
        let corners = self.offset( fix, None, distance_feet, DistanceMode::HalfWidth, &OffsetRole::CORNERS);
        let δ = ArcScale::Consistent.angular_distance( Length::new::<foot>( distance_feet));
        let front_projection = destination( &fix.position, fix.heading, δ);

        FootprintOffsets {
            front_left: corners[0],
            front_right: corners[1],
            rear_left: corners[2],
            rear_right: corners[3],
            front_projection: OffsetPoint::new( OffsetRole::FrontProjection, front_projection),
        }
    }

    /// single point at given bearing
    pub fn project (&self, fix: &Fix, bearing: Bearing, distance_feet: f64, mode: DistanceMode)->LatLon {
        destination( &fix.position, bearing, self.angular_distance( distance_feet, mode))
    }
}
