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

//! WGS84 degree positions.
//!
//! We keep our own small position type instead of using `geo_types::Point` directly since all our
//! consumers (map viewers, CSV logs) use latitude-first order, whereas `geo_types` is x/y (longitude-first).
//! Conversion into `geo_types` happens at the rendering boundary.

use std::fmt;
use serde::{Serialize,Deserialize};
use geo_types::{Coord,Point};

use crate::{sin,cos,asin,atan2,sqrt,pow2,rad,deg};
use crate::angle::Bearing;
use crate::geo_constants::MEAN_EARTH_RADIUS;

/// geodetic position in degrees. Note there is no normalization or range check - values are used as given.
/// Serializes as a `[lat,lon]` pair
#[derive(Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(from="[f64;2]", into="[f64;2]")]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new (lat: f64, lon: f64)->Self { LatLon{lat,lon} }

    /// great circle distance in meters on a sphere with mean earth radius
    pub fn haversine_distance (&self, other: &LatLon)->f64 {
        let φ1 = rad(self.lat);
        let φ2 = rad(other.lat);
        let dφ = φ2 - φ1;
        let dλ = rad(other.lon - self.lon);

        let a = pow2(sin(dφ/2.0)) + cos(φ1) * cos(φ2) * pow2(sin(dλ/2.0));
        2.0 * MEAN_EARTH_RADIUS * asin(sqrt(a))
    }

    /// initial great circle bearing from self to other
    pub fn bearing_to (&self, other: &LatLon)->Bearing {
        let φ1 = rad(self.lat);
        let φ2 = rad(other.lat);
        let dλ = rad(other.lon - self.lon);

        let y = sin(dλ) * cos(φ2);
        let x = cos(φ1) * sin(φ2) - sin(φ1) * cos(φ2) * cos(dλ);
        Bearing::from_degrees( deg(atan2(y,x)))
    }

    pub fn coord (&self)->Coord<f64> { Coord{ x: self.lon, y: self.lat } }
    pub fn point (&self)->Point<f64> { Point::new( self.lon, self.lat) }
}

impl From<[f64;2]> for LatLon {
    fn from (a: [f64;2])->Self { LatLon{ lat: a[0], lon: a[1] } }
}

impl From<LatLon> for [f64;2] {
    fn from (p: LatLon)->Self { [p.lat, p.lon] }
}

impl From<LatLon> for Point<f64> {
    fn from (p: LatLon)->Self { p.point() }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.lat, self.lon)
    }
}

impl fmt::Debug for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LatLon({},{})", self.lat, self.lon)
    }
}
