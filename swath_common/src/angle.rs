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

use std::{fmt,ops};
use serde::{Serialize,Deserialize};

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

/// a compass bearing in degrees, clockwise from true north, normalized to [0..360)
///
/// Bearings are kept in degrees and only converted to radians where trigonometry needs it.
/// Note that arithmetic wraps around, i.e. `Bearing::from_degrees(308.0) + 90.0` is 38°
#[derive(Clone,Copy,PartialEq,PartialOrd,Serialize,Deserialize)]
#[serde(from="f64", into="f64")]
pub struct Bearing(f64);

impl Bearing {
    pub const NORTH: Bearing = Bearing(0.0);

    #[inline]
    pub fn from_degrees (deg: f64)->Self { Bearing( normalize_360(deg)) }

    #[inline] pub fn degrees (&self)->f64 { self.0 }
    #[inline] pub fn radians (&self)->f64 { self.0.to_radians() }

    /// perpendicular bearing to the left of travel direction
    #[inline] pub fn left (&self)->Self { *self - 90.0 }

    /// perpendicular bearing to the right of travel direction
    #[inline] pub fn right (&self)->Self { *self + 90.0 }
}

impl From<f64> for Bearing {
    fn from (deg: f64)->Self { Bearing::from_degrees(deg) }
}

impl From<Bearing> for f64 {
    fn from (b: Bearing)->Self { b.0 }
}

impl ops::Add<f64> for Bearing {
    type Output = Self;
    fn add (self, rhs: f64)->Self::Output { Bearing::from_degrees( self.0 + rhs) }
}

impl ops::Sub<f64> for Bearing {
    type Output = Self;
    fn sub (self, rhs: f64)->Self::Output { Bearing::from_degrees( self.0 - rhs) }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}°", self.0) }
}

impl fmt::Debug for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Bearing({})", self.0) }
}
