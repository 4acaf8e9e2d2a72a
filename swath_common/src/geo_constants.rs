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

/// geodetic constants that have to be consistent between live tracking, batch export and tools

/// spherical earth radius in feet as used by all offset computations
pub const EARTH_RADIUS_FEET: f64 = 20925646.325;

/// mean earth radius in meters (only used for distance checks, not for offsets)
pub const MEAN_EARTH_RADIUS: f64 = 6371000.0;
