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

use std::path::Path;
use anyhow::Result;
use swath_common::{define_cli, check_cli, datetime::local_now};
use swath_track::{
    init_tracing,
    batch::{GeoJsonRenderer,MapRenderer,MarkerRole,StaticMap},
    fix::Fix,
    offset::{ArcScale,DistanceMode,GeodesicOffset}
};

define_cli! { ARGS [about="show left/right offset points of a single position"] =
    lat: f64               [help="latitude in degrees", long, default_value="46.3345", allow_hyphen_values=true],
    lon: f64               [help="longitude in degrees", long, default_value="-113.3021", allow_hyphen_values=true],
    heading: f64           [help="heading in degrees clockwise from north", long, default_value="308"],
    distance: f64          [help="offset distance in feet", long, short, default_value="30"],
    consistent_units: bool [help="convert distances with feet on both sides (default is the reference scale)", long],
    output: String         [help="output pathname of the map", long, short, default_value="offset_map.geojson"]
}

fn main()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    let arc_scale = if ARGS.consistent_units { ArcScale::Consistent } else { ArcScale::Reference };
    let fix = Fix::new( local_now(), ARGS.lat, ARGS.lon, 0.0, 0.0, ARGS.heading);

    // the whole distance on each side
    let offsets = GeodesicOffset::new( arc_scale).lateral( &fix, None, ARGS.distance, DistanceMode::Full);

    println!("original: {}", fix.position);
    println!("left:     {}", offsets.left.position);
    println!("right:    {}", offsets.right.position);

    let mut map = StaticMap::default();
    map.add_markers( MarkerRole::Original, &[fix.position]);
    map.add_markers( MarkerRole::Left, &[offsets.left.position]);
    map.add_markers( MarkerRole::Right, &[offsets.right.position]);
    GeoJsonRenderer::new().render( &map, Path::new( &ARGS.output))?;

    Ok(())
}
