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
use tracing::{debug,info};
use swath_common::{define_cli, check_cli};
use swath_track::{
    init_tracing,
    batch::{BatchExporter,GeoJsonRenderer,render_export},
    fix::read_fix_log,
    offset::ArcScale
};

define_cli! { ARGS [about="compute swath offsets for a recorded fix log and render them as a static map"] =
    distance: f64          [help="total swath width in feet", long, short, default_value="30"],
    consistent_units: bool [help="convert distances with feet on both sides (default is the reference scale)", long],
    output: String         [help="output pathname of the map", long, short, default_value="map.geojson"],
    csv_file: String       [help="recorded fix log", default_value="gps_data.csv"]
}

fn main()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    let arc_scale = if ARGS.consistent_units { ArcScale::Consistent } else { ArcScale::Reference };
    let fixes = read_fix_log( &ARGS.csv_file)?;
    let export = BatchExporter::new( ARGS.distance, arc_scale).export( &fixes);

    debug!("left: {:?}", export.left);
    debug!("center: {:?}", export.center);
    debug!("right: {:?}", export.right);
    debug!("reversed right: {:?}", export.reversed_right());
    debug!("combined: {:?}", export.combined);
    info!("{} fixes read from {}, combined polygon has {} points", fixes.len(), ARGS.csv_file, export.combined.len());

    if !render_export( &GeoJsonRenderer::new(), &export, Path::new( &ARGS.output))? {
        info!("no fixes in {}, no map written", ARGS.csv_file);
    }

    Ok(())
}
