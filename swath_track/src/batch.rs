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

//! offline counterpart of the live tracker: offsets for a recorded fix sequence plus a static map of them

use std::{fs, path::Path};
use geo_types::{LineString,Polygon};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use tracing::{debug,info};

use swath_common::geo::LatLon;
use crate::{
    errors::Result,
    fix::Fix,
    offset::{ArcScale,DistanceMode,GeodesicOffset},
    tracker::combined_polygon
};

pub const DEFAULT_MAP_FILE: &'static str = "map.geojson";

/// per-fix positions in input order plus the closed polygon over all of them
#[derive(Debug,Clone,Default,PartialEq)]
pub struct BatchExport {
    pub left: Vec<LatLon>,
    pub center: Vec<LatLon>,
    pub right: Vec<LatLon>,
    pub combined: Vec<LatLon>,
}

impl BatchExport {
    pub fn is_empty (&self)->bool { self.center.is_empty() }

    pub fn reversed_right (&self)->Vec<LatLon> {
        self.right.iter().rev().cloned().collect()
    }
}

pub struct BatchExporter {
    offsetter: GeodesicOffset,
    distance_feet: f64,
}

impl BatchExporter {
    pub fn new (distance_feet: f64, arc_scale: ArcScale)->Self {
        BatchExporter { offsetter: GeodesicOffset::new( arc_scale), distance_feet }
    }

    /// left/right at half the distance for each fix. An empty input yields an empty export
    pub fn export (&self, fixes: &[Fix])->BatchExport {
        let mut left = Vec::with_capacity( fixes.len());
        let mut center = Vec::with_capacity( fixes.len());
        let mut right = Vec::with_capacity( fixes.len());

        for fix in fixes {
            let lat = self.offsetter.lateral( fix, None, self.distance_feet, DistanceMode::HalfWidth);
            left.push( lat.left.position);
            center.push( fix.position);
            right.push( lat.right.position);
        }

        let combined = combined_polygon( &left, &right);
        BatchExport { left, center, right, combined }
    }
}

/* #region static map rendering *****************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum MarkerRole {
    Center,
    Left,
    Right,
    Original,
}

impl MarkerRole {
    pub fn name (&self)->&'static str {
        match self {
            MarkerRole::Center => "center",
            MarkerRole::Left => "left",
            MarkerRole::Right => "right",
            MarkerRole::Original => "original",
        }
    }

    pub fn color (&self)->&'static str {
        match self {
            MarkerRole::Center | MarkerRole::Original => "blue",
            MarkerRole::Left => "green",
            MarkerRole::Right => "red",
        }
    }
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct MapMarker {
    pub role: MarkerRole,
    pub position: LatLon,
}

/// what goes into a static map: markers and an optional filled polygon (empty if none)
#[derive(Debug,Clone,Default,PartialEq)]
pub struct StaticMap {
    pub markers: Vec<MapMarker>,
    pub polygon: Vec<LatLon>,
}

impl StaticMap {
    pub fn add_markers (&mut self, role: MarkerRole, positions: &[LatLon]) {
        self.markers.extend( positions.iter().map( |p| MapMarker{ role, position: *p }));
    }

    pub fn is_empty (&self)->bool { self.markers.is_empty() && self.polygon.is_empty() }
}

impl From<&BatchExport> for StaticMap {
    fn from (export: &BatchExport)->Self {
        let mut map = StaticMap::default();
        map.add_markers( MarkerRole::Center, &export.center);
        map.add_markers( MarkerRole::Left, &export.left);
        map.add_markers( MarkerRole::Right, &export.right);
        map.polygon = export.combined.clone();
        map
    }
}

/// the static map artifact writer
pub trait MapRenderer {
    fn render (&self, map: &StaticMap, path: &Path)->Result<()>;
}

/// writes maps as GeoJSON feature collections, using simplestyle property names for marker color and fill
pub struct GeoJsonRenderer {
    pub fill_opacity: f64,
}

impl GeoJsonRenderer {
    pub fn new ()->Self { GeoJsonRenderer { fill_opacity: 0.5 } }

    pub fn feature_collection (&self, map: &StaticMap)->FeatureCollection {
        let mut features: Vec<Feature> = map.markers.iter().map( |m| {
            let mut props = JsonObject::new();
            props.insert( "role".to_string(), JsonValue::from( m.role.name()));
            props.insert( "marker-color".to_string(), JsonValue::from( m.role.color()));
            feature( Value::from( &m.position.point()), props)
        }).collect();

        if !map.polygon.is_empty() {
            let ring: LineString<f64> = map.polygon.iter().map( |p| p.coord()).collect();
            let mut props = JsonObject::new();
            props.insert( "role".to_string(), JsonValue::from( "combined"));
            props.insert( "fill".to_string(), JsonValue::from( "blue"));
            props.insert( "fill-opacity".to_string(), JsonValue::from( self.fill_opacity));
            features.push( feature( Value::from( &Polygon::new( ring, vec![])), props));
        }

        FeatureCollection { bbox: None, features, foreign_members: None }
    }
}

impl Default for GeoJsonRenderer {
    fn default()->Self { GeoJsonRenderer::new() }
}

impl MapRenderer for GeoJsonRenderer {
    fn render (&self, map: &StaticMap, path: &Path)->Result<()> {
        let fc = self.feature_collection( map);
        fs::write( path, serde_json::to_string_pretty( &fc)?)?;
        info!("map saved as {:?}", path);
        Ok(())
    }
}

fn feature (value: Value, properties: JsonObject)->Feature {
    Feature {
        bbox: None,
        geometry: Some( Geometry::new( value)),
        id: None,
        properties: Some( properties),
        foreign_members: None
    }
}

/// render a batch export unless it is empty. Returns true if a map was written
pub fn render_export (renderer: &dyn MapRenderer, export: &BatchExport, path: &Path)->Result<bool> {
    if export.is_empty() {
        debug!("no fixes, skipping map rendering");
        Ok(false)
    } else {
        renderer.render( &StaticMap::from( export), path)?;
        Ok(true)
    }
}

/* #endregion static map rendering */
