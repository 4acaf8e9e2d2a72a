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
#![allow(unused)]

use std::{env, fs, path::PathBuf};
use serde_json::Value as JsonValue;
use swath_common::{datetime::parse_wall_clock, geo::LatLon};
use swath_track::{
    batch::*,
    fix::{Fix,FixLog,read_fix_log},
    offset::ArcScale
};

fn temp_path (name: &str)->PathBuf {
    env::temp_dir().join( format!("swath_{}_{}", std::process::id(), name))
}

fn fix (ts: &str, lat: f64, lon: f64, heading: f64)->Fix {
    Fix::new( parse_wall_clock(ts).unwrap(), lat, lon, 100.0, 5.0, heading)
}

fn two_fixes ()->Vec<Fix> {
    vec![
        fix( "2024-07-14 13:05:09", 0.0, 0.0, 0.0),
        fix( "2024-07-14 13:05:10", 0.0, 0.001, 0.0),
    ]
}

#[test]
fn test_two_fix_export() {
    let fixes = two_fixes();
    let export = BatchExporter::new( 30.0, ArcScale::Reference).export( &fixes);
    println!("{export:?}");

    assert_eq!( export.left.len(), 2);
    assert_eq!( export.right.len(), 2);
    assert_eq!( export.center, vec![LatLon::new(0.0,0.0), LatLon::new(0.0,0.001)]);

    assert_eq!( export.combined.len(), 5);
    assert_eq!( export.combined, vec![export.left[0], export.left[1], export.right[1], export.right[0], export.left[0]]);
    assert_eq!( export.reversed_right(), vec![export.right[1], export.right[0]]);

    // heading north: left is west, right is east
    for i in 0..2 {
        assert!( export.left[i].lon < export.center[i].lon);
        assert!( export.right[i].lon > export.center[i].lon);
        assert!( (export.left[i].lat - export.center[i].lat).abs() < 1e-12);
    }
}

#[test]
fn test_empty_export() {
    let export = BatchExporter::new( 30.0, ArcScale::Reference).export( &[]);
    assert!( export.is_empty());
    assert!( export.combined.is_empty());

    let path = temp_path( "empty.geojson");
    assert!( !render_export( &GeoJsonRenderer::new(), &export, &path).unwrap());
    assert!( !path.exists());
}

#[test]
fn test_geojson_map() {
    let export = BatchExporter::new( 30.0, ArcScale::Reference).export( &two_fixes());
    let path = temp_path( "map.geojson");

    assert!( render_export( &GeoJsonRenderer::new(), &export, &path).unwrap());
    let json: JsonValue = serde_json::from_str( &fs::read_to_string( &path).unwrap()).unwrap();
    fs::remove_file( &path).unwrap();

    assert_eq!( json["type"], "FeatureCollection");
    let features = json["features"].as_array().unwrap();
    assert_eq!( features.len(), 7); // 3x2 markers + polygon

    let colors: Vec<(&str,&str)> = features.iter()
        .filter( |f| f["geometry"]["type"] == "Point")
        .map( |f| (f["properties"]["role"].as_str().unwrap(), f["properties"]["marker-color"].as_str().unwrap()))
        .collect();
    assert_eq!( colors, vec![("center","blue"), ("center","blue"), ("left","green"), ("left","green"), ("right","red"), ("right","red")]);

    // GeoJSON is lon/lat
    let p = &features[1]["geometry"]["coordinates"];
    assert_eq!( p[0].as_f64(), Some(0.001));
    assert_eq!( p[1].as_f64(), Some(0.0));

    let poly = &features[6];
    assert_eq!( poly["geometry"]["type"], "Polygon");
    assert_eq!( poly["properties"]["fill-opacity"].as_f64(), Some(0.5));
    let ring = poly["geometry"]["coordinates"][0].as_array().unwrap();
    assert_eq!( ring.len(), 5);
    assert_eq!( ring[0], ring[4]);
}

#[test]
fn test_fix_log() {
    let path = temp_path( "gps_data.csv");
    let _ = fs::remove_file( &path);
    let fixes = two_fixes();

    {
        let mut log = FixLog::open( &path).unwrap();
        log.append( &fixes[0]).unwrap();
    }
    {
        // re-opening appends without a second header
        let mut log = FixLog::open( &path).unwrap();
        log.append( &fixes[1]).unwrap();
    }

    let content = fs::read_to_string( &path).unwrap();
    println!("{content}");
    assert!( content.starts_with( "Timestamp,Latitude,Longitude,Altitude (feet),Speed (mph),Heading (degrees)\n"));
    assert_eq!( content.lines().filter( |l| l.starts_with("Timestamp")).count(), 1);
    assert!( content.contains( "2024-07-14 13:05:10,"));

    let read = read_fix_log( &path).unwrap();
    fs::remove_file( &path).unwrap();

    assert_eq!( read.len(), 2);
    for (a,b) in read.iter().zip( fixes.iter()) {
        assert_eq!( a.timestamp, b.timestamp);
        assert_eq!( a.position, b.position);
        assert!( (a.altitude_feet() - b.altitude_feet()).abs() < 1e-9);
        assert!( (a.speed_mph() - b.speed_mph()).abs() < 1e-9);
        assert_eq!( a.heading, b.heading);
    }
}

#[test]
fn test_spaced_csv_header() {
    let path = temp_path( "spaced.csv");
    fs::write( &path, "Timestamp, Latitude, Longitude, Altitude (feet), Speed (mph), Heading (degrees)\n\
                       2024-07-14 13:05:09, 46.3345, -113.3021, 3520.5, 12.5, 308.0\n").unwrap();

    let read = read_fix_log( &path).unwrap();
    fs::remove_file( &path).unwrap();

    assert_eq!( read.len(), 1);
    assert_eq!( read[0].latitude(), 46.3345);
    assert_eq!( read[0].heading.degrees(), 308.0);

    // an empty log is not an error
    let path = temp_path( "empty.csv");
    fs::write( &path, "Timestamp,Latitude,Longitude,Altitude (feet),Speed (mph),Heading (degrees)\n").unwrap();
    assert!( read_fix_log( &path).unwrap().is_empty());
    fs::remove_file( &path).unwrap();
}
