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

use chrono::Local;
use swath_common::{angle::Bearing, geo::LatLon};
use swath_track::{fix::Fix, offset::*};

const R_FT: f64 = 20_925_646.325;

fn fix (lat: f64, lon: f64, heading: f64)->Fix {
    Fix::new( Local::now(), lat, lon, 0.0, 0.0, heading)
}

// plain destination point formula, written out here so that we don't test the implementation against itself
fn reference_destination (lat: f64, lon: f64, bearing_deg: f64, δ: f64)->(f64,f64) {
    let φ1 = lat.to_radians();
    let λ1 = lon.to_radians();
    let θ = bearing_deg.to_radians();
    let φ2 = (φ1.sin() * δ.cos() + φ1.cos() * δ.sin() * θ.cos()).asin();
    let λ2 = λ1 + (θ.sin() * δ.sin() * φ1.cos()).atan2( δ.cos() - φ1.sin() * φ2.sin());
    (φ2.to_degrees(), λ2.to_degrees())
}

#[test]
fn test_reference_point() {
    let f = fix( 46.3345, -113.3021, 308.0);
    let off = GeodesicOffset::default().lateral( &f, None, 30.0, DistanceMode::HalfWidth);
    println!("left: {}, right: {}", off.left.position, off.right.position);

    let δ = 15.0 * 0.3048 / R_FT;
    let (lat_l, lon_l) = reference_destination( 46.3345, -113.3021, 218.0, δ);
    let (lat_r, lon_r) = reference_destination( 46.3345, -113.3021, 38.0, δ);

    assert!( (off.left.position.lat - lat_l).abs() < 1e-12);
    assert!( (off.left.position.lon - lon_l).abs() < 1e-12);
    assert!( (off.right.position.lat - lat_r).abs() < 1e-12);
    assert!( (off.right.position.lon - lon_r).abs() < 1e-12);

    for p in [off.left.position, off.right.position] {
        let d = f.position.haversine_distance( &p);
        println!("displacement: {d}m");
        assert!( d > 0.0 && d < 4.58);
    }

    assert!( (f.position.bearing_to( &off.left.position).degrees() - 218.0).abs() < 1e-4);
    assert!( (f.position.bearing_to( &off.right.position).degrees() - 38.0).abs() < 1e-4);
}

#[test]
fn test_lateral_symmetry() {
    let offsetter = GeodesicOffset::new( ArcScale::Consistent);

    for lat in [-60.0, -30.0, 0.0, 12.5, 46.3345, 60.0] {
        for h in (0..360).step_by(15) {
            let heading = h as f64;
            let f = fix( lat, -113.3021, heading);
            let off = offsetter.lateral( &f, None, 30.0, DistanceMode::HalfWidth);

            let dl = f.position.haversine_distance( &off.left.position);
            let dr = f.position.haversine_distance( &off.right.position);
            assert!( (dl - dr).abs() < 1e-6, "unequal distances at lat={lat} heading={heading}");

            // left and right are mirrored across the heading line, i.e. the center is their midpoint
            let mid_lat = (off.left.position.lat + off.right.position.lat) / 2.0;
            let mid_lon = (off.left.position.lon + off.right.position.lon) / 2.0;
            assert!( (mid_lat - lat).abs() < 1e-9, "asymmetric latitude at lat={lat} heading={heading}");
            assert!( (mid_lon - f.longitude()).abs() < 1e-9, "asymmetric longitude at lat={lat} heading={heading}");

            let bl = f.position.bearing_to( &off.left.position);
            let br = f.position.bearing_to( &off.right.position);
            let opposite = Bearing::from_degrees( bl.degrees() + 180.0 - br.degrees()).degrees();
            assert!( opposite < 1e-4 || opposite > 360.0 - 1e-4, "left/right not opposite at lat={lat} heading={heading}");
        }
    }
}

#[test]
fn test_arc_scale() {
    let f = fix( 46.3345, -113.3021, 90.0);

    let reference = GeodesicOffset::new( ArcScale::Reference).lateral( &f, None, 30.0, DistanceMode::HalfWidth);
    let consistent = GeodesicOffset::new( ArcScale::Consistent).lateral( &f, None, 30.0, DistanceMode::HalfWidth);

    let dr = f.position.haversine_distance( &reference.left.position);
    let dc = f.position.haversine_distance( &consistent.left.position);
    println!("reference: {dr}m, consistent: {dc}m");

    assert!( (dc - 4.567).abs() < 0.01);
    assert!( (dr / dc - 0.3048).abs() < 1e-6);
}

#[test]
fn test_distance_modes() {
    let f = fix( 10.0, 20.0, 0.0);
    let offsetter = GeodesicOffset::default();

    let half = offsetter.angular_distance( 30.0, DistanceMode::HalfWidth);
    let full = offsetter.angular_distance( 30.0, DistanceMode::Full);
    assert!( (full - 2.0 * half).abs() < 1e-18);

    let p = offsetter.project( &f, Bearing::NORTH, 30.0, DistanceMode::Full);
    assert!( p.lat > f.latitude());
    assert!( (p.lon - f.longitude()).abs() < 1e-12);
}

#[test]
fn test_generic_offset() {
    let f = fix( 46.3345, -113.3021, 308.0);
    let offsetter = GeodesicOffset::default();

    let pts = offsetter.offset( &f, None, 30.0, DistanceMode::HalfWidth, &OffsetRole::LATERAL);
    let lat = offsetter.lateral( &f, None, 30.0, DistanceMode::HalfWidth);
    assert_eq!( pts, vec![lat.left, lat.right]);

    // a heading override replaces the heading of the fix
    let pts = offsetter.offset( &f, Some(Bearing::from_degrees(0.0)), 30.0, DistanceMode::HalfWidth, &[OffsetRole::Right]);
    let north = fix( 46.3345, -113.3021, 0.0);
    assert_eq!( pts[0], offsetter.lateral( &north, None, 30.0, DistanceMode::HalfWidth).right);
}

#[test]
fn test_footprint() {
    let f = fix( 46.3345, -113.3021, 308.0);
    let offsetter = GeodesicOffset::default();
    let fp = offsetter.footprint( &f, 30.0);
    println!("{fp:?}");

    // corners of one side sit on the lateral swath line, not ahead of or behind the fix
    let lat = offsetter.lateral( &f, None, 30.0, DistanceMode::HalfWidth);
    assert_eq!( fp.front_left.position, lat.left.position);
    assert_eq!( fp.rear_left.position, lat.left.position);
    assert_eq!( fp.front_right.position, lat.right.position);
    assert_eq!( fp.rear_right.position, lat.right.position);
    assert_eq!( fp.rear_left.role, OffsetRole::RearLeft);

    let (lat_l, lon_l) = reference_destination( 46.3345, -113.3021, 218.0, 15.0 * 0.3048 / R_FT);
    assert!( (fp.rear_left.position.lat - lat_l).abs() < 1e-12);
    assert!( (fp.rear_left.position.lon - lon_l).abs() < 1e-12);

    // the projection ahead converts feet directly
    assert_eq!( fp.front_projection.role, OffsetRole::FrontProjection);
    let (lat_p, lon_p) = reference_destination( 46.3345, -113.3021, 308.0, 30.0 / R_FT);
    assert!( (fp.front_projection.position.lat - lat_p).abs() < 1e-12);
    assert!( (fp.front_projection.position.lon - lon_p).abs() < 1e-12);
    assert_eq!( GeodesicOffset::new( ArcScale::Consistent).footprint( &f, 30.0).front_projection, fp.front_projection);

    let d = f.position.haversine_distance( &fp.front_projection.position);
    assert!( (d - 9.144).abs() < 0.02);
    assert!( (f.position.bearing_to( &fp.front_projection.position).degrees() - 308.0).abs() < 1e-4);
}
