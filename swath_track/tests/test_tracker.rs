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
use swath_common::geo::LatLon;
use swath_track::{
    config::{OffsetConfig,OffsetVariant},
    fix::Fix,
    offset::{DistanceMode,GeodesicOffset},
    tracker::*
};

fn fixes (n: usize)->Vec<Fix> {
    (0..n).map( |i| Fix::new( Local::now(), 46.3345 + i as f64 * 0.0001, -113.3021, 3520.0, 10.0, 0.0)).collect()
}

fn lateral_tracker ()->PathTracker {
    PathTracker::new( &OffsetConfig::default(), false)
}

#[test]
fn test_inactive() {
    let mut tracker = lateral_tracker();
    assert!( !tracker.is_active());

    for fix in fixes(3) {
        let update = tracker.on_fix( &fix);
        assert_eq!( update.position, fix.position);
        assert!( update.geometry.is_none());
    }
    assert!( tracker.session().left().is_empty());
    assert!( tracker.session().right().is_empty());
}

#[test]
fn test_combined_polygon() {
    let mut tracker = lateral_tracker();
    assert!( tracker.toggle());

    for (i,fix) in fixes(4).iter().enumerate() {
        let update = tracker.on_fix( fix);
        match update.geometry {
            Some(TrackGeometry::Lateral{ left, center, right, combined }) => {
                let n = i + 1;
                assert_eq!( center, fix.position);
                assert_eq!( combined.len(), 2*n + 1);
                assert_eq!( combined.first(), combined.last());
                assert_eq!( combined[n-1], left); // last left point before the reversed right side
                assert_eq!( combined[n], right);
            }
            other => panic!("expected lateral geometry, got {other:?}")
        }
    }

    let session = tracker.session();
    assert_eq!( session.left().len(), 4);
    assert_eq!( session.right().len(), 4);
    assert_eq!( session.combined()[0], session.left().positions()[0]);
}

#[test]
fn test_combined_polygon_fn() {
    assert!( combined_polygon( &[], &[]).is_empty());

    let l = [LatLon::new(0.0,0.0), LatLon::new(1.0,0.0)];
    let r = [LatLon::new(0.0,1.0), LatLon::new(1.0,1.0)];
    let ring = combined_polygon( &l, &r);
    assert_eq!( ring, vec![l[0], l[1], r[1], r[0], l[0]]);
}

#[test]
fn test_toggle_retains_paths() {
    let mut tracker = lateral_tracker();
    tracker.toggle();
    for fix in fixes(2) { tracker.on_fix( &fix); }

    let before = tracker.session().combined();
    assert!( !tracker.toggle());
    assert!( tracker.toggle());
    assert_eq!( tracker.session().combined(), before);

    // while disabled nothing gets added
    tracker.toggle();
    for fix in fixes(2) { tracker.on_fix( &fix); }
    assert_eq!( tracker.session().left().len(), 2);
}

#[test]
fn test_reset_on_enable() {
    let mut tracker = PathTracker::new( &OffsetConfig::default(), true);
    tracker.toggle();
    for fix in fixes(3) { tracker.on_fix( &fix); }
    assert_eq!( tracker.session().left().len(), 3);

    tracker.toggle(); // disabling keeps paths
    assert_eq!( tracker.session().left().len(), 3);

    tracker.toggle(); // enabling clears them
    assert!( tracker.session().left().is_empty());
    assert!( tracker.session().right().is_empty());
}

#[test]
fn test_footprint_variant() {
    let config = OffsetConfig { variant: OffsetVariant::Footprint, ..OffsetConfig::default() };
    let mut tracker = PathTracker::new( &config, false);
    tracker.toggle();

    let fix = &fixes(1)[0];
    let update = tracker.on_fix( fix);
    let fp = GeodesicOffset::new( config.arc_scale).footprint( fix, config.distance_feet);

    match update.geometry {
        Some(TrackGeometry::Footprint{ front, combined, front_projection }) => {
            assert_eq!( front, [fp.front_left.position, fp.front_right.position]);
            let lat = GeodesicOffset::new( config.arc_scale).lateral( fix, None, config.distance_feet, DistanceMode::HalfWidth);
            assert_eq!( front, [lat.left.position, lat.right.position]);
            assert_eq!( front_projection, fp.front_projection.position);
            assert_eq!( combined, vec![fp.rear_left.position, fp.rear_right.position, fp.rear_left.position]);
        }
        other => panic!("expected footprint geometry, got {other:?}")
    }

    // trailing edge goes into the paths
    assert_eq!( tracker.session().left().positions(), &[fp.rear_left.position]);
    assert_eq!( tracker.session().right().positions(), &[fp.rear_right.position]);

    // ..and it covers the same swath as the lateral variant
    let mut lateral = lateral_tracker();
    lateral.toggle();
    lateral.on_fix( fix);
    assert_eq!( tracker.session().left().positions(), lateral.session().left().positions());
    assert_eq!( tracker.session().right().positions(), lateral.session().right().positions());
}

#[tokio::test]
async fn test_shared_tracker() {
    let tracker = lateral_tracker().into_shared();

    let t = tracker.clone();
    let active = tokio::spawn( async move { t.lock().await.toggle() }).await.unwrap();
    assert!( active);

    let update = { tracker.lock().await.on_fix( &fixes(1)[0]) };
    assert!( update.geometry.is_some());
}
