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

//! fan-out of live tracking events to observers.
//!
//! Events are serialized once into JSON text and then pushed into a `tokio::sync::broadcast` channel.
//! Each observer has its own bounded view of that channel - if it falls behind by more than the
//! configured queue length it loses the oldest events, other observers and the publisher are not affected.

use serde::{Serialize,Deserialize};
use tokio::sync::broadcast;
use tracing::trace;

use swath_common::geo::LatLon;
use crate::{errors::Result, tracker::TrackGeometry};

/// outbound observer events, serialized as JSON objects with an `event` tag
#[derive(Debug,Clone,PartialEq,Serialize)]
#[serde(tag="event", rename_all="snake_case")]
pub enum LiveEvent {
    CurrentLocation { lat: f64, lon: f64 },
    TrackingStatus { active: bool },
    TrackingGeometry(TrackGeometry),
}

impl LiveEvent {
    pub fn current_location (pos: &LatLon)->Self { LiveEvent::CurrentLocation { lat: pos.lat, lon: pos.lon } }
    pub fn tracking_status (active: bool)->Self { LiveEvent::TrackingStatus { active } }

    pub fn to_json (&self)->Result<String> {
        Ok( serde_json::to_string( self)? )
    }
}

/// inbound observer requests
#[derive(Debug,Clone,Copy,PartialEq,Eq,Deserialize)]
#[serde(tag="request", rename_all="snake_case")]
pub enum ObserverRequest {
    ToggleTracking,
}

impl ObserverRequest {
    /// accepts both the bare request name and the JSON form `{"request":"toggle_tracking"}`
    pub fn parse (msg: &str)->Option<Self> {
        let msg = msg.trim();
        if msg == "toggle_tracking" {
            Some( ObserverRequest::ToggleTracking)
        } else {
            serde_json::from_str( msg).ok()
        }
    }
}

#[derive(Debug,Clone)]
pub struct LiveBroadcaster {
    tx: broadcast::Sender<String>,
}

impl LiveBroadcaster {
    /// `queue_len` is the number of events each observer can lag behind before it starts to lose them
    pub fn new (queue_len: usize)->Self {
        let (tx,_) = broadcast::channel( queue_len.max(1));
        LiveBroadcaster { tx }
    }

    /// send event to all currently connected observers and return how many that were.
    /// This never blocks and it is not an error if nobody is listening
    pub fn publish (&self, event: &LiveEvent)->Result<usize> {
        let msg = event.to_json()?;
        trace!("publish {}", msg);
        Ok( self.tx.send( msg).unwrap_or(0) )
    }

    pub fn subscribe (&self)->broadcast::Receiver<String> {
        self.tx.subscribe()
    }

    pub fn observer_count (&self)->usize {
        self.tx.receiver_count()
    }
}
