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

//! the observer side of live tracking: a websocket route at `/ws` plus an optional static viewer page at `/`

use std::net::SocketAddr;
use axum::{
    extract::{State, ws::{Message, WebSocket, WebSocketUpgrade}, connect_info::ConnectInfo},
    response::{Response,IntoResponse},
    routing::{Router,get},
};
use futures::{sink::SinkExt, stream::StreamExt};
use tokio::{sync::broadcast::error::RecvError, task::JoinHandle};
use tower_http::services::ServeDir;
use tracing::{debug,info,warn};

use crate::{
    broadcast::{LiveBroadcaster,LiveEvent,ObserverRequest},
    config::ServerConfig,
    errors::{Result,op_failed},
    tracker::SharedTracker
};

#[derive(Clone)]
pub struct LiveState {
    pub tracker: SharedTracker,
    pub broadcaster: LiveBroadcaster,
}

pub fn build_router (config: &ServerConfig, state: LiveState)->Router {
    let router = Router::new()
        .route( "/ws", get( ws_handler))
        .with_state( state);

    if let Some(dir) = &config.assets_dir {
        router.fallback_service( ServeDir::new( dir))
    } else {
        router
    }
}

/// bind the server socket and run the server in its own task
pub async fn spawn_server_task (config: &ServerConfig, state: LiveState)->Result<JoinHandle<()>> {
    let router = build_router( config, state).into_make_service_with_connect_info::<SocketAddr>();
    let listener = tokio::net::TcpListener::bind( config.sock_addr).await
        .map_err( |e| op_failed( format!("cannot bind {}: {}", config.sock_addr, e)))?;
    info!("serving observers on {}", config.ws_url());

    Ok( tokio::spawn( async move {
        if let Err(e) = axum::serve( listener, router).await {
            warn!("observer server terminated: {}", e);
        }
    }))
}

async fn ws_handler (ws: WebSocketUpgrade, ConnectInfo(addr): ConnectInfo<SocketAddr>, State(state): State<LiveState>)->Response {
    ws.on_upgrade( move |socket| handle_socket( socket, addr, state)).into_response()
}

/// each connection gets its own broadcast receiver, i.e. its own bounded event queue
async fn handle_socket (ws: WebSocket, remote_addr: SocketAddr, state: LiveState) {
    info!("observer {} connected", remote_addr);

    let (mut ws_sender, mut ws_receiver) = ws.split();

    // greet with the current tracking status. Subscribed under the lock, so no queued event predates the greeting
    let (mut events, active) = {
        let tracker = state.tracker.lock().await;
        (state.broadcaster.subscribe(), tracker.is_active())
    };
    if let Ok(msg) = LiveEvent::tracking_status( active).to_json() {
        if ws_sender.send( Message::text( msg)).await.is_err() {
            info!("observer {} disconnected", remote_addr);
            return
        }
    }

    let mut send_task = tokio::spawn( async move {
        loop {
            match events.recv().await {
                Ok(msg) => {
                    if ws_sender.send( Message::text( msg)).await.is_err() { break }
                }
                Err(RecvError::Lagged(n)) => debug!("observer {} dropped {} events", remote_addr, n),
                Err(RecvError::Closed) => break
            }
        }
    });

    let mut recv_task = {
        let state = state.clone();
        tokio::spawn( async move {
            while let Some(Ok(msg)) = ws_receiver.next().await {
                match msg {
                    Message::Text(text) => handle_request( &state, remote_addr, text.as_str()).await,
                    Message::Close(_) => break,
                    _ => {} // ping/pong are handled by axum, binary is ignored
                }
            }
        })
    };

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    info!("observer {} disconnected", remote_addr);
}

/// process an inbound observer message. A toggle flips the shared tracking state and echoes the new status to all
/// observers, including the sender
pub async fn handle_request (state: &LiveState, remote_addr: SocketAddr, msg: &str) {
    match ObserverRequest::parse( msg) {
        Some(ObserverRequest::ToggleTracking) => {
            let mut tracker = state.tracker.lock().await;
            let active = tracker.toggle();
            debug!("observer {} toggled tracking to {}", remote_addr, active);

            if let Err(e) = state.broadcaster.publish( &LiveEvent::tracking_status( active)) {
                warn!("failed to publish tracking status: {}", e);
            }
        }
        None => debug!("ignoring observer message from {}: {}", remote_addr, msg)
    }
}
