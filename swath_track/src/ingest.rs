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

use std::{fmt, path::PathBuf};
use tokio::{fs::File, net::TcpStream, io::{AsyncBufRead,AsyncBufReadExt,AsyncReadExt,BufReader}};
use tracing::{debug,info,warn};

use crate::{
    broadcast::{LiveBroadcaster,LiveEvent},
    errors::{Result,SwathTrackError,parse_error},
    fix::{Fix,FixLog},
    frame::FrameAssembler,
    tracker::SharedTracker
};

pub type FixReader = Box<dyn AsyncBufRead + Unpin + Send>;

const TCP_PREFIX: &'static str = "tcp://";

/// lines longer than this are dropped up to the next newline
pub const MAX_LINE_LEN: usize = 1024;

/// where fixes come from. Serial line settings of devices are configured outside of this process
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum FixSource {
    Device(PathBuf),
    Tcp(String), // host:port of a serial-to-network bridge
}

impl FixSource {
    pub fn parse (s: &str)->Result<Self> {
        let s = s.trim();
        if let Some(addr) = s.strip_prefix( TCP_PREFIX) {
            if addr.is_empty() { return Err( parse_error!("no address in fix source {}", s)) }
            Ok( FixSource::Tcp( addr.to_string()) )
        } else {
            if s.is_empty() { return Err( parse_error!("empty fix source")) }
            Ok( FixSource::Device( PathBuf::from(s)) )
        }
    }
}

impl fmt::Display for FixSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixSource::Device(path) => write!( f, "{}", path.display()),
            FixSource::Tcp(addr) => write!( f, "{}{}", TCP_PREFIX, addr),
        }
    }
}

/// open the line stream of a fix source. Failure to open is not retried
pub async fn open_source (source: &str, baud_rate: u32)->Result<FixReader> {
    let open_err = |e| SwathTrackError::SourceOpenError( source.to_string(), e);

    let reader: FixReader = match FixSource::parse( source)? {
        FixSource::Device(path) => {
            let file = File::open( &path).await.map_err( open_err)?;
            Box::new( BufReader::with_capacity( 4096, file))
        }
        FixSource::Tcp(addr) => {
            let stream = TcpStream::connect( &addr).await.map_err( open_err)?;
            Box::new( BufReader::with_capacity( 4096, stream))
        }
    };

    info!("connected to {} at {} baud", source, baud_rate);
    Ok(reader)
}

/// async stream of fixes read from a line oriented source
pub struct FixStream<R> {
    reader: R,
    assembler: FrameAssembler,
    buf: Vec<u8>,
    skip_to_eol: bool, // we are in the remainder of an oversized line
}

impl <R> FixStream<R> where R: AsyncBufRead + Unpin {
    pub fn new (reader: R)->Self {
        FixStream { reader, assembler: FrameAssembler::new(), buf: Vec::with_capacity(256), skip_to_eol: false }
    }

    /// next complete fix, or `None` if the source is exhausted.
    /// Lines that are not valid UTF-8 or longer than [`MAX_LINE_LEN`] are skipped
    pub async fn next_fix (&mut self)->Result<Option<Fix>> {
        loop {
            self.buf.clear();
            let len = (&mut self.reader).take( MAX_LINE_LEN as u64).read_until( b'\n', &mut self.buf).await?;
            if len == 0 {
                return Ok(None)
            }

            if len == MAX_LINE_LEN && self.buf.last() != Some(&b'\n') {
                if !self.skip_to_eol { debug!("dropping line longer than {} bytes", MAX_LINE_LEN) }
                self.skip_to_eol = true;
                continue
            }
            if self.skip_to_eol { // tail of the dropped line
                self.skip_to_eol = false;
                continue
            }

            match std::str::from_utf8( &self.buf) {
                Ok(line) => {
                    debug!("raw data: {}", line.trim_end());
                    if let Some(fix) = self.assembler.push_line( line) {
                        return Ok(Some(fix))
                    }
                }
                Err(e) => debug!("skipping undecodable line: {}", e)
            }
        }
    }
}

/// the live read loop. Runs until the source is exhausted or fails
///
/// every fix is published as `current_location`, derived geometry only while tracking is active.
/// Events are published while holding the tracker lock so that observers see them in the order of tracker
/// state changes. Publishing does not block
pub async fn run_live_ingest<R> (mut fixes: FixStream<R>, tracker: SharedTracker, broadcaster: LiveBroadcaster, mut fix_log: Option<FixLog>)->Result<()>
    where R: AsyncBufRead + Unpin
{
    while let Some(fix) = fixes.next_fix().await? {
        if let Some(log) = fix_log.as_mut() {
            if let Err(e) = log.append( &fix) {
                warn!("failed to log fix to {:?}: {}", log.path(), e);
            }
        }

        let mut path_tracker = tracker.lock().await;
        let update = path_tracker.on_fix( &fix);

        broadcaster.publish( &LiveEvent::current_location( &update.position))?;
        if let Some(geometry) = update.geometry {
            broadcaster.publish( &LiveEvent::TrackingGeometry(geometry))?;
        }
    }

    info!("fix source closed");
    Ok(())
}
