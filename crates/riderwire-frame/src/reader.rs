use std::io::{ErrorKind, Read};

use bytes::BytesMut;

use crate::codec::{decode_frame, Frame, FrameConfig, RawFrame};
use crate::error::{FrameError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 1024;
const READ_CHUNK_SIZE: usize = 512;

/// Reads complete frames from any `Read` stream.
///
/// Frames are split on the header length; partial reads are buffered until
/// a whole frame is present. There is no resynchronization: a malformed
/// header is reported and left at the front of the buffer.
///
/// As an [`Iterator`] the reader skips past payloads that fail to decode
/// (the frame was already split off the stream) but ends after any stream
/// error: a bad header, an oversized length, I/O failure or EOF.
pub struct FrameReader<T> {
    inner: T,
    buf: BytesMut,
    config: FrameConfig,
    done: bool,
}

impl<T: Read> FrameReader<T> {
    /// Create a new frame reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new frame reader with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
            done: false,
        }
    }

    /// Read and decode the next frame (blocking).
    ///
    /// Returns `Err(FrameError::ConnectionClosed)` when EOF is reached.
    pub fn read_frame(&mut self) -> Result<Frame> {
        self.read_raw()?.decode()
    }

    /// Read the next frame without decoding its payload (blocking).
    pub fn read_raw(&mut self) -> Result<RawFrame> {
        loop {
            if let Some(frame) = decode_frame(&mut self.buf, &self.config)? {
                return Ok(frame);
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };

            if read == 0 {
                return Err(FrameError::ConnectionClosed);
            }

            self.buf.extend_from_slice(&chunk[..read]);
        }
    }

    /// Bytes received but not yet returned as a frame.
    pub fn buffered(&self) -> &[u8] {
        &self.buf
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current frame reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

impl<T: Read> Iterator for FrameReader<T> {
    type Item = Result<Frame>;

    /// Yields frames until the stream ends. A clean EOF between frames
    /// yields `None`; any other stream error is yielded once, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_raw() {
            Ok(raw) => Some(raw.decode()),
            Err(err) => {
                self.done = true;
                match err {
                    FrameError::ConnectionClosed if self.buf.is_empty() => None,
                    err => Some(Err(err)),
                }
            }
        }
    }
}
