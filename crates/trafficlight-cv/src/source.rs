//! Frame acquisition from a camera or video file.

use opencv::{prelude::*, videoio};
use thiserror::Error;

/// Errors raised while opening or reading a video source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The camera or file identified by the argument could not be opened.
    /// Fatal at startup, never retried.
    #[error("cannot open video source: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Backend(#[from] opencv::Error),
}

/// A lazy sequence of BGR frames from a camera index or file path.
#[derive(Debug)]
pub struct FrameSource {
    capture: videoio::VideoCapture,
}

impl FrameSource {
    /// Open the source named by `spec`: a numeric string selects a camera
    /// index, anything else is treated as a file path.
    pub fn open(spec: &str) -> Result<Self, SourceError> {
        let capture = if let Ok(index) = spec.parse::<i32>() {
            videoio::VideoCapture::new(index, videoio::CAP_ANY)?
        } else {
            videoio::VideoCapture::from_file(spec, videoio::CAP_ANY)?
        };

        if !capture.is_opened()? {
            return Err(SourceError::Unavailable(spec.to_string()));
        }

        Ok(Self { capture })
    }

    /// Fetch the next frame, or `None` at end-of-stream.
    ///
    /// End-of-stream is a normal terminal condition for the iteration loop,
    /// not an error.
    pub fn next_frame(&mut self) -> Result<Option<Mat>, SourceError> {
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? || frame.empty() {
            return Ok(None);
        }
        Ok(Some(frame))
    }
}
