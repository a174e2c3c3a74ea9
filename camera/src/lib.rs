use anyhow::bail;
use opencv::{
    core::{Mat, MatTraitConst},
    videoio::{VideoCapture, VideoCaptureTrait, VideoCaptureTraitConst, CAP_ANY},
};

/// Anything that hands out BGR frames, one per tick.
pub trait FrameSource {
    /// `Ok(None)` means no frame was available this time.
    fn next_frame(&mut self) -> anyhow::Result<Option<Mat>>;
}

pub struct Webcam {
    capture: VideoCapture,
    index: i32,
}

impl Webcam {
    /// Opens the capture device, failing if it cannot be used.
    pub fn open(index: i32) -> anyhow::Result<Self> {
        let capture = VideoCapture::new(index, CAP_ANY)?;
        if !capture.is_opened()? {
            bail!("Failed to open camera {index}");
        }
        log::debug!("Opened camera {index}");

        Ok(Webcam { capture, index })
    }
}

impl FrameSource for Webcam {
    fn next_frame(&mut self) -> anyhow::Result<Option<Mat>> {
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? || frame.empty() {
            log::debug!("Camera {} returned no frame", self.index);
            return Ok(None);
        }

        Ok(Some(frame))
    }
}

impl Drop for Webcam {
    fn drop(&mut self) {
        if let Err(e) = self.capture.release() {
            log::error!("Failed to release camera {}: {e}", self.index);
        }
    }
}

/// Replays a fixed list of frames; `None` entries stand for dropped frames.
pub struct FrameQueue {
    frames: std::collections::VecDeque<Option<Mat>>,
}

impl FrameQueue {
    pub fn new(frames: impl IntoIterator<Item = Option<Mat>>) -> Self {
        Self { frames: frames.into_iter().collect() }
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FrameSource for FrameQueue {
    fn next_frame(&mut self) -> anyhow::Result<Option<Mat>> {
        Ok(self.frames.pop_front().flatten())
    }
}

#[cfg(test)]
mod tests {
    use opencv::core::{Scalar, Size, CV_8UC3};

    use super::*;

    #[test]
    fn missing_device_fails_to_open() {
        assert!(Webcam::open(9999).is_err());
    }

    #[test]
    fn queue_replays_frames_and_gaps() -> anyhow::Result<()> {
        let frame = Mat::new_size_with_default(Size::new(4, 4), CV_8UC3, Scalar::all(0.0))?;
        let mut queue = FrameQueue::new([Some(frame), None]);

        assert!(queue.next_frame()?.is_some());
        assert!(queue.next_frame()?.is_none());
        assert!(queue.is_empty());
        assert!(queue.next_frame()?.is_none());

        Ok(())
    }
}
