//! Audio Capture
//!
//! Permission probe, record/stop lifecycle and elapsed-time tracking for
//! voice notes, written against the [`Recorder`] capability so it runs the
//! same way on top of `MediaRecorder` or a test double.
//!
//! Elapsed time comes from an external one-second tick, not from the audio
//! itself. A note saved after stopping between two ticks reports the lower
//! whole second.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{AudioClip, VoiceNote};
use crate::error::{CaptureError, CaptureResult};

/// Microphone access as last observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permission {
    #[default]
    Unrequested,
    Granted,
    Denied,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CapturePhase {
    #[default]
    Idle,
    Recording,
    /// Finished recording waiting to be saved or reset. The data URL is
    /// encoded once, on entry.
    Stopped { clip: AudioClip, data_url: Arc<str> },
}

/// Platform microphone recorder
///
/// `stop` releases the hardware stream; `finalize` then yields the audio
/// buffered since `start`.
#[async_trait(?Send)]
pub trait Recorder {
    /// Asks for microphone access without recording anything
    async fn request_permission(&mut self) -> CaptureResult<()>;

    /// Acquires the microphone and begins buffering
    async fn start(&mut self) -> CaptureResult<()>;

    /// Halts capture and releases the microphone
    fn stop(&mut self) -> CaptureResult<()>;

    /// Assembles everything buffered since `start` into one clip
    async fn finalize(&mut self) -> CaptureResult<AudioClip>;
}

/// Plain view of a session for rendering
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaptureView {
    pub permission: Permission,
    pub recording: bool,
    pub elapsed: u32,
    /// Playable data URL of the finished clip, shared with the session
    pub preview_url: Option<Arc<str>>,
}

pub struct CaptureSession<R> {
    recorder: R,
    permission: Permission,
    phase: CapturePhase,
    elapsed: u32,
}

impl<R: Recorder> CaptureSession<R> {
    pub fn new(recorder: R) -> Self {
        Self {
            recorder,
            permission: Permission::Unrequested,
            phase: CapturePhase::Idle,
            elapsed: 0,
        }
    }

    pub fn permission(&self) -> Permission {
        self.permission
    }

    pub fn phase(&self) -> &CapturePhase {
        &self.phase
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn is_recording(&self) -> bool {
        self.phase == CapturePhase::Recording
    }

    pub fn clip(&self) -> Option<&AudioClip> {
        match &self.phase {
            CapturePhase::Stopped { clip, .. } => Some(clip),
            _ => None,
        }
    }

    fn data_url(&self) -> Option<&Arc<str>> {
        match &self.phase {
            CapturePhase::Stopped { data_url, .. } => Some(data_url),
            _ => None,
        }
    }

    pub fn view(&self) -> CaptureView {
        CaptureView {
            permission: self.permission,
            recording: self.is_recording(),
            elapsed: self.elapsed,
            preview_url: self.data_url().cloned(),
        }
    }

    /// Mount-time probe; the outcome only drives the "not available" notice.
    pub async fn probe_permission(&mut self) -> Permission {
        self.permission = match self.recorder.request_permission().await {
            Ok(()) => Permission::Granted,
            Err(err) => {
                log::warn!("[CAPTURE] permission probe failed: {}", err);
                Permission::Denied
            }
        };
        self.permission
    }

    /// Starts a new recording, discarding any unsaved clip.
    pub async fn start(&mut self) -> CaptureResult<()> {
        if self.is_recording() {
            log::debug!("[CAPTURE] start ignored: already recording");
            return Ok(());
        }
        match self.recorder.start().await {
            Ok(()) => {
                self.permission = Permission::Granted;
                self.phase = CapturePhase::Recording;
                self.elapsed = 0;
                log::info!("[CAPTURE] recording started");
                Ok(())
            }
            Err(err) => {
                if matches!(err, CaptureError::PermissionDenied(_)) {
                    self.permission = Permission::Denied;
                }
                log::warn!("[CAPTURE] {}", err);
                Err(err)
            }
        }
    }

    /// One interval tick; counts only while recording.
    pub fn tick(&mut self) {
        if self.is_recording() {
            self.elapsed += 1;
        }
    }

    /// Stops the recording and keeps the finished clip. No-op when idle.
    pub async fn stop(&mut self) -> CaptureResult<()> {
        if !self.is_recording() {
            return Ok(());
        }
        let finished = match self.recorder.stop() {
            Ok(()) => self.recorder.finalize().await,
            Err(err) => Err(err),
        };
        match finished {
            Ok(clip) => {
                log::info!(
                    "[CAPTURE] recording stopped after {}s ({} bytes)",
                    self.elapsed,
                    clip.bytes.len()
                );
                let data_url = Arc::from(clip.to_data_url());
                self.phase = CapturePhase::Stopped { clip, data_url };
                Ok(())
            }
            Err(err) => {
                log::error!("[CAPTURE] {}", err);
                self.phase = CapturePhase::Idle;
                Err(err)
            }
        }
    }

    /// Drops the finished clip and zeroes elapsed time.
    pub fn reset(&mut self) {
        if !self.is_recording() {
            self.phase = CapturePhase::Idle;
        }
        self.elapsed = 0;
    }

    /// Turns the finished clip into a note for a collection currently holding
    /// `existing` notes, then resets. `None` without a non-empty clip.
    pub fn save(&mut self, existing: usize, now_ms: i64) -> Option<VoiceNote> {
        let note = match &self.phase {
            CapturePhase::Stopped { clip, data_url } if !clip.is_empty() => {
                VoiceNote::new(data_url.to_string(), self.elapsed, existing, now_ms)
            }
            _ => return None,
        };
        self.reset();
        Some(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockRecorder {
        deny: bool,
        fail_finalize: bool,
        capturing: bool,
        released: bool,
        buffered: Vec<u8>,
    }

    #[async_trait(?Send)]
    impl Recorder for MockRecorder {
        async fn request_permission(&mut self) -> CaptureResult<()> {
            if self.deny {
                Err(CaptureError::PermissionDenied("NotAllowedError".into()))
            } else {
                Ok(())
            }
        }

        async fn start(&mut self) -> CaptureResult<()> {
            self.request_permission().await?;
            self.capturing = true;
            self.released = false;
            self.buffered.clear();
            Ok(())
        }

        fn stop(&mut self) -> CaptureResult<()> {
            self.capturing = false;
            self.released = true;
            self.buffered.extend_from_slice(b"webm-bytes");
            Ok(())
        }

        async fn finalize(&mut self) -> CaptureResult<AudioClip> {
            if self.fail_finalize {
                return Err(CaptureError::Finalize("encoder error".into()));
            }
            Ok(AudioClip::new("audio/webm", std::mem::take(&mut self.buffered)))
        }
    }

    fn session() -> CaptureSession<MockRecorder> {
        CaptureSession::new(MockRecorder::default())
    }

    #[tokio::test]
    async fn test_three_ticks_yield_three_second_note() {
        let mut s = session();
        assert_eq!(s.probe_permission().await, Permission::Granted);

        s.start().await.unwrap();
        s.tick();
        s.tick();
        s.tick();
        s.stop().await.unwrap();

        assert!(s.recorder.released);
        let preview = s.view().preview_url.expect("preview");

        let note = s.save(0, 1_000).expect("note");
        assert_eq!(note.duration, 3);
        assert_eq!(note.label, "Voice 1");
        assert!(note.data.len() > "data:audio/webm;base64,".len());
        assert_eq!(note.data, &*preview);

        assert_eq!(s.phase(), &CapturePhase::Idle);
        assert_eq!(s.elapsed(), 0);
    }

    #[tokio::test]
    async fn test_views_share_one_encoded_preview() {
        let mut s = session();
        s.start().await.unwrap();
        s.tick();
        s.stop().await.unwrap();

        let first = s.view().preview_url.expect("preview");
        s.tick();
        let second = s.view().preview_url.expect("preview");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(&*first, s.clip().expect("clip").to_data_url());
    }

    #[tokio::test]
    async fn test_probe_denied() {
        let mut s = CaptureSession::new(MockRecorder {
            deny: true,
            ..Default::default()
        });
        assert_eq!(s.permission(), Permission::Unrequested);
        assert_eq!(s.probe_permission().await, Permission::Denied);
    }

    #[tokio::test]
    async fn test_start_denied_stays_idle() {
        let mut s = CaptureSession::new(MockRecorder {
            deny: true,
            ..Default::default()
        });
        let err = s.start().await.unwrap_err();

        assert!(matches!(err, CaptureError::PermissionDenied(_)));
        assert_eq!(s.permission(), Permission::Denied);
        assert_eq!(s.phase(), &CapturePhase::Idle);
    }

    #[tokio::test]
    async fn test_ticks_ignored_when_not_recording() {
        let mut s = session();
        s.tick();
        assert_eq!(s.elapsed(), 0);

        s.start().await.unwrap();
        s.tick();
        s.stop().await.unwrap();
        s.tick();
        assert_eq!(s.elapsed(), 1);
    }

    #[tokio::test]
    async fn test_reset_discards_clip() {
        let mut s = session();
        s.start().await.unwrap();
        s.tick();
        s.stop().await.unwrap();
        assert!(s.clip().is_some());

        s.reset();
        assert!(s.clip().is_none());
        assert_eq!(s.elapsed(), 0);
        assert!(s.save(0, 1).is_none());
    }

    #[tokio::test]
    async fn test_restart_zeroes_elapsed() {
        let mut s = session();
        s.start().await.unwrap();
        s.tick();
        s.tick();
        s.stop().await.unwrap();

        s.start().await.unwrap();
        assert_eq!(s.elapsed(), 0);
        assert!(s.clip().is_none());
        assert!(s.is_recording());
    }

    #[tokio::test]
    async fn test_finalize_failure_returns_to_idle() {
        let mut s = CaptureSession::new(MockRecorder {
            fail_finalize: true,
            ..Default::default()
        });
        s.start().await.unwrap();
        let err = s.stop().await.unwrap_err();

        assert!(matches!(err, CaptureError::Finalize(_)));
        assert_eq!(s.phase(), &CapturePhase::Idle);
        assert!(s.recorder.released);
    }

    #[tokio::test]
    async fn test_stop_when_idle_is_noop() {
        let mut s = session();
        s.stop().await.unwrap();
        assert_eq!(s.phase(), &CapturePhase::Idle);
        assert!(!s.recorder.released);
    }

    #[tokio::test]
    async fn test_save_label_follows_existing_count() {
        let mut s = session();
        s.start().await.unwrap();
        s.stop().await.unwrap();

        let note = s.save(4, 9).expect("note");
        assert_eq!(note.label, "Voice 5");
        assert_eq!(note.duration, 0);
    }
}
