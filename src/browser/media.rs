//! MediaRecorder backend
//!
//! Implements the capture `Recorder` capability with `getUserMedia` and
//! `MediaRecorder`. Chunks arrive through `dataavailable`; the `stop` event
//! is awaited before the chunks are assembled into one blob.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use crm_core::capture::Recorder;
use crm_core::domain::AudioClip;
use crm_core::error::{CaptureError, CaptureResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobEvent, BlobPropertyBag, MediaRecorder, MediaStream, MediaStreamConstraints, MediaStreamTrack};

use super::js_error;

pub struct BrowserRecorder {
    mime: String,
    stream: Option<MediaStream>,
    recorder: Option<MediaRecorder>,
    chunks: Rc<RefCell<Vec<Blob>>>,
    on_data: Option<Closure<dyn FnMut(BlobEvent)>>,
    /// Resolves on the recorder's `stop` event
    stopped: Option<js_sys::Promise>,
}

impl BrowserRecorder {
    pub fn new(mime: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            stream: None,
            recorder: None,
            chunks: Rc::new(RefCell::new(Vec::new())),
            on_data: None,
            stopped: None,
        }
    }

    async fn acquire() -> CaptureResult<MediaStream> {
        let window = web_sys::window().ok_or_else(|| CaptureError::PermissionDenied("no window".into()))?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|e| CaptureError::PermissionDenied(js_error(&e)))?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);
        let request = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| CaptureError::PermissionDenied(js_error(&e)))?;

        JsFuture::from(request)
            .await
            .map_err(|e| CaptureError::PermissionDenied(js_error(&e)))?
            .dyn_into::<MediaStream>()
            .map_err(|_| CaptureError::Start("getUserMedia did not yield a MediaStream".into()))
    }

    fn detach_recorder(&mut self) {
        if let Some(recorder) = self.recorder.take() {
            recorder.set_ondataavailable(None);
            recorder.set_onstop(None);
        }
        self.on_data = None;
    }
}

/// Stops every track so the browser drops its microphone indicator
fn release_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

#[async_trait(?Send)]
impl Recorder for BrowserRecorder {
    async fn request_permission(&mut self) -> CaptureResult<()> {
        let stream = Self::acquire().await?;
        release_tracks(&stream);
        Ok(())
    }

    async fn start(&mut self) -> CaptureResult<()> {
        let stream = Self::acquire().await?;
        let recorder = match MediaRecorder::new_with_media_stream(&stream) {
            Ok(recorder) => recorder,
            Err(e) => {
                release_tracks(&stream);
                return Err(CaptureError::Start(js_error(&e)));
            }
        };

        self.chunks.borrow_mut().clear();
        let chunks = Rc::clone(&self.chunks);
        let on_data = Closure::<dyn FnMut(BlobEvent)>::new(move |ev: BlobEvent| {
            if let Some(blob) = ev.data() {
                chunks.borrow_mut().push(blob);
            }
        });
        recorder.set_ondataavailable(Some(on_data.as_ref().unchecked_ref()));

        if let Err(e) = recorder.start() {
            recorder.set_ondataavailable(None);
            release_tracks(&stream);
            return Err(CaptureError::Start(js_error(&e)));
        }

        log::debug!("[MEDIA] MediaRecorder started");
        self.stream = Some(stream);
        self.recorder = Some(recorder);
        self.on_data = Some(on_data);
        Ok(())
    }

    fn stop(&mut self) -> CaptureResult<()> {
        let result = match &self.recorder {
            Some(recorder) => {
                let stopped = js_sys::Promise::new(&mut |resolve, _reject| {
                    recorder.set_onstop(Some(&resolve));
                });
                match recorder.stop() {
                    Ok(()) => {
                        self.stopped = Some(stopped);
                        Ok(())
                    }
                    Err(e) => Err(CaptureError::Finalize(js_error(&e))),
                }
            }
            None => Ok(()),
        };
        if let Some(stream) = self.stream.take() {
            release_tracks(&stream);
        }
        if result.is_err() {
            self.detach_recorder();
        }
        result
    }

    async fn finalize(&mut self) -> CaptureResult<AudioClip> {
        if let Some(stopped) = self.stopped.take() {
            JsFuture::from(stopped)
                .await
                .map_err(|e| CaptureError::Finalize(js_error(&e)))?;
        }
        self.detach_recorder();

        let parts = js_sys::Array::new();
        for chunk in self.chunks.borrow_mut().drain(..) {
            parts.push(&chunk);
        }
        let options = BlobPropertyBag::new();
        options.set_type(&self.mime);
        let blob = Blob::new_with_blob_sequence_and_options(&parts, &options)
            .map_err(|e| CaptureError::Finalize(js_error(&e)))?;

        let buffer = JsFuture::from(blob.array_buffer())
            .await
            .map_err(|e| CaptureError::Finalize(js_error(&e)))?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        log::debug!("[MEDIA] assembled {} chunks into {} bytes", parts.length(), bytes.len());

        Ok(AudioClip::new(self.mime.clone(), bytes))
    }
}
