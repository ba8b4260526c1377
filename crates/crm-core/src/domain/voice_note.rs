//! Voice Note Entity
//!
//! A saved recording. The audio travels inside the record as a data URL so a
//! note is playable straight from storage.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::entity::{remove_by_id, Entity};

/// Raw audio produced by a finished recording
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl AudioClip {
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `data:<mime>;base64,<payload>`
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// A saved recording, newest first in its collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceNote {
    pub id: String,
    pub label: String,
    /// Self-describing data URL
    pub data: String,
    /// Whole seconds counted by the capture tick
    pub duration: u32,
    /// Epoch milliseconds
    pub created_at: i64,
}

impl VoiceNote {
    /// Builds the note that will sit in front of `existing` from an already
    /// encoded data URL.
    pub fn new(data: String, duration: u32, existing: usize, now_ms: i64) -> Self {
        Self {
            id: format!("v_{}", now_ms),
            label: format!("Voice {}", existing + 1),
            data,
            duration,
            created_at: now_ms,
        }
    }

    pub fn from_clip(clip: &AudioClip, duration: u32, existing: usize, now_ms: i64) -> Self {
        Self::new(clip.to_data_url(), duration, existing, now_ms)
    }
}

impl Entity for VoiceNote {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Returns the next voice collection with `note` at the head.
pub fn add_voice(voices: &[VoiceNote], note: VoiceNote) -> Vec<VoiceNote> {
    let mut updated = Vec::with_capacity(voices.len() + 1);
    updated.push(note);
    updated.extend_from_slice(voices);
    updated
}

pub fn delete_voice(voices: &[VoiceNote], id: &str) -> Vec<VoiceNote> {
    remove_by_id(voices, id)
}

/// `mm:ss` as shown next to the record button
pub fn format_elapsed(seconds: u32) -> String {
    format!("{:02}:{:02}", (seconds / 60) % 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_embeds_mime() {
        let clip = AudioClip::new("audio/webm", b"abc".to_vec());
        assert_eq!(clip.to_data_url(), "data:audio/webm;base64,YWJj");
    }

    #[test]
    fn test_labels_are_sequential() {
        let clip = AudioClip::new("audio/webm", vec![1, 2, 3]);
        let first = VoiceNote::from_clip(&clip, 3, 0, 100);
        let voices = add_voice(&[], first);
        let second = VoiceNote::from_clip(&clip, 1, voices.len(), 200);
        let voices = add_voice(&voices, second);

        assert_eq!(voices[0].label, "Voice 2");
        assert_eq!(voices[0].id, "v_200");
        assert_eq!(voices[1].label, "Voice 1");
        assert_eq!(voices[1].duration, 3);
    }

    #[test]
    fn test_delete_voice() {
        let clip = AudioClip::new("audio/webm", vec![0]);
        let voices = add_voice(&[], VoiceNote::from_clip(&clip, 1, 0, 1));
        let voices = add_voice(&voices, VoiceNote::from_clip(&clip, 1, 1, 2));

        let after = delete_voice(&voices, "v_1");
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].id, "v_2");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(65), "01:05");
        assert_eq!(format_elapsed(3600 + 7), "00:07");
    }

    #[test]
    fn test_wire_format() {
        let clip = AudioClip::new("audio/webm", vec![9]);
        let note = VoiceNote::from_clip(&clip, 4, 0, 1_700_000_000_000);
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["duration"], 4);
        assert_eq!(json["createdAt"], 1_700_000_000_000i64);
        assert!(json["data"].as_str().unwrap().starts_with("data:audio/webm;base64,"));
    }
}
