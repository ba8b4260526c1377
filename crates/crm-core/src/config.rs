//! Dashboard configuration.
//!
//! Everything here is compiled in; there is no environment or file source.

use std::time::Duration;

/// Storage keys of the three persisted collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub leads: String,
    pub tasks: String,
    pub voices: String,
}

impl StorageKeys {
    /// Keys namespaced as `<prefix>:leads` etc.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            leads: format!("{}:leads", prefix),
            tasks: format!("{}:tasks", prefix),
            voices: format!("{}:voices", prefix),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix("oceancrm")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrmConfig {
    pub keys: StorageKeys,
    /// Simulated assistant latency
    pub assistant_delay: Duration,
    /// Period of the elapsed-seconds tick while recording
    pub capture_tick: Duration,
    /// Media type of recorded clips
    pub audio_mime: String,
    /// Lines kept by the in-memory log buffer
    pub log_capacity: usize,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            assistant_delay: Duration::from_millis(500),
            capture_tick: Duration::from_secs(1),
            audio_mime: "audio/webm".to_string(),
            log_capacity: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keys = StorageKeys::default();
        assert_eq!(keys.leads, "oceancrm:leads");
        assert_eq!(keys.tasks, "oceancrm:tasks");
        assert_eq!(keys.voices, "oceancrm:voices");
    }
}
