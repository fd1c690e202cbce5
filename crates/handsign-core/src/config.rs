use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{HandSignError, Result};

/// Top-level configuration for HandSign.
///
/// Loaded from `~/.handsign/config.toml` by default. Every section falls back
/// to its defaults, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HandSignConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub recognition: RecognitionConfig,
    #[serde(default)]
    pub tracking: TrackingConfig,
}

impl HandSignConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: HandSignConfig = toml::from_str(&content)?;
        config.validate()?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file is missing,
    /// unparsable or invalid. Only a file that exists but fails warns.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the configuration as pretty TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Reject values the recognizer or the tracking filter cannot work with.
    pub fn validate(&self) -> Result<()> {
        self.recognition.validate()?;
        self.tracking.validate()
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Evidence accumulation policy of the temporal recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// A gesture commits once its detection count exceeds this value.
    pub commit_threshold: f64,
    /// Live confidence is only reported once the count exceeds this value.
    pub live_confidence_floor: f64,
    /// Count subtracted from a gesture for every frame it is not detected.
    pub decay_per_frame: f64,
    /// The same gesture may commit twice in a row only after a gap of more
    /// than this many milliseconds between detections.
    pub retrigger_window_ms: i64,
    /// Upper bound of the live (pre-commit) confidence percentage.
    pub max_live_confidence: u8,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            commit_threshold: 15.0,
            live_confidence_floor: 5.0,
            decay_per_frame: 0.5,
            retrigger_window_ms: 5000,
            max_live_confidence: 95,
        }
    }
}

impl RecognitionConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.commit_threshold > 0.0) {
            return Err(HandSignError::Config(format!(
                "recognition.commit_threshold must be positive, got {}",
                self.commit_threshold
            )));
        }
        if !(self.live_confidence_floor >= 0.0 && self.live_confidence_floor < self.commit_threshold)
        {
            return Err(HandSignError::Config(format!(
                "recognition.live_confidence_floor must be in [0, {}), got {}",
                self.commit_threshold, self.live_confidence_floor
            )));
        }
        if !(self.decay_per_frame > 0.0) {
            return Err(HandSignError::Config(format!(
                "recognition.decay_per_frame must be positive, got {}",
                self.decay_per_frame
            )));
        }
        if self.retrigger_window_ms < 0 {
            return Err(HandSignError::Config(format!(
                "recognition.retrigger_window_ms must not be negative, got {}",
                self.retrigger_window_ms
            )));
        }
        // 100 is reserved for the commit frame.
        if self.max_live_confidence >= 100 {
            return Err(HandSignError::Config(format!(
                "recognition.max_live_confidence must be below 100, got {}",
                self.max_live_confidence
            )));
        }
        Ok(())
    }
}

/// Filter applied when decoding hand-tracker output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Hands considered per frame. Only the first is classified.
    pub max_num_hands: usize,
    /// Hands scored below this are treated as absent.
    pub min_detection_confidence: f32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            max_num_hands: 1,
            min_detection_confidence: 0.8,
        }
    }
}

impl TrackingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_num_hands == 0 {
            return Err(HandSignError::Config(
                "tracking.max_num_hands must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_detection_confidence) {
            return Err(HandSignError::Config(format!(
                "tracking.min_detection_confidence must be in [0, 1], got {}",
                self.min_detection_confidence
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = HandSignConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.recognition.commit_threshold, 15.0);
        assert_eq!(config.recognition.live_confidence_floor, 5.0);
        assert_eq!(config.recognition.decay_per_frame, 0.5);
        assert_eq!(config.recognition.retrigger_window_ms, 5000);
        assert_eq!(config.recognition.max_live_confidence, 95);
        assert_eq!(config.tracking.max_num_hands, 1);
        assert!((config.tracking.min_detection_confidence - 0.8).abs() < f32::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"

[recognition]
commit_threshold = 20.0
live_confidence_floor = 8.0
decay_per_frame = 1.0
retrigger_window_ms = 3000
max_live_confidence = 90

[tracking]
min_detection_confidence = 0.6
"#;
        let file = create_temp_config(content);
        let config = HandSignConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.recognition.commit_threshold, 20.0);
        assert_eq!(config.recognition.live_confidence_floor, 8.0);
        assert_eq!(config.recognition.decay_per_frame, 1.0);
        assert_eq!(config.recognition.retrigger_window_ms, 3000);
        assert_eq!(config.recognition.max_live_confidence, 90);
        assert!((config.tracking.min_detection_confidence - 0.6).abs() < f32::EPSILON);
        // Unset fields keep their defaults
        assert_eq!(config.tracking.max_num_hands, 1);
    }

    #[test]
    fn test_config_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = HandSignConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.recognition, RecognitionConfig::default());
        assert_eq!(config.tracking, TrackingConfig::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("this is {{ not valid TOML");
        let result = HandSignConfig::load(file.path());
        assert!(matches!(result, Err(HandSignError::Config(_))));
    }

    #[test]
    fn test_load_rejects_out_of_range_values() {
        let file = create_temp_config("[recognition]\nmax_live_confidence = 120\n");
        let result = HandSignConfig::load(file.path());
        match result {
            Err(HandSignError::Config(msg)) => assert!(msg.contains("max_live_confidence")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = HandSignConfig::load_or_default(Path::new("/does/not/exist/config.toml"));
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.recognition.commit_threshold, 15.0);
    }

    #[test]
    fn test_load_or_default_invalid_values() {
        let file = create_temp_config("[tracking]\nmax_num_hands = 0\n");
        let config = HandSignConfig::load_or_default(file.path());
        assert_eq!(config.tracking.max_num_hands, 1);
    }

    #[test]
    fn test_save_creates_parent_dirs_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("dir").join("config.toml");

        let mut config = HandSignConfig::default();
        config.recognition.retrigger_window_ms = 2500;
        config.save(&path).unwrap();

        assert!(path.exists());
        let reloaded = HandSignConfig::load(&path).unwrap();
        assert_eq!(reloaded.recognition.retrigger_window_ms, 2500);
        assert_eq!(reloaded.tracking, config.tracking);
    }

    #[test]
    fn test_recognition_validate() {
        let ok = RecognitionConfig::default();
        assert!(ok.validate().is_ok());

        let bad = RecognitionConfig {
            commit_threshold: 0.0,
            ..RecognitionConfig::default()
        };
        assert!(bad.validate().is_err());

        let bad = RecognitionConfig {
            live_confidence_floor: 15.0,
            ..RecognitionConfig::default()
        };
        assert!(bad.validate().is_err());

        let bad = RecognitionConfig {
            decay_per_frame: 0.0,
            ..RecognitionConfig::default()
        };
        assert!(bad.validate().is_err());

        let bad = RecognitionConfig {
            retrigger_window_ms: -1,
            ..RecognitionConfig::default()
        };
        assert!(bad.validate().is_err());

        let bad = RecognitionConfig {
            max_live_confidence: 100,
            ..RecognitionConfig::default()
        };
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("below 100"));

        let edge = RecognitionConfig {
            max_live_confidence: 99,
            ..RecognitionConfig::default()
        };
        assert!(edge.validate().is_ok());

        let bad = RecognitionConfig {
            commit_threshold: f64::NAN,
            ..RecognitionConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_tracking_validate() {
        let bad = TrackingConfig {
            min_detection_confidence: 1.5,
            ..TrackingConfig::default()
        };
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("min_detection_confidence"));

        let bad = TrackingConfig {
            min_detection_confidence: -0.1,
            ..TrackingConfig::default()
        };
        assert!(bad.validate().is_err());

        let bad = TrackingConfig {
            max_num_hands: 0,
            ..TrackingConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}
