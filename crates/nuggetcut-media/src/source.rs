// crates/nuggetcut-media/src/source.rs
use anyhow::{ensure, Result};

/// A playable source. Demuxing real containers is out of scope, so a source
/// declares its duration up front; the worker still reports it
/// asynchronously (`MediaEvent::MetadataLoaded`) the way a metadata probe
/// would, so consumers must cope with a window where no duration is known.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaSource {
    pub url:      String,
    /// Declared length in seconds. Always > 0.
    pub duration: f64,
}

impl MediaSource {
    pub fn new(url: impl Into<String>, duration: f64) -> Result<Self> {
        let url = url.into();
        ensure!(!url.trim().is_empty(), "media source needs a url");
        ensure!(
            duration.is_finite() && duration > 0.0,
            "media source duration must be positive, got {duration}"
        );
        Ok(Self { url, duration })
    }

    /// Sample video — in a real deployment the source would come from the
    /// CRM backend.
    pub fn sample() -> Self {
        Self {
            url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4"
                .to_string(),
            duration: 596.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_url() {
        assert!(MediaSource::new("  ", 10.0).is_err());
    }

    #[test]
    fn rejects_non_positive_duration() {
        assert!(MediaSource::new("file.mp4", 0.0).is_err());
        assert!(MediaSource::new("file.mp4", -4.0).is_err());
        assert!(MediaSource::new("file.mp4", f64::NAN).is_err());
    }

    #[test]
    fn sample_is_valid_by_construction() {
        let s = MediaSource::sample();
        assert!(MediaSource::new(s.url.clone(), s.duration).is_ok());
    }
}
