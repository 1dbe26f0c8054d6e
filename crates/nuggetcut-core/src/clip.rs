// crates/nuggetcut-core/src/clip.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipKind {
    /// A longer segment for detailed content.
    Clip,
    /// A short highlight, conventionally under 30 seconds (not enforced).
    Nugget,
}

impl ClipKind {
    pub fn label(&self) -> &'static str {
        match self {
            ClipKind::Clip   => "clip",
            ClipKind::Nugget => "nugget",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClipError {
    #[error("End time must be greater than start time")]
    InvalidRange,
    #[error("Please enter a title for your clip")]
    EmptyTitle,
}

/// A named time range `[start_time, end_time)` within the session's video.
/// Immutable once created — there is no edit operation; a "changed" clip is
/// a new record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Clip {
    pub id:         Uuid,
    pub title:      String,
    pub start_time: f64,
    pub end_time:   f64,
    /// Computed once at creation; start/end never change afterwards.
    pub duration:   f64,
    pub kind:       ClipKind,
    pub created_at: DateTime<Utc>,
}

impl Clip {
    /// Validate and build a new clip. Range is checked before the title, so
    /// a form with both problems reports the range first.
    pub fn new(title: &str, start_time: f64, end_time: f64, kind: ClipKind) -> Result<Self, ClipError> {
        if start_time >= end_time {
            return Err(ClipError::InvalidRange);
        }
        let title = title.trim();
        if title.is_empty() {
            return Err(ClipError::EmptyTitle);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            start_time,
            end_time,
            duration: end_time - start_time,
            kind,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_clip_carries_its_fields() {
        let clip = Clip::new("Intro", 0.0, 10.0, ClipKind::Clip).unwrap();
        assert_eq!(clip.title, "Intro");
        assert_eq!(clip.start_time, 0.0);
        assert_eq!(clip.end_time, 10.0);
        assert_eq!(clip.duration, 10.0);
        assert_eq!(clip.kind, ClipKind::Clip);
    }

    #[test]
    fn duration_is_exactly_end_minus_start() {
        let clip = Clip::new("Q3 recap", 12.4, 47.9, ClipKind::Nugget).unwrap();
        assert_eq!(clip.duration, 47.9 - 12.4);
        assert_eq!(clip.kind, ClipKind::Nugget);
    }

    #[test]
    fn zero_length_range_is_rejected() {
        let err = Clip::new("Intro", 10.0, 10.0, ClipKind::Clip).unwrap_err();
        assert_eq!(err, ClipError::InvalidRange);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = Clip::new("Backwards", 5.0, 2.0, ClipKind::Clip).unwrap_err();
        assert_eq!(err, ClipError::InvalidRange);
    }

    #[test]
    fn whitespace_title_is_rejected() {
        let err = Clip::new("  ", 0.0, 5.0, ClipKind::Nugget).unwrap_err();
        assert_eq!(err, ClipError::EmptyTitle);
    }

    #[test]
    fn range_is_checked_before_title() {
        // Both invalid — range wins.
        let err = Clip::new("", 9.0, 3.0, ClipKind::Clip).unwrap_err();
        assert_eq!(err, ClipError::InvalidRange);
    }

    #[test]
    fn title_is_trimmed_on_creation() {
        let clip = Clip::new("  Key moment \n", 1.0, 2.0, ClipKind::Clip).unwrap();
        assert_eq!(clip.title, "Key moment");
    }

    #[test]
    fn ids_are_unique_per_creation() {
        let a = Clip::new("A", 0.0, 1.0, ClipKind::Clip).unwrap();
        let b = Clip::new("A", 0.0, 1.0, ClipKind::Clip).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn clip_round_trips_through_json() {
        let clip = Clip::new("Serialized", 3.5, 8.0, ClipKind::Nugget).unwrap();
        let json = serde_json::to_string(&clip).unwrap();
        let back: Clip = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, clip.id);
        assert_eq!(back.title, clip.title);
        assert_eq!(back.duration, clip.duration);
        assert_eq!(back.kind, clip.kind);
    }
}
