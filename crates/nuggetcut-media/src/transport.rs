// crates/nuggetcut-media/src/transport.rs
//
// The transport clock behind the playback surface. Pure bookkeeping — the
// worker thread owns one of these and drives it from wall-clock deltas.

/// Position/volume/mute state of the loaded source.
///
/// Clamping discipline lives here, not in the UI's player state: every seek
/// lands inside `[0, duration]`, and a playing transport pins at the end of
/// the source. No end-of-stream event exists; the surface just stops
/// advancing.
#[derive(Debug)]
pub(crate) struct Transport {
    position: f64,
    duration: Option<f64>,
    playing:  bool,
    volume:   f32,
    muted:    bool,
}

impl Transport {
    pub fn new() -> Self {
        Self {
            position: 0.0,
            duration: None,
            playing:  false,
            volume:   1.0,
            muted:    false,
        }
    }

    /// Metadata became available. Duration is fixed from here on.
    pub fn set_source(&mut self, duration: f64) {
        self.duration = Some(duration);
        self.position = 0.0;
        self.playing = false;
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance the clock. Returns true when the position moved.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.playing || dt <= 0.0 {
            return false;
        }
        let Some(duration) = self.duration else { return false };
        let next = (self.position + dt).min(duration);
        let moved = next != self.position;
        self.position = next;
        moved
    }

    /// Start playback. Fails when no source has finished loading — the
    /// reachable analogue of a browser's autoplay refusal.
    pub fn begin_play(&mut self) -> Result<(), &'static str> {
        if self.duration.is_none() {
            return Err("no media loaded");
        }
        self.playing = true;
        Ok(())
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Clamp into the playable range. Before metadata, only the lower bound
    /// is known.
    pub fn seek(&mut self, seconds: f64) {
        let upper = self.duration.unwrap_or(0.0);
        self.position = seconds.clamp(0.0, upper.max(0.0));
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Output level the surface would actually render at.
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(duration: f64) -> Transport {
        let mut t = Transport::new();
        t.set_source(duration);
        t
    }

    #[test]
    fn play_without_a_source_is_refused() {
        let mut t = Transport::new();
        assert_eq!(t.begin_play(), Err("no media loaded"));
        assert!(!t.is_playing());
    }

    #[test]
    fn ticking_advances_only_while_playing() {
        let mut t = loaded(10.0);
        assert!(!t.tick(0.5));
        assert_eq!(t.position(), 0.0);

        t.begin_play().unwrap();
        assert!(t.tick(0.5));
        assert_eq!(t.position(), 0.5);
    }

    #[test]
    fn position_pins_at_the_end_of_the_source() {
        let mut t = loaded(2.0);
        t.begin_play().unwrap();
        assert!(t.tick(5.0));
        assert_eq!(t.position(), 2.0);
        // Still "playing", but the clock has nowhere left to go.
        assert!(t.is_playing());
        assert!(!t.tick(1.0));
    }

    #[test]
    fn seeks_are_clamped_into_the_source() {
        let mut t = loaded(60.0);
        t.seek(30.0);
        assert_eq!(t.position(), 30.0);
        t.seek(1000.0);
        assert_eq!(t.position(), 60.0);
        t.seek(-5.0);
        assert_eq!(t.position(), 0.0);
    }

    #[test]
    fn seeking_before_metadata_stays_at_zero() {
        let mut t = Transport::new();
        t.seek(42.0);
        assert_eq!(t.position(), 0.0);
    }

    #[test]
    fn seeking_does_not_change_play_state() {
        let mut t = loaded(60.0);
        t.begin_play().unwrap();
        t.seek(10.0);
        assert!(t.is_playing());
        t.pause();
        t.seek(20.0);
        assert!(!t.is_playing());
    }

    #[test]
    fn mute_gates_output_without_losing_the_stored_volume() {
        let mut t = loaded(60.0);
        t.set_volume(0.8);
        t.set_muted(true);
        assert_eq!(t.effective_volume(), 0.0);
        t.set_muted(false);
        assert_eq!(t.effective_volume(), 0.8);
    }

    #[test]
    fn volume_is_clamped() {
        let mut t = Transport::new();
        t.set_volume(2.0);
        assert_eq!(t.effective_volume(), 1.0);
        t.set_volume(-1.0);
        assert_eq!(t.effective_volume(), 0.0);
    }
}
