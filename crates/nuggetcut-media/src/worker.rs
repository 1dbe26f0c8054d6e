// crates/nuggetcut-media/src/worker.rs
//
// MediaWorker: owns the transport thread. All public API that nuggetcut-ui
// calls lives here. Commands go in over a bounded channel; observations come
// back as MediaEvents the UI drains once per frame.

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};

use nuggetcut_core::media_types::{MediaEvent, PlayIntent};

use crate::source::MediaSource;
use crate::transport::Transport;

/// Transport wake interval when no command is pending.
const TICK: Duration = Duration::from_millis(15);

/// Simulated metadata latency. Long enough that consumers genuinely pass
/// through a "no duration yet" window, short enough to be invisible in use.
const LOAD_LATENCY: Duration = Duration::from_millis(120);

/// Minimum position delta worth a notification (~30 Hz at 1× speed).
const POSITION_EPSILON: f64 = 0.03;

enum MediaCmd {
    Load(MediaSource),
    Play(PlayIntent),
    Pause,
    Seek(f64),
    SetVolume(f32),
    SetMuted(bool),
    Shutdown,
}

pub struct MediaWorker {
    cmd_tx: Sender<MediaCmd>,
    /// Drained by the UI each frame.
    pub events: Receiver<MediaEvent>,
}

impl MediaWorker {
    pub fn new() -> Self {
        let (cmd_tx, cmd_rx) = bounded(64);
        // Capacity 256: position notifications arrive at ~30 Hz and the UI
        // drains every frame, so the buffer only fills if rendering stalls —
        // in which case positions are dropped latest-wins, never lifecycle
        // events.
        let (event_tx, events) = bounded(256);

        thread::spawn(move || run(cmd_rx, event_tx));

        Self { cmd_tx, events }
    }

    pub fn load(&self, source: MediaSource) {
        let _ = self.cmd_tx.send(MediaCmd::Load(source));
    }

    /// Asynchronous: resolves later as `PlayStarted` or `PlayFailed`, echoing
    /// `intent` so the player state machine can discard stale resolutions.
    pub fn play(&self, intent: PlayIntent) {
        let _ = self.cmd_tx.send(MediaCmd::Play(intent));
    }

    /// Synchronous on the transport; never fails.
    pub fn pause(&self) {
        let _ = self.cmd_tx.send(MediaCmd::Pause);
    }

    pub fn seek(&self, seconds: f64) {
        let _ = self.cmd_tx.send(MediaCmd::Seek(seconds));
    }

    pub fn set_volume(&self, volume: f32) {
        let _ = self.cmd_tx.send(MediaCmd::SetVolume(volume));
    }

    pub fn set_muted(&self, muted: bool) {
        let _ = self.cmd_tx.send(MediaCmd::SetMuted(muted));
    }

    pub fn shutdown(&self) {
        let _ = self.cmd_tx.send(MediaCmd::Shutdown);
    }
}

impl Default for MediaWorker {
    fn default() -> Self {
        Self::new()
    }
}

fn run(cmd_rx: Receiver<MediaCmd>, event_tx: Sender<MediaEvent>) {
    let mut transport = Transport::new();
    let mut pending_load: Option<(MediaSource, Instant)> = None;
    let mut last_tick = Instant::now();
    let mut last_sent = f64::NEG_INFINITY;

    loop {
        let mut force_notify = false;

        match cmd_rx.recv_timeout(TICK) {
            Ok(MediaCmd::Load(source)) => {
                pending_load = Some((source, Instant::now()));
            }
            Ok(MediaCmd::Play(intent)) => match transport.begin_play() {
                Ok(()) => {
                    eprintln!(
                        "[media] play at {:.2}s (level {:.2})",
                        transport.position(),
                        transport.effective_volume()
                    );
                    let _ = event_tx.send(MediaEvent::PlayStarted { intent });
                }
                Err(reason) => {
                    eprintln!("[media] play refused: {reason}");
                    let _ = event_tx.send(MediaEvent::PlayFailed {
                        intent,
                        reason: reason.to_string(),
                    });
                }
            },
            Ok(MediaCmd::Pause) => transport.pause(),
            Ok(MediaCmd::Seek(seconds)) => {
                transport.seek(seconds);
                force_notify = true;
            }
            Ok(MediaCmd::SetVolume(volume)) => transport.set_volume(volume),
            Ok(MediaCmd::SetMuted(muted)) => transport.set_muted(muted),
            Ok(MediaCmd::Shutdown) | Err(RecvTimeoutError::Disconnected) => return,
            Err(RecvTimeoutError::Timeout) => {}
        }

        let load_ready = pending_load
            .as_ref()
            .is_some_and(|(_, since)| since.elapsed() >= LOAD_LATENCY);
        if load_ready {
            if let Some((source, _)) = pending_load.take() {
                transport.set_source(source.duration);
                let _ = event_tx.send(MediaEvent::MetadataLoaded {
                    duration: source.duration,
                });
                force_notify = true; // position reset to 0
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;
        transport.tick(dt);

        let position = transport.position();
        if force_notify || (position - last_sent).abs() >= POSITION_EPSILON {
            // try_send: a stalled consumer drops position updates instead of
            // wedging the transport thread.
            let _ = event_tx.try_send(MediaEvent::Position { seconds: position });
            last_sent = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Skip interleaved position noise until `pred` matches. Generous
    /// deadline — these tests share CI cores.
    fn wait_for(rx: &Receiver<MediaEvent>, pred: impl Fn(&MediaEvent) -> bool) -> MediaEvent {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Ok(ev) = rx.recv_timeout(Duration::from_millis(50)) {
                if pred(&ev) {
                    return ev;
                }
            }
        }
        panic!("timed out waiting for media event");
    }

    #[test]
    fn load_reports_metadata_then_positions_advance_while_playing() {
        let worker = MediaWorker::new();
        worker.load(MediaSource::new("test.mp4", 10.0).unwrap());

        let ev = wait_for(&worker.events, |e| {
            matches!(e, MediaEvent::MetadataLoaded { .. })
        });
        assert_eq!(ev, MediaEvent::MetadataLoaded { duration: 10.0 });

        worker.play(PlayIntent(1));
        wait_for(&worker.events, |e| {
            matches!(e, MediaEvent::PlayStarted { intent } if *intent == PlayIntent(1))
        });
        wait_for(&worker.events, |e| {
            matches!(e, MediaEvent::Position { seconds } if *seconds > 0.05)
        });

        worker.shutdown();
    }

    #[test]
    fn play_before_load_fails_and_echoes_the_intent() {
        let worker = MediaWorker::new();
        worker.play(PlayIntent(7));

        match wait_for(&worker.events, |e| matches!(e, MediaEvent::PlayFailed { .. })) {
            MediaEvent::PlayFailed { intent, reason } => {
                assert_eq!(intent, PlayIntent(7));
                assert!(reason.contains("no media"), "unexpected reason: {reason}");
            }
            other => panic!("unexpected event: {other:?}"),
        }

        worker.shutdown();
    }

    #[test]
    fn out_of_range_seek_comes_back_clamped() {
        let worker = MediaWorker::new();
        worker.load(MediaSource::new("test.mp4", 10.0).unwrap());
        wait_for(&worker.events, |e| {
            matches!(e, MediaEvent::MetadataLoaded { .. })
        });

        worker.seek(50.0);
        let ev = wait_for(&worker.events, |e| {
            matches!(e, MediaEvent::Position { seconds } if *seconds > 1.0)
        });
        assert_eq!(ev, MediaEvent::Position { seconds: 10.0 });

        worker.shutdown();
    }

    #[test]
    fn paused_transport_does_not_stream_positions() {
        let worker = MediaWorker::new();
        worker.load(MediaSource::new("test.mp4", 10.0).unwrap());
        wait_for(&worker.events, |e| {
            matches!(e, MediaEvent::MetadataLoaded { .. })
        });
        // Drain the post-load position report, then expect silence.
        std::thread::sleep(Duration::from_millis(150));
        while worker.events.try_recv().is_ok() {}
        std::thread::sleep(Duration::from_millis(150));
        assert!(worker.events.try_recv().is_err());

        worker.shutdown();
    }
}
