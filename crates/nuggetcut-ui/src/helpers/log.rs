// crates/nuggetcut-ui/src/helpers/log.rs
//
// Unified logging for the UI crate.
//
// In release builds with `windows_subsystem = "windows"` (double-click
// launch) there is no console attached, so `eprintln!` output is silently
// discarded. All log calls go to a temp file instead so they're visible
// regardless of launch mode.
//
// File: $TMPDIR/nuggetcut.log — append-only, created on first write.
//
// Usage:
//   nugget_log!("[app] loading source {url}");

use std::io::Write;

/// Write `msg` to the NuggetCut log file in the OS temp directory.
/// Never panics — failures are silently ignored (we're already in a
/// fallback path).
pub fn nlog(msg: &str) {
    if let Ok(mut f) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(std::env::temp_dir().join("nuggetcut.log"))
    {
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let _ = writeln!(f, "[{ts}] {msg}");
    }
}

/// Convenience macro — formats like `eprintln!` but routes through `nlog`.
#[macro_export]
macro_rules! nugget_log {
    ($($arg:tt)*) => {
        $crate::helpers::log::nlog(&format!($($arg)*))
    };
}
