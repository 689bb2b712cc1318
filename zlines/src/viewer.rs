//! Best-effort hand-off of the finished figure to a desktop viewer.

use std::path::Path;
use std::process::{Command, Stdio};

/// Try to open the figure in the platform's default viewer.
///
/// Fire-and-forget: the child is spawned detached and never awaited, and any
/// launch failure is logged and swallowed. The figure on disk is the
/// deliverable; a missing viewer must never fail the run.
pub fn open_in_viewer(path: &Path) {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };

    match Command::new(opener)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(_) => log::debug!("handed {} to {opener}", path.display()),
        Err(err) => log::debug!("viewer launch skipped ({opener}): {err}"),
    }
}
