//! Decisions the browser binding makes from what the page reports.

use std::fmt::Debug;

use crate::error::EffectsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Now,
    /// Still parsing; wait for `DOMContentLoaded`.
    OnContentLoaded,
}

pub fn readiness(ready_state: &str) -> Readiness {
    if ready_state == "loading" {
        Readiness::OnContentLoaded
    } else {
        Readiness::Now
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    /// `navigator.clipboard.writeText`
    AsyncClipboard,
    /// Hidden textarea plus `execCommand("copy")`.
    CopyCommand,
}

pub fn copy_path(has_clipboard: bool, write_text_is_function: bool) -> CopyPath {
    if has_clipboard && write_text_is_function {
        CopyPath::AsyncClipboard
    } else {
        CopyPath::CopyCommand
    }
}

/// Only a thrown exception fails the copy command. Its boolean return is
/// ignored, so the toast still shows when the browser reports `false`.
pub fn copy_command_outcome<E: Debug>(result: Result<bool, E>) -> Result<(), EffectsError> {
    match result {
        Ok(_) => Ok(()),
        Err(e) => Err(EffectsError::Clipboard(format!("{:?}", e))),
    }
}
