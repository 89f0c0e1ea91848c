//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the Enter submit chord
/// - macOS: SUPER (Cmd+Enter, when the terminal reports it)
/// - Linux/Windows: CONTROL (Ctrl+Enter)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms (Cmd/Ctrl+Enter also works)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
