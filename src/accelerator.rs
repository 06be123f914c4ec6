//! Keystroke-to-accelerator translation.
//!
//! Keymaps express shortcuts as dash-separated keystrokes like
//! `cmd-shift-p`; menu hosts expect accelerator strings like
//! `Command+Shift+P`. The dash is both separator and a possible key, so a
//! `-` only separates when another character follows it: in `cmd--` the
//! trailing dash is the key itself.

use std::collections::HashMap;

/// Keystrokes bound to each command identifier, first entry authoritative.
///
/// Owned by the keymap layer and supplied per
/// [`crate::MenuCoordinator::update`] call.
pub type KeystrokesByCommand = HashMap<String, Vec<String>>;

/// Derive the platform accelerator for `command`.
///
/// Returns `None` when the keystroke map has no non-empty entry for the
/// command; the menu item then simply carries no shortcut.
pub fn accelerator_for_command(
    command: &str,
    keystrokes_by_command: &KeystrokesByCommand,
) -> Option<String> {
    let first_keystroke = keystrokes_by_command
        .get(command)
        .and_then(|keystrokes| keystrokes.first())?;
    if first_keystroke.is_empty() {
        return None;
    }

    let mut segments = split_keystroke(first_keystroke);
    let key = segments.pop()?.to_uppercase().replace('+', "Plus");
    let mut keys: Vec<String> = segments.into_iter().map(normalize_modifier).collect();
    keys.push(key);
    Some(keys.join("+"))
}

/// Split a keystroke on `-`, treating a dash as a separator only when at
/// least one more character follows it. Always yields at least one segment.
fn split_keystroke(keystroke: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut chars = keystroke.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        if c == '-' && chars.peek().is_some() {
            segments.push(&keystroke[start..index]);
            start = index + 1;
        }
    }
    segments.push(&keystroke[start..]);
    segments
}

/// Map a keymap modifier token to its accelerator spelling. Unknown tokens
/// pass through unchanged.
fn normalize_modifier(modifier: &str) -> String {
    match modifier.to_ascii_lowercase().as_str() {
        "shift" => "Shift".to_string(),
        "cmd" => "Command".to_string(),
        "ctrl" => "Ctrl".to_string(),
        "alt" => "Alt".to_string(),
        _ => modifier.to_string(),
    }
}
