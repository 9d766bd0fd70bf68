//! Keyboard shortcut handling

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Tab};

/// Convert key events to messages.
///
/// Ctrl/Cmd+1 selects the first tab and Ctrl/Cmd+2 the last one. Returns
/// `None` for keys the page does not handle, in which case the browser's
/// default action must not be prevented.
pub fn handle_key(_state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('1') => Some(Message::ShowTab(Tab::first())),
        InputKey::CharCtrl('2') => Some(Message::ShowTab(Tab::last())),
        _ => None,
    }
}
