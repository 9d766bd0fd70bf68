//! Abstract input key event, independent of the browser event type.
//!
//! The web frontend converts `KeyboardEvent`s into `InputKey` so that key
//! handling stays testable without a DOM.

/// Abstract input key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with the Ctrl modifier, or Cmd on macOS
    CharCtrl(char),
    /// Any key the workspace does not care about
    Other,
}

impl InputKey {
    /// Build from the pieces of a browser `KeyboardEvent`.
    ///
    /// `key` is the event's `key` string; only single-character keys map to
    /// `Char`/`CharCtrl`.
    pub fn from_parts(key: &str, ctrl: bool, meta: bool) -> Self {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if ctrl || meta => InputKey::CharCtrl(c),
            (Some(c), None) => InputKey::Char(c),
            _ => InputKey::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_ctrl_and_meta() {
        assert_eq!(InputKey::from_parts("1", true, false), InputKey::CharCtrl('1'));
        assert_eq!(InputKey::from_parts("2", false, true), InputKey::CharCtrl('2'));
    }

    #[test]
    fn test_from_parts_plain_char() {
        assert_eq!(InputKey::from_parts("a", false, false), InputKey::Char('a'));
    }

    #[test]
    fn test_from_parts_named_keys() {
        assert_eq!(InputKey::from_parts("Escape", false, false), InputKey::Other);
        assert_eq!(InputKey::from_parts("Enter", true, false), InputKey::Other);
        assert_eq!(InputKey::from_parts("", false, false), InputKey::Other);
    }
}
