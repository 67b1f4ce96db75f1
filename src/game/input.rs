//! Logical key events consumed by the engine
//!
//! Physical keyboards and on-screen buttons are both reduced to a [`KeyInput`].

/// One logical key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A letter key; non a-z letters are ignored by the engine
    Letter(char),
    /// Remove the last letter
    Delete,
    /// Submit the current guess
    Enter,
}

impl KeyInput {
    /// Map a key name (`"Enter"`, `"Backspace"`, `"a"`) to a key event
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::game::KeyInput;
    ///
    /// assert_eq!(KeyInput::from_name("Backspace"), Some(KeyInput::Delete));
    /// assert_eq!(KeyInput::from_name("Q"), Some(KeyInput::Letter('q')));
    /// assert_eq!(KeyInput::from_name("Shift"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Enter" | "Return" => Some(Self::Enter),
            "Backspace" | "Delete" => Some(Self::Delete),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(Self::Letter(c.to_ascii_lowercase()))
                    }
                    _ => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys() {
        assert_eq!(KeyInput::from_name("Enter"), Some(KeyInput::Enter));
        assert_eq!(KeyInput::from_name("Return"), Some(KeyInput::Enter));
        assert_eq!(KeyInput::from_name("Delete"), Some(KeyInput::Delete));
    }

    #[test]
    fn letters_are_lowercased() {
        assert_eq!(KeyInput::from_name("a"), Some(KeyInput::Letter('a')));
        assert_eq!(KeyInput::from_name("Z"), Some(KeyInput::Letter('z')));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(KeyInput::from_name("1"), None);
        assert_eq!(KeyInput::from_name("ab"), None);
        assert_eq!(KeyInput::from_name(""), None);
        assert_eq!(KeyInput::from_name("é"), None);
    }
}
