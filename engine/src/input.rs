use std::{collections::VecDeque, io};

/// the keys the game reacts to. everything else is reported as [`Key::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    /// ctrl-c. raw mode swallows the signal, so the input source reports it instead.
    Interrupt,
    Other,
}

/// a non-blocking keyboard. reads never echo the key back to the display.
pub trait InputSource {
    fn key_available(&mut self) -> io::Result<bool>;

    fn read_key(&mut self) -> io::Result<Key>;

    /// reads a key only if one is already buffered.
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        if self.key_available()? {
            self.read_key().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// replays a fixed queue of key presses. reading from an empty queue yields [`Key::Other`].
#[derive(Debug, Default)]
pub struct ScriptedInput {
    keys: VecDeque<Key>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = Key>>(keys: I) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn push(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl InputSource for ScriptedInput {
    fn key_available(&mut self) -> io::Result<bool> {
        Ok(!self.keys.is_empty())
    }

    fn read_key(&mut self) -> io::Result<Key> {
        Ok(self.keys.pop_front().unwrap_or(Key::Other))
    }
}

#[cfg(test)]
mod tests {
    use crate::input::{InputSource, Key, ScriptedInput};

    #[test]
    fn poll_takes_one_key() {
        let mut input = ScriptedInput::new([Key::W, Key::Down]);
        assert_eq!(input.poll_key().unwrap(), Some(Key::W));
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.poll_key().unwrap(), Some(Key::Down));
        assert_eq!(input.poll_key().unwrap(), None);
        input.push(Key::S);
        assert!(input.key_available().unwrap());
        assert_eq!(input.read_key().unwrap(), Key::S);
    }
}
