//! Global key-event port

use crate::domain::{KeyOutcome, KeyPress};

/// Listener receives each key press and reports what it did with it.
pub type KeyListener = Box<dyn Fn(&KeyPress) -> KeyOutcome + Send + Sync>;

pub trait KeySource: Send {
    fn add_key_listener(&mut self, listener: KeyListener);
}

/// Key source fed by hand. Used by the console front end and tests.
#[derive(Default)]
pub struct ManualKeySource {
    listeners: Vec<KeyListener>,
}

impl ManualKeySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver a key press to every listener, returning their outcomes in order.
    pub fn press(&self, key: &KeyPress) -> Vec<KeyOutcome> {
        self.listeners.iter().map(|listener| listener(key)).collect()
    }
}

impl KeySource for ManualKeySource {
    fn add_key_listener(&mut self, listener: KeyListener) {
        self.listeners.push(listener);
    }
}
