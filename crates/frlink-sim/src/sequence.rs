//! Wrapping sequence counter.

use std::sync::atomic::{AtomicU8, Ordering};

/// One-byte sequence number that wraps from 255 back to 0.
///
/// Shared by reference; `next` is atomic.
#[derive(Debug, Default)]
pub struct SequenceCounter {
    value: AtomicU8,
}

impl SequenceCounter {
    /// Counter whose first `next` returns `start`.
    pub fn new(start: u8) -> Self {
        SequenceCounter {
            value: AtomicU8::new(start),
        }
    }

    /// Return the current value and advance.
    pub fn next(&self) -> u8 {
        self.value.fetch_add(1, Ordering::Relaxed)
    }

    /// Value the next call to `next` will return.
    pub fn peek(&self) -> u8 {
        self.value.load(Ordering::Relaxed)
    }

    /// Restart from `value`.
    pub fn reset(&self, value: u8) {
        self.value.store(value, Ordering::Relaxed);
    }
}
