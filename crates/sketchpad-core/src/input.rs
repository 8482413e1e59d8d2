//! Input streams
//!
//! The engine consumes two streams: clicks (`Point`) and key presses
//! (`KeyCode`). This module holds the value types for both, the
//! press-edge detector that turns raw mouse samples into clicks, and a
//! feeder that replays a recorded sequence of events into the two streams
//! without reordering events across them.

use std::fmt;

use tokio::sync::mpsc;

use crate::geometry::Point;

/// Bit of `MouseSample::buttons` for the left button.
pub const LEFT_BUTTON: u32 = 1 << 0;

/// A key code as delivered by the keyboard. Zero is "no key".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const NONE: KeyCode = KeyCode(0);
    pub const ENTER: KeyCode = KeyCode(b'\n' as u32);
    pub const ESCAPE: KeyCode = KeyCode(0x1b);
    pub const SPACE: KeyCode = KeyCode(b' ' as u32);

    pub const fn from_char(c: char) -> Self {
        KeyCode(c as u32)
    }

    /// The character this code stands for, if any.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// Zero and codes outside the Unicode scalar range are filtered out
    /// before reaching the dispatcher.
    pub fn is_valid(&self) -> bool {
        self.0 != 0 && self.as_char().is_some()
    }
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        KeyCode::from_char(c)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(c) if !c.is_control() => write!(f, "'{}'", c),
            _ => write!(f, "0x{:02x}", self.0),
        }
    }
}

/// One raw mouse reading: position plus the pressed-buttons bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseSample {
    pub position: Point,
    pub buttons: u32,
}

impl MouseSample {
    pub fn new(position: Point, buttons: u32) -> Self {
        Self { position, buttons }
    }

    pub fn left_pressed(&self) -> bool {
        self.buttons & LEFT_BUTTON == LEFT_BUTTON
    }
}

/// Turns mouse samples into clicks on the left-button press edge.
///
/// A click is emitted on press, further samples are suppressed while the
/// button is held, and the detector re-arms on release.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickDetector {
    pressed: bool,
}

impl ClickDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, sample: MouseSample) -> Option<Point> {
        match (self.pressed, sample.left_pressed()) {
            (false, true) => {
                self.pressed = true;
                tracing::trace!("click at {}", sample.position);
                Some(sample.position)
            }
            (true, false) => {
                self.pressed = false;
                None
            }
            _ => None,
        }
    }
}

/// An event on either input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Click(Point),
    Key(KeyCode),
}

/// Replays `events` into the click and key streams, in order.
///
/// Each event is sent only once the previous one has been taken off its
/// channel, so a consumer selecting over both receivers observes the
/// recorded order. Invalid key codes are dropped. Returns the number of
/// events delivered; stops early if a consumer goes away. The senders are
/// dropped on return, closing both streams.
pub async fn play<I>(events: I, clicks: mpsc::Sender<Point>, keys: mpsc::Sender<KeyCode>) -> usize
where
    I: IntoIterator<Item = InputEvent>,
{
    let mut delivered = 0;
    for event in events {
        let sent = match event {
            InputEvent::Click(point) => deliver(&clicks, point).await,
            InputEvent::Key(key) if key.is_valid() => deliver(&keys, key).await,
            InputEvent::Key(key) => {
                tracing::trace!("dropping invalid key code {}", key);
                continue;
            }
        };
        if !sent {
            tracing::debug!("input consumer closed after {} events", delivered);
            break;
        }
        delivered += 1;
    }
    delivered
}

async fn deliver<T>(tx: &mpsc::Sender<T>, value: T) -> bool {
    if tx.send(value).await.is_err() {
        return false;
    }
    while tx.capacity() < tx.max_capacity() {
        if tx.is_closed() {
            return false;
        }
        tokio::task::yield_now().await;
    }
    true
}
