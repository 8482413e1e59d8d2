//! Commands that change the current drawing style.

use sketchpad_core::Rgba;
use tracing::{debug, info};

use super::{Dispatcher, Input};

impl Dispatcher {
    /// Reads one more key: `r`, `g`, `b` or `w`. Clicks are ignored while
    /// waiting; any other key leaves the color unchanged.
    pub(super) async fn set_color(&mut self) {
        loop {
            match self.input.next().await {
                Some(Input::Key(key)) => {
                    let color = match key.as_char() {
                        Some('r') => Rgba::RED,
                        Some('g') => Rgba::GREEN,
                        Some('b') => Rgba::BLUE,
                        Some('w') => Rgba::WHITE,
                        _ => {
                            debug!("{} is not a color key", key);
                            return;
                        }
                    };
                    self.style.set_color(color);
                    info!("color set to {}", color);
                    return;
                }
                Some(Input::Click(point)) => debug!("ignoring click at {} while choosing a color", point),
                None => return,
            }
        }
    }

    pub(super) fn cycle_dash(&mut self) {
        let dash = self.style.cycle_dash();
        info!("dash style {}", dash);
    }

    pub(super) fn toggle_thick(&mut self) {
        let thick = self.style.toggle_thick();
        info!("thick lines {}", if thick { "on" } else { "off" });
    }

    pub(super) fn increment_sides(&mut self) {
        info!("polygon sides {}", self.style.increment_sides());
    }

    pub(super) fn decrement_sides(&mut self) {
        info!("polygon sides {}", self.style.decrement_sides());
    }
}
