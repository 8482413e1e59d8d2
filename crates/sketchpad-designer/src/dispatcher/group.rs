//! Grouping commands.

use tracing::{debug, info};

use super::{Dispatcher, Input};
use crate::model::{Drawable, ShapeId, ShapeKind};

impl Dispatcher {
    /// Clicks pick shapes until a key is pressed; the picked shapes become
    /// one group. Picking a shape twice has no effect.
    pub(super) async fn group_shapes(&mut self) {
        let mut picked: Vec<ShapeId> = Vec::new();
        loop {
            match self.input.next().await {
                Some(Input::Click(point)) => match self.canvas.pick(point) {
                    Some((id, _)) if !picked.contains(&id) => picked.push(id),
                    Some((id, _)) => debug!("{} already picked", id),
                    None => debug!("nothing near {}", point),
                },
                Some(Input::Key(key)) => {
                    debug!("group selection finished by {}", key);
                    break;
                }
                None => break,
            }
        }
        if let Some(id) = self.canvas.group(&picked) {
            info!("grouped {} shapes as {}", picked.len(), id);
        }
    }

    /// Pick a group and split it back into independent shapes.
    pub(super) async fn ungroup_shape(&mut self) {
        let Some((id, _)) = self.pick().await else { return };
        let Some(kind) = self.canvas.shape(id).map(|shape| shape.kind()) else {
            debug!("picked {} is not stored", id);
            return;
        };
        if kind != ShapeKind::Grouping {
            debug!("picked {} {} is not a group", kind, id);
            return;
        }
        let parts = self.canvas.ungroup(id);
        info!("ungrouped {} into {} shapes", id, parts.len());
    }
}
