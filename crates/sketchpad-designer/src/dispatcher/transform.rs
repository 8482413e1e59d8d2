//! Commands that change or remove an existing shape.

use tracing::info;

use super::Dispatcher;
use crate::model::Drawable;

impl Dispatcher {
    /// Pick, then destination. The picked pixel lands on the destination.
    pub(super) async fn move_shape(&mut self) {
        let Some((id, hit)) = self.pick().await else { return };
        let Some(destination) = self.click().await else { return };
        let delta = destination - hit;
        if self.canvas.translate(id, delta) {
            info!("moved {} by {}", id, delta);
        }
    }

    /// Pick, rotation origin, then two points whose angular difference
    /// around the origin is the rotation.
    pub(super) async fn rotate_shape(&mut self) {
        let Some((id, _)) = self.pick().await else { return };
        let Some(origin) = self.click().await else { return };
        let Some(from) = self.click().await else { return };
        let Some(to) = self.click().await else { return };
        let angle = to.angle_from(origin) - from.angle_from(origin);
        if self.canvas.rotate(id, origin, angle) {
            info!("rotated {} by {:.3} rad about {}", id, angle, origin);
        }
    }

    /// Pick, then two points on the mirror axis.
    pub(super) async fn mirror_shape(&mut self) {
        let Some((id, _)) = self.pick().await else { return };
        let Some(p1) = self.click().await else { return };
        let Some(p2) = self.click().await else { return };
        if let Some(copy) = self.canvas.mirror(id, p1, p2) {
            info!("mirrored {} as {}", id, copy);
        }
    }

    pub(super) async fn delete_shape(&mut self) {
        let Some((id, _)) = self.pick().await else { return };
        if let Some(shape) = self.canvas.delete(id) {
            info!("deleted {} {}", shape.kind(), id);
        }
    }
}
