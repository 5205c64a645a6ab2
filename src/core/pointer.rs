use crate::core::constants::FOLLOWER_HALF_SIZE_PX;
use crate::core::observable::{Observable, Subscription};
use glam::Vec2;

/// Latest pointer sample, already offset so a follower box of the
/// configured size is centered on the pointer.
///
/// The web layer feeds raw client coordinates through [`PointerTracker::on_move`];
/// subscribers see the centered position synchronously after each event.
#[derive(Clone)]
pub struct PointerTracker {
    half_size: Vec2,
    position: Observable<Vec2>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(Vec2::splat(FOLLOWER_HALF_SIZE_PX))
    }
}

impl PointerTracker {
    pub fn new(half_size: Vec2) -> Self {
        Self {
            half_size,
            position: Observable::new(Vec2::ZERO),
        }
    }

    #[inline]
    pub fn centered(&self, client: Vec2) -> Vec2 {
        client - self.half_size
    }

    pub fn on_move(&self, client: Vec2) {
        self.position.set(self.centered(client));
    }

    #[cfg(test)]
    pub fn position(&self) -> Vec2 {
        self.position.get()
    }

    pub fn subscribe(&self, callback: impl FnMut(&Vec2) + 'static) -> Subscription {
        self.position.subscribe(callback)
    }
}
