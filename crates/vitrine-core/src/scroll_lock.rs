//! Page scroll locking held by an open modal viewer.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

/// Host-side page scroll lock.
pub trait ScrollLock: Send + Sync {
    fn acquire(&self);

    fn release(&self);
}

/// Reference-counted lock. The page is locked while `depth() > 0`.
#[derive(Clone, Debug, Default)]
pub struct CountingScrollLock {
    depth: Arc<AtomicUsize>,
}

impl CountingScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::SeqCst)
    }

    pub fn is_locked(&self) -> bool {
        self.depth() > 0
    }
}

impl ScrollLock for CountingScrollLock {
    fn acquire(&self) {
        let depth = self.depth.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(depth, "page scroll locked");
    }

    fn release(&self) {
        // Saturates at zero.
        match self
            .depth
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |d| d.checked_sub(1))
        {
            Ok(previous) => debug!(depth = previous - 1, "page scroll released"),
            Err(_) => warn!("scroll lock released while not held"),
        }
    }
}

/// Holds one acquisition of a [`ScrollLock`]. Releases at most once, either
/// through [`ScrollLockGuard::release`] or on drop.
pub struct ScrollLockGuard {
    lock: Arc<dyn ScrollLock>,
    released: bool,
}

impl ScrollLockGuard {
    pub fn acquire(lock: Arc<dyn ScrollLock>) -> Self {
        lock.acquire();
        Self {
            lock,
            released: false,
        }
    }

    pub fn is_held(&self) -> bool {
        !self.released
    }

    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.lock.release();
        }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.release();
    }
}
