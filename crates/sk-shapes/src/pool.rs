//! Free-list object pool.

use log::trace;

/// A type that can be handed out by a [`Pool`].
///
/// `create` runs the first time an instance is needed; `on_reset` runs on
/// every reuse and must overwrite all state derived from the previous use.
pub trait Poolable {
    type Args;

    fn create(args: Self::Args) -> Self;

    fn on_reset(&mut self, args: Self::Args);
}

/// Recycles released instances instead of constructing new ones.
#[derive(Debug)]
pub struct Pool<T> {
    free: Vec<T>,
    created: usize,
    reused: usize,
}

impl<T: Poolable> Pool<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            created: 0,
            reused: 0,
        }
    }

    /// Take a recycled instance (reset with `args`) or create a fresh one.
    pub fn acquire(&mut self, args: T::Args) -> T {
        match self.free.pop() {
            Some(mut item) => {
                item.on_reset(args);
                self.reused += 1;
                trace!(
                    "pool<{}>: reused instance ({} left)",
                    std::any::type_name::<T>(),
                    self.free.len()
                );
                item
            }
            None => {
                self.created += 1;
                trace!("pool<{}>: created instance", std::any::type_name::<T>());
                T::create(args)
            }
        }
    }

    pub fn release(&mut self, item: T) {
        self.free.push(item);
        trace!(
            "pool<{}>: released instance ({} available)",
            std::any::type_name::<T>(),
            self.free.len()
        );
    }

    /// Instances waiting to be reused.
    pub fn available(&self) -> usize {
        self.free.len()
    }

    pub fn created(&self) -> usize {
        self.created
    }

    pub fn reused(&self) -> usize {
        self.reused
    }
}

impl<T: Poolable> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}
