//! A bounded OS-thread pool with task groups and cooperative thread
//! donation to avoid fork-join deadlock.
//!
//! [`WorkerPool`] owns a fixed set of worker threads and a capacity-bounded
//! task queue. Work is submitted through [`WorkerGroup`] handles, which
//! track how many of their own tasks are still outstanding so
//! [`WorkerGroup::wait_all`] can block until exactly those finish — other
//! groups sharing the same pool are unaffected.
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//! use worker_pool::WorkerPool;
//!
//! let pool = WorkerPool::new(3, 4, 64, "example").unwrap();
//! let mut group = pool.group();
//!
//! let counter = Arc::new(AtomicU32::new(0));
//! for _ in 0..8 {
//!     let counter = Arc::clone(&counter);
//!     group.push(move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     });
//! }
//! group.wait_all();
//! assert_eq!(counter.load(Ordering::SeqCst), 8);
//! ```

mod error;
mod group;
mod pool;
mod task;

pub use error::PoolError;
pub use group::WorkerGroup;
pub use pool::WorkerPool;

impl WorkerPool {
    /// Convenience constructor for a new, empty [`WorkerGroup`] on this
    /// pool. Equivalent to `WorkerGroup::new(&pool)`.
    #[must_use]
    pub fn group(self: &std::sync::Arc<Self>) -> WorkerGroup {
        WorkerGroup::new(self)
    }
}
