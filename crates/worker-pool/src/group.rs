use crate::pool::{QueuedTask, WorkerPool};
use crate::task::Task;
use std::sync::{Arc, Condvar};
use tracing::trace;

/// A handle for submitting related tasks to a [`WorkerPool`] and waiting
/// for all of them to finish.
///
/// Dropping a group that still has outstanding tasks does *not* wait for
/// them — call [`Self::wait_all`] explicitly first. This mirrors the
/// original's group objects, which are reference-counted handles rather
/// than RAII-joined scopes; only the higher-level batch helper
/// ([`Self::push_all`]) waits automatically.
pub struct WorkerGroup {
    pool: Arc<WorkerPool>,
    id: u64,
    drain: Arc<Condvar>,
}

impl WorkerGroup {
    /// Creates a new, empty task group on `pool`.
    #[must_use]
    pub fn new(pool: &Arc<WorkerPool>) -> Self {
        let (id, drain) = pool.register_group();
        Self {
            pool: Arc::clone(pool),
            id,
            drain,
        }
    }

    /// Submits a task to the pool under this group.
    ///
    /// If the pool's task queue is already at capacity, this falls back to
    /// draining this group's own outstanding tasks (as if [`Self::wait_all`]
    /// had been called) to make room, then retries. This mirrors the
    /// original's behavior of waiting for the whole group rather than a
    /// single freed slot — documented in that type's own module as an open
    /// design question the original left unresolved, and left unresolved
    /// here too.
    pub fn push<F>(&mut self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut pending = Some(task);
        loop {
            {
                let mut inner = self.pool.inner.lock().unwrap();
                if inner.tasks.len() < self.pool.task_capacity {
                    let task = pending.take().expect("task consumed at most once");
                    inner.tasks.push_back(QueuedTask {
                        group_id: self.id,
                        task: Task::new(task),
                    });
                    if let Some(counters) = inner.groups.get_mut(&self.id) {
                        counters.submitted += 1;
                    }
                    drop(inner);
                    self.pool.task_available.notify_one();
                    return;
                }
            }
            trace!(group_id = self.id, "task queue full, draining before retrying push");
            self.wait_all();
        }
    }

    /// Pushes every task in `tasks`, then waits for all of them (and any
    /// previously pushed, still-outstanding tasks in this group) to finish.
    ///
    /// A convenience layered directly on [`Self::push`] and
    /// [`Self::wait_all`] — the original's equivalent bundles "submit a
    /// batch, then block until it drains" into one RAII-scoped object; here
    /// it is one method rather than a type whose destructor blocks, since
    /// Rust destructors generally shouldn't do blocking I/O implicitly.
    pub fn push_all<F, I>(&mut self, tasks: I)
    where
        F: FnOnce() + Send + 'static,
        I: IntoIterator<Item = F>,
    {
        for task in tasks {
            self.push(task);
        }
        self.wait_all();
    }

    /// Blocks until every task submitted to this group so far has finished.
    ///
    /// If tasks are still outstanding, the calling thread "donates" its
    /// execution slot: the pool's concurrency limit is raised by one for
    /// the duration of the wait. A worker thread that is itself running a
    /// task and calls `wait_all` on a different group would otherwise be
    /// unable to make progress if every other worker thread is similarly
    /// blocked — donation exists so that case can't deadlock: the limit
    /// rising by one guarantees at least one of the group's queued tasks
    /// can start even when every worker thread is already "spoken for."
    pub fn wait_all(&mut self) {
        let mut inner = self.pool.inner.lock().unwrap();

        let needs_to_wait = inner
            .groups
            .get(&self.id)
            .is_some_and(|c| c.released < c.submitted);

        if needs_to_wait {
            inner.worker_limit += 1;
            self.pool.task_available.notify_all();
        }

        loop {
            let drained = match inner.groups.get(&self.id) {
                Some(c) => c.released >= c.submitted,
                None => true,
            };
            if drained {
                break;
            }
            inner = self.drain.wait(inner).unwrap();
        }

        if needs_to_wait {
            inner.worker_limit -= 1;
        }
    }
}

impl Drop for WorkerGroup {
    fn drop(&mut self) {
        self.pool.unregister_group(self.id);
    }
}
