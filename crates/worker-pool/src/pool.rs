use crate::error::PoolError;
use crate::task::Task;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use tracing::{debug, trace, warn};

pub(crate) struct QueuedTask {
    pub(crate) group_id: u64,
    pub(crate) task: Task,
}

/// Bookkeeping for one [`crate::WorkerGroup`]'s outstanding tasks, kept
/// under the pool's own mutex rather than one of its own — the whole point
/// of the donation protocol is that a single lock sees both "is there
/// capacity to run a task" and "has this group finished draining."
pub(crate) struct GroupCounters {
    pub(crate) submitted: u64,
    pub(crate) released: u64,
    pub(crate) drain: Arc<Condvar>,
}

pub(crate) struct PoolInner {
    pub(crate) tasks: VecDeque<QueuedTask>,
    pub(crate) worker_limit: u32,
    pub(crate) working_count: u32,
    pub(crate) running: bool,
    pub(crate) groups: HashMap<u64, GroupCounters>,
    pub(crate) next_group_id: u64,
}

/// A bounded pool of OS threads that execute tasks pushed through
/// [`crate::WorkerGroup`] handles.
///
/// `thread_count` OS threads are spawned once, at construction, and live
/// for the pool's lifetime. `initial_worker_limit` caps how many of them may
/// be executing a task *concurrently* at any given moment — it can be lower
/// than `thread_count` to leave headroom that [`crate::WorkerGroup::wait_all`]
/// can donate into when a caller blocks waiting for its own group's tasks
/// (see that method's documentation for the donation protocol this exists
/// to support).
pub struct WorkerPool {
    pub(crate) inner: Mutex<PoolInner>,
    pub(crate) task_available: Condvar,
    pub(crate) task_capacity: usize,
    name_prefix: String,
    threads: Mutex<Vec<JoinHandle<()>>>,
}

impl WorkerPool {
    /// Creates a pool of `thread_count` worker threads, initially allowed to
    /// run up to `initial_worker_limit` tasks concurrently, queuing at most
    /// `task_capacity` pending tasks before [`crate::WorkerGroup::push`]
    /// blocks.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidArgument`] if `thread_count` is zero,
    /// `initial_worker_limit` is not strictly less than `thread_count`, or
    /// `task_capacity` is zero. Returns [`PoolError::Spawn`] if the OS
    /// refuses to create one of the worker threads; any threads already
    /// spawned for this pool are shut down first.
    ///
    /// `initial_worker_limit` must leave at least one thread of headroom:
    /// that headroom is what lets a donor raise the concurrency limit
    /// during [`crate::WorkerGroup::wait_all`] and still have a real worker
    /// thread available to use it. `initial_worker_limit` of `0` is
    /// permitted (no worker may run until some group donates via
    /// `wait_all`), matching the original's accepted range — it only
    /// asserts `starting_worker_count < thread_count`.
    pub fn new(
        initial_worker_limit: u32,
        thread_count: u32,
        task_capacity: usize,
        name_prefix: impl Into<String>,
    ) -> Result<Arc<Self>, PoolError> {
        if thread_count == 0 {
            return Err(PoolError::InvalidArgument {
                reason: "thread_count must be nonzero",
            });
        }
        if initial_worker_limit >= thread_count {
            return Err(PoolError::InvalidArgument {
                reason: "initial_worker_limit must be strictly less than thread_count",
            });
        }
        if task_capacity == 0 {
            return Err(PoolError::InvalidArgument {
                reason: "task_capacity must be nonzero",
            });
        }

        let name_prefix = name_prefix.into();
        debug!(thread_count, initial_worker_limit, task_capacity, %name_prefix, "creating worker pool");

        let pool = Arc::new(Self {
            inner: Mutex::new(PoolInner {
                tasks: VecDeque::with_capacity(task_capacity),
                worker_limit: initial_worker_limit,
                working_count: 0,
                running: true,
                groups: HashMap::new(),
                next_group_id: 0,
            }),
            task_available: Condvar::new(),
            task_capacity,
            name_prefix,
            threads: Mutex::new(Vec::with_capacity(thread_count as usize)),
        });

        for i in 0..thread_count {
            let pool_clone = Arc::clone(&pool);
            let thread_name = format!("{}-{i}", pool.name_prefix);
            match thread::Builder::new()
                .name(thread_name)
                .spawn(move || run_worker_loop(pool_clone))
            {
                Ok(handle) => pool.threads.lock().unwrap().push(handle),
                Err(e) => {
                    warn!(error = %e, "failed to spawn worker thread, rolling back pool");
                    pool.shutdown();
                    return Err(PoolError::Spawn(e));
                }
            }
        }

        Ok(pool)
    }

    pub(crate) fn register_group(&self) -> (u64, Arc<Condvar>) {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_group_id;
        inner.next_group_id += 1;
        let drain = Arc::new(Condvar::new());
        inner.groups.insert(
            id,
            GroupCounters {
                submitted: 0,
                released: 0,
                drain: Arc::clone(&drain),
            },
        );
        (id, drain)
    }

    pub(crate) fn unregister_group(&self, id: u64) {
        self.inner.lock().unwrap().groups.remove(&id);
    }

    fn shutdown(&self) {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.running = false;
        }
        self.task_available.notify_all();
        let mut threads = self.threads.lock().unwrap();
        for handle in threads.drain(..) {
            let _ = handle.join();
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_worker_loop(pool: Arc<WorkerPool>) {
    loop {
        let mut inner = pool.inner.lock().unwrap();
        loop {
            if !inner.running && inner.tasks.is_empty() {
                return;
            }
            if !inner.tasks.is_empty() && inner.working_count < inner.worker_limit {
                break;
            }
            inner = pool.task_available.wait(inner).unwrap();
        }

        let queued = inner
            .tasks
            .pop_front()
            .expect("loop above only breaks when tasks is nonempty");
        inner.working_count += 1;
        drop(inner);

        trace!(group_id = queued.group_id, "running task");
        queued.task.invoke();

        let mut inner = pool.inner.lock().unwrap();
        inner.working_count -= 1;
        if let Some(counters) = inner.groups.get_mut(&queued.group_id) {
            counters.released += 1;
            counters.drain.notify_all();
        }
        drop(inner);
        pool.task_available.notify_all();
    }
}
