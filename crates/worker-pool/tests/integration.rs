use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use worker_pool::WorkerPool;

#[test]
fn pool_fan_out_runs_tasks_concurrently() {
    // Scenario 5: initial=2, threads=3, three 50ms tasks in one group.
    let pool = WorkerPool::new(2, 3, 64, "fanout").unwrap();
    let mut group = pool.group();

    let started = Instant::now();
    for _ in 0..3 {
        group.push(|| thread::sleep(Duration::from_millis(50)));
    }
    group.wait_all();
    let elapsed = started.elapsed();

    // Serialized, three 50ms tasks would take ~150ms. Run with a
    // concurrency budget of 2, wall clock should land well under that.
    assert!(
        elapsed < Duration::from_millis(120),
        "fan-out took {elapsed:?}, expected well under the 150ms serial bound"
    );
}

#[test]
fn wait_all_only_waits_for_its_own_group() {
    let pool = WorkerPool::new(2, 3, 64, "groups").unwrap();
    let mut group_a = pool.group();
    let mut group_b = pool.group();

    let a_done = Arc::new(AtomicBool::new(false));
    let b_done = Arc::new(AtomicBool::new(false));

    {
        let b_done = Arc::clone(&b_done);
        group_b.push(move || {
            thread::sleep(Duration::from_millis(200));
            b_done.store(true, Ordering::SeqCst);
        });
    }
    {
        let a_done = Arc::clone(&a_done);
        group_a.push(move || {
            a_done.store(true, Ordering::SeqCst);
        });
    }

    group_a.wait_all();
    assert!(a_done.load(Ordering::SeqCst));
    // group B's task is slow and should not have been waited on.
    assert!(!b_done.load(Ordering::SeqCst));

    group_b.wait_all();
    assert!(b_done.load(Ordering::SeqCst));
}

#[test]
fn donation_prevents_deadlock_on_nested_wait_all() {
    // A single worker thread. Its only task calls wait_all on a second
    // group's task. Without donation, the second task could never run
    // (the lone worker is busy running the first task), deadlocking
    // forever. With donation, wait_all raises the concurrency limit so
    // the inner task can still execute.
    // Scenario 6: initial=1, threads=2 — exactly one spare thread, which
    // donation must make usable for the nested group's task.
    let pool = WorkerPool::new(1, 2, 8, "donate").unwrap();
    let mut outer = pool.group();

    let inner_ran = Arc::new(AtomicBool::new(false));
    let inner_ran_clone = Arc::clone(&inner_ran);

    let pool_for_inner = Arc::clone(&pool);
    outer.push(move || {
        let mut inner_group = worker_pool::WorkerGroup::new(&pool_for_inner);
        inner_group.push(move || {
            inner_ran_clone.store(true, Ordering::SeqCst);
        });
        inner_group.wait_all();
    });

    outer.wait_all();
    assert!(inner_ran.load(Ordering::SeqCst));
}

#[test]
fn push_all_waits_for_the_whole_batch() {
    let pool = WorkerPool::new(4, 5, 64, "batch").unwrap();
    let mut group = pool.group();

    let counter = Arc::new(AtomicU32::new(0));
    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let counter = Arc::clone(&counter);
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        })
        .collect();

    group.push_all(tasks);
    assert_eq!(counter.load(Ordering::SeqCst), 16);
}

#[test]
fn sequential_wait_then_simultaneous_dispatch_reversed_wait() {
    let pool = WorkerPool::new(2, 3, 16, "seq").unwrap();
    let mut group_a = pool.group();
    let mut group_b = pool.group();

    let called_a = Arc::new([
        AtomicBool::new(false),
        AtomicBool::new(false),
        AtomicBool::new(false),
    ]);

    for i in 0..3 {
        let called_a = Arc::clone(&called_a);
        group_a.push(move || called_a[i].store(true, Ordering::SeqCst));
    }
    group_a.wait_all();
    for flag in called_a.iter() {
        assert!(flag.load(Ordering::SeqCst));
    }

    let called_b = Arc::new([
        AtomicBool::new(false),
        AtomicBool::new(false),
        AtomicBool::new(false),
    ]);
    for i in 0..3 {
        let called_b = Arc::clone(&called_b);
        group_b.push(move || {
            thread::sleep(Duration::from_millis(50));
            called_b[i].store(true, Ordering::SeqCst);
        });
    }
    group_b.wait_all();
    for flag in called_b.iter() {
        assert!(flag.load(Ordering::SeqCst));
    }
}
