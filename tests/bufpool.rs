use tablog::BufPool;
use tablog::bufpool::{INITIAL_BUFFER_SIZE, MAX_BUFFER_SIZE};

#[test]
fn fresh_buffers_have_initial_capacity() {
    let pool = BufPool::new();
    let buf = pool.acquire();

    assert!(buf.is_empty());
    assert!(buf.capacity() >= INITIAL_BUFFER_SIZE);
}

#[test]
fn released_buffers_come_back_truncated() {
    let pool = BufPool::new();

    let mut buf = pool.acquire();
    buf.extend_from_slice(b"some rendered line\n");
    let grown = buf.capacity();
    pool.release(buf);

    let reused = pool.acquire();
    assert!(reused.is_empty());
    assert!(reused.capacity() >= grown);
}

#[test]
fn oversized_buffers_are_discarded_not_pooled() {
    let pool = BufPool::new();

    pool.release(Vec::with_capacity(MAX_BUFFER_SIZE * 2));

    // The pool was empty, so had the oversized buffer been kept it would be
    // the one handed back here.
    let buf = pool.acquire();
    assert!(buf.capacity() <= MAX_BUFFER_SIZE);
}

#[test]
fn buffers_at_exactly_the_cap_are_still_pooled() {
    let pool = BufPool::new();

    pool.release(Vec::with_capacity(MAX_BUFFER_SIZE));

    let buf = pool.acquire();
    assert_eq!(buf.capacity(), MAX_BUFFER_SIZE);
}

#[test]
fn concurrent_acquire_release_needs_no_external_locking() {
    let pool = std::sync::Arc::new(BufPool::new());

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let pool = std::sync::Arc::clone(&pool);
            scope.spawn(move || {
                for _ in 0..100 {
                    let mut buf = pool.acquire();
                    buf.extend_from_slice(b"line");
                    pool.release(buf);
                }
            });
        }
    });
}
