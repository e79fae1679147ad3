// SPDX-License-Identifier: MIT OR Apache-2.0
use super::RwLock;
use crate::{TimedOut, Timeout};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use std::thread;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn test_lock_try() {
    let rwlock = RwLock::new(0);
    let lock = rwlock.try_lock_read(Timeout::IMMEDIATE);
    assert!(lock.is_ok());
    assert_eq!(lock.as_ref().unwrap().deref(), &0);
    let lock2 = rwlock.try_lock_read(Timeout::IMMEDIATE);
    assert!(lock2.is_ok());
    assert_eq!(lock2.as_ref().unwrap().deref(), &0);

    drop(lock2);
    //fail to acquire write lock
    let lock2 = rwlock.try_lock_write(Timeout::IMMEDIATE);
    assert_eq!(lock2.err(), Some(TimedOut));

    drop(lock);
    let mut write_lock = rwlock.try_lock_write(Timeout::IMMEDIATE);
    assert!(write_lock.is_ok());
    *write_lock.as_mut().unwrap().deref_mut() = 2;
    assert_eq!(write_lock.as_ref().unwrap().deref(), &2);

    //fail to acquire a new read lock
    let read_lock = rwlock.try_lock_read(Duration::from_millis(5));
    assert!(read_lock.is_err());

    drop(write_lock);
    let read_lock = rwlock.try_lock_read(Timeout::IMMEDIATE);
    assert_eq!(read_lock.as_ref().unwrap().deref(), &2);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn test_lock_until() {
    let rwlock = RwLock::new(1);
    let past = crate::Instant::now();
    let guard = rwlock.try_lock_write_until(past).unwrap();
    assert!(rwlock.try_lock_read_until(past).is_err());
    assert!(rwlock.try_lock_write_until(past).is_err());
    drop(guard);
    assert!(rwlock.try_lock_read_until(past).is_ok());
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn test_guards_release() {
    let rwlock = RwLock::new(String::from("a"));
    {
        let _r1 = rwlock.lock_sync_read();
        let _r2 = rwlock.lock_sync_read();
        assert_eq!(rwlock.reader_count(), 2);
    }
    assert!(!rwlock.is_locked());
    {
        let mut w = rwlock.lock_sync_write();
        w.push('b');
        assert!(rwlock.is_locked_exclusive());
    }
    assert!(!rwlock.is_locked());
    assert_eq!(rwlock.with_sync(|s| s.clone()), "ab");
    assert_eq!(rwlock.with_mut_sync(|s| s.len()), 2);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn test_write_guard_stays_exclusive() {
    let rwlock = RwLock::new(0);
    let mut guard = rwlock.lock_sync_write();
    assert!(rwlock.is_locked());
    assert!(rwlock.is_locked_exclusive());
    assert_eq!(rwlock.reader_count(), 0);

    // inspection never releases the lock out from under the guard
    assert_eq!(rwlock.try_lock_write(Timeout::IMMEDIATE).err(), Some(TimedOut));
    assert_eq!(rwlock.try_lock_read(Timeout::IMMEDIATE).err(), Some(TimedOut));
    assert!(rwlock.is_locked_exclusive());
    *guard = 1;
    drop(guard);

    assert!(!rwlock.is_locked());
    let _r = rwlock.lock_sync_read();
    assert_eq!(rwlock.reader_count(), 1);
    assert!(!rwlock.is_locked_exclusive());
    assert_eq!(rwlock.try_lock_write(Timeout::IMMEDIATE).err(), Some(TimedOut));
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn test_display() {
    let rwlock = RwLock::new(7);
    assert_eq!(rwlock.to_string(), "7");
    let guard = rwlock.lock_sync_write();
    assert_eq!(guard.to_string(), "7");
    assert_eq!(rwlock.to_string(), "RwLock { <locked> }");
    drop(guard);
    let reader = rwlock.lock_sync_read();
    assert_eq!(reader.to_string(), "7");
    // readers do not hide the value
    assert_eq!(rwlock.to_string(), "7");
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn test_into_inner_get_mut() {
    let mut rwlock = RwLock::from(vec![1]);
    rwlock.get_mut().push(2);
    assert_eq!(rwlock.into_inner(), vec![1, 2]);
    let rwlock: RwLock<u8> = RwLock::default();
    assert_eq!(*rwlock.lock_sync_read(), 0);
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_lock_block() {
    let rwlock = Arc::new(RwLock::new(0));
    let lock = rwlock.lock_sync_read();
    assert_eq!(lock.deref(), &0);

    let (tx, rx) = std::sync::mpsc::channel();
    let rwlock_clone = rwlock.clone();
    thread::spawn(move || {
        //indicate thread came up
        tx.send(()).unwrap();
        let mut lock = rwlock_clone.lock_sync_write();
        *lock = 1;
        tx.send(()).unwrap();
        thread::sleep(Duration::from_millis(25));
        drop(lock);
    });
    //wait for thread up msg
    rx.recv().unwrap();
    assert!(rx.recv_timeout(Duration::from_millis(10)).is_err());
    drop(lock); //thread should now acquire lock
    rx.recv().unwrap(); //wait for thread to acquire lock
    let time = std::time::Instant::now();
    let lock = rwlock.lock_sync_read();
    assert!(time.elapsed() > Duration::from_millis(10));
    assert_eq!(*lock, 1);
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_timed_write_succeeds_after_release() {
    let rwlock = Arc::new(RwLock::new(0));
    let guard = rwlock.lock_sync_write();

    let rwlock_clone = Arc::clone(&rwlock);
    let handle = thread::spawn(move || {
        let mut guard = rwlock_clone.try_lock_write(Duration::from_millis(200))?;
        *guard += 1;
        Ok::<_, TimedOut>(())
    });
    thread::sleep(Duration::from_millis(50));
    drop(guard);
    assert_eq!(handle.join().unwrap(), Ok(()));
    assert_eq!(*rwlock.lock_sync_read(), 1);
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_concurrent_counter() {
    let rwlock = Arc::new(RwLock::new(0u32));
    let handles: Vec<_> = (0..6)
        .map(|_| {
            let rwlock = Arc::clone(&rwlock);
            thread::spawn(move || {
                for _ in 0..100 {
                    *rwlock.lock_sync_write() += 1;
                    let value = *rwlock.lock_sync_read();
                    assert!(value >= 1);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(*rwlock.lock_sync_read(), 600);
}

#[test_executors::async_test]
async fn test_async() {
    let rwlock = Arc::new(RwLock::new(0));
    let lock = rwlock.lock_async_read().await;
    assert_eq!(lock.deref(), &0);
    drop(lock);
    let mut lock = rwlock.lock_async_write().await;
    *lock = 3;
    drop(lock);
    assert_eq!(rwlock.with_async(|v| *v).await, 3);
    rwlock.with_mut_async(|v| *v += 1).await;
    assert_eq!(rwlock.with_async(|v| *v).await, 4);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
#[test]
fn test_sync() {
    let rwlock = Arc::new(RwLock::new(0));
    let lock = rwlock.lock_sync_read();
    assert_eq!(lock.deref(), &0);
    drop(lock);
    let lock = rwlock.lock_sync_write();
    assert_eq!(lock.deref(), &0);
    drop(lock);
}
