//! Fork-join worker spawning and shared output buffers.

use crate::error::{Error, Result};
use std::marker::PhantomData;
use std::num::NonZeroUsize;
use std::thread;
use tracing::debug;

/// Validate a raw thread count coming from the user.
pub fn thread_count(threads: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(threads).ok_or(Error::ZeroThreads)
}

/// Run `work(worker, item)` once per item, each on its own scoped thread,
/// and join them all before returning.
///
/// A single item runs inline on the caller's thread. A panic in any worker
/// is propagated to the caller once every worker has been joined.
pub fn for_each_worker<T, F>(items: Vec<T>, work: F) -> Result<()>
where
    T: Send,
    F: Fn(usize, T) + Sync,
{
    if items.len() <= 1 {
        if let Some(item) = items.into_iter().next() {
            work(0, item);
        }
        return Ok(());
    }

    debug!(workers = items.len(), "spawning parallel region");

    let work = &work;
    thread::scope(|scope| -> Result<()> {
        let mut handles = Vec::with_capacity(items.len());
        for (worker, item) in items.into_iter().enumerate() {
            let handle = thread::Builder::new()
                .name(format!("parlab-worker-{}", worker))
                .spawn_scoped(scope, move || work(worker, item))
                .map_err(Error::Spawn)?;
            handles.push(handle);
        }
        for handle in handles {
            if let Err(payload) = handle.join() {
                std::panic::resume_unwind(payload);
            }
        }
        Ok(())
    })
}

/// Mutable slice that several workers write through at the same time.
///
/// Used where each worker's writes are scattered across the buffer (the
/// transpose writes a column per source row), so the buffer cannot be split
/// into per-worker sub-slices.
pub struct DisjointSlice<'a, T> {
    ptr: *mut T,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

unsafe impl<T: Send> Send for DisjointSlice<'_, T> {}
unsafe impl<T: Send> Sync for DisjointSlice<'_, T> {}

impl<'a, T> DisjointSlice<'a, T> {
    pub fn new(slice: &'a mut [T]) -> Self {
        Self {
            ptr: slice.as_mut_ptr(),
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Write `value` at `index`.
    ///
    /// # Safety
    ///
    /// No other thread may read or write `index` for the lifetime of this
    /// slice. Callers guarantee this by deriving indices from a
    /// [`Partition`](super::partition::Partition), which hands every index
    /// to exactly one worker.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub unsafe fn write(&self, index: usize, value: T) {
        assert!(index < self.len, "index {} out of bounds ({})", index, self.len);
        unsafe { self.ptr.add(index).write(value) };
    }
}
