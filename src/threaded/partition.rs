//! Loop partitioning: which worker owns which index of `0..len`.

use std::iter::FusedIterator;

/// Policy for dividing an index range among a fixed number of workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    /// Worker `k` owns one contiguous block of `ceil(len / workers)` indices.
    Contiguous,
    /// Worker `k` owns `k, k + workers, k + 2 * workers, ...`.
    Strided,
}

impl Partition {
    /// Indices of `0..len` owned by `worker` out of `workers`.
    ///
    /// # Panics
    ///
    /// Panics if `workers` is zero or `worker >= workers`.
    pub fn indices(self, len: usize, workers: usize, worker: usize) -> Indices {
        assert!(workers > 0, "partition needs at least one worker");
        assert!(worker < workers, "worker {} out of {}", worker, workers);

        match self {
            Partition::Contiguous => {
                let chunk = chunk_len(len, workers);
                let start = (worker * chunk).min(len);
                let end = (start + chunk).min(len);
                Indices {
                    next: start,
                    end,
                    step: 1,
                }
            }
            Partition::Strided => Indices {
                next: worker.min(len),
                end: len,
                step: workers,
            },
        }
    }

    /// Worker that owns `index`. Inverse of [`Partition::indices`].
    pub fn owner(self, index: usize, len: usize, workers: usize) -> usize {
        debug_assert!(index < len);
        match self {
            Partition::Contiguous => index / chunk_len(len, workers),
            Partition::Strided => index % workers,
        }
    }
}

/// Block size used by [`Partition::Contiguous`]. Never zero.
pub fn chunk_len(len: usize, workers: usize) -> usize {
    len.div_ceil(workers.max(1)).max(1)
}

/// Workers actually worth spawning for `len` items: `threads` capped by
/// `len`, and never less than one.
pub fn effective_workers(len: usize, threads: usize) -> usize {
    threads.min(len).max(1)
}

/// Iterator over the indices owned by one worker.
#[derive(Debug, Clone)]
pub struct Indices {
    next: usize,
    end: usize,
    step: usize,
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next >= self.end {
            return None;
        }
        let current = self.next;
        self.next = self.next.saturating_add(self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next >= self.end {
            0
        } else {
            (self.end - self.next).div_ceil(self.step)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Indices {}
impl FusedIterator for Indices {}

#[cfg(test)]
mod tests {
    use super::*;

    fn coverage(partition: Partition, len: usize, workers: usize) -> Vec<usize> {
        let mut seen = vec![0usize; len];
        for worker in 0..workers {
            for i in partition.indices(len, workers, worker) {
                seen[i] += 1;
                assert_eq!(partition.owner(i, len, workers), worker);
            }
        }
        seen
    }

    #[test]
    fn test_every_index_owned_once() {
        for partition in [Partition::Contiguous, Partition::Strided] {
            for len in [0, 1, 2, 7, 10, 64, 100] {
                for workers in 1..=9 {
                    let seen = coverage(partition, len, workers);
                    assert!(
                        seen.iter().all(|&n| n == 1),
                        "{:?} len={} workers={}: {:?}",
                        partition,
                        len,
                        workers,
                        seen
                    );
                }
            }
        }
    }

    #[test]
    fn test_strided_rows() {
        let rows: Vec<usize> = Partition::Strided.indices(10, 3, 1).collect();
        assert_eq!(rows, vec![1, 4, 7]);
    }

    #[test]
    fn test_contiguous_blocks() {
        let blocks: Vec<Vec<usize>> = (0..3)
            .map(|w| Partition::Contiguous.indices(10, 3, w).collect())
            .collect();
        assert_eq!(blocks[0], vec![0, 1, 2, 3]);
        assert_eq!(blocks[1], vec![4, 5, 6, 7]);
        assert_eq!(blocks[2], vec![8, 9]);
    }

    #[test]
    fn test_more_workers_than_items() {
        assert_eq!(Partition::Contiguous.indices(2, 4, 3).count(), 0);
        assert_eq!(Partition::Strided.indices(2, 4, 3).count(), 0);
        assert_eq!(effective_workers(2, 4), 2);
        assert_eq!(effective_workers(0, 4), 1);
    }

    #[test]
    fn test_size_hint_is_exact() {
        let it = Partition::Strided.indices(11, 4, 2);
        assert_eq!(it.len(), it.clone().count());
        let it = Partition::Contiguous.indices(11, 4, 3);
        assert_eq!(it.len(), it.clone().count());
    }
}
