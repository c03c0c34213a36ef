//! Client identifier allocation.

use crate::ClientId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Allocates unique, strictly increasing client identifiers.
///
/// The allocator holds the last assigned identifier in an [`AtomicU64`] and
/// reserves both single identifiers and contiguous blocks with one
/// `fetch_add`. Two allocation calls therefore can never observe the same
/// state and hand out overlapping identifiers, no matter how concurrent
/// single and bulk inserts interleave.
///
/// The store is consulted exactly once, at construction, to learn the
/// current maximum; after that the allocator is the only authority on the
/// identifier space. Identifiers reserved for records that subsequently
/// fail insertion are burned, never reused: uniqueness and monotonicity are
/// the hard invariants, contiguity only holds across successful inserts.
#[derive(Debug)]
pub struct IdAllocator {
    last: AtomicU64,
}

impl IdAllocator {
    /// Creates an allocator that resumes above the given maximum.
    ///
    /// `None` means no records exist yet; the first identifier handed out is
    /// then `1`.
    pub fn from_max(max: Option<ClientId>) -> Self {
        Self {
            last: AtomicU64::new(max.map_or(0, ClientId::get)),
        }
    }

    /// Reserves and returns the next identifier.
    pub fn next_id(&self) -> ClientId {
        ClientId::new(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Reserves a contiguous block of `count` identifiers.
    ///
    /// The returned block yields exactly `count` identifiers in increasing
    /// order. Reserving an empty block is allowed and advances nothing.
    pub fn block(&self, count: usize) -> IdBlock {
        let count = count as u64;
        let start = self.last.fetch_add(count, Ordering::Relaxed);
        IdBlock {
            next: start + 1,
            end: start + count,
        }
    }
}

/// A contiguous run of reserved identifiers, iterated in increasing order.
#[derive(Clone, Debug)]
pub struct IdBlock {
    next: u64,
    end: u64,
}

impl Iterator for IdBlock {
    type Item = ClientId;

    fn next(&mut self) -> Option<ClientId> {
        if self.next > self.end {
            return None;
        }
        let id = ClientId::new(self.next);
        self.next += 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.end + 1 - self.next) as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for IdBlock {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::thread::scope;

    #[test]
    fn serial_allocation_counts_up_from_one() {
        let allocator = IdAllocator::from_max(None);
        let ids: Vec<u64> = (0..5).map(|_| allocator.next_id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn allocation_resumes_above_the_seeded_maximum() {
        let allocator = IdAllocator::from_max(Some(ClientId::new(41)));
        assert_eq!(allocator.next_id().get(), 42);
    }

    #[test]
    fn blocks_are_contiguous_and_exact_size() {
        let allocator = IdAllocator::from_max(None);
        let block = allocator.block(3);
        assert_eq!(block.len(), 3);
        assert_eq!(block.map(ClientId::get).collect::<Vec<_>>(), vec![1, 2, 3]);

        // The next single allocation lands right after the block.
        assert_eq!(allocator.next_id().get(), 4);
    }

    #[test]
    fn empty_block_reserves_nothing() {
        let allocator = IdAllocator::from_max(None);
        let mut block = allocator.block(0);
        assert_eq!(block.len(), 0);
        assert_eq!(block.next(), None);
        assert_eq!(allocator.next_id().get(), 1);
    }

    #[test]
    fn concurrent_allocations_never_overlap() {
        const THREADS: usize = 8;
        const IDS_PER_THREAD: usize = 512;

        let allocator = IdAllocator::from_max(None);
        let seen_ids = Mutex::new(HashSet::with_capacity(THREADS * IDS_PER_THREAD));

        scope(|s| {
            for _ in 0..THREADS {
                s.spawn(|| {
                    // Mix single and block reservations so both entry points
                    // race against each other.
                    let mut local = Vec::with_capacity(IDS_PER_THREAD);
                    for chunk in 0..IDS_PER_THREAD / 4 {
                        if chunk % 2 == 0 {
                            local.extend(allocator.block(4));
                        } else {
                            for _ in 0..4 {
                                local.push(allocator.next_id());
                            }
                        }
                    }
                    let mut seen = seen_ids.lock().unwrap();
                    for id in local {
                        assert!(seen.insert(id), "duplicate id {id}");
                    }
                });
            }
        });

        let seen = seen_ids.into_inner().unwrap();
        assert_eq!(seen.len(), THREADS * IDS_PER_THREAD);
        assert_eq!(seen.iter().max(), Some(&ClientId::new((THREADS * IDS_PER_THREAD) as u64)));
    }
}
