use std::num::NonZeroUsize;

use lru::LruCache;

use crate::backend::RgbaFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderedPageKey {
    pub doc_id: u64,
    pub page: usize,
    pub scale_milli: u32,
}

impl RenderedPageKey {
    pub fn new(doc_id: u64, page: usize, scale: f32) -> Self {
        let scale_milli = (scale.max(0.0) * 1000.0).round() as u32;
        Self {
            doc_id,
            page,
            scale_milli,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheCounters {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// LRU cache of rendered page frames, bounded by entry count and by the
/// total pixel-byte budget.
#[derive(Debug)]
pub struct RenderedPageCache {
    memory_budget_bytes: usize,
    memory_bytes: usize,
    entries: LruCache<RenderedPageKey, RgbaFrame>,
    counters: CacheCounters,
}

impl RenderedPageCache {
    pub fn new(max_entries: usize, memory_budget_bytes: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            memory_budget_bytes: memory_budget_bytes.max(1),
            memory_bytes: 0,
            entries: LruCache::new(
                NonZeroUsize::new(max_entries).expect("max entries is non-zero"),
            ),
            counters: CacheCounters::default(),
        }
    }

    pub fn get_cloned(&mut self, key: &RenderedPageKey) -> Option<RgbaFrame> {
        if self.entries.peek(key).is_some() {
            self.counters.hits += 1;
            return self.entries.get(key).cloned();
        }

        self.counters.misses += 1;
        None
    }

    pub fn insert(&mut self, key: RenderedPageKey, frame: RgbaFrame) {
        if let Some(prev) = self.entries.pop(&key) {
            self.memory_bytes = self.memory_bytes.saturating_sub(prev.byte_len());
        }

        // A put into a full LruCache silently drops the LRU entry; account
        // for those bytes before they disappear.
        let implicit_evicted_bytes = if self.entries.len() >= self.entries.cap().get() {
            self.entries.peek_lru().map(|(_key, frame)| frame.byte_len())
        } else {
            None
        };

        self.memory_bytes += frame.byte_len();
        self.entries.put(key, frame);
        if let Some(evicted_bytes) = implicit_evicted_bytes {
            self.memory_bytes = self.memory_bytes.saturating_sub(evicted_bytes);
            self.counters.evictions += 1;
        }

        while self.memory_bytes > self.memory_budget_bytes && self.entries.len() > 1 {
            if let Some((_key, evicted)) = self.entries.pop_lru() {
                self.memory_bytes = self.memory_bytes.saturating_sub(evicted.byte_len());
                self.counters.evictions += 1;
            } else {
                break;
            }
        }
    }

    pub fn counters(&self) -> CacheCounters {
        self.counters
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn memory_bytes(&self) -> usize {
        self.memory_bytes
    }
}
