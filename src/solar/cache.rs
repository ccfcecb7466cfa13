//! Bounded date-keyed cache for solar activity samples.
//!
//! Samples are stochastic, so callers that need the same value across
//! repeated queries must get the stored draw back rather than a fresh one.
//! The cache is an explicit object with a capacity bound and FIFO eviction,
//! owned by the engine rather than hidden module state.

use std::collections::{HashMap, VecDeque};

use chrono::NaiveDate;
use parking_lot::Mutex;

use super::activity::SolarActivityData;

struct Inner {
    map: HashMap<NaiveDate, SolarActivityData>,
    order: VecDeque<NaiveDate>,
}

/// FIFO-bounded memoization map keyed by exact date.
///
/// Safe for interleaved read/insert from a single logical thread of control;
/// the mutex makes it safe for true parallel callers as well.
pub struct ActivityCache {
    inner: Mutex<Inner>,
    capacity: usize,
}

impl ActivityCache {
    /// Create a cache holding at most `capacity` samples. A capacity of zero
    /// disables storage entirely.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                map: HashMap::new(),
                order: VecDeque::new(),
            }),
            capacity,
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<SolarActivityData> {
        self.inner.lock().map.get(&date).cloned()
    }

    pub fn insert(&self, date: NaiveDate, data: SolarActivityData) {
        if self.capacity == 0 {
            return;
        }
        let mut inner = self.inner.lock();
        if inner.map.contains_key(&date) {
            inner.map.insert(date, data);
            return;
        }
        while inner.map.len() >= self.capacity {
            match inner.order.pop_front() {
                Some(oldest) => {
                    inner.map.remove(&oldest);
                }
                None => break,
            }
        }
        inner.map.insert(date, data);
        inner.order.push_back(date);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
