//! Hit accumulation: screen histogram and a bounded record of recent hits

use std::collections::VecDeque;

/// Fixed-width buckets spanning the screen height.
///
/// Bucket `i` covers `[-h/2 + i·h/N, -h/2 + (i+1)·h/N)`. Hits outside the
/// screen are clamped into the first or last bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct HitAccumulator {
    buckets: Vec<u64>,
    screen_height: f64,
    max_count: u64,
}

impl HitAccumulator {
    pub fn new(bucket_count: usize, screen_height: f64) -> Self {
        Self {
            buckets: vec![0; bucket_count.max(1)],
            screen_height,
            max_count: 0,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn screen_height(&self) -> f64 {
        self.screen_height
    }

    /// Bucket for a screen position, clamped to a valid index
    pub fn bucket_index(&self, y: f64) -> usize {
        let n = self.buckets.len();
        let half_height = self.screen_height / 2.0;
        let raw = ((y + half_height) / self.screen_height * n as f64).floor();

        if raw.is_nan() || raw < 0.0 {
            0
        } else {
            (raw as usize).min(n - 1)
        }
    }

    /// y at the middle of bucket `index`
    pub fn bucket_center(&self, index: usize) -> f64 {
        let width = self.screen_height / self.buckets.len() as f64;
        -self.screen_height / 2.0 + (index as f64 + 0.5) * width
    }

    pub fn add_hit(&mut self, y: f64) {
        let index = self.bucket_index(y);
        self.buckets[index] += 1;
        self.max_count = self.max_count.max(self.buckets[index]);
    }

    pub fn buckets(&self) -> &[u64] {
        &self.buckets
    }

    pub fn max_count(&self) -> u64 {
        self.max_count
    }

    pub fn total_hits(&self) -> u64 {
        self.buckets.iter().sum()
    }

    /// Counts scaled by the fullest bucket, for drawing bars
    pub fn normalized(&self) -> Vec<f64> {
        let max = self.max_count.max(1) as f64;
        self.buckets.iter().map(|&c| c as f64 / max).collect()
    }

    pub fn reset(&mut self) {
        self.buckets.fill(0);
        self.max_count = 0;
    }
}

/// A recorded screen hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    pub x: f64,
    pub y: f64,
    pub detector_on_at_hit: bool,
}

/// Ring buffer of the most recent hits; the oldest record is evicted first
#[derive(Debug, Clone)]
pub struct HitLog {
    records: VecDeque<HitRecord>,
    capacity: usize,
}

impl HitLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, record: HitRecord) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HitRecord> + '_ {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_mapping() {
        let histogram = HitAccumulator::new(40, 16.0);
        assert_eq!(histogram.bucket_index(-8.0), 0);
        assert_eq!(histogram.bucket_index(0.0), 20);
        assert_eq!(histogram.bucket_index(-0.1), 19);
        assert_eq!(histogram.bucket_index(7.9), 39);
    }

    #[test]
    fn test_boundary_and_out_of_range_clamp() {
        let histogram = HitAccumulator::new(40, 16.0);
        assert_eq!(histogram.bucket_index(8.0), 39);
        assert_eq!(histogram.bucket_index(100.0), 39);
        assert_eq!(histogram.bucket_index(-100.0), 0);
        assert_eq!(histogram.bucket_index(f64::NAN), 0);
    }

    #[test]
    fn test_add_hit_tracks_max() {
        let mut histogram = HitAccumulator::new(40, 16.0);
        histogram.add_hit(0.1);
        histogram.add_hit(0.2);
        histogram.add_hit(-5.0);

        assert_eq!(histogram.buckets()[20], 2);
        assert_eq!(histogram.max_count(), 2);
        assert_eq!(histogram.total_hits(), 3);

        let normalized = histogram.normalized();
        assert_eq!(normalized[20], 1.0);
        assert_eq!(normalized[histogram.bucket_index(-5.0)], 0.5);
    }

    #[test]
    fn test_reset() {
        let mut histogram = HitAccumulator::new(40, 16.0);
        for i in 0..100 {
            histogram.add_hit(i as f64 * 0.1 - 5.0);
        }
        histogram.reset();

        assert_eq!(histogram.total_hits(), 0);
        assert_eq!(histogram.max_count(), 0);
        assert!(histogram.normalized().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_bucket_center_round_trips() {
        let histogram = HitAccumulator::new(40, 16.0);
        for i in 0..40 {
            assert_eq!(histogram.bucket_index(histogram.bucket_center(i)), i);
        }
    }

    #[test]
    fn test_hit_log_evicts_oldest() {
        let mut log = HitLog::new(3);
        for i in 0..5 {
            log.push(HitRecord {
                x: 8.0,
                y: i as f64,
                detector_on_at_hit: false,
            });
        }

        assert_eq!(log.len(), 3);
        let ys: Vec<f64> = log.iter().map(|r| r.y).collect();
        assert_eq!(ys, vec![2.0, 3.0, 4.0]);
    }
}
