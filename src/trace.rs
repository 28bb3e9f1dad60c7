//! Bounded trail of reconstructed points.

use crate::clock::VirtualClock;
use crate::Point;

/// Slots reserved up front; larger rings grow as points arrive
const PREALLOCATED_POINTS: usize = 4096;

/// Fixed-capacity ring of the most recent reconstructed points
#[derive(Debug, Clone)]
pub struct TraceBuffer {
    points: Vec<Point>,
    capacity: usize,
    /// Slot of the oldest point once the ring has wrapped
    cursor: usize,
    writes: usize,
}

impl TraceBuffer {
    /// Create an empty buffer holding at most `capacity` points (at least 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: Vec::with_capacity(capacity.min(PREALLOCATED_POINTS)),
            capacity,
            cursor: 0,
            writes: 0,
        }
    }

    /// Size the buffer so one revolution of an N-point path nearly fills it
    ///
    /// `margin` points are held back so the head of the trail stops short of
    /// its tail at the seam.
    pub fn for_path(path_len: usize, angular_velocity: f64, margin: usize) -> Self {
        Self::with_capacity(Self::capacity_for(path_len, angular_velocity, margin))
    }

    pub fn capacity_for(path_len: usize, angular_velocity: f64, margin: usize) -> usize {
        let revolution = VirtualClock::ticks_per_revolution(path_len, angular_velocity);
        // Float-to-int casts saturate, so non-finite inputs land on 0 or usize::MAX
        (revolution.floor() as usize).saturating_sub(margin).max(1)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of points currently held
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total number of appends since creation
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn is_wrapped(&self) -> bool {
        self.writes > self.capacity
    }

    pub fn append(&mut self, point: Point) {
        if self.points.len() < self.capacity {
            self.points.push(point);
        } else {
            self.points[self.cursor] = point;
            self.cursor = (self.cursor + 1) % self.capacity;
        }
        self.writes += 1;
    }

    /// Points in chronological order, oldest first
    ///
    /// The result is an open polyline: the newest point is never joined
    /// back to the oldest.
    pub fn render_sequence(&self) -> Vec<Point> {
        let (newer, older) = self.points.split_at(self.cursor);
        older.iter().chain(newer).copied().collect()
    }

    pub fn latest(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let index = (self.cursor + self.points.len() - 1) % self.points.len();
        Some(self.points[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> Point {
        Point::new(i as f64, -(i as f64))
    }

    #[test]
    fn test_wrap_evicts_oldest() {
        let (a, b, c, d) = (p(1), p(2), p(3), p(4));
        let mut trace = TraceBuffer::with_capacity(3);
        trace.append(a);
        trace.append(b);
        trace.append(c);
        assert_eq!(trace.render_sequence(), vec![a, b, c]);
        assert!(!trace.is_wrapped());

        trace.append(d);
        assert_eq!(trace.render_sequence(), vec![b, c, d]);
        assert!(trace.is_wrapped());
        assert_eq!(trace.latest(), Some(d));
    }

    #[test]
    fn test_length_tracks_writes() {
        for capacity in [1, 2, 5, 17] {
            let mut trace = TraceBuffer::with_capacity(capacity);
            for writes in 1..=60 {
                trace.append(p(writes));
                let sequence = trace.render_sequence();

                assert_eq!(sequence.len(), writes.min(capacity));
                assert_eq!(trace.len(), sequence.len());
                assert_eq!(trace.write_count(), writes);

                // Consecutive, in order, ending at the newest point
                let first = writes + 1 - sequence.len();
                let expected: Vec<Point> = (first..=writes).map(p).collect();
                assert_eq!(sequence, expected);
            }
        }
    }

    #[test]
    fn test_single_slot_buffer() {
        let mut trace = TraceBuffer::with_capacity(1);
        assert!(trace.is_empty());
        assert_eq!(trace.latest(), None);

        trace.append(p(1));
        trace.append(p(2));
        assert_eq!(trace.render_sequence(), vec![p(2)]);
    }

    #[test]
    fn test_huge_capacity_does_not_allocate_up_front() {
        let mut trace = TraceBuffer::with_capacity(usize::MAX);
        assert_eq!(trace.capacity(), usize::MAX);

        for i in 0..10 {
            trace.append(p(i));
        }
        assert_eq!(trace.len(), 10);
        assert_eq!(trace.latest(), Some(p(9)));
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let trace = TraceBuffer::with_capacity(0);
        assert_eq!(trace.capacity(), 1);
    }

    #[test]
    fn test_unwrapped_sequence_is_not_closed() {
        let mut trace = TraceBuffer::with_capacity(10);
        for i in 0..4 {
            trace.append(p(i));
        }
        let sequence = trace.render_sequence();
        assert_eq!(sequence.first(), Some(&p(0)));
        assert_eq!(sequence.last(), Some(&p(3)));
        assert_eq!(sequence.len(), 4);
    }

    #[test]
    fn test_capacity_from_path_length() {
        // 2 * 100 / 1.3 = 153.8 -> 153 - 20
        assert_eq!(TraceBuffer::capacity_for(100, 1.3, 20), 133);
        assert_eq!(TraceBuffer::for_path(100, 1.3, 20).capacity(), 133);

        // Short paths never drop below one slot
        assert_eq!(TraceBuffer::capacity_for(3, 1.3, 20), 1);
        assert_eq!(TraceBuffer::capacity_for(0, 1.3, 20), 1);
    }
}
