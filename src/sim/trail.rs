//! Bounded trail of recent laser relocations (diagnostic only)

use glam::DVec2;

#[derive(Debug, Clone, Default)]
pub struct PathTrail {
    /// Newest first
    points: Vec<DVec2>,
    capacity: usize,
}

impl PathTrail {
    /// Trail holding at most `capacity` points; 0 records nothing
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, pos: DVec2) {
        if self.capacity == 0 {
            return;
        }
        self.points.insert(0, pos);
        self.points.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
