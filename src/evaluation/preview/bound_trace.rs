use crate::evaluation::BoundSnapshot;

/// In-memory history of snapshots taken while monitoring a stream.
#[derive(Debug, Clone, Default)]
pub struct BoundTrace {
    entries: Vec<BoundSnapshot>,
}

impl BoundTrace {
    pub fn push(&mut self, snapshot: BoundSnapshot) {
        self.entries.push(snapshot)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn latest(&self) -> Option<BoundSnapshot> {
        self.entries.last().copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = &BoundSnapshot> {
        self.entries.iter()
    }

    /// First snapshot whose interval rules `value` out.
    ///
    /// Because every interval is valid simultaneously, this is a valid
    /// stopping time for rejecting "the mean equals `value`".
    pub fn first_excluding(&self, value: f64) -> Option<BoundSnapshot> {
        self.entries.iter().find(|s| s.excludes(value)).copied()
    }
}
