use std::collections::HashMap;

/// Cache of per-component penalty terms of a mixture wealth process.
///
/// Keyed by mixture component. A penalty depends on the whole truncated
/// history but not on the null mean, so one fill serves every candidate the
/// root search evaluates. The owner must [`WealthMemo::clear`] it whenever an
/// increment is folded in.
#[derive(Debug, Clone, Default)]
pub struct WealthMemo {
    penalties: HashMap<usize, f64>,
}

impl WealthMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.penalties.clear();
    }

    pub fn get(&self, component: usize) -> Option<f64> {
        self.penalties.get(&component).copied()
    }

    pub fn get_or_insert_with<F: FnOnce() -> f64>(&mut self, component: usize, f: F) -> f64 {
        *self.penalties.entry(component).or_insert_with(f)
    }

    pub fn len(&self) -> usize {
        self.penalties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.penalties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_once_per_component() {
        let mut memo = WealthMemo::new();
        let mut calls = 0;
        for _ in 0..3 {
            let v = memo.get_or_insert_with(7, || {
                calls += 1;
                1.5
            });
            assert_eq!(v, 1.5);
        }
        assert_eq!(calls, 1);
        assert_eq!(memo.get(7), Some(1.5));
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn clear_forgets_every_component() {
        let mut memo = WealthMemo::new();
        memo.get_or_insert_with(0, || 2.0);
        memo.get_or_insert_with(5, || 3.0);
        memo.clear();
        assert!(memo.is_empty());
        assert_eq!(memo.get(0), None);
        assert_eq!(memo.get_or_insert_with(0, || 4.0), 4.0);
    }
}
