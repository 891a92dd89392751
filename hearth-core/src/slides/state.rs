use hearth_model::ModelError;

/// Index into a fixed-length slide set that wraps at both ends.
///
/// A zero-length index is inert: stepping leaves it at 0 and every jump
/// target is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclicIndex {
    index: usize,
    len: usize,
}

impl CyclicIndex {
    /// Index 0 of `len` slides.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Current position.
    pub fn get(&self) -> usize {
        self.index
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index is inert.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Step forward, wrapping to 0 after the last slide.
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Step back, wrapping to the last slide from 0.
    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jump to `target`, which must be below `len`.
    pub fn set(&mut self, target: usize) -> Result<usize, ModelError> {
        if target >= self.len {
            return Err(ModelError::SlideOutOfRange {
                target,
                len: self.len,
            });
        }
        self.index = target;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let mut index = CyclicIndex::new(3);
        assert_eq!(index.prev(), 2);
        assert_eq!(index.next(), 0);
        assert_eq!(index.next(), 1);
    }

    #[test]
    fn len_steps_return_to_start() {
        for len in 1..=6 {
            let mut index = CyclicIndex::new(len);
            index.set(len / 2).unwrap();
            let start = index.get();
            for _ in 0..len {
                index.next();
            }
            assert_eq!(index.get(), start);
            for _ in 0..len {
                index.prev();
            }
            assert_eq!(index.get(), start);
        }
    }

    #[test]
    fn out_of_range_targets_are_rejected() {
        let mut index = CyclicIndex::new(2);
        assert_eq!(
            index.set(2),
            Err(ModelError::SlideOutOfRange { target: 2, len: 2 })
        );
        assert_eq!(index.get(), 0);
    }

    #[test]
    fn empty_index_is_inert() {
        let mut index = CyclicIndex::new(0);
        assert_eq!(index.next(), 0);
        assert_eq!(index.prev(), 0);
        assert!(index.set(0).is_err());
    }
}
