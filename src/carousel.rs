/// Cyclic slide index. An empty carousel stays at 0 and ignores navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jump to `index`, wrapping out-of-range values. Returns the new index.
    pub fn show(&mut self, index: usize) -> usize {
        if self.len > 0 {
            self.current = index % self.len;
        }
        self.current
    }

    /// Jump to `index` only if it names a slide. Returns the new index.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.current = index;
        Some(index)
    }

    pub fn next(&mut self) -> usize {
        self.show(self.current + 1)
    }

    pub fn prev(&mut self) -> usize {
        if self.len == 0 {
            return self.current;
        }
        self.show(self.current + self.len - 1)
    }
}
