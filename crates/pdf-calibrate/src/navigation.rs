/// Current page within a loaded document.
///
/// Moving past either end of the document is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageNavigator {
    current: usize,
    total: usize,
}

impl PageNavigator {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.total
    }

    /// Advance one page. Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if self.can_go_forward() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Step back one page. Returns whether the page changed.
    pub fn previous(&mut self) -> bool {
        if self.can_go_back() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `index`; out-of-range indices are ignored
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.total && index != self.current {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// 1-based "Page N of M" label
    pub fn label(&self) -> String {
        if self.total == 0 {
            "No pages".to_string()
        } else {
            format!("Page {} of {}", self.current + 1, self.total)
        }
    }
}
