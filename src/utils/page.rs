/// Position within a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: u32,
    pub total: u32,
}

impl Pager {
    pub fn new(current: u32, total: u32) -> Self {
        Pager {
            current: current.max(1),
            total,
        }
    }

    /// Check if on the first page
    pub fn is_first(&self) -> bool {
        self.current <= 1
    }

    /// Check if on the last page
    pub fn is_last(&self) -> bool {
        self.current >= self.total
    }

    /// Next page number, if there is one
    pub fn next(&self) -> Option<u32> {
        if self.is_last() {
            None
        } else {
            Some(self.current + 1)
        }
    }

    /// Previous page number, if there is one
    pub fn previous(&self) -> Option<u32> {
        if self.is_first() {
            None
        } else {
            Some(self.current - 1)
        }
    }

    /// Footer label, e.g. `Page 2/7`
    pub fn label(&self) -> String {
        format!("Page {}/{}", self.current, self.total)
    }
}
