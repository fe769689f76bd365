/// Single-open accordion semantics.
///
/// At most one item is open per group. Toggling the open item closes it;
/// toggling any other item closes the group and opens that one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionGroup {
    items: usize,
    open: Option<usize>,
}

impl AccordionGroup {
    pub fn new(items: usize) -> Self {
        Self { items, open: None }
    }

    pub fn len(&self) -> usize {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Applies a click on item `index`. Returns the now-open item, if any.
    /// Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        if index >= self.items {
            return self.open;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        self.open
    }
}
