/// Element type of the input and output sequences.
pub type Value = i32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    /// Selected values, in input order.
    pub selected: Vec<Value>,
    /// Number of input values inspected.
    pub inspected: usize,
}

impl FilterResult {
    pub fn dropped(&self) -> usize {
        self.inspected.saturating_sub(self.selected.len())
    }
}
