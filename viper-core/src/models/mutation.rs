use std::fmt::{self, Display};

///
/// Number of observed mutation events at a single 0-based genome position.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationRecord {
    pub position: u32,
    pub count: u64,
}

impl MutationRecord {
    pub fn new(position: u32, count: u64) -> Self {
        MutationRecord { position, count }
    }
}

impl From<(u32, u64)> for MutationRecord {
    fn from(value: (u32, u64)) -> Self {
        MutationRecord::new(value.0, value.1)
    }
}

impl Display for MutationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.position, self.count)
    }
}
