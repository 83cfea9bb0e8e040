use crate::domain::error::VizError;
use serde::{Deserialize, Serialize};

/// Function identifier (caller or callee name as written by the profiler)
pub type NodeName = String;

/// One caller → callee observation with its invocation count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub calling: NodeName,
    pub callee: NodeName,
    pub count: u64,
}

impl EdgeRecord {
    pub fn new(
        calling: impl Into<NodeName>,
        callee: impl Into<NodeName>,
        count: u64,
    ) -> Result<Self, VizError> {
        let calling = calling.into();
        let callee = callee.into();
        if calling.is_empty() {
            return Err(VizError::EmptyIdentifier("calling"));
        }
        if callee.is_empty() {
            return Err(VizError::EmptyIdentifier("callee"));
        }
        Ok(Self {
            calling,
            callee,
            count,
        })
    }
}

/// The edge set of one load. Replaced wholesale on every load, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSet {
    records: Vec<EdgeRecord>,
}

impl EdgeSet {
    pub fn new(records: Vec<EdgeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[EdgeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EdgeRecord> {
        self.records.iter()
    }
}

impl FromIterator<EdgeRecord> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = EdgeRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
