/// Change recorded for a file inside a frozen commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    Unchanged,
    Added,
    Modified,
    Deleted,
}

impl Change {
    /// Constant mixed into the commit id for every changed file
    pub fn id_weight(&self) -> Option<u64> {
        match self {
            Change::Unchanged => None,
            Change::Added => Some(376_591),
            Change::Deleted => Some(85_973),
            Change::Modified => Some(9_573_681),
        }
    }

    pub fn code(&self) -> char {
        match self {
            Change::Unchanged => 'N',
            Change::Added => 'A',
            Change::Modified => 'M',
            Change::Deleted => 'D',
        }
    }

    /// Marker used when rendering a commit's change list
    pub fn symbol(&self) -> Option<char> {
        match self {
            Change::Unchanged => None,
            Change::Added => Some('+'),
            Change::Modified => Some('/'),
            Change::Deleted => Some('-'),
        }
    }

    /// Only additions and modifications store a copy of the file
    pub fn has_snapshot(&self) -> bool {
        matches!(self, Change::Added | Change::Modified)
    }
}
