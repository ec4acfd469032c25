use crate::artifacts::tracking::tracked_file::TrackedFile;

/// Tracked entries in insertion order, unique by file name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedSet {
    entries: Vec<TrackedFile>,
}

impl TrackedSet {
    pub fn get(&self, name: &str) -> Option<&TrackedFile> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TrackedFile> {
        self.entries.iter_mut().find(|entry| entry.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Append a new entry, replacing any entry with the same name in place
    pub fn insert(&mut self, file: TrackedFile) {
        match self.get_mut(&file.name) {
            Some(existing) => *existing = file,
            None => self.entries.push(file),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<TrackedFile> {
        let position = self.entries.iter().position(|entry| entry.name == name)?;
        Some(self.entries.remove(position))
    }

    pub fn retain(&mut self, keep: impl FnMut(&TrackedFile) -> bool) {
        self.entries.retain(keep);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedFile> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TrackedFile> {
        self.entries.iter_mut()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<TrackedFile> for TrackedSet {
    fn from_iter<T: IntoIterator<Item = TrackedFile>>(iter: T) -> Self {
        let mut set = TrackedSet::default();
        for file in iter {
            set.insert(file);
        }
        set
    }
}

impl IntoIterator for TrackedSet {
    type Item = TrackedFile;
    type IntoIter = std::vec::IntoIter<TrackedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
