use std::collections::BTreeSet;

/// Reusable task names, kept in alphabetical order
///
/// Independent of the schedule: the form reads suggestions from it and
/// records names the user types in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskNames {
    names: BTreeSet<String>,
}

impl TaskNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names(names: impl IntoIterator<Item = String>) -> Self {
        let mut catalog = Self::new();
        for name in names {
            catalog.add(&name);
        }
        catalog
    }

    /// False for blank or already known names
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.names.insert(name.to_string())
    }

    /// False when the name was not known
    pub fn remove(&mut self, name: &str) -> bool {
        let name = name.trim();
        !name.is_empty() && self.names.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name.trim())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn as_set(&self) -> &BTreeSet<String> {
        &self.names
    }

    /// Next name alphabetically, wrapping to the first
    pub fn next_after(&self, current: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|name| name.as_str() > current)
            .or_else(|| self.names.iter().next())
            .map(String::as_str)
    }

    /// Previous name alphabetically, wrapping to the last
    pub fn previous_before(&self, current: &str) -> Option<&str> {
        self.names
            .iter()
            .rev()
            .find(|name| name.as_str() < current)
            .or_else(|| self.names.iter().next_back())
            .map(String::as_str)
    }
}
