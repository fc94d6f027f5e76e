use std::path::{Path, PathBuf};

/// File names of the three relations inside a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    pub people_file: PathBuf,
    pub groups_file: PathBuf,
    pub memberships_file: PathBuf,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            people_file: PathBuf::from("people.csv"),
            groups_file: PathBuf::from("movies.csv"),
            memberships_file: PathBuf::from("stars.csv"),
        }
    }
}

impl LoadConfig {
    /// Resolves the three file paths against a directory.
    pub fn paths_in(&self, dir: &Path) -> [PathBuf; 3] {
        [
            dir.join(&self.people_file),
            dir.join(&self.groups_file),
            dir.join(&self.memberships_file),
        ]
    }
}
