//! Loading the three relations into an [`EntityStore`].

use crate::config::LoadConfig;
use crate::error::{LoadError, Result};
use crate::rows::{GroupRow, MembershipRow, PersonRow};
use degrees_graph::EntityStore;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};

/// A loaded store and what it took to build it.
#[derive(Debug)]
pub struct LoadResult {
    pub store: EntityStore,
    pub people_loaded: usize,
    pub groups_loaded: usize,
    pub memberships_loaded: usize,
    /// Rows that could not be parsed or referenced unknown ids.
    pub rows_skipped: usize,
    pub duration_ms: u64,
}

/// Per-relation row counts.
#[derive(Debug, Default, Clone, Copy)]
struct RowCount {
    loaded: usize,
    skipped: usize,
}

/// Loads `people.csv`, `movies.csv` and `stars.csv` from a directory.
pub fn load_directory(dir: &Path) -> Result<LoadResult> {
    load_directory_with(dir, &LoadConfig::default())
}

/// Loads a data directory using custom file names.
pub fn load_directory_with(dir: &Path, config: &LoadConfig) -> Result<LoadResult> {
    if !dir.is_dir() {
        return Err(LoadError::MissingDirectory(dir.to_path_buf()));
    }

    let [people, groups, memberships] = config.paths_in(dir);
    for path in [&people, &groups, &memberships] {
        if !path.is_file() {
            return Err(LoadError::MissingFile(path.clone()));
        }
    }

    debug!("Loading data from {}", dir.display());
    load_from_readers(
        File::open(&people)?,
        File::open(&groups)?,
        File::open(&memberships)?,
    )
}

/// Loads the three relations from arbitrary CSV sources.
///
/// People and groups are read before memberships so that every membership
/// row can be checked against both.
pub fn load_from_readers(
    people: impl Read,
    groups: impl Read,
    memberships: impl Read,
) -> Result<LoadResult> {
    let start = Instant::now();
    let mut store = EntityStore::new();

    let people = read_rows(people, "people", |row: PersonRow| {
        if row.id.is_empty() {
            return false;
        }
        let birth = row.birth_year();
        store.add_person(row.id, row.name, birth);
        true
    })?;

    let groups = read_rows(groups, "movies", |row: GroupRow| {
        if row.id.is_empty() {
            return false;
        }
        let year = row.release_year();
        store.add_group(row.id, row.title, year);
        true
    })?;

    let memberships = read_rows(memberships, "stars", |row: MembershipRow| {
        store.add_membership(&row.person_id, &row.movie_id)
    })?;

    let result = LoadResult {
        store,
        people_loaded: people.loaded,
        groups_loaded: groups.loaded,
        memberships_loaded: memberships.loaded,
        rows_skipped: people.skipped + groups.skipped + memberships.skipped,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    debug!(
        people = result.people_loaded,
        movies = result.groups_loaded,
        stars = result.memberships_loaded,
        skipped = result.rows_skipped,
        "load finished in {}ms",
        result.duration_ms
    );

    Ok(result)
}

/// Streams rows of one relation into `accept`.
///
/// Unparseable rows and rows `accept` rejects are counted as skipped.
/// I/O failures abort the load.
fn read_rows<T, R, F>(source: R, relation: &str, mut accept: F) -> Result<RowCount>
where
    T: DeserializeOwned,
    R: Read,
    F: FnMut(T) -> bool,
{
    // Extra trailing fields are ignored; missing named columns still fail.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);
    let mut count = RowCount::default();

    for (i, record) in reader.deserialize::<T>().enumerate() {
        match record {
            Ok(row) => {
                if accept(row) {
                    count.loaded += 1;
                } else {
                    debug!(relation, row = i + 1, "dropping row with unknown or empty id");
                    count.skipped += 1;
                }
            }
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                warn!(relation, row = i + 1, "skipping unreadable row: {}", err);
                count.skipped += 1;
            }
        }
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const PEOPLE: &str = "id,name,birth\n\
        102,Kevin Bacon,1958\n\
        129,Tom Cruise,1962\n\
        158,Tom Hanks,1956\n\
        200,Bill Paxton,\n";

    const MOVIES: &str = "id,title,year\n\
        104257,A Few Good Men,1992\n\
        112384,Apollo 13,1995\n";

    const STARS: &str = "person_id,movie_id\n\
        102,104257\n\
        129,104257\n\
        102,112384\n\
        158,112384\n\
        200,112384\n\
        999,112384\n\
        102,999999\n";

    #[test]
    fn test_load_from_readers() {
        let result = load_from_readers(PEOPLE.as_bytes(), MOVIES.as_bytes(), STARS.as_bytes())
            .unwrap();

        assert_eq!(result.people_loaded, 4);
        assert_eq!(result.groups_loaded, 2);
        assert_eq!(result.memberships_loaded, 5);
        assert_eq!(result.rows_skipped, 2);

        let store = &result.store;
        assert_eq!(store.person("200").and_then(|p| p.birth), None);
        assert_eq!(store.person("102").and_then(|p| p.birth), Some(1958));
        assert_eq!(store.members_of("112384").len(), 3);
        assert_eq!(store.groups_of("102").len(), 2);
    }

    #[test]
    fn test_unreadable_rows_are_skipped() {
        let people = "id,name,birth\n102,Kevin Bacon,1958\nbroken\n,No Id,1900\n";
        let result = load_from_readers(
            people.as_bytes(),
            "id,title,year\n".as_bytes(),
            "person_id,movie_id\n".as_bytes(),
        )
        .unwrap();

        assert_eq!(result.people_loaded, 1);
        assert_eq!(result.rows_skipped, 2);
        assert_eq!(result.store.person_count(), 1);
    }

    #[test]
    fn test_extra_fields_still_link_membership() {
        let stars = "person_id,movie_id\n\
            102,104257\n\
            129,104257,extra\n\
            158\n";
        let result =
            load_from_readers(PEOPLE.as_bytes(), MOVIES.as_bytes(), stars.as_bytes()).unwrap();

        assert_eq!(result.memberships_loaded, 2);
        assert_eq!(result.rows_skipped, 1);
        assert_eq!(result.store.groups_of("129").len(), 1);
        assert_eq!(result.store.neighbors_of("102").len(), 1);
    }

    #[test]
    fn test_load_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("people.csv"), PEOPLE).unwrap();
        fs::write(dir.path().join("movies.csv"), MOVIES).unwrap();
        fs::write(dir.path().join("stars.csv"), STARS).unwrap();

        let result = load_directory(dir.path()).unwrap();
        assert_eq!(result.store.stats().people, 4);
        assert_eq!(result.store.stats().memberships, 5);
    }

    #[test]
    fn test_custom_file_names() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("actors.csv"), PEOPLE).unwrap();
        fs::write(dir.path().join("films.csv"), MOVIES).unwrap();
        fs::write(dir.path().join("credits.csv"), STARS).unwrap();

        let config = LoadConfig {
            people_file: "actors.csv".into(),
            groups_file: "films.csv".into(),
            memberships_file: "credits.csv".into(),
        };
        let result = load_directory_with(dir.path(), &config).unwrap();
        assert_eq!(result.groups_loaded, 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("people.csv"), PEOPLE).unwrap();

        let err = load_directory(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingFile(path) if path.ends_with("movies.csv")));
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        assert!(matches!(
            load_directory(&missing),
            Err(LoadError::MissingDirectory(_))
        ));
    }
}
