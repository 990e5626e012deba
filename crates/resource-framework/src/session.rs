//! # Tables & Sessions
//!
//! A [`Table`] is the backing collection of a [`ResourceActor`](crate::ResourceActor): the
//! rows, the id allocator, and optionally a JSON snapshot file the rows are persisted to.
//!
//! The actor never touches rows directly. Each request opens a [`Session`], reads through
//! it, stages `add`/`delete` changes, and calls [`Session::commit`]. A session that is
//! dropped without a commit (an early `?`, a failed hook) discards what it staged, so a
//! failing request never leaves half of its changes behind.
//!
//! Rows are ordered by id. Ids are allocated monotonically, so id order is insertion order.

use crate::entity::ActorEntity;
use crate::error::StorageError;
use crate::ids::IdAllocator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk layout of a file-backed table.
#[derive(Deserialize)]
struct Snapshot<T> {
    high_water: u32,
    rows: Vec<T>,
}

#[derive(Serialize)]
struct SnapshotRef<'a, T> {
    high_water: u32,
    rows: Vec<&'a T>,
}

pub struct Table<T: ActorEntity> {
    rows: BTreeMap<T::Id, T>,
    ids: IdAllocator,
    snapshot: Option<PathBuf>,
}

impl<T: ActorEntity> Default for Table<T> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<T: ActorEntity> Table<T> {
    /// An empty table that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            rows: BTreeMap::new(),
            ids: IdAllocator::new(),
            snapshot: None,
        }
    }

    /// An in-memory table pre-populated with rows that already carry their ids.
    pub fn seeded(rows: impl IntoIterator<Item = T>) -> Result<Self, StorageError> {
        let mut table = Self::in_memory();
        for row in rows {
            table.insert_existing(row)?;
        }
        Ok(table)
    }

    /// A table persisted to `path`. A missing file starts an empty table.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let mut table = Self::in_memory();

        if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let snapshot: Snapshot<T> = serde_json::from_str(&raw)?;
            table.ids = IdAllocator::resume(snapshot.high_water);
            for row in snapshot.rows {
                table.insert_existing(row)?;
            }
            info!(path = %path.display(), rows = table.rows.len(), "Snapshot loaded");
        } else {
            debug!(path = %path.display(), "No snapshot yet");
        }

        table.snapshot = Some(path);
        Ok(table)
    }

    fn insert_existing(&mut self, row: T) -> Result<(), StorageError> {
        let id = row.id();
        if self.rows.contains_key(&id) {
            return Err(StorageError::DuplicateId(id.to_string()));
        }
        self.ids.observe(id.into());
        self.rows.insert(id, row);
        Ok(())
    }

    /// Acquire a session for one request.
    pub fn session(&mut self) -> Session<'_, T> {
        Session {
            table: self,
            staged: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot.as_deref()
    }
}

enum Change<T: ActorEntity> {
    Put(T),
    Remove(T::Id),
}

/// A unit of work against a [`Table`].
///
/// Reads see committed rows only; staged changes become visible after `commit`.
pub struct Session<'t, T: ActorEntity> {
    table: &'t mut Table<T>,
    staged: Vec<Change<T>>,
}

impl<'t, T: ActorEntity> Session<'t, T> {
    /// Reserve the next id.
    ///
    /// The reservation survives a rollback: ids are never reused.
    pub fn allocate_id(&mut self) -> Result<T::Id, StorageError> {
        self.table.ids.next_id().map(T::Id::from)
    }

    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.table.rows.get(&id)
    }

    pub fn query(&self) -> impl Iterator<Item = &T> + '_ {
        self.table.rows.values()
    }

    /// Stage an insert, or a replacement when a row with the same id exists.
    pub fn add(&mut self, item: T) {
        self.staged.push(Change::Put(item));
    }

    pub fn delete(&mut self, id: T::Id) {
        self.staged.push(Change::Remove(id));
    }

    /// Apply staged changes. File-backed tables write the snapshot before the in-memory
    /// rows are swapped, so a failed write leaves the table as it was.
    pub fn commit(mut self) -> Result<usize, StorageError> {
        let staged = std::mem::take(&mut self.staged);
        if staged.is_empty() {
            return Ok(0);
        }

        let applied = staged.len();
        // Copy-on-write: each commit clones the rows, linear in table size.
        let mut rows = self.table.rows.clone();
        for change in staged {
            match change {
                Change::Put(item) => {
                    rows.insert(item.id(), item);
                }
                Change::Remove(id) => {
                    rows.remove(&id);
                }
            }
        }

        if let Some(path) = &self.table.snapshot {
            write_snapshot(path, self.table.ids.high_water(), &rows)?;
        }
        self.table.rows = rows;
        Ok(applied)
    }
}

impl<T: ActorEntity> Drop for Session<'_, T> {
    fn drop(&mut self) {
        if !self.staged.is_empty() {
            debug!(discarded = self.staged.len(), "Session rolled back");
        }
    }
}

fn write_snapshot<T: ActorEntity>(
    path: &Path,
    high_water: u32,
    rows: &BTreeMap<T::Id, T>,
) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let snapshot = SnapshotRef {
        high_water,
        rows: rows.values().collect(),
    };
    let encoded = serde_json::to_vec_pretty(&snapshot)?;

    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);
    let mut file = fs::File::create(&staging)?;
    file.write_all(&encoded)?;
    file.sync_all()?;
    fs::rename(&staging, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u32,
        body: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("note error")]
    struct NoteError;

    #[async_trait]
    impl ActorEntity for Note {
        type Id = u32;
        type Create = String;
        type Patch = String;
        type Context = ();
        type Error = NoteError;

        fn id(&self) -> u32 {
            self.id
        }

        fn from_create_params(id: u32, body: String) -> Result<Self, Self::Error> {
            Ok(Self { id, body })
        }

        async fn on_update(&mut self, body: String, _ctx: &()) -> Result<(), Self::Error> {
            self.body = body;
            Ok(())
        }
    }

    fn note(id: u32, body: &str) -> Note {
        Note {
            id,
            body: body.to_string(),
        }
    }

    #[test]
    fn dropped_session_discards_staged_changes() {
        let mut table = Table::<Note>::in_memory();
        {
            let mut session = table.session();
            let id = session.allocate_id().unwrap();
            session.add(note(id, "draft"));
        }
        assert!(table.is_empty());

        // The reserved id is not handed out again.
        let mut session = table.session();
        assert_eq!(session.allocate_id().unwrap(), 2);
    }

    #[test]
    fn commit_applies_puts_and_removes_in_order() {
        let mut table = Table::seeded([note(1, "a"), note(2, "b")]).unwrap();

        let mut session = table.session();
        session.add(note(2, "b2"));
        session.delete(1);
        assert_eq!(session.find(1).map(|n| n.body.as_str()), Some("a"));
        assert_eq!(session.commit().unwrap(), 2);

        let session = table.session();
        let rows: Vec<_> = session.query().cloned().collect();
        assert_eq!(rows, vec![note(2, "b2")]);
    }

    #[test]
    fn seeding_rejects_duplicate_ids() {
        let result = Table::seeded([note(1, "a"), note(1, "again")]);
        assert!(matches!(result, Err(StorageError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn file_backed_table_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");

        {
            let mut table = Table::<Note>::open(&path).unwrap();
            let mut session = table.session();
            let first = session.allocate_id().unwrap();
            session.add(note(first, "kept"));
            session.commit().unwrap();

            let mut session = table.session();
            let second = session.allocate_id().unwrap();
            session.add(note(second, "deleted later"));
            session.commit().unwrap();

            let mut session = table.session();
            session.delete(second);
            session.commit().unwrap();
        }

        let mut table = Table::<Note>::open(&path).unwrap();
        assert_eq!(table.len(), 1);
        let mut session = table.session();
        assert_eq!(session.find(1), Some(&note(1, "kept")));
        // Id 2 was deleted before the restart and stays retired.
        assert_eq!(session.allocate_id().unwrap(), 3);
    }

    #[test]
    fn commit_replaces_snapshot_without_leaving_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let mut table = Table::<Note>::open(&path).unwrap();

        let mut session = table.session();
        let id = session.allocate_id().unwrap();
        session.add(note(id, "synced"));
        session.commit().unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("notes.json.tmp").exists());
        let written: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(written["high_water"], 1);
        assert_eq!(written["rows"][0]["body"], "synced");
    }

    #[test]
    fn failed_snapshot_write_keeps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let mut table = Table::<Note>::open(&path).unwrap();
        // A directory where the staging file goes makes the write fail.
        fs::create_dir(dir.path().join("notes.json.tmp")).unwrap();

        let mut session = table.session();
        let id = session.allocate_id().unwrap();
        session.add(note(id, "lost"));
        assert!(matches!(session.commit(), Err(StorageError::Io(_))));

        assert!(table.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            Table::<Note>::open(&path),
            Err(StorageError::Snapshot(_))
        ));
    }
}
