//! Archive packing and the in-memory archive registry.

use std::collections::{BTreeSet, HashMap, VecDeque};
use std::io::{Cursor, Write};
use std::sync::Arc;

use jiff::Timestamp;
use tokio::sync::RwLock;
use uuid::Uuid;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::TRACING_TARGET;
use crate::codegen::GeneratedFile;
use crate::error::WorkflowResult;

/// Suggested download filename for generated backend archives.
pub const ARCHIVE_FILENAME: &str = "ai-workflow-backend.zip";

/// MIME type served with archive downloads.
pub const ARCHIVE_CONTENT_TYPE: &str = "application/zip";

/// Packs generated artifacts into an in-memory zip archive.
///
/// Intermediate directories get explicit entries exactly once, and entry
/// timestamps are pinned to the zip epoch so identical artifact lists
/// produce byte-identical archives. On failure no partial blob escapes.
pub fn pack(files: &[GeneratedFile]) -> WorkflowResult<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    let mut directories = BTreeSet::new();
    for file in files {
        if let Some((parents, _)) = file.path.rsplit_once('/') {
            let mut prefix = String::new();
            for part in parents.split('/') {
                prefix.push_str(part);
                prefix.push('/');
                if directories.insert(prefix.clone()) {
                    writer.add_directory(prefix.as_str(), options)?;
                }
            }
        }
        writer.start_file(file.path.as_str(), options)?;
        writer.write_all(file.content.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}

/// A packed archive retained for download.
#[derive(Debug, Clone)]
pub struct StoredArchive {
    /// Suggested download filename.
    pub filename: String,
    /// Complete archive bytes.
    pub bytes: Vec<u8>,
    /// When the archive was stored.
    pub stored_at: Timestamp,
}

#[derive(Debug)]
struct StoreInner {
    entries: HashMap<Uuid, StoredArchive>,
    order: VecDeque<Uuid>,
    capacity: usize,
}

/// Registry of packed archives addressable by handle.
///
/// Handles are fresh v4 UUIDs. The registry is bounded: storing past the
/// capacity evicts the oldest live handle first. Nothing persists across
/// process restarts.
#[derive(Debug, Clone)]
pub struct ArchiveStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl ArchiveStore {
    /// Default number of archives retained.
    pub const DEFAULT_CAPACITY: usize = 32;

    /// Creates a store retaining at most `capacity` archives.
    ///
    /// A zero capacity is clamped to one so a freshly stored archive can
    /// always be downloaded.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                entries: HashMap::new(),
                order: VecDeque::new(),
                capacity: capacity.max(1),
            })),
        }
    }

    /// Stores archive bytes under a fresh handle and returns it.
    pub async fn store(&self, filename: impl Into<String>, bytes: Vec<u8>) -> Uuid {
        let mut inner = self.inner.write().await;

        let mut id = Uuid::new_v4();
        while inner.entries.contains_key(&id) {
            id = Uuid::new_v4();
        }

        inner.entries.insert(
            id,
            StoredArchive {
                filename: filename.into(),
                bytes,
                stored_at: Timestamp::now(),
            },
        );
        inner.order.push_back(id);

        while inner.entries.len() > inner.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
                tracing::debug!(target: TRACING_TARGET, handle = %oldest, "evicted oldest archive");
            }
        }

        id
    }

    /// Returns a copy of the stored archive, if the handle is live.
    pub async fn get(&self, id: &Uuid) -> Option<StoredArchive> {
        self.inner.read().await.entries.get(id).cloned()
    }

    /// Releases the handle, returning whether it was live.
    pub async fn release(&self, id: &Uuid) -> bool {
        let mut inner = self.inner.write().await;
        let removed = inner.entries.remove(id).is_some();
        if removed {
            inner.order.retain(|held| held != id);
        }
        removed
    }

    /// Number of live handles.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// Whether the store holds no archives.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for ArchiveStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
