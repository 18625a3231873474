//! Keyed object containers and the owned [`Bunch`] loaded from them.
//!
//! A [`KeyedContainer`] is anything that can list named entries, hand out
//! one entry by key and tell whether an entry is itself a nested
//! container. [`MemoryDirectory`] is the in-memory implementation and can be
//! persisted as JSON.

use std::collections::BTreeMap;
use std::path::Path;

use au_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, Graph2D};
use crate::histogram::{Histogram, Histogram2D};

/// A plottable object stored under a key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum StoredObject {
    /// 1D histogram
    Histogram(Histogram),
    /// 2D histogram
    Histogram2D(Histogram2D),
    /// `(x, y)` graph
    Graph(Graph),
    /// `(x, y, z)` graph
    Graph2D(Graph2D),
}

impl StoredObject {
    /// Class name reported in [`KeyInfo::class_name`].
    pub fn class_name(&self) -> &'static str {
        match self {
            StoredObject::Histogram(_) => "Histogram",
            StoredObject::Histogram2D(_) => "Histogram2D",
            StoredObject::Graph(_) => "Graph",
            StoredObject::Graph2D(_) => "Graph2D",
        }
    }
}

impl From<Histogram> for StoredObject {
    fn from(h: Histogram) -> Self {
        StoredObject::Histogram(h)
    }
}

impl From<Histogram2D> for StoredObject {
    fn from(h: Histogram2D) -> Self {
        StoredObject::Histogram2D(h)
    }
}

impl From<Graph> for StoredObject {
    fn from(g: Graph) -> Self {
        StoredObject::Graph(g)
    }
}

impl From<Graph2D> for StoredObject {
    fn from(g: Graph2D) -> Self {
        StoredObject::Graph2D(g)
    }
}

/// Public info about a key (for `keys()`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInfo {
    /// Entry name.
    pub name: String,
    /// Class name of the entry (`"Directory"` for nested containers).
    pub class_name: String,
    /// Whether the entry is a nested container.
    pub is_directory: bool,
}

/// An entry read from a [`KeyedContainer`].
pub enum ContainerEntry {
    /// A plottable object.
    Object(StoredObject),
    /// A nested container.
    Directory(Box<dyn KeyedContainer>),
}

/// The operations needed to walk a keyed container.
pub trait KeyedContainer {
    /// All entries, in a stable order.
    fn keys(&self) -> Vec<KeyInfo>;

    /// Read one entry by key.
    fn get(&self, key: &str) -> Result<ContainerEntry>;
}

/// An in-memory keyed container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryDirectory {
    entries: BTreeMap<String, MemoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum MemoryEntry {
    Object(StoredObject),
    Directory(MemoryDirectory),
}

impl MemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an object under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, object: impl Into<StoredObject>) {
        self.entries.insert(name.into(), MemoryEntry::Object(object.into()));
    }

    /// Store a nested directory under `name`, replacing any previous entry.
    pub fn insert_directory(&mut self, name: impl Into<String>, dir: MemoryDirectory) {
        self.entries.insert(name.into(), MemoryEntry::Directory(dir));
    }

    /// Number of entries at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this level has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a directory from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a directory from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("reading keyed container from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize the directory (and everything below it) to JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl KeyedContainer for MemoryDirectory {
    fn keys(&self) -> Vec<KeyInfo> {
        self.entries
            .iter()
            .map(|(name, entry)| match entry {
                MemoryEntry::Object(obj) => KeyInfo {
                    name: name.clone(),
                    class_name: obj.class_name().to_string(),
                    is_directory: false,
                },
                MemoryEntry::Directory(_) => KeyInfo {
                    name: name.clone(),
                    class_name: "Directory".to_string(),
                    is_directory: true,
                },
            })
            .collect()
    }

    fn get(&self, key: &str) -> Result<ContainerEntry> {
        match self.entries.get(key) {
            Some(MemoryEntry::Object(obj)) => Ok(ContainerEntry::Object(obj.clone())),
            Some(MemoryEntry::Directory(dir)) => {
                Ok(ContainerEntry::Directory(Box::new(dir.clone())))
            }
            None => Err(Error::NotFound(format!("no key '{key}' in container"))),
        }
    }
}

/// One loaded entry of a [`Bunch`].
#[derive(Debug, Clone, PartialEq)]
pub enum BunchItem {
    /// A plottable object.
    Object(StoredObject),
    /// A nested container, loaded recursively.
    Bunch(Bunch),
}

/// Every entry of a keyed container, loaded eagerly and owned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bunch {
    items: BTreeMap<String, BunchItem>,
}

impl Bunch {
    /// Load all entries of `container`, recursing into nested containers.
    pub fn load(container: &dyn KeyedContainer) -> Result<Self> {
        let mut items = BTreeMap::new();
        for key in container.keys() {
            let item = match container.get(&key.name)? {
                ContainerEntry::Object(obj) => BunchItem::Object(obj),
                ContainerEntry::Directory(dir) => {
                    log::debug!("descending into '{}'", key.name);
                    BunchItem::Bunch(Bunch::load(dir.as_ref())?)
                }
            };
            items.insert(key.name, item);
        }
        Ok(Self { items })
    }

    /// Entry stored under `name` at this level.
    pub fn get(&self, name: &str) -> Option<&BunchItem> {
        self.items.get(name)
    }

    /// Entry at a `/`-separated path such as `"plots/pt/h_pt"`.
    pub fn get_path(&self, path: &str) -> Option<&BunchItem> {
        let mut parts = path.split('/').filter(|p| !p.is_empty());
        let mut item = self.get(parts.next()?)?;
        for part in parts {
            match item {
                BunchItem::Bunch(b) => item = b.get(part)?,
                BunchItem::Object(_) => return None,
            }
        }
        Some(item)
    }

    /// Object stored at `path`, if it is not a nested container.
    pub fn object(&self, path: &str) -> Option<&StoredObject> {
        match self.get_path(path)? {
            BunchItem::Object(obj) => Some(obj),
            BunchItem::Bunch(_) => None,
        }
    }

    /// 1D histogram stored at `path`.
    pub fn histogram(&self, path: &str) -> Option<&Histogram> {
        match self.object(path)? {
            StoredObject::Histogram(h) => Some(h),
            _ => None,
        }
    }

    /// Graph stored at `path`.
    pub fn graph(&self, path: &str) -> Option<&Graph> {
        match self.object(path)? {
            StoredObject::Graph(g) => Some(g),
            _ => None,
        }
    }

    /// Names at this level, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Number of entries at this level.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this level has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
