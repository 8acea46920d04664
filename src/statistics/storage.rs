use anyhow::{Context, Result};
use log::{debug, warn};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StatisticKey {
    GamesCount,
    BestGameCorrect,
    BestGameTotal,
    BestGameDate,
    TotalCorrectAnswers,
    TotalQuestionsAsked,
}

impl StatisticKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StatisticKey::GamesCount => "gamesCount",
            StatisticKey::BestGameCorrect => "bestGameCorrect",
            StatisticKey::BestGameTotal => "bestGameTotal",
            StatisticKey::BestGameDate => "bestGameDate",
            StatisticKey::TotalCorrectAnswers => "totalCorrectAnswers",
            StatisticKey::TotalQuestionsAsked => "totalQuestionsAsked",
        }
    }
}

/// String-keyed value store.
///
/// Writes may be buffered until `commit`.
pub trait Storage {
    fn read(&self, key: &str) -> Option<Value>;
    fn write(&mut self, key: &str, value: Value) -> Result<()>;
    fn commit(&mut self) -> Result<()> {
        Ok(())
    }
}

/// In-memory storage. Clones share the same values.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<Value> {
        self.values.read().get(key).cloned()
    }

    fn write(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.write().insert(key.to_owned(), value);
        Ok(())
    }
}

/// Keeps every value in a single JSON object on disk.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStorage {
    pub fn open(path: &Path) -> Result<Self> {
        let values = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents)
                .with_context(|| format!("Could not parse statistics file {}", path.display()))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No statistics file at {}, starting fresh", path.display());
                Map::new()
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Could not read statistics file {}", path.display()))
            }
        };
        Ok(JsonFileStorage {
            path: path.to_path_buf(),
            values,
        })
    }
}

impl Storage for JsonFileStorage {
    fn read(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_owned(), value);
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serialized)?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Could not write statistics file {}", self.path.display()))?;
        Ok(())
    }
}

/// Typed access to a [`Storage`].
pub struct DataSource {
    storage: Box<dyn Storage>,
}

impl DataSource {
    pub fn new<S: Storage + 'static>(storage: S) -> Self {
        DataSource {
            storage: Box::new(storage),
        }
    }

    /// Missing or unreadable values yield `default`.
    pub fn get<T: DeserializeOwned>(&self, key: StatisticKey, default: T) -> T {
        match self.storage.read(key.as_str()) {
            Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                warn!("Ignoring unreadable value for {}: {}", key.as_str(), e);
                default
            }),
            None => default,
        }
    }

    pub fn set<T: Serialize>(&mut self, key: StatisticKey, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.storage.write(key.as_str(), value)
    }

    pub fn commit(&mut self) -> Result<()> {
        self.storage.commit()
    }
}
