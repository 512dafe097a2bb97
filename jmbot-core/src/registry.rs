//! Host configuration registry and schema binding.
//!
//! [`ConfigRegistry`] is the host's persisted key/value store. [`YamlRegistry`]
//! backs it with a YAML mapping on disk; [`MemoryRegistry`] backs it with a map
//! for hosts and tests that need no persistence. [`bind_config`] registers a
//! statically declared schema and reads the merged result back into a typed
//! settings value (stored values win over supplied defaults).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::{JmBotError, Result};

/// Key/value configuration store owned by the host.
///
/// `register` is write-if-absent: a value persisted earlier always wins over
/// the default supplied at registration time.
pub trait ConfigRegistry: Send + Sync {
    /// Registers a key with its default. No-op when the key already holds a value.
    fn register(&mut self, name: &str, default: Value) -> Result<()>;
    /// Reads the stored value for a key, if any.
    fn get(&self, name: &str) -> Option<Value>;
    /// Whether the registry holds a value for the key.
    fn contains(&self, name: &str) -> bool;
}

/// Default for one schema field: a literal, a producer, or nothing.
/// Fields with no default register as YAML null.
pub enum FieldDefault {
    Value(Value),
    Factory(fn() -> Value),
    Absent,
}

/// One statically declared configuration field.
pub struct ConfigField {
    pub name: &'static str,
    pub default: FieldDefault,
}

impl ConfigField {
    /// The value this field registers with: literal, factory product, or null.
    pub fn computed_default(&self) -> Value {
        match &self.default {
            FieldDefault::Value(value) => value.clone(),
            FieldDefault::Factory(factory) => factory(),
            FieldDefault::Absent => Value::Null,
        }
    }
}

/// A settings type with a statically declared field list.
///
/// `from_values` receives only the keys the registry actually holds and
/// supplies its own defaults for the rest; a stored value of the wrong type
/// is a [`JmBotError::Config`].
pub trait ConfigSchema: Sized {
    fn schema() -> Vec<ConfigField>;
    fn from_values(values: &BTreeMap<String, Value>) -> Result<Self>;
}

/// Binds a schema to the registry: registers every field with its computed
/// default, then reads the registry back and builds the settings value.
///
/// Registration never overwrites, so binding twice against an unchanged
/// registry yields equal settings and performs no second-pass writes.
pub fn bind_config<C: ConfigSchema>(registry: &mut dyn ConfigRegistry) -> Result<C> {
    for field in C::schema() {
        registry.register(field.name, field.computed_default())?;
    }

    let mut values = BTreeMap::new();
    for field in C::schema() {
        if let Some(value) = registry.get(field.name) {
            values.insert(field.name.to_string(), value);
        }
    }

    C::from_values(&values)
}

/// Map-backed registry for tests and hosts without persistence.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    values: BTreeMap<String, Value>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a value as if it had been persisted before registration.
    pub fn set(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }
}

impl ConfigRegistry for MemoryRegistry {
    fn register(&mut self, name: &str, default: Value) -> Result<()> {
        if !self.values.contains_key(name) {
            self.values.insert(name.to_string(), default);
        }
        Ok(())
    }

    fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

/// File-backed registry: one YAML mapping per plugin.
///
/// A missing or empty file is an empty mapping. The file is rewritten only
/// when `register` actually inserts a key.
pub struct YamlRegistry {
    path: PathBuf,
    values: Mapping,
}

fn yaml_key(name: &str) -> Value {
    Value::String(name.to_string())
}

impl YamlRegistry {
    /// Loads the registry from `path`. The root must be a YAML mapping (or
    /// the file missing/empty, which loads as an empty mapping).
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = Self::load_mapping(&path)?;
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_mapping(path: &Path) -> Result<Mapping> {
        if !path.exists() {
            return Ok(Mapping::new());
        }
        let raw = fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            return Ok(Mapping::new());
        }
        match serde_yaml::from_str::<Value>(&raw)? {
            Value::Null => Ok(Mapping::new()),
            Value::Mapping(mapping) => Ok(mapping),
            _ => Err(JmBotError::Registry(format!(
                "config file {} must hold a YAML mapping at its root",
                path.display()
            ))),
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let serialized = serde_yaml::to_string(&self.values)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}

impl ConfigRegistry for YamlRegistry {
    fn register(&mut self, name: &str, default: Value) -> Result<()> {
        let key = yaml_key(name);
        if self.values.contains_key(&key) {
            return Ok(());
        }
        debug!(key = name, "registering config default");
        self.values.insert(key, default);
        self.save()
    }

    fn get(&self, name: &str) -> Option<Value> {
        self.values.get(&yaml_key(name)).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.values.contains_key(&yaml_key(name))
    }
}
