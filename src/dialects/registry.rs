use crate::dialects::base::{DatabaseDialect, DialectError};
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

/// Central registry for all available database dialects
pub struct DialectRegistry {
    dialects: HashMap<String, Arc<dyn DatabaseDialect>>,
    aliases: HashMap<String, String>, // lowercase alias -> dialect name
}

impl DialectRegistry {
    pub fn new() -> Self {
        Self {
            dialects: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Register a dialect, replacing any dialect of the same name
    pub fn register(&mut self, dialect: Arc<dyn DatabaseDialect>) {
        let name = dialect.name().to_string();
        debug!("Registering dialect: {}", name);

        for alias in dialect.aliases() {
            self.aliases.insert(alias.to_lowercase(), name.clone());
        }

        self.dialects.insert(name, dialect);
    }

    /// Get a dialect by name or alias, ignoring case
    pub fn get(&self, name: &str) -> Option<Arc<dyn DatabaseDialect>> {
        if let Some(dialect) = self.dialects.get(name) {
            return Some(dialect.clone());
        }

        let lower = name.to_lowercase();
        if let Some(dialect) = self.dialects.get(&lower) {
            return Some(dialect.clone());
        }

        self.aliases
            .get(&lower)
            .and_then(|dialect_name| self.dialects.get(dialect_name).cloned())
    }

    /// Highest-confidence dialect matching a connection string
    pub fn detect(&self, connection_string: &str) -> Result<Arc<dyn DatabaseDialect>, DialectError> {
        debug!("Detecting dialect for connection string (length: {})", connection_string.len());

        let best = self
            .dialects
            .values()
            .filter_map(|dialect| dialect.detect(connection_string).map(|hit| (dialect, hit)))
            .max_by(|a, b| a.1.confidence.total_cmp(&b.1.confidence));

        match best {
            Some((dialect, hit)) => {
                debug!(
                    "Selected dialect: {} (confidence: {}, pattern: {})",
                    hit.dialect_name, hit.confidence, hit.matched_pattern
                );
                Ok(dialect.clone())
            }
            None => {
                warn!("No dialect detected for connection string");
                Err(DialectError::NotFound(connection_string.to_string()))
            }
        }
    }

    pub fn list_dialects(&self) -> Vec<String> {
        let mut names: Vec<String> = self.dialects.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_REGISTRY: OnceLock<Mutex<DialectRegistry>> = OnceLock::new();

/// Get the global dialect registry (initialized lazily)
pub fn get_registry() -> &'static Mutex<DialectRegistry> {
    GLOBAL_REGISTRY.get_or_init(|| Mutex::new(create_default_registry()))
}

fn create_default_registry() -> DialectRegistry {
    let mut registry = DialectRegistry::new();
    registry.register(Arc::new(crate::dialects::clickhouse::ClickhouseDialect::new()));
    registry
}
