mod config_manager;
mod config_serializer;
mod content_provider;

pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use content_provider::{ConfigContentProvider, FileContentConfigProvider, MemoryContentProvider};

/// Checks a deserialized config before it is handed out or written back.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
