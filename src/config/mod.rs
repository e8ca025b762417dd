//! Engine configuration: types, defaults, validation, and file loading.

pub mod defaults;
mod file;
mod types;
mod validation;

pub use file::{discover_config_file, load_config_file, load_or_default};
pub use types::{
    AliasConfig, CacheConfig, EventConfig, FilterRulesConfig, ListMode, SourcesConfig, UnifyConfig,
};
pub use validation::{ConfigError, Validatable};
