//! Decoding Registry
//!
//! The registry is the single entry point for turning payloads into
//! resources. It owns the adapters configured from a [`DecodeConfig`] and the
//! binding table of every registered resource.
//!
//! # Lifecycle
//!
//! One registry is shared per process. Call [`Registry::install`] once during
//! start-up to use a custom configuration; otherwise the first call to
//! [`Registry::global`] builds the default one. Installation either completes
//! or fails as a whole, and the installed registry is read-only afterwards, so
//! concurrent decoding needs no locking.
//!
//! # Usage
//!
//! ```rust
//! use social_api_model::json::Registry;
//! use social_api_model::shared::contact::PendingContactRequest;
//!
//! let raw = br#"{"sender_id": "u1", "recipient_id": "u2"}"#;
//! let pending: PendingContactRequest = Registry::global().decode(raw).unwrap();
//! assert_eq!(pending.recipient_id(), "u2");
//! ```

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde_json::Value;

use super::adapter::JsonAdapter;
use super::calendar::SafeCalendarAdapter;
use super::contact_path::ContactPathAdapter;
use super::csv::CsvCollectionAdapter;
use super::resource::{Field, FieldReader, Resource, ResourceAdapter};
use crate::shared::config::{ConfigError, DecodeConfig};
use crate::shared::contact::{ContactPaths, ContactRequest, InvitationStats, PendingContactRequest};
use crate::shared::error::{json_type_name, DecodeError};
use crate::shared::messaging::{Conversation, ConversationMessage, MessageAttachment};
use crate::shared::profile::{Address, Location, PhotoUrls, User};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The adapters whose behavior depends on configuration.
#[derive(Debug, Clone, Default)]
pub struct Adapters {
    calendar: SafeCalendarAdapter,
    csv: CsvCollectionAdapter,
}

impl Adapters {
    pub fn from_config(config: &DecodeConfig) -> Self {
        Self {
            calendar: SafeCalendarAdapter::new(config.min_year, config.max_year),
            csv: CsvCollectionAdapter::new(config.csv_delimiter),
        }
    }

    pub fn calendar(&self) -> SafeCalendarAdapter {
        self.calendar
    }

    pub fn csv(&self) -> CsvCollectionAdapter {
        self.csv
    }

    /// Adapter for a nested resource object
    pub fn resource<R: Resource>(&self) -> ResourceAdapter<'_, R> {
        ResourceAdapter::new(self)
    }

    pub fn contact_path(&self) -> ContactPathAdapter<'_> {
        ContactPathAdapter::new(self.resource::<User>())
    }
}

type Normalize = fn(&Registry, &Value) -> Result<Value, DecodeError>;

/// A registered resource type.
#[derive(Clone, Copy)]
struct Binding {
    name: &'static str,
    fields: &'static [Field],
    normalize: Normalize,
}

fn normalize<R: Resource>(registry: &Registry, raw: &Value) -> Result<Value, DecodeError> {
    let resource: R = registry.decode_value(raw)?;
    Ok(registry.encode(&resource))
}

/// Collects resource bindings and validates them before building a [`Registry`].
pub struct RegistryBuilder {
    config: DecodeConfig,
    bindings: Vec<Binding>,
}

impl RegistryBuilder {
    pub fn new(config: DecodeConfig) -> Self {
        Self {
            config,
            bindings: Vec::new(),
        }
    }

    /// Register a resource type
    pub fn register<R: Resource>(mut self) -> Self {
        self.bindings.push(Binding {
            name: R::NAME,
            fields: R::FIELDS,
            normalize: normalize::<R>,
        });
        self
    }

    /// Register every resource this crate defines
    pub fn register_builtin(self) -> Self {
        self.register::<User>()
            .register::<Address>()
            .register::<Location>()
            .register::<PhotoUrls>()
            .register::<ContactPaths>()
            .register::<ContactRequest>()
            .register::<PendingContactRequest>()
            .register::<InvitationStats>()
            .register::<Conversation>()
            .register::<ConversationMessage>()
            .register::<MessageAttachment>()
    }

    /// Check the configuration and every binding table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()?;
        let mut seen = Vec::with_capacity(self.bindings.len());
        for binding in &self.bindings {
            if seen.contains(&binding.name) {
                return Err(ConfigError::DuplicateResource(binding.name));
            }
            seen.push(binding.name);
            validate_fields(binding)?;
        }
        Ok(())
    }

    /// Validate and build. Nothing is built if any check fails.
    pub fn build(self) -> Result<Registry, ConfigError> {
        self.validate()?;
        Ok(self.assemble())
    }

    fn assemble(self) -> Registry {
        let adapters = Adapters::from_config(&self.config);
        let bindings = self
            .bindings
            .into_iter()
            .map(|binding| (binding.name, binding))
            .collect();
        Registry {
            config: self.config,
            adapters,
            bindings,
        }
    }
}

fn validate_fields(binding: &Binding) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBinding {
        resource: binding.name,
        reason,
    };
    if binding.fields.is_empty() {
        return Err(invalid("no fields are bound".to_string()));
    }
    for (index, field) in binding.fields.iter().enumerate() {
        if field.name.is_empty() || field.key.is_empty() {
            return Err(invalid(format!("field #{} has an empty name or key", index)));
        }
        let earlier = &binding.fields[..index];
        if earlier.iter().any(|other| other.name == field.name) {
            return Err(invalid(format!("field '{}' is bound twice", field.name)));
        }
        if earlier.iter().any(|other| other.key == field.key) {
            return Err(invalid(format!("key '{}' is bound twice", field.key)));
        }
    }
    Ok(())
}

/// Composes the configured adapters and all resource bindings.
pub struct Registry {
    config: DecodeConfig,
    adapters: Adapters,
    bindings: BTreeMap<&'static str, Binding>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.config)
            .field("resources", &self.bindings.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Registry {
    pub fn builder(config: DecodeConfig) -> RegistryBuilder {
        RegistryBuilder::new(config)
    }

    /// A registry with every built-in resource
    pub fn with_builtin_resources(config: DecodeConfig) -> Result<Self, ConfigError> {
        Self::builder(config).register_builtin().build()
    }

    /// Build the built-in registry from `config` and make it the process-wide one.
    ///
    /// Must run before the first [`Registry::global`] call.
    pub fn install(config: DecodeConfig) -> Result<&'static Registry, ConfigError> {
        let registry = Self::with_builtin_resources(config)?;
        GLOBAL
            .set(registry)
            .map_err(|_| ConfigError::AlreadyInstalled)?;
        let installed = Self::global();
        tracing::info!(
            resources = installed.bindings.len(),
            config = ?installed.config,
            "decoding registry installed"
        );
        Ok(installed)
    }

    /// The process-wide registry, built with defaults if none was installed.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| {
            let builder = RegistryBuilder::new(DecodeConfig::default()).register_builtin();
            debug_assert!(builder.validate().is_ok(), "built-in bindings are invalid");
            tracing::debug!("building default decoding registry");
            builder.assemble()
        })
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    pub fn adapters(&self) -> &Adapters {
        &self.adapters
    }

    /// Names of all registered resources, sorted
    pub fn resources(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bindings.keys().copied()
    }

    /// Binding table of a registered resource
    pub fn fields(&self, resource: &str) -> Option<&'static [Field]> {
        self.bindings.get(resource).map(|binding| binding.fields)
    }

    pub fn is_registered(&self, resource: &str) -> bool {
        self.bindings.contains_key(resource)
    }

    /// Decode one resource from raw JSON bytes
    pub fn decode<R: Resource>(&self, raw: &[u8]) -> Result<R, DecodeError> {
        let value: Value = serde_json::from_slice(raw)?;
        self.decode_value(&value)
    }

    /// Decode one resource from JSON text
    pub fn decode_str<R: Resource>(&self, raw: &str) -> Result<R, DecodeError> {
        self.decode(raw.as_bytes())
    }

    /// Decode one resource from an already parsed value
    pub fn decode_value<R: Resource>(&self, raw: &Value) -> Result<R, DecodeError> {
        if !self.is_registered(R::NAME) {
            return Err(DecodeError::Unregistered {
                resource: R::NAME.to_string(),
            });
        }
        let object = raw.as_object().ok_or(DecodeError::UnexpectedShape {
            resource: R::NAME,
            expected: "an object",
            found: json_type_name(raw),
        })?;
        R::read(&FieldReader::new::<R>(object, &self.adapters))
            .map_err(|error| error.into_decode_error(R::NAME))
    }

    /// Decode every element of an array payload independently.
    ///
    /// Only a payload that is not a JSON array fails as a whole; each element
    /// carries its own result.
    pub fn decode_each<R: Resource>(&self, raw: &[u8]) -> Result<Vec<Result<R, DecodeError>>, DecodeError> {
        let value: Value = serde_json::from_slice(raw)?;
        let items = value.as_array().ok_or(DecodeError::UnexpectedShape {
            resource: R::NAME,
            expected: "an array",
            found: json_type_name(&value),
        })?;
        Ok(items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                self.decode_value(item).inspect_err(|error| {
                    tracing::warn!(resource = R::NAME, index, %error, "skipping undecodable item");
                })
            })
            .collect())
    }

    /// Decode a payload by resource name and return its normalized JSON form.
    pub fn decode_named(&self, resource: &str, raw: &[u8]) -> Result<Value, DecodeError> {
        let binding = self
            .bindings
            .get(resource)
            .ok_or_else(|| DecodeError::Unregistered {
                resource: resource.to_string(),
            })?;
        let value: Value = serde_json::from_slice(raw)?;
        (binding.normalize)(self, &value)
    }

    /// Encode a resource into its wire form
    pub fn encode<R: Resource>(&self, resource: &R) -> Value {
        self.adapters.resource::<R>().to_json(resource)
    }

    pub fn encode_string<R: Resource>(&self, resource: &R) -> Result<String, DecodeError> {
        Ok(serde_json::to_string(&self.encode(resource))?)
    }
}
