//! Bean definition registry.
//!
//! # Spring Equivalent
//! `BeanDefinitionRegistry` / `DefaultListableBeanFactory`

use indexmap::IndexMap;
use tracing::debug;

use crate::beans::definition::{BeanDefinition, BeanKind};
use crate::config::error::{ConfigError, Result};

/// Name-keyed store of bean definitions for one configuration pass.
///
/// The registry is owned by the caller; the namespace helpers only borrow
/// it. Names are unique, and enumeration follows registration order.
pub trait BeanDefinitionRegistry {
    /// Returns `true` if a definition is registered under `name`.
    fn contains_bean_definition(&self, name: &str) -> bool;

    fn get_bean_definition(&self, name: &str) -> Option<&BeanDefinition>;

    fn get_bean_definition_mut(&mut self, name: &str) -> Option<&mut BeanDefinition>;

    /// Registers `definition` under `name`.
    ///
    /// # Errors
    /// `ConfigError::DefinitionOverride` if the name is taken and the
    /// registry does not allow overriding.
    fn register_bean_definition(&mut self, name: &str, definition: BeanDefinition) -> Result<()>;

    /// Returns the definition registered under `name`, registering the one
    /// built by `create` first if there is none.
    fn get_or_register_with<F>(&mut self, name: &str, create: F) -> &mut BeanDefinition
    where
        F: FnOnce() -> BeanDefinition,
        Self: Sized;

    /// All registered names, in registration order.
    fn bean_definition_names(&self) -> Vec<String>;

    fn bean_definition_count(&self) -> usize {
        self.bean_definition_names().len()
    }

    /// Names of the definitions whose kind is assignable to `kind`.
    ///
    /// Prototype-scoped definitions are skipped unless
    /// `include_non_singletons` is set.
    fn bean_names_for_kind(&self, kind: &BeanKind, include_non_singletons: bool) -> Vec<String> {
        self.bean_definition_names()
            .into_iter()
            .filter(|name| {
                self.get_bean_definition(name).is_some_and(|definition| {
                    definition.kind().is_assignable_to(kind)
                        && (include_non_singletons || definition.is_singleton())
                })
            })
            .collect()
    }
}

/// Default in-memory registry, ordered by registration.
///
/// # Example
/// ```rust
/// use security_config_core::beans::{
///     BeanDefinition, BeanDefinitionRegistry, BeanKind, DefaultBeanDefinitionRegistry,
/// };
///
/// let mut registry = DefaultBeanDefinitionRegistry::new().allow_bean_definition_overriding(false);
/// registry
///     .register_bean_definition("userService", BeanDefinition::new(BeanKind::UserDetailsService))
///     .unwrap();
///
/// assert!(registry
///     .register_bean_definition("userService", BeanDefinition::new(BeanKind::UserDetailsService))
///     .is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DefaultBeanDefinitionRegistry {
    definitions: IndexMap<String, BeanDefinition>,
    allow_overriding: bool,
}

impl Default for DefaultBeanDefinitionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultBeanDefinitionRegistry {
    /// Creates an empty registry that allows overriding definitions.
    pub fn new() -> Self {
        DefaultBeanDefinitionRegistry {
            definitions: IndexMap::new(),
            allow_overriding: true,
        }
    }

    /// Whether registering a second definition under an existing name
    /// replaces the first one (default) or fails.
    pub fn allow_bean_definition_overriding(mut self, allow: bool) -> Self {
        self.allow_overriding = allow;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Application-role definitions, in registration order.
    ///
    /// Infrastructure definitions are left out.
    pub fn visible_definitions(&self) -> impl Iterator<Item = (&str, &BeanDefinition)> {
        self.definitions
            .iter()
            .filter(|(_, definition)| !definition.is_infrastructure())
            .map(|(name, definition)| (name.as_str(), definition))
    }

    /// Serializes the visible definitions as a JSON object keyed by name.
    pub fn export_json(&self) -> Result<String> {
        let visible: IndexMap<&str, &BeanDefinition> = self.visible_definitions().collect();
        serde_json::to_string_pretty(&visible).map_err(ConfigError::Export)
    }
}

impl BeanDefinitionRegistry for DefaultBeanDefinitionRegistry {
    fn contains_bean_definition(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    fn get_bean_definition(&self, name: &str) -> Option<&BeanDefinition> {
        self.definitions.get(name)
    }

    fn get_bean_definition_mut(&mut self, name: &str) -> Option<&mut BeanDefinition> {
        self.definitions.get_mut(name)
    }

    fn register_bean_definition(&mut self, name: &str, definition: BeanDefinition) -> Result<()> {
        if self.definitions.contains_key(name) {
            if !self.allow_overriding {
                return Err(ConfigError::DefinitionOverride {
                    name: name.to_string(),
                });
            }
            debug!(name, kind = %definition.kind(), "overriding bean definition");
        } else {
            debug!(name, kind = %definition.kind(), "registering bean definition");
        }
        self.definitions.insert(name.to_string(), definition);
        Ok(())
    }

    fn get_or_register_with<F>(&mut self, name: &str, create: F) -> &mut BeanDefinition
    where
        F: FnOnce() -> BeanDefinition,
    {
        self.definitions.entry(name.to_string()).or_insert_with(|| {
            let definition = create();
            debug!(name, kind = %definition.kind(), "registering bean definition");
            definition
        })
    }

    fn bean_definition_names(&self) -> Vec<String> {
        self.definitions.keys().cloned().collect()
    }

    fn bean_definition_count(&self) -> usize {
        self.definitions.len()
    }
}
