//! # Security Config Core
//!
//! Bean-definition plumbing behind the security namespace configuration.
//!
//! While a security configuration document is processed, element handlers
//! register the components the namespace needs (access decision manager,
//! provider manager, filter chain list) and append voters, providers and
//! filters to them. The helpers in [`config::utils`] make those
//! registrations idempotent, so any number of handlers can contribute to the
//! same well-known definition in document order.
//!
//! ## Modules
//!
//! - [`beans`] - Bean definition model and registry abstraction
//! - [`config`] - Well-known bean ids, registrar helpers and errors
//!
//! ## Example
//!
//! ```rust
//! use security_config_core::beans::{
//!     BeanDefinition, BeanDefinitionRegistry, BeanKind, DefaultBeanDefinitionRegistry,
//! };
//! use security_config_core::config::{bean_ids, utils};
//!
//! let mut registry = DefaultBeanDefinitionRegistry::new();
//! utils::add_voter(&mut registry, BeanDefinition::new(BeanKind::custom("IpAddressVoter")));
//!
//! assert!(registry.contains_bean_definition(bean_ids::ACCESS_MANAGER));
//! ```

pub mod beans;
pub mod config;

pub use config::error::{ConfigError, Result};
