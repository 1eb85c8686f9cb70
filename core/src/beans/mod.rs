//! Bean definition model.
//!
//! # Spring Equivalent
//! `org.springframework.beans.factory.config` / `org.springframework.beans.factory.support`
//!
//! # Module Structure
//!
//! - `definition` - Bean definitions, kinds, roles and property values
//! - `registry` - Registry trait and the default insertion-ordered registry

pub use definition::{
    BeanDefinition, BeanKind, BeanRole, BeanScope, ManagedList, PropertyValue,
    RuntimeBeanReference,
};
pub use registry::{BeanDefinitionRegistry, DefaultBeanDefinitionRegistry};

pub mod definition;
pub mod registry;
