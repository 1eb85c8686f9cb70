//! Bean definitions.
//!
//! A [`BeanDefinition`] describes a component that will be instantiated
//! later by the container: its kind, its visibility role, its scope and a
//! map of named property values. Property values may be scalars, references
//! to other definitions, inner definitions, or ordered [`ManagedList`]s.
//!
//! # Spring Equivalent
//! `BeanDefinition`, `RootBeanDefinition`, `RuntimeBeanReference`, `ManagedList`

use std::ops::Deref;

use derive_more::Display;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

// =============================================================================
// Kind, Role and Scope
// =============================================================================

/// The type of component a definition stands for.
///
/// Replaces class names: the namespace only needs to tell a handful of
/// components apart, everything else is [`BeanKind::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
pub enum BeanKind {
    /// Access decision manager granting access if any voter grants.
    #[display("AffirmativeBased")]
    AffirmativeBased,
    /// Votes on `ROLE_` prefixed attributes.
    #[display("RoleVoter")]
    RoleVoter,
    /// Votes on `IS_AUTHENTICATED_*` attributes.
    #[display("AuthenticatedVoter")]
    AuthenticatedVoter,
    /// Authentication manager iterating over its providers.
    #[display("ProviderManager")]
    ProviderManager,
    /// Assembles the filter chain right before the proxy is initialized.
    #[display("FilterChainProxyPostProcessor")]
    FilterChainProxyPostProcessor,
    /// Holder for the filters contributed during a configuration pass.
    #[display("FilterChainList")]
    FilterChainList,
    /// Plain user lookup service.
    #[display("UserDetailsService")]
    UserDetailsService,
    /// Caching wrapper around a user lookup service.
    #[display("CachingUserDetailsService")]
    CachingUserDetailsService,
    /// Any other component, identified by its type name.
    #[display("{_0}")]
    Custom(String),
}

impl BeanKind {
    /// Creates a custom kind from a type name.
    pub fn custom(name: impl Into<String>) -> Self {
        BeanKind::Custom(name.into())
    }

    /// Returns `true` if a bean of this kind can be used where `other` is expected.
    ///
    /// A caching user details service is also a user details service; all
    /// other kinds are only assignable to themselves.
    pub fn is_assignable_to(&self, other: &BeanKind) -> bool {
        self == other
            || matches!(
                (self, other),
                (BeanKind::CachingUserDetailsService, BeanKind::UserDetailsService)
            )
    }
}

/// Visibility role of a definition.
///
/// Infrastructure definitions are internal to the namespace and hidden from
/// normal enumeration and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BeanRole {
    #[default]
    Application,
    Infrastructure,
}

/// Instantiation scope of a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BeanScope {
    #[default]
    Singleton,
    Prototype,
}

// =============================================================================
// Property Values
// =============================================================================

/// A reference to another definition by name, resolved at instantiation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RuntimeBeanReference {
    bean_name: String,
}

impl RuntimeBeanReference {
    pub fn new(bean_name: impl Into<String>) -> Self {
        RuntimeBeanReference {
            bean_name: bean_name.into(),
        }
    }

    pub fn bean_name(&self) -> &str {
        &self.bean_name
    }
}

/// Value of a named property on a [`BeanDefinition`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PropertyValue {
    /// Scalar value, converted by the container.
    Value(String),
    /// Reference to another registered definition.
    Reference(RuntimeBeanReference),
    /// Anonymous inner definition.
    Bean(Box<BeanDefinition>),
    /// Ordered sequence of values.
    List(ManagedList),
}

impl PropertyValue {
    pub fn as_list(&self) -> Option<&ManagedList> {
        match self {
            PropertyValue::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_bean(&self) -> Option<&BeanDefinition> {
        match self {
            PropertyValue::Bean(bean) => Some(bean),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&RuntimeBeanReference> {
        match self {
            PropertyValue::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            PropertyValue::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Value(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Value(value)
    }
}

impl From<RuntimeBeanReference> for PropertyValue {
    fn from(reference: RuntimeBeanReference) -> Self {
        PropertyValue::Reference(reference)
    }
}

impl From<BeanDefinition> for PropertyValue {
    fn from(definition: BeanDefinition) -> Self {
        PropertyValue::Bean(Box::new(definition))
    }
}

impl From<ManagedList> for PropertyValue {
    fn from(list: ManagedList) -> Self {
        PropertyValue::List(list)
    }
}

/// Append-only ordered list of property values.
///
/// Element order is significant: it is the order in which voters are
/// consulted, providers are tried and filters are run. Read access goes
/// through `Deref<Target = [PropertyValue]>`; the only mutation is [`push`].
///
/// [`push`]: ManagedList::push
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ManagedList {
    elements: Vec<PropertyValue>,
}

impl ManagedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ManagedList {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Appends a value at the end of the list.
    pub fn push(&mut self, value: impl Into<PropertyValue>) {
        self.elements.push(value.into());
    }
}

impl Deref for ManagedList {
    type Target = [PropertyValue];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<'a> IntoIterator for &'a ManagedList {
    type Item = &'a PropertyValue;
    type IntoIter = std::slice::Iter<'a, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<V: Into<PropertyValue>> FromIterator<V> for ManagedList {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        ManagedList {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// =============================================================================
// Bean Definition
// =============================================================================

/// Description of a component to be instantiated by the container.
///
/// # Example
/// ```rust
/// use security_config_core::beans::{BeanDefinition, BeanKind, BeanRole, RuntimeBeanReference};
///
/// let provider = BeanDefinition::new(BeanKind::custom("DaoAuthenticationProvider"))
///     .with_property("userDetailsService", RuntimeBeanReference::new("userService"));
///
/// assert_eq!(provider.role(), BeanRole::Application);
/// assert!(provider.contains_property("userDetailsService"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeanDefinition {
    kind: BeanKind,
    role: BeanRole,
    scope: BeanScope,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    property_values: IndexMap<String, PropertyValue>,
}

impl BeanDefinition {
    /// Creates an application-role singleton definition with no properties.
    pub fn new(kind: BeanKind) -> Self {
        BeanDefinition {
            kind,
            role: BeanRole::default(),
            scope: BeanScope::default(),
            property_values: IndexMap::new(),
        }
    }

    /// Sets the visibility role.
    pub fn with_role(mut self, role: BeanRole) -> Self {
        self.role = role;
        self
    }

    /// Sets the instantiation scope.
    pub fn with_scope(mut self, scope: BeanScope) -> Self {
        self.scope = scope;
        self
    }

    /// Adds a property value, replacing any previous value of that name.
    pub fn with_property(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.add_property_value(name, value);
        self
    }

    pub fn kind(&self) -> &BeanKind {
        &self.kind
    }

    pub fn role(&self) -> BeanRole {
        self.role
    }

    pub fn set_role(&mut self, role: BeanRole) {
        self.role = role;
    }

    pub fn scope(&self) -> BeanScope {
        self.scope
    }

    pub fn is_singleton(&self) -> bool {
        self.scope == BeanScope::Singleton
    }

    pub fn is_infrastructure(&self) -> bool {
        self.role == BeanRole::Infrastructure
    }

    pub fn contains_property(&self, name: &str) -> bool {
        self.property_values.contains_key(name)
    }

    pub fn get_property_value(&self, name: &str) -> Option<&PropertyValue> {
        self.property_values.get(name)
    }

    /// Sets a property value, replacing any previous value of that name.
    pub fn add_property_value(&mut self, name: &str, value: impl Into<PropertyValue>) {
        self.property_values.insert(name.to_string(), value.into());
    }

    /// Property names in the order they were first set.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.property_values.keys().map(String::as_str)
    }

    /// Returns the list stored under `name`, creating it when unset.
    ///
    /// A non-list value found under `name` becomes the first element of a
    /// new list, so nothing already configured is dropped.
    pub fn list_property_mut(&mut self, name: &str) -> &mut ManagedList {
        let slot = self
            .property_values
            .entry(name.to_string())
            .or_insert_with(|| PropertyValue::List(ManagedList::new()));

        if !matches!(slot, PropertyValue::List(_)) {
            warn!(
                kind = %self.kind,
                property = name,
                "property is not a list, wrapping existing value"
            );
            let previous = std::mem::replace(slot, PropertyValue::List(ManagedList::new()));
            *slot = PropertyValue::List(std::iter::once(previous).collect());
        }

        match slot {
            PropertyValue::List(list) => list,
            _ => unreachable!("list property was initialized above"),
        }
    }
}
