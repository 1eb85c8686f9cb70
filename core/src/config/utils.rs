//! Helpers shared by the security namespace element handlers.
//!
//! Handlers run once per configuration element, in document order, and
//! several of them contribute to the same well-known definitions: every
//! voter lands in the access decision manager, every provider in the
//! provider manager, every filter in the filter chain list. The functions
//! here create those definitions on first use and only ever append to their
//! list properties afterwards, so the order of calls is the order of the
//! resulting voters, providers and filters.
//!
//! # Example
//! ```rust
//! use security_config_core::beans::{
//!     BeanDefinition, BeanKind, DefaultBeanDefinitionRegistry, RuntimeBeanReference,
//! };
//! use security_config_core::config::utils;
//!
//! let mut registry = DefaultBeanDefinitionRegistry::new();
//!
//! utils::add_http_filter(&mut registry, RuntimeBeanReference::new("logoutFilter"));
//! utils::add_http_filter(&mut registry, RuntimeBeanReference::new("basicProcessingFilter"));
//! utils::get_registered_providers(&mut registry)
//!     .push(BeanDefinition::new(BeanKind::custom("DaoAuthenticationProvider")));
//!
//! let filters = utils::get_registered_filters(&registry).unwrap();
//! assert_eq!(filters.len(), 2);
//! ```

use tracing::debug;

use crate::beans::{
    BeanDefinition, BeanDefinitionRegistry, BeanKind, BeanRole, ManagedList, PropertyValue,
    RuntimeBeanReference,
};
use crate::config::bean_ids;
use crate::config::error::{ConfigError, Result};

// =============================================================================
// Access Decision Manager
// =============================================================================

fn default_access_manager() -> BeanDefinition {
    let mut default_voters = ManagedList::with_capacity(2);
    default_voters.push(BeanDefinition::new(BeanKind::RoleVoter));
    default_voters.push(BeanDefinition::new(BeanKind::AuthenticatedVoter));

    BeanDefinition::new(BeanKind::AffirmativeBased)
        .with_property(bean_ids::DECISION_VOTERS, default_voters)
}

/// Registers the default `AffirmativeBased` access decision manager unless
/// one already exists, and returns the registered definition.
///
/// A new manager starts with a `RoleVoter` followed by an
/// `AuthenticatedVoter`. An existing definition is returned untouched.
pub fn register_default_access_manager_if_necessary<R>(registry: &mut R) -> &mut BeanDefinition
where
    R: BeanDefinitionRegistry,
{
    registry.get_or_register_with(bean_ids::ACCESS_MANAGER, default_access_manager)
}

/// Appends a voter to the access decision manager, registering the default
/// manager first if needed.
pub fn add_voter<R>(registry: &mut R, voter: impl Into<PropertyValue>)
where
    R: BeanDefinitionRegistry,
{
    let voters = register_default_access_manager_if_necessary(registry)
        .list_property_mut(bean_ids::DECISION_VOTERS);
    voters.push(voter);
    debug!(count = voters.len(), "added decision voter");
}

// =============================================================================
// Authentication Manager
// =============================================================================

fn provider_manager() -> BeanDefinition {
    BeanDefinition::new(BeanKind::ProviderManager)
        .with_property(bean_ids::PROVIDERS, ManagedList::new())
}

/// Returns the provider manager definition, registering one with an empty
/// provider list if there is none yet.
///
/// Typically called when registering authentication providers, or by
/// handlers whose beans depend on the authentication manager.
pub fn register_provider_manager_if_necessary<R>(registry: &mut R) -> &mut BeanDefinition
where
    R: BeanDefinitionRegistry,
{
    registry.get_or_register_with(bean_ids::AUTHENTICATION_MANAGER, provider_manager)
}

/// Returns the live provider list of the authentication manager.
///
/// Providers pushed onto the returned list are tried in push order.
pub fn get_registered_providers<R>(registry: &mut R) -> &mut ManagedList
where
    R: BeanDefinitionRegistry,
{
    register_provider_manager_if_necessary(registry).list_property_mut(bean_ids::PROVIDERS)
}

// =============================================================================
// User Details Service
// =============================================================================

/// Resolves the user details service other beans should depend on.
///
/// A singleton caching service wins if there is one; otherwise any user
/// details service is considered. Plain services are never looked at while
/// a caching one exists, so this must not be used by beans that need the
/// uncached service.
///
/// # Errors
/// - `ConfigError::NoUserDetailsService` if none is registered
/// - `ConfigError::AmbiguousUserDetailsService` if the lookup finds more than one
pub fn get_user_details_service<R>(registry: &R) -> Result<RuntimeBeanReference>
where
    R: BeanDefinitionRegistry,
{
    let mut services = registry.bean_names_for_kind(&BeanKind::CachingUserDetailsService, false);

    if services.is_empty() {
        services = registry.bean_names_for_kind(&BeanKind::UserDetailsService, true);
    }

    match services.len() {
        0 => Err(ConfigError::NoUserDetailsService),
        1 => Ok(RuntimeBeanReference::new(services.remove(0))),
        _ => Err(ConfigError::AmbiguousUserDetailsService {
            candidates: services,
        }),
    }
}

// =============================================================================
// Filter Chain
// =============================================================================

fn filter_chain_post_processor() -> BeanDefinition {
    BeanDefinition::new(BeanKind::FilterChainProxyPostProcessor).with_role(BeanRole::Infrastructure)
}

fn filter_chain_list() -> BeanDefinition {
    BeanDefinition::new(BeanKind::FilterChainList)
        .with_role(BeanRole::Infrastructure)
        .with_property(bean_ids::FILTERS, ManagedList::new())
}

/// Registers the filter chain post processor together with the filter
/// chain list it reads from. Does nothing if the post processor exists.
pub fn register_filter_chain_post_processor_if_necessary<R>(registry: &mut R)
where
    R: BeanDefinitionRegistry,
{
    if registry.contains_bean_definition(bean_ids::FILTER_CHAIN_POST_PROCESSOR) {
        return;
    }

    registry.get_or_register_with(
        bean_ids::FILTER_CHAIN_POST_PROCESSOR,
        filter_chain_post_processor,
    );
    registry.get_or_register_with(bean_ids::FILTER_LIST, filter_chain_list);
}

/// Appends a filter to the chain.
///
/// Filters run in the order they are added over the whole pass, so callers
/// must add them in execution order.
pub fn add_http_filter<R>(registry: &mut R, filter: impl Into<PropertyValue>)
where
    R: BeanDefinitionRegistry,
{
    register_filter_chain_post_processor_if_necessary(registry);

    let filters = registry
        .get_or_register_with(bean_ids::FILTER_LIST, filter_chain_list)
        .list_property_mut(bean_ids::FILTERS);
    filters.push(filter);
    debug!(count = filters.len(), "added http filter");
}

/// Filters added so far, in execution order.
///
/// Returns `None` if no filter chain list has been registered.
pub fn get_registered_filters<R>(registry: &R) -> Option<&ManagedList>
where
    R: BeanDefinitionRegistry,
{
    registry
        .get_bean_definition(bean_ids::FILTER_LIST)?
        .get_property_value(bean_ids::FILTERS)?
        .as_list()
}

// =============================================================================
// Attribute Helpers
// =============================================================================

/// Counts the values that are present and contain non-whitespace text.
///
/// Used by handlers to check that mutually exclusive attributes are not
/// combined.
pub fn count_non_empty(values: &[Option<&str>]) -> usize {
    values
        .iter()
        .flatten()
        .filter(|value| value.chars().any(|c| !c.is_whitespace()))
        .count()
}
