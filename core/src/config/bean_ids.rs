//! Reserved bean names used by the security namespace.
//!
//! Element handlers use these to find the definitions shared across a
//! configuration pass. The leading underscore keeps them clear of
//! application bean names.

/// `AffirmativeBased` access decision manager.
pub const ACCESS_MANAGER: &str = "_accessManager";

/// `ProviderManager` holding the registered authentication providers.
pub const AUTHENTICATION_MANAGER: &str = "_authenticationManager";

/// Post processor that assembles the filter chain from [`FILTER_LIST`].
pub const FILTER_CHAIN_POST_PROCESSOR: &str = "_filterChainProxyPostProcessor";

/// Holder of the filters added during the pass, in execution order.
pub const FILTER_LIST: &str = "_filterChainList";

/// List property of the access decision manager.
pub const DECISION_VOTERS: &str = "decisionVoters";

/// List property of the provider manager.
pub const PROVIDERS: &str = "providers";

/// List property of the filter chain list.
pub const FILTERS: &str = "filters";
