//! `<http>` element and its children.
//!
//! Filters are added in the order they must run.

use security_config_core::beans::{
    BeanDefinition, BeanDefinitionRegistry, BeanKind, RuntimeBeanReference,
};
use security_config_core::config::{bean_ids, utils};
use security_config_core::{ConfigError, Result};

/// `<remember-me>` attributes.
#[derive(Default)]
pub struct RememberMeElement<'a> {
    pub key: Option<&'a str>,
    pub data_source_ref: Option<&'a str>,
    pub token_repository_ref: Option<&'a str>,
}

/// `<http>` attributes and child elements.
#[derive(Default)]
pub struct HttpElement<'a> {
    pub http_basic: bool,
    pub form_login: bool,
    pub logout: bool,
    pub remember_me: Option<RememberMeElement<'a>>,
}

fn filter(name: &str) -> BeanDefinition {
    BeanDefinition::new(BeanKind::custom(name))
}

pub fn http<R: BeanDefinitionRegistry>(registry: &mut R, element: &HttpElement) -> Result<()> {
    utils::add_http_filter(registry, filter("HttpSessionContextIntegrationFilter"));

    if element.logout {
        utils::add_http_filter(registry, filter("LogoutFilter"));
    }
    if element.form_login {
        utils::add_http_filter(
            registry,
            filter("AuthenticationProcessingFilter").with_property(
                "authenticationManager",
                RuntimeBeanReference::new(bean_ids::AUTHENTICATION_MANAGER),
            ),
        );
    }
    if element.http_basic {
        utils::add_http_filter(registry, filter("BasicProcessingFilter"));
    }
    if let Some(remember_me) = &element.remember_me {
        add_remember_me(registry, remember_me)?;
    }

    utils::add_http_filter(registry, filter("ExceptionTranslationFilter"));
    utils::add_http_filter(
        registry,
        filter("FilterSecurityInterceptor").with_property(
            "accessDecisionManager",
            RuntimeBeanReference::new(bean_ids::ACCESS_MANAGER),
        ),
    );
    utils::register_default_access_manager_if_necessary(registry);

    Ok(())
}

fn add_remember_me<R: BeanDefinitionRegistry>(
    registry: &mut R,
    element: &RememberMeElement,
) -> Result<()> {
    const ELEMENT: &str = "remember-me";
    let key = element.key.unwrap_or("SpringSecured");

    if utils::count_non_empty(&[element.data_source_ref, element.token_repository_ref]) > 1 {
        return Err(ConfigError::InvalidElement {
            element: ELEMENT.to_string(),
            message: "only one of data-source-ref and token-repository-ref may be set".to_string(),
        });
    }

    let user_details_service =
        utils::get_user_details_service(&*registry).map_err(|e| e.in_element(ELEMENT))?;

    let mut services = BeanDefinition::new(BeanKind::custom("TokenBasedRememberMeServices"))
        .with_property("userDetailsService", user_details_service)
        .with_property("key", key);
    if let Some(repository) = element.token_repository_ref.filter(|r| !r.trim().is_empty()) {
        services.add_property_value("tokenRepository", RuntimeBeanReference::new(repository));
    }

    utils::get_registered_providers(registry)
        .push(filter("RememberMeAuthenticationProvider").with_property("key", key));
    utils::add_http_filter(
        registry,
        filter("RememberMeProcessingFilter").with_property("rememberMeServices", services),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use security_config_core::beans::{DefaultBeanDefinitionRegistry, PropertyValue};

    fn filter_kinds(registry: &DefaultBeanDefinitionRegistry) -> Vec<String> {
        utils::get_registered_filters(registry)
            .into_iter()
            .flatten()
            .filter_map(PropertyValue::as_bean)
            .map(|bean| bean.kind().to_string())
            .collect()
    }

    #[test]
    fn test_http_filters_in_execution_order() {
        let mut registry = DefaultBeanDefinitionRegistry::new();
        let element = HttpElement {
            http_basic: true,
            logout: true,
            ..Default::default()
        };

        http(&mut registry, &element).unwrap();

        assert_eq!(
            filter_kinds(&registry),
            vec![
                "HttpSessionContextIntegrationFilter",
                "LogoutFilter",
                "BasicProcessingFilter",
                "ExceptionTranslationFilter",
                "FilterSecurityInterceptor",
            ]
        );
        assert!(registry.contains_bean_definition(bean_ids::ACCESS_MANAGER));
    }

    #[test]
    fn test_remember_me_requires_user_details_service() {
        let mut registry = DefaultBeanDefinitionRegistry::new();
        let element = HttpElement {
            remember_me: Some(RememberMeElement::default()),
            ..Default::default()
        };

        let err = http(&mut registry, &element).unwrap_err();

        assert!(matches!(err, ConfigError::Element { ref element, .. } if element == "remember-me"));
    }

    #[test]
    fn test_remember_me_rejects_both_token_sources() {
        let mut registry = DefaultBeanDefinitionRegistry::new();
        let element = HttpElement {
            remember_me: Some(RememberMeElement {
                data_source_ref: Some("dataSource"),
                token_repository_ref: Some("tokenRepository"),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert!(matches!(
            http(&mut registry, &element),
            Err(ConfigError::InvalidElement { .. })
        ));
    }
}
