//! Security Config Demo
//!
//! Runs one namespace configuration pass over a fixed document and prints
//! the resulting bean definitions.
//!
//! The pass is equivalent to:
//! ```xml
//! <user-service id="userService" cache-ref="userCache">
//!     <user name="admin" password="admin" authorities="ROLE_ADMIN,ROLE_USER"/>
//!     <user name="user" password="user" authorities="ROLE_USER"/>
//! </user-service>
//!
//! <http>
//!     <form-login/>
//!     <http-basic/>
//!     <logout/>
//!     <remember-me key="demo"/>
//! </http>
//!
//! <authentication-provider user-service-ref="userService"/>
//! <global-method-security jsr250-annotations="enabled"/>
//! ```
//!
//! Set `RUST_LOG=debug` to trace every registration.


use security_config_core::beans::{
    BeanDefinitionRegistry, DefaultBeanDefinitionRegistry, PropertyValue,
};
use security_config_core::config::utils;
use security_config_core::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use handlers::authentication_provider::authentication_provider;
use handlers::http::{http, HttpElement, RememberMeElement};
use handlers::method_security::global_method_security;
use handlers::user_service::{user_service, UserServiceElement};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn parse(registry: &mut DefaultBeanDefinitionRegistry) -> Result<()> {
    user_service(
        registry,
        &UserServiceElement {
            id: "userService",
            users: &["admin=admin,ROLE_ADMIN,ROLE_USER", "user=user,ROLE_USER"],
            cache_ref: Some("userCache"),
        },
    )?;

    http(
        registry,
        &HttpElement {
            http_basic: true,
            form_login: true,
            logout: true,
            remember_me: Some(RememberMeElement {
                key: Some("demo"),
                ..Default::default()
            }),
        },
    )?;

    authentication_provider(registry, Some("userService"))?;
    global_method_security(registry, true)
}

fn print_filter_chain(registry: &DefaultBeanDefinitionRegistry) {
    println!("Filter chain:");
    let filters = utils::get_registered_filters(registry).into_iter().flatten();
    for (position, filter) in filters.enumerate() {
        let name = match filter {
            PropertyValue::Bean(bean) => bean.kind().to_string(),
            PropertyValue::Reference(reference) => reference.bean_name().to_string(),
            other => format!("{:?}", other),
        };
        println!("  {:>2}. {}", position + 1, name);
    }
    println!();
}

fn main() -> Result<()> {
    setup_logging();

    let mut registry = DefaultBeanDefinitionRegistry::new();
    parse(&mut registry)?;

    info!(
        definitions = registry.bean_definition_count(),
        "security configuration assembled"
    );

    print_filter_chain(&registry);
    println!("{}", registry.export_json()?);

    Ok(())
}
