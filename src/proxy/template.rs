//! Local template strategy.
//!
//! Reuses the shared proxy host, port and password, and embeds the postal code
//! in the username as the provider's routing hint: `<base-user>;zip.<postal>`.

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::config::{ProxyTemplate, ZIP_ROUTING_PARAM};
use crate::error_handling::CredentialError;

use super::credential::{CredentialResolver, ProxyCredential};

/// Synthesizes credentials from static proxy parameters.
pub struct TemplateResolver {
    template: ProxyTemplate,
}

impl TemplateResolver {
    pub fn new(template: ProxyTemplate) -> Self {
        Self { template }
    }

    /// Builds the routed username for a postal code.
    pub fn routed_user(&self, postal: &str) -> String {
        format!("{}{}{}", self.template.base_user, ZIP_ROUTING_PARAM, postal)
    }
}

impl CredentialResolver for TemplateResolver {
    fn name(&self) -> &'static str {
        "template"
    }

    fn resolve<'a>(
        &'a self,
        postal: &'a str,
    ) -> BoxFuture<'a, Result<ProxyCredential, CredentialError>> {
        let result = ProxyCredential::new(
            self.template.host.clone(),
            self.template.port,
            self.routed_user(postal),
            self.template.pass.clone(),
        );
        futures::future::ready(result).boxed()
    }
}
