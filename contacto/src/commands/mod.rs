use contacto_config::Config;
use contacto_core_form_impl::ContactFormFeatureServiceImpl;
use contacto_extern_impl::contact::{ContactApiServiceConfig, ContactApiServiceImpl};

pub mod reasons;
pub mod send;

/// Builds one form session wired to the configured backend.
fn contact_form(config: &Config) -> ContactFormFeatureServiceImpl<ContactApiServiceImpl> {
    let api = ContactApiServiceImpl::new(ContactApiServiceConfig::new(config.api.base_url.clone()));
    ContactFormFeatureServiceImpl::new(api)
}
