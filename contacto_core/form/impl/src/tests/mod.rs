use contacto_core_form_contracts::ContactFormFeatureService;
use contacto_extern_contracts::contact::MockContactApiService;
use contacto_models::{
    contact::NewContact,
    form::{ContactField, LoadStatus},
};
use contacto_utils::Apply;

use crate::ContactFormFeatureServiceImpl;

mod load_reasons;

type Sut = ContactFormFeatureServiceImpl<MockContactApiService>;

/// A session whose reason list has already loaded with the demo reasons.
fn ready_sut(api: MockContactApiService) -> Sut {
    ContactFormFeatureServiceImpl::new(api).with(|sut| {
        sut.state.load = LoadStatus::Ready(contacto_demo::contact::contact_reasons());
    })
}

/// Fills all five fields through the public handler, reason id 2 ("Ventas").
fn fill_ana(sut: &mut Sut) {
    sut.update_field(ContactField::FirstName, "Ana");
    sut.update_field(ContactField::LastName, "Gomez");
    sut.update_field(ContactField::Email, "ana@x.com");
    sut.update_field(ContactField::ContactReason, "2");
    sut.update_field(ContactField::Message, "Hola");
}

/// The payload [`fill_ana`] is expected to produce.
fn ana_contact() -> NewContact {
    NewContact {
        first_name: "Ana".into(),
        last_name: "Gomez".into(),
        email: "ana@x.com".into(),
        contact_reason_id: 2.into(),
        message: "Hola".to_owned().try_into().unwrap(),
    }
}
