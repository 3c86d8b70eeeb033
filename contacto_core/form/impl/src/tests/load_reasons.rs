use contacto_core_form_contracts::{ContactFormFeatureService, LOAD_FAILURE_MESSAGE};
use contacto_demo::contact::contact_reasons;
use contacto_extern_contracts::contact::MockContactApiService;
use contacto_models::form::LoadStatus;
use contacto_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{tests::ready_sut, ContactFormFeatureServiceImpl};

#[tokio::test]
async fn ok() {
    // Arrange
    let api = MockContactApiService::new().with_list_contact_reasons(Ok(contact_reasons()));
    let mut sut = ContactFormFeatureServiceImpl::new(api);

    // Act
    sut.load_reasons().await;

    // Assert
    assert_eq!(sut.state.load, LoadStatus::Ready(contact_reasons()));
}

#[tokio::test]
async fn error() {
    // Arrange
    let api = MockContactApiService::new()
        .with_list_contact_reasons(Err(anyhow::anyhow!("connection refused").into()));
    let mut sut = ContactFormFeatureServiceImpl::new(api);

    // Act
    sut.load_reasons().await;

    // Assert
    assert_eq!(
        sut.state.load,
        LoadStatus::Failed(LOAD_FAILURE_MESSAGE.into())
    );
    assert!(sut.state.load.reasons().is_empty());
}

#[tokio::test]
async fn already_loaded() {
    // Arrange
    // The mock has no expectations, so a second fetch would panic.
    let mut sut = ready_sut(MockContactApiService::new());

    // Act
    sut.load_reasons().await;

    // Assert
    assert_eq!(sut.state.load, LoadStatus::Ready(contact_reasons()));
}

#[tokio::test]
async fn failed_load_is_not_retried() {
    // Arrange
    let mut sut = ContactFormFeatureServiceImpl::new(MockContactApiService::new());
    sut.state.load = LoadStatus::Failed(LOAD_FAILURE_MESSAGE.into());

    // Act
    sut.load_reasons().await;

    // Assert
    assert_matches!(&sut.state.load, LoadStatus::Failed(_));
}
