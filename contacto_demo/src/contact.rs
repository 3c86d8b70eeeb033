use std::sync::LazyLock;

use contacto_models::contact::ContactReason;

pub static ALL_CONTACT_REASONS: LazyLock<Vec<&ContactReason>> =
    LazyLock::new(|| vec![&SOPORTE, &VENTAS, &OTRO]);

pub static SOPORTE: LazyLock<ContactReason> = LazyLock::new(|| ContactReason {
    id: 1.into(),
    reason: "Soporte técnico".into(),
    description: "Problemas con el servicio".into(),
});

pub static VENTAS: LazyLock<ContactReason> = LazyLock::new(|| ContactReason {
    id: 2.into(),
    reason: "Ventas".into(),
    description: "Consultas comerciales".into(),
});

pub static OTRO: LazyLock<ContactReason> = LazyLock::new(|| ContactReason {
    id: 7.into(),
    reason: "Otro".into(),
    description: "Cualquier otra consulta".into(),
});

/// The demo reasons in backend order, cloned into an owned list.
pub fn contact_reasons() -> Vec<ContactReason> {
    ALL_CONTACT_REASONS.iter().map(|&x| x.clone()).collect()
}
