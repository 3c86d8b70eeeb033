use std::{ops::Deref, sync::LazyLock};

pub static USER_AGENT: LazyLock<String> =
    LazyLock::new(|| format!("contacto/{}", env!("CARGO_PKG_VERSION")));

#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self(
            reqwest::Client::builder()
                .user_agent(&*USER_AGENT)
                .build()
                .unwrap(),
        )
    }
}
