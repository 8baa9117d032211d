use async_trait::async_trait;
use serde_json::Value;

use crate::credential::ServiceCredential;
use crate::error::{Result, StorageError};
use crate::path::DbPath;
use crate::store::Database;

/// REST client for a Firebase-style realtime database. Values live at
/// `<databaseUrl>/<path>.json`, authorized by the credential's secret.
pub struct RtdbClient {
    base_url: String,
    secret: String,
    client: reqwest::Client,
}

impl RtdbClient {
    pub fn new(credential: ServiceCredential) -> Self {
        Self {
            base_url: credential.database_url,
            secret: credential.database_secret,
            client: reqwest::Client::new(),
        }
    }

    fn url_for(&self, path: &DbPath) -> String {
        format!("{}/{}.json?auth={}", self.base_url, path, self.secret)
    }
}

#[async_trait]
impl Database for RtdbClient {
    async fn read(&self, path: &DbPath) -> Result<Option<Value>> {
        tracing::debug!("GET {}", path);
        let response = self.client.get(self.url_for(path)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(StorageError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // The store serves JSON `null` for absent paths.
        let value: Value = serde_json::from_str(&body)?;
        Ok(if value.is_null() { None } else { Some(value) })
    }

    async fn write(&self, path: &DbPath, value: &Value) -> Result<()> {
        tracing::debug!("PUT {}", path);
        let response = self
            .client
            .put(self.url_for(path))
            .json(value)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
