use serde::Deserialize;

use crate::error::{Result, StorageError};

/// Service credential for the realtime database, read from the JSON file
/// passed on the command line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCredential {
    pub database_url: String,
    pub database_secret: String,
}

impl ServiceCredential {
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut credential: Self = serde_json::from_str(raw)
            .map_err(|e| StorageError::Credential(format!("invalid credential JSON: {e}")))?;

        if credential.database_url.trim().is_empty() {
            return Err(StorageError::Credential(
                "databaseUrl must not be empty".to_string(),
            ));
        }
        if credential.database_secret.trim().is_empty() {
            return Err(StorageError::Credential(
                "databaseSecret must not be empty".to_string(),
            ));
        }

        credential.database_url = credential.database_url.trim_end_matches('/').to_string();
        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_valid_credential() {
        let credential = ServiceCredential::from_json(
            r#"{"databaseUrl": "https://example-rtdb.firebaseio.com/", "databaseSecret": "s3cr3t"}"#,
        )
        .unwrap();

        assert_eq!(
            credential.database_url,
            "https://example-rtdb.firebaseio.com"
        );
        assert_eq!(credential.database_secret, "s3cr3t");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ServiceCredential::from_json("not json").unwrap_err();
        assert!(matches!(err, StorageError::Credential(_)));
    }

    #[test]
    fn rejects_missing_fields() {
        let err =
            ServiceCredential::from_json(r#"{"databaseUrl": "https://x.example"}"#).unwrap_err();
        assert!(matches!(err, StorageError::Credential(_)));
    }

    #[test]
    fn rejects_blank_values() {
        let err = ServiceCredential::from_json(
            r#"{"databaseUrl": "", "databaseSecret": "s3cr3t"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, StorageError::Credential(_)));
    }
}
