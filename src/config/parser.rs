use std::path::Path;

use crate::errors::AuditError;

use super::types::{ClinicpulseConfig, StoreBackend};

pub async fn parse_config(path: &Path) -> Result<ClinicpulseConfig, AuditError> {
    if !path.exists() {
        return Err(AuditError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(AuditError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: ClinicpulseConfig = serde_yaml::from_str(&content)?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &ClinicpulseConfig) -> Result<(), AuditError> {
    if config.fetch.timeout_secs == 0 {
        return Err(AuditError::Config("fetch.timeout_secs must be > 0".into()));
    }
    if config.audit.parallelism == 0 {
        return Err(AuditError::Config("audit.parallelism must be > 0".into()));
    }
    if config.store.backend == StoreBackend::Remote && config.store.endpoint.is_none() {
        return Err(AuditError::Config(
            "store.endpoint is required for the remote backend".into(),
        ));
    }
    if config.store.backend == StoreBackend::File && config.store.path.trim().is_empty() {
        return Err(AuditError::Config(
            "store.path is required for the file backend".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_parse_minimal_config_uses_defaults() {
        let file = write_config("{}");
        let config = parse_config(file.path()).await.unwrap();
        assert_eq!(config.fetch.timeout_secs, 5);
        assert_eq!(config.fetch.retries, 2);
        assert_eq!(config.audit.parallelism, 5);
        assert_eq!(config.store.backend, StoreBackend::File);
    }

    #[tokio::test]
    async fn test_parse_full_config() {
        let file = write_config(
            "fetch:\n  timeout_secs: 8\n  retries: 3\naudit:\n  parallelism: 2\nstore:\n  backend: memory\n",
        );
        let config = parse_config(file.path()).await.unwrap();
        assert_eq!(config.fetch.timeout_secs, 8);
        assert_eq!(config.fetch.retries, 3);
        assert_eq!(config.audit.parallelism, 2);
        assert_eq!(config.store.backend, StoreBackend::Memory);
    }

    #[tokio::test]
    async fn test_remote_backend_requires_endpoint() {
        let file = write_config("store:\n  backend: remote\n");
        let err = parse_config(file.path()).await.unwrap_err();
        assert!(matches!(err, AuditError::Config(_)));
    }

    #[tokio::test]
    async fn test_zero_parallelism_rejected() {
        let file = write_config("audit:\n  parallelism: 0\n");
        assert!(parse_config(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = parse_config(Path::new("/nonexistent/config.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuditError::Config(_)));
    }
}
