use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Slot name under which the ledger blob is stored.
pub const DEFAULT_BLOB_KEY: &str = "accumulate_pro_data";
/// Shared secret used when `ADMIN_SECRET` is unset.
pub const DEFAULT_ADMIN_SECRET: &str = "0987";

#[derive(Debug, Clone, PartialEq)]
pub struct S3Settings {
    pub bucket: String,
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Where the ledger blob is persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum BlobBackend {
    Memory,
    File { data_dir: PathBuf },
    Redis { url: String },
    S3(S3Settings),
}

/// Application configuration loaded from environment variables.
/// Startup fails if a variable required by the selected backend is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub blob_backend: BlobBackend,
    pub blob_key: String,
    pub admin_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            lookup(key)
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let blob_backend = match lookup("BLOB_BACKEND").as_deref().unwrap_or("file") {
            "memory" => BlobBackend::Memory,
            "file" => BlobBackend::File {
                data_dir: lookup("DATA_DIR")
                    .unwrap_or_else(|| "./data".to_string())
                    .into(),
            },
            "redis" => BlobBackend::Redis {
                url: require("REDIS_URL")?,
            },
            "s3" => BlobBackend::S3(S3Settings {
                bucket: require("S3_BUCKET")?,
                endpoint: require("S3_ENDPOINT")?,
                access_key_id: require("AWS_ACCESS_KEY_ID")?,
                secret_access_key: require("AWS_SECRET_ACCESS_KEY")?,
            }),
            other => bail!("BLOB_BACKEND must be one of memory, file, redis, s3 (got '{other}')"),
        };

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            blob_backend,
            blob_key: lookup("BLOB_KEY").unwrap_or_else(|| DEFAULT_BLOB_KEY.to_string()),
            admin_secret: lookup("ADMIN_SECRET")
                .unwrap_or_else(|| DEFAULT_ADMIN_SECRET.to_string()),
        })
    }

    pub fn uses_default_admin_secret(&self) -> bool {
        self.admin_secret == DEFAULT_ADMIN_SECRET
    }

    /// Configuration for tests: in-memory storage, default secret.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            blob_backend: BlobBackend::Memory,
            blob_key: DEFAULT_BLOB_KEY.to_string(),
            admin_secret: DEFAULT_ADMIN_SECRET.to_string(),
        }
    }
}
