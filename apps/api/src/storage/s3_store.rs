use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;

use crate::config::S3Settings;
use crate::storage::{BlobStore, StorageError};

/// Stores each slot as `ledger/<key>.json` in one bucket (MinIO locally, AWS in production).
pub struct S3BlobStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3BlobStore {
    pub async fn connect(settings: &S3Settings) -> Self {
        let credentials = Credentials::new(
            &settings.access_key_id,
            &settings.secret_access_key,
            None,
            None,
            "meadow-static",
        );

        let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(credentials)
            .endpoint_url(&settings.endpoint)
            .load()
            .await;

        info!("S3 client initialized (bucket: {})", settings.bucket);

        Self {
            client: aws_sdk_s3::Client::new(&s3_config),
            bucket: settings.bucket.clone(),
        }
    }
}

fn object_key(key: &str) -> String {
    format!("ledger/{key}.json")
}

#[async_trait]
impl BlobStore for S3BlobStore {
    fn name(&self) -> &'static str {
        "s3"
    }

    async fn get(&self, key: &str) -> Result<Option<Bytes>, StorageError> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(object_key(key))
            .send()
            .await;

        match result {
            Ok(output) => {
                let data = output
                    .body
                    .collect()
                    .await
                    .map_err(|e| StorageError::S3(format!("reading object body failed: {e}")))?;
                Ok(Some(data.into_bytes()))
            }
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_no_such_key() {
                    Ok(None)
                } else {
                    Err(StorageError::S3(format!("get_object failed: {service_err}")))
                }
            }
        }
    }

    async fn put(&self, key: &str, blob: Bytes) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key(key))
            .body(ByteStream::from(blob))
            .content_type("application/json")
            .send()
            .await
            .map_err(|e| StorageError::S3(format!("put_object failed: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_layout() {
        assert_eq!(object_key("accumulate_pro_data"), "ledger/accumulate_pro_data.json");
    }
}
