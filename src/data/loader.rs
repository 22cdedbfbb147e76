use crate::data::DatasetLoadError;
use crate::model::{DataStoreKind, EmojiData, LoaderParams, LocaleKey};
use async_trait::async_trait;

/// Everything a [`DataLoader`] is given for one load.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub locale: LocaleKey,
    pub data_store: DataStoreKind,
    pub messages: Option<serde_json::Value>,
    pub emoji_data: Option<serde_json::Value>,
}

impl LoadRequest {
    pub fn new(locale: LocaleKey, params: LoaderParams) -> Self {
        Self {
            locale,
            data_store: params.data_store,
            messages: params.messages,
            emoji_data: params.emoji_data,
        }
    }
}

/// Fetches and parses the dataset for a locale.
///
/// Implemented by the host (network, storage, bundled data...). The picker core only
/// observes the outcome; retries, if any, are the loader's business.
#[async_trait]
pub trait DataLoader: Send + Sync + 'static {
    async fn load(&self, request: LoadRequest) -> Result<EmojiData, DatasetLoadError>;
}
