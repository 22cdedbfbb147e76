//! # Dataset Cache
//!
//! [`DataCache`] memoizes the dataset load across picker creations. It holds a single
//! slot: the most recently requested locale and its [`DatasetHandle`].
//!
//! | Request | Slot | Outcome |
//! |---------|------|---------|
//! | locale `L` | empty | start a load for `L`, store it |
//! | locale `L` | holds `L` | return the stored handle (pending, fulfilled or rejected) |
//! | locale `L` | holds `M != L` | evict `M`, start a load for `L`, store it |
//!
//! Evicted loads are not cancelled. They keep running and may settle, but the cache never
//! hands them out again. A rejected load stays cached until the locale changes; there is
//! no automatic retry.
//!
//! The cache is an ordinary value: hosts create one and share it (usually through a
//! [`PickerSystem`](crate::lifecycle::PickerSystem)), tests create a fresh one each.

use crate::data::{DataLoader, DatasetLoadError, LoadRequest};
use crate::framework::SharedLoad;
use crate::model::{EmojiData, LoaderParams, LocaleKey};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Shared handle on one dataset load.
pub type DatasetHandle = SharedLoad<Arc<EmojiData>, DatasetLoadError>;

struct CacheEntry {
    locale: LocaleKey,
    handle: DatasetHandle,
}

/// Single-slot, locale-keyed cache of dataset loads.
pub struct DataCache {
    loader: Arc<dyn DataLoader>,
    slot: Mutex<Option<CacheEntry>>,
}

impl DataCache {
    pub fn new(loader: Arc<dyn DataLoader>) -> Self {
        Self {
            loader,
            slot: Mutex::new(None),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<CacheEntry>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the handle for `locale`, starting a load if the slot holds another locale
    /// or nothing at all.
    ///
    /// Must be called from within a Tokio runtime; the load runs as a spawned task.
    pub fn get(&self, locale: &LocaleKey, params: LoaderParams) -> DatasetHandle {
        let mut slot = self.slot();

        match slot.as_ref() {
            Some(entry) if entry.locale == *locale => {
                debug!(%locale, state = ?entry.handle, "Dataset cache hit");
                return entry.handle.clone();
            }
            Some(entry) => {
                info!(previous = %entry.locale, %locale, "Locale changed, evicting cached dataset");
            }
            None => {}
        }

        let handle = self.start_load(LoadRequest::new(locale.clone(), params));
        *slot = Some(CacheEntry {
            locale: locale.clone(),
            handle: handle.clone(),
        });
        handle
    }

    fn start_load(&self, request: LoadRequest) -> DatasetHandle {
        info!(locale = %request.locale, "Starting dataset load");
        let loader = Arc::clone(&self.loader);

        SharedLoad::spawn(async move {
            let locale = request.locale.clone();
            match loader.load(request).await {
                Ok(data) => {
                    info!(%locale, emojis = data.len(), "Dataset loaded");
                    Ok(Arc::new(data))
                }
                Err(e) => {
                    warn!(%locale, error = %e, "Dataset load failed");
                    Err(e)
                }
            }
        })
    }

    /// Locale of the cached entry, if any.
    pub fn cached_locale(&self) -> Option<LocaleKey> {
        self.slot().as_ref().map(|entry| entry.locale.clone())
    }

    /// Empties the slot. A load still running is left to finish unobserved.
    pub fn clear(&self) {
        if let Some(entry) = self.slot().take() {
            debug!(locale = %entry.locale, "Dataset cache cleared");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{sample_data, MockLoader};

    fn cache_with(loader: &Arc<MockLoader>) -> DataCache {
        DataCache::new(loader.clone())
    }

    #[tokio::test]
    async fn same_locale_returns_identical_handle() {
        let loader = Arc::new(MockLoader::new());
        loader.expect_load().return_ok(sample_data("en"));
        let cache = cache_with(&loader);

        let first = cache.get(&"en".into(), LoaderParams::default());
        let second = cache.get(&"en".into(), LoaderParams::default());

        assert!(first.ptr_eq(&second));
        assert_eq!(first.settled().await.unwrap().locale, LocaleKey::new("en"));
        assert_eq!(loader.calls(), 1);
        loader.verify();
    }

    #[tokio::test]
    async fn locale_change_evicts_previous_entry() {
        let loader = Arc::new(MockLoader::new());
        loader.expect_load().return_ok(sample_data("en"));
        loader.expect_load().return_ok(sample_data("de"));
        loader.expect_load().return_ok(sample_data("en"));
        let cache = cache_with(&loader);

        let en = cache.get(&"en".into(), LoaderParams::default());
        let de = cache.get(&"de".into(), LoaderParams::default());
        let en_again = cache.get(&"en".into(), LoaderParams::default());

        assert!(!en.ptr_eq(&en_again));
        assert_eq!(cache.cached_locale(), Some(LocaleKey::new("en")));
        for handle in [&en, &de, &en_again] {
            handle.settled().await.unwrap();
        }
        assert_eq!(loader.calls(), 3);
        loader.verify();
    }

    #[tokio::test]
    async fn rejected_load_stays_cached_without_retry() {
        let loader = Arc::new(MockLoader::new());
        loader
            .expect_load()
            .return_err(DatasetLoadError::Fetch("offline".into()));
        let cache = cache_with(&loader);

        let first = cache.get(&"en".into(), LoaderParams::default());
        assert_eq!(
            first.settled().await,
            Err(DatasetLoadError::Fetch("offline".into()))
        );

        let second = cache.get(&"en".into(), LoaderParams::default());
        assert!(first.ptr_eq(&second));
        assert!(matches!(second.state(), crate::framework::LoadState::Rejected(_)));
        assert_eq!(loader.calls(), 1);
    }

    #[tokio::test]
    async fn pending_load_is_joined_not_restarted() {
        let loader = Arc::new(MockLoader::new());
        let gate = loader.expect_load().hold();
        let cache = cache_with(&loader);

        let first = cache.get(&"en".into(), LoaderParams::default());
        tokio::task::yield_now().await;
        let second = cache.get(&"en".into(), LoaderParams::default());
        assert!(second.state().is_pending());

        gate.fulfill(sample_data("en"));
        let (a, b) = tokio::join!(first.settled(), second.settled());
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
        assert_eq!(loader.calls(), 1);
    }

    #[tokio::test]
    async fn clear_forces_a_fresh_load() {
        let loader = Arc::new(MockLoader::new());
        loader.expect_load().return_ok(sample_data("en"));
        loader.expect_load().return_ok(sample_data("en"));
        let cache = cache_with(&loader);

        let first = cache.get(&"en".into(), LoaderParams::default());
        first.settled().await.unwrap();
        cache.clear();
        assert_eq!(cache.cached_locale(), None);

        let second = cache.get(&"en".into(), LoaderParams::default());
        assert!(!first.ptr_eq(&second));
        second.settled().await.unwrap();
        assert_eq!(loader.calls(), 2);
    }

    #[tokio::test]
    async fn loader_receives_resolved_params() {
        let loader = Arc::new(MockLoader::new());
        loader.expect_load().return_ok(sample_data("ja"));
        let cache = cache_with(&loader);

        let params = LoaderParams {
            messages: Some(serde_json::json!({ "groups": [] })),
            ..LoaderParams::default()
        };
        cache.get(&"ja".into(), params).settled().await.unwrap();

        let requests = loader.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].locale, LocaleKey::new("ja"));
        assert_eq!(requests[0].messages, Some(serde_json::json!({ "groups": [] })));
    }
}
