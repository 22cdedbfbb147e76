use picker_core::assets::AssetInjector;
use picker_core::data::DataCache;
use picker_core::events::PickerEvent;
use picker_core::framework::mock::{
    sample_data, EventProbe, MockLoader, RecordingStyleHost, RecordingViewFactory,
};
use picker_core::lifecycle::PickerSystem;
use picker_core::model::{LocaleKey, PartialPickerOptions};
use std::sync::Arc;

fn system(
    loader: &Arc<MockLoader>,
    cache: Option<Arc<DataCache>>,
) -> PickerSystem<RecordingViewFactory> {
    PickerSystem::new(
        cache.unwrap_or_else(|| Arc::new(DataCache::new(loader.clone()))),
        Arc::new(AssetInjector::new(RecordingStyleHost::new())),
        RecordingViewFactory,
    )
}

/// Switching locale while a load is in flight discards it from the cache without
/// cancelling it. The picker that asked for it still gets its data; later pickers never do.
#[tokio::test]
async fn test_in_flight_load_is_discarded_not_cancelled() {
    let loader = Arc::new(MockLoader::new());
    let en_gate = loader.expect_load().hold();
    loader.expect_load().return_ok(sample_data("de"));
    let system = system(&loader, None);

    let en = system.create_picker(PartialPickerOptions::default().with_locale("en"));
    let mut en_probe = EventProbe::attach(en.events());
    tokio::task::yield_now().await;

    let de = system.create_picker(PartialPickerOptions::default().with_locale("de"));
    let mut de_probe = EventProbe::attach(de.events());
    assert_eq!(system.cache().cached_locale(), Some(LocaleKey::new("de")));

    match de_probe.next().await {
        Some(PickerEvent::DataReady(data)) => assert_eq!(data.locale, LocaleKey::new("de")),
        other => panic!("expected de data, got {other:?}"),
    }
    assert!(en.emoji_data().state().is_pending());

    en_gate.fulfill(sample_data("en"));
    match en_probe.next().await {
        Some(PickerEvent::DataReady(data)) => assert_eq!(data.locale, LocaleKey::new("en")),
        other => panic!("expected en data, got {other:?}"),
    }
    assert!(de_probe.try_next().is_none());
    assert_eq!(loader.calls(), 2);
}

/// Two systems handed the same cache share its loads.
#[tokio::test]
async fn test_shared_cache_across_systems() {
    let loader = Arc::new(MockLoader::new());
    loader.expect_load().return_ok(sample_data("en"));
    let cache = Arc::new(DataCache::new(loader.clone()));

    let a = system(&loader, Some(cache.clone()));
    let b = system(&loader, Some(cache));

    let first = a.create_picker(PartialPickerOptions::default());
    let second = b.create_picker(PartialPickerOptions::default());
    assert!(first.emoji_data().ptr_eq(second.emoji_data()));

    let mut probe = EventProbe::attach(second.events());
    assert!(matches!(probe.next().await, Some(PickerEvent::DataReady(_))));
    assert_eq!(loader.calls(), 1);
}

/// Fresh caches do not see each other's entries.
#[tokio::test]
async fn test_fresh_cache_per_system_is_isolated() {
    let loader = Arc::new(MockLoader::new());
    loader.expect_load().return_ok(sample_data("en"));
    loader.expect_load().return_ok(sample_data("en"));

    let a = system(&loader, None);
    let b = system(&loader, None);

    let first = a.create_picker(PartialPickerOptions::default());
    let second = b.create_picker(PartialPickerOptions::default());
    assert!(!first.emoji_data().ptr_eq(second.emoji_data()));

    first.emoji_data().settled().await.unwrap();
    second.emoji_data().settled().await.unwrap();
    assert_eq!(loader.calls(), 2);
    loader.verify();
}
