//! # Picker System
//!
//! The orchestrator: turns host options into a rendered picker wired to the shared
//! dataset cache.

use crate::assets::{AssetInjector, PICKER_STYLES};
use crate::data::{DataCache, DatasetHandle};
use crate::events::{PickerEvent, PickerEvents};
use crate::identity::{IdentityGenerator, PickerId};
use crate::model::{EmojiRecord, PartialPickerOptions};
use crate::view::{
    Bundle, DefaultOptionsResolver, OptionsResolver, PickerDependencies, PickerView, ViewFactory,
};
use std::sync::Arc;
use tracing::{debug, info, info_span, instrument, warn, Instrument};

/// The entry point that creates pickers.
///
/// `PickerSystem` is responsible for:
/// - **Shared Resources**: Owning the dataset cache and the style injector every picker shares
/// - **Dependency Wiring**: Resolving options and bundling everything a view needs
/// - **Readiness**: Connecting each picker's event bus to the (possibly shared) dataset load
///
/// # Lifecycle of `create_picker`
///
/// ```text
/// inject styles ─► resolve options ─► normalize custom entries ─► new event bus
///      ─► cache lookup ─► build view ─► render_sync ─► spawn readiness ─► return
/// ```
///
/// Everything up to the return is synchronous. The continuation is spawned only after the
/// view has subscribed to its bus, and emits exactly one of [`PickerEvent::DataReady`] or
/// [`PickerEvent::Error`] there. On a current-thread runtime it runs after `create_picker`
/// returns; on a multi-thread runtime it may run on another worker straight away.
///
/// # Example
///
/// ```ignore
/// let cache = Arc::new(DataCache::new(loader));
/// let injector = Arc::new(AssetInjector::new(host));
/// let system = PickerSystem::new(cache, injector, MyViewFactory);
///
/// let picker = system.create_picker(PartialPickerOptions::default().with_locale("de"));
/// ```
pub struct PickerSystem<F: ViewFactory> {
    view_factory: F,
    resolver: Box<dyn OptionsResolver>,
    cache: Arc<DataCache>,
    injector: Arc<AssetInjector>,
    ids: IdentityGenerator,
}

impl<F: ViewFactory> PickerSystem<F> {
    /// Creates a system around an existing cache and injector.
    ///
    /// Passing the same cache and injector to several systems makes them share the
    /// dataset and inject styles once between them.
    pub fn new(cache: Arc<DataCache>, injector: Arc<AssetInjector>, view_factory: F) -> Self {
        Self {
            view_factory,
            resolver: Box::new(DefaultOptionsResolver::default()),
            cache,
            injector,
            ids: IdentityGenerator::default(),
        }
    }

    /// Replaces the [`DefaultOptionsResolver`].
    pub fn with_resolver(mut self, resolver: impl OptionsResolver) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn cache(&self) -> &Arc<DataCache> {
        &self.cache
    }

    /// Builds, renders and returns a picker without waiting for its data.
    ///
    /// Must be called from within a Tokio runtime.
    #[instrument(skip_all, fields(picker_id))]
    pub fn create_picker(&self, options: PartialPickerOptions) -> F::View {
        self.injector.apply(PICKER_STYLES);

        let options = self.resolver.resolve(options);
        let custom_emojis: Vec<EmojiRecord> =
            options.custom.iter().cloned().map(EmojiRecord::from).collect();
        let events = PickerEvents::new();

        let emoji_data = self.cache.get(&options.locale, options.loader_params());
        let i18n = Arc::new(Bundle::new(&options.i18n));

        let picker_id = self.ids.next_id();
        tracing::Span::current().record("picker_id", picker_id.as_str());
        debug!(locale = %options.locale, custom = custom_emojis.len(), "Resolved options");

        let mut picker = self.view_factory.create(PickerDependencies {
            events: events.clone(),
            i18n,
            custom_emojis,
            renderer: options.renderer.clone(),
            emoji_data: emoji_data.clone(),
            picker_id: picker_id.clone(),
            options,
        });
        picker.render_sync();

        // The bus does not replay, so the view must be subscribed before the
        // continuation exists. On a multi-thread runtime it may run at once.
        wire_readiness(picker_id, emoji_data, events);

        info!("Picker created");
        picker
    }
}

/// Emits the outcome of `emoji_data` on `events` once it settles.
fn wire_readiness(picker_id: PickerId, emoji_data: DatasetHandle, events: PickerEvents) {
    let span = info_span!("readiness", %picker_id);
    tokio::spawn(
        async move {
            match emoji_data.settled().await {
                Ok(data) => {
                    let listeners = events.emit(PickerEvent::DataReady(data));
                    debug!(listeners, "Data ready");
                }
                Err(error) => {
                    warn!(%error, "Data load failed");
                    events.emit(PickerEvent::Error(error));
                }
            }
        }
        .instrument(span),
    );
}
