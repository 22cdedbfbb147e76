//! # Picker Demo
//!
//! Creates a handful of pickers against a simulated loader and logs what happens:
//! 1.  Two pickers in `en` share one load.
//! 2.  A `de` picker evicts the `en` entry and starts a second load.
//! 3.  A picker in an unsupported locale receives an error event instead of data.
//!
//! ```bash
//! RUST_LOG=info cargo run --bin picker-demo
//! ```

use async_trait::async_trait;
use picker_core::assets::{AssetInjector, StyleHost};
use picker_core::data::{DataCache, DataLoader, DatasetLoadError, LoadRequest};
use picker_core::identity::PickerId;
use picker_core::lifecycle::{setup_tracing, PickerSystem};
use picker_core::model::{EmojiData, EmojiRecord, PartialPickerOptions};
use picker_core::view::{PickerDependencies, PickerView, ViewFactory};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tracing::{error, info, info_span, Instrument};

/// Pretends to fetch a dataset over a slow network.
struct DemoLoader;

#[async_trait]
impl DataLoader for DemoLoader {
    async fn load(&self, request: LoadRequest) -> Result<EmojiData, DatasetLoadError> {
        tokio::time::sleep(Duration::from_millis(150)).await;

        let labels: &[(&str, &str)] = match request.locale.as_str() {
            "en" => &[("😀", "grinning face"), ("🎉", "party popper")],
            "de" => &[("😀", "grinsendes Gesicht"), ("🎉", "Konfettibombe")],
            other => return Err(DatasetLoadError::Fetch(format!("no dataset for locale {other}"))),
        };

        Ok(EmojiData {
            locale: request.locale,
            groups: Vec::new(),
            emojis: labels
                .iter()
                .map(|(emoji, label)| EmojiRecord {
                    label: label.to_string(),
                    emoji: Some(emoji.to_string()),
                    url: None,
                    group: None,
                    tags: Vec::new(),
                    custom: false,
                })
                .collect(),
        })
    }
}

struct LogStyleHost;

impl StyleHost for LogStyleHost {
    fn apply_styles(&self, css: &str) {
        info!(lines = css.lines().count(), "Applying picker stylesheet");
    }
}

/// A view that "renders" to the log and signals once its data settles.
struct ConsoleView {
    dependencies: PickerDependencies,
    settled: Arc<Notify>,
}

impl ConsoleView {
    async fn wait_settled(&self) {
        self.settled.notified().await;
    }
}

impl PickerView for ConsoleView {
    fn render_sync(&mut self) {
        let state = self.dependencies.emoji_data.state();
        info!(
            picker_id = %self.dependencies.picker_id,
            loading = state.is_pending(),
            custom = self.dependencies.custom_emojis.len(),
            "{}",
            self.dependencies.i18n.get_or("loading", "Loading...")
        );
    }

    fn picker_id(&self) -> &PickerId {
        &self.dependencies.picker_id
    }
}

struct ConsoleViewFactory;

impl ViewFactory for ConsoleViewFactory {
    type View = ConsoleView;

    fn create(&self, dependencies: PickerDependencies) -> ConsoleView {
        let settled = Arc::new(Notify::new());

        let picker_id = dependencies.picker_id.clone();
        let notify = settled.clone();
        dependencies.events.on_data_ready(move |data| {
            info!(%picker_id, locale = %data.locale, emojis = data.len(), "Re-rendering with data");
            notify.notify_one();
        });

        let picker_id = dependencies.picker_id.clone();
        let notify = settled.clone();
        dependencies.events.on_error(move |e| {
            error!(%picker_id, error = %e, "Showing error view");
            notify.notify_one();
        });

        ConsoleView { dependencies, settled }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting picker demo");

    let cache = Arc::new(DataCache::new(Arc::new(DemoLoader)));
    let injector = Arc::new(AssetInjector::new(LogStyleHost));
    let system = PickerSystem::new(cache, injector, ConsoleViewFactory);

    let english = PartialPickerOptions::from_json(
        r#"{
            "locale": "en",
            "custom": [{ "label": "Ferris", "emoji": "🦀", "tags": ["crab"] }]
        }"#,
    )
    .map_err(|e| e.to_string())?;

    let pickers = {
        let _span = info_span!("creation").entered();
        vec![
            system.create_picker(english.clone()),
            system.create_picker(english),
            system.create_picker(PartialPickerOptions::default().with_locale("de")),
            system.create_picker(PartialPickerOptions::default().with_locale("tlh")),
        ]
    };
    info!(count = pickers.len(), "All pickers returned before any data arrived");

    async {
        for picker in &pickers {
            picker.wait_settled().await;
        }
    }
    .instrument(info_span!("readiness"))
    .await;

    info!("Picker demo completed");
    Ok(())
}
