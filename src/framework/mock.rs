//! # Mock Framework & Testing Guide
//!
//! In-memory stand-ins for every external collaborator of a
//! [`PickerSystem`](crate::lifecycle::PickerSystem), so tests can drive the whole
//! creation/readiness flow deterministically and without I/O.
//!
//! | Collaborator | Stand-in | What it records |
//! |--------------|----------|-----------------|
//! | [`DataLoader`] | [`MockLoader`] | every [`LoadRequest`], scripted outcomes |
//! | [`StyleHost`] | [`RecordingStyleHost`] | every applied payload |
//! | [`ViewFactory`] | [`RecordingViewFactory`] | renders and received events per view |
//!
//! ## Scripting loads
//!
//! ```ignore
//! let loader = Arc::new(MockLoader::new());
//! loader.expect_load().return_ok(sample_data("en"));          // settles on first poll
//! loader.expect_load().return_err(DatasetLoadError::Aborted); // rejects on first poll
//! let gate = loader.expect_load().hold();                     // stays pending...
//! gate.fulfill(sample_data("de"));                            // ...until released
//! loader.verify();                                            // all expectations consumed
//! ```
//!
//! Expectations are consumed in order, one per loader invocation. An invocation with no
//! expectation left rejects with [`DatasetLoadError::Fetch`] so the test sees it.
//!
//! ## Waiting for readiness
//!
//! Readiness is emitted from a spawned task. Attach an [`EventProbe`] to a picker's bus
//! *before* yielding to the runtime and await [`EventProbe::next`].

use crate::assets::StyleHost;
use crate::data::{DataLoader, DatasetHandle, DatasetLoadError, LoadRequest};
use crate::events::{PickerEvent, PickerEvents};
use crate::identity::PickerId;
use crate::model::{EmojiData, EmojiGroup, EmojiRecord, LocaleKey, PickerOptions};
use crate::view::{PickerDependencies, PickerView, ViewFactory};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

type LoadResult = Result<EmojiData, DatasetLoadError>;

// =============================================================================
// MOCK LOADER
// =============================================================================

enum Expectation {
    Ready(LoadResult),
    Held(oneshot::Receiver<LoadResult>),
}

/// A [`DataLoader`] with expectation tracking for fluent testing.
#[derive(Default)]
pub struct MockLoader {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Arc<Mutex<Vec<LoadRequest>>>,
}

impl MockLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one more load.
    pub fn expect_load(&self) -> LoadExpectationBuilder {
        LoadExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Number of times the loader has been invoked.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<LoadRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all load expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl DataLoader for MockLoader {
    async fn load(&self, request: LoadRequest) -> LoadResult {
        let locale = request.locale.clone();
        self.requests.lock().unwrap().push(request);
        let expectation = self.expectations.lock().unwrap().pop_front();

        match expectation {
            Some(Expectation::Ready(result)) => result,
            Some(Expectation::Held(gate)) => gate.await.unwrap_or(Err(DatasetLoadError::Aborted)),
            None => Err(DatasetLoadError::Fetch(format!("unexpected load for locale {locale}"))),
        }
    }
}

/// Builder for load expectations.
pub struct LoadExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl LoadExpectationBuilder {
    /// The load fulfills with `data`.
    pub fn return_ok(self, data: EmojiData) {
        self.push(Expectation::Ready(Ok(data)));
    }

    /// The load rejects with `error`.
    pub fn return_err(self, error: DatasetLoadError) {
        self.push(Expectation::Ready(Err(error)));
    }

    /// The load stays pending until the returned gate is released.
    pub fn hold(self) -> LoadGate {
        let (sender, receiver) = oneshot::channel();
        self.push(Expectation::Held(receiver));
        LoadGate { sender }
    }

    fn push(self, expectation: Expectation) {
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Releases a held load. Dropping it unreleased makes the load reject with
/// [`DatasetLoadError::Aborted`].
pub struct LoadGate {
    sender: oneshot::Sender<LoadResult>,
}

impl LoadGate {
    pub fn fulfill(self, data: EmojiData) {
        let _ = self.sender.send(Ok(data));
    }

    pub fn reject(self, error: DatasetLoadError) {
        let _ = self.sender.send(Err(error));
    }
}

/// A small dataset tagged with `locale`.
pub fn sample_data(locale: &str) -> EmojiData {
    let record = |emoji: &str, label: &str, tags: &[&str]| EmojiRecord {
        label: label.to_string(),
        emoji: Some(emoji.to_string()),
        url: None,
        group: Some(0),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        custom: false,
    };

    EmojiData {
        locale: LocaleKey::new(locale),
        groups: vec![EmojiGroup {
            key: "smileys-emotion".into(),
            order: 0,
            message: "Smileys & Emotion".into(),
        }],
        emojis: vec![
            record("😀", "grinning face", &["face", "grin"]),
            record("😂", "face with tears of joy", &["face", "joy", "laugh"]),
            record("🙂", "slightly smiling face", &["face", "smile"]),
        ],
    }
}

// =============================================================================
// RECORDING STYLE HOST
// =============================================================================

/// A [`StyleHost`] that remembers every payload. Clones share the record.
#[derive(Clone, Default)]
pub struct RecordingStyleHost {
    applied: Arc<Mutex<Vec<String>>>,
}

impl RecordingStyleHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Vec<String> {
        self.applied.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.applied.lock().unwrap().len()
    }
}

impl StyleHost for RecordingStyleHost {
    fn apply_styles(&self, css: &str) {
        self.applied.lock().unwrap().push(css.to_string());
    }
}

// =============================================================================
// RECORDING VIEW
// =============================================================================

/// What a [`RecordingView`] has seen so far.
#[derive(Debug, Clone, Default)]
pub struct ViewLog {
    /// Number of renders, including reactive re-renders on readiness.
    pub renders: usize,
    /// For each render, whether the dataset was available at that time.
    pub rendered_with_data: Vec<bool>,
    pub ready: Vec<Arc<EmojiData>>,
    pub errors: Vec<DatasetLoadError>,
}

/// Builds [`RecordingView`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordingViewFactory;

impl ViewFactory for RecordingViewFactory {
    type View = RecordingView;

    fn create(&self, dependencies: PickerDependencies) -> RecordingView {
        RecordingView::new(dependencies)
    }
}

/// A view that renders nothing and records everything.
///
/// Like a real picker it subscribes to its own bus at construction and re-renders when
/// the dataset becomes ready.
pub struct RecordingView {
    dependencies: PickerDependencies,
    log: Arc<Mutex<ViewLog>>,
}

impl RecordingView {
    fn new(dependencies: PickerDependencies) -> Self {
        let log = Arc::new(Mutex::new(ViewLog::default()));

        let on_ready = log.clone();
        dependencies.events.on_data_ready(move |data| {
            let mut log = on_ready.lock().unwrap();
            log.ready.push(data.clone());
            log.renders += 1;
            log.rendered_with_data.push(true);
        });
        let on_error = log.clone();
        dependencies.events.on_error(move |error| {
            on_error.lock().unwrap().errors.push(error.clone());
        });

        Self { dependencies, log }
    }

    pub fn log(&self) -> ViewLog {
        self.log.lock().unwrap().clone()
    }

    pub fn events(&self) -> &PickerEvents {
        &self.dependencies.events
    }

    pub fn emoji_data(&self) -> &DatasetHandle {
        &self.dependencies.emoji_data
    }

    pub fn custom_emojis(&self) -> &[EmojiRecord] {
        &self.dependencies.custom_emojis
    }

    pub fn options(&self) -> &PickerOptions {
        &self.dependencies.options
    }
}

impl PickerView for RecordingView {
    fn render_sync(&mut self) {
        let has_data = self.dependencies.emoji_data.state().is_fulfilled();
        let mut log = self.log.lock().unwrap();
        log.renders += 1;
        log.rendered_with_data.push(has_data);
    }

    fn picker_id(&self) -> &PickerId {
        &self.dependencies.picker_id
    }
}

// =============================================================================
// EVENT PROBE
// =============================================================================

/// Collects every event emitted on a bus after it was attached.
pub struct EventProbe {
    receiver: mpsc::UnboundedReceiver<PickerEvent>,
}

impl EventProbe {
    const WAIT: Duration = Duration::from_secs(5);

    pub fn attach(events: &PickerEvents) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let ready = sender.clone();
        events.on_data_ready(move |data| {
            let _ = ready.send(PickerEvent::DataReady(data.clone()));
        });
        events.on_error(move |error| {
            let _ = sender.send(PickerEvent::Error(error.clone()));
        });
        Self { receiver }
    }

    /// Waits for the next event; `None` if nothing arrives in time.
    pub async fn next(&mut self) -> Option<PickerEvent> {
        tokio::time::timeout(Self::WAIT, self.receiver.recv())
            .await
            .ok()
            .flatten()
    }

    /// The next event if one has already been delivered.
    pub fn try_next(&mut self) -> Option<PickerEvent> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_loader_replays_expectations_in_order() {
        let loader = MockLoader::new();
        loader.expect_load().return_ok(sample_data("en"));
        loader
            .expect_load()
            .return_err(DatasetLoadError::Parse("truncated".into()));

        let first = loader.load(LoadRequest::new("en".into(), Default::default())).await;
        let second = loader.load(LoadRequest::new("de".into(), Default::default())).await;

        assert_eq!(first.unwrap().locale, LocaleKey::new("en"));
        assert_eq!(second, Err(DatasetLoadError::Parse("truncated".into())));
        assert_eq!(loader.calls(), 2);
        loader.verify();
    }

    #[tokio::test]
    async fn unexpected_load_is_rejected() {
        let loader = MockLoader::new();
        let result = loader.load(LoadRequest::new("en".into(), Default::default())).await;
        assert!(matches!(result, Err(DatasetLoadError::Fetch(_))));
    }

    #[tokio::test]
    async fn dropped_gate_aborts_the_load() {
        let loader = MockLoader::new();
        drop(loader.expect_load().hold());
        let result = loader.load(LoadRequest::new("en".into(), Default::default())).await;
        assert_eq!(result, Err(DatasetLoadError::Aborted));
    }
}
