//! Seams to the view layer.
//!
//! Rendering lives outside the picker core. The core hands a view factory everything a
//! picker needs as one [`PickerDependencies`] bundle and gets back something that can
//! render synchronously.

pub mod i18n;
pub mod resolver;

pub use i18n::*;
pub use resolver::*;

use crate::data::DatasetHandle;
use crate::events::PickerEvents;
use crate::identity::PickerId;
use crate::model::{EmojiRecord, PickerOptions, Renderer};
use std::sync::Arc;

/// Everything a picker view is built from.
///
/// `emoji_data` may still be pending when the view is created; the view is expected to
/// render without it and re-render once `events` reports readiness.
#[derive(Debug)]
pub struct PickerDependencies {
    pub events: PickerEvents,
    pub i18n: Arc<Bundle>,
    pub custom_emojis: Vec<EmojiRecord>,
    pub renderer: Renderer,
    pub options: PickerOptions,
    pub emoji_data: DatasetHandle,
    pub picker_id: PickerId,
}

/// A constructed picker.
pub trait PickerView {
    /// Renders with whatever state is available right now. Must not block.
    fn render_sync(&mut self);

    fn picker_id(&self) -> &PickerId;
}

/// Builds picker views.
pub trait ViewFactory {
    type View: PickerView;

    fn create(&self, dependencies: PickerDependencies) -> Self::View;
}
