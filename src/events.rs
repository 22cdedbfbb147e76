//! Lifecycle notifications delivered to each picker.

use crate::data::DatasetLoadError;
use crate::framework::{BusEvent, EventBus, Subscription};
use crate::model::EmojiData;
use std::sync::Arc;

/// What a picker can be told about its dataset. Exactly one is emitted per load.
#[derive(Debug, Clone)]
pub enum PickerEvent {
    DataReady(Arc<EmojiData>),
    Error(DatasetLoadError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DataReady,
    Error,
}

impl EventKind {
    pub fn name(self) -> &'static str {
        match self {
            EventKind::DataReady => "data:ready",
            EventKind::Error => "error",
        }
    }
}

impl BusEvent for PickerEvent {
    type Kind = EventKind;

    fn kind(&self) -> EventKind {
        match self {
            PickerEvent::DataReady(_) => EventKind::DataReady,
            PickerEvent::Error(_) => EventKind::Error,
        }
    }
}

/// The event bus every picker instance owns.
pub type PickerEvents = EventBus<PickerEvent>;

impl EventBus<PickerEvent> {
    pub fn on_data_ready<F>(&self, listener: F) -> Subscription<PickerEvent>
    where
        F: Fn(&Arc<EmojiData>) + Send + Sync + 'static,
    {
        self.on(EventKind::DataReady, move |event| {
            if let PickerEvent::DataReady(data) = event {
                listener(data);
            }
        })
    }

    pub fn on_error<F>(&self, listener: F) -> Subscription<PickerEvent>
    where
        F: Fn(&DatasetLoadError) + Send + Sync + 'static,
    {
        self.on(EventKind::Error, move |event| {
            if let PickerEvent::Error(error) = event {
                listener(error);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn typed_helpers_only_see_their_kind() {
        let events = PickerEvents::new();
        let ready = Arc::new(Mutex::new(0));
        let errors = Arc::new(Mutex::new(Vec::new()));

        let r = ready.clone();
        events.on_data_ready(move |_| *r.lock().unwrap() += 1);
        let e = errors.clone();
        events.on_error(move |error| e.lock().unwrap().push(error.clone()));

        events.emit(PickerEvent::Error(DatasetLoadError::Parse("bad json".into())));
        assert_eq!(*ready.lock().unwrap(), 0);
        assert_eq!(
            *errors.lock().unwrap(),
            vec![DatasetLoadError::Parse("bad json".into())]
        );

        events.emit(PickerEvent::DataReady(Arc::new(EmojiData::default())));
        assert_eq!(*ready.lock().unwrap(), 1);
    }

    #[test]
    fn kinds_keep_their_wire_names() {
        assert_eq!(EventKind::DataReady.name(), "data:ready");
        assert_eq!(EventKind::Error.name(), "error");
    }
}
