//! # Picker Core
//!
//! > **Bootstrapping for an embeddable emoji picker.**
//!
//! This crate creates picker instances and coordinates the asynchronous, cross-instance
//! loading of the emoji dataset they display. Rendering, string bundles and the actual
//! fetching/parsing of data belong to the host; this crate is the glue that makes many
//! pickers cheap to create.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Create synchronously, load once
//!
//! [`create_picker`](lifecycle::PickerSystem::create_picker) always returns a rendered
//! picker immediately. The dataset arrives later and is announced on the picker's own
//! event bus. Creating ten pickers in the same locale starts **one** load; all ten join it.
//!
//! ### No hidden globals
//!
//! The dataset cache and the style injector are plain values owned by a
//! [`PickerSystem`](lifecycle::PickerSystem). Hosts share them by sharing the system (or
//! the `Arc`s); tests build a fresh one each and never see another test's state.
//!
//! ## 🚀 Core Concepts
//!
//! ### Settle-once loads
//! A [`DatasetHandle`](data::DatasetHandle) is a clonable view on one background load. It
//! is *pending* until the loader finishes, then *fulfilled* or *rejected* forever.
//!
//! ### Single-slot cache
//! [`DataCache`](data::DataCache) remembers only the last locale. Asking again for that
//! locale returns the same handle, settled or not; asking for another one evicts it. Failed
//! loads stay cached until the locale changes.
//!
//! ### Typed notifications
//! Each picker owns an [`EventBus`](framework::EventBus) of [`PickerEvent`](events::PickerEvent)s:
//! exactly one `DataReady` or `Error` per picker, delivered in subscription order.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Domain-free building blocks: [`SharedLoad`](framework::SharedLoad),
//! [`EventBus`](framework::EventBus), and the [`mock`](framework::mock) test kit.
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! [`PickerSystem`](lifecycle::PickerSystem) wires styles, options, cache, events and view
//! together; [`setup_tracing`](lifecycle::setup_tracing) configures logging.
//!
//! ### 3. The Data Layer ([`data`])
//! The [`DataLoader`](data::DataLoader) seam and the [`DataCache`](data::DataCache).
//!
//! ### 4. The Seams ([`view`], [`assets`])
//! Traits the host implements: [`ViewFactory`](view::ViewFactory),
//! [`PickerView`](view::PickerView), [`OptionsResolver`](view::OptionsResolver),
//! [`StyleHost`](assets::StyleHost).
//!
//! ### 5. Plain Data ([`model`], [`identity`], [`events`])
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run --bin picker-demo
//!
//! # Run the tests
//! cargo test
//! ```

pub mod assets;
pub mod data;
pub mod events;
pub mod framework;
pub mod identity;
pub mod lifecycle;
pub mod model;
pub mod view;
