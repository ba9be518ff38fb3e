// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters implementing the port traits against real
//! facilities on this machine.

pub mod settings_store;

pub use settings_store::SettingsStore;
