//! Platform-agnostic state and helpers shared by the views.

pub mod carousel;
pub mod config;
pub mod contact;
pub mod language;
pub mod modal;
pub mod navigation;
pub mod platform;
pub mod storage;
pub mod store;
pub mod timing;
