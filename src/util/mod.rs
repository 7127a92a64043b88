//! Helpers shared across the managers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pure modules (`timing`, `easing`, `events`, `storage`) build and test
//! without a browser. `dom` and `visibility` wrap `web-sys` and only exist
//! under the `hydrate` feature.

pub mod easing;
pub mod events;
pub mod storage;
pub mod timing;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod visibility;
