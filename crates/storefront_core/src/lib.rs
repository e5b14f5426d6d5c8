//! Order flow and notification core for the storefront landing page.
//!
//! Components are plain state machines driven by UI events and by timers on
//! a virtual clock ([`scheduler::Scheduler`]). Rendering and tweening are
//! collaborators behind [`render::RenderSurface`] and
//! [`animation::AnimationService`]; [`Storefront`] wires them together.

pub mod animation;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod effects;
pub mod error;
pub mod fields;
pub mod notifications;
pub mod order_flow;
pub mod render;
pub mod scheduler;
mod storefront;
pub mod view;

pub use animation::{AnimationService, NoopAnimation};
pub use config::StorefrontConfig;
pub use error::{FlowError, ValidationError};
pub use render::{MemorySurface, RenderSurface};
pub use storefront::Storefront;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
