//! Core view model of the portfolio page: sections, view state, the
//! controller that drives it, animation descriptors and compiled-in content

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
mod controller;
pub mod motion;
pub mod scheduler;
mod section;
mod view_state;

pub use controller::{ChangeListener, LOADING_DELAY, ViewController};
pub use scheduler::{ManualScheduler, Scheduler};
pub use section::{Section, UnknownSection};
pub use view_state::{Layout, NavItem, Phase, ViewState};
