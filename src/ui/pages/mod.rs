//! Application pages module
//!
//! - Portfolio page (home)
//! - Not found page

mod not_found;
mod portfolio;

pub use not_found::NotFoundPage;
pub use portfolio::{PortfolioPage, PortfolioView, use_view_controller};
