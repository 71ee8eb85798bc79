pub mod header;
pub mod icon;
pub mod loading;
pub mod motion;
pub mod nav;
pub mod pages;
pub mod sections;

pub use header::HeroHeader;
pub use icon::{Icon, icons};
pub use loading::LoadingScreen;
pub use motion::{MotionContext, provide_motion_context, use_motion_context};
pub use nav::SectionNav;
pub use pages::{NotFoundPage, PortfolioPage, PortfolioView, use_view_controller};
pub use sections::ContentBlock;
