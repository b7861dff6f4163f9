//! Site components

mod attribution;
mod charts;
mod email_checker;
mod layout;
mod seo_head;
mod stats;
mod theme;

pub use attribution::AttributionPopup;
pub use charts::*;
pub use email_checker::EmailChecker;
pub use layout::{SiteFooter, SiteHeader};
pub use seo_head::SeoHead;
pub use stats::StatsCard;
pub use theme::ThemeToggle;
