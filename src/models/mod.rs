//! Data models for the fleet scheduling core.

mod assignment;
mod driver;
mod journey;
mod notification;
mod route;
mod shift_template;

pub use assignment::{Assignment, AssignmentStatus};
pub use driver::{Driver, DriverStatus};
pub use journey::Journey;
pub use notification::NotificationPreferences;
pub use route::Route;
pub use shift_template::{ShiftTemplate, TemplateStatus};
