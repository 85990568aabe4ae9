//! Notification module
//!
//! Transient messages drawn over the top-right corner: copy confirmations,
//! failed lookups, config warnings.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationKind, NotificationState};
