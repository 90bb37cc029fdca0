//! Transient status messages shown over the UI
//!
//! Any page can raise one through `App::notification`.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
