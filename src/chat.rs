pub mod chat_events;
pub mod chat_render;
mod chat_state;

pub use chat_state::ChatState;
