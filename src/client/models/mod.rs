pub mod api;
pub mod messages;
pub mod search_state;
