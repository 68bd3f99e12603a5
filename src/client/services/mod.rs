pub mod image_intake;
pub mod search_service;
