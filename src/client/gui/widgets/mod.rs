pub mod error_modal;
pub mod marketplace_card;
