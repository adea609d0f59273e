pub mod badge;
pub mod button;

pub use badge::{Badge, StatusBadge};
pub use button::CustomButton;
