pub mod handlers;
pub mod icons;
