pub mod handlers;
pub mod highlight;
