pub mod aggregate;
pub mod dates;
pub mod handlers;
