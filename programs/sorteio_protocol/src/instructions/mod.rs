pub mod admin;
pub mod draw;
pub mod entry;
pub mod lifecycle;
pub mod settle;
