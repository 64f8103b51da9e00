pub mod inventory;
pub mod list;
