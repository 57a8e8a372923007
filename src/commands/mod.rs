pub mod list;
pub mod refresh;
pub mod registry;
pub mod show;
