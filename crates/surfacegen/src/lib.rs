pub mod config;
pub mod constants;
pub mod grid;
pub mod mesh_data;
pub mod ocean;
pub mod orbit;
pub mod pulse;
pub mod shudder;
pub mod spring;
pub mod terrain;
pub mod timeline;
pub mod tools;

pub use config::get_config;
