pub mod env_keys;
pub mod service;
pub mod utilities;
pub mod view;
