pub mod navigation;
pub mod scroll;
pub mod search;
pub mod site_config;
