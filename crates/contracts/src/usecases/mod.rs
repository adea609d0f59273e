pub mod common;
pub mod u001_search_tours;
