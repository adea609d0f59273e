pub mod u001_search_tours;
