pub mod cache_service;
pub mod clipboard_service;
pub mod fetcher;
pub mod search_index;

#[cfg(test)]
mod cache_service_test;
