pub mod dataset;
pub mod fold;
pub mod models;

#[cfg(test)]
mod dataset_test;
