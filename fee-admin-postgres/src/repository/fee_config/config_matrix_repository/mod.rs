pub mod repo_impl;
pub mod count_by_preset;
pub mod create;
pub mod find_by_id;
pub mod find_view;
pub mod list_views;
pub mod soft_delete;
pub mod update;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ConfigMatrixRepositoryImpl;
