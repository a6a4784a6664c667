pub mod repo_impl;
pub mod create;
pub mod find_by_id;
pub mod search;
pub mod soft_delete;
pub mod update;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::CustomerRepositoryImpl;
