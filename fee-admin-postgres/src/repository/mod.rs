pub mod customer;
pub mod db_init;
pub mod fee_config;
pub mod schema;
