pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use error::Problem;
pub use routes::router;
