//! Business rules over the repository traits.
//!
//! Every public operation runs in its own session: it commits on success and the
//! session is dropped (rolled back) on any error path.

pub mod config_matrix;
pub mod customer;
pub mod customer_note;
pub mod preset_config;
pub mod schema;

use fee_admin_api::ApiResult;
use fee_admin_db::repository::session::UnitOfWork;

pub struct FeeAdminService<U> {
    uow: U,
    delete_actor: String,
}

impl<U: UnitOfWork> FeeAdminService<U> {
    pub fn new(uow: U, delete_actor: impl Into<String>) -> Self {
        Self {
            uow,
            delete_actor: delete_actor.into(),
        }
    }

    pub fn unit_of_work(&self) -> &U {
        &self.uow
    }

    /// Check that storage is reachable
    pub async fn ping(&self) -> ApiResult<()> {
        self.uow.ping().await?;
        Ok(())
    }
}
