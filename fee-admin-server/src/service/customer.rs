use fee_admin_api::{
    validate_page, ApiError, ApiResult, CustomerCreate, CustomerListQuery, CustomerListResponse,
    CustomerOut, CustomerUpdate,
};
use fee_admin_db::models::customer::NewCustomer;
use fee_admin_db::repository::pagination::PageRequest;
use fee_admin_db::repository::session::{Session, UnitOfWork};
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use super::FeeAdminService;

pub(crate) const CUSTOMER_NOT_FOUND: &str = "Customer not found";

impl<U: UnitOfWork> FeeAdminService<U> {
    pub async fn list_customers(&self, query: &CustomerListQuery) -> ApiResult<CustomerListResponse> {
        let (limit, offset) = validate_page(query.limit, query.offset)?;
        let session = self.uow.begin().await?;

        let page = session
            .customers()
            .search(query.search.as_deref(), PageRequest::new(limit, offset))
            .await?;
        session.commit().await?;

        debug!(total = page.total, returned = page.items.len(), "listed customers");
        Ok(CustomerListResponse {
            total: page.total,
            customers: page.items.into_iter().map(CustomerOut::from).collect(),
        })
    }

    pub async fn get_customer(&self, id: &str) -> ApiResult<CustomerOut> {
        let session = self.uow.begin().await?;
        let customer = session
            .customers()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found(CUSTOMER_NOT_FOUND))?;
        session.commit().await?;
        Ok(customer.into())
    }

    /// Create a customer. A missing or empty id is replaced by a random UUID.
    pub async fn create_customer(&self, body: CustomerCreate) -> ApiResult<CustomerOut> {
        body.validate()?;
        let id = match body.id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => Uuid::new_v4().to_string(),
        };
        let new_customer = NewCustomer::from_request(&id, &body)?;

        let session = self.uow.begin().await?;
        let customer = session.customers().create(new_customer).await?;
        session.commit().await?;

        info!(customer_id = %customer.id, "customer created");
        Ok(customer.into())
    }

    pub async fn update_customer(&self, id: &str, body: CustomerUpdate) -> ApiResult<CustomerOut> {
        body.validate_patch()?;

        let session = self.uow.begin().await?;
        let mut customer = session
            .customers()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found(CUSTOMER_NOT_FOUND))?;
        if body.is_empty() {
            return Err(ApiError::validation("No fields to update"));
        }

        customer.apply_update(&body)?;
        let customer = session.customers().update(&customer).await?;
        session.commit().await?;

        info!(customer_id = %customer.id, "customer updated");
        Ok(customer.into())
    }

    pub async fn delete_customer(&self, id: &str) -> ApiResult<()> {
        let session = self.uow.begin().await?;
        if !session.customers().soft_delete(id, &self.delete_actor).await? {
            return Err(ApiError::not_found(CUSTOMER_NOT_FOUND));
        }
        session.commit().await?;

        info!(customer_id = %id, actor = %self.delete_actor, "customer deleted");
        Ok(())
    }
}
