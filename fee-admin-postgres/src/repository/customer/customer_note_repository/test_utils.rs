#[cfg(test)]
pub mod test_utils {
    use fee_admin_db::models::customer::{CustomerModel, NewCustomerNote};
    use fee_admin_db::repository::customer_repository::CustomerRepository;
    use fee_admin_db::repository::session::Session;

    use crate::repository::customer::customer_repository::test_utils::test_utils::create_test_customer;
    use crate::PostgresSession;

    /// Insert a customer the notes under test can belong to
    pub async fn create_owner(
        session: &PostgresSession,
    ) -> Result<CustomerModel, Box<dyn std::error::Error + Send + Sync>> {
        Ok(session.customers().create(create_test_customer("Note Owner")).await?)
    }

    pub fn create_test_note(owner: &CustomerModel, text: &str) -> NewCustomerNote {
        NewCustomerNote {
            customer_id: owner.id.clone(),
            note: text.to_string(),
        }
    }
}
