#[cfg(test)]
pub mod test_utils {
    use chrono::NaiveDate;
    use fee_admin_db::models::customer::CustomerModel;
    use fee_admin_db::models::fee_config::{ConfigSource, NewConfigMatrix};

    pub fn create_test_entry(customer: &CustomerModel, source: ConfigSource, effective_from: &str) -> NewConfigMatrix {
        NewConfigMatrix {
            customer_id: customer.id.clone(),
            source,
            effective_from: NaiveDate::parse_from_str(effective_from, "%Y-%m-%d").unwrap(),
        }
    }
}
