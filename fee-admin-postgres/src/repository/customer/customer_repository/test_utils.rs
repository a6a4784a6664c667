#[cfg(test)]
pub mod test_utils {
    use fee_admin_db::models::customer::NewCustomer;
    use heapless::String as HeaplessString;
    use uuid::Uuid;

    pub fn create_test_customer(name: &str) -> NewCustomer {
        let id = Uuid::new_v4().to_string();
        NewCustomer {
            id: HeaplessString::try_from(id.as_str()).unwrap(),
            name: HeaplessString::try_from(name).unwrap(),
            email: HeaplessString::try_from(format!("{}@example.com", &id[..8]).as_str()).unwrap(),
            phone: None,
            address: None,
            date_of_birth: None,
        }
    }
}
