use chrono::{DateTime, NaiveDate, Utc};
use fee_admin_api::{
    ApiResult, CustomerCreate, CustomerOut, CustomerUpdate, CUSTOMER_EMAIL_MAX_LEN,
    CUSTOMER_ID_MAX_LEN, CUSTOMER_NAME_MAX_LEN, CUSTOMER_PHONE_MAX_LEN,
};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;
use crate::models::soft_delete::{SoftDeletable, Tombstone};
use crate::utils::{bounded, bounded_opt, utf8_capacity};

/// Byte capacities for the customer's character-limited columns.
pub const CUSTOMER_ID_CAPACITY: usize = utf8_capacity(CUSTOMER_ID_MAX_LEN);
pub const CUSTOMER_NAME_CAPACITY: usize = utf8_capacity(CUSTOMER_NAME_MAX_LEN);
pub const CUSTOMER_EMAIL_CAPACITY: usize = utf8_capacity(CUSTOMER_EMAIL_MAX_LEN);
pub const CUSTOMER_PHONE_CAPACITY: usize = utf8_capacity(CUSTOMER_PHONE_MAX_LEN);

/// # Documentation
/// Customer whose fee configuration is managed over time.
///
/// Owns zero or more notes and zero or more config matrix entries.
/// The id is a caller-supplied or generated string token, not a serial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerModel {
    pub id: HeaplessString<CUSTOMER_ID_CAPACITY>,
    pub name: HeaplessString<CUSTOMER_NAME_CAPACITY>,
    pub email: HeaplessString<CUSTOMER_EMAIL_CAPACITY>,
    pub phone: Option<HeaplessString<CUSTOMER_PHONE_CAPACITY>>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tombstone: Option<Tombstone>,
}

impl CustomerModel {
    /// Apply the supplied fields of a partial update; absent fields are left as they are.
    ///
    /// The update is expected to have passed [`CustomerUpdate::validate_patch`].
    pub fn apply_update(&mut self, update: &CustomerUpdate) -> ApiResult<()> {
        if let Some(Some(name)) = &update.name {
            self.name = bounded("name", name, CUSTOMER_NAME_MAX_LEN)?;
        }
        if let Some(Some(email)) = &update.email {
            self.email = bounded("email", email, CUSTOMER_EMAIL_MAX_LEN)?;
        }
        if let Some(phone) = &update.phone {
            self.phone = bounded_opt("phone", phone.as_deref(), CUSTOMER_PHONE_MAX_LEN)?;
        }
        if let Some(address) = &update.address {
            self.address = address.clone();
        }
        if let Some(date_of_birth) = update.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        Ok(())
    }
}

impl Identifiable for CustomerModel {
    type Id = str;

    fn get_id(&self) -> &str {
        self.id.as_str()
    }
}

impl SoftDeletable for CustomerModel {
    fn tombstone(&self) -> Option<&Tombstone> {
        self.tombstone.as_ref()
    }
}

impl From<CustomerModel> for CustomerOut {
    fn from(model: CustomerModel) -> Self {
        CustomerOut {
            id: model.id.as_str().to_string(),
            name: model.name.as_str().to_string(),
            email: model.email.as_str().to_string(),
            phone: model.phone.map(|p| p.as_str().to_string()),
            address: model.address,
            date_of_birth: model.date_of_birth,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Insert payload for a customer; timestamps are assigned by the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub id: HeaplessString<CUSTOMER_ID_CAPACITY>,
    pub name: HeaplessString<CUSTOMER_NAME_CAPACITY>,
    pub email: HeaplessString<CUSTOMER_EMAIL_CAPACITY>,
    pub phone: Option<HeaplessString<CUSTOMER_PHONE_CAPACITY>>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl NewCustomer {
    /// Build the insert payload from a validated create request and the id to use.
    pub fn from_request(id: &str, request: &CustomerCreate) -> ApiResult<Self> {
        Ok(Self {
            id: bounded("id", id, CUSTOMER_ID_MAX_LEN)?,
            name: bounded("name", &request.name, CUSTOMER_NAME_MAX_LEN)?,
            email: bounded("email", &request.email, CUSTOMER_EMAIL_MAX_LEN)?,
            phone: bounded_opt("phone", request.phone.as_deref(), CUSTOMER_PHONE_MAX_LEN)?,
            address: request.address.clone(),
            date_of_birth: request.date_of_birth,
        })
    }
}
