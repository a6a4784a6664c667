use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail};

use super::patch::deserialize_some;
use crate::error::{ApiError, ApiResult};

pub const CUSTOMER_ID_MAX_LEN: usize = 36;
pub const CUSTOMER_NAME_MAX_LEN: usize = 100;
pub const CUSTOMER_EMAIL_MAX_LEN: usize = 255;
pub const CUSTOMER_PHONE_MAX_LEN: usize = 30;

/// Customer as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerOut {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/customers`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CustomerCreate {
    /// Caller-chosen id; a UUID is generated when absent or empty
    #[serde(default)]
    #[validate(length(max = 36))]
    pub id: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email, length(max = 255))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 30))]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

/// Body of `PATCH /api/customers/{id}`
///
/// `None` leaves a field untouched, `Some(None)` clears a nullable field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerUpdate {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub name: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub email: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub phone: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub address: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub date_of_birth: Option<Option<NaiveDate>>,
}

impl CustomerUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.date_of_birth.is_none()
    }

    /// Check the supplied fields against the same rules as [`CustomerCreate`].
    pub fn validate_patch(&self) -> ApiResult<()> {
        match &self.name {
            Some(None) => return Err(ApiError::validation("name: may not be null")),
            Some(Some(name)) => {
                let len = name.chars().count();
                if len == 0 || len > CUSTOMER_NAME_MAX_LEN {
                    return Err(ApiError::validation(format!(
                        "name: length must be between 1 and {CUSTOMER_NAME_MAX_LEN}"
                    )));
                }
            }
            None => {}
        }

        match &self.email {
            Some(None) => return Err(ApiError::validation("email: may not be null")),
            Some(Some(email)) => {
                if !email.validate_email() {
                    return Err(ApiError::validation("email: not a valid email address"));
                }
                if email.chars().count() > CUSTOMER_EMAIL_MAX_LEN {
                    return Err(ApiError::validation(format!(
                        "email: length must be at most {CUSTOMER_EMAIL_MAX_LEN}"
                    )));
                }
            }
            None => {}
        }

        if let Some(Some(phone)) = &self.phone {
            if phone.chars().count() > CUSTOMER_PHONE_MAX_LEN {
                return Err(ApiError::validation(format!(
                    "phone: length must be at most {CUSTOMER_PHONE_MAX_LEN}"
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerListQuery {
    /// Case-insensitive substring matched against name or email
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerListResponse {
    pub customers: Vec<CustomerOut>,
    pub total: usize,
}
