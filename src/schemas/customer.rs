use super::rules::{email, required_text, CUSTOMER_NAME_MAX};
use super::Validate;
use crate::error::AppError;
use crate::models::Customer;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize)]
pub struct CustomerCreate {
    pub email: String,
    pub name: String,
}

impl Validate for CustomerCreate {
    fn validate(&self) -> Result<(), AppError> {
        email("email", &self.email)?;
        required_text("name", &self.name, CUSTOMER_NAME_MAX)
    }
}

/// PATCH body. Absent (or null) fields keep their stored value.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CustomerUpdate {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Validate for CustomerUpdate {
    fn validate(&self) -> Result<(), AppError> {
        if let Some(e) = &self.email {
            email("email", e)?;
        }
        if let Some(n) = &self.name {
            required_text("name", n, CUSTOMER_NAME_MAX)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRead {
    pub id: i64,
    pub email: String,
    pub name: String,
}

impl From<Customer> for CustomerRead {
    fn from(c: Customer) -> Self {
        CustomerRead {
            id: c.id,
            email: c.email,
            name: c.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_both_fields() {
        let res: Result<CustomerCreate, _> = serde_json::from_value(serde_json::json!({ "email": "a@b.io" }));
        assert!(res.is_err());
    }

    #[test]
    fn create_rejects_bad_email() {
        let input = CustomerCreate { email: "nope".into(), name: "Ann".into() };
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn update_checks_only_present_fields() {
        let empty: CustomerUpdate = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(empty.validate().is_ok());

        let name_only: CustomerUpdate = serde_json::from_value(serde_json::json!({ "name": "Bo" })).unwrap();
        assert!(name_only.validate().is_ok());
        assert_eq!(name_only.email, None);

        let blank = CustomerUpdate { name: Some(" ".into()), ..Default::default() };
        assert!(blank.validate().is_err());
    }
}
