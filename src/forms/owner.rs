use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::owner::{NewOwner, Owner, UpdateOwner};
use crate::domain::types::{
    Address, City, FirstName, LastName, PageNumber, Telephone, TypeConstraintError,
};
use crate::forms::FormError;

/// Query string of the owner search (`/owners?lastName=..&page=..`).
#[derive(Debug, Default, Deserialize)]
pub struct FindOwnersQuery {
    pub page: Option<i64>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
}

/// Validated search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSearch {
    pub page: PageNumber,
    /// Trimmed filter; empty means every owner.
    pub last_name: String,
}

impl OwnerSearch {
    pub fn new(page: PageNumber, last_name: impl Into<String>) -> Self {
        Self {
            page,
            last_name: last_name.into(),
        }
    }
}

impl TryFrom<FindOwnersQuery> for OwnerSearch {
    type Error = FormError;

    fn try_from(query: FindOwnersQuery) -> Result<Self, Self::Error> {
        let page = match query.page {
            None => PageNumber::FIRST,
            Some(raw) => usize::try_from(raw)
                .ok()
                .and_then(|raw| PageNumber::new(raw).ok())
                .ok_or(FormError::InvalidPage)?,
        };

        let last_name = query
            .last_name
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        Ok(Self { page, last_name })
    }
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, Validate)]
/// Form data for creating or editing an owner. The identifier is never bound
/// from the request body.
pub struct OwnerForm {
    #[serde(default)]
    #[validate(length(max = 30, message = "must be at most 30 characters"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 30, message = "must be at most 30 characters"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub address: String,
    #[serde(default)]
    #[validate(length(max = 80, message = "must be at most 80 characters"))]
    pub city: String,
    #[serde(default)]
    pub telephone: String,
}

impl From<&Owner> for OwnerForm {
    fn from(owner: &Owner) -> Self {
        Self {
            first_name: owner.first_name.to_string(),
            last_name: owner.last_name.to_string(),
            address: owner.address.to_string(),
            city: owner.city.to_string(),
            telephone: owner.telephone.to_string(),
        }
    }
}

/// Owner form converted into domain value objects.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerPayload {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub address: Address,
    pub city: City,
    pub telephone: Telephone,
}

impl OwnerPayload {
    pub fn into_new_owner(self) -> NewOwner {
        NewOwner::new(
            self.first_name,
            self.last_name,
            self.address,
            self.city,
            self.telephone,
        )
    }

    pub fn into_update(self) -> UpdateOwner {
        UpdateOwner::new(
            self.first_name,
            self.last_name,
            self.address,
            self.city,
            self.telephone,
        )
    }
}

/// Records `value`'s constraint error under `field` unless the field already
/// failed validation.
fn check<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Result<T, TypeConstraintError>,
) -> Option<T> {
    match value {
        Ok(value) => Some(value),
        Err(err) => {
            if !errors.field_errors().contains_key(field) {
                let code = match &err {
                    TypeConstraintError::EmptyString => "not_blank",
                    TypeConstraintError::InvalidTelephone => "digits",
                    _ => "invalid",
                };
                let mut error = ValidationError::new(code);
                error.message = Some(Cow::Owned(err.to_string()));
                errors.add(field, error);
            }
            None
        }
    }
}

impl TryFrom<&OwnerForm> for OwnerPayload {
    type Error = FormError;

    fn try_from(form: &OwnerForm) -> Result<Self, Self::Error> {
        let mut errors = match form.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        let first_name = check(
            &mut errors,
            "first_name",
            FirstName::new(form.first_name.as_str()),
        );
        let last_name = check(
            &mut errors,
            "last_name",
            LastName::new(form.last_name.as_str()),
        );
        let address = check(&mut errors, "address", Address::new(form.address.as_str()));
        let city = check(&mut errors, "city", City::new(form.city.as_str()));
        let telephone = check(
            &mut errors,
            "telephone",
            Telephone::new(form.telephone.as_str()),
        );

        match (first_name, last_name, address, city, telephone) {
            (Some(first_name), Some(last_name), Some(address), Some(city), Some(telephone))
                if errors.errors().is_empty() =>
            {
                Ok(Self {
                    first_name,
                    last_name,
                    address,
                    city,
                    telephone,
                })
            }
            _ => Err(FormError::Validation(errors)),
        }
    }
}
