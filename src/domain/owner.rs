use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{Address, City, FirstName, LastName, OwnerId, Telephone};

/// A clinic customer.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Owner {
    pub id: OwnerId,
    pub first_name: FirstName,
    pub last_name: LastName,
    pub address: Address,
    pub city: City,
    pub telephone: Telephone,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Owner {
    /// Display name used in listings and page titles.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Owner data accepted on creation; the identifier is assigned by storage.
#[derive(Clone, Debug, PartialEq)]
pub struct NewOwner {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub address: Address,
    pub city: City,
    pub telephone: Telephone,
}

impl NewOwner {
    #[must_use]
    pub fn new(
        first_name: FirstName,
        last_name: LastName,
        address: Address,
        city: City,
        telephone: Telephone,
    ) -> Self {
        Self {
            first_name,
            last_name,
            address,
            city,
            telephone,
        }
    }
}

/// Replacement values for an existing owner. The identifier is never part of
/// the update payload.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateOwner {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub address: Address,
    pub city: City,
    pub telephone: Telephone,
}

impl UpdateOwner {
    #[must_use]
    pub fn new(
        first_name: FirstName,
        last_name: LastName,
        address: Address,
        city: City,
        telephone: Telephone,
    ) -> Self {
        Self {
            first_name,
            last_name,
            address,
            city,
            telephone,
        }
    }
}
