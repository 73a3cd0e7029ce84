use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::owner::{
    NewOwner as DomainNewOwner, Owner as DomainOwner, UpdateOwner as DomainUpdateOwner,
};
use crate::domain::types::{
    Address, City, FirstName, LastName, OwnerId, Telephone, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::owners)]
/// Diesel model for [`crate::domain::owner::Owner`].
pub struct Owner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::owners)]
/// Insertable form of [`Owner`].
pub struct NewOwner<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub telephone: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::owners)]
/// Data used when updating an [`Owner`] record.
pub struct UpdateOwner<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub telephone: &'a str,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Owner> for DomainOwner {
    type Error = TypeConstraintError;

    fn try_from(owner: Owner) -> Result<Self, Self::Error> {
        Ok(Self {
            id: OwnerId::try_from(owner.id)?,
            first_name: FirstName::new(owner.first_name)?,
            last_name: LastName::new(owner.last_name)?,
            address: Address::new(owner.address)?,
            city: City::new(owner.city)?,
            telephone: Telephone::new(owner.telephone)?,
            created_at: owner.created_at,
            updated_at: owner.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewOwner> for NewOwner<'a> {
    fn from(owner: &'a DomainNewOwner) -> Self {
        Self {
            first_name: owner.first_name.as_str(),
            last_name: owner.last_name.as_str(),
            address: owner.address.as_str(),
            city: owner.city.as_str(),
            telephone: owner.telephone.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateOwner> for UpdateOwner<'a> {
    fn from(owner: &'a DomainUpdateOwner) -> Self {
        Self {
            first_name: owner.first_name.as_str(),
            last_name: owner.last_name.as_str(),
            address: owner.address.as_str(),
            city: owner.city.as_str(),
            telephone: owner.telephone.as_str(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}
