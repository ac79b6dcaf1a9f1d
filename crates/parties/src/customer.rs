use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pos_core::{CustomerId, Entity};

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    id: CustomerId,
    name: String,
    address: String,
    date_of_birth: Option<NaiveDate>,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        address: impl Into<String>,
        date_of_birth: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            date_of_birth,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    /// The identity carried onto an order.
    pub fn to_ref(&self) -> CustomerRef {
        CustomerRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Resolved customer identity (id + display name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: CustomerId,
    pub name: String,
}
