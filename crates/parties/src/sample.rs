//! Built-in sample customers.

use chrono::NaiveDate;

use pos_core::{CustomerId, DomainError, DomainResult};

use crate::customer::Customer;
use crate::directory::CustomerDirectory;

const SAMPLE: [(&str, &str, &str, (i32, u32, u32)); 5] = [
    ("1", "Conor McGregor", "123 Main St, Panadura", (2003, 11, 12)),
    ("2", "Israel Adesanya", "45 Lake Road, Colombo", (1995, 4, 23)),
    ("3", "Jon Jones", "78 Beach Avenue, Negombo", (1988, 9, 15)),
    ("4", "Valentina Shevchenko", "234 Hill Street, Kandy", (1992, 7, 30)),
    ("5", "Alexander Volkanovski", "56 Temple Road, Galle", (1985, 2, 18)),
];

pub fn customers() -> DomainResult<Vec<Customer>> {
    SAMPLE
        .iter()
        .map(|(id, name, address, (y, m, d))| {
            let born = NaiveDate::from_ymd_opt(*y, *m, *d).ok_or_else(|| {
                DomainError::validation(format!("customer {id}: invalid birth date {y}-{m}-{d}"))
            })?;
            Ok(Customer::new(CustomerId::new(*id), *name, *address, Some(born)))
        })
        .collect()
}

pub fn directory() -> DomainResult<CustomerDirectory> {
    CustomerDirectory::from_customers(customers()?)
}
