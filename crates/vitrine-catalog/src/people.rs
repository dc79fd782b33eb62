//! CM users and customers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commerce-manager (back office) user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmUser {
    /// Persistent uid.
    pub uid: u64,
    /// Login name.
    pub user_name: String,
    /// First name, when recorded.
    pub first_name: Option<String>,
    /// Last name, when recorded.
    pub last_name: Option<String>,
    /// Email address, when recorded.
    pub email: Option<String>,
    /// Account status (e.g. "ACTIVE", "DISABLED").
    pub status: String,
    /// Role names granted to the user.
    pub roles: Vec<String>,
    /// Codes of catalogs the user is scoped to.
    pub catalog_codes: Vec<String>,
    /// Codes of stores the user is scoped to.
    pub store_codes: Vec<String>,
    /// Whether the user may access every catalog.
    pub all_catalogs_access: bool,
    /// Whether the user may access every store.
    pub all_stores_access: bool,
}

/// A customer's postal address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAddress {
    /// First street line.
    pub street1: String,
    /// Second street line, when present.
    pub street2: Option<String>,
    /// City.
    pub city: String,
    /// State/province, when the country has one.
    pub sub_country: Option<String>,
    /// Country code.
    pub country: String,
    /// Postal/zip code.
    pub zip_code: String,
}

/// A storefront customer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Persistent uid.
    pub uid: u64,
    /// The identifier shared across channels; blank means the account is
    /// not yet usable and must not be indexed.
    pub shared_id: String,
    /// Email address, when recorded.
    pub email: Option<String>,
    /// First name, when recorded.
    pub first_name: Option<String>,
    /// Last name, when recorded.
    pub last_name: Option<String>,
    /// Phone number, when recorded.
    pub phone_number: Option<String>,
    /// Preferred billing address, when one has been chosen.
    pub preferred_billing_address: Option<CustomerAddress>,
    /// Code of the store the account was registered in.
    pub store_code: String,
    /// Account creation timestamp.
    pub created: DateTime<Utc>,
}
