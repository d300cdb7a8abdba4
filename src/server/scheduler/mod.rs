pub mod membership_expiry;
