use crate::server::{data::membership_fee::MembershipFeeRepository, error::AppError};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod get_due;
mod mark_notified;
