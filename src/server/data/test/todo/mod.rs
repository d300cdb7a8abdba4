use crate::server::data::todo::TodoRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod scoped_writes;
