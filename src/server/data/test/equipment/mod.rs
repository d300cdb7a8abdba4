use crate::{
    model::equipment::EquipmentType,
    server::{
        data::equipment::EquipmentRepository, error::AppError,
        model::equipment::UpdateEquipmentParams,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod scoped_writes;
mod units_by_type;
