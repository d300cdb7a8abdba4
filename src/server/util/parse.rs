use std::str::FromStr;

use crate::{
    model::{equipment::EquipmentType, user::Role},
    server::error::{internal::InternalError, AppError},
};

/// Parses a role stored on a user row.
///
/// # Arguments
/// - `user_id` - ID of the user the value belongs to, for diagnostics
/// - `value` - The stored role string
///
/// # Returns
/// - `Ok(Role)` - Known role
/// - `Err(AppError::InternalErr(ParseRole))` - The database holds an unknown role
pub fn parse_role(user_id: i32, value: &str) -> Result<Role, AppError> {
    let role = Role::from_str(value).map_err(|value| InternalError::ParseRole { user_id, value })?;

    Ok(role)
}

/// Parses an equipment type stored on an equipment row.
///
/// # Returns
/// - `Ok(EquipmentType)` - Known type
/// - `Err(AppError::InternalErr(ParseEquipmentType))` - The database holds an unknown type
pub fn parse_equipment_type(equipment_id: i32, value: &str) -> Result<EquipmentType, AppError> {
    let equipment_type = EquipmentType::from_str(value)
        .map_err(|value| InternalError::ParseEquipmentType {
            equipment_id,
            value,
        })?;

    Ok(equipment_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!(parse_role(1, "SUPERADMIN").unwrap(), Role::Superadmin);
        assert_eq!(parse_role(1, "OWNER").unwrap(), Role::Owner);
        assert_eq!(parse_role(1, "MEMBER").unwrap(), Role::Member);
    }

    #[test]
    fn rejects_unknown_role() {
        let err = parse_role(7, "owner").unwrap_err();
        assert!(matches!(
            err,
            AppError::InternalErr(InternalError::ParseRole { user_id: 7, .. })
        ));
    }

    #[test]
    fn parses_equipment_types() {
        assert_eq!(
            parse_equipment_type(1, "FREE_WEIGHT").unwrap(),
            EquipmentType::FreeWeight
        );
        assert!(parse_equipment_type(1, "TREADMILL").is_err());
    }
}
