use thiserror::Error;

/// Internal issues indicating unexpected data or failed infrastructure calls.
///
/// All variants result in a 500 Internal Server Error with a generic message
/// returned to the client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored role string is not one of the known roles.
    #[error("Unknown role '{value}' stored for user {user_id}")]
    ParseRole { user_id: i32, value: String },

    /// A stored equipment type string is not one of the known types.
    #[error("Unknown equipment type '{value}' stored for equipment {equipment_id}")]
    ParseEquipmentType { equipment_id: i32, value: String },

    /// Argon2 failed to hash a password.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// The mail API answered with a non-success status.
    #[error("Mail delivery to {recipient} failed with status {status}: {body}")]
    MailDelivery {
        recipient: String,
        status: u16,
        body: String,
    },
}
