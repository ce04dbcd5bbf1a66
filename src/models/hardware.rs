use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hardware {
    pub id: i64,
    pub name: String,
    pub serial_number: String,
    pub signed_out_by: Option<i64>,
}

/// Lending state of a single item. The only transitions are
/// `Available -> SignedOut` (sign-out) and `SignedOut -> Available` (return).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareState {
    Available,
    SignedOut { user_id: i64 },
}

impl Hardware {
    pub fn state(&self) -> HardwareState {
        match self.signed_out_by {
            Some(user_id) => HardwareState::SignedOut { user_id },
            None => HardwareState::Available,
        }
    }
}
