use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::dto::validation::validate_chip_name;

/// Payload used by the host to hand a chip to a player or drop it back in the bag.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignChipRequest {
    /// Catalog name of the chip being moved.
    pub chip: String,
    /// Device id of the receiving player, or `null` to return the chip to the bag.
    #[serde(default)]
    pub owner: Option<String>,
}

impl Validate for AssignChipRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_chip_name(&self.chip) {
            errors.add("chip", e);
        }

        if let Some(ref owner) = self.owner {
            if owner.trim().is_empty() {
                let mut err = ValidationError::new("owner_blank");
                err.message = Some("Owner must be a device id or null".into());
                errors.add("owner", err);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Payload used by a chip holder to pass the chip on to another player.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferChipRequest {
    /// Catalog name of the chip changing hands.
    pub chip: String,
    /// Device id of the player taking the chip.
    pub new_owner: String,
}

impl Validate for TransferChipRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_chip_name(&self.chip) {
            errors.add("chip", e);
        }

        if self.new_owner.trim().is_empty() {
            let mut err = ValidationError::new("new_owner_blank");
            err.message = Some("New owner must not be blank".into());
            errors.add("newOwner", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bag_drop_is_valid_but_blank_owner_is_not() {
        let bag_drop = AssignChipRequest {
            chip: "Birdie Chip".into(),
            owner: None,
        };
        assert!(bag_drop.validate().is_ok());

        let blank_owner = AssignChipRequest {
            chip: "Birdie Chip".into(),
            owner: Some("  ".into()),
        };
        assert!(blank_owner.validate().is_err());
    }

    #[test]
    fn transfers_always_name_a_taker() {
        let handoff = TransferChipRequest {
            chip: "Bogey Chip".into(),
            new_owner: "device-3".into(),
        };
        assert!(handoff.validate().is_ok());

        let nobody = TransferChipRequest {
            chip: "Bogey Chip".into(),
            new_owner: String::new(),
        };
        assert!(nobody.validate().is_err());
    }
}
