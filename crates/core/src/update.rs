//! The computed inventory write request.

use serde::{Deserialize, Serialize};

use crate::id::{InventoryItemId, LocationId};

/// Body of the storefront `inventory_levels/set` call. Constructed per
/// balance line, discarded after the call completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryUpdate {
    pub location_id: LocationId,
    pub inventory_item_id: InventoryItemId,
    /// Non-negative integer; see [`crate::quantity::adjusted_count`].
    pub available: u64,
}

impl InventoryUpdate {
    pub fn new(
        location_id: LocationId,
        inventory_item_id: InventoryItemId,
        available: u64,
    ) -> Self {
        Self {
            location_id,
            inventory_item_id,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_storefront_wire_shape() {
        let update = InventoryUpdate::new(
            LocationId::new(89_053_102_423),
            InventoryItemId::new(999),
            8,
        );
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "location_id": 89_053_102_423_u64,
                "inventory_item_id": 999,
                "available": 8,
            })
        );
    }
}
