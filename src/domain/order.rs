// SPDX-License-Identifier: MPL-2.0
//! The order a gallery is attached to.
//!
//! Orders are owned by the host and handed to the gallery read-only. Document
//! headings are resolved against the current order every time they are
//! rendered, so replacing the order is enough to relabel the tiles.

use std::fmt;

/// Identifier of an order line item, unique within one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemLocalId(u32);

impl ItemLocalId {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemLocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line item of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub local_id: ItemLocalId,
    /// Number shown to the user ("Item 7").
    pub item_no: u32,
    /// Free-form storage location; empty strings are treated as absent.
    pub location: Option<String>,
}

impl OrderItem {
    #[must_use]
    pub fn new(local_id: ItemLocalId, item_no: u32, location: Option<String>) -> Self {
        Self {
            local_id,
            item_no,
            location,
        }
    }

    /// Returns the location when it carries any text.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref().filter(|loc| !loc.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    pub items: Vec<OrderItem>,
}

impl Order {
    #[must_use]
    pub fn new(items: Vec<OrderItem>) -> Self {
        Self { items }
    }

    /// Finds the line item with the given local id.
    #[must_use]
    pub fn find_item(&self, local_id: ItemLocalId) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.local_id == local_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_item_matches_on_local_id() {
        let order = Order::new(vec![
            OrderItem::new(ItemLocalId::new(1), 10, None),
            OrderItem::new(ItemLocalId::new(3), 7, Some("Bay A".into())),
        ]);

        let item = order.find_item(ItemLocalId::new(3)).expect("item 3 exists");
        assert_eq!(item.item_no, 7);
        assert!(order.find_item(ItemLocalId::new(2)).is_none());
    }

    #[test]
    fn empty_location_reads_as_absent() {
        let item = OrderItem::new(ItemLocalId::new(3), 7, Some(String::new()));
        assert_eq!(item.location(), None);

        let item = OrderItem::new(ItemLocalId::new(3), 7, Some("Bay A".into()));
        assert_eq!(item.location(), Some("Bay A"));
    }
}
