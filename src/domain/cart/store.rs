use serde::{Deserialize, Serialize};

use super::persistence::CartStorage;
use crate::catalog::MenuItem;

// ============================================================================
// Cart Store - Authoritative Client-Side Selection State
// ============================================================================
//
// Invariants:
// - at most one entry per menu item id
// - every entry has quantity >= 1 (updates to <= 0 remove the entry)
//
// The snapshot is loaded once at construction, before any write can happen,
// so a not-yet-read snapshot is never clobbered with an empty one. Storage
// failures are logged and swallowed; the in-memory state stays authoritative
// for the session.
//
// ============================================================================

/// A menu item with a quantity. The item fields are flattened so the stored
/// JSON stays shaped like the original localStorage snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> i64 {
        self.item.price * i64::from(self.quantity)
    }
}

pub struct CartStore {
    items: Vec<CartItem>,
    is_open: bool,
    storage: Box<dyn CartStorage>,
}

impl CartStore {
    /// Open a cart session, restoring the stored snapshot when possible.
    /// A malformed or unreadable snapshot yields an empty cart, never an
    /// error.
    pub fn new(storage: Box<dyn CartStorage>) -> Self {
        let items = match storage.load() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(error = %e, "Stored cart is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored cart, starting empty");
                Vec::new()
            }
        };

        Self {
            items,
            is_open: false,
            storage,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a product. An existing entry gets its quantity
    /// incremented; otherwise a new entry with quantity 1 is inserted.
    pub fn add_item(&mut self, product: &MenuItem) {
        match self.items.iter_mut().find(|c| c.item.id == product.id) {
            Some(entry) => entry.quantity += 1,
            None => self.items.push(CartItem {
                item: product.clone(),
                quantity: 1,
            }),
        }
        self.persist();
    }

    /// Remove an entry. No-op when the id is absent.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|c| c.item.id != id);
        self.persist();
    }

    /// Set an entry's quantity to an absolute value. A quantity of zero or
    /// less removes the entry; an absent id is a no-op.
    pub fn update_quantity(&mut self, id: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        if let Some(entry) = self.items.iter_mut().find(|c| c.item.id == id) {
            entry.quantity = quantity as u32;
            self.persist();
        }
    }

    /// Empty the cart and close the cart surface.
    pub fn clear(&mut self) {
        self.items.clear();
        self.is_open = false;
        self.persist();
    }

    /// Sum of `price * quantity` over all entries.
    pub fn total_price(&self) -> i64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all entries.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|c| c.quantity).sum()
    }

    // Visibility of the cart display surface. Ephemeral UI state, not part
    // of the persisted snapshot.

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    fn persist(&self) {
        match serde_json::to_string(&self.items) {
            Ok(snapshot) => {
                if let Err(e) = self.storage.save(&snapshot) {
                    tracing::error!(error = %e, "Failed to persist cart snapshot");
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to serialize cart snapshot"),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::persistence::MemoryCartStorage;

    fn product(id: &str, price: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            price,
            category: "pizzas".to_string(),
            image: String::new(),
            featured: false,
            available: true,
        }
    }

    fn empty_cart() -> CartStore {
        CartStore::new(Box::new(MemoryCartStorage::new()))
    }

    #[test]
    fn test_add_item_increments_existing_entry() {
        let mut cart = empty_cart();
        let pizza = product("pizza-1", 8500);

        cart.add_item(&pizza);
        cart.add_item(&pizza);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_entries_stay_unique_per_id() {
        let mut cart = empty_cart();
        cart.add_item(&product("pizza-1", 8500));
        cart.add_item(&product("cafe-1", 1500));
        cart.add_item(&product("pizza-1", 8500));
        cart.update_quantity("cafe-1", 4);

        let mut ids: Vec<&str> = cart.items().iter().map(|c| c.item.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cart.items().len());
        assert!(cart.items().iter().all(|c| c.quantity >= 1));
    }

    #[test]
    fn test_remove_item_is_noop_on_missing_id() {
        let mut cart = empty_cart();
        cart.add_item(&product("pizza-1", 8500));
        cart.remove_item("pizza-99");
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let mut cart = empty_cart();
        cart.add_item(&product("pizza-1", 8500));

        cart.update_quantity("pizza-1", 5);
        assert_eq!(cart.items()[0].quantity, 5);

        // Absent id: no-op, no new entry.
        cart.update_quantity("pizza-99", 3);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_update_quantity_to_zero_removes_entry() {
        let mut cart = empty_cart();
        cart.add_item(&product("pizza-1", 8500));

        cart.update_quantity("pizza-1", 0);
        assert!(cart.is_empty());

        cart.add_item(&product("pizza-1", 8500));
        cart.update_quantity("pizza-1", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_match_menu_scenario() {
        let mut cart = empty_cart();
        let pizza = product("pizza-1", 8500);
        cart.add_item(&pizza);
        cart.add_item(&pizza);
        cart.add_item(&product("cafe-1", 1500));

        assert_eq!(cart.total_price(), 18500);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_clear_empties_and_closes() {
        let mut cart = empty_cart();
        cart.add_item(&product("pizza-1", 8500));
        cart.open();

        cart.clear();

        assert!(cart.is_empty());
        assert!(!cart.is_open());
        assert_eq!(cart.total_price(), 0);
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_visibility_toggle_is_independent_of_items() {
        let mut cart = empty_cart();
        assert!(!cart.is_open());
        cart.toggle();
        assert!(cart.is_open());
        cart.toggle();
        assert!(!cart.is_open());
        cart.open();
        cart.close();
        assert!(!cart.is_open());
    }

    #[test]
    fn test_snapshot_round_trip_restores_items() {
        let storage = MemoryCartStorage::new();

        let mut cart = CartStore::new(Box::new(storage.clone()));
        cart.add_item(&product("pizza-1", 8500));
        cart.add_item(&product("pizza-1", 8500));
        cart.add_item(&product("cafe-1", 1500));

        let restored = CartStore::new(Box::new(storage));
        assert_eq!(restored.items(), cart.items());
        assert_eq!(restored.total_price(), 18500);
        assert_eq!(restored.total_items(), 3);
    }

    #[test]
    fn test_corrupted_snapshot_yields_empty_cart() {
        for raw in ["not json at all", "{\"id\":\"pizza-1\"}", "42", "null"] {
            let storage = MemoryCartStorage::with_contents(raw);
            let cart = CartStore::new(Box::new(storage));
            assert!(cart.is_empty(), "expected empty cart for snapshot {raw:?}");
        }
    }

    #[test]
    fn test_mutations_overwrite_corrupted_snapshot() {
        let storage = MemoryCartStorage::with_contents("corrupted");
        let mut cart = CartStore::new(Box::new(storage.clone()));
        cart.add_item(&product("cafe-1", 1500));

        let restored = CartStore::new(Box::new(storage));
        assert_eq!(restored.total_items(), 1);
    }
}
