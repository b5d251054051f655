use serde::{Deserialize, Serialize};

mod data;

// ============================================================================
// Menu Catalog - Static Purchasable Items
// ============================================================================
//
// The menu is a fixed in-memory list, loaded once and never mutated. The
// catalog owns lookup, search, and the filter precedence used by the menu
// endpoint: category first, then search narrows, then featured narrows.
// Unavailable items are excluded from every path.
//
// ============================================================================

/// A product on the restaurant menu. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in integer currency units (ARS).
    pub price: i64,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// A menu category used for browsing and filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// Query parameters of a menu view, already parsed.
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub featured: bool,
}

pub struct Catalog {
    categories: Vec<Category>,
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, items: Vec<MenuItem>) -> Self {
        Self { categories, items }
    }

    /// The full Fiorente menu.
    pub fn standard() -> Self {
        Self::new(data::categories(), data::menu_items())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn item_by_id(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All available items in one category.
    pub fn items_by_category(&self, category: &str) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.available && item.category == category)
            .collect()
    }

    /// Available items whose name or description contains the query,
    /// case-insensitively.
    pub fn search(&self, query: &str) -> Vec<&MenuItem> {
        let query = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.available && matches_query(item, &query))
            .collect()
    }

    pub fn featured(&self) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.available && item.featured)
            .collect()
    }

    /// Apply a menu view filter. Category (when present) replaces the base
    /// "all available" set; search and featured each narrow the result.
    pub fn filter(&self, filter: &MenuFilter) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = match &filter.category {
            Some(category) => self.items_by_category(category),
            None => self.items.iter().filter(|item| item.available).collect(),
        };

        if let Some(query) = &filter.search {
            let query = query.to_lowercase();
            items.retain(|item| matches_query(item, &query));
        }

        if filter.featured {
            items.retain(|item| item.featured);
        }

        items
    }
}

fn matches_query(item: &MenuItem, lowercase_query: &str) -> bool {
    item.name.to_lowercase().contains(lowercase_query)
        || item.description.to_lowercase().contains(lowercase_query)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, category: &str, featured: bool, available: bool) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{name} de la casa"),
            price: 1000,
            category: category.to_string(),
            image: format!("/images/{id}.jpg"),
            featured,
            available,
        }
    }

    fn test_catalog() -> Catalog {
        Catalog::new(
            vec![Category {
                id: "pizzas".to_string(),
                name: "Pizzas".to_string(),
                icon: "🍕".to_string(),
            }],
            vec![
                item("pizza-1", "Pizza Muzzarella", "pizzas", true, true),
                item("pizza-2", "Pizza Napolitana", "pizzas", false, true),
                item("pizza-3", "Pizza de Ayer", "pizzas", true, false),
                item("postre-1", "Flan", "postres", false, true),
            ],
        )
    }

    #[test]
    fn test_base_view_excludes_unavailable() {
        let catalog = test_catalog();
        let items = catalog.filter(&MenuFilter::default());
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|i| i.available));
    }

    #[test]
    fn test_category_filter_excludes_unavailable() {
        let catalog = test_catalog();
        let items = catalog.filter(&MenuFilter {
            category: Some("pizzas".to_string()),
            ..MenuFilter::default()
        });
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["pizza-1", "pizza-2"]);
    }

    #[test]
    fn test_search_narrows_within_category() {
        let catalog = test_catalog();
        let items = catalog.filter(&MenuFilter {
            category: Some("pizzas".to_string()),
            search: Some("NAPOLITANA".to_string()),
            featured: false,
        });
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["pizza-2"]);
    }

    #[test]
    fn test_search_matches_description() {
        let catalog = test_catalog();
        let items = catalog.search("flan de la casa");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "postre-1");
    }

    #[test]
    fn test_search_excludes_unavailable() {
        let catalog = test_catalog();
        let items = catalog.search("ayer");
        assert!(items.is_empty());
    }

    #[test]
    fn test_featured_narrows_to_featured_only() {
        let catalog = test_catalog();
        let items = catalog.filter(&MenuFilter {
            featured: true,
            ..MenuFilter::default()
        });
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["pizza-1"]);
    }

    #[test]
    fn test_item_by_id_finds_unavailable_items_too() {
        let catalog = test_catalog();
        assert!(catalog.item_by_id("pizza-3").is_some());
        assert!(catalog.item_by_id("pizza-99").is_none());
    }

    #[test]
    fn test_standard_catalog_is_well_formed() {
        let catalog = Catalog::standard();
        assert!(!catalog.categories().is_empty());
        assert!(catalog.item_by_id("pizza-1").is_some());
        assert_eq!(catalog.item_by_id("pizza-1").unwrap().price, 8500);
        assert_eq!(catalog.item_by_id("cafe-1").unwrap().price, 1500);

        // Every item belongs to a declared category and has a positive price.
        for item in catalog.filter(&MenuFilter::default()) {
            assert!(item.price > 0, "non-positive price on {}", item.id);
            assert!(
                catalog.categories().iter().any(|c| c.id == item.category),
                "unknown category {} on {}",
                item.category,
                item.id
            );
        }
    }
}
