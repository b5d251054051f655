use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::catalog::{Catalog, MenuFilter};

/// GET /menu - Browse the menu.
///
/// Query params:
/// - `category`: filter by category id
/// - `search`: narrow by name or description, case-insensitive
/// - `featured`: `true` narrows to featured items
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub featured: Option<String>,
}

pub async fn get_menu(catalog: web::Data<Catalog>, query: web::Query<MenuQuery>) -> HttpResponse {
    let filter = MenuFilter {
        category: query.category.clone(),
        search: query.search.clone(),
        featured: query.featured.as_deref() == Some("true"),
    };

    let items = catalog.filter(&filter);
    let total = items.len();

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "categories": catalog.categories(),
        "items": items,
        "total": total,
    }))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use super::*;

    async fn get(path: &str) -> serde_json::Value {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Catalog::standard()))
                .route("/menu", web::get().to(get_menu)),
        )
        .await;

        let req = test::TestRequest::get().uri(path).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        test::read_body_json(resp).await
    }

    #[actix_web::test]
    async fn test_menu_returns_full_catalog() {
        let body = get("/menu").await;

        assert_eq!(body["success"], true);
        assert_eq!(body["categories"].as_array().unwrap().len(), 9);
        let total = body["total"].as_u64().unwrap();
        assert_eq!(total, body["items"].as_array().unwrap().len() as u64);
        assert!(total > 0);
    }

    #[actix_web::test]
    async fn test_menu_category_filter() {
        let body = get("/menu?category=pizzas").await;

        let items = body["items"].as_array().unwrap();
        assert!(!items.is_empty());
        assert!(items.iter().all(|i| i["category"] == "pizzas"));
    }

    #[actix_web::test]
    async fn test_menu_search_narrows_category() {
        let body = get("/menu?category=pizzas&search=napolitana").await;

        let items = body["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], "pizza-2");
    }

    #[actix_web::test]
    async fn test_menu_featured_filter() {
        let body = get("/menu?featured=true").await;

        let items = body["items"].as_array().unwrap();
        assert!(!items.is_empty());
        assert!(items.iter().all(|i| i["featured"] == true));
    }

    #[actix_web::test]
    async fn test_menu_unknown_category_is_empty() {
        let body = get("/menu?category=sushi").await;
        assert_eq!(body["total"], 0);
    }
}
