use actix_web::web;

// ============================================================================
// HTTP Layer
// ============================================================================

pub mod menu;
pub mod orders;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/menu", web::get().to(menu::get_menu))
        .route("/pedidos", web::post().to(orders::create_order))
        .route("/pedidos", web::get().to(orders::get_orders));
}
