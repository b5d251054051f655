use chrono::Utc;
use rand::Rng;

// ============================================================================
// Order Number Generation
// ============================================================================
//
// Format: FIO-YYYYMMDD-XXXX where XXXX is a zero-padded random 4-digit
// suffix. The suffix is NOT checked against existing orders, so two orders
// on the same day can collide with probability ~1/10000 per pair. Known and
// accepted limitation; adding a uniqueness retry would change observable
// behavior under load and needs a product decision first.
//
// ============================================================================

pub const ORDER_NUMBER_PREFIX: &str = "FIO";

/// Generate a human-readable order number embedding the current UTC date.
pub fn generate_order_number() -> String {
    let date = Utc::now().format("%Y%m%d");
    let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
    format!("{ORDER_NUMBER_PREFIX}-{date}-{suffix:04}")
}
