use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::cart::CartStore;
use crate::domain::order::{DeliveryType, OrderDraft, OrderLine};

// ============================================================================
// Checkout Form - Gate Order Submission on Minimally Sane Input
// ============================================================================
//
// All rules are evaluated together so the customer sees every failing field
// at once, not just the first. Messages are the Spanish strings displayed
// next to each field.
//
// ============================================================================

// Permissive on purpose: digits, spaces, parentheses, hyphens, plus sign.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s()+-]+$").expect("phone pattern is valid"));

// Basic local@domain.tld shape, nothing fancier.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Field name -> error message for each failing field. An empty map means
/// the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// The customer's contact and delivery details as typed into the checkout
/// form. Raw strings; validation happens in `validate`.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub delivery_type: DeliveryType,
    pub delivery_address: String,
    pub notes: String,
}

impl OrderForm {
    /// Evaluate every rule and report all violations.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.customer_name.trim().is_empty() {
            errors.insert("customerName", "El nombre es requerido");
        }

        if self.customer_phone.trim().is_empty() {
            errors.insert("customerPhone", "El teléfono es requerido");
        } else if !PHONE_RE.is_match(&self.customer_phone) {
            errors.insert("customerPhone", "Ingresa un número de teléfono válido");
        }

        if !self.customer_email.is_empty() && !EMAIL_RE.is_match(&self.customer_email) {
            errors.insert("customerEmail", "Ingresa un email válido");
        }

        if self.delivery_type == DeliveryType::Envio && self.delivery_address.trim().is_empty() {
            errors.insert("deliveryAddress", "La dirección es requerida para envíos");
        }

        errors
    }

    /// Submission is blocked whenever the form is invalid or the cart is
    /// empty.
    pub fn can_submit(&self, cart: &CartStore) -> bool {
        !cart.is_empty() && self.validate().is_empty()
    }

    /// Build the submission payload: form fields verbatim plus a frozen
    /// snapshot of the cart lines and the client-computed total.
    pub fn to_draft(&self, cart: &CartStore) -> OrderDraft {
        let items = cart
            .items()
            .iter()
            .map(|entry| OrderLine {
                product_id: entry.item.id.clone(),
                name: entry.item.name.clone(),
                price: entry.item.price,
                quantity: entry.quantity,
            })
            .collect();

        OrderDraft {
            customer_name: Some(self.customer_name.clone()),
            customer_phone: Some(self.customer_phone.clone()),
            customer_email: Some(self.customer_email.clone()),
            delivery_type: Some(self.delivery_type),
            delivery_address: Some(self.delivery_address.clone()),
            items: Some(items),
            total_amount: Some(cart.total_price()),
            notes: Some(self.notes.clone()),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
