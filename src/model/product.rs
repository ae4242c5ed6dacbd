use serde::{Deserialize, Serialize};

/// An inventory product record.
///
/// The `id` is assigned by the repository actor at creation time and is
/// immutable afterwards. `quantity` and `price` are plain JSON numbers:
/// the service deliberately does not enforce non-negativity or integrality,
/// matching the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub quantity: f64,
    pub price: f64,
}

impl Product {
    pub fn new(id: u64, name: impl Into<String>, quantity: f64, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// Validated payload for creating a product. The id is never part of this
/// DTO; only the repository may assign identities.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub quantity: f64,
    pub price: f64,
}

/// Field-level patch for a product.
///
/// `None` means "leave the field untouched". JSON `null` deserializes to
/// `None` as well, so a client sending `{"price": null}` gets the same
/// no-op as one omitting the key. `Some(0.0)` is a real value, distinct
/// from absence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
}
