// src/orders/definitions.rs
use std::fmt;
use uuid::Uuid;

/// The closed set of states offered by the form's selection control.
pub const STATE_OPTIONS: [&str; 4] = ["State1", "State2", "State3", "State4"];

/// Identifies one field of the order form. Used as the key for validation
/// errors and to address a single field in change handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    ProductName,
    Email,
    Price,
    Quantity,
    City,
    State,
    ZipCode,
}

impl OrderField {
    pub const ALL: [OrderField; 7] = [
        OrderField::ProductName,
        OrderField::Email,
        OrderField::Price,
        OrderField::Quantity,
        OrderField::City,
        OrderField::State,
        OrderField::ZipCode,
    ];

    /// Column / input label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            OrderField::ProductName => "Product Name",
            OrderField::Email => "Email",
            OrderField::Price => "Price",
            OrderField::Quantity => "Quantity",
            OrderField::City => "City",
            OrderField::State => "State",
            OrderField::ZipCode => "Zip Code",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The in-progress form values. Everything is text until validation passes;
/// the draft is reset to all-empty after a successful commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub product_name: String,
    pub email: String,
    pub price: String,
    pub quantity: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl OrderDraft {
    pub fn field(&self, field: OrderField) -> &str {
        match field {
            OrderField::ProductName => &self.product_name,
            OrderField::Email => &self.email,
            OrderField::Price => &self.price,
            OrderField::Quantity => &self.quantity,
            OrderField::City => &self.city,
            OrderField::State => &self.state,
            OrderField::ZipCode => &self.zip_code,
        }
    }

    pub fn field_mut(&mut self, field: OrderField) -> &mut String {
        match field {
            OrderField::ProductName => &mut self.product_name,
            OrderField::Email => &mut self.email,
            OrderField::Price => &mut self.price,
            OrderField::Quantity => &mut self.quantity,
            OrderField::City => &mut self.city,
            OrderField::State => &mut self.state,
            OrderField::ZipCode => &mut self.zip_code,
        }
    }

    pub fn is_empty(&self) -> bool {
        OrderField::ALL.iter().all(|f| self.field(*f).is_empty())
    }
}

/// A committed order. Field values are a snapshot of the draft that passed
/// validation; `id` is assigned once at creation and is the record's identity
/// for edit and delete (display position is never identity).
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: Uuid,
    pub product_name: String,
    pub email: String,
    pub price: String,
    pub quantity: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl OrderRecord {
    /// Builds a fresh record (new id) from a validated draft.
    pub fn from_draft(draft: &OrderDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Builds a record keeping an existing id. Used when an edit replaces a
    /// stored record in place.
    pub fn with_id(id: Uuid, draft: &OrderDraft) -> Self {
        Self {
            id,
            product_name: draft.product_name.clone(),
            email: draft.email.clone(),
            price: draft.price.clone(),
            quantity: draft.quantity.clone(),
            city: draft.city.clone(),
            state: draft.state.clone(),
            zip_code: draft.zip_code.clone(),
        }
    }

    /// Copies the stored field values back into a draft, e.g. when the user
    /// starts editing this record.
    pub fn to_draft(&self) -> OrderDraft {
        OrderDraft {
            product_name: self.product_name.clone(),
            email: self.email.clone(),
            price: self.price.clone(),
            quantity: self.quantity.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
        }
    }

    /// Derived value, computed at display time and never stored.
    /// Returns `None` if either component fails to parse (cannot happen for a
    /// record that went through validation, but callers stay defensive).
    pub fn total_amount(&self) -> Option<f64> {
        let price: f64 = self.price.trim().parse().ok()?;
        let quantity: f64 = self.quantity.trim().parse().ok()?;
        Some(price * quantity)
    }
}
