// src/orders/resources.rs
use bevy::prelude::*;
use uuid::Uuid;

use super::definitions::OrderRecord;

/// The committed orders, in insertion order (which is display order).
/// Only systems in `orders::systems` mutate this resource; the UI reads it and
/// requests changes through events.
#[derive(Resource, Debug, Default)]
pub struct OrderBook {
    records: Vec<OrderRecord>,
}

impl OrderBook {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: Uuid) -> Option<&OrderRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Display position of a record, if present.
    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Appends at the end; insertion order is preserved for display.
    pub fn append(&mut self, record: OrderRecord) {
        self.records.push(record);
    }

    /// Replaces the record with `record.id` in place, keeping its display
    /// position. Returns false if no such record exists.
    pub fn replace(&mut self, record: OrderRecord) -> bool {
        match self.position(record.id) {
            Some(index) => {
                self.records[index] = record;
                true
            }
            None => false,
        }
    }

    /// Removes the record with the given id; records after it shift up one
    /// display position. Returns false if no such record exists.
    pub fn remove(&mut self, id: Uuid) -> bool {
        match self.position(id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Pre-formatted display strings for one table row, so per-frame rendering
/// does no parsing or number formatting.
#[derive(Debug, Clone)]
pub struct RenderableOrderRow {
    pub id: Uuid,
    /// Product Name, Email, Price, Quantity, Total Amount, City, State,
    /// Zip Code, in column order.
    pub cells: [String; 8],
}

/// Rebuilt by `orders::systems::logic::update_render_cache` whenever an
/// `OrderBookChanged` event fires.
#[derive(Resource, Debug, Default)]
pub struct OrderRenderCache {
    pub rows: Vec<RenderableOrderRow>,
}

impl OrderRenderCache {
    pub fn rebuild_from(&mut self, book: &OrderBook) {
        self.rows = book.iter().map(renderable_row).collect();
    }
}

fn renderable_row(record: &OrderRecord) -> RenderableOrderRow {
    let total = match record.total_amount() {
        Some(amount) => format!("{:.2}", amount),
        None => "-".to_string(),
    };
    RenderableOrderRow {
        id: record.id,
        cells: [
            record.product_name.clone(),
            record.email.clone(),
            record.price.clone(),
            record.quantity.clone(),
            total,
            record.city.clone(),
            record.state.clone(),
            record.zip_code.clone(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::definitions::OrderDraft;

    fn record(name: &str) -> OrderRecord {
        let draft = OrderDraft {
            product_name: name.to_string(),
            email: "a@b.com".to_string(),
            price: "10".to_string(),
            quantity: "3".to_string(),
            city: "Pune".to_string(),
            state: "State1".to_string(),
            zip_code: "411001".to_string(),
        };
        OrderRecord::from_draft(&draft)
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut book = OrderBook::default();
        book.append(record("a"));
        book.append(record("b"));
        let names: Vec<_> = book.iter().map(|r| r.product_name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_replace_keeps_position_and_id() {
        let mut book = OrderBook::default();
        book.append(record("a"));
        let target = record("b");
        let target_id = target.id;
        book.append(target);
        book.append(record("c"));

        let mut replacement = record("b2");
        replacement.id = target_id;
        assert!(book.replace(replacement));

        assert_eq!(book.len(), 3);
        assert_eq!(book.position(target_id), Some(1));
        assert_eq!(book.get(target_id).unwrap().product_name, "b2");
    }

    #[test]
    fn test_replace_unknown_id_is_a_noop() {
        let mut book = OrderBook::default();
        book.append(record("a"));
        assert!(!book.replace(record("ghost")));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_remove_shifts_later_records_up() {
        let mut book = OrderBook::default();
        let first = record("a");
        let second = record("b");
        let third = record("c");
        let second_id = second.id;
        let third_id = third.id;
        book.append(first);
        book.append(second);
        book.append(third);

        assert!(book.remove(second_id));
        assert_eq!(book.len(), 2);
        assert_eq!(book.position(third_id), Some(1));
        assert!(book.get(second_id).is_none());

        assert!(!book.remove(second_id), "second delete of same id");
    }

    #[test]
    fn test_render_cache_formats_total_amount() {
        let mut book = OrderBook::default();
        book.append(record("Pen"));
        let mut cache = OrderRenderCache::default();
        cache.rebuild_from(&book);

        assert_eq!(cache.rows.len(), 1);
        let row = &cache.rows[0];
        assert_eq!(row.cells[0], "Pen");
        assert_eq!(row.cells[4], "30.00");
    }

    #[test]
    fn test_render_cache_tracks_book_length() {
        let mut book = OrderBook::default();
        let mut cache = OrderRenderCache::default();
        cache.rebuild_from(&book);
        assert!(cache.rows.is_empty());

        book.append(record("a"));
        book.append(record("b"));
        cache.rebuild_from(&book);
        assert_eq!(cache.rows.len(), book.len());
    }
}
