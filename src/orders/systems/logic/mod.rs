// src/orders/systems/logic/mod.rs
mod delete_order;
mod edit_order;
mod submit_order;
mod update_render_cache;

pub use delete_order::handle_delete_order;
pub use edit_order::handle_edit_order;
pub use submit_order::handle_submit_order;
pub use update_render_cache::handle_order_book_changed;
