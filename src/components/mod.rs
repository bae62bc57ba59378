//! UI Components
//!
//! Leptos components for the packing list page.

mod logo;
mod add_item_form;
mod item_row;
mod packing_list;
mod list_controls;
mod stats_footer;

pub use logo::Logo;
pub use add_item_form::AddItemForm;
pub use item_row::ItemRow;
pub use packing_list::PackingList;
pub use list_controls::ListControls;
pub use stats_footer::StatsFooter;
