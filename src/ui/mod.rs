//! Terminal user interface: the table view and its widgets.

mod columns;
mod input;
mod table;

pub use columns::{ColumnSpec, COLUMNS};
pub use input::{NumberInput, NumberInputAction};
pub use table::TableView;
