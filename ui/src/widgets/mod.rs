mod chip;
mod data_table;
mod stat_card;

pub use chip::{
    chip, property_type_color, rate_chip, rate_level_color, tax_status_color, user_status_color,
};
pub use data_table::{DataTableState, data_table, page_label, sort_label};
pub use stat_card::stat_card;
