mod add_row;
mod edit_modal;
mod filter_tabs;
mod header;
mod stats_bar;
mod task_list;
mod task_row;
mod toolbar;

pub use add_row::AddRow;
pub use edit_modal::EditModal;
pub use filter_tabs::FilterTabs;
pub use header::Header;
pub use stats_bar::StatsBar;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use toolbar::Toolbar;
