pub mod charts;
pub mod emissions_manager;
pub mod emissions_table;
pub mod header;
pub mod metric_card;
pub mod modals;
pub mod progress_bar;
pub mod section_selector;
pub mod sections;
pub mod sidebar;
pub mod status;

pub use header::Header;
pub use sidebar::Sidebar;
pub use status::Status;
