//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod toast_host;
mod delete_confirm_button;
mod gathering_form;
mod gathering_table;
mod progress_panel;

pub use nav_bar::NavBar;
pub use toast_host::ToastHost;
pub use delete_confirm_button::DeleteConfirmButton;
pub use gathering_form::GatheringForm;
pub use gathering_table::GatheringTable;
pub use progress_panel::ProgressPanel;
