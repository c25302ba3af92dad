//! Pages
//!
//! One component per route.

mod home;
mod gathering;
mod placeholder;

pub use home::HomeView;
pub use gathering::GatheringView;
pub use placeholder::{CraftingView, FishingView, GoldSaucerView, LogsView, SettingsView, NotFoundView};
