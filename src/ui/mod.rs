pub mod app;
pub mod charts;
pub mod components;
pub mod events;
pub mod layout;
pub mod leads;
pub mod report;
pub mod sheet;
pub mod sidebar;
pub mod snapshot;
pub mod state;
pub mod view;

pub use app::{run_app, DashboardApp};
pub use layout::DashboardLayout;
pub use state::{Region, Visibility, VisibilityAction};
pub use view::View;
