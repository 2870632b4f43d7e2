//! UI Components
//!
//! Reusable GTK4 widgets for the gym manager.
//!
//! # Components
//!
//! - `member_list.rs` - Breakpoint-aware member list (cards or table rows)
//! - `search_bar.rs` - Real-time member search
//! - `dashboard_panel.rs` - Stats strip (members, subscriptions, check-ins, revenue)
//! - `details_panel.rs` - Selected member details and actions
//! - `member_dialog.rs` - Add/edit member dialog

mod dashboard_panel;
mod details_panel;
mod member_dialog;
mod member_list;
mod search_bar;

pub use dashboard_panel::DashboardPanel;
pub use details_panel::DetailsPanel;
pub use member_dialog::{MemberDialog, MemberForm};
pub use member_list::MemberList;
pub use search_bar::SearchBar;
