pub mod d100_admin_overview;

pub use d100_admin_overview::ui::AdminOverviewDashboard;
