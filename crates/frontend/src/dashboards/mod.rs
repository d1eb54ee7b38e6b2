pub mod d400_weekly_performance;
pub mod d401_gross_margin;

pub use d400_weekly_performance::ui::dashboard::WeeklyPerformanceDashboard;
pub use d401_gross_margin::ui::dashboard::GrossMarginDashboard;
