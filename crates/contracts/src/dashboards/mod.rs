pub mod d400_weekly_performance;
pub mod d401_gross_margin;
