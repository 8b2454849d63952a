mod bar_chart;
mod controls;
mod pagination;
mod pie_chart;
mod plot;
mod statistics;
mod table;

pub use bar_chart::BarChartView;
pub use controls::Controls;
pub use pagination::Pagination;
pub use pie_chart::PieChartView;
pub use statistics::StatisticsView;
pub use table::TransactionsView;
