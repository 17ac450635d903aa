pub mod html;
pub mod page;
pub mod sink;
pub mod text;

pub use page::ResultPage;
pub use sink::{ChartTable, PlaceholderField, PlaceholderSink, TableSink};
