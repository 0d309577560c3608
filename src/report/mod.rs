pub mod chart;
pub mod console;
pub mod history_log;
pub mod window;

pub use chart::{ChartSpec, LegendCorner};
pub use console::accuracy_line;
pub use history_log::append_values;
pub use window::{ChartDisplay, EguiDisplay};
