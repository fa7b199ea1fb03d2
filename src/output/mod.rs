pub mod formatter;

pub use formatter::{
    format_breakdown, format_json, format_score_table, format_weights, progress_bar,
    should_use_colors,
};
