pub mod formatter;

pub use formatter::{
    format_json, format_removed, format_report, format_report_line, format_summary,
    format_user_detail, removed_players, should_use_colors,
};
