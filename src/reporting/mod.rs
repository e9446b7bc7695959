pub mod formatter;

pub use formatter::{
    export_record_json, format_category_markdown, format_records_table, format_report_markdown,
};
