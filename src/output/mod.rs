mod banner;
mod format;
mod table;

pub(crate) use banner::{light_rule, print_header, print_prompt, print_run_footer};
pub(crate) use format::{NumberFormat, format_compact, format_seconds};
pub(crate) use table::{
    output_estimate_json, output_tracks_json, print_estimate_table, print_tracks_table,
};
