use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::output::format::{NumberFormat, format_number};
use crate::pricing::{InferenceRun, PricingCatalog, compare_costs, format_cost_comparison, format_usd};
use crate::tracks::TRACKS;

fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

pub(crate) fn print_tracks_table(use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Track", use_color),
        header_cell("Name", use_color),
        header_cell("Data file", use_color),
        header_cell("Sample question", use_color),
    ]);

    for track in &TRACKS {
        table.add_row(vec![
            styled_cell(track.key.slug(), use_color.then_some(Color::Green), true),
            Cell::new(track.name),
            Cell::new(track.file),
            Cell::new(track.queries[0]),
        ]);
    }

    println!("{table}");
}

pub(crate) fn output_tracks_json() -> String {
    let tracks: Vec<serde_json::Value> = TRACKS
        .iter()
        .map(|track| {
            serde_json::json!({
                "key": track.key.slug(),
                "name": track.name,
                "file": track.file,
                "queries": track.queries,
            })
        })
        .collect();
    serde_json::to_string(&tracks).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {e}");
        "[]".to_string()
    })
}

pub(crate) fn print_estimate_table(
    run: &InferenceRun,
    catalog: &PricingCatalog,
    number_format: NumberFormat,
    use_color: bool,
) {
    println!(
        "Tokens: {} in / {} out",
        format_number(run.input_tokens, number_format),
        format_number(run.output_tokens, number_format)
    );

    let comparison = compare_costs(catalog, run);
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Provider", use_color),
        header_cell("$/M input", use_color),
        header_cell("$/M output", use_color),
        header_cell("Est. cost", use_color),
    ]);

    table.add_row(vec![
        styled_cell("Local (Ollama)", use_color.then_some(Color::Green), true),
        right_cell("-", None, false),
        right_cell("-", None, false),
        right_cell(
            &format_usd(comparison.local_cost),
            use_color.then_some(Color::Green),
            true,
        ),
    ]);
    for (schedule, costed) in catalog.schedules().iter().zip(&comparison.schedules) {
        table.add_row(vec![
            Cell::new(schedule.name),
            right_cell(&format_usd(schedule.input_rate), None, false),
            right_cell(&format_usd(schedule.output_rate), None, false),
            right_cell(&format_usd(costed.cost), None, false),
        ]);
    }

    println!("{table}");
    println!("{}", format_cost_comparison(catalog, run));
}

pub(crate) fn output_estimate_json(run: &InferenceRun, catalog: &PricingCatalog) -> String {
    let comparison = compare_costs(catalog, run);
    let schedules: Vec<serde_json::Value> = catalog
        .schedules()
        .iter()
        .zip(&comparison.schedules)
        .map(|(schedule, costed)| {
            serde_json::json!({
                "name": schedule.name,
                "input_rate_per_million": schedule.input_rate,
                "output_rate_per_million": schedule.output_rate,
                "cost": costed.cost,
            })
        })
        .collect();

    let output = serde_json::json!({
        "elapsed_seconds": run.elapsed_seconds,
        "input_tokens": run.input_tokens,
        "output_tokens": run.output_tokens,
        "local_cost": comparison.local_cost,
        "schedules": schedules,
        "formatted": {
            "comparison": format_cost_comparison(catalog, run),
        }
    });

    serde_json::to_string(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {e}");
        "{}".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_json_lists_all_tracks() {
        let json = output_tracks_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 4);
        assert_eq!(arr[1]["key"].as_str(), Some("city"));
        assert_eq!(arr[1]["queries"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn estimate_json_million_tokens_equals_rate_sum() {
        let catalog = PricingCatalog::default();
        let run = InferenceRun::new(5.0, 1_000_000, 1_000_000);
        let json = output_estimate_json(&run, &catalog);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["local_cost"].as_f64(), Some(0.0));
        for entry in value["schedules"].as_array().unwrap() {
            let expected = entry["input_rate_per_million"].as_f64().unwrap()
                + entry["output_rate_per_million"].as_f64().unwrap();
            assert_eq!(entry["cost"].as_f64(), Some(expected));
        }
    }

    #[test]
    fn estimate_json_zero_run() {
        let catalog = PricingCatalog::default();
        let run = InferenceRun::new(0.0, 0, 0);
        let json = output_estimate_json(&run, &catalog);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        for entry in value["schedules"].as_array().unwrap() {
            assert_eq!(entry["cost"].as_f64(), Some(0.0));
        }
        assert!(
            value["formatted"]["comparison"]
                .as_str()
                .unwrap()
                .starts_with("$0.00 locally")
        );
    }
}
