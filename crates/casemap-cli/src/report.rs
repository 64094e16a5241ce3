//! Console rendering for suggestions, validation and resolution results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use casemap_map::{ResolutionReport, similarity};
use casemap_model::{MappedField, MappingValidationResult, MatchType, TypeMapping};

/// Plain-text validation summary, one line per finding.
pub fn render_validation(result: &MappingValidationResult) -> String {
    let mut lines = vec![
        format!(
            "Mapping config: {}",
            if result.is_valid { "valid" } else { "invalid" }
        ),
        format!(
            "Mapped: {}, unmapped: {}",
            result.mapped_count, result.unmapped_count
        ),
    ];
    lines.extend(result.errors.iter().map(|e| format!("error: {e}")));
    lines.extend(result.warnings.iter().map(|w| format!("warning: {w}")));
    lines.join("\n")
}

/// Suggestions as pretty-printed JSON, the shape stored in mapping configs.
pub fn suggestions_json(suggestions: &[TypeMapping]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(suggestions)
}

/// Suggested mappings for one field, with the similarity behind each target.
pub fn suggestion_table(field: MappedField, suggestions: &[TypeMapping]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&format!("{field} (external)")),
        header_cell("Target"),
        header_cell("Similarity"),
        header_cell("Action"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for mapping in suggestions {
        let score = similarity(&mapping.external_value, &mapping.target_value);
        let action = if mapping.auto_create {
            Cell::new("create").fg(Color::Yellow)
        } else {
            Cell::new("existing").fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(&mapping.external_value),
            Cell::new(&mapping.target_value),
            Cell::new(format!("{:.0}%", score * 100.0)),
            action,
        ]);
    }
    table
}

/// Counts of each resolution rule per field.
pub fn resolution_table(reports: &[ResolutionReport]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Field"), header_cell("Rows")];
    header.extend(MatchType::ALL.iter().map(|m| header_cell(m.as_str())));
    header.push(header_cell("Empty"));
    header.push(header_cell("New values"));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=MatchType::ALL.len() + 2 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for report in reports {
        let mut row = vec![
            Cell::new(report.field.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(report.results.len()),
        ];
        row.extend(
            MatchType::ALL
                .iter()
                .map(|m| count_cell(report.count(*m), Color::Reset)),
        );
        row.push(count_cell(report.empty_count(), Color::Red));
        row.push(count_cell(report.to_create.len(), Color::Yellow));
        table.add_row(row);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
