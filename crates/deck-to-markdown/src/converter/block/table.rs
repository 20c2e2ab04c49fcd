//! Table rendering to pipe tables.
//!
//! Header cells come from the first `<thead>` row, or from the table's first
//! `<tr>` when there is no usable `<thead>`. Body rows come from the first
//! `<tbody>` when present, else from the table itself. Row and section
//! searches never descend into nested tables.

use log::trace;

use crate::converter::main::Renderer;
use crate::converter::tag::TagKind;
use crate::converter::utility::attributes::get_attr;
use crate::converter::utility::content::{child_handles, element, find_element_within, normalized_tag_name};
use crate::options::HeaderlessTables;
use crate::text::escape_table_cell;

/// Column alignment taken from a header cell's `align` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Alignment {
    Left,
    Center,
    Right,
    #[default]
    None,
}

impl Alignment {
    fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("left") => Self::Left,
            Some(v) if v.eq_ignore_ascii_case("center") => Self::Center,
            Some(v) if v.eq_ignore_ascii_case("right") => Self::Right,
            _ => Self::None,
        }
    }

    const fn marker(self) -> &'static str {
        match self {
            Self::Left => ":---",
            Self::Center => ":---:",
            Self::Right => "---:",
            Self::None => "---",
        }
    }
}

/// Cells collected from a `<table>` before emission.
#[derive(Debug, Default)]
struct TableLayout {
    headers: Vec<String>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<String>>,
}

/// A `<tr>` together with whether its direct parent is a `<thead>`.
struct RowRef {
    handle: tl::NodeHandle,
    in_head: bool,
}

/// Render a `<table>` element; the block ends with a blank line.
pub(crate) fn render_table(renderer: &Renderer<'_, '_>, table: &tl::HTMLTag<'_>) -> String {
    let layout = collect_layout(renderer, table);
    trace!(
        "table with {} header cells and {} body rows",
        layout.headers.len(),
        layout.rows.len()
    );
    emit_table(&layout, renderer.options().headerless_tables)
}

fn collect_layout(renderer: &Renderer<'_, '_>, table: &tl::HTMLTag<'_>) -> TableLayout {
    let parser = renderer.parser();
    let table_children = child_handles(table);
    let mut layout = TableLayout::default();

    let head_row = find_in_table(&table_children, parser, "thead")
        .and_then(|thead| element(thead, parser))
        .and_then(|thead| find_in_table(&child_handles(thead), parser, "tr"));
    if let Some(row) = head_row.and_then(|handle| element(handle, parser)) {
        push_header_cells(renderer, row, &mut layout);
    }

    let mut fallback_header = None;
    if layout.headers.is_empty() {
        if let Some(first_row) = find_in_table(&table_children, parser, "tr") {
            if let Some(row) = element(first_row, parser) {
                push_header_cells(renderer, row, &mut layout);
                fallback_header = Some(first_row.get_inner());
            }
        }
    }

    let body_scope = find_in_table(&table_children, parser, "tbody")
        .and_then(|tbody| element(tbody, parser))
        .map_or_else(|| table_children.clone(), child_handles);

    let mut row_refs = Vec::new();
    collect_rows(&body_scope, parser, false, &mut row_refs);

    for row_ref in row_refs {
        if row_ref.in_head || Some(row_ref.handle.get_inner()) == fallback_header {
            continue;
        }
        let Some(row) = element(row_ref.handle, parser) else {
            continue;
        };
        let cells = row_cells(row, parser)
            .into_iter()
            .map(|cell| escape_table_cell(renderer.render_inline(cell).trim()).into_owned())
            .collect();
        layout.rows.push(cells);
    }

    layout
}

fn push_header_cells(renderer: &Renderer<'_, '_>, row: &tl::HTMLTag<'_>, layout: &mut TableLayout) {
    for cell in row_cells(row, renderer.parser()) {
        layout
            .headers
            .push(escape_table_cell(renderer.render_inline(cell).trim()).into_owned());
        layout
            .alignments
            .push(Alignment::from_attr(get_attr(cell, "align").as_deref()));
    }
}

/// `<th>`/`<td>` children of a row, in document order.
fn row_cells<'p, 'buf>(row: &tl::HTMLTag<'_>, parser: &'p tl::Parser<'buf>) -> Vec<&'p tl::HTMLTag<'buf>> {
    child_handles(row)
        .into_iter()
        .filter_map(|handle| element(handle, parser))
        .filter(|cell| TagKind::from_name(&normalized_tag_name(cell.name().as_utf8_str())) == TagKind::TableCell)
        .collect()
}

fn find_in_table(handles: &[tl::NodeHandle], parser: &tl::Parser<'_>, target: &str) -> Option<tl::NodeHandle> {
    find_element_within(handles, parser, &|name, _| name == target, &|name| name != "table")
}

/// Every `<tr>` below `handles` in document order, skipping nested tables.
fn collect_rows(handles: &[tl::NodeHandle], parser: &tl::Parser<'_>, parent_is_head: bool, rows: &mut Vec<RowRef>) {
    for &handle in handles {
        let Some(tag) = element(handle, parser) else {
            continue;
        };
        let name = normalized_tag_name(tag.name().as_utf8_str());
        match TagKind::from_name(&name) {
            TagKind::Table => {}
            TagKind::TableRow => {
                rows.push(RowRef {
                    handle,
                    in_head: parent_is_head,
                });
                collect_rows(&child_handles(tag), parser, false, rows);
            }
            _ => collect_rows(&child_handles(tag), parser, name == "thead", rows),
        }
    }
}

fn emit_table(layout: &TableLayout, headerless: HeaderlessTables) -> String {
    let mut lines = Vec::with_capacity(layout.rows.len() + 2);

    if !layout.headers.is_empty() {
        lines.push(pipe_row(&layout.headers));
        let markers: Vec<&str> = layout.alignments.iter().map(|a| a.marker()).collect();
        lines.push(pipe_row(&markers));
    } else if headerless == HeaderlessTables::Synthesize {
        let width = layout.rows.iter().map(Vec::len).max().unwrap_or(0);
        if width > 0 {
            lines.push(pipe_row(&vec![""; width]));
            lines.push(pipe_row(&vec![Alignment::None.marker(); width]));
        }
    }

    lines.extend(layout.rows.iter().map(|row| pipe_row(row)));

    let mut output = lines.join("\n");
    output.push_str("\n\n");
    output
}

fn pipe_row<S: AsRef<str>>(cells: &[S]) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push(' ');
        line.push_str(cell.as_ref());
        line.push_str(" |");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ConversionOptions;

    fn convert(html: &str) -> String {
        crate::converter::main::convert_html(html, &ConversionOptions::default()).unwrap()
    }

    fn convert_synthesized(html: &str) -> String {
        let options = ConversionOptions::default().with_headerless_tables(HeaderlessTables::Synthesize);
        crate::converter::main::convert_html(html, &options).unwrap()
    }

    #[test]
    fn test_alignment_tokens() {
        assert_eq!(Alignment::from_attr(Some("CENTER")), Alignment::Center);
        assert_eq!(Alignment::from_attr(Some("right")), Alignment::Right);
        assert_eq!(Alignment::from_attr(Some("Left")), Alignment::Left);
        assert_eq!(Alignment::from_attr(Some("justify")), Alignment::None);
        assert_eq!(Alignment::from_attr(None), Alignment::None);
        assert_eq!(Alignment::Center.marker(), ":---:");
        assert_eq!(Alignment::None.marker(), "---");
    }

    #[test]
    fn test_thead_alignment_and_pipe_escape() {
        let html = r#"<table><thead><tr><th align="center">X</th></tr></thead><tbody><tr><td>a|b</td></tr></tbody></table>"#;
        assert_eq!(convert(html), "| X |\n| :---: |\n| a\\|b |");
    }

    #[test]
    fn test_pipe_in_header_cell_is_escaped() {
        let html = "<table><thead><tr><th>A|B</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>";
        assert_eq!(convert(html), "| A\\|B |\n| --- |\n| 1 |");
    }

    #[test]
    fn test_header_fallback_to_first_row() {
        let html = "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>";
        assert_eq!(convert(html), "| A | B |\n| --- | --- |\n| 1 | 2 |");
    }

    #[test]
    fn test_fallback_row_inside_tbody_not_repeated() {
        let html = "<table><tbody><tr><td>A</td></tr><tr><td>1</td></tr></tbody></table>";
        assert_eq!(convert(html), "| A |\n| --- |\n| 1 |");
    }

    #[test]
    fn test_mixed_alignments() {
        let html = concat!(
            "<table><thead><tr>",
            r#"<th align="left">Command</th><th>Effect</th><th align="right">Count</th>"#,
            "</tr></thead><tbody>",
            "<tr><td><code>git help</code></td><td>list <b>common</b> commands</td><td>1</td></tr>",
            "</tbody></table>"
        );
        assert_eq!(
            convert(html),
            "| Command | Effect | Count |\n| :--- | --- | ---: |\n| `git help` | list **common** commands | 1 |"
        );
    }

    #[test]
    fn test_rows_without_tbody_skip_thead() {
        let html = "<table><thead><tr><th>H</th></tr></thead><tr><td>r1</td></tr><tr><td>r2</td></tr></table>";
        assert_eq!(convert(html), "| H |\n| --- |\n| r1 |\n| r2 |");
    }

    #[test]
    fn test_cells_are_trimmed() {
        let html = "<table>\n  <tr>\n    <th>  Name  </th>\n  </tr>\n  <tr>\n    <td>\n  value \n</td>\n  </tr>\n</table>";
        assert_eq!(convert(html), "| Name |\n| --- |\n| value |");
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(convert("<table></table>"), "");
    }

    #[test]
    fn test_headerless_passthrough_keeps_body_rows() {
        let layout = TableLayout {
            rows: vec![vec!["1".to_string(), "2".to_string()]],
            ..TableLayout::default()
        };
        assert_eq!(emit_table(&layout, HeaderlessTables::Passthrough), "| 1 | 2 |\n\n");
    }

    #[test]
    fn test_headerless_synthesize_adds_header() {
        let layout = TableLayout {
            rows: vec![vec!["1".to_string()], vec!["2".to_string(), "3".to_string()]],
            ..TableLayout::default()
        };
        assert_eq!(
            emit_table(&layout, HeaderlessTables::Synthesize),
            "|  |  |\n| --- | --- |\n| 1 |\n| 2 | 3 |\n\n"
        );
    }

    #[test]
    fn test_header_only_table_synthesize_is_noop() {
        let html = "<table><tr><th>Only</th></tr></table>";
        assert_eq!(convert_synthesized(html), "| Only |\n| --- |");
    }

    #[test]
    fn test_nested_table_rows_stay_in_cell() {
        let html = concat!(
            "<table><tr><th>Outer</th></tr>",
            "<tr><td><table><tr><td>inner</td></tr></table></td></tr></table>"
        );
        let markdown = convert(html);
        assert!(markdown.starts_with("| Outer |\n| --- |\n| "));
        assert_eq!(markdown.lines().filter(|line| line.starts_with("| ")).count(), 3);
    }

    #[test]
    fn test_table_between_paragraphs() {
        let html = "<p>before</p><table><tr><th>A</th></tr><tr><td>1</td></tr></table><p>after</p>";
        assert_eq!(convert(html), "before\n\n| A |\n| --- |\n| 1 |\n\nafter");
    }
}
