//! Transform sample data grid rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use ism_client::models::SortDirection;

use crate::transforms::TransformPreview;
use crate::ui::theme::{Theme, spinner_char};

pub const PREVIEW_TITLE: &str = "Select fields to transform";

pub struct PreviewRenderConfig<'a> {
    pub preview: &'a TransformPreview,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

pub fn render_preview(f: &mut Frame, area: Rect, config: PreviewRenderConfig) {
    let PreviewRenderConfig {
        preview,
        theme,
        spinner_frame,
    } = config;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_column_bar(f, chunks[0], preview, theme);

    let mut title = format!("{PREVIEW_TITLE}: {}", preview.source_index());
    if preview.is_loading() {
        title.push(' ');
        title.push(spinner_char(spinner_frame));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.border())
        .title_style(theme.title());

    let visible = preview.visible_columns();
    if visible.is_empty() {
        let empty = Paragraph::new("No fields")
            .style(theme.text_dim())
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, chunks[1]);
        return;
    }

    let header = Row::new(visible.iter().map(|id| Cell::from(header_label(preview, id))))
        .style(theme.table_header());
    let rows: Vec<Row> = if preview.is_read_only() {
        Vec::new()
    } else {
        preview
            .page_rows()
            .map(|row| Row::new(visible.iter().map(|id| Cell::from(preview.render_cell(row, id)))))
            .collect()
    };
    let widths = vec![Constraint::Fill(1); visible.len()];
    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, chunks[1]);

    let footer = format!(
        " Page {} of {}  |  Rows per page: {}  |  Sample rows: {} of {}",
        preview.page_index() + 1,
        preview.page_count(),
        preview.page_size(),
        preview.row_count(),
        preview.total()
    );
    f.render_widget(Paragraph::new(footer).style(theme.text_dim()), chunks[2]);
}

fn header_label(preview: &TransformPreview, id: &str) -> String {
    match preview.sorting_columns().iter().find(|s| s.id == id) {
        Some(s) if s.direction == SortDirection::Asc => format!("{id} ▲"),
        Some(_) => format!("{id} ▼"),
        None => id.to_string(),
    }
}

/// Every field, with its visibility, and the cursor field highlighted.
fn render_column_bar(f: &mut Frame, area: Rect, preview: &TransformPreview, theme: &Theme) {
    let spans: Vec<Span> = preview
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let shown = preview.visible_columns().contains(&column.id);
            let label = format!(" {}{} ", if shown { "+" } else { "-" }, column.id);
            if i == preview.column_cursor() {
                Span::styled(label, theme.highlight())
            } else if shown {
                Span::styled(label, theme.text())
            } else {
                Span::styled(label, theme.text_dim())
            }
        })
        .collect();
    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Columns")
            .border_style(theme.border())
            .title_style(theme.title()),
    );
    f.render_widget(bar, area);
}
