//! Managed indices screen rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState},
};

use ism_client::models::SortDirection;

use crate::managed_indices::ManagedIndicesController;
use crate::managed_indices::columns::{Column, empty_message, visible_columns};
use crate::ui::theme::{Theme, spinner_char};
use crate::ui::{centered_rect, modal};

pub const SEARCH_PLACEHOLDER: &str = "Search index name";
pub const NO_DATA_STREAMS: &str = "No data streams found";

pub struct ManagedIndicesRenderConfig<'a> {
    pub controller: &'a ManagedIndicesController,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

pub fn render_managed_indices(f: &mut Frame, area: Rect, config: ManagedIndicesRenderConfig) {
    let ManagedIndicesRenderConfig {
        controller,
        theme,
        spinner_frame,
    } = config;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_search_bar(f, chunks[0], controller, theme);
    render_table(f, chunks[1], controller, theme, spinner_frame);
    render_pagination(f, chunks[2], controller, theme);
    render_bulk_actions(f, chunks[3], controller, theme);

    if controller.data_stream_filter().open {
        render_data_stream_filter(f, area, controller, theme);
    }
    if let Some(m) = controller.modal().modal() {
        modal::render_modal(f, m, controller.modal().is_submitting(), theme);
    }
}

fn render_search_bar(f: &mut Frame, area: Rect, controller: &ManagedIndicesController, theme: &Theme) {
    let query = controller.query();
    let editing = controller.is_editing_search();
    let search = if query.search_text.is_empty() && !editing {
        Span::styled(SEARCH_PLACEHOLDER, theme.text_dim())
    } else {
        Span::styled(query.search_text.as_str(), theme.text())
    };
    let mut spans = vec![search];
    if editing {
        spans.push(Span::styled("_", theme.title()));
    }
    let toggle = if query.show_data_streams { "[x]" } else { "[ ]" };
    spans.push(Span::styled(
        format!("   {toggle} Show data streams"),
        theme.text_dim(),
    ));

    let border = if editing {
        theme.border_focused()
    } else {
        theme.border()
    };
    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(border)
            .title_style(theme.title()),
    );
    f.render_widget(bar, area);
}

fn header_label(column: Column, controller: &ManagedIndicesController) -> String {
    let query = controller.query();
    match column.sort_field() {
        Some(field) if field == query.sort_field => {
            let arrow = match query.sort_direction {
                SortDirection::Asc => "▲",
                SortDirection::Desc => "▼",
            };
            format!("{} {arrow}", column.header())
        }
        _ => column.header().to_string(),
    }
}

fn render_table(
    f: &mut Frame,
    area: Rect,
    controller: &ManagedIndicesController,
    theme: &Theme,
    spinner_frame: u8,
) {
    let columns = visible_columns(controller.is_data_stream_column_visible());
    let mut title = format!("Managed Indices ({})", controller.total());
    if controller.is_loading() {
        title.push(' ');
        title.push(spinner_char(spinner_frame));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.border())
        .title_style(theme.title());

    if controller.records().is_empty() {
        let message = empty_message(controller.is_loading(), controller.is_filter_applied());
        let empty = Paragraph::new(message)
            .style(theme.text_dim())
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        std::iter::once(Cell::from(" "))
            .chain(columns.iter().map(|c| Cell::from(header_label(*c, controller)))),
    )
    .style(theme.table_header());

    let rows = controller.records().iter().map(|record| {
        let mark = if controller.selection().contains(&record.index) {
            "[x]"
        } else {
            "[ ]"
        };
        Row::new(
            std::iter::once(Cell::from(mark)).chain(columns.iter().map(|c| Cell::from(c.cell(record)))),
        )
    });

    let widths = std::iter::once(Constraint::Length(3)).chain(columns.iter().map(|c| match c {
        Column::Index => Constraint::Percentage(22),
        Column::Info => Constraint::Percentage(24),
        _ => Constraint::Fill(1),
    }));

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.highlight());
    let mut state = TableState::default().with_selected(Some(controller.cursor()));
    f.render_stateful_widget(table, area, &mut state);
}

fn render_pagination(f: &mut Frame, area: Rect, controller: &ManagedIndicesController, theme: &Theme) {
    let query = controller.query();
    let text = format!(
        " Page {} of {}  |  Rows per page: {}  |  Selected: {}",
        query.page_index + 1,
        controller.page_count(),
        query.page_size,
        controller.selection().len()
    );
    f.render_widget(Paragraph::new(text).style(theme.text_dim()), area);
}

fn render_bulk_actions(f: &mut Frame, area: Rect, controller: &ManagedIndicesController, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(" [x] Remove policy ", theme.action(controller.can_remove_policy())),
        Span::styled(" [t] Retry policy ", theme.action(controller.can_retry())),
        Span::styled(
            " [a] Edit rollover alias ",
            theme.action(controller.can_edit_rollover_alias()),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_data_stream_filter(
    f: &mut Frame,
    area: Rect,
    controller: &ManagedIndicesController,
    theme: &Theme,
) {
    let filter = controller.data_stream_filter();
    let popup = centered_rect(40, 50, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Data streams")
        .border_style(theme.border_focused())
        .title_style(theme.title());

    if filter.options.is_empty() {
        let text = if filter.loading { "Loading..." } else { NO_DATA_STREAMS };
        let empty = Paragraph::new(text)
            .style(theme.text_dim())
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, popup);
        return;
    }

    let items: Vec<ListItem> = filter
        .options
        .iter()
        .map(|name| ListItem::new(name.as_str()))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(theme.highlight());
    let mut state = ListState::default().with_selected(Some(filter.cursor));
    f.render_stateful_widget(list, popup, &mut state);
}
