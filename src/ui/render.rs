use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState,
};
use ratatui::Frame;

use crate::jar::JarState;
use crate::ui::app::{App, CatalogLoad, Focus, JarView};
use crate::ui::catalog::{CatalogProjection, CatalogRow, ViewType};
use crate::ui::theme::{
    chart_color, ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    STATUS_ERROR, TOTAL_CALORIES, TOTAL_ITEMS,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    draw_catalog(frame, panels[0], app);
    draw_jar(frame, panels[1], app);

    draw_footer(frame, chunks[2], app);
}

/// Whole calories print without decimals, anything else with one.
pub fn format_calories(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn panel(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
}

fn draw_header(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let status = match app.load() {
        CatalogLoad::Loading => Span::styled("loading catalog…", Style::default().fg(MUTED_TEXT)),
        CatalogLoad::Failed(_) => {
            Span::styled("catalog unavailable", Style::default().fg(STATUS_ERROR))
        }
        CatalogLoad::Ready if app.is_refreshing() => {
            Span::styled("refreshing…", Style::default().fg(MUTED_TEXT))
        }
        CatalogLoad::Ready => Span::styled(
            format!("{} fruits", app.fruits().len()),
            Style::default().fg(MUTED_TEXT),
        ),
    };

    let line = Line::from(vec![
        Span::styled(" 🫙 fruitjar", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(" │ ", Style::default().fg(MUTED_TEXT)),
        status,
    ]);
    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = if let Some(notice) = app.notice() {
        Line::from(Span::styled(format!(" {}", notice), Style::default().fg(STATUS_ERROR)))
    } else {
        let hints = match (app.focus(), app.catalog_view().searching) {
            (_, true) => " Type to search │ Enter/Esc: Done │ Ctrl+U: Clear",
            (Focus::Catalog, false) => {
                " /: Search │ g: Group │ v: View │ a: Add │ A: Add group │ Enter: Open │ Tab: Jar │ r: Reload │ q: Quit"
            }
            (Focus::Jar, false) => {
                " +/-: Quantity │ d: Remove │ c: Clear │ v: List/Chart │ Tab: Fruits │ q: Quit"
            }
        };
        let version = format!("v{} ", VERSION);
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());
        Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ])
    };

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

fn draw_catalog(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = panel("Fruits", app.focus() == Focus::Catalog);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.load() {
        CatalogLoad::Loading => {
            frame.render_widget(
                Paragraph::new("Loading fruits…")
                    .style(Style::default().fg(MUTED_TEXT))
                    .alignment(Alignment::Center),
                inner,
            );
            return;
        }
        CatalogLoad::Failed(message) => {
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled(message.clone(), Style::default().fg(STATUS_ERROR))),
                    Line::from(Span::styled("Press r to retry", Style::default().fg(MUTED_TEXT))),
                ])
                .alignment(Alignment::Center),
                inner,
            );
            return;
        }
        CatalogLoad::Ready => {}
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let view = app.catalog_view();
    let search_style = if view.searching {
        Style::default().fg(FOCUS_BORDER)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };
    let search_text = if view.query.is_empty() && !view.searching {
        Span::styled(
            "Search fruits by name, family, order, or genus...",
            Style::default().fg(MUTED_TEXT),
        )
    } else {
        let cursor = if view.searching { "▏" } else { "" };
        Span::raw(format!("{}{}", view.query, cursor))
    };
    frame.render_widget(
        Paragraph::new(Line::from(search_text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(search_style)
                .title(" / "),
        ),
        chunks[0],
    );

    let projection = view.project(app.fruits());
    let summary_style = if projection.summary.no_matches() {
        Style::default().fg(STATUS_ERROR)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    let controls = Line::from(vec![
        Span::styled(" Group by: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(view.group_by.as_str(), Style::default().fg(HEADER_TEXT)),
        Span::styled(" │ View: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(view.view_type.label(), Style::default().fg(HEADER_TEXT)),
        Span::styled(" │ ", Style::default().fg(MUTED_TEXT)),
        Span::styled(projection.summary.to_string(), summary_style),
    ]);
    frame.render_widget(Paragraph::new(controls), chunks[1]);

    let focused = app.focus() == Focus::Catalog;
    match view.view_type {
        ViewType::List => draw_catalog_list(frame, chunks[2], &projection, view.cursor, focused),
        ViewType::Table => draw_catalog_table(frame, chunks[2], &projection, view.cursor, focused),
    }
}

fn highlight(focused: bool) -> Style {
    if focused {
        Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn selection(cursor: usize, len: usize) -> Option<usize> {
    len.checked_sub(1).map(|last| cursor.min(last))
}

fn group_label(name: &str, count: usize, expanded: bool) -> Line<'static> {
    let marker = if expanded { "▾" } else { "▸" };
    Line::from(vec![
        Span::styled(
            format!("{} {}", marker, name),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" ({})", count), Style::default().fg(MUTED_TEXT)),
    ])
}

fn draw_catalog_list(
    frame: &mut Frame<'_>,
    area: Rect,
    projection: &CatalogProjection<'_>,
    cursor: usize,
    focused: bool,
) {
    let rows = projection.rows();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match *row {
            CatalogRow::Group {
                name,
                count,
                expanded,
            } => ListItem::new(group_label(name, count, expanded)),
            CatalogRow::Fruit(fruit) => ListItem::new(Line::from(vec![
                Span::raw(format!("  {:<20}", fruit.name)),
                Span::styled(
                    format!("{} cal", format_calories(fruit.calories())),
                    Style::default().fg(ACCENT),
                ),
            ])),
        })
        .collect();

    let mut state = ListState::default().with_selected(selection(cursor, rows.len()));
    let list = List::new(items).highlight_style(highlight(focused));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_catalog_table(
    frame: &mut Frame<'_>,
    area: Rect,
    projection: &CatalogProjection<'_>,
    cursor: usize,
    focused: bool,
) {
    let rows = projection.rows();
    let table_rows: Vec<Row> = rows
        .iter()
        .map(|row| match *row {
            CatalogRow::Group {
                name,
                count,
                expanded,
            } => Row::new(vec![Cell::from(group_label(name, count, expanded))]),
            CatalogRow::Fruit(fruit) => Row::new(vec![
                Cell::from(fruit.name.clone()),
                Cell::from(fruit.family.clone()),
                Cell::from(fruit.order.clone()),
                Cell::from(fruit.genus.clone()),
                Cell::from(format_calories(fruit.calories())).style(Style::default().fg(ACCENT)),
            ]),
        })
        .collect();

    let header = Row::new(vec!["Name", "Family", "Order", "Genus", "Calories"])
        .style(Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD));
    let widths = [
        Constraint::Percentage(24),
        Constraint::Percentage(22),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
        Constraint::Percentage(14),
    ];
    let table = Table::new(table_rows, widths)
        .header(header)
        .row_highlight_style(highlight(focused));

    let mut state = TableState::default().with_selected(selection(cursor, rows.len()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_jar(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = panel("Fruit Jar", app.focus() == Focus::Jar);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let jar = app.jar();
    let totals = Line::from(vec![
        Span::styled(
            jar.total_items().to_string(),
            Style::default().fg(TOTAL_ITEMS).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Total Fruits   ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            format_calories(jar.total_calories()),
            Style::default().fg(TOTAL_CALORIES).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Total Calories", Style::default().fg(MUTED_TEXT)),
    ]);
    frame.render_widget(
        Paragraph::new(totals).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        chunks[0],
    );

    if jar.is_empty() {
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(""),
                Line::from("🫙"),
                Line::from(Span::styled("Your jar is empty", Style::default().fg(HEADER_TEXT))),
                Line::from(Span::styled(
                    "Add some fruits to get started!",
                    Style::default().fg(MUTED_TEXT),
                )),
            ])
            .alignment(Alignment::Center),
            chunks[1],
        );
        return;
    }

    match app.jar_view() {
        JarView::List => {
            let focused = app.focus() == Focus::Jar;
            draw_jar_list(frame, chunks[1], jar, app.jar_cursor(), focused)
        }
        JarView::Chart => draw_jar_chart(frame, chunks[1], jar),
    }
}

fn draw_jar_list(frame: &mut Frame<'_>, area: Rect, jar: &JarState, cursor: usize, focused: bool) {
    let items: Vec<ListItem> = jar
        .items()
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<18}", item.fruit.name),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled(format!(" ×{:<4}", item.quantity), Style::default().fg(TOTAL_ITEMS)),
                Span::styled(
                    format!(" {} cal/fruit ", format_calories(item.fruit.calories())),
                    Style::default().fg(MUTED_TEXT),
                ),
                Span::styled(
                    format!(" Total: {} cal", format_calories(item.line_calories())),
                    Style::default().fg(TOTAL_ITEMS),
                ),
            ]))
        })
        .collect();

    let mut state = ListState::default().with_selected(selection(cursor, jar.items().len()));
    let list = List::new(items).highlight_style(highlight(focused));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Horizontal share bars standing in for a pie chart.
fn draw_jar_chart(frame: &mut Frame<'_>, area: Rect, jar: &JarState) {
    const LABEL_WIDTH: usize = 16;
    const PERCENT_WIDTH: usize = 6;
    let bar_width = (area.width as usize).saturating_sub(LABEL_WIDTH + PERCENT_WIDTH + 2);

    let lines: Vec<Line> = jar
        .calorie_shares()
        .into_iter()
        .enumerate()
        .map(|(index, (item, share))| {
            let filled = (share * bar_width as f64).round() as usize;
            let name: String = item.fruit.name.chars().take(LABEL_WIDTH - 1).collect();
            Line::from(vec![
                Span::styled(
                    format!("{:<width$} ", name, width = LABEL_WIDTH - 1),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled("█".repeat(filled), Style::default().fg(chart_color(index))),
                Span::styled(
                    format!(" {:>3.0}%", share * 100.0),
                    Style::default().fg(MUTED_TEXT),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
