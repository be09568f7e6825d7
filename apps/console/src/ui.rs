//! Ratatui widgets for the details screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use view::{Emphasis, EmployeeView, PAGE_TITLE, PageState};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn draw(f: &mut Frame, state: &PageState, selected: usize, tick: usize) {
    match state {
        PageState::Loading => draw_loading(f, tick),
        PageState::Loaded(view) => draw_view(f, view, selected),
    }
}

fn draw_loading(f: &mut Frame, tick: usize) {
    let frame = SPINNER[tick % SPINNER.len()];
    let loading = Paragraph::new(format!("{frame} Loading employee details..."))
        .centered()
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(loading, f.area());
}

fn draw_view(f: &mut Frame, view: &EmployeeView, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0], view);
    draw_grid(f, chunks[1], view);
    draw_address(f, chunks[2], view);
    draw_attachments(f, chunks[3], view, selected);
    draw_hints(f, chunks[4]);
}

fn draw_header(f: &mut Frame, area: Rect, view: &EmployeeView) {
    let title = Line::from(vec![
        Span::styled(PAGE_TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(format!("[{}]", view.role), Style::default().fg(Color::Green)),
    ]);
    let header = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_grid(f: &mut Frame, area: Rect, view: &EmployeeView) {
    let grid = view.grid();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (column, items) in columns.iter().zip(grid.chunks(4)) {
        let lines: Vec<Line> = items
            .iter()
            .map(|(label, value, emphasis)| {
                let value_style = match emphasis {
                    Emphasis::Highlight => {
                        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
                    }
                    Emphasis::Badge => Style::default().fg(Color::Yellow),
                    Emphasis::Normal => Style::default(),
                };
                Line::from(vec![
                    Span::styled(format!("{label:<16}"), Style::default().fg(Color::DarkGray)),
                    Span::styled(*value, value_style),
                ])
            })
            .collect();
        let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(panel, *column);
    }
}

fn draw_address(f: &mut Frame, area: Rect, view: &EmployeeView) {
    let address = Paragraph::new(view.address.as_str())
        .block(Block::default().borders(Borders::ALL).title(" Address "));
    f.render_widget(address, area);
}

fn draw_attachments(f: &mut Frame, area: Rect, view: &EmployeeView, selected: usize) {
    let items: Vec<ListItem> = view
        .attachments
        .iter()
        .enumerate()
        .map(|(index, attachment)| {
            let marker = if index == selected { "> " } else { "  " };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::raw(format!("{:<24}", attachment.label)),
                Span::styled(
                    attachment.size.as_str(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let item = ListItem::new(line);
            if index == selected {
                item.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                item
            }
        })
        .collect();
    let list =
        List::new(items).block(Block::default().borders(Borders::ALL).title(" Attachments "));
    f.render_widget(list, area);
}

fn draw_hints(f: &mut Frame, area: Rect) {
    let hints = Paragraph::new("j/k select  Enter/d download  q quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, area);
}
