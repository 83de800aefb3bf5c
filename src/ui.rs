//! Screen drawing - pure functions from `RenderState` to a ratatui frame

use ratatui::{prelude::*, widgets::*};

use crate::config::RefreshReset;
use crate::constants::{APP_NAME, LOAD_BUTTON_LABEL};
use crate::messages::{IndicatorState, RenderState};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Accent used for the button and the refresh indicator
pub const PRIMARY: Color = Color::Rgb(0x1e, 0x88, 0xe5);

/// Screen regions, shared by drawing and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub list: Rect,
    pub toast: Rect,
    pub button: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title + refresh indicator
                Constraint::Min(3),    // List
                Constraint::Length(1), // Toast
                Constraint::Length(3), // Load button
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        ScreenLayout {
            header: chunks[0],
            list: chunks[1],
            toast: chunks[2],
            button: chunks[3],
            status: chunks[4],
        }
    }
}

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

/// Draw the whole screen. `tick` advances the spinners.
pub fn draw(f: &mut Frame, state: &RenderState, tick: usize) {
    let layout = ScreenLayout::new(f.area());

    draw_header(f, state, layout.header, tick);
    draw_list(f, state, layout.list, tick);
    draw_toast(f, state, layout.toast);
    draw_button(f, state, layout.button);
    draw_status_bar(f, state, layout.status);

    if state.show_help {
        draw_help_popup(f, f.area());
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect, tick: usize) {
    let title = Paragraph::new(Span::styled(
        format!(" {} ", APP_NAME),
        Style::default().fg(Color::Black).bg(PRIMARY).bold(),
    ));
    f.render_widget(title, area);

    let indicator = indicator_line(state.indicator, tick);
    f.render_widget(Paragraph::new(indicator).alignment(Alignment::Center), area);
}

/// Top-centre refresh indicator text
pub fn indicator_line(indicator: IndicatorState, tick: usize) -> Line<'static> {
    match indicator {
        IndicatorState::Hidden => Line::from(Span::styled(
            "↓ pull to refresh",
            Style::default().fg(Color::DarkGray),
        )),
        IndicatorState::Pulling { progress, armed } => {
            let filled = (progress * 8.0).round() as usize;
            let bar = format!("{}{}", "▰".repeat(filled), "▱".repeat(8 - filled.min(8)));
            let (hint, color) = if armed {
                ("release to refresh", Color::Green)
            } else {
                ("pull further", Color::Yellow)
            };
            Line::from(vec![
                Span::styled(format!("↓ {} ", bar), Style::default().fg(PRIMARY)),
                Span::styled(hint, Style::default().fg(color)),
            ])
        }
        IndicatorState::Refreshing => Line::from(Span::styled(
            format!("{} Refreshing", spinner_frame(tick)),
            Style::default().fg(PRIMARY).bold(),
        )),
    }
}

fn draw_list(f: &mut Frame, state: &RenderState, area: Rect, tick: usize) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Gray))
        .title(format!(" Items ({}) ", state.items.len()));

    if state.is_loading {
        let inner = block.inner(area);
        f.render_widget(block, area);
        let middle = Rect {
            y: inner.y + inner.height / 2,
            height: inner.height.min(1),
            ..inner
        };
        let spinner = Paragraph::new(format!("{} Loading...", spinner_frame(tick)))
            .style(Style::default().fg(PRIMARY))
            .alignment(Alignment::Center);
        f.render_widget(spinner, middle);
        return;
    }

    if state.items.is_empty() {
        let hint = Paragraph::new("No items yet.\n\nDrag down to refresh, or press 'l' to load.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = state
        .items
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled("│ ", Style::default().fg(Color::Gray)),
                Span::raw(item.clone()),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    let mut list_state = ListState::default().with_offset(usize::from(state.scroll));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_toast(f: &mut Frame, state: &RenderState, area: Rect) {
    if let Some(message) = &state.toast {
        let toast = Paragraph::new(Span::styled(
            format!(" {} ", message),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ))
        .alignment(Alignment::Center);
        f.render_widget(toast, area);
    }
}

fn draw_button(f: &mut Frame, state: &RenderState, area: Rect) {
    let area = area.inner(Margin::new(1, 0));
    let border = if state.is_loading { Color::DarkGray } else { PRIMARY };

    let label = Span::styled(LOAD_BUTTON_LABEL, Style::default().fg(Color::White).bold());
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(button, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let last = match &state.last_load {
        Some(record) => format!(
            " {} {} ",
            record.finished_at.format("%H:%M:%S"),
            record.outcome.label()
        ),
        None => String::from(" never loaded "),
    };
    let reset = match state.refresh_reset {
        RefreshReset::Completion => "on completion",
        RefreshReset::FixedPause => "fixed pause",
    };

    let bar = Paragraph::new(format!(
        "{}| reset: {} | r:refresh l:load ?:help q:quit ",
        last, reset
    ))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 PULL TO REFRESH - Controls

 REFRESH
   Drag down on list   Pull, release past the arrow to refresh
   r / F5              Refresh

 LIST
   l / Enter / click   Load list
   ↑ / ↓ / wheel       Scroll

 GENERAL
   ?                   Toggle this help
   q / Ctrl+C          Quit

 Press any key to close...
"#;

    let block = Block::bordered()
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
