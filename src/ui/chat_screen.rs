use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect, Size},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use throbber_widgets_tui::Throbber;
use tui_scrollview::ScrollView;

use crate::chat::{Avatar, MessageRow, RowLayout};
use crate::config::ChatConfig;
use crate::ui::style::{dim_unless_focused, role_color};

use super::TerminalView;

const AVATAR_WIDTH: u16 = 11;

pub fn render_chat(frame: &mut Frame, input: &str, config: &ChatConfig, view: &mut TerminalView) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(1),     // Chat history
            Constraint::Length(1),  // Loader / status
            Constraint::Length(3),  // Input box
            Constraint::Length(3),  // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(format!("{} {} - Planning Assistant", config.assistant_glyph, config.assistant_label))
        .block(
            Block::bordered()
                .title(" Chat ")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded)
        )
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);
    frame.render_widget(title, main_layout[0]);

    if view.rows().is_empty() {
        render_welcome(frame, config, main_layout[1]);
    } else {
        render_history(frame, config, view, main_layout[1]);
    }

    if view.is_sending() {
        let throbber = Throbber::default()
            .label(format!("{} is thinking...", config.assistant_label))
            .style(Style::default().fg(Color::Yellow))
            .throbber_set(throbber_widgets_tui::BRAILLE_SIX);
        frame.render_stateful_widget(throbber, main_layout[2], &mut view.throbber);
    } else if let Some(status) = view.status() {
        frame.render_widget(
            Paragraph::new(status.to_string()).style(Style::default().fg(Color::Gray)),
            main_layout[2],
        );
    }

    let enabled = !view.is_sending();
    let input_title = if enabled { " Type your message " } else { " Waiting for answer " };
    let input_color = if enabled { Color::Yellow } else { Color::DarkGray };
    let input_widget = Paragraph::new(format!("> {}", input))
        .block(
            Block::bordered()
                .title(input_title)
                .border_type(BorderType::Rounded)
                .border_style(dim_unless_focused(view.is_input_focused(), Style::default().fg(input_color)))
        )
        .style(Style::default().fg(input_color));
    frame.render_widget(input_widget, main_layout[3]);

    if view.is_input_focused() && enabled {
        let cursor_x = main_layout[3].x + 3 + Line::from(input).width() as u16;
        let max_x = main_layout[3].right().saturating_sub(2);
        frame.set_cursor_position((cursor_x.min(max_x), main_layout[3].y + 1));
    }

    let help = Paragraph::new("Enter: send • F1-F9: suggested question • ↑↓/PgUp/PgDn: scroll • Ctrl+S: save chat • Esc: quit")
        .block(
            Block::bordered()
                .title(" Controls ")
                .border_type(BorderType::Rounded)
        )
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(help, main_layout[4]);
}

fn render_welcome(frame: &mut Frame, config: &ChatConfig, area: Rect) {
    let mut lines = vec![
        Line::from(format!("Welcome to {}!", config.assistant_label)),
        Line::from(""),
        Line::from("Ask anything about Dublin City Council planning."),
    ];

    if !config.suggestions.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from("Try asking:"));
        for (i, question) in config.suggestions.iter().take(9).enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  F{}  ", i + 1), Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::raw(question.clone()),
            ]));
        }
    }

    let welcome = Paragraph::new(Text::from(lines))
        .block(
            Block::bordered()
                .title(" Chat History ")
                .border_type(BorderType::Rounded)
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(welcome, area);
}

fn render_history(frame: &mut Frame, config: &ChatConfig, view: &mut TerminalView, area: Rect) {
    let block = Block::bordered()
        .title(" Chat History ")
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // leave a column for the vertical scrollbar
    let width = inner.width.saturating_sub(1).max(AVATAR_WIDTH + 3);
    let heights: Vec<u16> = view.rows().iter().map(|row| row_height(row, width)).collect();
    let total: u16 = heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h));

    let mut scroll_view = ScrollView::new(Size::new(width, total));
    let mut y = 0u16;
    for (row, height) in view.rows().iter().zip(heights) {
        render_row(&mut scroll_view, config, row, Rect::new(0, y, width, height));
        y = y.saturating_add(height);
    }

    if view.follow_bottom {
        view.scroll.scroll_to_bottom();
        view.follow_bottom = false;
    }
    frame.render_stateful_widget(scroll_view, inner, &mut view.scroll);
}

/// Wrapped content lines plus the content block border
pub fn row_height(row: &MessageRow, width: u16) -> u16 {
    let content_width = width.saturating_sub(AVATAR_WIDTH + 2).max(1) as usize;
    let lines: usize = row.lines
        .iter()
        .map(|line| {
            let w = Line::from(line.as_str()).width();
            w.div_ceil(content_width).max(1)
        })
        .sum();
    (lines as u16).saturating_add(2).max(3)
}

fn render_row(scroll_view: &mut ScrollView, config: &ChatConfig, row: &MessageRow, area: Rect) {
    let (avatar_area, content_area) = match row.layout {
        RowLayout::AvatarFirst => {
            let cols = Layout::horizontal([Constraint::Length(AVATAR_WIDTH), Constraint::Min(1)]).split(area);
            (cols[0], cols[1])
        }
        RowLayout::ContentFirst => {
            let cols = Layout::horizontal([Constraint::Min(1), Constraint::Length(AVATAR_WIDTH)]).split(area);
            (cols[1], cols[0])
        }
    };

    let color = role_color(row.role);
    let avatar_text = match &row.avatar {
        Avatar::Glyph(glyph) => glyph.clone(),
        Avatar::Image { alt, .. } => alt.clone(),
    };
    let avatar = Paragraph::new(avatar_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color))
        )
        .alignment(Alignment::Center);
    scroll_view.render_widget(avatar, Rect { height: area.height.min(3), ..avatar_area });

    let alignment = match row.layout {
        RowLayout::ContentFirst => Alignment::Right,
        RowLayout::AvatarFirst => Alignment::Left,
    };
    let lines: Vec<Line> = row.lines.iter().map(|l| Line::from(l.clone())).collect();
    let content = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color))
                .title(Span::styled(
                    format!(" {} ", row.role.label(config)),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
        )
        .style(Style::default().fg(Color::White))
        .alignment(alignment)
        .wrap(Wrap { trim: false });
    scroll_view.render_widget(content, content_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatView;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_row_height_counts_wrapped_lines() {
        let config = ChatConfig::default();
        let row = MessageRow::new("a<br>b", false, &config);
        assert_eq!(row_height(&row, 40), 4);

        let long = MessageRow::new(&"x".repeat(54), false, &config);
        // 40 - avatar - borders leaves 27 columns
        assert_eq!(row_height(&long, 40), 4);
    }

    #[test]
    fn test_welcome_lists_suggestions() {
        let config = ChatConfig::default();
        let mut view = TerminalView::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|frame| render_chat(frame, "", &config, &mut view)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Try asking:"));
        assert!(text.contains("F1"));
    }

    #[test]
    fn test_history_and_loader_render() {
        let config = ChatConfig::default();
        let mut view = TerminalView::new();
        view.append_row(MessageRow::new("hi there", true, &config));
        view.set_sending(true);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|frame| render_chat(frame, "next", &config, &mut view)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("hi there"));
        assert!(text.contains("Profile"));
        assert!(text.contains("is thinking..."));
        assert!(text.contains("Waiting for answer"));
        assert!(!view.follow_bottom);
    }
}
