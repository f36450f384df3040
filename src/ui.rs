//! Terminal rendering - draws a `RenderState` into a frame

use ratatui::{prelude::*, widgets::*};

use crate::messages::RenderState;

const HELP_LINE: &str = "↑/↓: navigate | Enter: send | PgUp/PgDn: scroll | q: quit";

/// Widest the request list gets
const MAX_LIST_WIDTH: u16 = 40;

/// Draw the whole screen. Pure function of `state`.
pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    if let Some(message) = &state.load_error {
        draw_error(f, message, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Min(3),    // Panels
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " ⚡ Thunder-TUI ",
        Style::default().fg(Color::Yellow).bold(),
    )));
    f.render_widget(title, chunks[0]);

    let width = if state.viewport.width > 0 {
        state.viewport.width.min(area.width)
    } else {
        area.width
    };
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((width / 2).min(MAX_LIST_WIDTH)),
            Constraint::Min(0),
        ])
        .split(chunks[2]);

    draw_request_list(f, state, panels[0]);
    draw_response(f, state, panels[1]);
    draw_status_bar(f, state, chunks[3]);

    let help = Paragraph::new(format!(" {}", HELP_LINE)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[4]);
}

fn draw_error(f: &mut Frame, message: &str, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("❌ Error: {}", message),
            Style::default().fg(Color::Red).bold(),
        )),
        Line::raw(""),
        Line::from(Span::styled("Press q to quit", Style::default().fg(Color::DarkGray))),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn draw_request_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let items: Vec<ListItem> = state
        .collection
        .requests
        .iter()
        .enumerate()
        .map(|(i, req)| {
            let method_span = Span::styled(
                format!("{:<6}", req.method),
                Style::default().fg(method_color(&req.method)).bold(),
            );
            let name_style = if i == state.selected_index {
                Style::default().fg(Color::LightCyan).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let name_span = Span::styled(format!(" {}", req.name), name_style);
            ListItem::new(Line::from(vec![method_span, name_span]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Blue))
                .title(Span::styled(" 📋 Requests ", Style::default().fg(Color::Yellow).bold())),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_index));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_response(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut title = vec![Span::styled(" 📡 Response ", Style::default().fg(Color::Blue).bold())];
    if let Some(code) = state.response_status {
        title.push(Span::styled(
            format!("{} ", code),
            Style::default().fg(status_color(code)).bold(),
        ));
    }
    if state.response_failed {
        title.push(Span::styled("✗ failed ", Style::default().fg(Color::Red).bold()));
    }
    if state.is_loading {
        title.push(Span::styled("[...] ", Style::default().fg(Color::Yellow)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue))
        .title(Line::from(title));

    let response = Paragraph::new(state.response_text.as_str())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.response_scroll, 0));
    f.render_widget(response, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let target = state
        .collection
        .get(state.selected_index)
        .map(|req| format!("{} {}", req.method, req.url))
        .unwrap_or_default();

    let bar = Paragraph::new(format!(" 📂 {} | 🎯 {}", state.source, target))
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(bar, area);
}

/// Status code color
pub fn status_color(code: u16) -> Color {
    match code {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Red,
        500..=599 => Color::Magenta,
        _ => Color::Yellow,
    }
}

/// Method color
pub fn method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Green,
        "POST" => Color::Yellow,
        "PUT" => Color::Blue,
        "PATCH" => Color::Cyan,
        "DELETE" => Color::Red,
        _ => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Viewport;
    use crate::models::{Collection, RequestDefinition};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use std::sync::Arc;

    fn render(state: &RenderState, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn sample_state() -> RenderState {
        RenderState {
            source: "api.yaml".to_string(),
            collection: Arc::new(Collection {
                requests: vec![
                    RequestDefinition::new("List users", "GET", "http://localhost/users"),
                    RequestDefinition::new("Create user", "POST", "http://localhost/users"),
                ],
            }),
            selected_index: 1,
            response_text: "Status: 201 Created".to_string(),
            response_status: Some(201),
            viewport: Viewport { width: 100, height: 20 },
            ..RenderState::default()
        }
    }

    #[test]
    fn test_method_colors_are_distinct() {
        let colors: Vec<Color> = ["GET", "POST", "PUT", "DELETE", "PATCH"]
            .iter()
            .map(|m| method_color(m))
            .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(method_color("OPTIONS"), Color::Gray);
        assert!(!colors.contains(&Color::Gray));
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(204), Color::Green);
        assert_eq!(status_color(404), Color::Red);
        assert_eq!(status_color(503), Color::Magenta);
    }

    #[test]
    fn test_renders_list_response_and_status_line() {
        let text = buffer_text(&render(&sample_state(), 100, 20));
        assert!(text.contains("Thunder-TUI"));
        assert!(text.contains("List users"));
        assert!(text.contains("Create user"));
        assert!(text.contains("Status: 201 Created"));
        assert!(text.contains("api.yaml"));
        assert!(text.contains("POST http://localhost/users"));
        assert!(text.contains("Enter: send"));
    }

    #[test]
    fn test_failed_attempt_title_has_marker_not_status() {
        let state = RenderState {
            response_text: "Status: 200 OK\nDuration: 3ms\n❌ Error: error reading body: reset".to_string(),
            response_status: None,
            response_failed: true,
            ..sample_state()
        };
        let text = buffer_text(&render(&state, 100, 20));
        let title = text.lines().find(|line| line.contains("Response")).unwrap();
        assert!(title.contains("failed"));
        assert!(!title.contains("200"));

        let text = buffer_text(&render(&sample_state(), 100, 20));
        let title = text.lines().find(|line| line.contains("Response")).unwrap();
        assert!(title.contains("201"));
        assert!(!title.contains("failed"));
    }

    #[test]
    fn test_selected_request_is_marked() {
        let text = buffer_text(&render(&sample_state(), 100, 20));
        let marked = text.lines().find(|line| line.contains('▶')).unwrap();
        assert!(marked.contains("Create user"));
    }

    #[test]
    fn test_error_screen() {
        let state = RenderState {
            load_error: Some("no requests found in collection".to_string()),
            ..RenderState::default()
        };
        let text = buffer_text(&render(&state, 80, 10));
        assert!(text.contains("no requests found in collection"));
        assert!(text.contains("Press q to quit"));
        assert!(!text.contains("Thunder-TUI"));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let mut state = sample_state();
        state.viewport = Viewport { width: 10, height: 4 };
        render(&state, 10, 4);
    }
}
