//! Comment Board TUI - actor-based terminal comment board
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use commentboard_tui::constants::{APP_NAME, APP_VERSION, COMMENT_PLACEHOLDER, LOG_FILE_NAME};
use commentboard_tui::messages::ui_events::{key_to_ui_event, Focus, InputMode};
use commentboard_tui::messages::{RenderState, UiEvent};
use commentboard_tui::ui::{comment_lines, render_input, render_sort_selector, ReplyDraft};
use commentboard_tui::{AppActor, AppState, Config};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_dir = Config::config_dir();
    let loaded = Config::load_from(&config_dir);
    let config = loaded.as_ref().ok().cloned().unwrap_or_default();

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_max_level(config.log_level().unwrap_or(tracing::Level::INFO))
        .init();

    if let Err(e) = &loaded {
        tracing::warn!(error = %e, dir = %config_dir.display(), "Ignoring invalid config");
    }
    tracing::info!(sort = ?config.default_sort, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let app_actor = AppActor::new(AppState::new(&config), render_tx);
    tokio::spawn(app_actor.run(ui_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.focus,
                    current_state.input_mode,
                    current_state.show_help,
                    current_state.notification.is_some(),
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Length(3),  // Composer
            Constraint::Length(1),  // Controls
            Constraint::Min(0),     // Comments
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", APP_NAME),
        Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
    )));
    f.render_widget(title, chunks[0]);

    draw_composer(f, state, chunks[1]);
    draw_controls(f, state, chunks[2]);
    draw_comments(f, state, chunks[3]);
    draw_status_bar(f, state, chunks[4]);

    if state.show_help {
        draw_help_popup(f, area);
    }

    if let Some(message) = &state.notification {
        draw_notification_popup(f, message, area);
    }
}

fn focus_style(state: &RenderState, focus: Focus) -> Style {
    if state.focus != focus {
        Style::default()
    } else if state.input_mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

fn draw_composer(f: &mut Frame, state: &RenderState, area: Rect) {
    let input = render_input(
        &state.input,
        COMMENT_PLACEHOLDER,
        " New comment (Enter to post) ",
        focus_style(state, Focus::Composer),
    );
    f.render_widget(input, area);

    // Cursor
    if state.focus == Focus::Composer && state.input_mode == InputMode::Editing {
        let width = state
            .input
            .get(..state.cursor_position)
            .map(|s| s.chars().count() as u16)
            .unwrap_or(0);
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + width + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_controls(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Length(10), Constraint::Min(0)])
        .split(area);

    let (toggle_label, toggle_style) = if state.view.show_timestamps {
        (" Hide ", Style::default().fg(Color::White).bg(Color::Blue))
    } else {
        (" Show ", Style::default().fg(Color::Gray).bg(Color::DarkGray))
    };
    let toggle = Paragraph::new(Line::from(vec![
        Span::styled(toggle_label, toggle_style),
        Span::raw(" Show Timestamp"),
    ]));
    f.render_widget(toggle, chunks[0]);

    f.render_widget(Paragraph::new("Sort by:"), chunks[1]);
    f.render_widget(render_sort_selector(state.view.sort), chunks[2]);
}

fn draw_comments(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.focus == Focus::Comments;
    let editing = is_focused && state.input_mode == InputMode::Editing;

    let items: Vec<ListItem> = state
        .comments
        .iter()
        .enumerate()
        .map(|(i, comment)| {
            let draft = (is_focused && i == state.selected).then(|| ReplyDraft {
                text: &state.reply_draft,
                cursor: editing.then_some(state.cursor_position),
            });
            let mut lines = comment_lines(
                comment,
                state.view.show_timestamps,
                &state.timestamp_format,
                draft,
            );
            lines.push(Line::default());
            ListItem::new(lines)
        })
        .collect();

    let title = format!(" Comments ({}) ", state.comments.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(state, Focus::Comments))
        .title(title);

    if items.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No comments yet. Press Enter to write one.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let highlight_style = if is_focused {
        Style::default().bg(Color::Rgb(40, 40, 60))
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style);

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.input_mode == InputMode::Editing {
        " ESC:stop editing | Enter:submit | arrows:move "
    } else if state.focus == Focus::Comments {
        " Tab:composer | e:reply | s:star | d:delete | o:sort | t:timestamps | ?:help | q:quit "
    } else {
        " Tab:comments | e:edit | o:sort | t:timestamps | ?:help | q:quit "
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = format!(
        r#"
 {APP_NAME} v{APP_VERSION} - Keyboard Shortcuts

 NAVIGATION
   Tab                Switch composer / comment list
   ↑ / ↓  (k / j)     Select comment

 COMMENTS
   e / Enter          Edit comment or reply to selected
   Enter (editing)    Post comment / send reply
   s                  Star / unstar
   d                  Delete

 VIEW
   o / O              Next / previous sort order
   t                  Show / hide timestamps

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_notification_popup(f: &mut Frame, message: &str, area: Rect) {
    let popup_area = centered_rect(50, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Notice (any key to dismiss) ")
        .style(Style::default().bg(Color::Black));

    let notice = Paragraph::new(message)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(notice, popup_area);
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
