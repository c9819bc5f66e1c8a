//! TUI rendering with ratatui
//!
//! Board of guesses, on-screen keyboard, message log and statistics.

use super::app::{App, MessageStyle};
use crate::core::{GuessStatus, Keyboard, Letter};
use crate::output::formatters::{KEYBOARD_LAYOUT, create_progress_bar, status_rgb};
use crate::share::identifier;
use crate::stats::GameStats;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const EMPTY_TILE: Color = Color::Rgb(0x33, 0x41, 0x55);
const MESSAGES_HEIGHT: u16 = 7;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn status_color(status: GuessStatus) -> Color {
    let (r, g, b) = status_rgb(status);
    Color::Rgb(r, g, b)
}

fn tile(unit: &str, status: Option<GuessStatus>) -> Span<'static> {
    let style = match status {
        Some(status) => Style::default()
            .fg(Color::Black)
            .bg(status_color(status))
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::White).bg(EMPTY_TILE),
    };
    Span::styled(format!(" {unit:<3}"), style)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();
    let title = format!(
        "SZÓZAT - {} ({} betű)",
        identifier(game.puzzle(), app.session.config().epoch),
        game.difficulty()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();
    let length = game.difficulty().word_length();
    let gap = || Line::from("");

    let mut lines = Vec::with_capacity(2 * game.max_guesses());
    for (guess, pattern) in game.guesses().iter().zip(game.patterns()) {
        let spans: Vec<Span> = guess
            .units()
            .iter()
            .zip(pattern.statuses())
            .flat_map(|(unit, &status)| [tile(unit, Some(status)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(gap());
    }

    if !game.is_over() {
        let typed = app.input_units();
        let spans: Vec<Span> = (0..length)
            .flat_map(|i| [tile(typed.get(i).copied().unwrap_or(" "), None), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans).style(Style::default().add_modifier(Modifier::UNDERLINED)));
        lines.push(gap());
    }

    let used = game.guesses().len() + usize::from(!game.is_over());
    for _ in used..game.max_guesses() {
        let spans: Vec<Span> = (0..length)
            .flat_map(|_| [tile(" ", None), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(gap());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Tippek ({}/{}) ",
                game.guesses().len(),
                game.max_guesses()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let stats_height = if app.stats.is_some() {
        Constraint::Min(8)
    } else {
        Constraint::Length(0)
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(KEYBOARD_LAYOUT.len() as u16 * 2 + 1), // Keyboard
            Constraint::Length(MESSAGES_HEIGHT),                      // Messages
            stats_height,
        ])
        .split(area);

    render_keyboard(f, app.session.game().keyboard(), chunks[0]);
    render_messages(f, app, chunks[1]);
    if let Some(stats) = &app.stats {
        render_stats(f, stats, chunks[2]);
    }
}

fn render_keyboard(f: &mut Frame, keyboard: &Keyboard, area: Rect) {
    let mut lines = Vec::with_capacity(KEYBOARD_LAYOUT.len() * 2);
    for row in KEYBOARD_LAYOUT {
        let spans: Vec<Span> = row
            .iter()
            .flat_map(|&unit| {
                let status = Letter::from_unit(unit).and_then(|letter| keyboard.status(letter));
                [tile(unit, status), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Billentyűzet ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Üzenetek ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_stats(f: &mut Frame, stats: &GameStats, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Összes játék: "),
            Span::styled(stats.total_games.to_string(), Style::default().fg(Color::Yellow)),
            Span::raw("   Sikerráta: "),
            Span::styled(format!("{}%", stats.success_rate), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(format!(
            "Folyamatos siker: {} (leghosszabb: {})",
            stats.current_streak, stats.best_streak
        )),
        Line::from(""),
    ];

    let max = stats.win_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.win_distribution.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::raw(format!("{:>2} ", i + 1)),
            Span::styled(
                create_progress_bar(u64::from(count), u64::from(max), 20),
                Style::default().fg(status_color(GuessStatus::Correct)),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statisztika ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();
    let help_text = if game.is_over() {
        "Esc: Kilépés | Ctrl-S: Megosztás mentése | Ctrl-N: Véletlen | ←/→: Másik nap"
    } else {
        "Enter: Tipp | Backspace: Törlés | Ctrl-G: Feladom | Ctrl-N: Véletlen | ←/→: Másik nap | Esc: Kilépés"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Session;
    use crate::config::Config;
    use crate::puzzle::CustomPuzzle;
    use crate::wordlists::WordLists;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_keyboard() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let custom = CustomPuzzle::new("kalap", Some("Anna".to_string()));
        let mut app = App::new(Session::open(config, WordLists::embedded(), Some(custom)).unwrap());
        for c in "labda".chars() {
            app.type_char(c);
        }
        app.submit();

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Egyéni feladvány: Anna"));
        assert!(text.contains("Tippek (1/8)"));
        assert!(text.contains("DZS"));
    }
}
