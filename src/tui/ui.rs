use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::models::Archetype;
use crate::tui::app::{App, InputMode, Screen};

pub fn draw(frame: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Main => draw_main_screen(frame, app),
        Screen::Results => draw_results_screen(frame, app),
        Screen::Loading => draw_loading_screen(frame, app),
    }
}

fn archetype_color(archetype: Archetype) -> Color {
    match archetype {
        Archetype::Builder => Color::Yellow,
        Archetype::Creator => Color::Magenta,
        Archetype::Influencer => Color::Cyan,
        Archetype::Thinker => Color::Blue,
        Archetype::Degen => Color::Green,
        Archetype::Lurker => Color::Gray,
    }
}

fn draw_main_screen(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(frame.size());

    let title = Paragraph::new("✨ Aura Scorer")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let input = Paragraph::new(app.current_input.as_str())
        .style(match app.input_mode {
            InputMode::Editing => Style::default().fg(Color::Yellow),
            InputMode::Normal => Style::default(),
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Farcaster username or fid"),
        );
    frame.render_widget(input, chunks[1]);

    let mut lines = vec![Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" read aura | "),
        Span::styled("Esc", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" quit"),
    ])];

    if let Some(error) = &app.error_message {
        lines.push(Line::from(vec![
            Span::styled("Error: ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(error.as_str(), Style::default().fg(Color::Red)),
        ]));
    }

    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    if app.input_mode == InputMode::Editing {
        frame.set_cursor(
            chunks[1].x + app.current_input.chars().count() as u16 + 1,
            chunks[1].y + 1,
        );
    }
}

fn draw_results_screen(frame: &mut Frame, app: &App) {
    let Some(result) = &app.result else {
        return;
    };
    let aura = &result.aura;
    let color = archetype_color(aura.archetype);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(12),
            Constraint::Min(3),
        ])
        .split(frame.size());

    let name = match &result.stats.display_name {
        Some(display) => format!("{} (@{})", display, result.stats.username),
        None => format!("@{}", result.stats.username),
    };
    let title = Paragraph::new(format!("{} {} | {}", aura.emoji, aura.label, name))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let score = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Aura score"))
        .gauge_style(Style::default().fg(color))
        .percent(aura.score as u16)
        .label(format!("{}/100", aura.score));
    frame.render_widget(score, chunks[1]);

    let description = Paragraph::new(aura.description.as_str())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(description, chunks[2]);

    let breakdown_block = Block::default().borders(Borders::ALL).title("Breakdown");
    let inner = breakdown_block.inner(chunks[3]);
    frame.render_widget(breakdown_block, chunks[3]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2); 5])
        .split(inner);
    for ((dimension, value), row) in aura.breakdown.dimensions().into_iter().zip(rows.iter()) {
        let bar = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(value as u16)
            .label(format!("{:<8} {:>3}", dimension, value));
        frame.render_widget(bar, *row);
    }

    let help = Paragraph::new("Press 'b' to go back | 'q' to quit")
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);
}

fn draw_loading_screen(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 20, frame.size());

    let loading_text = app.loading_message.as_deref().unwrap_or("Loading...");

    let loading = Paragraph::new(loading_text)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("⏳ Reading aura")
        );

    frame.render_widget(Clear, area);
    frame.render_widget(loading, area);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuraInputs, ProfileStats};
    use crate::scoring::{compute_aura, ProfileAura};
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_results_screen_shows_label_and_description() {
        let mut app = App::new();
        app.set_result(ProfileAura {
            stats: ProfileStats::new(7, "onchainoor"),
            aura: compute_aura(&AuraInputs::new(10, 2, 5, 20).with_base_tx_count(60)),
        });

        let screen = rendered(&app);
        assert!(screen.contains("Degen Aura"));
        assert!(screen.contains("@onchainoor"));
        assert!(screen.contains("onchain"));
    }

    #[test]
    fn test_main_screen_shows_error() {
        let mut app = App::new();
        app.set_error("User not found: @ghost");
        assert!(rendered(&app).contains("User not found"));
    }
}
