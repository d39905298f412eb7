//! # Terminal Engine
//!
//! Full-screen terminal front end built on ratatui and crossterm.
//!
//! Every prompt runs its own small event loop: draw, tick the PRODUCTION
//! flicker, read a key, until the player answers or quits.

use crate::engine::Engine;
use crate::game::{Action, Game, GameSnapshot, Outcome, Player, ProductionState};
use crate::input::{InputHandler, PlayerInput};
use crate::leaderboard::ScoreEntry;
use crate::rendering::art;
use crate::{config, PnpError, PnpResult};
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{stdout, Stdout};
use std::time::Duration;

/// Time between PRODUCTION flicker frames while waiting for a key.
const TICK: Duration = Duration::from_millis(30);

/// Characters in the PRODUCTION panel.
const NOISE_LEN: usize = 2000;

/// Characters scrambled per flicker frame.
const NOISE_PER_TICK: usize = 10;

/// Interactive engine drawing the game in the terminal.
pub struct TerminalEngine {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input: InputHandler,
    rng: StdRng,
    view: Option<GameSnapshot>,
    noise: Vec<char>,
    restored: bool,
}

impl TerminalEngine {
    /// Takes over the terminal: raw mode and the alternate screen.
    ///
    /// `seed` drives the PRODUCTION flicker only.
    pub fn new(seed: u64) -> PnpResult<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| PnpError::Terminal(e.to_string()))?;

        Ok(Self {
            terminal,
            input: InputHandler::new(),
            rng: StdRng::seed_from_u64(seed),
            view: None,
            noise: vec!['A'; NOISE_LEN],
            restored: false,
        })
    }

    /// Hands the terminal back to the shell. Safe to call more than once.
    pub fn restore(&mut self) -> PnpResult<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn flicker(&mut self) {
        for _ in 0..NOISE_PER_TICK {
            let at = self.rng.gen_range(0..self.noise.len());
            self.noise[at] = char::from(self.rng.gen_range(48u8..127));
        }
    }

    /// Waits one tick for a key press, animating the PRODUCTION panel meanwhile.
    fn poll_key(&mut self) -> PnpResult<Option<KeyEvent>> {
        self.flicker();
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    /// Draws the board, optionally with an action menu and a modal on top.
    fn draw(
        &mut self,
        menu: Option<(&[Action], &mut ListState)>,
        modal: Option<Modal<'_>>,
    ) -> PnpResult<()> {
        let Self {
            terminal,
            view,
            noise,
            ..
        } = self;
        let noise: String = noise.iter().collect();
        terminal
            .draw(|f| {
                render_board(f, view.as_ref(), &noise, menu);
                if let Some(modal) = modal {
                    render_modal(f, &modal);
                }
            })
            .map_err(|e| PnpError::Terminal(e.to_string()))?;
        Ok(())
    }

    fn try_welcome(&mut self, leaderboard: &[ScoreEntry]) -> PnpResult<Option<String>> {
        let lines = leaderboard_lines(leaderboard);
        let mut name = config::DEFAULT_BAND_NAME.to_string();
        let mut confirming = false;

        loop {
            self.terminal
                .draw(|f| {
                    render_welcome(f, &lines, &name);
                    if confirming {
                        render_modal(
                            f,
                            &Modal {
                                title: " Welcome ",
                                text: format!("Hello, {}! Are you ready?", name.trim()),
                                button: "Let's do this!",
                                color: Color::Cyan,
                            },
                        );
                    }
                })
                .map_err(|e| PnpError::Terminal(e.to_string()))?;

            let Some(key) = self.poll_key()? else {
                continue;
            };
            if confirming {
                match self.input.menu_input(key) {
                    Some(PlayerInput::Confirm) => return Ok(Some(name)),
                    Some(PlayerInput::Quit) => confirming = false,
                    _ => {}
                }
                continue;
            }
            match self.input.text_input(key) {
                Some(PlayerInput::Type(c)) => name.push(c),
                Some(PlayerInput::Erase) => {
                    name.pop();
                }
                Some(PlayerInput::Confirm) => confirming = true,
                Some(PlayerInput::Quit) => return Ok(None),
                _ => {}
            }
        }
    }

    fn try_select(&mut self, actions: &[Action]) -> PnpResult<Option<usize>> {
        let mut menu = ListState::default();
        menu.select(Some(0));

        loop {
            self.draw(Some((actions, &mut menu)), None)?;
            let Some(key) = self.poll_key()? else {
                continue;
            };
            let selected = menu.selected().unwrap_or(0);
            match self.input.menu_input(key) {
                Some(PlayerInput::Up) => {
                    menu.select(Some((selected + actions.len() - 1) % actions.len()));
                }
                Some(PlayerInput::Down) => menu.select(Some((selected + 1) % actions.len())),
                Some(PlayerInput::Pick(choice)) if choice < actions.len() => {
                    return Ok(Some(choice))
                }
                Some(PlayerInput::Confirm) => return Ok(Some(selected)),
                Some(PlayerInput::Quit) => return Ok(None),
                _ => {}
            }
        }
    }

    /// Shows a modal until it is confirmed (`true`) or dismissed (`false`).
    fn try_modal(&mut self, modal: Modal<'_>) -> PnpResult<bool> {
        loop {
            self.draw(None, Some(modal.clone()))?;
            let Some(key) = self.poll_key()? else {
                continue;
            };
            match self.input.menu_input(key) {
                Some(PlayerInput::Confirm) => return Ok(true),
                Some(PlayerInput::Quit) => return Ok(false),
                _ => {}
            }
        }
    }
}

impl Drop for TerminalEngine {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!("Failed to restore terminal: {}", e);
        }
    }
}

impl Engine for TerminalEngine {
    fn welcome(&mut self, leaderboard: &[ScoreEntry]) -> Option<String> {
        self.try_welcome(leaderboard).unwrap_or_else(|e| {
            error!("Welcome screen failed: {}", e);
            None
        })
    }

    fn render_game(&mut self, game: &Game) {
        self.view = Some(game.snapshot());
        if let Err(e) = self.draw(None, None) {
            error!("Failed to draw game: {}", e);
        }
    }

    fn select_action(
        &mut self,
        _game: &Game,
        _player: &Player,
        actions: &[Action],
    ) -> Option<usize> {
        if actions.is_empty() {
            return None;
        }
        self.try_select(actions).unwrap_or_else(|e| {
            error!("Action menu failed: {}", e);
            None
        })
    }

    fn render_outcome(&mut self, outcome: &Outcome) -> bool {
        let modal = Modal {
            title: " Outcome ",
            text: outcome.to_string(),
            button: "ok",
            color: Color::White,
        };
        self.try_modal(modal).unwrap_or_else(|e| {
            error!("Outcome screen failed: {}", e);
            false
        })
    }

    fn game_over(&mut self, game: &Game) {
        self.view = Some(game.snapshot());
        let modal = Modal {
            title: " Game over ",
            text: format!("{}\n\nFinal score: {}", art::GAME_OVER, game.score),
            button: "Oh well...",
            color: Color::LightGreen,
        };
        if let Err(e) = self.try_modal(modal) {
            error!("Game over screen failed: {}", e);
        }
    }

    fn game_won(&mut self, game: &Game) {
        self.view = Some(game.snapshot());
        let modal = Modal {
            title: " Game won ",
            text: format!("{}\n\nFinal score: {}", art::GAME_WON, game.score),
            button: "Yay!",
            color: Color::LightGreen,
        };
        if let Err(e) = self.try_modal(modal) {
            error!("Game won screen failed: {}", e);
        }
    }
}

/// A centred message box with a single button.
#[derive(Debug, Clone)]
struct Modal<'a> {
    title: &'a str,
    text: String,
    button: &'a str,
    color: Color,
}

/// Leaderboard rows as shown on the welcome screen.
///
/// # Examples
///
/// ```
/// use pnp::{leaderboard_lines, ScoreEntry};
///
/// let lines = leaderboard_lines(&[ScoreEntry::new("Cool Band", 300)]);
/// assert_eq!(lines, vec!["1. Cool Band - 300".to_string()]);
/// ```
pub fn leaderboard_lines(leaderboard: &[ScoreEntry]) -> Vec<String> {
    leaderboard
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {} - {}", i + 1, entry.band_name, entry.score))
        .collect()
}

/// Colour of the PRODUCTION panel for each mood.
pub fn production_color(production: ProductionState) -> Color {
    match production {
        ProductionState::Calm => Color::Green,
        ProductionState::Annoyed => Color::Yellow,
        ProductionState::Enraged => Color::Red,
        ProductionState::Legacy => Color::Magenta,
    }
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}

fn render_welcome(f: &mut Frame, leaderboard: &[String], name: &str) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(" New game started! ");
    let inner = outer.inner(f.area());
    f.render_widget(outer, f.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Banner and leaderboard
            Constraint::Length(1), // Tagline
            Constraint::Length(3), // Band name input
        ])
        .split(inner);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(rows[0]);

    let banner = Paragraph::new(art::BANNER).style(Style::default().fg(Color::Cyan));
    f.render_widget(banner, top[0]);

    let entries: Vec<Line> = leaderboard.iter().map(|l| Line::from(l.as_str())).collect();
    let board = Paragraph::new(entries)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(" Leaderboard "));
    f.render_widget(board, top[1]);

    let tagline = Paragraph::new("A band of developers will attempt to survive against PRODUCTION!");
    f.render_widget(tagline, rows[1]);

    let input = Paragraph::new(Line::from(vec![
        Span::raw("What is the name of your band?  "),
        Span::styled(
            format!("{name}_"),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(input, rows[2]);
}

fn render_board(
    f: &mut Frame,
    view: Option<&GameSnapshot>,
    noise: &str,
    menu: Option<(&[Action], &mut ListState)>,
) {
    let Some(view) = view else {
        f.render_widget(Block::default().borders(Borders::ALL), f.area());
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(f.area());

    render_players(f, columns[0], view);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3), // Menu
            Constraint::Ratio(1, 3), // Inventory
            Constraint::Ratio(1, 3), // Production
        ])
        .split(columns[1]);

    render_menu(f, side[0], menu);
    render_inventory(f, side[1], view);
    render_production(f, side[2], view.production, noise);
}

fn render_players(f: &mut Frame, area: Rect, view: &GameSnapshot) {
    let band = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightMagenta))
        .title(format!(" {} ", view.band_name));
    let inner = band.inner(area);
    f.render_widget(band, area);

    let count = view.players.len().max(1) as u32;
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            view.players
                .iter()
                .map(|_| Constraint::Ratio(1, count))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (i, (player, slot)) in view.players.iter().zip(slots.iter()).enumerate() {
        let (portrait_text, art_color) = if player.alive {
            (player.art.as_str(), Color::White)
        } else {
            (art::GRAVESTONE, Color::Magenta)
        };

        let block = if i == view.current_player {
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" It's {}'s turn ", player.name))
                .border_style(Style::default().fg(Color::Yellow))
        } else {
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ({}) ", player.name, player.role))
        };

        let portrait = Paragraph::new(portrait_text)
            .style(Style::default().fg(art_color))
            .block(block);
        f.render_widget(portrait, *slot);
    }
}

fn render_menu(f: &mut Frame, area: Rect, menu: Option<(&[Action], &mut ListState)>) {
    let Some((actions, state)) = menu else {
        f.render_widget(
            Block::default().borders(Borders::ALL).title(" Waiting... "),
            area,
        );
        return;
    };

    let items: Vec<ListItem> = actions
        .iter()
        .enumerate()
        .map(|(i, action)| ListItem::new(format!("{}. {}", i + 1, action)))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Select move... "))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, state);
}

fn render_inventory(f: &mut Frame, area: Rect, view: &GameSnapshot) {
    let lines = vec![
        Line::from(format!("Coins: {}", view.coins)),
        Line::from(format!("Score: {}", view.score)),
        Line::from(format!("Turns: {}", view.turns_played)),
    ];
    let inventory =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Inventory "));
    f.render_widget(inventory, area);
}

fn render_production(f: &mut Frame, area: Rect, production: ProductionState, noise: &str) {
    let color = production_color(production);
    let panel = Paragraph::new(noise)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" PRODUCTION is `{production}` ")),
        );
    f.render_widget(panel, area);
}

fn render_modal(f: &mut Frame, modal: &Modal<'_>) {
    let area = centered(f.area(), 70, 60);
    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = modal.text.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", modal.button),
        Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
    )));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(modal.color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(modal.title));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboard_lines_are_ranked() {
        let lines = leaderboard_lines(&[ScoreEntry::new("First", 9), ScoreEntry::new("Second", 3)]);
        assert_eq!(lines, vec!["1. First - 9", "2. Second - 3"]);
    }

    #[test]
    fn test_each_mood_has_its_own_colour() {
        let colors: Vec<_> = ProductionState::ALL.iter().map(|p| production_color(*p)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_centered_stays_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let inner = centered(area, 70, 60);
        assert!(inner.x >= area.x && inner.right() <= area.right());
        assert!(inner.y >= area.y && inner.bottom() <= area.bottom());
        assert!(inner.width > 0 && inner.height > 0);
    }
}
