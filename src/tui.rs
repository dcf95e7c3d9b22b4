//! Terminal viewer for puzzle files.
//!
//! Pages through decoded records and draws each puzzle's grid, letter set and
//! placements. `ViewerState` holds navigation and is independent of the
//! terminal; `TuiViewer` owns the terminal and the event loop.

use crate::puzzle::Puzzle;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const INSTRUCTIONS: &str = "LEFT/RIGHT: Previous/Next | HOME/END: First/Last | Q/ESC: Quit";

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const TILE_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::White)
    .add_modifier(Modifier::BOLD);
const LETTER_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    Continue,
    Quit,
}

/// Which puzzle is on screen.
#[derive(Debug)]
pub struct ViewerState {
    puzzles: Vec<Puzzle>,
    size: usize,
    index: usize,
}

impl ViewerState {
    pub fn new(puzzles: Vec<Puzzle>, size: usize) -> Self {
        Self {
            puzzles,
            size,
            index: 0,
        }
    }

    pub fn current(&self) -> Option<&Puzzle> {
        self.puzzles.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.index + 1 < self.puzzles.len() {
            self.index += 1;
        }
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn handle_key(&mut self, code: KeyCode) -> ViewerAction {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return ViewerAction::Quit,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => self.next(),
            KeyCode::Left | KeyCode::Char('h') => self.prev(),
            KeyCode::Home => self.index = 0,
            KeyCode::End => self.index = self.puzzles.len().saturating_sub(1),
            _ => {
                debug_log!("ViewerState::handle_key() - Ignoring key: {:?}", code);
            }
        }
        ViewerAction::Continue
    }

    fn status(&self) -> String {
        match self.current() {
            Some(puzzle) => format!(
                "Puzzle {} ({}/{})",
                puzzle.id,
                self.index + 1,
                self.puzzles.len()
            ),
            None => "No puzzles".to_string(),
        }
    }
}

/// Grid rows cropped to the bounding box of placed letters, one tile per cell.
pub fn grid_lines(puzzle: &Puzzle, size: usize) -> Vec<Line<'static>> {
    let grid = match puzzle.replay(size) {
        Ok(grid) => grid,
        Err(e) => return vec![Line::from(Span::styled(e.to_string(), ERROR_STYLE))],
    };
    let Some((min_row, min_col, max_row, max_col)) = grid.bounding_box() else {
        return Vec::new();
    };
    (min_row..=max_row)
        .map(|row| {
            let spans: Vec<Span<'static>> = (min_col..=max_col)
                .map(|col| match grid.get(row, col) {
                    Some(letter) => {
                        Span::styled(format!(" {} ", letter.to_ascii_uppercase()), TILE_STYLE)
                    }
                    None => Span::raw("   "),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

pub fn letter_line(puzzle: &Puzzle) -> Line<'static> {
    let mut spans = Vec::new();
    for letter in puzzle.letters.chars() {
        spans.push(Span::styled(
            format!(" {} ", letter.to_ascii_uppercase()),
            LETTER_STYLE,
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

pub fn placement_lines(puzzle: &Puzzle) -> Vec<Line<'static>> {
    puzzle
        .placements
        .iter()
        .map(|p| {
            let direction = match p.direction {
                crate::grid::Direction::Horizontal => "across",
                crate::grid::Direction::Vertical => "down",
            };
            Line::from(format!(
                "{:<8} {:<6} row {:>2} col {:>2}",
                p.word, direction, p.row, p.col
            ))
        })
        .collect()
}

pub struct TuiViewer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: ViewerState,
    restored: bool,
}

impl TuiViewer {
    pub fn new(state: ViewerState) -> Result<Self, io::Error> {
        info_log!("TuiViewer::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");
        Ok(Self {
            terminal,
            state,
            restored: false,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    pub fn run(&mut self) -> Result<(), io::Error> {
        loop {
            let state = &self.state;
            self.terminal.draw(|f| Self::render(f, state))?;

            if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
                continue;
            }
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && self.state.handle_key(key.code) == ViewerAction::Quit
            {
                info_log!("TuiViewer::run() - Quit requested");
                return Ok(());
            }
        }
    }

    fn render(f: &mut Frame, state: &ViewerState) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Grid and words
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        let title = Paragraph::new(state.status())
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        let body = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[1]);
        Self::render_grid(f, body[0], state);
        Self::render_words(f, body[1], state);

        let instructions = Paragraph::new(INSTRUCTIONS)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(instructions, chunks[2]);
    }

    fn render_grid(f: &mut Frame, area: Rect, state: &ViewerState) {
        let lines = state
            .current()
            .map(|p| grid_lines(p, state.size))
            .unwrap_or_default();
        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Grid").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_words(f: &mut Frame, area: Rect, state: &ViewerState) {
        let mut lines = Vec::new();
        if let Some(puzzle) = state.current() {
            lines.push(Line::from(Span::styled("Letters:", HEADER_STYLE)));
            lines.push(letter_line(puzzle));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Words ({}):", puzzle.placements.len()),
                HEADER_STYLE,
            )));
            lines.extend(placement_lines(puzzle));
        }
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Puzzle").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}

impl Drop for TuiViewer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Opens the viewer on `puzzles` and restores the terminal on exit.
pub fn run_viewer(puzzles: Vec<Puzzle>, size: usize) -> Result<(), io::Error> {
    let mut viewer = TuiViewer::new(ViewerState::new(puzzles, size))?;
    let result = viewer.run();
    viewer.cleanup()?;
    result
}
