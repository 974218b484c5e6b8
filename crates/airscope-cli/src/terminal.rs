//! crossterm-backed `Display`.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use airscope_core::{Display, Input, Layout, Viewport};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};

/// Full-screen view on the alternate screen; the terminal is restored on drop.
pub struct TerminalDisplay {
    out: Stdout,
}

impl TerminalDisplay {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { out })
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Display for TerminalDisplay {
    fn viewport(&mut self) -> io::Result<Viewport> {
        let (cols, rows) = terminal::size()?;
        Ok(Viewport::new(rows, cols))
    }

    fn present(&mut self, layout: &Layout) -> io::Result<()> {
        let viewport = self.viewport()?;
        queue!(self.out, Clear(ClearType::All))?;
        for line in &layout.lines {
            if line.row >= viewport.rows || line.col >= viewport.cols {
                continue;
            }
            let room = usize::from(viewport.cols - line.col);
            let text: String = line.text.chars().take(room).collect();
            queue!(self.out, cursor::MoveTo(line.col, line.row), Print(text))?;
        }
        self.out.flush()
    }

    fn poll_input(&mut self) -> io::Result<Input> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(classify(key));
                }
            }
        }
        Ok(Input::Continue)
    }

    fn wait_input(&mut self) -> io::Result<Input> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(classify(key));
                }
            }
        }
    }
}

fn classify(key: KeyEvent) -> Input {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        _ => Input::Continue,
    }
}
