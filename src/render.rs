use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use crate::error::LifeResult;
use crate::life::Universe;

/// Moves the cursor home and clears the screen.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Receives every finished generation from the simulation loop.
pub trait Renderer {
    fn draw(&mut self, universe: &Universe) -> LifeResult<()>;

    /// Called before each frame except the first.
    fn between_frames(&mut self) -> LifeResult<()> {
        Ok(())
    }
}

/// Prints plain-text frames, pausing and clearing the terminal between them.
pub struct TerminalRenderer<W: Write> {
    out: W,
    frame_delay: Duration,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, frame_delay: Duration) -> Self {
        Self { out, frame_delay }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalRenderer<Stdout> {
    pub fn stdout(frame_delay: Duration) -> Self {
        Self::new(io::stdout(), frame_delay)
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, universe: &Universe) -> LifeResult<()> {
        write!(self.out, "{}", universe)?;
        self.out.flush()?;
        Ok(())
    }

    fn between_frames(&mut self) -> LifeResult<()> {
        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        Ok(())
    }
}
