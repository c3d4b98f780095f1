use std::io::{self, BufRead, Write};

use crate::*;

/// Construction-time switches for a session.
pub type SessionOptions = RenderOptions;

/// Why a session stopped. Every variant is a normal, successful termination.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Lost,
    InputExhausted,
}

/// Drives one game: render, prompt, read a line, apply it, repeat until the board is decided or
/// input runs out. Rejected commands never escape this type; they become the next frame's
/// message.
#[derive(Clone, Debug)]
pub struct Session {
    engine: PlayEngine,
    last_rejection: Option<CommandError>,
    options: SessionOptions,
}

impl Session {
    pub const PROMPT: &'static str = ">";

    pub fn new(mine_layout: MineLayout, options: SessionOptions) -> Self {
        Self {
            engine: PlayEngine::new(mine_layout),
            last_rejection: None,
            options,
        }
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn last_rejection(&self) -> Option<CommandError> {
        self.last_rejection
    }

    pub fn frame(&self) -> Frame {
        Frame::from_engine(&self.engine, self.last_rejection, self.options)
    }

    /// Parses and applies one line of input, remembering a rejection for the next frame.
    pub fn apply_line(&mut self, line: &str) -> core::result::Result<(), CommandError> {
        let result = Command::parse(line, self.engine.size())
            .and_then(|command| self.apply(command).map_err(CommandError::from));
        self.last_rejection = result.err();
        result
    }

    fn apply(&mut self, command: Command) -> Result<()> {
        let Command { coords, action } = command;
        match action {
            Action::Reveal => {
                let outcome = self.engine.reveal(coords)?;
                log::debug!("reveal {:?}: {:?}", coords, outcome);
            }
            Action::Flag => {
                let outcome = self.engine.toggle_flag(coords)?;
                log::debug!("flag {:?}: {:?}", coords, outcome);
            }
        }
        Ok(())
    }

    fn finished(&self) -> Option<SessionEnd> {
        match self.engine.outcome() {
            Outcome::InProgress => None,
            Outcome::Won => Some(SessionEnd::Won),
            Outcome::Lost => Some(SessionEnd::Lost),
        }
    }

    fn write_frame(&self, output: &mut impl Write) -> io::Result<()> {
        write!(output, "{}", self.frame())
    }

    /// Runs the loop to completion. Only I/O failures are errors.
    pub fn run(mut self, mut input: impl BufRead, mut output: impl Write) -> io::Result<SessionEnd> {
        let mut line = Vec::new();

        loop {
            self.write_frame(&mut output)?;
            if let Some(end) = self.finished() {
                output.flush()?;
                return Ok(end);
            }

            output.write_all(Self::PROMPT.as_bytes())?;
            output.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                log::debug!("input exhausted after {} moves", self.engine.move_count());
                self.last_rejection = Some(CommandError::NotEnoughInputs);
                self.write_frame(&mut output)?;
                output.flush()?;
                return Ok(SessionEnd::InputExhausted);
            }

            let text = String::from_utf8_lossy(&line);
            if let Err(err) = self.apply_line(&text) {
                log::debug!("rejected {:?}: {}", text.trim_end(), err);
            }
        }
    }
}
