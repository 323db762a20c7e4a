#![cfg(feature = "std")]

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{bail, Context};
use dialoguer::Password;

use crate::{
    common::{parse_cell, Cell, PlayerId},
    config::SHIPS_PER_PLAYER,
    layout::{LayoutBuilder, ShipLayout},
};

/// How ships get onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// Every ship is typed in by its owner.
    Manual,
    /// Both fleets are placed at random.
    Random,
}

/// Source of answers that must not be echoed, such as ship positions.
pub trait HiddenInput {
    /// Show `message` and read one line without displaying what is typed.
    fn read_hidden(&mut self, message: &str) -> anyhow::Result<String>;
}

/// Password-style prompt on the controlling terminal.
pub struct TerminalPassword;

impl HiddenInput for TerminalPassword {
    fn read_hidden(&mut self, message: &str) -> anyhow::Result<String> {
        Password::new()
            .with_prompt(message.trim_end())
            .allow_empty_password(true)
            .interact()
            .context("Failed to read input")
    }
}

/// Line-based prompts for the game. Generic over its streams so matches can
/// be scripted.
pub struct Console<R, W> {
    input: R,
    output: W,
    hidden: Option<Box<dyn HiddenInput>>,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout. Ship positions are read
    /// without echo when stdin is a terminal.
    pub fn stdio() -> Self {
        let console = Console::new(io::stdin().lock(), io::stdout());
        if io::stdin().is_terminal() {
            console.with_hidden_input(TerminalPassword)
        } else {
            console
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hidden: None,
        }
    }

    /// Read masked answers from `reader` instead of the input stream.
    pub fn with_hidden_input<H: HiddenInput + 'static>(mut self, reader: H) -> Self {
        self.hidden = Some(Box::new(reader));
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `text` as is.
    pub fn say(&mut self, text: &str) -> anyhow::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `message` and read one line, without its line ending.
    pub fn prompt(&mut self, message: &str) -> anyhow::Result<String> {
        self.say(message)?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Like [`prompt`](Self::prompt), but goes through the hidden reader
    /// when one is set so the other player cannot see the answer.
    pub fn prompt_masked(&mut self, message: &str) -> anyhow::Result<String> {
        match self.hidden.as_mut() {
            Some(reader) => {
                self.output.flush()?;
                reader.read_hidden(message)
            }
            None => self.prompt(message),
        }
    }

    /// Wait for Enter.
    pub fn pause(&mut self, message: &str) -> anyhow::Result<()> {
        self.prompt(message).map(|_| ())
    }

    /// Ask whether to play on the real device. Only "y" means yes.
    pub fn ask_device(&mut self) -> anyhow::Result<bool> {
        let answer = self.prompt("Do you want to play on the real device? (y/n)\n")?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    /// The start gate. Typing "R" instead of just Enter places every ship at
    /// random.
    pub fn ask_placement_mode(&mut self) -> anyhow::Result<PlacementMode> {
        let answer = self.prompt("> Press Enter to start placing ships...\n")?;
        if answer.trim().eq_ignore_ascii_case("r") {
            Ok(PlacementMode::Random)
        } else {
            Ok(PlacementMode::Manual)
        }
    }

    /// Ask `player` for each ship's position until all are valid.
    pub fn ask_ships(&mut self, player: PlayerId) -> anyhow::Result<ShipLayout> {
        let mut builder = LayoutBuilder::new();
        while !builder.is_complete() {
            let ship = builder.placed() + 1;
            let answer = self.prompt_masked(&format!(
                "{}, choose a position for ship {} of {} (0, 1, 2, 3 or 4)\n",
                player, ship, SHIPS_PER_PLAYER
            ))?;
            match parse_cell(&answer).and_then(|cell| builder.try_place(cell)) {
                Ok(()) => self.say("\n")?,
                Err(e) => self.say(&format!("\n{}\n\n", e))?,
            }
        }
        builder
            .finish()
            .context("Ship placement finished without a layout")
    }

    /// Ask `player` where to drop this round's bomb until the answer is valid.
    pub fn ask_bomb(&mut self, player: PlayerId) -> anyhow::Result<Cell> {
        self.say(&format!("\n\nIt's now {}'s turn.\n\n", player))?;
        loop {
            let answer = self.prompt("Choose a position to bomb (0, 1, 2, 3 or 4)\n")?;
            match parse_cell(&answer) {
                Ok(cell) => {
                    self.say("\n")?;
                    return Ok(cell);
                }
                Err(e) => self.say(&format!("\n{}\n\n", e))?,
            }
        }
    }
}
