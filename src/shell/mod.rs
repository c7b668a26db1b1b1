//! Shell Module
//!
//! Line-oriented front end over the engine.
//!
//! ## Commands
//! - `put <filename>`: import a host file under the same name
//! - `get <filename> [newfilename]`: export a stored file to the host
//! - `del <filename>`: remove a stored file
//! - `list`: size, creation time and name of every file, newest first
//! - `df`: free bytes
//! - `quit`: stop
//!
//! Host paths are resolved against the shell's working directory. The engine
//! itself never sees a path, only the opened reader or writer.

mod command;

pub use command::{Command, CommandType};

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::engine::Engine;
use crate::error::{MfsError, Result};

/// Whether the shell should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Command dispatcher bound to one engine and one host directory
pub struct Shell {
    engine: Engine,
    workdir: PathBuf,
}

impl Shell {
    pub const PROMPT: &'static str = "mfs> ";

    pub fn new(engine: Engine, workdir: impl Into<PathBuf>) -> Self {
        Self {
            engine,
            workdir: workdir.into(),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Parse and run one input line, writing user-facing messages to `out`
    ///
    /// Only failures to write to `out` are returned as errors; everything the
    /// user did wrong is reported on `out` and the shell carries on.
    pub fn run_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Outcome> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command, out),
            Ok(None) => Ok(Outcome::Continue),
            Err(MfsError::MissingArgument(usage)) => {
                writeln!(out, "Usage: {}", usage)?;
                Ok(Outcome::Continue)
            }
            Err(_) => {
                writeln!(out, "Command not found.")?;
                Ok(Outcome::Continue)
            }
        }
    }

    /// Run a parsed command
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Outcome> {
        debug!(command = ?command.command_type(), "executing command");

        match command {
            Command::Put { name } => self.put(&name, out)?,
            Command::Get { name, dest } => {
                let dest = dest.unwrap_or_else(|| name.clone());
                self.get(&name, &dest, out)?;
            }
            Command::Delete { name } => self.delete(&name, out)?,
            Command::List => self.list(out)?,
            Command::Df => writeln!(out, "{} bytes left", self.engine.free_space())?,
            Command::Quit => {
                writeln!(out, "Aborting!")?;
                return Ok(Outcome::Quit);
            }
        }

        Ok(Outcome::Continue)
    }

    fn put<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let opened = File::open(self.workdir.join(name)).and_then(|file| {
            let size = file.metadata()?.len();
            Ok((file, size))
        });
        let (file, size) = match opened {
            Ok(opened) => opened,
            Err(e) => {
                writeln!(out, "Unable to open file: {}", name)?;
                writeln!(out, "Opening the input file returned: {}", e)?;
                return Ok(());
            }
        };

        // Anything past usize::MAX is certainly larger than the store.
        let size = usize::try_from(size).unwrap_or(usize::MAX);

        let reported = match self.engine.put(name, BufReader::new(file), size) {
            Ok(()) => Ok(()),
            Err(MfsError::InsufficientSpace { .. }) => {
                writeln!(out, "put error: Not enough disk space.")
            }
            Err(MfsError::FileTooLarge { max, .. }) => writeln!(
                out,
                "The system does not support files larger than {} bytes.",
                max
            ),
            Err(MfsError::NameTooLong { .. }) | Err(MfsError::InvalidName) => {
                writeln!(out, "put error: File name too long.")
            }
            Err(MfsError::AlreadyExists(_)) => {
                writeln!(out, "The file already exists in the system.")
            }
            Err(MfsError::EmptyFile) => {
                writeln!(out, "put error: Empty files are not supported.")
            }
            Err(MfsError::NoSlotAvailable) => writeln!(out, "put error: No free file slots."),
            Err(MfsError::Exhausted) => writeln!(out, "put error: No free blocks."),
            Err(MfsError::SourceReadFailure(_)) => {
                writeln!(out, "An error occurred reading from the input file.")
            }
            Err(e) => writeln!(out, "put error: {}", e),
        };
        reported?;
        Ok(())
    }

    fn get<W: Write>(&mut self, name: &str, dest: &str, out: &mut W) -> Result<()> {
        // Resolve first so a missing file never truncates an existing host file.
        if self.engine.stat(name).is_err() {
            writeln!(out, "Could not find the file.")?;
            return Ok(());
        }

        let file = match File::create(self.workdir.join(dest)) {
            Ok(file) => file,
            Err(e) => {
                writeln!(out, "Could not open output file: {}", dest)?;
                writeln!(out, "Opening output file returned: {}", e)?;
                return Ok(());
            }
        };

        if let Err(e) = self.engine.get(name, BufWriter::new(file)) {
            writeln!(out, "get error: {}", e)?;
        }
        Ok(())
    }

    fn delete<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        match self.engine.delete(name) {
            Ok(_) => {}
            Err(MfsError::NotFound(_)) => writeln!(out, "del error: File not found.")?,
            Err(e) => writeln!(out, "del error: {}", e)?,
        }
        Ok(())
    }

    fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        let files = self.engine.list();
        if files.is_empty() {
            writeln!(out, "list: No files found.")?;
            return Ok(());
        }
        for record in files {
            writeln!(out, "{}  {}  {}", record.size, record.created, record.name)?;
        }
        Ok(())
    }
}
