use crate::command::parser::Command;
use crate::error::{FarmError, Result};
use crate::farm::AntFarm;
use crate::report;
use log::{debug, info};
use std::io::{BufRead, Write};

/// Rolls drawn for `spawn x y` fall in `0..ROLL_SPAN`
const ROLL_SPAN: i64 = 100;

/// Whether the read loop keeps going after a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Line-driven dispatcher owning the farm and the output sink
pub struct Session<W: Write> {
    farm: AntFarm,
    out: W,
    rng: fastrand::Rng,
    prompt: bool,
}

impl<W: Write> Session<W> {
    /// Create a session over an empty farm
    pub fn new(out: W, rng: fastrand::Rng) -> Self {
        Self {
            farm: AntFarm::new(),
            out,
            rng,
            prompt: false,
        }
    }

    /// Print `Enter command: ` before each read
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn farm(&self) -> &AntFarm {
        &self.farm
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Read and run commands until `exit` or end of input.
    ///
    /// Domain errors are reported inline and never stop the loop; only I/O
    /// failures are returned. Bytes that are not valid UTF-8 are replaced
    /// and the line goes through the usual parse path.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        info!("session started");
        let mut buf = Vec::with_capacity(256);
        loop {
            if self.prompt {
                write!(self.out, "{}", report::PROMPT)?;
                self.out.flush()?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if self.handle_line(line.trim_end_matches(['\n', '\r']))? == Flow::Exit {
                break;
            }
        }
        self.out.flush()?;
        info!("session finished with {} colonies", self.farm.len());
        Ok(())
    }

    /// Parse and execute a single line, reporting any domain error
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let outcome = Command::parse(line).and_then(|cmd| self.execute(cmd));
        match outcome {
            Ok(flow) => Ok(flow),
            Err(FarmError::IoError(err)) => Err(FarmError::IoError(err)),
            Err(err) => {
                debug!("command {:?} rejected: {:?}", line.trim(), err);
                report::write_error(&mut self.out, &err)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Run one command against the farm and write its report
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Spawn { x, y, roll } => {
                let roll = roll.unwrap_or_else(|| self.rng.i64(0..ROLL_SPAN));
                let colony = self.farm.spawn(x, y, roll)?;
                report::write_spawned(&mut self.out, colony)?;
            }
            Command::List => report::write_list(&mut self.out, self.farm.list())?,
            Command::Give { id, kind, amount } => {
                let (colony, resource) = self.farm.give(id, &kind, amount)?;
                report::write_given(&mut self.out, colony, resource, amount)?;
            }
            Command::Fight { first, second } => {
                let fight = self.farm.fight(first, second)?;
                report::write_fight(&mut self.out, &fight)?;
            }
            Command::Exit => {
                report::write_exit(&mut self.out)?;
                return Ok(Flow::Exit);
            }
            Command::Unknown(verb) => return Err(FarmError::UnknownCommand(verb)),
        }
        Ok(Flow::Continue)
    }
}
