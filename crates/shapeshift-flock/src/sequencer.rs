//! Timed label sequencing.

use std::collections::VecDeque;

use shapeshift_core::CADENCE_MS;
use tracing::{debug, warn};

use crate::timer::Interval;

/// Prefix that marks a token as a command.
pub const COMMAND_PREFIX: char = '#';

/// Label shown for commands that have no handler.
pub const ERROR_LABEL: &str = "Error";

/// An ordered list of label tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSequence(Vec<String>);

impl LabelSequence {
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Pipe-delimited tokens, e.g. `"HELLO|WORLD"`.
impl From<&str> for LabelSequence {
    fn from(value: &str) -> Self {
        Self(value.split('|').map(str::to_string).collect())
    }
}

impl From<String> for LabelSequence {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Vec<String>> for LabelSequence {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl From<&[&str]> for LabelSequence {
    fn from(value: &[&str]) -> Self {
        Self(value.iter().map(|s| s.to_string()).collect())
    }
}

/// What a fired token asks the flock to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Morph into the silhouette of the label.
    Shape(String),
    /// A `#name value` token nothing handles.
    Unknown {
        name: String,
        argument: Option<String>,
    },
}

impl Command {
    /// Parse a token. The first space-separated word starting with `#`
    /// names a command and the second word is its argument.
    pub fn parse(token: &str) -> Self {
        let mut words = token.split(' ');
        match words.next().and_then(|w| w.strip_prefix(COMMAND_PREFIX)) {
            Some(name) => Command::Unknown {
                name: name.to_string(),
                argument: words.next().map(str::to_string),
            },
            None => Command::Shape(token.to_string()),
        }
    }

    /// Label to rasterize for this command.
    pub fn label(&self) -> &str {
        match self {
            Command::Shape(label) => label,
            Command::Unknown { .. } => ERROR_LABEL,
        }
    }
}

/// Whether the sequence runs once or repeats forever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    Once,
    #[default]
    Loop,
}

/// Feeds tokens at a fixed cadence.
#[derive(Debug, Clone)]
pub struct Sequencer {
    queue: VecDeque<String>,
    original: Vec<String>,
    interval: Option<Interval>,
    mode: Mode,
    steps: usize,
    cadence_ms: u64,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            original: Vec::new(),
            interval: None,
            mode: Mode::Loop,
            steps: 0,
            cadence_ms: CADENCE_MS,
        }
    }

    /// Replace the queue and fire each token once, the first immediately.
    ///
    /// Returns the command of the immediate fire.
    pub fn perform_action(
        &mut self,
        tokens: impl Into<LabelSequence>,
        now_ms: u64,
    ) -> Option<Command> {
        let tokens = tokens.into();
        let max = tokens.len();
        self.start(tokens, Mode::Once, Some(max), now_ms)
    }

    /// Replace the queue and cycle through the tokens until reset.
    ///
    /// Returns the command of the immediate fire.
    pub fn loop_action(&mut self, tokens: impl Into<LabelSequence>, now_ms: u64) -> Option<Command> {
        self.start(tokens.into(), Mode::Loop, None, now_ms)
    }

    /// Cancel the timer and empty the queue. Safe to call when idle.
    pub fn reset(&mut self) {
        self.interval = None;
        self.queue.clear();
    }

    /// Commands whose fire time has come, in order.
    pub fn poll(&mut self, now_ms: u64) -> Vec<Command> {
        let Some(interval) = self.interval.as_mut() else {
            return Vec::new();
        };
        let due = interval.poll(now_ms);
        let finished = interval.is_finished();

        let commands = (0..due).filter_map(|_| self.fire()).collect();
        if finished {
            self.interval = None;
        }
        commands
    }

    /// Fire the next token now and restart the cadence from here.
    pub fn fire_now(&mut self, now_ms: u64) -> Option<Command> {
        let interval = self.interval.as_mut()?;
        interval.fire_now(now_ms);
        let finished = interval.is_finished();

        let command = self.fire();
        if finished {
            self.interval = None;
        }
        command
    }

    /// Whether a timed action is in progress.
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Tokens waiting to fire.
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }

    /// Fires delivered since the last action started.
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn start(
        &mut self,
        tokens: LabelSequence,
        mode: Mode,
        max_fires: Option<usize>,
        now_ms: u64,
    ) -> Option<Command> {
        self.reset();
        self.steps = 0;
        self.mode = mode;
        if tokens.is_empty() {
            return None;
        }

        self.original = tokens.0;
        self.queue.extend(self.original.iter().cloned());

        let interval = Interval::start(now_ms, self.cadence_ms, max_fires);
        let finished = interval.is_finished();
        self.interval = Some(interval);

        let command = self.fire();
        if finished {
            self.interval = None;
        }
        command
    }

    fn fire(&mut self) -> Option<Command> {
        let token = self.queue.pop_front()?;
        self.steps += 1;

        if self.mode == Mode::Loop && self.queue.len() <= 1 {
            self.queue.extend(self.original.iter().cloned());
        }

        let command = Command::parse(&token);
        if let Command::Unknown { name, .. } = &command {
            warn!(name, token, "no handler for command, showing error label");
        }
        debug!(token, step = self.steps, "sequencer fired");
        Some(command)
    }
}
