//! External agents as strategies.
//!
//! An agent is any program that reads one [`DecisionRequest`] per line on
//! stdin and writes one [`DecisionResponse`] per line on stdout. The process
//! lives for as long as the strategy does and is killed on drop.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::board::Board;
use crate::core::{Move, PlayerId, PlayerMap, StrategyError};
use crate::scoring::Scores;
use crate::supply::PlayerRecord;

use super::traits::Strategy;
use super::wire::{DecisionRequest, DecisionResponse};

/// How to launch an agent.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// Executable to run.
    pub program: String,
    /// Arguments passed to it.
    pub args: Vec<String>,
    /// Per-move answer limit; `None` waits forever.
    pub timeout: Option<Duration>,
    /// Display name; defaults to the program.
    pub name: Option<String>,
}

impl ProcessConfig {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A running agent.
///
/// Stdout is drained by a helper thread so a per-move timeout can be
/// enforced. After a timeout the late answer, if any, is still queued, so
/// the strategy should not be reused for further moves.
pub struct ProcessStrategy {
    name: String,
    timeout: Option<Duration>,
    child: Child,
    stdin: ChildStdin,
    lines: Receiver<std::io::Result<String>>,
}

impl ProcessStrategy {
    /// Launch the agent described by `config`.
    #[instrument(skip_all, fields(program = %config.program))]
    pub fn spawn(config: &ProcessConfig) -> Result<Self, StrategyError> {
        let mut child = Command::new(&config.program)
            .args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        let stdin = child.stdin.take().ok_or(StrategyError::Disconnected)?;
        let stdout = child.stdout.take().ok_or(StrategyError::Disconnected)?;

        let (tx, lines) = mpsc::channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        debug!(pid = child.id(), "agent started");
        Ok(Self {
            name: config.name.clone().unwrap_or_else(|| config.program.clone()),
            timeout: config.timeout,
            child,
            stdin,
            lines,
        })
    }

    fn send(&mut self, request: &DecisionRequest) -> Result<(), StrategyError> {
        let mut line = serde_json::to_string(request)?;
        line.push('\n');
        self.stdin.write_all(line.as_bytes())?;
        self.stdin.flush()?;
        Ok(())
    }

    /// Next non-blank line from the agent.
    ///
    /// A limit too far out to represent as an `Instant` waits forever.
    fn receive(&self) -> Result<String, StrategyError> {
        let deadline = self.timeout.and_then(|t| Instant::now().checked_add(t));
        loop {
            let next = match deadline {
                Some(deadline) => {
                    let left = deadline.saturating_duration_since(Instant::now());
                    match self.lines.recv_timeout(left) {
                        Ok(line) => line,
                        Err(RecvTimeoutError::Timeout) => {
                            let limit = self.timeout.unwrap_or_default();
                            warn!(agent = %self.name, ?limit, "agent timed out");
                            return Err(StrategyError::Timeout(limit));
                        }
                        Err(RecvTimeoutError::Disconnected) => {
                            return Err(StrategyError::Disconnected)
                        }
                    }
                }
                None => self.lines.recv().map_err(|_| StrategyError::Disconnected)?,
            };

            let line = next?;
            if !line.trim().is_empty() {
                return Ok(line);
            }
        }
    }
}

impl Strategy for ProcessStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_move(
        &mut self,
        board: &Board,
        current: PlayerId,
        players: &PlayerMap<PlayerRecord>,
        scores: &Scores,
    ) -> Result<Move, StrategyError> {
        let request = DecisionRequest::new(board, current, players, scores);
        self.send(&request)?;

        let reply = self.receive()?;
        debug!(agent = %self.name, %reply, "agent replied");
        let response: DecisionResponse = serde_json::from_str(reply.trim())?;
        response.into_move()
    }
}

impl Drop for ProcessStrategy {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

impl std::fmt::Debug for ProcessStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessStrategy")
            .field("name", &self.name)
            .field("pid", &self.child.id())
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::core::Item;
    use crate::rules::Game;

    fn shell(script: &str) -> ProcessConfig {
        ProcessConfig::new("sh").with_args(["-c", script])
    }

    fn ask(strategy: &mut ProcessStrategy) -> Result<Move, StrategyError> {
        let mut game = Game::with_board_size(4).unwrap();
        game.register_players(&[PlayerId::new(0), PlayerId::new(1)]).unwrap();
        strategy.decide_move(
            game.board(),
            PlayerId::new(0),
            game.records(),
            &game.scores(),
        )
    }

    #[test]
    fn test_agent_answers() {
        let config = shell(r#"while read line; do echo '{"position": [1, 2], "item": 3}'; done"#)
            .with_timeout(Duration::from_secs(5))
            .with_name("echo");
        let mut agent = ProcessStrategy::spawn(&config).unwrap();

        assert_eq!(agent.name(), "echo");
        for _ in 0..3 {
            assert_eq!(
                ask(&mut agent).unwrap(),
                Move::new(Position::new(1, 2), Item::Tile(3))
            );
        }
    }

    #[test]
    fn test_agent_sees_request() {
        // Answers with a stone only if it was told it is P0.
        let script = r#"while read line; do
            case "$line" in
              *'"current_player":"P0"'*) echo '{"position": [0, 0], "item": 0}' ;;
              *) echo 'nope' ;;
            esac
          done"#;
        let mut agent = ProcessStrategy::spawn(&shell(script)).unwrap();
        assert_eq!(ask(&mut agent).unwrap(), Move::stone(Position::new(0, 0)));
    }

    #[test]
    fn test_garbage_is_protocol_error() {
        let config = shell("while read line; do echo hello; done");
        let mut agent = ProcessStrategy::spawn(&config).unwrap();
        assert!(matches!(ask(&mut agent), Err(StrategyError::Protocol(_))));
    }

    #[test]
    fn test_unbounded_timeout_still_answers() {
        let config = shell(r#"while read line; do echo '{"position": [3, 3], "item": 0}'; done"#)
            .with_timeout(Duration::MAX);
        let mut agent = ProcessStrategy::spawn(&config).unwrap();
        assert_eq!(ask(&mut agent).unwrap(), Move::stone(Position::new(3, 3)));
    }

    #[test]
    fn test_timeout() {
        let config = shell("sleep 5").with_timeout(Duration::from_millis(100));
        let mut agent = ProcessStrategy::spawn(&config).unwrap();
        assert!(matches!(ask(&mut agent), Err(StrategyError::Timeout(_))));
    }

    #[test]
    fn test_exited_agent() {
        let config = shell("exit 0").with_timeout(Duration::from_secs(5));
        let mut agent = ProcessStrategy::spawn(&config).unwrap();
        let err = ask(&mut agent).unwrap_err();
        assert!(matches!(err, StrategyError::Disconnected | StrategyError::Io(_)));
    }

    #[test]
    fn test_missing_program() {
        let config = ProcessConfig::new("/nonexistent/agent-binary");
        assert!(matches!(
            ProcessStrategy::spawn(&config),
            Err(StrategyError::Io(_))
        ));
    }
}
