//! Stdin command parsing and the intent provider built on it.
//!
//! One line is one tick. Several commands may share a line separated by
//! `;`, e.g. `move 300 200; heal`. An empty line (or `wait`) ticks with no
//! intents.
use async_trait::async_trait;
use game_core::{Intent, ItemOracle, PlayerAction, Position, RenderSnapshot};
use runtime::{IntentProvider, ItemOracleImpl, Result as RuntimeResult};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{Mutex, mpsc};

use crate::render::OutputFormat;

const COMMANDS: &str =
    "start, move X Y, attack, weapon, shield, heal, flee, use N, buy NAME, wait, quit";

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("unknown command `{0}` (try: {commands})", commands = COMMANDS)]
    UnknownCommand(String),

    #[error("`{command}` expects {expected}")]
    BadArguments {
        command: &'static str,
        expected: &'static str,
    },

    #[error("no item named `{0}`")]
    UnknownItem(String),
}

/// A parsed input line.
#[derive(Clone, Debug, PartialEq)]
pub enum Line {
    Intents(Vec<Intent>),
    Quit,
}

/// Parses one input line against the item catalog.
pub fn parse_line(line: &str, items: &impl ItemOracle) -> Result<Line, InputError> {
    let mut intents = Vec::new();
    for command in line.split(';').map(str::trim).filter(|c| !c.is_empty()) {
        let mut words = command.split_whitespace();
        let Some(verb) = words.next() else {
            continue;
        };
        let rest: Vec<_> = words.collect();

        let intent = match verb.to_ascii_lowercase().as_str() {
            "quit" | "exit" => return Ok(Line::Quit),
            "wait" => continue,
            "start" => Intent::StartGame,
            "move" => match rest.as_slice() {
                [x, y] => match (x.parse::<f32>(), y.parse::<f32>()) {
                    (Ok(x), Ok(y)) => Intent::Move(Position::new(x, y)),
                    _ => return Err(bad("move", "two numbers")),
                },
                _ => return Err(bad("move", "two numbers")),
            },
            "attack" | "punch" => Intent::Combat(PlayerAction::BasicAttack),
            "weapon" => Intent::Combat(PlayerAction::WeaponAttack),
            "shield" => Intent::Combat(PlayerAction::UseShieldPotionSlot),
            "heal" => Intent::Combat(PlayerAction::UseHealPotionSlot),
            "use" => match rest.as_slice() {
                [index] => index
                    .parse()
                    .map(Intent::UseItem)
                    .map_err(|_| bad("use", "an inventory index"))?,
                _ => return Err(bad("use", "an inventory index")),
            },
            "buy" if rest.is_empty() => return Err(bad("buy", "an item name")),
            "buy" => {
                let name = rest.join(" ");
                items
                    .find_by_name(&name)
                    .map(|definition| Intent::Buy(definition.handle))
                    .ok_or(InputError::UnknownItem(name))?
            }
            // Full action names, e.g. `use_heal_potion_slot`.
            other => other
                .parse::<PlayerAction>()
                .map(Intent::Combat)
                .map_err(|_| InputError::UnknownCommand(command.to_owned()))?,
        };
        intents.push(intent);
    }
    Ok(Line::Intents(intents))
}

fn bad(command: &'static str, expected: &'static str) -> InputError {
    InputError::BadArguments { command, expected }
}

/// Prints each snapshot and turns the next valid stdin line into intents.
///
/// End of input stops the game loop.
pub struct StdinIntentProvider {
    lines: Mutex<mpsc::Receiver<String>>,
    items: ItemOracleImpl,
    output: OutputFormat,
}

impl StdinIntentProvider {
    /// Starts the stdin reader task.
    pub fn spawn(items: ItemOracleImpl, output: OutputFormat) -> Self {
        let (tx, rx) = mpsc::channel(16);
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if tx.send(line).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(error) => {
                        tracing::warn!("stdin read failed: {}", error);
                        break;
                    }
                }
            }
        });
        Self::from_receiver(rx, items, output)
    }

    pub fn from_receiver(
        lines: mpsc::Receiver<String>,
        items: ItemOracleImpl,
        output: OutputFormat,
    ) -> Self {
        Self {
            lines: Mutex::new(lines),
            items,
            output,
        }
    }
}

#[async_trait]
impl IntentProvider for StdinIntentProvider {
    async fn next_intents(&self, snapshot: &RenderSnapshot) -> RuntimeResult<Option<Vec<Intent>>> {
        match self.output.render(snapshot) {
            Ok(frame) => println!("{}", frame.trim_end()),
            Err(error) => tracing::warn!("failed to render snapshot: {}", error),
        }

        let mut lines = self.lines.lock().await;
        while let Some(line) = lines.recv().await {
            match parse_line(&line, &self.items) {
                Ok(Line::Intents(intents)) => return Ok(Some(intents)),
                Ok(Line::Quit) => return Ok(None),
                Err(error) => tracing::warn!("Invalid input: {}", error),
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use game_content::tables::{EPEE_AMELIOREE, PLANTE_CURATIVE};
    use game_core::{GameConfig, GameState, GameEngine};
    use runtime::OracleManager;

    use super::*;

    fn parse(line: &str) -> Result<Line, InputError> {
        parse_line(line, &ItemOracleImpl::from_content())
    }

    #[test]
    fn parses_single_commands() {
        assert_eq!(parse("start"), Ok(Line::Intents(vec![Intent::StartGame])));
        assert_eq!(
            parse("move 300 200.5"),
            Ok(Line::Intents(vec![Intent::Move(Position::new(300.0, 200.5))]))
        );
        assert_eq!(
            parse("Weapon"),
            Ok(Line::Intents(vec![Intent::Combat(PlayerAction::WeaponAttack)]))
        );
        assert_eq!(
            parse("use_heal_potion_slot"),
            Ok(Line::Intents(vec![Intent::Combat(PlayerAction::UseHealPotionSlot)]))
        );
        assert_eq!(parse("quit"), Ok(Line::Quit));
        assert_eq!(parse(""), Ok(Line::Intents(Vec::new())));
        assert_eq!(parse("wait"), Ok(Line::Intents(Vec::new())));
    }

    #[test]
    fn buy_resolves_multi_word_names() {
        assert_eq!(
            parse("buy Épée améliorée"),
            Ok(Line::Intents(vec![Intent::Buy(EPEE_AMELIOREE)]))
        );
        assert_eq!(
            parse("buy plante curative; use 0"),
            Ok(Line::Intents(vec![Intent::Buy(PLANTE_CURATIVE), Intent::UseItem(0)]))
        );
        assert_eq!(
            parse("buy Bouclier"),
            Err(InputError::UnknownItem("Bouclier".into()))
        );
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(parse("move 1"), Err(bad("move", "two numbers")));
        assert_eq!(parse("use -1"), Err(bad("use", "an inventory index")));
        assert_eq!(parse("buy"), Err(bad("buy", "an item name")));
        assert!(matches!(parse("dance"), Err(InputError::UnknownCommand(_))));

        let message = InputError::UnknownCommand("dance".to_owned()).to_string();
        assert!(message.starts_with("unknown command `dance`"));
        assert!(message.contains("buy NAME"));
    }

    #[tokio::test]
    async fn provider_skips_invalid_lines_and_stops_at_quit() {
        let (tx, rx) = mpsc::channel(8);
        for line in ["dance", "start", "quit"] {
            tx.send(line.to_owned()).await.unwrap();
        }
        let provider = StdinIntentProvider::from_receiver(
            rx,
            ItemOracleImpl::from_content(),
            OutputFormat::Json,
        );

        let oracles = OracleManager::from_content();
        let mut state = GameState::new(GameConfig::default());
        let snapshot = GameEngine::new(&mut state).snapshot(oracles.as_game_env());

        assert_eq!(
            provider.next_intents(&snapshot).await.unwrap(),
            Some(vec![Intent::StartGame])
        );
        assert_eq!(provider.next_intents(&snapshot).await.unwrap(), None);
    }
}
