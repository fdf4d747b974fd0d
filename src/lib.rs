//! Line-oriented terminal frontend for the code playground.
//!
//! The frontend drives the core purely through the intent/snapshot
//! contract: commands become [`SessionIntent`]s, state comes back as
//! [`SessionSnapshot`]s. Lines starting with `:` are commands; everything
//! else is appended to the code buffer.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};
use tracing::debug;

use playground_core::{LanguageId, SessionIntent, SessionSnapshot};

/// Parsed frontend command (a line starting with `:`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch the selected language
    SetLanguage(String),
    /// Submit the current buffer for execution
    Run,
    /// Redisplay the buffer and session state
    Show,
    /// Empty the code buffer
    Clear,
    /// List supported languages
    Langs,
    Help,
    Quit,
    Unknown(String),
}

/// Parse a command line (without the leading `:`)
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    match trimmed {
        "run" => Command::Run,
        "show" => Command::Show,
        "clear" => Command::Clear,
        "langs" => Command::Langs,
        "help" => Command::Help,
        "q" | "quit" => Command::Quit,
        _ if trimmed.starts_with("lang ") => {
            Command::SetLanguage(trimmed["lang ".len()..].trim().to_string())
        }
        _ => Command::Unknown(trimmed.to_string()),
    }
}

/// Renders a snapshot the way the playground page would: mode and code up
/// top, then either the output region or a marked error line.
pub fn render_snapshot(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "[{} | mode: {}]\n",
        snapshot.language.display_name(),
        snapshot.syntax_mode
    ));
    out.push_str(&snapshot.code);
    if !snapshot.code.ends_with('\n') {
        out.push('\n');
    }

    if snapshot.running {
        out.push_str("... running\n");
    } else if let Some(error) = &snapshot.error {
        out.push_str(&format!("error: {}\n", error));
    } else if let Some(output) = &snapshot.output {
        out.push_str(&format!("--- output ---\n{}", output));
        if !output.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}

const HELP_TEXT: &str = "\
Commands:
  :lang <id>   select a language (:langs lists them)
  :run         submit the buffer to the execution service
  :show        redisplay the buffer and last result
  :clear       empty the buffer
  :langs       list supported languages
  :help        this message
  :quit        leave
Any other line is appended to the code buffer.";

/// Interactive session over stdin/stdout
pub struct Frontend {
    intents: mpsc::Sender<SessionIntent>,
    snapshots: watch::Receiver<SessionSnapshot>,
    buffer: Vec<String>,
}

impl Frontend {
    pub fn new(
        intents: mpsc::Sender<SessionIntent>,
        snapshots: watch::Receiver<SessionSnapshot>,
    ) -> Self {
        let buffer = snapshots
            .borrow()
            .code
            .lines()
            .map(str::to_owned)
            .collect();

        Self {
            intents,
            snapshots,
            buffer,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        println!("Multi-language code runner. :help for commands.");
        print!("{}", render_snapshot(&self.snapshots.borrow().clone()));

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        while let Some(line) = lines.next_line().await.context("reading stdin")? {
            if let Some(command) = line.strip_prefix(':') {
                match parse_command(command) {
                    Command::Quit => break,
                    command => self.handle_command(command).await?,
                }
            } else {
                self.buffer.push(line);
                self.sync_code().await?;
            }
        }

        debug!("stdin closed, leaving interactive session");
        Ok(())
    }

    async fn handle_command(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::SetLanguage(name) => match name.parse::<LanguageId>() {
                Ok(language) => {
                    self.send(SessionIntent::SelectLanguage(language)).await?;
                    println!("language set to {}", language.display_name());
                }
                Err(message) => eprintln!("error: {}", message),
            },
            Command::Run => self.trigger_run().await?,
            Command::Show => {
                print!("{}", render_snapshot(&self.snapshots.borrow().clone()));
            }
            Command::Clear => {
                self.buffer.clear();
                self.sync_code().await?;
                println!("buffer cleared");
            }
            Command::Langs => {
                for language in LanguageId::ALL {
                    println!("  {:<8} {}", language, language.display_name());
                }
            }
            Command::Help => println!("{}", HELP_TEXT),
            Command::Unknown(input) => {
                eprintln!(
                    "error: unknown command \":{}\" (:help lists commands)",
                    input
                )
            }
            Command::Quit => unreachable!("quit is handled by the input loop"),
        }

        Ok(())
    }

    async fn trigger_run(&mut self) -> anyhow::Result<()> {
        if self.snapshots.borrow().running {
            println!("a run is already in flight");
            return Ok(());
        }

        self.intents
            .send(SessionIntent::TriggerRun)
            .await
            .context("session controller stopped")?;
        println!("running...");

        // The first non-running snapshot after the trigger is the settled one
        loop {
            self.snapshots
                .changed()
                .await
                .context("session controller stopped")?;
            let snapshot = self.snapshots.borrow().clone();
            if !snapshot.running {
                if let Some(error) = &snapshot.error {
                    eprintln!("error: {}", error);
                } else if let Some(output) = &snapshot.output {
                    print!("--- output ---\n{}", output);
                    if !output.ends_with('\n') {
                        println!();
                    }
                }
                return Ok(());
            }
        }
    }

    /// Sends an intent and waits for the snapshot echo so later `borrow`
    /// calls observe the applied state
    async fn send(&mut self, intent: SessionIntent) -> anyhow::Result<()> {
        self.intents
            .send(intent)
            .await
            .context("session controller stopped")?;
        self.snapshots
            .changed()
            .await
            .context("session controller stopped")?;
        Ok(())
    }

    async fn sync_code(&mut self) -> anyhow::Result<()> {
        self.send(SessionIntent::EditCode(self.buffer.join("\n")))
            .await
    }
}
