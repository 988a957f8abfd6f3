//! Explorer REPL: reads commands, drives the shell and streams chat activity.

use std::sync::Arc;

use chrono::FixedOffset;
use futures_util::StreamExt;
use machi_explorer::{
    domain::{ChatMessage, City, RandomProvider},
    infrastructure::random::{EntropyRandomProvider, SeededRandomProvider},
    usecase::{ActivityConfig, ChatEvents, CityDirectory, ExplorerShell, Overlay},
};
use machi_shared::time::{Clock, SystemClock, local_offset, timestamp_to_rfc3339};
use rustyline::{DefaultEditor, error::ReadlineError};
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};

use crate::{
    command::{CitySelector, Command, ZoomDirection},
    error::CliError,
    formatter::{HELP, OutputFormatter},
    ui::{PROMPT, print_async, print_output},
};

/// Settings of one explorer run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub activity: ActivityConfig,
    /// Fixed seed for reproducible weather and chat activity
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// JSON shape of `/export`
#[derive(Serialize)]
struct Transcript<'a> {
    city: &'a City,
    username: Option<String>,
    exported_at: String,
    messages: Vec<ChatMessage>,
}

/// Explorer state owned by the REPL
struct App {
    shell: ExplorerShell,
    /// Subscription to the open chat session
    events: Option<ChatEvents>,
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
}

/// Run the interactive explorer until `/quit`, Ctrl+C or end of input
pub async fn run_explorer(options: RunOptions) -> Result<(), CliError> {
    options.activity.validate()?;

    let random: Arc<dyn RandomProvider> = match options.seed {
        Some(seed) => {
            tracing::info!("Using fixed random seed {}", seed);
            Arc::new(SeededRandomProvider::new(seed))
        }
        None => Arc::new(EntropyRandomProvider),
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let shell = ExplorerShell::new(
        CityDirectory::builtin(),
        options.activity,
        random,
        clock.clone(),
    )?;

    let (mut input_rx, ready) = spawn_line_reader();
    if let Ok(Err(e)) = ready.await {
        return Err(CliError::Readline(e));
    }

    let mut app = App {
        shell,
        events: None,
        clock,
        offset: local_offset(),
    };

    print_output("Welcome to Machi. Type /help for commands.\n");
    app.handle(Command::List);

    loop {
        tokio::select! {
            line = input_rx.recv() => {
                let Some(line) = line else {
                    tracing::debug!("Input closed");
                    break;
                };
                if app.handle_line(&line) == Flow::Quit {
                    break;
                }
            }
            event = next_event(&mut app.events) => {
                match event {
                    Some(message) => app.show_incoming(&message),
                    None => app.events = None,
                }
            }
        }
    }

    app.shell.close_chat();
    print_output("Bye!\n");
    Ok(())
}

/// Next message of the subscription, or never when no chat is open
async fn next_event(events: &mut Option<ChatEvents>) -> Option<ChatMessage> {
    match events {
        Some(stream) => stream.next().await,
        None => std::future::pending().await,
    }
}

/// Read lines on a blocking thread and forward them to the async side.
///
/// The oneshot reports whether the line editor could be created.
fn spawn_line_reader() -> (
    mpsc::UnboundedReceiver<String>,
    oneshot::Receiver<Result<(), ReadlineError>>,
) {
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();
    let (ready_tx, ready_rx) = oneshot::channel();

    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => {
                ready_tx.send(Ok(())).ok();
                rl
            }
            Err(e) => {
                ready_tx.send(Err(e)).ok();
                return;
            }
        };

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str()).ok();
                    }
                    if input_tx.send(line).is_err() {
                        // Receiver gone, exit thread
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::debug!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    (input_rx, ready_rx)
}

impl App {
    fn handle_line(&mut self, line: &str) -> Flow {
        match Command::parse(line) {
            Ok(command) => self.handle(command),
            Err(e) => {
                print_output(&format!("{}\n", e));
                Flow::Continue
            }
        }
    }

    fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::List => self.show_cities(),
            Command::Search(query) => {
                self.shell.set_query(query);
                self.show_cities();
            }
            Command::Select(selector) => self.select(selector),
            Command::Weather => {
                self.events = None;
                let city = self.shell.selected().clone();
                let forecast = *self.shell.open_weather();
                print_output(&OutputFormatter::format_weather(&city, &forecast));
            }
            Command::Chat => self.open_chat(),
            Command::Close => self.close_overlay(),
            Command::Join(name) => self.join(&name),
            Command::Say(text) => self.say(&text),
            Command::Who => {
                if let Some(session) = self.shell.chat() {
                    print_output(&OutputFormatter::format_roster(
                        &session.online_users(),
                        session.username().as_deref(),
                    ));
                } else {
                    print_output("No chat is open. Use /chat first.\n");
                }
            }
            Command::History => {
                if let Some(session) = self.shell.chat() {
                    print_output(&OutputFormatter::format_history(
                        &session.messages(),
                        session.username().as_deref(),
                        self.offset,
                    ));
                } else {
                    print_output("No chat is open. Use /chat first.\n");
                }
            }
            Command::Export => match self.export_transcript() {
                Ok(Some(json)) => print_output(&format!("{}\n", json)),
                Ok(None) => print_output("No chat is open. Use /chat first.\n"),
                Err(e) => print_output(&format!("{}\n", e)),
            },
            Command::Zoom(direction) => {
                let zoom = match direction {
                    ZoomDirection::In => self.shell.zoom_in(),
                    ZoomDirection::Out => self.shell.zoom_out(),
                };
                print_output(&format!("Zoom: {:.1}x\n", zoom.factor()));
            }
            Command::Status => {
                let chat_user = self.shell.chat().and_then(|session| session.username());
                print_output(&OutputFormatter::format_status(
                    self.shell.selected(),
                    self.shell.viewport(),
                    self.shell.overlay(),
                    self.shell.query(),
                    chat_user.as_deref(),
                ));
            }
            Command::Help => print_output(HELP),
            Command::Quit => return Flow::Quit,
            Command::Nothing => {}
        }
        Flow::Continue
    }

    fn show_cities(&self) {
        print_output(&OutputFormatter::format_city_list(
            &self.shell.visible_cities(),
            self.shell.selected().id,
            self.shell.query(),
        ));
    }

    fn select(&mut self, selector: CitySelector) {
        let result = match &selector {
            CitySelector::Id(id) => self.shell.select(*id).map(|city| city.id),
            CitySelector::Name(name) => self.shell.select_by_name(name).map(|city| city.id),
        };
        match result {
            Ok(_) => {
                self.events = None;
                print_output(&OutputFormatter::format_selected(
                    self.shell.selected(),
                    self.shell.viewport(),
                ));
            }
            Err(e) => print_output(&format!("{}\n", e)),
        }
    }

    fn open_chat(&mut self) {
        let offset = self.offset;
        let session = self.shell.open_chat();
        let username = session.username();
        let mut output = OutputFormatter::format_chat_opened(session.city(), username.as_deref());
        output.push_str(&OutputFormatter::format_history(
            &session.messages(),
            username.as_deref(),
            offset,
        ));
        if self.events.is_none() {
            self.events = Some(session.subscribe());
        }
        print_output(&output);
    }

    fn close_overlay(&mut self) {
        match self.shell.overlay() {
            Overlay::Chat => {
                self.shell.close_chat();
                self.events = None;
                print_output("Left the chat.\n");
            }
            Overlay::Weather => {
                self.shell.close_weather();
                print_output("Closed the weather panel.\n");
            }
            Overlay::None => print_output("Nothing to close.\n"),
        }
    }

    fn join(&mut self, name: &str) {
        let Some(session) = self.shell.chat() else {
            print_output("No chat is open. Use /chat first.\n");
            return;
        };
        if session.set_username(name) {
            let username = session.username().unwrap_or_default();
            print_output(&format!("You are now '{}'.\n", username));
        } else if let Some(current) = session.username() {
            print_output(&format!("Already joined as '{}'.\n", current));
        } else {
            print_output("Username cannot be empty.\n");
        }
    }

    fn say(&mut self, text: &str) {
        let Some(session) = self.shell.chat() else {
            print_output("No chat is open. Use /chat first, or /help for commands.\n");
            return;
        };
        if !session.is_joined() {
            print_output("Pick a username with /join <name> first.\n");
            return;
        }
        // The subscription prints the message once it is appended.
        session.send_message(text);
    }

    fn show_incoming(&self, message: &ChatMessage) {
        let local_user = self.shell.chat().and_then(|session| session.username());
        print_async(&OutputFormatter::format_message(
            message,
            local_user.as_deref(),
            self.offset,
        ));
    }

    fn export_transcript(&self) -> Result<Option<String>, CliError> {
        let Some(session) = self.shell.chat() else {
            return Ok(None);
        };
        let transcript = Transcript {
            city: session.city(),
            username: session.username(),
            exported_at: timestamp_to_rfc3339(self.clock.now_millis(), self.offset),
            messages: session.messages(),
        };
        Ok(Some(serde_json::to_string_pretty(&transcript)?))
    }
}
