use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use engine_logging::{engine_debug, engine_info, engine_warn};
use picker_core::{update, AppState, AppViewModel, Msg, Phase};
use picker_engine::{ensure_cache_dir, CatalogCache, KeyValueStore};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::command::{self, Command, ParseError};
use crate::config::{self, AppConfig};
use crate::effects::EffectRunner;
use crate::i18n::Dictionary;
use crate::logging;
use crate::persistence;
use crate::render::{render_event, render_view};

/// Everything the main loop reacts to, funnelled through one channel.
pub enum Input {
    Msg(Msg),
    Line(String),
    Eof,
}

pub fn run() -> anyhow::Result<()> {
    let config_path = config::config_path();
    let config = config::load(&config_path)?;
    logging::initialize(config.log_destination, config.verbose);
    engine_info!(
        "Starting agent picker (config {:?}, cache {:?})",
        config_path,
        config.cache_dir
    );

    if let Err(err) = ensure_cache_dir(&config.cache_dir) {
        engine_warn!("Cache unavailable, continuing without it: {}", err);
    }
    let store = KeyValueStore::new(&config.cache_dir, config.cache_namespace.clone());
    let cache = CatalogCache::new(store.clone());

    let (tx, rx) = mpsc::channel::<Input>();
    let mut app = App::new(&config, store, cache.clone(), tx.clone());

    println!("{}", app.dict.t("home.title"));
    println!("{}", app.dict.t("home.desc"));
    println!("{}", app.dict.t("cli.prompt"));

    app.dispatch(Msg::CatalogRestored(cache.load()));
    app.dispatch(Msg::RefreshRequested);

    spawn_stdin_reader(tx);

    while let Ok(input) = rx.recv() {
        match input {
            Input::Msg(msg) => app.dispatch(msg),
            Input::Line(line) => {
                if !app.handle_line(&line) {
                    break;
                }
            }
            Input::Eof => break,
        }
    }

    engine_info!("Agent picker shutting down");
    Ok(())
}

fn spawn_stdin_reader(tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(Input::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(Input::Eof);
    });
}

struct App {
    state: AppState,
    rng: StdRng,
    runner: EffectRunner,
    dict: Dictionary,
    store: KeyValueStore,
}

impl App {
    fn new(
        config: &AppConfig,
        store: KeyValueStore,
        cache: CatalogCache,
        tx: mpsc::Sender<Input>,
    ) -> Self {
        Self {
            state: AppState::new(),
            rng: StdRng::from_entropy(),
            runner: EffectRunner::new(config, cache, tx),
            dict: Dictionary::new(persistence::load_locale(&store)),
            store,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        engine_debug!("dispatch {:?}", msg_name(&msg));
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg, &mut self.rng);
        let was_dirty = state.consume_dirty();
        self.state = state;

        let events = self.runner.run(effects);
        let view = self.state.view();
        if events.is_empty() {
            if was_dirty && view.phase == Phase::Idle {
                self.render(&view);
            }
            return;
        }
        for event in events {
            match render_event(&event, view.current_disabled, &self.dict) {
                Some(text) => println!("{text}"),
                None => self.render(&view),
            }
        }
    }

    /// Returns `false` when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        let command = match command::parse(line) {
            Ok(command) => command,
            Err(ParseError::Empty) => return true,
            Err(err) => {
                engine_debug!("Rejected input: {}", err);
                println!("{}", self.dict.tf("cli.unknown", &[("input", line.trim())]));
                return true;
            }
        };

        match command {
            Command::Quit => return false,
            Command::Help => println!("{}", self.dict.t("cli.help")),
            Command::List => self.render_roster(),
            Command::Toggle(query) => {
                match command::resolve_agent(self.state.catalog(), &query) {
                    Some(id) => {
                        self.warn_if_busy();
                        self.dispatch(Msg::ToggleClicked { id });
                    }
                    None => println!("{}", self.dict.tf("cli.noAgent", &[("name", &query)])),
                }
            }
            Command::EnableAll => {
                self.warn_if_busy();
                self.dispatch(Msg::EnableAllClicked);
            }
            Command::DisableAll => {
                self.warn_if_busy();
                self.dispatch(Msg::DisableAllClicked);
            }
            Command::Tab(filter) => {
                self.dispatch(Msg::FilterChanged(filter));
            }
            Command::Pick => {
                self.warn_if_busy();
                self.dispatch(Msg::DrawClicked);
            }
            Command::Repick => self.dispatch(Msg::RepickClicked),
            Command::DisableCurrent => self.dispatch(Msg::DisableCurrentClicked),
            Command::Close => self.dispatch(Msg::CloseClicked),
            Command::Refresh => self.dispatch(Msg::RefreshRequested),
            Command::Lang(locale) => {
                self.dict = Dictionary::new(locale);
                persistence::save_locale(&self.store, locale);
                self.render_roster();
            }
        }
        true
    }

    fn warn_if_busy(&self) {
        if self.state.phase() != Phase::Idle {
            println!("{}", self.dict.t("cli.busy"));
        }
    }

    fn render_roster(&self) {
        let view = self.state.view();
        self.render(&view);
    }

    fn render(&self, view: &AppViewModel) {
        println!("{}", render_view(view, &self.dict));
    }
}

fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::CatalogRestored(_) => "CatalogRestored",
        Msg::RefreshRequested => "RefreshRequested",
        Msg::CatalogFetched(_) => "CatalogFetched",
        Msg::ToggleClicked { .. } => "ToggleClicked",
        Msg::EnableAllClicked => "EnableAllClicked",
        Msg::DisableAllClicked => "DisableAllClicked",
        Msg::FilterChanged(_) => "FilterChanged",
        Msg::DrawClicked => "DrawClicked",
        Msg::RevealSettled => "RevealSettled",
        Msg::RepickClicked => "RepickClicked",
        Msg::DisableCurrentClicked => "DisableCurrentClicked",
        Msg::CloseClicked => "CloseClicked",
        Msg::NoOp => "NoOp",
    }
}
