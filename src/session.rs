// Session module - interactive loop over one live city store
use crate::storage::CityStore;
use crate::views::{self, Route, ViewContext, dashboard::DashboardWatcher};
use crate::{v_error, v_info, v_summary};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Go(Route),
    Update { city: String, patch_json: String },
    Predict(String),
    Routes,
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "go" | "show" => rest.parse::<Route>().map(SessionCommand::Go).map_err(|e| e.to_string()),
            "update" => {
                let (city, json) = split_city_and_patch(rest)
                    .ok_or_else(|| "usage: update <city> <json patch>".to_string())?;
                Ok(SessionCommand::Update { city, patch_json: json })
            }
            "predict" if !rest.is_empty() => Ok(SessionCommand::Predict(rest.to_string())),
            "predict" => Err("usage: predict <city>".to_string()),
            "routes" => Ok(SessionCommand::Routes),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command '{}' (type 'help')", other)),
        }
    }
}

/// City names may contain spaces; the patch starts at the first '{'.
fn split_city_and_patch(rest: &str) -> Option<(String, String)> {
    let brace = rest.find('{')?;
    let city = rest[..brace].trim();
    if city.is_empty() {
        return None;
    }
    Some((city.to_string(), rest[brace..].trim().to_string()))
}

pub const HELP: &str = "Commands:
  go <path>                 render a page (/, /dashboard, /emergency, /ai-prediction, /volunteer, /resources)
  update <city> <json>      merge a patch, e.g. update Chennai {\"resources\":{\"food\":10}}
  predict <city>            risk message, trend and safety tips
  routes                    list pages
  quit                      end the session";

pub struct Session {
    ctx: ViewContext,
}

impl Session {
    pub fn new(ctx: ViewContext) -> Self {
        Self { ctx }
    }

    pub fn store(&self) -> &CityStore {
        &self.ctx.store
    }

    /// Runs one command. `None` means the session should end.
    pub fn execute(&self, command: SessionCommand) -> Option<String> {
        let output = match command {
            SessionCommand::Go(route) => views::render(route, &self.ctx),
            SessionCommand::Update { city, patch_json } => {
                match self.ctx.store.update_json(&city, &patch_json) {
                    Ok(()) => format!("✅ Updated {}", city),
                    Err(e) => format!("❌ {}", e),
                }
            }
            SessionCommand::Predict(city) => views::prediction::render_lookup(&city),
            SessionCommand::Routes => Route::ALL
                .iter()
                .map(|r| format!("  {:<15} {}", r.path(), r.title()))
                .collect::<Vec<_>>()
                .join("\n"),
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => return None,
        };
        Some(output)
    }

    /// Reads commands from stdin until `quit` or end of input. A watcher
    /// prints the new totals after every store change.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let watcher = DashboardWatcher::spawn(self.ctx.clone());
        v_summary!("{}", views::render(Route::Home, &self.ctx));
        v_summary!("\nType 'help' for commands.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            match SessionCommand::parse(&line) {
                Ok(command) => match self.execute(command) {
                    Some(output) => v_summary!("{}", output),
                    None => break,
                },
                Err(e) => v_error!("⚠️ {}", e),
            }
            // let the watcher print before the next prompt
            tokio::task::yield_now().await;
        }

        watcher.stop();
        v_info!("👋 Session ended after {} store updates", self.ctx.store.version());
        Ok(())
    }
}
