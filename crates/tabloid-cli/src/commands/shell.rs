use anyhow::{Context, bail};
use tabloid_client::ArticleApi;
use tabloid_core::{ArticleId, RefreshPolicy};
use tabloid_view::render::Screen;
use tabloid_view::{ArticleView, DeleteOutcome, SaveOutcome, ViewError};
use tokio::sync::mpsc;

use crate::prompt::DialoguerConfirm;
use crate::ui;

const HELP: &str = "\
commands:
  list               reload all articles
  search [keyword]   search titles and descriptions (blank lists all)
  add                open an empty form
  edit <id>          open the form for a listed article
  title <text>       set the form title
  desc <text>        set the form description
  save               create or update from the form
  cancel             close the form without saving
  delete <id>        delete an article (asks first)
  help               show this help
  quit               leave the shell (also Ctrl-D, or Ctrl-C while idle)";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Search(String),
    Add,
    Edit(ArticleId),
    Title(String),
    Desc(String),
    Save,
    Cancel,
    Delete(ArticleId),
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
///
/// Everything after the command word is taken as the argument, so keywords,
/// titles and descriptions may contain spaces.
pub fn parse_line(line: &str) -> anyhow::Result<Option<ShellCommand>> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim_start()));

    let command = match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => ShellCommand::List,
        "search" => ShellCommand::Search(rest.to_string()),
        "add" | "new" => ShellCommand::Add,
        "edit" => ShellCommand::Edit(parse_id("edit", rest)?),
        "title" => ShellCommand::Title(rest.to_string()),
        "desc" | "description" => ShellCommand::Desc(rest.to_string()),
        "save" => ShellCommand::Save,
        "cancel" => ShellCommand::Cancel,
        "delete" | "rm" => ShellCommand::Delete(parse_id("delete", rest)?),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => bail!("unknown command '{other}' (type 'help')"),
    };
    Ok(Some(command))
}

fn parse_id(command: &str, rest: &str) -> anyhow::Result<ArticleId> {
    let rest = rest.trim();
    if rest.is_empty() {
        bail!("usage: {command} <id>");
    }
    rest.parse::<ArticleId>()
        .with_context(|| format!("'{rest}' is not an article id"))
}

enum Step {
    Continue,
    Quit,
}

/// Handle `tabloid shell`.
pub async fn handle<A: ArticleApi>(api: A, policy: RefreshPolicy) -> anyhow::Result<()> {
    let mut view = ArticleView::new(api, policy);
    println!("{}", Screen::of(&view));
    run_interruptible(&mut view, ShellCommand::List).await?;

    let mut input = LineSource::new();
    while let Some(line) = input.next_line().await? {
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                eprintln!("{error:#}");
                continue;
            }
        };
        if let Step::Quit = run_interruptible(&mut view, command).await? {
            break;
        }
    }
    Ok(())
}

/// Run one command; Ctrl-C abandons an in-flight request.
async fn run_interruptible<A: ArticleApi>(
    view: &mut ArticleView<A>,
    command: ShellCommand,
) -> anyhow::Result<Step> {
    let interrupted = tokio::select! {
        step = execute(view, command) => return Ok(step),
        signal = tokio::signal::ctrl_c() => signal,
    };
    interrupted.context("failed to listen for Ctrl-C")?;
    view.reset_activity();
    eprintln!("interrupted");
    println!("{}", Screen::of(view));
    Ok(Step::Continue)
}

async fn execute<A: ArticleApi>(view: &mut ArticleView<A>, command: ShellCommand) -> Step {
    let result = match command {
        ShellCommand::Help => {
            println!("{HELP}");
            return Step::Continue;
        }
        ShellCommand::Quit => return Step::Quit,
        ShellCommand::List => view.load_articles().await,
        ShellCommand::Search(keyword) => view.search(keyword).await,
        ShellCommand::Add => {
            view.open_new();
            Ok(())
        }
        ShellCommand::Edit(id) => view.open_edit_by_id(id),
        ShellCommand::Title(text) => view.set_title(text),
        ShellCommand::Desc(text) => view.set_description(text),
        ShellCommand::Cancel => {
            view.cancel();
            Ok(())
        }
        ShellCommand::Save => view.save().await.map(|outcome| {
            if outcome == SaveOutcome::Skipped {
                eprintln!("a title is required; nothing was saved");
            }
        }),
        ShellCommand::Delete(id) => view.delete(id, &mut DialoguerConfirm).await.map(|outcome| {
            if outcome == DeleteOutcome::Declined {
                eprintln!("delete cancelled");
            }
        }),
    };

    if let Err(error) = result {
        report(&error);
    }
    println!("{}", Screen::of(view));
    Step::Continue
}

fn report(error: &ViewError) {
    tracing::debug!(%error, "shell command rejected");
    eprintln!("{error}");
}

/// Reads commands from a terminal prompt, or line by line from piped stdin.
enum LineSource {
    /// dialoguer puts the terminal in raw mode, so Ctrl-C arrives as an
    /// interrupted read rather than a signal.
    Terminal,
    /// Lines from a reader thread. A blocking read cannot be cancelled, so
    /// the thread is left behind when the shell quits.
    Piped(mpsc::Receiver<std::io::Result<String>>),
}

impl LineSource {
    fn new() -> Self {
        if ui::prefs().interactive {
            return Self::Terminal;
        }

        let (tx, rx) = mpsc::channel(16);
        std::thread::spawn(move || {
            for line in std::io::stdin().lines() {
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
        });
        Self::Piped(rx)
    }

    /// Next input line, or `None` at end of input or on Ctrl-C while waiting.
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        match self {
            Self::Terminal => prompt_line(),
            Self::Piped(lines) => tokio::select! {
                line = lines.recv() => line.transpose().context("failed to read shell input"),
                signal = tokio::signal::ctrl_c() => {
                    signal.context("failed to listen for Ctrl-C")?;
                    Ok(None)
                }
            },
        }
    }
}

fn prompt_line() -> anyhow::Result<Option<String>> {
    match dialoguer::Input::<String>::new()
        .with_prompt("tabloid")
        .allow_empty(true)
        .interact_text()
    {
        Ok(line) => Ok(Some(line)),
        Err(dialoguer::Error::IO(error)) if error.kind() == std::io::ErrorKind::Interrupted => {
            Ok(None)
        }
        Err(error) => Err(error).context("failed to read shell input"),
    }
}
