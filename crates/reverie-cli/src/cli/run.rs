use crate::cli::opt::Run;
use crate::cli::run::command::{Command, CommandParser, HELP};
use crate::cli::run::prompt::JournalPrompt;
use anyhow::{Error, Result};
use reedline::{Reedline, Signal};
use reverie_core::app::{AppError, JournalApp, View};
use reverie_core::auth::AuthEvent;
use reverie_core::capture::CaptureError;
use reverie_core::config::Config;
use reverie_core::services::Services;
use reverie_model::auth::SignUp;
use reverie_model::mood;
use reverie_model::status::AnalysisMode;
use std::path::Path;

mod command;
mod prompt;
mod render;
mod session_file;

enum Flow {
    Continue,
    Exit,
}

pub(crate) async fn run(opt: Run) -> Result<(), Error> {
    let _guard = opt
        .debug
        .then(|| {
            reverie_utils::tracing::setup(
                reverie_utils::tracing::TracingConfig::builder()
                    .package(env!("CARGO_PKG_NAME"))
                    .version(env!("CARGO_PKG_VERSION"))
                    .build(),
            )
        })
        .transpose()?;

    let config = Config::from_args(opt.store, opt.llm_services)?;
    let services = Services::from_config(&config).await?;
    let mut app = JournalApp::new(&services);

    if services.analyzer.mode() == AnalysisMode::Fallback {
        println!("No AI key configured, entries get a default mood and summary.");
    }

    if let Some(path) = &opt.session_file {
        restore_session(&mut app, path).await?;
    }
    if app.view() == View::Auth {
        println!("Sign in with /signin <email> <password> or create an account with /signup. /help lists all commands.");
    }

    // Unsubscribes when the loop ends
    let mut session_changes = app.session().subscribe();
    let mut line_editor = Reedline::create();
    let parser = CommandParser::new()?;

    loop {
        app.handle_session_events();
        let prompt = JournalPrompt::new(app.view(), app.draft().word_count());
        let sig = line_editor.read_line(&prompt)?;
        match sig {
            Signal::Success(user_input) => {
                if opt.debug {
                    println!("Got input {user_input}");
                }

                let command = match parser.parse(&user_input) {
                    Ok(command) => command,
                    Err(error) => {
                        eprintln!("{error}");
                        continue;
                    }
                };

                match handle(&mut app, command).await {
                    Ok(Flow::Exit) => {
                        println!("Goodbye.");
                        break;
                    }
                    Ok(Flow::Continue) => {}
                    Err(error) => eprintln!("{}", error_message(&error)),
                }
                if let Some(event) = session_changes.try_next()
                    && let Some(path) = &opt.session_file
                {
                    let session = match &event {
                        AuthEvent::SignedIn(session) => Some(session),
                        AuthEvent::SignedOut => None,
                    };
                    session_file::store(path, session).await?;
                }
            }
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nAborted!");
                break;
            }
        }
    }

    Ok(())
}

async fn restore_session(app: &mut JournalApp, path: &Path) -> Result<()> {
    let Some(session) = session_file::load(path).await? else {
        return Ok(());
    };
    match app.restore(session).await {
        Ok(session) => {
            println!("Welcome back{}.", greeting(session.user.email.as_deref()));
            session_file::store(path, Some(&session)).await
        }
        Err(error) => {
            tracing::warn!(error = &error as &dyn std::error::Error, "failed to restore session");
            println!("Your session has expired, please sign in again.");
            session_file::store(path, None).await
        }
    }
}

fn greeting(email: Option<&str>) -> String {
    email.map(|email| format!(", {email}")).unwrap_or_default()
}

fn error_message(error: &AppError) -> String {
    match error {
        AppError::Capture(CaptureError::EmptyContent) => "Please write something first.".to_owned(),
        AppError::Capture(CaptureError::Store(_)) => "Failed to save entry. Please try again.".to_owned(),
        error => error.to_string(),
    }
}

fn require_session(app: &JournalApp, command: &Command) -> Result<(), AppError> {
    match command {
        Command::Exit | Command::Help | Command::SignUp(_) | Command::SignIn(_) | Command::Line(_) => Ok(()),
        _ if app.identity().is_none() => Err(AppError::NotSignedIn),
        _ => Ok(()),
    }
}

async fn handle(app: &mut JournalApp, command: Command) -> Result<Flow, AppError> {
    require_session(app, &command)?;
    match command {
        Command::Exit => return Ok(Flow::Exit),
        Command::Help => println!("{HELP}"),
        Command::SignUp(credentials) => match app.sign_up(&credentials).await? {
            SignUp::SignedIn { session } => {
                println!("Welcome{}. Start writing, /save stores the entry.", greeting(session.user.email.as_deref()));
            }
            SignUp::ConfirmationRequired { .. } => {
                println!("Check your e-mail to confirm the account, then /signin.");
            }
        },
        Command::SignIn(credentials) => {
            let session = app.sign_in(&credentials).await?;
            println!("Welcome{}. Start writing, /save stores the entry.", greeting(session.user.email.as_deref()));
        }
        Command::SignOut => {
            app.sign_out().await?;
            println!("Signed out.");
        }
        Command::Write => {
            app.show_write()?;
            if !app.draft().is_blank() {
                println!("Continuing your draft ({} words).", app.draft().word_count());
            }
        }
        Command::Title(title) => {
            app.show_write()?;
            app.set_title(title);
        }
        Command::Save => {
            let entry = app.save().await?;
            let label = entry.mood.as_deref().map(mood::label).unwrap_or_default();
            println!("Saved. Mood: {label}\n");
            println!("{}", render::timeline(&app.timeline_view()));
        }
        Command::Discard => {
            app.discard_draft();
            println!("Draft discarded.");
        }
        Command::Timeline => {
            app.show_timeline().await?;
            println!("{}", render::timeline(&app.timeline_view()));
        }
        Command::Search(search) => {
            enter_timeline(app).await?;
            app.set_search(search);
            print_filtered(app);
        }
        Command::Mood(mood) => {
            enter_timeline(app).await?;
            app.set_mood(mood);
            print_filtered(app);
        }
        Command::Moods => {
            enter_timeline(app).await?;
            let moods = app.mood_options();
            if moods.is_empty() {
                println!("No moods yet.");
            } else {
                let labels = moods.iter().map(|value| mood::label(value)).collect::<Vec<_>>();
                println!("{}", labels.join(", "));
            }
        }
        Command::Line(line) => match app.view() {
            View::Write => app.append_line(&line),
            View::Auth => println!("Please sign in first. /help lists all commands."),
            View::Timeline => println!("Use /write to start a new entry."),
        },
    }
    Ok(Flow::Continue)
}

/// Opens the timeline unless it is already shown, so a filter set there is kept.
async fn enter_timeline(app: &mut JournalApp) -> Result<(), AppError> {
    if app.view() != View::Timeline {
        app.show_timeline().await?;
    }
    Ok(())
}

fn print_filtered(app: &JournalApp) {
    let filter = app.filter();
    if !filter.is_empty() {
        println!("Filter: search \"{}\", mood \"{}\"\n", filter.search, filter.mood);
    }
    println!("{}", render::timeline(&app.timeline_view()));
}
