//! rolo - Contact list CLI
//!
//! The command-line client for rolo-server: signup/login keep a locally
//! persisted session identity, and the contact commands drive the
//! owner-scoped contact endpoints with it.
//!
//! # Examples
//!
//! ```bash
//! # Create an account (also logs you in)
//! rolo signup alice pw1
//!
//! # Manage contacts
//! rolo contact add "Bob" b@x.com 555-0100
//! rolo contact list --pretty
//! rolo contact edit <id> --phone 555-0199
//! rolo contact delete <id>
//!
//! rolo logout
//! ```

mod cli;
mod commands;
mod contact_commands;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::contact_commands::ContactCommands;

use rolo_cli::{AuthSession, Client, ContactForm, ContactList, SessionStore};

use std::process::ExitCode;
use std::time::SystemTime;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();

    let cli = Cli::parse();

    // Discover server URL: explicit flag > port file > error
    let server_url = match cli.server {
        Some(url) => url,
        None => discover_server_url(),
    };

    let client = Client::new(&server_url);

    let store = match SessionStore::default_path() {
        Ok(path) => SessionStore::new(path),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut session = AuthSession::load(store);

    match cli.command {
        Commands::Signup { username, password } => {
            if session.signup(&client, &username, &password).await {
                println!("Signed up as {}", username);
                ExitCode::SUCCESS
            } else {
                eprintln!("Signup failed");
                ExitCode::FAILURE
            }
        }

        Commands::Login { username, password } => {
            if session.login(&client, &username, &password).await {
                println!("Logged in as {}", username);
                ExitCode::SUCCESS
            } else {
                eprintln!("Login failed");
                ExitCode::FAILURE
            }
        }

        Commands::Logout => {
            session.logout();
            println!("Logged out");
            ExitCode::SUCCESS
        }

        Commands::Whoami => match session.current() {
            Some(identity) => {
                println!("{} ({})", identity.username, identity.id);
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("Not logged in");
                ExitCode::FAILURE
            }
        },

        Commands::Contact { action } => {
            // The redirect-to-login analog: no session, no fetch.
            let Some(identity) = session.current().cloned() else {
                eprintln!("Not logged in. Run `rolo login <username> <password>` first.");
                return ExitCode::FAILURE;
            };

            let mut list = ContactList::new();

            match action {
                ContactCommands::List => {
                    list.refresh(&client, &identity.id).await;
                    print_json(&list.contacts(), cli.pretty)
                }

                ContactCommands::Add { name, email, phone } => {
                    let form = ContactForm { name, email, phone };
                    match list.submit(&client, &identity.id, &form).await {
                        Some(contact) => print_json(&contact, cli.pretty),
                        None => {
                            eprintln!("Failed to add contact");
                            ExitCode::FAILURE
                        }
                    }
                }

                ContactCommands::Edit {
                    id,
                    name,
                    email,
                    phone,
                } => {
                    list.refresh(&client, &identity.id).await;

                    let Some(current) = list.find(&id).cloned() else {
                        eprintln!("Contact {} not found", id);
                        return ExitCode::FAILURE;
                    };

                    // The form is pre-filled with the stored values, so
                    // absent flags keep them.
                    let form = ContactForm {
                        name: name.unwrap_or(current.name),
                        email: email.unwrap_or(current.email),
                        phone: phone.unwrap_or(current.phone),
                    };

                    list.begin_edit(&id);
                    match list.submit(&client, &identity.id, &form).await {
                        Some(contact) => print_json(&contact, cli.pretty),
                        None => {
                            eprintln!("Failed to update contact");
                            ExitCode::FAILURE
                        }
                    }
                }

                ContactCommands::Delete { id } => {
                    if list.remove(&client, &id).await {
                        println!("Contact deleted successfully");
                        ExitCode::SUCCESS
                    } else {
                        eprintln!("Failed to delete contact");
                        ExitCode::FAILURE
                    }
                }
            }
        }
    }
}

/// Print a value as JSON to stdout
fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostic channel: client-side failures are logged to stderr and the
/// commands degrade instead of surfacing raw errors.
fn init_logger() {
    let level = std::env::var("ROLO_LOG_LEVEL")
        .ok()
        .and_then(|s| s.parse::<rolo_config::LogLevel>().ok())
        .map(|l| l.0)
        .unwrap_or(log::LevelFilter::Warn);

    let _ = fern::Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
            ))
        })
        .chain(std::io::stderr())
        .apply();
}

/// Discover the server URL from the port discovery file.
///
/// The rolo-server writes `server.json` after binding, containing the
/// port and host. Falls back to a clear error message if no file exists.
fn discover_server_url() -> String {
    match rolo_config::PortFileInfo::read() {
        Ok(Some(info)) => {
            format!("http://{}:{}", info.host, info.port)
        }
        Ok(None) => {
            let port_path = rolo_config::PortFileInfo::path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| ".rolo/server.json".to_string());

            eprintln!("Error: No running rolo-server found.");
            eprintln!();
            eprintln!("Checked: {}", port_path);
            eprintln!();
            eprintln!("Start the server first:");
            eprintln!("  cargo run -p rolo-server");
            eprintln!();
            eprintln!("Or specify a server URL explicitly:");
            eprintln!("  rolo --server http://127.0.0.1:8000 <command>");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error reading port file: {}", e);
            eprintln!();
            eprintln!("Specify a server URL explicitly:");
            eprintln!("  rolo --server http://127.0.0.1:8000 <command>");
            std::process::exit(1);
        }
    }
}
