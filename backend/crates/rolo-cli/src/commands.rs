use crate::contact_commands::ContactCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create an account and start a session
    Signup {
        username: String,
        password: String,
    },

    /// Log in and start a session
    Login {
        username: String,
        password: String,
    },

    /// End the current session
    Logout,

    /// Show the current session identity
    Whoami,

    /// Contact operations (requires a session)
    Contact {
        #[command(subcommand)]
        action: ContactCommands,
    },
}
