use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ContactCommands {
    /// List your contacts
    List,
    /// Add a contact
    Add {
        name: String,
        email: String,
        phone: String,
    },
    /// Edit a contact (absent flags keep the stored values)
    Edit {
        /// Contact ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete a contact
    Delete {
        /// Contact ID
        id: String,
    },
}
