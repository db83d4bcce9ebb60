use clap::Subcommand;

#[derive(Subcommand)]
pub enum StorageCommands {
    /// Check that the store accepts writes
    Check,
    /// Remove every stored collection
    Clear,
}
