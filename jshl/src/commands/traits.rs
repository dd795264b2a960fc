//! Command trait for the jshl CLI.
//!
//! Every subcommand is a value built from its arguments and then executed,
//! so `main` only has to translate flags into arguments.

use crate::error::Result;

/// Standard command trait that all jshl commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Builds and executes a command, logging its name.
pub fn run<C: Command>(args: C::Args) -> Result<C::Output> {
    tracing::debug!(command = C::name(), "executing command");
    C::new(args).execute()
}
