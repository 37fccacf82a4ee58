//! Command dispatch: apply the selected reduction and print the result.

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;

/// Execute one invocation: reduce the parsed integers, print the result.
#[instrument]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let args = cli.to_parsed();
    debug!(values = ?args.values, operation = ?args.operation, "reducing");

    // Arity is enforced by the parser; this guards the library seam.
    let result = args
        .evaluate()
        .ok_or_else(|| CliError::Usage("at least one integer is required".into()))?;
    output::info(&result);
    Ok(())
}
