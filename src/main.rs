use anyhow::Result;
use clap::Parser;

use convex_repl::cli::commands::{configure, eval, peers, repl};
use convex_repl::cli::{Args, Command};
use convex_repl::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    match args.command {
        Some(Command::Eval {
            expression,
            file,
            json,
        }) => {
            let options = eval::EvalOptions {
                expression,
                file,
                json,
            };
            let code = eval::run_eval(&args.connection, options).await?;
            if code != exitcode::OK {
                std::process::exit(code);
            }
        }
        Some(Command::Peers { peer }) => {
            peers::print_peers(peer.as_deref())?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            repl::run_repl(&args.connection).await?;
        }
    }

    Ok(())
}
