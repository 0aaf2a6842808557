use clap::Parser;
use miette::Result;
use relcalc::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict(args) => relcalc::cli::commands::predict::run(args),
        Commands::Goals(args) => relcalc::cli::commands::goals::run(args),
        Commands::Allocate(args) => relcalc::cli::commands::allocate::run(args),
    }
}
