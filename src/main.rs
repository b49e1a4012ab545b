use clap::Parser;
use miette::Result;
use tartan::cli::{load_config, Cli, Commands};
use tartan::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().quiet(cli.quiet);

    if let Commands::Completions(args) = cli.command {
        tartan::cli::completions::run(args)?;
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Render(args) => tartan::cli::render::run(args, &config, &printer).map(|_| ()),
        Commands::List(args) => tartan::cli::list::run(args, &config, &printer),
        Commands::Colours(args) => tartan::cli::colours::run(args, &config, &printer),
        Commands::Show(args) => tartan::cli::show::run(args, &config, &printer),
        Commands::Completions(_) => Ok(()),
    };

    if let Err(e) = &result {
        if e.is_render_error() {
            printer.error("Failed", "could not weave this thread count");
        }
    }

    result?;
    Ok(())
}
