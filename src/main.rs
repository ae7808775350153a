use miette::Result;
use jamgen::cli::Cli;
use jamgen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse_args(std::env::args_os());
    let printer = Printer::new().quiet(cli.quiet);

    jamgen::cli::generate::run(cli, &printer)?;

    Ok(())
}
