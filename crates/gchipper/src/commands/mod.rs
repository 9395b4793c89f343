mod grams;
mod modes;

/// Subcommands for gchipper
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Stream the grams of the input, one per line.
    Grams(grams::GramsArgs),

    /// List the engine versions and edge sides.
    Modes(modes::ModesArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Grams(cmd) => cmd.run(),
            Commands::Modes(cmd) => cmd.run(),
        }
    }
}
