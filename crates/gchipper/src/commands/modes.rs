use gramchipper::config::{EngineVersion, Side};
use strum::IntoEnumIterator;

/// Args for the modes command.
#[derive(clap::Args, Debug)]
pub struct ModesArgs {}

impl ModesArgs {
    /// Run the modes command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        println!("engines:");
        for engine in EngineVersion::iter() {
            println!("* {engine}");
        }
        println!("sides:");
        for side in Side::iter() {
            println!("* {side}");
        }
        Ok(())
    }
}
