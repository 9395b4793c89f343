use std::io::Write;

use gramchipper::{
    GramConfig,
    GramchipperError,
    TokenStream,
    Tokenizer,
    analysis::NonWhitespace,
    config::{EngineVersion, Side},
    filters::{EdgeNGramTokenFilter, NGramTokenFilter},
    source::ReaderSource,
    tokenizers::CharTokenizer,
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// How the input is split before gramming.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SplitMode {
    /// Whitespace-separated words, each re-segmented by a gram filter.
    Whitespace,
}

/// Args for the grams command.
#[derive(clap::Args, Debug)]
pub struct GramsArgs {
    /// Minimum gram size, in code points.
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// Maximum gram size, in code points.
    #[arg(long, default_value_t = 2)]
    max: usize,

    /// Emit only edge grams.
    #[arg(long)]
    edges: bool,

    /// Use the legacy whole-buffer engine.
    #[arg(long)]
    legacy: bool,

    /// Edge side; "back" requires --legacy.
    #[arg(long, default_value_t = Side::Front)]
    side: Side,

    /// Split the input before gramming.
    #[arg(long)]
    split: Option<SplitMode>,

    /// Only gram runs of non-whitespace; ignored with --split.
    #[arg(long)]
    words: bool,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl GramsArgs {
    /// Run the grams command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let mut tokenizer = self.build_tokenizer()?;
        tokenizer.set_source(Box::new(ReaderSource::new(self.input.open_reader()?)));

        let mut writer = self.output.open_writer()?;
        let count = write_grams(tokenizer.as_mut(), &mut writer)?;
        writer.flush()?;

        log::info!(
            "{count} grams; final offset {}",
            tokenizer.attributes().end_offset
        );
        Ok(())
    }

    fn build_tokenizer(&self) -> Result<Box<dyn Tokenizer>, GramchipperError> {
        if let Some(SplitMode::Whitespace) = self.split {
            if self.legacy {
                return Err(GramchipperError::UnsupportedConfiguration(
                    "--split does not apply to the legacy engine".to_string(),
                ));
            }
            let words = CharTokenizer::whitespace();
            let filter: Box<dyn Tokenizer> = if self.edges {
                Box::new(EdgeNGramTokenFilter::with_side(
                    words, self.side, self.min, self.max,
                )?)
            } else {
                Box::new(NGramTokenFilter::new(words, self.min, self.max)?)
            };
            return Ok(filter);
        }

        let mut config = GramConfig::new(self.min, self.max)
            .with_edges_only(self.edges)
            .with_side(self.side);
        if self.legacy {
            config.set_engine(EngineVersion::Legacy);
        }
        if self.words {
            config = config.with_predicate(NonWhitespace);
        }
        log::debug!("{config:?}");

        Ok(Box::new(config.build()?))
    }
}

/// Drain `tokenizer`, writing `term<TAB>start<TAB>end<TAB>posinc` lines.
fn write_grams(
    tokenizer: &mut dyn Tokenizer,
    writer: &mut dyn Write,
) -> Result<usize, Box<dyn std::error::Error>> {
    tokenizer.reset()?;

    let mut count = 0;
    while tokenizer.increment_token()? {
        let attrs = tokenizer.attributes();
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            attrs.term.escape_debug(),
            attrs.start_offset,
            attrs.end_offset,
            attrs.position_increment
        )?;
        count += 1;
    }

    tokenizer.end()?;
    Ok(count)
}
