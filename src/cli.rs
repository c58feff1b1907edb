use clap::{Args, Parser, Subcommand, ValueEnum};
use closy::types::response::{LookElement, Occasion};
use closy::types::scoring::ScoreMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "closy",
    version,
    about = "Style preference scoring for the Closy onboarding questionnaire"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty session file
    Init(InitCommand),
    /// Clear every response and flag
    Reset(SessionArgs),
    /// Rate a block-1 style from 1 to 5
    Rate(RateCommand),
    /// List or pick outfits for a block-2 occasion
    Outfits(OutfitsCommand),
    /// List or select unified brands
    Brands(BrandsCommand),
    /// Rank the look elements
    Look(LookCommand),
    /// List or answer a look-element subcategory
    Subcategory(SubcategoryCommand),
    /// Show ranked style scores
    Scores(ScoresCommand),
    /// Show block completion
    Progress(SessionArgs),
    /// Render the style profile
    Report(ReportCommand),
    /// Import responses exported by the app
    Import(ImportCommand),
    /// Mark onboarding as completed
    Complete(SessionArgs),
}

#[derive(Args)]
pub struct SessionArgs {
    pub session: PathBuf,
}

#[derive(Args)]
pub struct InitCommand {
    pub session: PathBuf,
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct RateCommand {
    pub session: PathBuf,
    /// Defaults to the catalog question for the style
    #[arg(long)]
    pub question: Option<u64>,
    #[arg(long)]
    pub style: String,
    #[arg(long)]
    pub rating: u8,
}

#[derive(Args)]
pub struct OutfitsCommand {
    pub session: PathBuf,
    #[arg(long, value_enum)]
    pub occasion: OccasionArg,
    /// Candidate indexes in preference order
    #[arg(long, num_args = 1..)]
    pub pick: Vec<usize>,
}

#[derive(Args)]
pub struct BrandsCommand {
    pub session: PathBuf,
    #[arg(long, num_args = 1..)]
    pub select: Vec<String>,
}

#[derive(Args)]
pub struct LookCommand {
    pub session: PathBuf,
    /// Most important first, e.g. shoes,base,outerwear,accessories
    #[arg(long, value_enum, value_delimiter = ',', required = true)]
    pub order: Vec<ElementArg>,
}

#[derive(Args)]
pub struct SubcategoryCommand {
    pub session: PathBuf,
    #[arg(long, value_enum)]
    pub element: ElementArg,
    #[arg(long, num_args = 1..)]
    pub option: Vec<String>,
}

#[derive(Args)]
pub struct ScoresCommand {
    pub session: PathBuf,
    /// Defaults to simple before block 2 and final after
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
    #[arg(long)]
    pub min_score: Option<f64>,
    #[arg(long)]
    pub max_results: Option<usize>,
}

#[derive(Args)]
pub struct ReportCommand {
    pub session: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ImportCommand {
    pub session: PathBuf,
    #[arg(long)]
    pub from: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OccasionArg {
    Day,
    Formal,
    Party,
}

impl From<OccasionArg> for Occasion {
    fn from(arg: OccasionArg) -> Self {
        match arg {
            OccasionArg::Day => Occasion::DayToDay,
            OccasionArg::Formal => Occasion::FormalEvent,
            OccasionArg::Party => Occasion::NightOut,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ElementArg {
    Shoes,
    Accessories,
    Base,
    Outerwear,
}

impl From<ElementArg> for LookElement {
    fn from(arg: ElementArg) -> Self {
        match arg {
            ElementArg::Shoes => LookElement::Shoes,
            ElementArg::Accessories => LookElement::Accessories,
            ElementArg::Base => LookElement::Base,
            ElementArg::Outerwear => LookElement::Outerwear,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    Simple,
    Final,
}

impl From<ModeArg> for ScoreMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Simple => ScoreMode::Simple,
            ModeArg::Final => ScoreMode::Final,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

impl Commands {
    pub fn session_path(&self) -> &PathBuf {
        match self {
            Commands::Init(cmd) => &cmd.session,
            Commands::Reset(cmd) | Commands::Progress(cmd) | Commands::Complete(cmd) => {
                &cmd.session
            }
            Commands::Rate(cmd) => &cmd.session,
            Commands::Outfits(cmd) => &cmd.session,
            Commands::Brands(cmd) => &cmd.session,
            Commands::Look(cmd) => &cmd.session,
            Commands::Subcategory(cmd) => &cmd.session,
            Commands::Scores(cmd) => &cmd.session,
            Commands::Report(cmd) => &cmd.session,
            Commands::Import(cmd) => &cmd.session,
        }
    }
}
