mod cli;

use clap::Parser;
use closy::catalog;
use closy::config;
use closy::error::ClosyError;
use closy::report;
use closy::scoring::filter_top;
use closy::session::{Session, DEFAULT_OPTION_COUNT};
use closy::telemetry;
use closy::types::config::ClosyConfig;
use closy::types::response::{LegacyResponse, LookElement, Occasion};
use closy::types::scoring::{ScoreMode, StyleScore};
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INSUFFICIENT_DATA: i32 = 1;
    pub const INVALID_SELECTION: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn session_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

fn print_scores(scores: &[StyleScore]) {
    if scores.is_empty() {
        println!("no scores yet");
        return;
    }
    for style in scores {
        println!(
            "{:<20} {:>5.2}  total {:>5.2}  ({} responses)",
            style.style_name, style.average_score, style.total_score, style.response_count
        );
    }
}

fn run() -> Result<i32, ClosyError> {
    let cli = cli::Cli::parse();
    let session_path = cli.command.session_path().clone();
    let loaded = config::load_config(session_dir(&session_path))?;
    let cfg = loaded.unwrap_or_default();
    telemetry::init(&telemetry::level_for(
        cli.verbose,
        cli.quiet,
        Some(cfg.log_level()),
    ))?;

    match cli.command {
        cli::Commands::Init(cmd) => {
            Session::create(&cmd.session, cmd.force)?;
            println!("session created: {}", cmd.session.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Reset(cmd) => {
            let mut session = Session::load(&cmd.session)?;
            session.reset();
            session.save(&cmd.session)?;
            println!("session reset");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Rate(cmd) => {
            let question = match cmd.question {
                Some(id) => id,
                None => catalog::question_id_for_style(&cmd.style).ok_or_else(|| {
                    ClosyError::InvalidResponse(format!(
                        "unknown style '{}'; pass --question for styles outside the catalog",
                        cmd.style
                    ))
                })?,
            };
            let mut session = Session::load(&cmd.session)?;
            session.record_rating(question, &cmd.style, cmd.rating)?;
            session.save(&cmd.session)?;
            let label = catalog::RATING_LABELS
                .iter()
                .find(|(value, _)| *value == cmd.rating)
                .map_or("", |(_, label)| *label);
            println!("rated {} with {} ({label})", cmd.style, cmd.rating);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Outfits(cmd) => {
            let mut session = Session::load(&cmd.session)?;
            let occasion = Occasion::from(cmd.occasion);
            let candidates: Vec<String> = session
                .outfit_candidates(&cfg.outfit_thresholds())?
                .into_iter()
                .map(|style| style.style_name)
                .collect();

            if cmd.pick.is_empty() {
                println!("outfits for {occasion}:");
                for (index, name) in candidates.iter().enumerate() {
                    println!("[{index}] {name}");
                }
                return Ok(exit_code::SUCCESS);
            }

            session.submit_outfit_picks(occasion, &candidates, &cmd.pick)?;
            session.save(&cmd.session)?;
            println!("recorded {} picks for {occasion}", cmd.pick.len());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Brands(cmd) => {
            let mut session = Session::load(&cmd.session)?;
            if cmd.select.is_empty() {
                for brand in session.unified_brands()? {
                    println!(
                        "{:<18} score {}  ({})",
                        brand.brand_name,
                        brand.score,
                        brand.styles.join(", ")
                    );
                }
                return Ok(exit_code::SUCCESS);
            }

            let points = session.submit_brand_selection(&cmd.select)?;
            session.save(&cmd.session)?;
            for brand in &points {
                println!(
                    "{} adds {} to {}",
                    brand.brand_name,
                    brand.points,
                    brand.styles.join(", ")
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Look(cmd) => {
            let order: Vec<LookElement> = cmd.order.into_iter().map(LookElement::from).collect();
            let mut session = Session::load(&cmd.session)?;
            session.submit_look_priorities(&order)?;
            session.save(&cmd.session)?;
            let names: Vec<&str> = order.iter().map(|element| element.display_name()).collect();
            println!("look priorities: {}", names.join(" > "));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Subcategory(cmd) => {
            let element = LookElement::from(cmd.element);
            let mut session = Session::load(&cmd.session)?;
            if cmd.option.is_empty() {
                println!("{}:", element.display_name());
                for option in session.subcategory_options(element, DEFAULT_OPTION_COUNT) {
                    println!("{:<26} {}", option.id, option.display_name);
                }
                return Ok(exit_code::SUCCESS);
            }

            let injected = session.submit_subcategory(element, &cmd.option)?;
            session.save(&cmd.session)?;
            println!("recorded {element} ({injected} style points added)");
            match session.next_subcategory() {
                Some(next) => println!("next: {next}"),
                None => println!("questionnaire complete"),
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Scores(cmd) => {
            let session = Session::load(&cmd.session)?;
            let mode = cmd.mode.map(ScoreMode::from).unwrap_or_else(|| session.live_mode());
            let mut options = cfg.filter_options();
            if let Some(min_score) = cmd.min_score {
                options.min_score = min_score;
            }
            if let Some(max_results) = cmd.max_results {
                options.max_results = max_results;
            }
            print_scores(&filter_top(&session.scores(mode), &options));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Progress(cmd) => {
            let session = Session::load(&cmd.session)?;
            let progress = session.progress();
            println!("block 1: {}", progress.block1_complete);
            println!("block 2: {}", progress.block2_complete);
            println!("block 3: {}", progress.block3_complete);
            println!("next: {}", progress.current_block);
            println!("onboarding completed: {}", session.flags().onboarding_completed);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Report(cmd) => {
            let session = Session::load(&cmd.session)?;
            let format = match cmd.format {
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => report_format_from_config(&cfg),
            };
            let rendered = report::render(&report::build(&session), format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Import(cmd) => {
            let content = std::fs::read_to_string(&cmd.from)?;
            let records: Vec<LegacyResponse> = serde_json::from_str(&content)?;
            let mut session = if cmd.session.exists() {
                Session::load(&cmd.session)?
            } else {
                Session::new()
            };
            let imported = session.import_legacy(&records)?;
            session.save(&cmd.session)?;
            println!("imported {imported} responses");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Complete(cmd) => {
            let mut session = Session::load(&cmd.session)?;
            session.complete_onboarding();
            session.save(&cmd.session)?;
            println!("onboarding completed");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn report_format_from_config(cfg: &ClosyConfig) -> report::OutputFormat {
    cfg.report_format()
        .and_then(report::OutputFormat::from_name)
        .unwrap_or(report::OutputFormat::Md)
}

fn exit_code_for(error: &ClosyError) -> i32 {
    match error {
        ClosyError::InsufficientData(_) => exit_code::INSUFFICIENT_DATA,
        ClosyError::Selection(_) | ClosyError::InvalidResponse(_) => exit_code::INVALID_SELECTION,
        _ => exit_code::RUNTIME_FAILURE,
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code_for(&e));
        }
    }
}
