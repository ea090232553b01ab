// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `haiku` - print every arithmetic haiku.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use strum::IntoEnumIterator;
use tracing::debug;

use haiku_search::config::DEFAULT_STEP_LIMIT;
use haiku_search::render::{line_syllables, number_to_text_with, render_solution_with};
use haiku_search::state::statistics::Counters;
use haiku_search::{find_with_config, HaikuForm, Number, SearchConfig, SyllableTable, ZeroStyle};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "haiku")]
#[command(about = "Find every A + B = C that reads as a 5-7-5 haiku")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for haiku equations (the default)
    Search(SearchArgs),
    /// Print the English phrase and syllable count of a number
    Say {
        /// A number from 0 to 9999
        number: u32,

        /// Render 0 as "zero" instead of nothing
        #[arg(long)]
        zero_word: bool,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Syllables per line, operator words included
    #[arg(long, default_value = "5,7,5")]
    form: HaikuForm,

    /// Give up after this many engine steps (0 for no limit)
    #[arg(long, default_value_t = DEFAULT_STEP_LIMIT)]
    limit: u64,

    /// Render 0 as "zero" instead of nothing
    #[arg(long)]
    zero_word: bool,

    /// Print only the number of solutions
    #[arg(long)]
    count: bool,

    /// Print the syllables counted on each rendered line
    #[arg(long)]
    check: bool,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            form: HaikuForm::CLASSIC,
            limit: DEFAULT_STEP_LIMIT,
            zero_word: false,
            count: false,
            check: false,
        }
    }
}

fn zero_style(zero_word: bool) -> ZeroStyle {
    if zero_word {
        ZeroStyle::Word
    } else {
        ZeroStyle::Elided
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let result = match cli.command {
        Some(Command::Say { number, zero_word }) => say(number, zero_style(zero_word)),
        Some(Command::Search(args)) => search(&args),
        None => search(&SearchArgs::default()),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// The `say` output for `number`.
fn say(number: u32, zero: ZeroStyle) -> haiku_search::Result<String> {
    let n = Number::new(number)?;
    let table = SyllableTable::build();
    Ok(format!(
        "{} ({} syllables)\n",
        number_to_text_with(n, zero),
        table.of(n)
    ))
}

/// The `search` output: every haiku, blank-line separated, or the count.
fn search(args: &SearchArgs) -> haiku_search::Result<String> {
    let config = SearchConfig {
        form: args.form,
        step_limit: (args.limit > 0).then_some(args.limit),
    };
    let zero = zero_style(args.zero_word);
    let report = find_with_config(&config)?;

    for counter in Counters::iter() {
        let name: &str = counter.into();
        debug!(counter = name, value = report.statistics.get(counter), "statistics");
    }

    if args.count {
        return Ok(format!("{}\n", report.solutions.len()));
    }

    let mut output = String::new();
    for (i, solution) in report.solutions.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&render_solution_with(solution, zero));
        if args.check {
            let [a, b, c] = line_syllables(solution)?;
            output.push_str(&format!("({a}-{b}-{c})\n"));
        }
    }
    Ok(output)
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("haiku_search=debug,haiku=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
