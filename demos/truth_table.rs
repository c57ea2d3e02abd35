use clap::Parser;

use logic_rs::config::LogicConfig;
use logic_rs::logic::Logic;
use logic_rs::permutations::TruthTable;
use logic_rs::types::VarLimit;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Expression to parse, e.g. "(1 AND 2) OR NOT(3)".
    #[arg(value_name = "EXPR")]
    expr: String,

    /// Largest variable index the expression may reference.
    #[clap(long, value_name = "INT")]
    limit: Option<u32>,

    /// Variables to remove before printing the truth table.
    #[clap(long, value_name = "INT", value_delimiter = ',')]
    remove: Vec<u32>,

    /// Largest number of variables to enumerate.
    #[clap(long, value_name = "INT", default_value = "16")]
    max_vars: usize,

    /// Print the expression tree in DOT format.
    #[clap(long)]
    dot: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let config = LogicConfig {
        var_limit: args.limit.map_or(VarLimit::Unbounded, VarLimit::Bounded),
        max_permutation_vars: args.max_vars,
        ..LogicConfig::default()
    };
    let mut logic = Logic::with_config(&args.expr, config)?;
    println!("expr = {}", logic);
    println!("vars = {:?} (limit: {})", logic.vars(), logic.var_limit());

    if !args.remove.is_empty() {
        let removal = logic.remove(&args.remove, None);
        println!("removed {:?}, renumbered {:?}", removal.removed, removal.renumbered);
        println!("expr = {}", logic);
        println!("vars = {:?} (limit: {})", logic.vars(), logic.var_limit());
    }

    if args.dot {
        print!("{}", logic.to_dot()?);
    }

    let time_table = std::time::Instant::now();
    let mut table = TruthTable::default();
    for (assignment, value) in logic.permutations()? {
        let row: Vec<u32> = logic.vars().iter().map(|&v| assignment[v as usize - 1] as u32).collect();
        println!("{:?} => {}", row, value as u32);
        if value {
            table.successes.push(assignment);
        } else {
            table.failures.push(assignment);
        }
    }
    println!(
        "{} of {} assignments satisfy the expression (in {:.2?})",
        table.successes.len(),
        table.len(),
        time_table.elapsed()
    );

    Ok(())
}
