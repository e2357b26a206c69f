use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use log::{debug, info};

use rpncalc::errors::CalcErrorResult;
use rpncalc::session::{Session, SessionConfig, DEFAULT_DISPLAY_LINES};
use rpncalc::stack::OperandStack;

/// Reverse-Polish calculator
#[derive(Parser)]
#[command(name = "rpncalc")]
#[command(about = "Operand-stack calculator: type numbers and operators, e.g. `1 3.14 -`")]
#[command(version)]
struct Cli {
    /// Number of operands shown after each line
    #[arg(short = 'n', long, default_value_t = DEFAULT_DISPLAY_LINES)]
    display_lines: usize,

    /// Evaluate one line, print the result and exit
    #[arg(short, long)]
    expr: Option<String>,

    /// Initial stack content, bottom to top
    #[arg(allow_negative_numbers = true)]
    initial: Vec<f64>,
}

fn init_logger() {
    use env_logger::Builder;

    Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

// deepest line first, so the top of the stack is at the bottom of the screen
fn print_display(session: &Session) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (depth, line) in session.display().iter().enumerate().rev() {
        writeln!(out, "{}: {}", depth, line)?;
    }
    out.flush()
}

fn run_repl(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let cmd = line.trim();
        if cmd.eq_ignore_ascii_case("quit") || cmd.eq_ignore_ascii_case("exit") {
            break;
        }
        let res: CalcErrorResult = session.evaluate(cmd);
        match res {
            Ok(()) => print_display(session)?,
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    Ok(())
}

fn main() {
    init_logger();
    let cli = Cli::parse();

    let config = SessionConfig {
        display_lines: cli.display_lines,
    };
    let mut session = Session::with_stack(config, OperandStack::with_operands(cli.initial));
    info!("session started with {} operand(s)", session.stack().operand_count());

    if let Some(expr) = cli.expr {
        if let Err(e) = session.evaluate(&expr) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        if let Err(e) = print_display(&session) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        return;
    }

    if let Err(e) = run_repl(&mut session) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    debug!("session finished");
}
