mod client;
mod config;

use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use calc_core::{
    calculate, parse_request, AdvancedOperation, BasicOperation, CalculationRequest,
    CalculationResponse, ConstantOperation,
};
use tracing::debug;

use crate::config::{AngleUnit, Config};

#[derive(Parser)]
#[command(
    name = "calc",
    version,
    about = "Calculator - basic, scientific and constant operations"
)]
struct Cli {
    /// Print the full JSON response instead of the formatted value
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Basic arithmetic on two operands (sum, subtract, multiply, divide)
    Basic {
        /// Operation name
        operation: BasicOperation,

        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: f64,

        /// Second operand
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Scientific function of one operand (two for power, log and mod)
    Advanced {
        /// Operation name
        operation: AdvancedOperation,

        /// Operand
        #[arg(allow_negative_numbers = true)]
        a: f64,

        /// Exponent, log base or divisor
        #[arg(allow_negative_numbers = true)]
        b: Option<f64>,

        /// Unit of the sin/cos/tan operand (default from config, else rad)
        #[arg(short, long)]
        unit: Option<AngleUnit>,
    },

    /// Named constant (pi, e, phi, tau)
    Constant {
        /// Constant name
        name: ConstantOperation,
    },

    /// Validate and calculate a raw JSON request ("-" reads stdin)
    Eval {
        /// JSON request, e.g. '{"type":"basic","operation":"sum","a":2,"b":3}'
        payload: String,
    },

    /// Run the JSON-RPC server on stdio
    Serve,

    /// List supported operations
    Operations,

    /// Show active configuration
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;
    debug!("config: {}", config::show_config_path());
    let json = cli.json || cfg.display.json;

    match cli.command {
        Commands::Basic { operation, a, b } => {
            cmd_calculate(CalculationRequest::basic(operation, a, b), json)
        }
        Commands::Advanced {
            operation,
            a,
            b,
            unit,
        } => {
            let unit = unit.unwrap_or(cfg.display.angle_unit);
            cmd_calculate(client::advanced_request(operation, a, b, unit), json)
        }
        Commands::Constant { name } => cmd_calculate(CalculationRequest::constant(name), json),
        Commands::Eval { payload } => cmd_eval(&payload, json),
        Commands::Serve => cmd_serve(&cfg),
        Commands::Operations => cmd_operations(),
        Commands::Config => cmd_config(&cfg),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_calculate(request: CalculationRequest, json: bool) -> Result<()> {
    let response = calculate(&request);
    print_response(&response, json)
}

fn cmd_eval(payload: &str, json: bool) -> Result<()> {
    let text = if payload == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading request from stdin")?;
        buf
    } else {
        payload.to_string()
    };

    let request = parse_request(&text).context("invalid request")?;
    cmd_calculate(request, json)
}

fn cmd_serve(cfg: &Config) -> Result<()> {
    if cfg.server.transport != "stdio" {
        bail!("unsupported transport: {}", cfg.server.transport);
    }
    let name = cfg
        .server
        .name
        .as_deref()
        .unwrap_or(calc_server::DEFAULT_SERVER_NAME);
    calc_server::run_stdio(name)
}

fn cmd_operations() -> Result<()> {
    println!("basic:");
    for op in BasicOperation::ALL {
        println!("  {op} <a> <b>");
    }
    println!("advanced:");
    for op in AdvancedOperation::ALL {
        if op.requires_second_operand() {
            println!("  {op} <a> <b>");
        } else {
            println!("  {op} <a>");
        }
    }
    println!("constant:");
    for op in ConstantOperation::ALL {
        println!("  {op}");
    }
    println!();
    println!("sin, cos and tan take radians unless --unit deg is given.");
    Ok(())
}

fn cmd_config(cfg: &Config) -> Result<()> {
    println!("Config: {}", config::show_config_path());
    println!();
    println!("[display]");
    println!("  angle_unit = {}", cfg.display.angle_unit);
    println!("  json = {}", cfg.display.json);
    println!();
    println!("[server]");
    println!("  transport = {}", cfg.server.transport);
    println!(
        "  name = {}",
        cfg.server
            .name
            .as_deref()
            .unwrap_or(calc_server::DEFAULT_SERVER_NAME)
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// JSON mode always succeeds, like a 200 with an embedded error. Text mode
/// prints the display value and fails on a domain error.
fn print_response(response: &CalculationResponse, json: bool) -> Result<()> {
    if json {
        println!("{}", response.to_json()?);
        return Ok(());
    }

    println!("{}", response.formatted);
    if let Some(err) = &response.error {
        bail!("{err}");
    }
    Ok(())
}
