use std::io;

use clap::Parser;
use ezid_verify::{run, Client, Credentials, RunContext, Settings, StatusCommandProbe, ToolError};
use ezid_verify_core::Environment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum EnvArg {
    Test,
    Dev,
    Stg,
    Prd,
}

impl EnvArg {
    fn to_core(self) -> Environment {
        match self {
            EnvArg::Test => Environment::Test,
            EnvArg::Dev => Environment::Dev,
            EnvArg::Stg => Environment::Stg,
            EnvArg::Prd => Environment::Prd,
        }
    }
}

#[derive(Parser)]
#[command(name = "ezid-verify")]
#[command(about = "Smoke-test an EZID deployment after patching")]
struct Cli {
    /// Environment to verify
    #[arg(short, long, value_enum)]
    env: EnvArg,
    /// API user name
    #[arg(short, long)]
    user: String,
    /// API password
    #[arg(short, long)]
    password: String,
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn fail(err: ToolError) -> ! {
    eprintln!("{} {}", err.code(), err);
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => fail(err),
    };
    init_tracing(settings.log_json);

    let ctx = RunContext::new(
        cli.env.to_core(),
        Credentials {
            user: cli.user,
            password: cli.password,
        },
        settings.fixture_dir.clone(),
    );
    let client = Client::new(settings.http_timeout);
    let probe = StatusCommandProbe::new(settings.status_tool.clone(), settings.job_timeout);

    let stdout = io::stdout();
    if let Err(err) = run(&ctx, &client, &probe, stdout.lock()) {
        fail(err);
    }
}
