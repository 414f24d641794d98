use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "contribution-city", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the last seven days from GitHub and render the city.
    Generate(GenerateArgs),
    /// Render from a contribution-calendar JSON file, without network access.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// GitHub login whose contributions are drawn.
    #[arg(long, env = "USERNAME")]
    user: Option<String>,

    /// Personal access token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GraphQL endpoint.
    #[arg(long, default_value = contribution_city::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input calendar JSON (bare calendar or a full GraphQL response).
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output SVG path.
    #[arg(long, default_value = "profile-3d-contrib/contribution-city.svg")]
    out: PathBuf,

    /// Seed for window lights and stars. Defaults to a hash of the newest day's date.
    #[arg(long)]
    seed: Option<u64>,

    /// Title drawn above the city.
    #[arg(long)]
    title: Option<String>,

    /// Also write a PNG preview to this path.
    #[arg(long)]
    png: Option<PathBuf>,
}

impl OutputArgs {
    fn render_options(&self) -> contribution_city::RenderOptions {
        contribution_city::RenderOptions {
            seed: self.seed,
            title: self.title.clone(),
            ..Default::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let user = args
        .user
        .filter(|u| !u.trim().is_empty())
        .context("missing GitHub user: pass --user or set USERNAME")?;
    let token = args
        .token
        .filter(|t| !t.trim().is_empty())
        .context("missing GitHub token: pass --token or set GITHUB_TOKEN")?;

    let source = contribution_city::GithubSource::new(user, token)
        .with_endpoint(args.endpoint)
        .with_timeout(Duration::from_secs(args.timeout_secs));

    let svg = contribution_city::render_from_source(&source, &args.output.render_options())
        .with_context(|| format!("render contribution city for '{}'", source.user))?;
    write_outputs(&args.output, &svg)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let source = contribution_city::FixtureSource::new(args.in_path.clone());
    let svg = contribution_city::render_from_source(&source, &args.output.render_options())
        .with_context(|| format!("render '{}'", args.in_path.display()))?;
    write_outputs(&args.output, &svg)
}

fn write_outputs(output: &OutputArgs, svg: &str) -> anyhow::Result<()> {
    contribution_city::output::write_svg(&output.out, svg)
        .with_context(|| format!("write svg '{}'", output.out.display()))?;
    eprintln!("wrote {}", output.out.display());

    if let Some(png) = &output.png {
        contribution_city::output::write_png(png, svg)
            .with_context(|| format!("write png '{}'", png.display()))?;
        eprintln!("wrote {}", png.display());
    }
    Ok(())
}
