use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "basicolor", version)]
struct Cli {
    /// Storefront config JSON.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the products a color/category selection shows.
    Browse(BrowseArgs),
    /// Render a logo mockup as a PNG.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct BrowseArgs {
    /// Product catalog JSON (defaults to the configured or built-in catalog).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Category id (tshirt, polo, pants, shorts, jacket, hoodie).
    #[arg(long)]
    category: Option<String>,

    /// Color id (black, white, beige, gray, navy, olive).
    #[arg(long)]
    color: Option<String>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Logo image (PNG, JPEG, WebP, SVG, ...).
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Garment color id (white, black, beige, gray, navy).
    #[arg(long, default_value = "white")]
    garment: String,

    /// Placement id (left-chest, center, full-front).
    #[arg(long, default_value = "left-chest")]
    placement: String,

    /// Logo scale in percent, clamped to 50..=150.
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    scale: i64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => basicolor::StorefrontConfig::from_path(path)?,
        None => basicolor::StorefrontConfig::default(),
    };

    match cli.cmd {
        Command::Browse(args) => cmd_browse(&config, args),
        Command::Preview(args) => cmd_preview(&config, args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_browse(config: &basicolor::StorefrontConfig, args: BrowseArgs) -> anyhow::Result<()> {
    let catalog = match &args.catalog {
        Some(path) => basicolor::Catalog::from_path(path)?,
        None => config.load_catalog()?,
    };
    let category = args
        .category
        .unwrap_or_else(|| config.default_category.id().to_owned());

    let visible = basicolor::visible_products_by_id(&catalog, &category, args.color.as_deref());
    if visible.is_empty() {
        println!("no products match");
        return Ok(());
    }

    for p in visible {
        let color = p.color.map_or("-", |c| c.id());
        println!("{}\t{}\t{}\t{}", p.id, p.name, p.price, color);
    }
    Ok(())
}

fn cmd_preview(config: &basicolor::StorefrontConfig, args: PreviewArgs) -> anyhow::Result<()> {
    let mut session = basicolor::UploadSession::new();
    session.garment = args.garment.parse()?;
    session.placement = args.placement.parse()?;
    session.set_scale(args.scale);

    if let Some(path) = &args.logo {
        let file = basicolor::IncomingFile::from_path(path)?;
        if !basicolor::is_image_mime(&file.mime) {
            anyhow::bail!("'{}' is not an image ({})", path.display(), file.mime);
        }
        let logo = basicolor::decode_logo(&file.bytes, &file.mime)
            .with_context(|| format!("decode logo '{}'", path.display()))?;
        session.logo = Some(logo);
    }

    let desc = basicolor::compose_preview_with(
        session.logo.as_ref(),
        session.garment,
        session.placement,
        session.scale,
        config.logo_limits(),
    );
    let frame = basicolor::render_preview(&desc, &config.preview_settings())?;
    frame.write_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
