use std::path::{Path, PathBuf};

use anyhow::Context as _;
use bitsprite::{ColorSpec, Fold, PngDirSink, SheetConfig, VariantSink};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "bitsprite",
    version,
    about = "Render all 256 bit-encoded variants of a template into a sprite sheet"
)]
struct Cli {
    /// Template name, read from `<templates-dir>/<NAME>.png`.
    #[arg(long)]
    template: String,

    /// Directory holding the template images.
    #[arg(long, default_value = "Templates")]
    templates_dir: PathBuf,

    /// Root directory for generated sheets.
    #[arg(long, default_value = "GenerationDirectory")]
    out_dir: PathBuf,

    /// Output name (defaults to the template name). `docs` writes into `docs/example`.
    #[arg(long)]
    outname: Option<String>,

    /// JSON configuration file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Horizontal fold: `even`/`e`, `odd`/`o`, anything else for none.
    #[arg(long, value_parser = parse_fold)]
    fold: Option<Fold>,

    /// Vertical fold: `even`/`e`, `odd`/`o`, anything else for none.
    #[arg(long, value_parser = parse_fold)]
    vertfold: Option<Fold>,

    /// Bit color, `#RRGGBB` or `#RRGGBB:#RRGGBB` for a blend.
    #[arg(long, value_parser = parse_color)]
    color: Option<ColorSpec>,

    /// Accent color.
    #[arg(long, value_parser = parse_color)]
    accent: Option<ColorSpec>,

    /// Fill color.
    #[arg(long, value_parser = parse_color)]
    fill: Option<ColorSpec>,

    /// Background color.
    #[arg(long, value_parser = parse_color)]
    background: Option<ColorSpec>,

    /// Outline color.
    #[arg(long, value_parser = parse_color)]
    outcolor: Option<ColorSpec>,

    /// Grow outlines around colored pixels (`true`/`t`/`1`, `false`/`f`/`0`, ...).
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    outline: Option<bool>,

    /// Pixel block size.
    #[arg(long, allow_negative_numbers = true)]
    upscale: Option<i64>,

    /// Tiles per sheet row; must divide 256.
    #[arg(long, allow_negative_numbers = true)]
    sheetwidth: Option<i64>,

    /// Use the YCbCr gradient instead of per-role colors.
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    legacy: Option<bool>,

    /// Also write one PNG per variant.
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    individuals: Option<bool>,

    /// Seed permutations from entropy; `false` makes runs reproducible.
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    randseed: Option<bool>,

    /// Explicit permutation seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Render worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Log at debug level.
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn sheet_config(&self) -> anyhow::Result<SheetConfig> {
        let mut cfg = match &self.config {
            Some(path) => SheetConfig::from_json_file(path)
                .with_context(|| format!("load config '{}'", path.display()))?,
            None => SheetConfig::default(),
        };

        if let Some(v) = self.fold {
            cfg.fold = v;
        }
        if let Some(v) = self.vertfold {
            cfg.vert_fold = v;
        }
        if let Some(v) = self.color {
            cfg.bit_color = v;
        }
        if let Some(v) = self.accent {
            cfg.accent_color = v;
        }
        if let Some(v) = self.fill {
            cfg.fill_color = v;
        }
        if let Some(v) = self.background {
            cfg.background_color = v;
        }
        if let Some(v) = self.outcolor {
            cfg.outline_color = v;
        }
        if let Some(v) = self.outline {
            cfg.outline = v;
        }
        if let Some(v) = self.upscale {
            cfg.upscale = v;
        }
        if let Some(v) = self.sheetwidth {
            cfg.sheet_width = v;
        }
        if let Some(v) = self.legacy {
            cfg.legacy = v;
        }
        if let Some(v) = self.individuals {
            cfg.individuals = v;
        }
        if let Some(v) = self.randseed {
            cfg.random_seed = v;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if self.threads.is_some() {
            cfg.threads = self.threads;
        }
        Ok(cfg)
    }

    /// Output directory and sheet base name.
    fn placement(&self) -> (PathBuf, String) {
        match self.outname.as_deref() {
            Some(name) if name.eq_ignore_ascii_case("docs") => {
                (PathBuf::from("docs").join("example"), self.template.clone())
            }
            Some(name) if !name.is_empty() => (self.out_dir.join(name), name.to_string()),
            _ => (self.out_dir.join(&self.template), self.template.clone()),
        }
    }
}

fn parse_fold(s: &str) -> Result<Fold, String> {
    Ok(Fold::parse_lenient(s))
}

fn parse_color(s: &str) -> Result<ColorSpec, String> {
    Ok(ColorSpec::parse(s))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let cfg = cli.sheet_config()?;
    let settings = cfg.resolve();

    let template_path = cli.templates_dir.join(format!("{}.png", cli.template));
    let template = bitsprite::load_template(&template_path)
        .with_context(|| format!("load template '{}'", template_path.display()))?;

    let (dir, name) = cli.placement();
    create_dir(&dir)?;

    let sink = if cfg.individuals {
        let individuals = dir.join("Individuals");
        create_dir(&individuals)?;
        Some(PngDirSink::new(individuals))
    } else {
        None
    };

    let sheet = bitsprite::render_sheet(
        &template,
        &settings,
        sink.as_ref().map(|s| s as &dyn VariantSink),
    )?;

    let out = dir.join(format!("{name}SpriteSheet.png"));
    sheet.save_png(&out)?;
    if let Some(sink) = &sink {
        tracing::info!(dir = %sink.dir().display(), "wrote 256 individuals");
    }
    tracing::info!(path = %out.display(), "wrote sprite sheet");
    Ok(())
}

fn create_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))
}
