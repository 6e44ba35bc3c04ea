use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

use folio::{
    JsonFileStore, KeyValueStore, Language, Millis, MemoryStore, PortfolioApp, Preferences,
    SiteConfig, SystemPreferences, Theme,
    prefs::{
        contrast::HIGH_CONTRAST_KEY, language::LANGUAGE_KEY, motion::REDUCED_MOTION_KEY,
        theme::THEME_KEY,
    },
};

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the full page as a static HTML document.
    Render(RenderArgs),
    /// Scroll from top to bottom and print one JSON line per step.
    Trace(TraceArgs),
    /// Inspect or change the persisted preferences.
    Prefs(PrefsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,

    /// Site configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    lang: Option<LangChoice>,

    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    #[arg(long, default_value_t = false)]
    high_contrast: bool,

    #[arg(long, default_value_t = false)]
    reduced_motion: bool,

    /// Scroll offset in px to render at.
    #[arg(long, default_value_t = 0.0)]
    scroll: f64,

    /// Milliseconds to let animations run before rendering.
    #[arg(long, default_value_t = 0)]
    settle_ms: u64,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Site configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scroll distance per step in px.
    #[arg(long, default_value_t = 100.0)]
    step: f64,

    /// Simulated time per step in ms.
    #[arg(long, default_value_t = 100)]
    step_ms: u64,

    #[arg(long, default_value_t = false)]
    reduced_motion: bool,
}

#[derive(Parser, Debug)]
struct PrefsArgs {
    /// Preference store JSON file.
    #[arg(long, default_value = "folio-prefs.json")]
    store: PathBuf,

    #[command(subcommand)]
    action: PrefsAction,
}

#[derive(Subcommand, Debug)]
enum PrefsAction {
    /// Print the resolved preferences.
    Show,
    ToggleTheme,
    ToggleContrast,
    ToggleMotion,
    /// Set the display language (`en`, `ru`, `am`).
    SetLanguage { code: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LangChoice {
    En,
    Ru,
    Am,
}

impl From<LangChoice> for Language {
    fn from(choice: LangChoice) -> Self {
        match choice {
            LangChoice::En => Language::En,
            LangChoice::Ru => Language::Ru,
            LangChoice::Am => Language::Am,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeChoice {
    Light,
    Dark,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Trace(args) => cmd_trace(args),
        Command::Prefs(args) => cmd_prefs(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: Option<&Path>) -> anyhow::Result<SiteConfig> {
    let config = match path {
        Some(path) => {
            SiteConfig::load(path).with_context(|| format!("load config '{}'", path.display()))?
        }
        None => SiteConfig::default(),
    };
    config.validate().with_context(|| "validate config")?;
    Ok(config)
}

/// Stored preferences, if the config names a store, with `overrides` on top.
/// Rendering never writes back to the store.
fn preference_snapshot(
    config: &SiteConfig,
    overrides: &[(&str, Option<&str>)],
) -> anyhow::Result<MemoryStore> {
    let stored = match &config.storage_path {
        Some(path) => Some(
            JsonFileStore::open(path)
                .with_context(|| format!("open preference store '{}'", path.display()))?,
        ),
        None => None,
    };
    let mut snapshot = MemoryStore::new();
    for (key, value) in overrides {
        let value = match (value, &stored) {
            (Some(v), _) => Some((*v).to_string()),
            (None, Some(store)) => store.get(key).ok().flatten(),
            (None, None) => None,
        };
        if let Some(value) = value {
            snapshot
                .set(key, &value)
                .with_context(|| format!("seed preference '{key}'"))?;
        }
    }
    Ok(snapshot)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let lang = args.lang.map(Language::from);
    let theme = args.theme.map(Theme::from);
    let store = preference_snapshot(
        &config,
        &[
            (LANGUAGE_KEY, lang.map(Language::code)),
            (THEME_KEY, theme.map(Theme::as_str)),
            (HIGH_CONTRAST_KEY, args.high_contrast.then_some("true")),
            (REDUCED_MOTION_KEY, args.reduced_motion.then_some("true")),
        ],
    )?;

    let system = SystemPreferences {
        prefers_reduced_motion: args.reduced_motion,
        ..SystemPreferences::default()
    };
    let mut app = PortfolioApp::new(config, Box::new(store), &system)?;
    app.scroll_to(args.scroll, Millis::ZERO)?;
    if args.settle_ms > 0 {
        app.tick(Millis(args.settle_ms))?;
    }
    let html = folio::render_page(&app)?;
    app.teardown();

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &html)
        .with_context(|| format!("write html '{}'", args.out.display()))?;

    eprintln!("wrote {} (sha256 {})", args.out.display(), sha256_hex(html.as_bytes()));
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    if !(args.step.is_finite() && args.step > 0.0) {
        anyhow::bail!("--step must be a positive number of pixels");
    }
    let config = read_config(args.config.as_deref())?;
    let store = preference_snapshot(
        &config,
        &[(REDUCED_MOTION_KEY, args.reduced_motion.then_some("true"))],
    )?;
    let system = SystemPreferences {
        prefers_reduced_motion: args.reduced_motion,
        ..SystemPreferences::default()
    };
    let mut app = PortfolioApp::new(config, Box::new(store), &system)?;
    let max_scroll = app.layout().max_scroll();

    let mut now = Millis::ZERO;
    let mut y = 0.0;
    loop {
        app.scroll_to(y, now)?;
        let line = serde_json::to_string(&app.snapshot()).with_context(|| "encode snapshot")?;
        println!("{line}");
        if y >= max_scroll {
            break;
        }
        y = (y + args.step).min(max_scroll);
        now = now.add_ms(args.step_ms);
    }
    app.teardown();
    Ok(())
}

fn cmd_prefs(args: PrefsArgs) -> anyhow::Result<()> {
    let store = JsonFileStore::open(&args.store)
        .with_context(|| format!("open preference store '{}'", args.store.display()))?;
    let mut prefs = Preferences::init(Box::new(store), &SystemPreferences::default());
    match args.action {
        PrefsAction::Show => {}
        PrefsAction::ToggleTheme => prefs.toggle_theme(),
        PrefsAction::ToggleContrast => prefs.toggle_high_contrast(),
        PrefsAction::ToggleMotion => prefs.toggle_reduced_motion(),
        PrefsAction::SetLanguage { code } => {
            let Some(lang) = Language::from_code(&code) else {
                anyhow::bail!("unknown language '{code}' (expected en, ru or am)");
            };
            prefs.set_language(lang);
        }
    }
    let state = serde_json::to_string_pretty(&prefs.state()).with_context(|| "encode state")?;
    println!("{state}");
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{b:02x}"));
    }
    out
}
