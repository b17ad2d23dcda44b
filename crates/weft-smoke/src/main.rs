//! Weft Smoke Harness
//!
//! Builds a small application window out of nested containers, lays it out
//! at the requested size and reports where everything ended up. Useful for
//! eyeballing layout changes and for diffing JSON snapshots between builds.

use std::sync::Arc;

use serde_json::json;
use tracing::{error, info};
use weft_layout::{
    Container, Element, ElementSnapshot, Environment, Orientation, Placeholder, Size, Spacer,
    TextLabel, ThemeConfig, ThemeSettings,
};

/// Rough glyph metrics; real text measurement lives in the renderer.
const GLYPH_WIDTH: f32 = 7.0;
const LINE_HEIGHT: f32 = 16.0;

/// Parse command line arguments
struct Args {
    width: f32,
    height: f32,
    padding: Option<f32>,
    vertical: bool,
    dump_json: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let mut args = std::env::args().skip(1);
        let mut width = 800.0f32;
        let mut height = 600.0f32;
        let mut padding = None;
        let mut vertical = false;
        let mut dump_json = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--width" => {
                    if let Some(val) = args.next() {
                        width = val.parse().unwrap_or(800.0);
                    }
                }
                "--height" => {
                    if let Some(val) = args.next() {
                        height = val.parse().unwrap_or(600.0);
                    }
                }
                "--padding" => {
                    padding = args.next().and_then(|val| val.parse().ok());
                }
                "--vertical" => {
                    vertical = true;
                }
                "--dump-json" => {
                    dump_json = args.next();
                }
                _ => {}
            }
        }

        Self {
            width,
            height,
            padding,
            vertical,
            dump_json,
        }
    }

    /// Theme from `WEFT_*` variables, overridden by flags.
    fn theme(&self) -> Result<ThemeSettings, weft_layout::LayoutError> {
        let mut config = ThemeConfig::from_env()?;
        if let Some(padding) = self.padding {
            config.padding = padding;
        }
        if self.vertical {
            config.orientation = Orientation::Vertical;
        }
        ThemeSettings::new(config)
    }
}

fn label(text: &str) -> Box<dyn Element> {
    let measured = Size::new(text.chars().count() as f32 * GLYPH_WIDTH, LINE_HEIGHT);
    Box::new(TextLabel::new(text, measured))
}

fn widget(width: f32, height: f32) -> Box<dyn Element> {
    Box::new(Placeholder::new(Size::new(width, height)))
}

/// The demo window: toolbar, sidebar, form and a reflowing gallery.
fn build_window(env: &Arc<dyn Environment>) -> Container {
    let toolbar = Container::hbox(vec![
        label("Weft"),
        Box::new(Spacer::horizontal()),
        widget(60.0, 24.0),
        widget(60.0, 24.0),
    ])
    .with_environment(env.clone());

    let sidebar = Container::vbox(vec![
        label("Inbox"),
        label("Drafts"),
        label("Archive"),
        Box::new(Spacer::vertical()),
        label("Settings"),
    ])
    .with_environment(env.clone());

    let form = Container::form(vec![
        label("Name"),
        widget(160.0, 24.0),
        label("Email"),
        widget(160.0, 24.0),
        label("Notes"),
        widget(160.0, 72.0),
    ])
    .with_environment(env.clone());

    let thumbnails = (0..12).map(|_| widget(48.0, 48.0)).collect();
    let gallery =
        Container::grid_wrap(Size::new(64.0, 64.0), thumbnails).with_environment(env.clone());

    let actions = Container::adaptive_grid(
        3,
        vec![widget(80.0, 24.0), widget(80.0, 24.0), widget(80.0, 24.0)],
    )
    .with_environment(env.clone());

    let content = Container::vbox(vec![
        Box::new(form),
        Box::new(gallery),
        Box::new(actions),
    ])
    .with_environment(env.clone());

    let status = Container::padded(vec![Box::new(
        Container::center(vec![label("Ready")]).with_environment(env.clone()),
    )])
    .with_environment(env.clone());

    Container::border(
        Some(Box::new(toolbar)),
        Some(Box::new(status)),
        Some(Box::new(sidebar)),
        None,
        vec![Box::new(content)],
    )
    .with_environment(env.clone())
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    info!(
        width = args.width,
        height = args.height,
        padding = ?args.padding,
        vertical = args.vertical,
        dump_json = ?args.dump_json,
        "Starting Weft smoke harness"
    );

    let theme = match args.theme() {
        Ok(theme) => theme,
        Err(e) => {
            error!(%e, "Invalid theme");
            let result = json!({
                "status": "fail",
                "reason": e.to_string(),
            });
            println!("{}", result);
            std::process::exit(1);
        }
    };
    let env: Arc<dyn Environment> = Arc::new(theme);

    let mut window = build_window(&env);
    let min = window.min_size();
    info!(width = min.width, height = min.height, "Window minimum size");

    window.resize(Size::new(args.width, args.height));

    let snapshot = ElementSnapshot::capture(&window);
    snapshot.walk(&mut |node| {
        info!(
            path = %node.path,
            x = node.position.x,
            y = node.position.y,
            width = node.size.width,
            height = node.size.height,
            visible = node.visible,
            "element"
        );
    });

    let mut dumped = false;
    if let Some(ref path) = args.dump_json {
        info!(?path, "Dumping layout snapshot");
        match snapshot.to_json() {
            Ok(text) => match std::fs::write(path, text) {
                Ok(()) => dumped = true,
                Err(e) => error!(?e, "Failed to write snapshot"),
            },
            Err(e) => error!(%e, "Failed to serialize snapshot"),
        }
    }

    let ctx = window.context();
    let result = json!({
        "status": "pass",
        "size": { "width": args.width, "height": args.height },
        "min_size": { "width": min.width, "height": min.height },
        "padding": ctx.padding,
        "orientation": if ctx.orientation.is_horizontal() { "horizontal" } else { "vertical" },
        "elements": snapshot.count(),
        "snapshot_dumped": dumped
    });
    println!("{}", result);
}
