use std::path::PathBuf;

use clap::{Parser, Subcommand};
use raycam_camera::calculate_rays_with_order;
use raycam_common::Color;
use raycam_render::{to_image_buffer, DebugTextRenderer, RaycastRenderer, Renderer};
use raycam_scene::Scene;
use raycam_tools::{
    image_grid_lines, rays_to_image_plane, rays_to_scene, DebugLine, GridInspector, LineSink,
};
use tracing_subscriber::EnvFilter;

mod output;
mod session;

use session::Session;

#[derive(Parser)]
#[command(name = "raycam-cli", about = "Pinhole raycast renderer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print the built-in demo session as JSON
    DemoSession,
    /// Render a session to a PNG file or the terminal
    Render {
        /// Session JSON file (defaults to the demo scene)
        #[arg(short, long)]
        session: Option<PathBuf>,
        /// Override the sampled row count
        #[arg(short, long)]
        rows: Option<usize>,
        /// Output PNG path
        #[arg(short, long, default_value = "render.png")]
        output: PathBuf,
        /// Print an ASCII preview instead of writing a file
        #[arg(long)]
        ascii: bool,
        /// Shade on the calling thread only
        #[arg(long)]
        sequential: bool,
    },
    /// Inspect the ray grid for a session
    Rays {
        /// Session JSON file (defaults to the demo scene)
        #[arg(short, long)]
        session: Option<PathBuf>,
        /// Override the sampled row count
        #[arg(short, long, default_value = "4")]
        rows: usize,
        /// Also print the debug line segments
        #[arg(long)]
        lines: bool,
    },
}

/// Prints debug lines, one per line of output.
struct StdoutLineSink {
    label: &'static str,
}

impl LineSink for StdoutLineSink {
    fn draw_line(&mut self, line: DebugLine) {
        let (s, e) = (line.start, line.end);
        println!(
            "{:<6} ({:.3}, {:.3}, {:.3}) -> ({:.3}, {:.3}, {:.3})",
            self.label, s.x, s.y, s.z, e.x, e.y, e.z
        );
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("raycam-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", raycam_common::crate_info());
            println!("kernel: {}", raycam_kernel::crate_info());
            println!("camera: {}", raycam_camera::crate_info());
            println!("scene: {}", raycam_scene::crate_info());
            println!("render: {}", raycam_render::crate_info());
            println!("tools: {}", raycam_tools::crate_info());
        }
        Commands::DemoSession => {
            println!("{}", serde_json::to_string_pretty(&Session::demo())?);
        }
        Commands::Render {
            session,
            rows,
            output,
            ascii,
            sequential,
        } => {
            let mut session = Session::load_or_demo(session.as_deref())?;
            if let Some(rows) = rows {
                session.config.row_count = rows;
            }
            if sequential {
                session.config.parallel = false;
            }
            let scene = Scene::from_description(&session.scene);
            tracing::info!(objects = scene.len(), "scene ready");

            if ascii {
                let text = DebugTextRenderer::new(session.config).render(&scene, &session.view)?;
                print!("{text}");
            } else {
                let colors =
                    RaycastRenderer::new(session.config).render(&scene, &session.view)?;
                let summary = GridInspector::colors(&colors, session.config.miss_color);
                println!("{summary}");
                output::save_png(&to_image_buffer(&colors), &output)?;
            }
        }
        Commands::Rays {
            session,
            rows,
            lines,
        } => {
            let session = Session::load_or_demo(session.as_deref())?;
            let view = &session.view;
            let config = &session.config;
            let near = view.intrinsics.near_distance;
            let dims = view.intrinsics.image_dimensions()?;
            let rays = calculate_rays_with_order(&view.pose, near, dims, rows, config.order)?;
            println!(
                "Image plane: {:.4} x {:.4} at distance {near}",
                dims.width, dims.height
            );
            println!("{}", GridInspector::rays(&rays));

            if lines {
                let scene = Scene::from_description(&session.scene);
                let grid = image_grid_lines(
                    &view.pose,
                    near,
                    dims,
                    rows,
                    config.order,
                    Color::rgb(1.0, 1.0, 0.0),
                )?;
                StdoutLineSink { label: "grid" }.draw_all(grid);
                let plane = rays_to_image_plane(
                    &view.pose,
                    near,
                    &rays,
                    config.order,
                    Color::rgb(0.0, 1.0, 1.0),
                )?;
                StdoutLineSink { label: "plane" }.draw_all(plane);
                let hits = rays_to_scene(
                    &rays,
                    &scene,
                    config.max_distance,
                    config.filter,
                    Color::rgb(0.0, 1.0, 0.0),
                );
                StdoutLineSink { label: "scene" }.draw_all(hits);
            }
        }
    }

    Ok(())
}
