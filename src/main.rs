// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command-line host: load an image, replay a drag, render the surface.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use relief::app::{AppMessage, AppModel, render_enabled, status, update};
use relief::config::AppConfig;
use relief::constant::DEFAULT_PREVIEW_NAME;
use relief::domain::colormap::Colormap;
use relief::render::PreviewRenderer;

/// Pointer drag in canvas coordinates, `X0,Y0,X1,Y1`.
#[derive(Debug, Clone, Copy)]
struct Drag {
    from: (f32, f32),
    to: (f32, f32),
}

fn parse_drag(s: &str) -> Result<Drag, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("'{p}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        &[x0, y0, x1, y1] => Ok(Drag {
            from: (x0, y0),
            to: (x1, y1),
        }),
        _ => Err(format!("expected X0,Y0,X1,Y1, got {} values", parts.len())),
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
struct Args {
    /// Image to open (relative names are also looked up in the default image dir).
    file: Option<PathBuf>,

    /// Drag from (X0,Y0) to (X1,Y1) in canvas coordinates.
    #[arg(long, value_parser = parse_drag, allow_hyphen_values = true)]
    select: Option<Drag>,

    /// Canvas zoom factor the drag coordinates were captured at.
    #[arg(long, default_value_t = 1.0)]
    zoom: f32,

    /// Horizontal canvas scroll offset.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    scroll_x: f32,

    /// Vertical canvas scroll offset.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    scroll_y: f32,

    /// Preview output path.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Colormap (jet, gray).
    #[arg(long)]
    colormap: Option<Colormap>,

    /// Preview pixels per height-field cell.
    #[arg(long)]
    cell_size: Option<u32>,

    /// Persist the effective settings to the config file.
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    relief::i18n::init(&requested_languages);

    let args = Args::parse();

    let config_path = AppConfig::default_path();
    let mut config = config_path
        .as_deref()
        .map(AppConfig::load_or_default)
        .unwrap_or_default();
    if let Some(colormap) = args.colormap {
        config.colormap = colormap;
    }
    if let Some(cell_size) = args.cell_size {
        config.cell_size = cell_size;
    }

    if args.write_config {
        let path = config_path.context("no config directory on this platform")?;
        config.save(&path)?;
        log::info!("Saved config to {}", path.display());
    }

    let output = args
        .output
        .clone()
        .or_else(|| config.output_dir.as_ref().map(|dir| dir.join(DEFAULT_PREVIEW_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PREVIEW_NAME));
    let mut renderer = PreviewRenderer::new(output, config.cell_size);

    let input = args.file.as_deref().map(|file| resolve_input(file, &config));
    let mut model = AppModel::new(config);

    let Some(input) = input else {
        println!("{}", status(&model));
        return Ok(());
    };

    update(&mut model, AppMessage::OpenPath(input), &mut renderer);
    if let Some(err) = model.error.take() {
        anyhow::bail!(err);
    }

    update(
        &mut model,
        AppMessage::ViewerStateChanged {
            scale: args.zoom,
            offset_x: args.scroll_x,
            offset_y: args.scroll_y,
        },
        &mut renderer,
    );

    if let Some(Drag { from, to }) = args.select {
        update(&mut model, AppMessage::PointerPressed { x: from.0, y: from.1 }, &mut renderer);
        update(&mut model, AppMessage::PointerMoved { x: to.0, y: to.1 }, &mut renderer);
        update(&mut model, AppMessage::PointerReleased { x: to.0, y: to.1 }, &mut renderer);
    }

    println!("{}", status(&model));

    if render_enabled(&model) {
        update(&mut model, AppMessage::Render, &mut renderer);
        if let Some(err) = model.error.take() {
            anyhow::bail!(err);
        }
        println!("{}", renderer.output().display());
    }

    Ok(())
}

/// Relative paths that do not exist here are tried against the default image dir.
fn resolve_input(file: &Path, config: &AppConfig) -> PathBuf {
    if file.is_relative() && !file.exists() {
        if let Some(candidate) = config
            .default_image_dir
            .as_ref()
            .map(|dir| dir.join(file))
            .filter(|p| p.exists())
        {
            return candidate;
        }
    }
    file.to_path_buf()
}
