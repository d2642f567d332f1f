//! posecast: convert a JSON pose take into a keyframed glTF scene.
//!
//! `posecast <input.json> <output file> [format]`; a present third argument
//! selects the human-readable text variant instead of the default GLB.

use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use posecast_curve_core::{emit_segment, ExportConfig, PoseTrack};
use posecast_scene_gltf::{save_scene, OutputFormat, SceneBuilder, TRACKED_SEGMENTS};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        // Usage is informational, not an error exit.
        println!("usage: {} <json input> <scene output> <format>", args[0]);
        return ExitCode::SUCCESS;
    }
    let format = if args.len() > 3 {
        OutputFormat::Text
    } else {
        OutputFormat::Binary
    };

    match run(&args[1], &args[2], format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("conversion failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &str, output: &str, format: OutputFormat) -> Result<()> {
    let raw = fs::read_to_string(input).with_context(|| format!("failed to read '{input}'"))?;
    let track = PoseTrack::parse(&raw).context("failed to parse pose take")?;
    log::info!("loaded take with {} segments from '{}'", track.len(), input);

    let config = ExportConfig::default();
    let mut builder = SceneBuilder::new(&config);
    for segment in TRACKED_SEGMENTS {
        emit_segment(&mut builder, &track, segment, &config)
            .with_context(|| format!("failed to animate segment '{segment}'"))?;
    }

    let doc = builder.finish().context("failed to assemble scene")?;
    save_scene(doc, Path::new(output), format)
        .with_context(|| format!("failed to write '{output}'"))?;
    Ok(())
}
