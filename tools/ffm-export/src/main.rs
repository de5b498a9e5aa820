//! ffm-export - OBJ to .ffm mesh export tool
//!
//! Flattens a Wavefront OBJ mesh into one `{{pos}, {normal}, {uv}, texId}`
//! record per face-vertex.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ffm_export::{convert, DEFAULT_BASE_NAME, FFM_EXT, OBJ_EXT};

#[derive(Parser)]
#[command(name = "ffm-export")]
#[command(about = "OBJ to .ffm mesh export tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an OBJ mesh to .ffm
    Convert {
        /// Input OBJ file (defaults to zombie.obj)
        input: Option<PathBuf>,

        /// Output .ffm file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse and resolve an OBJ mesh without writing output
    Check {
        /// Input OBJ file (defaults to zombie.obj)
        input: Option<PathBuf>,
    },
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_BASE_NAME).with_extension(OBJ_EXT)
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, output } => {
            let input = input.unwrap_or_else(default_input);
            let output = output.unwrap_or_else(|| input.with_extension(FFM_EXT));
            tracing::info!("Converting {:?} -> {:?}", input, output);
            convert::convert_obj(&input, &output)?;
            tracing::info!("Done!");
        }

        Commands::Check { input } => {
            let input = input.unwrap_or_else(default_input);
            tracing::info!("Checking {:?}", input);
            let converted = convert::convert_obj_to_memory(&input)?;
            tracing::info!(
                "OBJ is valid: {} positions, {} uvs, {} normals, {} faces, {} records",
                converted.position_count,
                converted.uv_count,
                converted.normal_count,
                converted.face_count,
                converted.records.len()
            );
        }
    }

    Ok(())
}
