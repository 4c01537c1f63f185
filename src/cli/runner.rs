use tracing::info;

use trisect::api::process_image_to_path;
use trisect::core::params::{DetectorParams, ProcessingParams};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    if !args.threshold.is_finite() || args.threshold <= 0.0 {
        return Err(AppError::InvalidThreshold {
            threshold: args.threshold,
        }
        .into());
    }
    if args.max_line_thickness == 0 {
        return Err(AppError::ZeroThickness {
            thickness: args.max_line_thickness,
        }
        .into());
    }

    let params = ProcessingParams {
        detector: DetectorParams {
            threshold: args.threshold,
            max_line_thickness: args.max_line_thickness,
        },
        write_working_image: !args.no_working_image,
    };

    let report = process_image_to_path(&args.input, args.output_dir.as_deref(), &params)
        .map_err(AppError::Processing)?;

    if report.used_fallback {
        info!("no dividing lines detected; used equal-thirds fallback");
    }
    for path in &report.written {
        info!("wrote: {:?}", path);
    }
    info!("Successfully processed: {:?}\n", args.input);

    Ok(())
}
