use anyhow::Result;

use crate::{
    cli::Cli,
    glitch::{GlitchParams, glitch_file},
    rng::SeededRng,
};

/// Runs one glitch pass as described by the command line and returns the message to print.
pub fn glitch(args: &Cli) -> Result<String> {
    let mut rng = match args.seed {
        Some(seed) => SeededRng::new(seed),
        None => SeededRng::from_entropy()?,
    };

    match glitch_file(&args.input, &args.output, &GlitchParams::default(), &mut rng) {
        Ok(_report) => {
            if_tracing! {
                tracing::info!(
                    event = "glitch_complete",
                    input = %args.input.display(),
                    output = %args.output.display(),
                    seed = ?args.seed,
                    bytes_changed = _report.bytes_changed,
                    "glitch finished"
                );
            }
            Ok(format!("Glitched image saved as '{}'", args.output.display()))
        }
        Err(e) => {
            if_tracing! {
                tracing::error!(event = "glitch_failed", kind = ?e.kind(), error = %e, "glitch failed");
            }
            Err(e.into())
        }
    }
}
