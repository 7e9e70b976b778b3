//! The glitch pass and its read/write collaborators.
//!
//! A glitch run loads the whole source into memory, XORs single-bit masks into random bytes
//! past a protected header, and writes the buffer back out. The header skip is a fixed byte
//! count; nothing here knows about image formats.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::{
    error::{GlitchError, Result},
    rng::RandomSource,
};

if_tracing! {
    use tracing::{debug, info};
    use voxell_timer::Timer;
}

/// Leading bytes that are never touched.
pub const DEFAULT_HEADER_SKIP: usize = 100;
/// Bit flips performed per run.
pub const DEFAULT_FLIP_COUNT: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlitchParams {
    pub header_skip: usize,
    pub flip_count: usize,
}

impl Default for GlitchParams {
    fn default() -> Self {
        Self {
            header_skip: DEFAULT_HEADER_SKIP,
            flip_count: DEFAULT_FLIP_COUNT,
        }
    }
}

/// What a glitch pass did to its buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlitchReport {
    /// XOR operations applied. Always equal to the requested flip count.
    pub flips_applied: usize,
    /// Byte offsets that ended up with a different value. Flips landing on the same bit
    /// cancel, so this can be lower than `flips_applied`.
    pub bytes_changed: usize,
}

/// Flips `params.flip_count` random bits of `buf`, skipping the first `params.header_skip` bytes.
///
/// For every flip the offset is drawn first, from `[header_skip, len)`, then the bit from
/// `[0, 8)`. Draws are independent; the same bit can be hit twice and flip back.
///
/// # Errors
///
/// Returns [`GlitchError::InvalidInput`] if `buf` is not longer than the header skip. The buffer
/// is left untouched in that case.
pub fn glitch_bytes<R: RandomSource + ?Sized>(buf: &mut [u8], params: &GlitchParams, rng: &mut R) -> Result<GlitchReport> {
    let len = buf.len();
    if len <= params.header_skip {
        return Err(GlitchError::InvalidInput {
            len,
            header_skip: params.header_skip,
        });
    }

    if_tracing! {
        debug!(target = "glitch", len, header_skip = params.header_skip, flip_count = params.flip_count, "glitch start");
    }

    let span = len - params.header_skip;
    // net XOR mask per offset
    let mut masks: HashMap<usize, u8> = HashMap::new();
    for _ in 0..params.flip_count {
        let offset = params.header_skip + rng.next_in_range(span);
        let mask = 1u8 << rng.next_in_range(8);
        buf[offset] ^= mask;
        *masks.entry(offset).or_insert(0) ^= mask;
    }

    Ok(GlitchReport {
        flips_applied: params.flip_count,
        bytes_changed: masks.values().filter(|&&m| m != 0).count(),
    })
}

/// Reads the whole source file into memory.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| GlitchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates or truncates `path` and writes `data` to it.
///
/// # Errors
///
/// Returns [`GlitchError::Write`]. The file is truncated before any bytes go out, so a failure
/// part way through can leave it empty or partially written.
pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(|source| GlitchError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads `input`, glitches it and writes the result to `output`.
///
/// `output` is only opened once the buffer has been glitched, so read failures and inputs that
/// are too short never create it. A write failure can leave a truncated file behind, see
/// [`write_output`].
pub fn glitch_file<R: RandomSource + ?Sized>(input: &Path, output: &Path, params: &GlitchParams, rng: &mut R) -> Result<GlitchReport> {
    let mut buf = read_source(input)?;
    let report = run_pass(&mut buf, params, rng)?;

    if_tracing! {
        info!(
            target = "glitch",
            input = %input.display(),
            flips = report.flips_applied,
            bytes_changed = report.bytes_changed,
            "glitch pass complete"
        );
    }

    write_output(output, &buf)?;
    Ok(report)
}

if_tracing! {
    fn run_pass<R: RandomSource + ?Sized>(buf: &mut [u8], params: &GlitchParams, rng: &mut R) -> Result<GlitchReport> {
        let mut timer = Timer::new(|| glitch_bytes(buf, params, rng));
        let report = timer.exec();
        debug!(target = "glitch", elapsed = ?timer.get_elapsed(), "glitch pass timed");
        report
    }
}

if_not_tracing! {
    fn run_pass<R: RandomSource + ?Sized>(buf: &mut [u8], params: &GlitchParams, rng: &mut R) -> Result<GlitchReport> {
        glitch_bytes(buf, params, rng)
    }
}
