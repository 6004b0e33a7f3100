//! Sequence generation: one rendered frame per countdown second, replicated
//! across sub-second slots and written as a numbered PNG sequence.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::foundation::core::{CountdownInstant, display_time};
use crate::foundation::error::{TickframeError, TickframeResult};
use crate::render::{self, Rasterizer};
use crate::style::catalog::StyleCatalog;
use crate::text::font::FontLibrary;

/// The representative instant used by previews: 12:34:56 on a 24-hour dial.
pub const PREVIEW_REMAINING_SECONDS: u64 = 12 * 3600 + 34 * 60 + 56;
pub const PREVIEW_TOTAL_SECONDS: u64 = 86_400;

const PARALLEL_CHUNK_SECONDS: usize = 64;

#[derive(Clone, Debug)]
pub struct GenerateOpts {
    pub fps: u32,
    /// Countdown length in seconds; also the number of distinct rendered
    /// timer values (clipped when the start time would go negative).
    pub duration: u64,
    /// Timer value shown on the first frame, and the span that progress
    /// ratios normalize against.
    pub start_seconds: u64,
    /// Render seconds on a rayon pool instead of in-line.
    pub parallel: bool,
    /// Explicit worker count for `parallel` mode.
    pub threads: Option<usize>,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            fps: 30,
            duration: 86_400,
            start_seconds: 86_400,
            parallel: false,
            threads: None,
        }
    }
}

/// Progress report emitted once per simulated minute of output.
#[derive(Clone, Debug)]
pub struct Progress {
    pub frames_written: u64,
    pub total_frames: u64,
    pub percent: u64,
    /// Timer value on the frame just written, as `HH:MM:SS`.
    pub displayed: String,
    /// Simulated minutes of output still to be written.
    pub minutes_remaining: u64,
}

#[derive(Clone, Debug)]
pub struct SequenceSummary {
    pub style_name: String,
    pub frames_written: u64,
    pub frame_dir: PathBuf,
}

/// Generate the full frame sequence for one style.
///
/// Each countdown second is rendered exactly once and written `fps` times
/// from the same encoded PNG, so every block of `fps` consecutive files is
/// byte-identical. Frame numbering starts at 0 and is monotonic regardless of
/// the countdown value.
pub fn generate(
    catalog: &StyleCatalog,
    style_name: &str,
    out_root: &Path,
    opts: &GenerateOpts,
    on_progress: &mut dyn FnMut(&Progress),
) -> TickframeResult<SequenceSummary> {
    let style = catalog.get(style_name)?;
    if opts.fps == 0 {
        return Err(TickframeError::validation("fps must be > 0"));
    }

    let frame_dir = out_root.join(style_name);
    std::fs::create_dir_all(&frame_dir)
        .with_context(|| format!("create frame dir '{}'", frame_dir.display()))?;

    let seconds = countdown_seconds(opts.start_seconds, opts.duration);
    let fps = u64::from(opts.fps);
    let total_frames = opts.duration * fps;

    tracing::debug!(
        style = style_name,
        total_frames,
        fps,
        parallel = opts.parallel,
        "starting frame sequence"
    );

    let mut frames_written = 0u64;

    if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        for chunk in seconds.chunks(PARALLEL_CHUNK_SECONDS) {
            // Render and encode a chunk of seconds in parallel, then write
            // sequentially so numbering stays second-major.
            let encoded: Vec<TickframeResult<Vec<u8>>> = pool.install(|| {
                chunk
                    .par_iter()
                    .map_init(
                        || (Rasterizer::new(), FontLibrary::resolve()),
                        |(raster, fonts), &second| {
                            let instant = CountdownInstant::new(second, opts.start_seconds);
                            render::render_frame(style, instant, fonts, raster)?.encode_png()
                        },
                    )
                    .collect()
            });
            for (png, &second) in encoded.into_iter().zip(chunk) {
                let png = png?;
                write_second(
                    &frame_dir,
                    &png,
                    second,
                    fps,
                    total_frames,
                    &mut frames_written,
                    on_progress,
                )?;
            }
        }
    } else {
        let mut raster = Rasterizer::new();
        let mut fonts = FontLibrary::resolve();
        for &second in &seconds {
            let instant = CountdownInstant::new(second, opts.start_seconds);
            let png = render::render_frame(style, instant, &mut fonts, &mut raster)?.encode_png()?;
            write_second(
                &frame_dir,
                &png,
                second,
                fps,
                total_frames,
                &mut frames_written,
                on_progress,
            )?;
        }
    }

    Ok(SequenceSummary {
        style_name: style_name.to_string(),
        frames_written,
        frame_dir,
    })
}

/// Render a single representative frame for `style_name` into
/// `<out_root>/preview_<style_name>.png`.
pub fn preview(
    catalog: &StyleCatalog,
    style_name: &str,
    out_root: &Path,
) -> TickframeResult<PathBuf> {
    let style = catalog.get(style_name)?;
    std::fs::create_dir_all(out_root)
        .with_context(|| format!("create output dir '{}'", out_root.display()))?;

    let mut raster = Rasterizer::new();
    let mut fonts = FontLibrary::resolve();
    let instant = CountdownInstant::new(PREVIEW_REMAINING_SECONDS, PREVIEW_TOTAL_SECONDS);
    let frame = render::render_frame(style, instant, &mut fonts, &mut raster)?;

    let path = out_root.join(format!("preview_{style_name}.png"));
    std::fs::write(&path, frame.encode_png()?)
        .with_context(|| format!("write preview '{}'", path.display()))?;
    Ok(path)
}

/// Countdown seconds in render order: `duration` values descending from
/// `start`, stopping early instead of going negative.
fn countdown_seconds(start: u64, duration: u64) -> Vec<u64> {
    if duration == 0 {
        return Vec::new();
    }
    let lo = start.saturating_sub(duration - 1);
    (lo..=start).rev().collect()
}

#[allow(clippy::too_many_arguments)]
fn write_second(
    frame_dir: &Path,
    png: &[u8],
    second: u64,
    fps: u64,
    total_frames: u64,
    frames_written: &mut u64,
    on_progress: &mut dyn FnMut(&Progress),
) -> TickframeResult<()> {
    let per_minute = fps * 60;
    for _ in 0..fps {
        let path = frame_dir.join(format!("frame_{:08}.png", *frames_written));
        std::fs::write(&path, png)
            .with_context(|| format!("write frame '{}'", path.display()))?;
        *frames_written += 1;

        if *frames_written % per_minute == 0 {
            let progress = Progress {
                frames_written: *frames_written,
                total_frames,
                percent: if total_frames > 0 {
                    *frames_written * 100 / total_frames
                } else {
                    100
                },
                displayed: display_time(second, ":"),
                minutes_remaining: total_frames.saturating_sub(*frames_written) / per_minute,
            };
            tracing::debug!(
                frames = progress.frames_written,
                percent = progress.percent,
                "sequence progress"
            );
            on_progress(&progress);
        }
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> TickframeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(TickframeError::validation("threads must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| TickframeError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_seconds_renders_exactly_duration_values() {
        assert_eq!(countdown_seconds(10, 3), vec![10, 9, 8]);
        assert_eq!(countdown_seconds(5, 1), vec![5]);
    }

    #[test]
    fn countdown_seconds_stops_at_zero() {
        assert_eq!(countdown_seconds(2, 5), vec![2, 1, 0]);
        assert_eq!(countdown_seconds(0, 3), vec![0]);
    }

    #[test]
    fn countdown_seconds_zero_duration_is_empty() {
        assert!(countdown_seconds(10, 0).is_empty());
    }

    #[test]
    fn zero_worker_count_is_rejected() {
        assert!(build_thread_pool(Some(0)).is_err());
        assert!(build_thread_pool(Some(1)).is_ok());
    }
}
