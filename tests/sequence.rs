//! Sequencer contract: file counts, numbering, sub-second duplication.

use std::path::{Path, PathBuf};

use tickframe::{
    Canvas, Color, DigitalStyle, GenerateOpts, Progress, StyleCatalog, TickframeError, generate,
    preview,
};

/// Small style so sequence tests stay fast; the built-in styles are all HD.
const TINY: DigitalStyle = DigitalStyle {
    name: "tiny",
    description: "small test style",
    canvas: Canvas {
        width: 128,
        height: 96,
    },
    bg: Color::rgb8(5, 5, 5),
    gradient: None,
    text_color: Color::rgb8(240, 240, 240),
    font_px: 20.0,
    separator: ":",
    labels: None,
    border: None,
    panel: None,
    glow: false,
    progress_bar: Some(Color::rgb8(200, 40, 40)),
    progress_ring: None,
};

fn tiny_catalog() -> StyleCatalog {
    StyleCatalog::from_tables(&[TINY], &[]).unwrap()
}

fn fresh_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("seq_tests").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn frame_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    files.sort();
    files
}

fn no_progress() -> impl FnMut(&Progress) {
    |_: &Progress| {}
}

#[test]
fn modern_fps1_duration3_start10_yields_three_descending_frames() {
    let catalog = StyleCatalog::builtin().unwrap();
    let out = fresh_dir("e2e_modern");
    let opts = GenerateOpts {
        fps: 1,
        duration: 3,
        start_seconds: 10,
        ..GenerateOpts::default()
    };

    let summary = generate(&catalog, "modern", &out, &opts, &mut no_progress()).unwrap();
    assert_eq!(summary.frames_written, 3);

    let files = frame_files(&out.join("modern"));
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "frame_00000000.png",
            "frame_00000001.png",
            "frame_00000002.png"
        ]
    );

    // Each file shows a different timer value, so no two are identical.
    let bytes: Vec<_> = files.iter().map(|p| std::fs::read(p).unwrap()).collect();
    assert_ne!(bytes[0], bytes[1]);
    assert_ne!(bytes[1], bytes[2]);
}

#[test]
fn per_second_blocks_are_byte_identical() {
    let catalog = tiny_catalog();
    let out = fresh_dir("fps_blocks");
    let opts = GenerateOpts {
        fps: 2,
        duration: 2,
        start_seconds: 5,
        ..GenerateOpts::default()
    };

    let summary = generate(&catalog, "tiny", &out, &opts, &mut no_progress()).unwrap();
    assert_eq!(summary.frames_written, 4);

    let files = frame_files(&out.join("tiny"));
    let bytes: Vec<_> = files.iter().map(|p| std::fs::read(p).unwrap()).collect();
    assert_eq!(bytes[0], bytes[1]);
    assert_eq!(bytes[2], bytes[3]);
    assert_ne!(bytes[1], bytes[2]);
}

#[test]
fn countdown_stops_early_instead_of_going_negative() {
    let catalog = tiny_catalog();
    let out = fresh_dir("early_stop");
    let opts = GenerateOpts {
        fps: 2,
        duration: 5,
        start_seconds: 2,
        ..GenerateOpts::default()
    };

    // Only seconds 2, 1, 0 exist.
    let summary = generate(&catalog, "tiny", &out, &opts, &mut no_progress()).unwrap();
    assert_eq!(summary.frames_written, 6);
    assert_eq!(frame_files(&out.join("tiny")).len(), 6);
}

#[test]
fn progress_reports_once_per_simulated_minute() {
    let catalog = tiny_catalog();
    let out = fresh_dir("progress");
    let opts = GenerateOpts {
        fps: 1,
        duration: 61,
        start_seconds: 100,
        ..GenerateOpts::default()
    };

    let mut reports = Vec::new();
    generate(&catalog, "tiny", &out, &opts, &mut |p: &Progress| {
        reports.push(p.clone());
    })
    .unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].frames_written, 60);
    assert_eq!(reports[0].total_frames, 61);
    // The 60th frame written is the second with 41 seconds left.
    assert_eq!(reports[0].displayed, "00:00:41");
    assert_eq!(reports[0].minutes_remaining, 0);
}

#[test]
fn parallel_run_matches_sequential_output() {
    let catalog = tiny_catalog();
    let seq_out = fresh_dir("par_seq");
    let par_out = fresh_dir("par_par");
    let base = GenerateOpts {
        fps: 1,
        duration: 4,
        start_seconds: 10,
        ..GenerateOpts::default()
    };

    generate(&catalog, "tiny", &seq_out, &base, &mut no_progress()).unwrap();
    let par_opts = GenerateOpts {
        parallel: true,
        threads: Some(2),
        ..base
    };
    generate(&catalog, "tiny", &par_out, &par_opts, &mut no_progress()).unwrap();

    let seq_files = frame_files(&seq_out.join("tiny"));
    let par_files = frame_files(&par_out.join("tiny"));
    assert_eq!(seq_files.len(), par_files.len());
    for (a, b) in seq_files.iter().zip(&par_files) {
        assert_eq!(a.file_name(), b.file_name());
        assert_eq!(std::fs::read(a).unwrap(), std::fs::read(b).unwrap());
    }
}

#[test]
fn unknown_style_is_a_user_error_with_the_full_name_list() {
    let catalog = StyleCatalog::builtin().unwrap();
    let out = fresh_dir("unknown");
    let err = generate(
        &catalog,
        "nope",
        &out,
        &GenerateOpts::default(),
        &mut no_progress(),
    )
    .unwrap_err();
    let TickframeError::UnknownStyle { name, available } = err else {
        panic!("expected UnknownStyle, got {err}");
    };
    assert_eq!(name, "nope");
    assert_eq!(available.len(), 20);

    assert!(preview(&catalog, "nope", &out).is_err());
}

#[test]
fn preview_writes_one_representative_frame() {
    let catalog = StyleCatalog::builtin().unwrap();
    let out = fresh_dir("preview");
    let path = preview(&catalog, "circle-minimal", &out).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "preview_circle-minimal.png"
    );
    assert!(path.is_file());
    assert_eq!(frame_files(&out).len(), 1);

    // Previews are deterministic too.
    let first = std::fs::read(&path).unwrap();
    let path2 = preview(&catalog, "circle-minimal", &out).unwrap();
    assert_eq!(first, std::fs::read(path2).unwrap());
}
