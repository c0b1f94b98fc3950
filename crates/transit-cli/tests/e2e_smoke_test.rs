use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use transit_cli::{Args, run};

/// Collects all .seq files from a directory
fn collect_seq_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("seq")
            })
            .collect()
    } else {
        Vec::new()
    };

    files.sort();
    files
}

/// Demo diagrams live at the workspace root.
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_seq_files(&demos_dir());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed = Vec::new();

    for demo_path in &valid_demos {
        let output_path = temp_dir.path().join(format!(
            "{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        match run(&args_for(demo_path, &output_path)) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("Output was not written");
                assert!(svg.starts_with("<svg"), "{} is not SVG", output_path.display());
            }
            Err(e) => failed.push((demo_path.clone(), e)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_seq_files(&demos_dir().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        if run(&args_for(demo_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) should have failed",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("absent.seq");
    let output = temp_dir.path().join("absent.svg");

    let err = run(&args_for(&input, &output)).unwrap_err();
    assert!(matches!(err, transit::TransitError::Io(_)));
    assert!(!output.exists());
}

#[test]
fn e2e_explicit_config_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("flow.seq");
    let config = temp_dir.path().join("config.toml");
    let output = temp_dir.path().join("flow.svg");

    fs::write(&input, "A -> B: hello\n").unwrap();
    fs::write(&config, "[style]\nbackground_color = \"lavender\"\n").unwrap();

    let mut args = args_for(&input, &output);
    args.config = Some(config.to_string_lossy().to_string());
    run(&args).unwrap();

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("lavender"));
}
