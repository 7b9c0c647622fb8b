use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::{load_config, resolve_output_dir, run};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args.iter().copied()).unwrap()
}

// ========== Argument parsing ==========

#[test]
fn test_parse_compress_defaults() {
    let cli = parse(&["lzw", "compress", "img.bmp"]);
    match cli.command {
        Commands::Compress { file, path, time } => {
            assert_eq!(file, PathBuf::from("img.bmp"));
            assert!(path.is_none());
            assert!(!time);
        }
        _ => panic!("expected compress"),
    }
}

#[test]
fn test_parse_decompress_with_path_and_time() {
    let cli = parse(&["lzw", "decompress", "img.bmp.lzw", "/tmp/out", "-t"]);
    match cli.command {
        Commands::Decompress { file, path, time } => {
            assert_eq!(file, PathBuf::from("img.bmp.lzw"));
            assert_eq!(path, Some(PathBuf::from("/tmp/out")));
            assert!(time);
        }
        _ => panic!("expected decompress"),
    }
}

#[test]
fn test_parse_verbose_conflicts_with_quiet() {
    assert!(Cli::try_parse_from(["lzw", "-v", "-q", "compress", "a"]).is_err());
}

#[test]
fn test_parse_missing_file() {
    assert!(Cli::try_parse_from(["lzw", "compress"]).is_err());
}

// ========== Config ==========

#[test]
fn test_load_config_bits_override() {
    let cli = parse(&["lzw", "--bits", "12", "compress", "a"]);
    assert_eq!(load_config(&cli).unwrap().code_bits, 12);
}

#[test]
fn test_load_config_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cfg.json");
    fs::write(&path, r#"{"extension": ".pack"}"#).unwrap();
    let cfg = path.to_string_lossy().to_string();
    let cli = parse(&["lzw", "--config", &cfg, "compress", "a"]);
    assert_eq!(load_config(&cli).unwrap().extension, ".pack");
}

#[test]
fn test_invalid_bits_is_error() {
    let cli = parse(&["lzw", "--bits", "64", "compress", "a"]);
    assert!(matches!(run(cli), Err(CliError::Lzw(_))));
}

// ========== Output directory fallback ==========

#[test]
fn test_resolve_output_dir() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("file.txt");
    fs::write(&file, b"x").unwrap();

    assert_eq!(resolve_output_dir(None), PathBuf::from("."));
    assert_eq!(resolve_output_dir(Some(tmp.path())), tmp.path().to_path_buf());
    assert_eq!(resolve_output_dir(Some(file.as_path())), PathBuf::from("."));
    let missing = tmp.path().join("missing");
    assert_eq!(resolve_output_dir(Some(missing.as_path())), PathBuf::from("."));
}

// ========== Commands ==========

#[test]
fn test_run_compress_then_decompress() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("notes.txt");
    fs::write(&input, b"line one\nline two\n\x00\xff").unwrap();
    let out = tmp.path().join("out");
    fs::create_dir_all(&out).unwrap();

    let input_arg = input.to_string_lossy().to_string();
    let out_arg = out.to_string_lossy().to_string();
    run(parse(&["lzw", "-q", "compress", &input_arg, &out_arg])).unwrap();

    let packed = out.join("notes.txt.lzw");
    assert!(packed.is_file());

    let restored_dir = tmp.path().join("restored");
    fs::create_dir_all(&restored_dir).unwrap();
    let packed_arg = packed.to_string_lossy().to_string();
    let restored_arg = restored_dir.to_string_lossy().to_string();
    run(parse(&["lzw", "-q", "decompress", &packed_arg, &restored_arg])).unwrap();

    assert_eq!(
        fs::read(restored_dir.join("notes.txt")).unwrap(),
        b"line one\nline two\n\x00\xff".to_vec()
    );
}

#[test]
fn test_run_missing_input() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing.bin").to_string_lossy().to_string();
    assert!(matches!(run(parse(&["lzw", "compress", &missing])), Err(CliError::Usage(_))));
}

#[test]
fn test_run_decompress_requires_extension() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("plain.txt");
    fs::write(&input, b"abc").unwrap();
    let arg = input.to_string_lossy().to_string();
    assert!(matches!(run(parse(&["lzw", "decompress", &arg])), Err(CliError::Usage(_))));
}
