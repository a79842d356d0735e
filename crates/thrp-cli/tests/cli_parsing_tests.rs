//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without touching the file system.

use std::path::PathBuf;

use clap::Parser;

const MAX_REPLAY_SIZE: u64 = 1_000_000;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "thrp")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Decode {
        file: PathBuf,
        #[arg(long)]
        json: bool,
        #[arg(long, default_value_t = MAX_REPLAY_SIZE)]
        max_size: u64,
    },
    Scan {
        dir: PathBuf,
        #[arg(long, default_value_t = MAX_REPLAY_SIZE)]
        max_size: u64,
    },
}

#[test]
fn test_parse_decode_defaults() {
    let args = Args::try_parse_from(["thrp", "decode", "th06_01.rpy"]).unwrap();
    match args.command {
        Command::Decode {
            file,
            json,
            max_size,
        } => {
            assert_eq!(file, PathBuf::from("th06_01.rpy"));
            assert!(!json);
            assert_eq!(max_size, 1_000_000);
        }
        _ => panic!("Expected Decode command"),
    }
}

#[test]
fn test_parse_decode_json_and_limit() {
    let args =
        Args::try_parse_from(["thrp", "decode", "a.rpy", "--json", "--max-size", "2048"]).unwrap();
    match args.command {
        Command::Decode { json, max_size, .. } => {
            assert!(json);
            assert_eq!(max_size, 2048);
        }
        _ => panic!("Expected Decode command"),
    }
}

#[test]
fn test_parse_scan() {
    let args = Args::try_parse_from(["thrp", "scan", "replays"]).unwrap();
    match args.command {
        Command::Scan { dir, max_size } => {
            assert_eq!(dir, PathBuf::from("replays"));
            assert_eq!(max_size, MAX_REPLAY_SIZE);
        }
        _ => panic!("Expected Scan command"),
    }
}

#[test]
fn test_decode_requires_file() {
    assert!(Args::try_parse_from(["thrp", "decode"]).is_err());
}

#[test]
fn test_invalid_max_size_fails() {
    let result = Args::try_parse_from(["thrp", "scan", "dir", "--max-size", "-5"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_command_fails() {
    let result = Args::try_parse_from(["thrp", "invalid-command"]);
    assert!(result.is_err());
}
