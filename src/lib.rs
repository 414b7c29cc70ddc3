use std::path::PathBuf;

use log::{info, warn};

mod error;
mod geometry;
mod io;
mod walker;

pub use error::{CleanerError, Result};
pub use geometry::{dedupe, Point};
pub use walker::clean_tree;

/// Minimum distance below which two points are merged, in coordinate units.
pub const DEFAULT_TOLERANCE: f64 = 1.0;

#[derive(Debug, clap::Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON document to clean in place
    #[arg(long)]
    input: PathBuf,
    /// Where the pristine copy goes, next to the input by default
    #[arg(long)]
    backup: Option<PathBuf>,
    /// Points closer together than this are merged
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,
}
impl Args {
    pub fn execute(self) -> Result<()> {
        info!("Starting duplicate coordinate removal");

        let document = io::load_document(&self.input)?;
        info!("Loaded {}", self.input.display());

        // The pristine document goes to disk before any transformation
        let backup_path = self
            .backup
            .unwrap_or_else(|| io::default_backup_path(&self.input));
        let backup_written = match io::write_backup(&backup_path, &document) {
            Ok(()) => {
                info!("Backup created: {}", backup_path.display());
                true
            }
            Err(err) => {
                warn!("{err}");
                false
            }
        };

        info!("Processing polygons");
        let (cleaned, removed) = walker::clean_tree(document, self.tolerance);

        io::write_document(&self.input, &cleaned)?;
        info!("Cleaned data saved to {}", self.input.display());

        println!("Total duplicate coordinates removed: {removed}");
        println!("Tolerance used: {}", self.tolerance);
        if removed == 0 {
            println!("No duplicates found - the file was already clean");
        } else if backup_written {
            println!("Original file backed up as: {}", backup_path.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::Path;

    use serde_json::{json, Value};

    fn write_json(path: &Path, value: &Value) {
        fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    fn noisy_document() -> Value {
        json!({
            "name": "fixture",
            "shapes": [
                {"polygon": [
                    {"x": 0.0, "y": 0.0},
                    {"x": 0.5, "y": 0.0},
                    {"x": 5.0, "y": 0.0},
                    {"x": 5.0, "y": 5.0},
                    {"x": 0.0, "y": 5.0},
                ]},
            ],
        })
    }

    fn cleaned_document() -> Value {
        json!({
            "name": "fixture",
            "shapes": [
                {"polygon": [
                    {"x": 0.0, "y": 0.0},
                    {"x": 5.0, "y": 0.0},
                    {"x": 5.0, "y": 5.0},
                    {"x": 0.0, "y": 5.0},
                ]},
            ],
        })
    }

    #[test]
    fn run_cleans_input_and_writes_backup() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.json");
        let backup = dir.path().join("copy.json");
        write_json(&input, &noisy_document());

        let args = Args {
            input: input.clone(),
            backup: Some(backup.clone()),
            tolerance: DEFAULT_TOLERANCE,
        };
        args.execute().unwrap();

        assert_eq!(read_json(&input), cleaned_document());
        assert_eq!(read_json(&backup), noisy_document());
    }

    #[test]
    fn backup_defaults_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.json");
        write_json(&input, &noisy_document());

        let args = Args {
            input: input.clone(),
            backup: None,
            tolerance: DEFAULT_TOLERANCE,
        };
        args.execute().unwrap();

        assert_eq!(
            read_json(&dir.path().join("data_backup.json")),
            noisy_document()
        );
    }

    #[test]
    fn missing_input_halts_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.json");

        let args = Args {
            input: input.clone(),
            backup: None,
            tolerance: DEFAULT_TOLERANCE,
        };
        let err = args.execute().unwrap_err();

        assert!(matches!(err, CleanerError::InputNotFound { .. }));
        assert!(!dir.path().join("absent_backup.json").exists());
    }

    #[test]
    fn malformed_input_halts_and_leaves_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.json");
        fs::write(&input, b"{\"shapes\": [").unwrap();

        let args = Args {
            input: input.clone(),
            backup: None,
            tolerance: DEFAULT_TOLERANCE,
        };
        let err = args.execute().unwrap_err();

        assert!(matches!(err, CleanerError::Parse { .. }));
        assert_eq!(fs::read(&input).unwrap(), b"{\"shapes\": [");
    }

    #[test]
    fn failed_backup_does_not_block_cleaning() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.json");
        write_json(&input, &noisy_document());

        let args = Args {
            input: input.clone(),
            backup: Some(dir.path().join("missing_dir").join("copy.json")),
            tolerance: DEFAULT_TOLERANCE,
        };
        args.execute().unwrap();

        assert_eq!(read_json(&input), cleaned_document());
    }

    #[test]
    fn tolerance_zero_rewrites_without_removing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.json");
        write_json(&input, &noisy_document());

        let args = Args {
            input: input.clone(),
            backup: None,
            tolerance: 0.0,
        };
        args.execute().unwrap();

        assert_eq!(read_json(&input), noisy_document());
    }

    #[test]
    fn wider_tolerance_merges_more_points() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.json");
        write_json(&input, &noisy_document());

        let args = Args {
            input: input.clone(),
            backup: None,
            tolerance: 100.0,
        };
        args.execute().unwrap();

        // Everything merges into the first vertex
        assert_eq!(
            read_json(&input)["shapes"][0]["polygon"],
            json!([{"x": 0.0, "y": 0.0}])
        );
    }
}
