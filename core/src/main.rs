use clap::Parser;
use log::{info, warn};
use omemeta_core::cli::{Cli, OutputFormat};
use omemeta_core::{read, SeriesMetadata, TextReport};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    let series = match collect_series(&cli.file) {
        Ok(series) => series,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if series.is_empty() {
        eprintln!("Error: no readable series in {}", cli.file.display());
        process::exit(1);
    }

    output_series(&series, cli.format);
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

/// Reads every well-formed series from the file
///
/// Malformed series are logged and skipped; the tool reports what it can
/// rather than aborting on the first bad series.
fn collect_series(path: &Path) -> omemeta_core::Result<Vec<SeriesMetadata>> {
    let iter = read(path)?;
    info!("{}: document declares {} series", path.display(), iter.len());

    let mut series = Vec::new();
    for item in iter {
        match item {
            Ok(meta) => {
                info!("Extracted series {}", meta.id);
                series.push(meta);
            }
            Err(e) => {
                warn!("Skipping series: {}", e);
            }
        }
    }
    Ok(series)
}

fn output_series(series: &[SeriesMetadata], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for meta in series {
                println!("{}", TextReport::new(meta));
            }
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(series) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, name: &str, xml: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", xml).unwrap();
        path
    }

    #[test]
    fn test_collect_series_skips_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "mixed.ome.xml",
            r#"<OME>
              <Image ID="Image:0">
                <Pixels ID="Pixels:0" DimensionOrder="XYCZT" Type="uint8"
                        SizeX="8" SizeY="8" SizeZ="1" SizeC="1" SizeT="1"/>
              </Image>
              <Image ID="Image:1"/>
              <Image ID="Image:2">
                <Pixels ID="Pixels:2" DimensionOrder="XYCZT" Type="uint8"
                        SizeX="4" SizeY="4" SizeZ="1" SizeC="1" SizeT="1"/>
              </Image>
            </OME>"#,
        );

        let series = collect_series(&path).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].id, "Image:0");
        assert_eq!(series[1].id, "Image:2");
    }

    #[test]
    fn test_collect_series_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.ome.xml");
        assert!(collect_series(&missing).is_err());
    }

    #[test]
    fn test_collect_series_not_ome() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "other.xml", "<svg/>");
        assert!(collect_series(&path).is_err());
    }
}
