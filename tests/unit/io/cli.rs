//! Tests for command-line parsing, overrides and the multi-monitor runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;
    use tilewall::WallpaperError;
    use tilewall::algorithm::config::Mode;
    use tilewall::io::cli::{Cli, WallpaperRunner};
    use tilewall::io::configuration::DEFAULT_SEED;
    use tilewall::io::settings::WallpaperSettings;

    const TINY_SETTINGS: &str = r#"
[[monitor]]
name = "TEST-1"
width = 64
height = 48
scale = 1.0
bar_logical_height = 4
gap_logical = 2

[style]
mode = "quadrant-fill"
min_depth = 0
max_depth = 2
supersample = 1
"#;

    // Tests parsing with no arguments
    // Verified by changing the default output directory
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);
        assert_eq!(cli.output, PathBuf::from("."));
        assert!(cli.config.is_none());
        assert!(cli.mode.is_none());
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
    }

    // Tests parsing with every argument present
    // Verified by renaming the supersample short flag
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "--config",
            "walls.toml",
            "--output",
            "out",
            "--mode",
            "bsp-lines",
            "--seed",
            "7",
            "-S",
            "4",
            "--min-depth",
            "1",
            "--max-depth",
            "5",
            "--quiet",
            "--no-skip",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("walls.toml")));
        assert_eq!(cli.output, PathBuf::from("out"));
        assert_eq!(cli.mode, Some(Mode::BspLines));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.supersample, Some(4));
        assert_eq!(cli.min_depth, Some(1));
        assert_eq!(cli.max_depth, Some(5));
        assert!(!cli.should_show_progress());
        assert!(!cli.skip_existing());
    }

    // Tests --seed and --random cannot be combined
    // Verified by removing the conflict declaration
    #[test]
    fn test_seed_conflicts_with_random() {
        assert!(Cli::try_parse_from(["program", "--seed", "1", "--random"]).is_err());
    }

    // Tests seed precedence between flags, settings and the default
    // Verified by preferring the settings seed over the flag
    #[test]
    fn test_resolve_seed() {
        let mut settings = WallpaperSettings::default();
        let plain = Cli::parse_from(["program"]);
        assert_eq!(plain.resolve_seed(&settings), Some(DEFAULT_SEED));

        settings.style.seed = Some(11);
        assert_eq!(plain.resolve_seed(&settings), Some(11));

        let flagged = Cli::parse_from(["program", "--seed", "5"]);
        assert_eq!(flagged.resolve_seed(&settings), Some(5));

        let random = Cli::parse_from(["program", "--random"]);
        assert_eq!(random.resolve_seed(&settings), None);
    }

    // Tests command-line values replace settings file values
    // Verified by skipping the depth overrides
    #[test]
    fn test_apply_overrides() {
        let mut settings = WallpaperSettings::default();
        let cli = Cli::parse_from([
            "program",
            "--mode",
            "line-grid",
            "--max-depth",
            "3",
            "--min-depth",
            "1",
        ]);
        cli.apply_overrides(&mut settings);
        assert_eq!(settings.style.mode, Mode::LineGrid);
        assert_eq!(settings.style.max_depth, 3);
        assert_eq!(settings.style.min_depth, 1);
    }

    // Tests a full run writes one PNG per monitor
    // Verified by exporting to the working directory instead of --output
    #[test]
    fn test_process_writes_wallpapers() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("walls.toml");
        std::fs::write(&config_path, TINY_SETTINGS).unwrap();
        let output = dir.path().join("out");

        let cli = Cli::parse_from([
            "program".into(),
            "--config".into(),
            config_path.into_os_string(),
            "--output".into(),
            output.clone().into_os_string(),
            "--quiet".into(),
        ]);
        WallpaperRunner::new(cli).process().unwrap();

        let written = image::open(output.join("wallpaper_TEST-1.png")).unwrap();
        assert_eq!((written.width(), written.height()), (64, 48));
    }

    // Tests a failing monitor does not stop the others and is reported
    // Verified by returning on the first failure
    #[test]
    fn test_process_reports_failed_passes() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("walls.toml");
        let settings = format!(
            "{TINY_SETTINGS}\n[[monitor]]\nname = \"BROKEN\"\nwidth = 20\nheight = 20\n\
             scale = 1.0\nbar_logical_height = 30\ngap_logical = 2\n"
        );
        std::fs::write(&config_path, settings).unwrap();
        let output = dir.path().join("out");

        let cli = Cli::parse_from([
            "program".into(),
            "--config".into(),
            config_path.into_os_string(),
            "--output".into(),
            output.clone().into_os_string(),
            "--quiet".into(),
        ]);
        let result = WallpaperRunner::new(cli).process();

        assert!(matches!(
            result,
            Err(WallpaperError::PassesFailed {
                failed: 1,
                total: 2
            })
        ));
        assert!(output.join("wallpaper_TEST-1.png").exists());
        assert!(!output.join("wallpaper_BROKEN.png").exists());
    }

    // Tests a missing settings file is a file system error
    // Verified by silently falling back to defaults
    #[test]
    fn test_missing_config() {
        let cli = Cli::parse_from(["program", "--config", "/nonexistent/walls.toml"]);
        assert!(matches!(
            WallpaperRunner::new(cli).load_settings(),
            Err(WallpaperError::FileSystem { .. })
        ));
    }
}
