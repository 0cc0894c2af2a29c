#[cfg(test)]
mod tests {
    use crate::cli::{AssetKind, Cli, Command, Mode};
    use clap::Parser;
    use kiln_config::BuildMode;
    use std::path::PathBuf;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["kiln", "inspect", "--mode", "production", "--cwd", "site"])
            .unwrap();
        assert_eq!(cli.mode, Some(Mode::Production));
        assert_eq!(cli.cwd, Some(PathBuf::from("site")));
        assert!(matches!(cli.command, Command::Inspect(_)));
    }

    #[test]
    fn test_mode_is_optional() {
        let cli = Cli::try_parse_from(["kiln", "check"]).unwrap();
        assert!(cli.mode.is_none());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result = Cli::try_parse_from(["kiln", "--mode", "prod", "inspect"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["kiln", "-v", "-q", "check"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_filename_args() {
        let cli = Cli::try_parse_from([
            "kiln", "filename", "main", "css", "--kind", "style", "--file", "a.css",
        ])
        .unwrap();
        let Command::Filename(args) = cli.command else {
            panic!("expected filename command");
        };
        assert_eq!(args.name, "main");
        assert_eq!(args.ext, "css");
        assert_eq!(args.kind, AssetKind::Style);
        assert_eq!(args.file, Some(PathBuf::from("a.css")));
    }

    #[test]
    fn test_filename_kind_defaults_to_bare() {
        let cli = Cli::try_parse_from(["kiln", "filename", "main", "js"]).unwrap();
        let Command::Filename(args) = cli.command else {
            panic!("expected filename command");
        };
        assert_eq!(args.kind, AssetKind::Bare);
        assert_eq!(
            args.kind.template(BuildMode::Development).render("main", "js", b""),
            "main.js"
        );
    }

    #[test]
    fn test_asset_kind_selects_directory() {
        let template = AssetKind::Font.template(BuildMode::Development);
        assert_eq!(template.render("inter", "woff2", b""), "fonts/inter.woff2");
    }

    #[test]
    fn test_mode_conversion() {
        assert_eq!(BuildMode::from(Mode::Development), BuildMode::Development);
        assert_eq!(BuildMode::from(Mode::Production), BuildMode::Production);
    }
}
