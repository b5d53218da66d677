use super::args::{CliArgs, ColorChoice};
use clap::Parser;
use std::path::Path;

#[test]
fn test_defaults() {
    let args = CliArgs::try_parse_from(["ts2js", "project"]).expect("parse");
    assert_eq!(args.directory, Path::new("project"));
    assert!(!args.no_packages);
    assert!(!args.no_config);
    assert!(!args.no_branch);
    assert_eq!(args.color, ColorChoice::Auto);

    let config = args.convert_config();
    assert_eq!(config.root, Path::new("project"));
    assert_eq!(config.exclude, vec!["node_modules", ".git"]);
    assert!(config.skip_declaration_files);
    assert_eq!(config.jobs, None);
    assert!(config.strip.elide_type_only_imports);
    assert!(!config.strip.preserve_uninitialized_fields);
}

#[test]
fn test_flags_reach_the_config() {
    let args = CliArgs::try_parse_from([
        "ts2js",
        "app",
        "--no-packages",
        "--no-config",
        "--no-branch",
        "--exclude",
        "dist",
        "--exclude",
        "vendor/*",
        "-j",
        "2",
        "--include-declarations",
        "--keep-unused-type-imports",
        "--keep-uninitialized-fields",
        "--color",
        "never",
    ])
    .expect("parse");
    assert!(args.no_packages && args.no_config && args.no_branch);
    assert!(!args.color.enabled());

    let config = args.convert_config();
    assert_eq!(config.exclude, vec!["node_modules", ".git", "dist", "vendor/*"]);
    assert_eq!(config.jobs, Some(2));
    assert!(!config.skip_declaration_files);
    assert!(!config.strip.elide_type_only_imports);
    assert!(config.strip.preserve_uninitialized_fields);
}

#[test]
fn test_directory_is_required() {
    assert!(CliArgs::try_parse_from(["ts2js"]).is_err());
}
