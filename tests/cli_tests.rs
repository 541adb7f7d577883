// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use statementforge::cli;

#[test]
fn generate_args_parse_with_defaults() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["statementforge", "generate", "--seed", "7"]);
    if let Some(("generate", sub)) = matches.subcommand() {
        assert_eq!(sub.get_one::<String>("out").unwrap(), "generated_statements");
        assert_eq!(*sub.get_one::<usize>("count").unwrap(), 25);
        assert_eq!(*sub.get_one::<usize>("min-tx").unwrap(), 8);
        assert_eq!(*sub.get_one::<usize>("max-tx").unwrap(), 15);
        assert_eq!(*sub.get_one::<u64>("seed").unwrap(), 7);
        assert!(!sub.get_flag("enrich"));
        assert!(!sub.get_flag("no-ground-truth"));
    } else {
        panic!("no generate subcommand");
    }
}

#[test]
fn style_and_random_style_conflict() {
    let cli = cli::build_cli();
    let res = cli.try_get_matches_from([
        "statementforge",
        "generate",
        "--style",
        "SheldonCreek",
        "--random-style",
    ]);
    assert!(res.is_err());
}

#[test]
fn preview_defaults_to_ten_transactions() {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["statementforge", "preview"]);
    if let Some(("preview", sub)) = matches.subcommand() {
        assert_eq!(*sub.get_one::<usize>("transactions").unwrap(), 10);
        assert_eq!(sub.get_one::<String>("style").unwrap(), "SheldonCreek");
    } else {
        panic!("no preview subcommand");
    }
}
