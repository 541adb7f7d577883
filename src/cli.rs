// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("statementforge")
        .version(crate_version!())
        .about("Synthesize supplier statements paired with ground-truth labels")
        .subcommand(
            Command::new("generate")
                .about("Generate a batch of statement documents with paired ground truth")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("DIR")
                        .default_value("generated_statements"),
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .value_parser(value_parser!(usize))
                        .default_value("25"),
                )
                .arg(
                    Arg::new("style")
                        .long("style")
                        .value_name("NAME")
                        .help("Use one style for every item instead of rotating"),
                )
                .arg(
                    Arg::new("random-style")
                        .long("random-style")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("style")
                        .help("Pick styles uniformly at random instead of rotating"),
                )
                .arg(
                    Arg::new("min-tx")
                        .long("min-tx")
                        .value_parser(value_parser!(usize))
                        .default_value("8"),
                )
                .arg(
                    Arg::new("max-tx")
                        .long("max-tx")
                        .value_parser(value_parser!(usize))
                        .default_value("15"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Seed for reproducible batches"),
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("YYYY-MM-DD")
                        .help("Statement date (defaults to today)"),
                )
                .arg(
                    Arg::new("enrich")
                        .long("enrich")
                        .action(ArgAction::SetTrue)
                        .help("Source supplier companies from the configured LLM endpoint"),
                )
                .arg(
                    Arg::new("no-ground-truth")
                        .long("no-ground-truth")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Synthesize one scenario and print its ledger and aging")
                .arg(
                    Arg::new("transactions")
                        .long("transactions")
                        .value_parser(value_parser!(usize))
                        .default_value("10"),
                )
                .arg(Arg::new("style").long("style").default_value("SheldonCreek"))
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64)),
                )
                .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("styles").about("List the five styles and their visible fields"))
        .subcommand(
            Command::new("verify")
                .about("Re-check ground-truth files against the ledger invariants")
                .arg(Arg::new("dir").value_name("DIR").required(true)),
        )
        .subcommand(
            Command::new("catalog")
                .about("Inspect the built-in reference pools")
                .subcommand(Command::new("companies").about("List the supplier pool"))
                .subcommand(Command::new("customers").about("List the customer pool")),
        )
}
