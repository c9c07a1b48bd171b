use clap::Parser;

use super::*;

#[test]
fn parses_a_params_query() {
    let args = CliArgs::try_parse_from(["sigswap", "params", "--position", "9", "demo.ts"])
        .expect("params args should parse");

    let Command::Params(query) = args.command else {
        panic!("expected the params subcommand");
    };
    assert_eq!(query.position, 9);
    assert_eq!(query.file, None);
    assert_eq!(query.files, vec![PathBuf::from("demo.ts")]);
}

#[test]
fn parses_sort_with_orders_and_an_explicit_file() {
    let args = CliArgs::try_parse_from([
        "sigswap",
        "sort",
        "--file",
        "lib.ts",
        "--position",
        "42",
        "--orders",
        "2,0,-",
        "lib.ts",
        "main.ts",
    ])
    .expect("sort args should parse");

    let Command::Sort(sort) = args.command else {
        panic!("expected the sort subcommand");
    };
    assert_eq!(sort.query.file.as_deref(), Some("lib.ts"));
    assert_eq!(sort.query.position, 42);
    assert_eq!(sort.orders, "2,0,-");
    assert_eq!(sort.query.files.len(), 2);
}

#[test]
fn swap_accepts_a_negative_target() {
    let args = CliArgs::try_parse_from([
        "sigswap", "swap", "--position", "9", "--from", "1", "--to", "-1", "demo.ts",
    ])
    .expect("swap args should parse");

    let Command::Swap(swap) = args.command else {
        panic!("expected the swap subcommand");
    };
    assert_eq!(swap.from, 1);
    assert_eq!(swap.to, -1);
}

#[test]
fn input_files_are_required() {
    assert!(CliArgs::try_parse_from(["sigswap", "params", "--position", "0"]).is_err());
}
