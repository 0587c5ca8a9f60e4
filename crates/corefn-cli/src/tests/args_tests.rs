use clap::Parser;

use super::CliArgs;

#[test]
fn parses_with_no_arguments() {
    let args = CliArgs::try_parse_from(["corefn"]).expect("bare invocation should parse");
    assert!(args.file.is_none());
    assert!(!args.no_color);
}

#[test]
fn parses_a_source_file_argument() {
    let args =
        CliArgs::try_parse_from(["corefn", "program.cf"]).expect("file argument should parse");
    assert_eq!(args.file, Some(std::path::PathBuf::from("program.cf")));
}

#[test]
fn parses_no_color_flag() {
    let args = CliArgs::try_parse_from(["corefn", "--no-color", "program.cf"])
        .expect("--no-color should parse");
    assert!(args.no_color);
}

#[test]
fn rejects_more_than_one_file_argument() {
    CliArgs::try_parse_from(["corefn", "a.cf", "b.cf"])
        .expect_err("a single positional file argument is expected");
}
