use crate::domain::{ProcedureCategory, QcCommand, StepsSource};
use clap::builder::{ArgAction, PossibleValuesParser};
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;

pub const BIN_NAME: &str = "surgery-qc";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// --config-check: 設定を検証して終了する
    pub config_check: bool,
    /// --test-connection: 小さなプロンプトで疎通確認する
    pub test_connection: bool,
    /// --show-prompt: 送信予定のプロンプトを表示して終了する
    pub show_prompt: bool,
    /// -v / --verbose: 入力の概要と評価サマリを表示する
    pub verbose: bool,
    pub file: Option<PathBuf>,
    pub text: Option<String>,
    pub category: ProcedureCategory,
    pub output: Option<PathBuf>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new(BIN_NAME)
        .about("Assess the quality and risks of surgical procedure steps with an LLM")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("file")
                .short('f')
                .long("file")
                .value_name("path")
                .help("Read procedure steps from a text file")
                .value_parser(value_parser!(PathBuf))
                .num_args(1)
                .conflicts_with("text"),
        )
        .arg(
            clap::Arg::new("text")
                .short('t')
                .long("text")
                .value_name("steps")
                .help("Procedure steps given directly on the command line")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("type")
                .short('T')
                .long("type")
                .value_name("category")
                .help("Procedure category")
                .value_parser(PossibleValuesParser::new(ProcedureCategory::keys()))
                .default_value(ProcedureCategory::General.key())
                .num_args(1),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("path")
                .help("Write the JSON result to a file instead of printing it")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show input details and an assessment summary")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("config-check")
                .long("config-check")
                .help("Validate configuration and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("test-connection")
                .long("test-connection")
                .help("Send a small probe prompt to the endpoint and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("show-prompt")
                .long("show-prompt")
                .help("Print the prompt that would be sent, without calling the endpoint")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let category = matches
        .get_one::<String>("type")
        .and_then(|key| ProcedureCategory::from_key(key))
        .unwrap_or_default();

    Config {
        help: matches.get_flag("help"),
        config_check: matches.get_flag("config-check"),
        test_connection: matches.get_flag("test-connection"),
        show_prompt: matches.get_flag("show-prompt"),
        verbose: matches.get_flag("verbose"),
        file: matches.get_one::<PathBuf>("file").cloned(),
        text: matches.get_one::<String>("text").cloned(),
        category,
        output: matches.get_one::<PathBuf>("output").cloned(),
    }
}

fn parse_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string().trim_end()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_from(std::env::args_os())
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    match parse_from(args.iter().copied())? {
        ParseOutcome::Config(config) => Ok(config),
        ParseOutcome::GenerateCompletion(_) => {
            Err(Error::invalid_argument("unexpected --generate"))
        }
    }
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
}

/// Config を QcCommand に変換する
///
/// 優先順: help → config-check → test-connection → 入力が必要なコマンド
pub fn config_to_command(config: Config) -> Result<QcCommand, Error> {
    if config.help {
        return Ok(QcCommand::Help);
    }

    if config.config_check {
        return Ok(QcCommand::ConfigCheck);
    }

    if config.test_connection {
        return Ok(QcCommand::TestConnection);
    }

    let source = match (config.file, config.text) {
        (Some(path), _) => StepsSource::File(path),
        (None, Some(text)) => StepsSource::Text(text),
        (None, None) => {
            return Err(Error::invalid_argument(
                "one of --file or --text is required",
            ))
        }
    };

    if config.show_prompt {
        return Ok(QcCommand::ShowPrompt {
            source,
            category: config.category,
        });
    }

    Ok(QcCommand::Evaluate {
        source,
        category: config.category,
        output: config.output,
        verbose: config.verbose,
    })
}
