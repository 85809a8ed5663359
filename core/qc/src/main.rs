mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use cli::{config_to_command, parse_args, print_completion, ParseOutcome, BIN_NAME};
use domain::{ProcedureCategory, QcCommand};
use ports::inbound::UseCaseRunner;
use wiring::{wire_qc, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, cmd: QcCommand) -> Result<i32, Error> {
        let command_name = cmd.name();
        self.log(
            LogRecord::new(LogLevel::Info, "command started")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = self.dispatch(cmd);

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        self.log(
            LogRecord::new(LogLevel::Info, "command finished")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            self.log(LogRecord::new(LogLevel::Error, e.to_string()).kind("error"));
        }
        result
    }
}

impl Runner {
    fn dispatch(&self, cmd: QcCommand) -> Result<i32, Error> {
        let uc = &self.app.use_case;
        match cmd {
            QcCommand::Help => {
                print_help();
                Ok(0)
            }
            QcCommand::ConfigCheck => {
                println!("Checking configuration...");
                let report = uc.config_check();
                for item in &report.items {
                    println!("{}", item);
                }
                report.into_result()?;
                println!("Configuration check passed");
                Ok(0)
            }
            QcCommand::TestConnection => {
                let answer = uc.test_connection()?;
                println!("Connection test succeeded");
                println!("{}", answer);
                Ok(0)
            }
            QcCommand::ShowPrompt { source, category } => {
                let steps = uc.read_steps(&source)?;
                print!("{}", uc.show_prompt(&steps, category));
                Ok(0)
            }
            QcCommand::Evaluate {
                source,
                category,
                output,
                verbose,
            } => {
                if verbose {
                    eprintln!("Reading procedure steps from {}", source.describe());
                }
                let steps = uc.read_steps(&source)?;
                if verbose {
                    eprintln!("Procedure category: {}", category.label());
                    eprintln!("Steps length: {} chars", steps.char_count());
                    eprintln!("Evaluating...");
                }

                let normalized = uc.evaluate(&steps, category)?;
                let result = &normalized.result;

                match output {
                    Some(path) => {
                        uc.save_result(result, &path)?;
                        println!("Result saved to: {}", path.display());
                    }
                    None => println!("{}", result.to_pretty_json()?),
                }

                if verbose {
                    eprintln!();
                    eprintln!("=== Summary ===");
                    eprintln!("Total score: {}", result.total_score);
                    eprintln!("Risk level: {}", result.risk_level);
                    eprintln!("Risks identified: {}", result.risks.len());
                    eprintln!("Suggestions: {}", result.suggestions.len());
                }
                Ok(0)
            }
        }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.app.logger.log(&record.layer("cli"));
    }
}

fn main() {
    if let Err(e) = adapter::install_interrupt_handler() {
        eprintln!("Warning: failed to install Ctrl+C handler: {}", e);
    }
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", BIN_NAME, e);
            if e.is_usage() {
                print_usage();
            }
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let cmd = config_to_command(config)?;
    let runner = Runner { app: wire_qc() };
    runner.run(cmd)
}

fn print_usage() {
    eprintln!("Usage: {} (--file <path> | --text <steps>) [--type <category>] [--output <path>] [--verbose]", BIN_NAME);
    eprintln!("       {} --config-check | --test-connection | --help", BIN_NAME);
}

fn print_help() {
    println!("Usage: {} [options]", BIN_NAME);
    println!();
    println!("Assess the quality and risks of surgical procedure steps with an LLM.");
    println!("The result is a JSON object with total_score, risks, suggestions and risk_level.");
    println!();
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  -f, --file <path>          Read procedure steps from a text file");
    println!("  -t, --text <steps>         Procedure steps given directly (exclusive with --file)");
    println!("  -T, --type <category>      Procedure category (default: general)");
    println!("  -o, --output <path>        Write the JSON result to a file instead of printing it");
    println!("  -v, --verbose              Show input details and an assessment summary");
    println!("  --config-check             Validate configuration and exit");
    println!("  --test-connection          Send a small probe prompt to the endpoint and exit");
    println!("  --show-prompt              Print the prompt that would be sent (no network call)");
    println!("  --generate <shell>         Generate shell completion script (bash, zsh, fish, ...)");
    println!();
    println!("Procedure categories:");
    for category in ProcedureCategory::ALL {
        println!("  {:<22} {}", category.key(), category.label());
    }
    println!();
    println!("Environment:");
    println!("  OPENAI_API_KEY    API key (required, must start with 'sk-')");
    println!("  OPENAI_BASE_URL   Endpoint base URL (default: https://api.deepseek.com)");
    println!("  OPENAI_MODEL      Model name (default: deepseek-chat)");
    println!("  DEBUG             'true' to include debug records in the log file");
    println!("  SURGERY_QC_LOG    JSONL log file path (no log file when unset)");
    println!();
    println!("Examples:");
    println!("  {} --file data/appendectomy_01.txt --type appendectomy", BIN_NAME);
    println!("  {} --text \"1. 常规消毒铺巾 ...\" --type cholecystectomy", BIN_NAME);
    println!("  {} --config-check", BIN_NAME);
}
