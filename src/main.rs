use std::process::ExitCode;
use wordscape_gen::cli::{
    Command, display_check_report, display_summary, parse_cli, read_puzzle_file, run_check,
    run_generate,
};
use wordscape_gen::logging::init_logging;
use wordscape_gen::tui::run_viewer;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);

    match cli.command {
        Command::Generate(args) => match run_generate(&args) {
            Ok(summary) => {
                display_summary(&summary, args.ids().len());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Generation failed: {e}");
                ExitCode::FAILURE
            }
        },
        Command::Check { path, size } => match run_check(&path, size) {
            Ok(report) => {
                display_check_report(&report);
                if report.is_ok() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            }
            Err(e) => {
                eprintln!("Failed to check '{}': {e}", path.display());
                ExitCode::FAILURE
            }
        },
        Command::View { path, size } => {
            let puzzles = match read_puzzle_file(&path) {
                Ok(puzzles) => puzzles,
                Err(e) => {
                    eprintln!("Failed to read '{}': {e}", path.display());
                    return ExitCode::FAILURE;
                }
            };
            if let Err(e) = run_viewer(puzzles, size) {
                eprintln!("Terminal error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}
