use anyhow::Result;
use clap::Parser;

use samvad_cli::cli::commands::{chat, doctor, translate};
use samvad_cli::cli::{Args, Command};
use samvad_cli::language::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Translate { to, file, api_key }) => {
            let options = translate::TranslateOptions { to, file, api_key };
            translate::run_translate(options).await?;
        }
        Some(Command::Doctor { strict }) => {
            let options = doctor::DoctorOptions { strict };
            std::process::exit(doctor::run_doctor(&options));
        }
        None => {
            let options = chat::ChatOptions {
                message: args.message,
                api_key: args.api_key,
                max_history: args.max_history,
            };
            chat::run_chat(options).await?;
        }
    }

    Ok(())
}
