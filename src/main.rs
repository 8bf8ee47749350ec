mod access;
mod api;
mod cache;
mod cmdline;
mod config;
mod logger;
mod ui;
mod util;

use access::{ControlState, WorkflowError};
use api::Client;
use cache::JsonFileStore;
use cmdline::Command;
use config::ConfigBuilder;
use logger::Logger;
use ui::{AppWorkflow, MainUI};

use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match cmdline::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e} See -h or --help for usage.");
            return ExitCode::FAILURE;
        }
    };
    if let Command::Help = args.command {
        cmdline::print_usage();
        return ExitCode::SUCCESS;
    }

    let config = match ConfigBuilder::load().and_then(|builder| match args.profile {
        Some(profile) => builder.profile(profile).build(),
        None => builder.build(),
    }) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Unable to read configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let logger = match args.command {
        Command::Ui => Logger::default(),
        _ => Logger::stdout(),
    };
    let client = Client::new(&config, api::credentials::from_config(&config));
    let workflow = AppWorkflow::new(client, JsonFileStore::new(config.clone()), logger.clone());

    if let Command::Ui = args.command {
        return match MainUI::new(workflow, &config, logger).run().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    match run_command(args.command, &workflow).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

// Every outcome has already been echoed by the logger, this only prints the listings
async fn run_command(command: Command, workflow: &AppWorkflow) -> Result<(), WorkflowError> {
    match command {
        Command::Folders => {
            workflow.load_folders().await?;
            for folder in workflow.folders.snapshot().await {
                let badge = util::format::subfolder_badge(folder.subfolders.len()).unwrap_or_default();
                println!("{}  {}  [{}]  {badge}", folder.id, folder.name, ControlState::for_folder(&folder).label());
            }
        }
        Command::Request { folder_id, reason } => {
            workflow.load_folders().await?;
            workflow.submit_request(&folder_id, &reason).await?;
        }
        Command::Requests { pending_only } => {
            workflow.load_requests().await?;
            if pending_only {
                workflow.requests.toggle_pending_only();
            }
            for request in workflow.requests.visible().await {
                println!(
                    "{}  {}  {}  {}  {}  {}",
                    request.id,
                    request.folder_name(),
                    request.employee_name(),
                    request.status,
                    util::format::date_part(request.created_at.as_deref().unwrap_or_default()),
                    request.reason()
                );
            }
        }
        Command::Decide { request_id, decision } => {
            workflow.set_request_status(&request_id, decision).await?;
        }
        Command::Grant {
            folder_id,
            employee_id,
            reason,
        } => {
            workflow.grant_access(&folder_id, &employee_id, &reason).await?;
        }
        Command::Authorized => {
            workflow.load_authorized().await?;
            for folder in workflow.library.snapshot().await {
                println!("{}", folder.name);
                for subfolder in &folder.subfolders {
                    println!("  {}", subfolder.name);
                    for file in &subfolder.files {
                        println!("    {} ({})  {}", file.original_name, file.kind(), file.download_url);
                    }
                }
            }
        }
        Command::Ui | Command::Help => {}
    }
    Ok(())
}
