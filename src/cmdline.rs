use crate::access::Decision;
use std::fmt;

pub fn print_usage() {
    println!("folderaccess [--profile <name>]                     Start the terminal UI");
    println!("folderaccess [--profile <name>] folders             List folders and their access status");
    println!("folderaccess [--profile <name>] request <folder_id> <reason...>");
    println!("folderaccess [--profile <name>] requests [--pending]");
    println!("folderaccess [--profile <name>] approve <request_id>");
    println!("folderaccess [--profile <name>] reject <request_id>");
    println!("folderaccess [--profile <name>] grant <folder_id> <employee_id> <reason...>");
    println!("folderaccess [--profile <name>] authorized          List authorized folders and their files");
    println!("-h --help     Print this text");
}

#[derive(Debug, Eq, PartialEq)]
pub enum Command {
    Ui,
    Help,
    Folders,
    Request { folder_id: String, reason: String },
    Requests { pending_only: bool },
    Decide { request_id: String, decision: Decision },
    Grant { folder_id: String, employee_id: String, reason: String },
    Authorized,
}

#[derive(Debug, Eq, PartialEq)]
pub struct Args {
    pub profile: Option<String>,
    pub command: Command,
}

#[derive(Debug, Eq, PartialEq)]
pub enum ArgsError {
    MissingValue(&'static str),
    UnexpectedArgument(String),
    UnknownCommand(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArgsError::MissingValue(name) => write!(f, "Missing {name}."),
            ArgsError::UnexpectedArgument(arg) => write!(f, "Unexpected argument \"{arg}\"."),
            ArgsError::UnknownCommand(cmd) => write!(f, "Unknown command \"{cmd}\"."),
        }
    }
}

// Expects the arguments without the program name
pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Args, ArgsError> {
    let mut profile = None;
    let mut rest = vec![];
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Ok(Args {
                    profile,
                    command: Command::Help,
                })
            }
            "-p" | "--profile" => profile = Some(args.next().ok_or(ArgsError::MissingValue("profile name"))?),
            _ => rest.push(arg),
        }
    }

    let mut rest = rest.into_iter();
    let command = match rest.next().as_deref() {
        None => Command::Ui,
        Some("folders") => Command::Folders,
        Some("request") => {
            let folder_id = rest.next().ok_or(ArgsError::MissingValue("folder id"))?;
            Command::Request {
                folder_id,
                reason: rest.by_ref().collect::<Vec<_>>().join(" "),
            }
        }
        Some("requests") => {
            let pending_only = match rest.next().as_deref() {
                Some("--pending") => true,
                Some(other) => return Err(ArgsError::UnexpectedArgument(other.to_string())),
                None => false,
            };
            Command::Requests { pending_only }
        }
        Some(cmd @ ("approve" | "reject")) => {
            let decision = match cmd {
                "approve" => Decision::Approve,
                _ => Decision::Reject,
            };
            let request_id = rest.next().ok_or(ArgsError::MissingValue("request id"))?;
            Command::Decide { request_id, decision }
        }
        Some("grant") => {
            let folder_id = rest.next().ok_or(ArgsError::MissingValue("folder id"))?;
            let employee_id = rest.next().ok_or(ArgsError::MissingValue("employee id"))?;
            Command::Grant {
                folder_id,
                employee_id,
                reason: rest.by_ref().collect::<Vec<_>>().join(" "),
            }
        }
        Some("authorized") => Command::Authorized,
        Some(other) => return Err(ArgsError::UnknownCommand(other.to_string())),
    };

    if let Some(extra) = rest.next() {
        return Err(ArgsError::UnexpectedArgument(extra));
    }
    Ok(Args { profile, command })
}
