use clap::error::ErrorKind as ClapErrorKind;
use clap::{Parser, Subcommand};
use gitlet::areas::repository::Repository;
use gitlet::artifacts::core::PagerWriter;
use gitlet::artifacts::core::config::{Config, LOG_FILTER_VAR};
use gitlet::artifacts::core::errors::{GitletError, as_gitlet_error};
use is_terminal::IsTerminal;
use minus::Pager;
use std::process::ExitCode;

const MISSING_COMMAND: &str = "Please enter a command.";
const UNKNOWN_COMMAND: &str = "No command with that name exists.";

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A small local version-control system",
    long_about = "gitlet keeps snapshots of the files in the current directory, \
    with branches and three-way merges, in a .gitlet directory.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "init", about = "Create a repository in the current directory")]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "commit", about = "Record the staged changes")]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(name = "rm", about = "Unstage a file or stage its removal")]
    Rm {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "log", about = "Show the history of the current branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of the commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged files and working changes")]
    Status,
    #[command(name = "branch", about = "Create a branch at the current commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(
        name = "checkout",
        about = "Switch branches or restore a file",
        long_about = "checkout <branch> switches to a branch. checkout -- <file> restores a file \
        from the current commit, checkout <commit> -- <file> from the given commit."
    )]
    Checkout {
        target: Option<String>,
        #[arg(last = true)]
        file: Vec<String>,
    },
    #[command(name = "reset", about = "Check out a commit and move the current branch to it")]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current branch")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
    #[command(
        name = "hash-object",
        about = "Compute the blob id of a file and optionally store the blob"
    )]
    HashObject {
        #[arg(short, long, help = "Write the blob to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "cat-file", about = "Print the content of a blob or commit")]
    CatFile {
        #[arg(index = 1)]
        object_id: String,
    },
}

impl Commands {
    fn is_paged(&self) -> bool {
        matches!(self, Commands::Log | Commands::GlobalLog)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_FILTER_VAR, "warn"))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return report_usage_error(error),
    };

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => match as_gitlet_error(&error) {
            Some(gitlet_error) => {
                log::debug!("{:?} error: {gitlet_error:?}", gitlet_error.kind());
                println!("{gitlet_error}");
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("error: {error:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn report_usage_error(error: clap::Error) -> ExitCode {
    match error.kind() {
        ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
            let _ = error.print();
        }
        ClapErrorKind::MissingSubcommand
        | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => println!("{MISSING_COMMAND}"),
        ClapErrorKind::InvalidSubcommand => println!("{UNKNOWN_COMMAND}"),
        _ => println!("{}", GitletError::IncorrectOperands),
    }

    ExitCode::SUCCESS
}

async fn run(command: Commands) -> anyhow::Result<()> {
    let config = Config::load_from_env()?;
    let stdout_is_terminal = std::io::stdout().is_terminal();
    if !stdout_is_terminal {
        colored::control::set_override(false);
    }

    let pager = (command.is_paged() && config.pager_enabled() && stdout_is_terminal)
        .then(Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    let pwd = std::env::current_dir()?;
    let mut repository = Repository::new(&pwd, writer, config)?;

    match command {
        Commands::Init => repository.init().await?,
        Commands::Add { file } => repository.add(&file).await?,
        Commands::Commit { message } => {
            repository.commit(&message).await?;
        }
        Commands::Rm { file } => repository.rm(&file).await?,
        Commands::Log => repository.log()?,
        Commands::GlobalLog => repository.global_log()?,
        Commands::Find { message } => {
            repository.find(&message)?;
        }
        Commands::Status => {
            repository.status().await?;
        }
        Commands::Branch { name } => repository.branch(&name)?,
        Commands::RmBranch { name } => repository.rm_branch(&name)?,
        Commands::Checkout { target, file } => match (target, file.as_slice()) {
            (Some(branch), []) => repository.checkout_branch(&branch).await?,
            (commit, [file]) => repository.checkout_file(commit.as_deref(), file)?,
            _ => return Err(GitletError::IncorrectOperands.into()),
        },
        Commands::Reset { commit } => repository.reset(&commit).await?,
        Commands::Merge { branch } => {
            repository.merge(&branch).await?;
        }
        Commands::HashObject { write, file } => {
            repository.hash_object(&file, write)?;
        }
        Commands::CatFile { object_id } => repository.cat_file(&object_id)?,
    }

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
