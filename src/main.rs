use anyhow::Result;
use clap::Parser;

use changelog_release::boundary::BoundaryWarning;
use changelog_release::cli::{run_publish_workflow, PublishOutcome, PublishWorkflowArgs};
use changelog_release::config;
use changelog_release::git_ops::GitRepo;
use changelog_release::runner::{CommandRunner, DryRunRunner, SystemRunner};
use changelog_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "changelog-release",
    about = "Create a git tag and GitHub release from the newest CHANGE_LOGS.md entry"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Changelog file to read [default: CHANGE_LOGS.md]")]
    changelog: Option<String>,

    #[arg(long, help = "Directory to zip and attach to the release")]
    archive_dir: Option<String>,

    #[arg(long = "attach", help = "File to attach to the release (repeatable)")]
    attachments: Vec<String>,

    #[arg(short, long, help = "Git remote to push the tag to [default: origin]")]
    remote: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

impl From<Args> for PublishWorkflowArgs {
    fn from(args: Args) -> Self {
        PublishWorkflowArgs {
            config_path: args.config,
            changelog: args.changelog,
            archive_dir: args.archive_dir,
            attachments: args.attachments,
            remote: args.remote,
            dry_run: args.dry_run,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("changelog-release {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let workflow_args = PublishWorkflowArgs::from(args);

    let config = match config::load_config(workflow_args.config_path.as_deref()) {
        Ok(cfg) => workflow_args.apply_to(cfg),
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let repo = match GitRepo::new() {
        Ok(repo) => Some(repo),
        Err(e) => {
            ui::display_boundary_warning(&BoundaryWarning::NoTagRepository {
                reason: e.to_string(),
            });
            None
        }
    };

    let runner: Box<dyn CommandRunner> = if workflow_args.dry_run {
        ui::display_status("Dry run: no commands will be executed");
        Box::new(DryRunRunner)
    } else {
        Box::new(SystemRunner)
    };

    match run_publish_workflow(&config, runner.as_ref(), repo.as_ref()) {
        Ok(PublishOutcome::SkippedNoHeading) => {
            ui::display_error(&format!(
                "No version found in {} or invalid format.",
                config.changelog.path
            ));
        }
        Ok(PublishOutcome::TagOnly { version }) => {
            ui::display_success(&format!("Successfully created tag for version {}.", version));
        }
        Ok(PublishOutcome::TagAndRelease { version, channel }) => {
            ui::display_success(&format!(
                "Successfully created {} release for version {}.",
                channel, version
            ));
        }
        Err(e) => {
            ui::display_error(&format!("Failed to create or update release: {}", e));
            std::process::exit(1);
        }
    }

    Ok(())
}
