use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use version_bump::config::{self, Config};
use version_bump::error::BumpError;
use version_bump::git::Git2TagSource;
use version_bump::hooks::{CommandHook, HookContext, VersionHook};
use version_bump::{logging, resolve_next_version, ui, ReleaseType};

#[derive(clap::Parser)]
#[command(
    name = "version-bump",
    version,
    about = "Compute the next semantic version from existing git tags"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, default_value = ".", help = "Path inside the git repository")]
    repo: PathBuf,

    #[arg(
        short = 't',
        long,
        env = "VERSIONBUMP_RELEASE_TYPE",
        help = "Release type: major, minor or patch (anything else means patch)"
    )]
    release_type: Option<String>,

    #[arg(
        short,
        long,
        env = "VERSIONBUMP_PRERELEASE",
        help = "Prerelease channel (e.g. beta, rc); empty for a release"
    )]
    prerelease: Option<String>,

    #[arg(
        long,
        env = "VERSIONBUMP_FALLBACK_VERSION",
        help = "Version to use when no release tag exists"
    )]
    fallback_version: Option<String>,

    #[arg(
        long,
        env = "VERSIONBUMP_TAG_PREFIX",
        help = "Prefix stripped from tags before parsing"
    )]
    tag_prefix: Option<String>,

    #[arg(
        long,
        env = "VERSIONBUMP_HOOK",
        help = "Script that may override the computed version"
    )]
    hook: Option<PathBuf>,

    #[arg(long, help = "Explain how the version was derived (on stderr)")]
    explain: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

impl Args {
    /// Command line values take precedence over the configuration file
    fn apply_to(&self, config: &mut Config) {
        if let Some(ref release_type) = self.release_type {
            config.bump.release_type = release_type.clone();
        }
        if let Some(ref prerelease) = self.prerelease {
            config.bump.prerelease = prerelease.clone();
        }
        if let Some(ref fallback) = self.fallback_version {
            config.bump.fallback_version = fallback.clone();
        }
        if let Some(ref prefix) = self.tag_prefix {
            config.bump.tag_prefix = prefix.clone();
        }
        if let Some(ref hook) = self.hook {
            config.hook.command = Some(hook.clone());
        }
    }
}

/// 1 for errors that abort the pipeline, 2 for rejected version input
fn exit_code(e: &BumpError) -> i32 {
    if e.is_fatal() {
        1
    } else {
        2
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(exit_code(&e));
        }
    };
    args.apply_to(&mut config);

    let request = config.bump.to_request();
    let tag_prefix = config.bump.tag_prefix.clone();

    let source = match Git2TagSource::open(&args.repo) {
        Ok(source) => source.with_tag_prefix(tag_prefix.as_str()),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(exit_code(&e));
        }
    };

    let hook = match config.hook.command.as_ref() {
        Some(path) => {
            let context = HookContext {
                release_type: ReleaseType::from_input(&config.bump.release_type),
                prerelease: request.prerelease_channel.clone(),
                tag_prefix: tag_prefix.clone(),
            };
            match CommandHook::new(path, context) {
                Ok(hook) => Some(hook),
                Err(e) => {
                    ui::display_error(&e.to_string());
                    std::process::exit(exit_code(&e));
                }
            }
        }
        None => None,
    };

    if args.explain {
        ui::display_status(&format!(
            "Resolving {} version from tags in {}",
            request.release_type,
            args.repo.display()
        ));
    }

    let resolution = match resolve_next_version(
        &source,
        &request,
        &tag_prefix,
        hook.as_ref().map(|h| h as &dyn VersionHook),
    ) {
        Ok(resolution) => resolution,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(exit_code(&e));
        }
    };

    if args.explain {
        ui::display_resolution(&resolution);
        ui::display_success(&format!("Next version: {}", resolution.version));
    }

    ui::display_version(&resolution.version);
    Ok(())
}
