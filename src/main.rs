use clap::{Parser, Subcommand, ValueEnum};
use nextsem::{ReleaseType, Version, VersionError};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum ReleaseArg {
    Major,
    Minor,
    Patch,
    Premajor,
    Preminor,
    Prepatch,
    Prerelease,
}

impl ReleaseArg {
    fn to_release_type(self) -> ReleaseType {
        match self {
            ReleaseArg::Major => ReleaseType::Major,
            ReleaseArg::Minor => ReleaseType::Minor,
            ReleaseArg::Patch => ReleaseType::Patch,
            ReleaseArg::Premajor => ReleaseType::PreMajor,
            ReleaseArg::Preminor => ReleaseType::PreMinor,
            ReleaseArg::Prepatch => ReleaseType::PrePatch,
            ReleaseArg::Prerelease => ReleaseType::PreRelease,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
#[command(arg_required_else_help(true))]
enum Commands {
    /// Validates that a version matches the semantic versioning grammar
    Valid {
        /// The version string to validate
        version: String,
    },

    /// Increments a version according to the given release type
    Bump {
        /// The version string to increment
        version: String,

        /// The release type to apply
        #[arg(value_enum)]
        release: ReleaseArg,

        /// A pre-release tag to steer toward, e.g. `alpha`
        #[arg(short, long)]
        identifier: Option<String>,

        /// Start freshly introduced pre-release numbers at 1 instead of 0
        #[arg(long)]
        identifier_base: bool,
    },

    /// Compares two versions, printing -1, 0, or 1
    Compare {
        /// The left-hand version
        left: String,

        /// The right-hand version
        right: String,

        /// Also order by build metadata as a final tiebreak
        #[arg(short, long)]
        build_metadata: bool,
    },
}

type Output = (String, i32);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn do_work(cli: Cli) -> Result<Output, VersionError> {
    match cli.command {
        Commands::Valid { version } => Ok(if Version::parse(&version).is_ok() {
            ("true".to_string(), 0)
        } else {
            ("false".to_string(), 1)
        }),
        Commands::Bump {
            version,
            release,
            identifier,
            identifier_base,
        } => {
            let version = Version::parse(&version)?;
            let next = version.next(
                release.to_release_type(),
                identifier.as_deref(),
                identifier_base,
            );
            Ok((next.to_string(), 0))
        }
        Commands::Compare {
            left,
            right,
            build_metadata,
        } => {
            let left = Version::parse(&left)?;
            let right = Version::parse(&right)?;
            let ordering = if build_metadata {
                left.compare_with_build_metadata(&right)
            } else {
                left.cmp(&right)
            };
            Ok(((ordering as i32).to_string(), 0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Output {
        let cli = Cli::try_parse_from(args).unwrap();
        do_work(cli).unwrap()
    }

    #[test]
    fn test_valid() {
        assert_eq!(("true".to_string(), 0), run(&["nextsem", "valid", "1.2.3"]));
        assert_eq!(
            ("false".to_string(), 1),
            run(&["nextsem", "valid", "not-a-version"])
        );
    }

    #[test]
    fn test_bump() {
        assert_eq!(
            ("1.3.0".to_string(), 0),
            run(&["nextsem", "bump", "1.2.3", "minor"])
        );
        assert_eq!(
            ("1.2.4-alpha.0".to_string(), 0),
            run(&[
                "nextsem",
                "bump",
                "1.2.3",
                "prerelease",
                "--identifier",
                "alpha"
            ])
        );
        assert_eq!(
            ("1.2.4-alpha.1".to_string(), 0),
            run(&[
                "nextsem",
                "bump",
                "1.2.3",
                "prerelease",
                "--identifier",
                "alpha",
                "--identifier-base"
            ])
        );
    }

    #[test]
    fn test_bump_invalid_version() {
        let cli = Cli::try_parse_from(["nextsem", "bump", "1.2", "patch"]).unwrap();
        assert!(matches!(
            do_work(cli),
            Err(VersionError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_compare() {
        assert_eq!(
            ("-1".to_string(), 0),
            run(&["nextsem", "compare", "1.2.3", "1.2.4"])
        );
        assert_eq!(
            ("0".to_string(), 0),
            run(&["nextsem", "compare", "1.2.3+a", "1.2.3+b"])
        );
        assert_eq!(
            ("1".to_string(), 0),
            run(&["nextsem", "compare", "1.2.3", "1.2.3-alpha"])
        );
    }

    #[test]
    fn test_compare_with_build_metadata() {
        assert_eq!(
            ("-1".to_string(), 0),
            run(&["nextsem", "compare", "--build-metadata", "1.2.3+a", "1.2.3+b"])
        );
    }
}
