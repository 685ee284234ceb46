use std::{
    io::{stderr, stdout},
    process::ExitCode,
};

use bcrypt_gen_core::{tracer::init_tracer, BcryptHashEngine, Cost, Scheme};
use clap::Parser;
use mode::ModeArgs;
use prompt::LinePrompter;
use run::{report, Runner};

// Main

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_tracer(args.log_filter)?;
    let engine = BcryptHashEngine::new(args.scheme);
    let mut runner = Runner::new(engine, args.default_cost, stdout(), stderr());
    let res = match args.mode.resolve(args.default_cost) {
        Ok(mode) => runner.run(mode, LinePrompter::stdio).await,
        Err(err) => Err(err),
    };
    let code = report(res, &mut stderr());
    Ok(ExitCode::from(code))
}

// Mods

mod err;
mod mode;
mod prompt;
mod run;

// Args

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(
    version,
    about = "Generate and verify bcrypt password hashes",
    after_help = "Without any mode flag, asks for all inputs interactively."
)]
struct Args {
    #[arg(
        long,
        env = "BCRYPT_DEFAULT_COST",
        default_value_t = Cost::DEFAULT,
        long_help = "Salt rounds used by -p and when no valid rounds are entered interactively"
    )]
    default_cost: Cost,
    #[arg(
        long,
        env,
        default_value = "bcrypt_gen=info,bcrypt_gen_core=info,warn",
        long_help = "Log filter (https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives)"
    )]
    log_filter: String,
    #[command(flatten)]
    mode: ModeArgs,
    #[arg(
        long,
        env = "BCRYPT_SCHEME",
        default_value_t = Scheme::default(),
        long_help = "Scheme of generated hashes (2a, 2b or 2y)"
    )]
    scheme: Scheme,
}

// Tests

#[cfg(test)]
mod test {
    use clap::error::ErrorKind;

    use super::*;

    // Functions

    pub fn init_tracer() {
        bcrypt_gen_core::tracer::init_tracer("bcrypt_gen=debug,bcrypt_gen_core=debug,warn").ok();
    }

    // Mods

    mod args {
        use super::*;

        // Tests

        #[test]
        fn defaults() {
            let args = Args::try_parse_from(["bcrypt-gen", "-p", "S3cret"]).unwrap();
            assert_eq!(args.default_cost, Cost::DEFAULT);
            assert_eq!(args.scheme, Scheme::TwoB);
            assert_eq!(args.mode.password, Some(vec!["S3cret".into()]));
        }

        #[test]
        fn config() {
            let args = Args::try_parse_from([
                "bcrypt-gen",
                "--default-cost",
                "12",
                "--scheme",
                "2y",
                "-i",
            ])
            .unwrap();
            assert_eq!(args.default_cost, Cost::new(12).unwrap());
            assert_eq!(args.scheme, Scheme::TwoY);
            assert!(args.mode.interactive);
        }

        #[test]
        fn invalid_default_cost() {
            let err = Args::try_parse_from(["bcrypt-gen", "--default-cost", "abc"]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation);
        }

        #[test]
        fn invalid_scheme() {
            let err = Args::try_parse_from(["bcrypt-gen", "--scheme", "2x"]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation);
        }

        #[test]
        fn help() {
            let err = Args::try_parse_from(["bcrypt-gen", "-h"]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }
}
