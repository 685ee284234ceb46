use bcrypt_gen_core::Cost;
use tracing::debug;

use crate::err::{Error, Result};

// Mode

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Generate { cost: Cost, password: String },
    Interactive,
    Verify { hash: String, password: String },
}

// ModeArgs

#[derive(clap::Args, Clone, Debug, Default, Eq, PartialEq)]
pub struct ModeArgs {
    #[arg(
        short = 'c',
        num_args = 0..=2,
        value_names = ["PASSWORD", "SALT_ROUNDS"],
        allow_hyphen_values = true,
        help = "Generate hash for the given password with custom salt rounds"
    )]
    pub custom: Option<Vec<String>>,
    #[arg(
        short = 'i',
        help = "Interactive mode with questions for password and rounds (default)"
    )]
    pub interactive: bool,
    #[arg(
        short = 'p',
        num_args = 0..=1,
        value_name = "PASSWORD",
        allow_hyphen_values = true,
        help = "Generate hash for the given password with default salt rounds"
    )]
    pub password: Option<Vec<String>>,
    #[arg(
        short = 'v',
        num_args = 0..=2,
        value_names = ["HASH", "PASSWORD"],
        allow_hyphen_values = true,
        help = "Verify if the password matches the given hash"
    )]
    pub verify: Option<Vec<String>>,
}

impl ModeArgs {
    /// Picks the mode, `-i` first, then `-v`, `-c` and `-p`; interactive when no flag is set.
    pub fn resolve(self, default_cost: Cost) -> Result<Mode> {
        if self.interactive {
            debug!("interactive mode requested");
            Ok(Mode::Interactive)
        } else if let Some(values) = self.verify {
            let mut values = values.into_iter();
            match (non_empty(values.next()), non_empty(values.next())) {
                (Some(hash), Some(password)) => Ok(Mode::Verify { hash, password }),
                _ => Err(Error::MissingArgument(
                    "a hash and a password with the -v option",
                )),
            }
        } else if let Some(values) = self.custom {
            let mut values = values.into_iter();
            let password = non_empty(values.next()).ok_or(Error::MissingArgument(
                "a password and valid salt rounds with the -c option",
            ))?;
            let cost = values
                .next()
                .ok_or(Error::MissingArgument(
                    "a password and valid salt rounds with the -c option",
                ))?
                .parse()?;
            Ok(Mode::Generate { cost, password })
        } else if let Some(values) = self.password {
            let password = non_empty(values.into_iter().next())
                .ok_or(Error::MissingArgument("a password with the -p option"))?;
            Ok(Mode::Generate {
                cost: default_cost,
                password,
            })
        } else {
            debug!("no mode requested, falling back to interactive mode");
            Ok(Mode::Interactive)
        }
    }
}

// Functions

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

// Tests

#[cfg(test)]
mod test {
    use std::iter::once;

    use clap::Parser;

    use crate::test::*;

    use super::*;

    // Args

    #[derive(Parser)]
    struct Args {
        #[command(flatten)]
        mode: ModeArgs,
    }

    // Functions

    fn resolve(args: &[&str]) -> Result<Mode> {
        init_tracer();
        let args = Args::try_parse_from(once("bcrypt-gen").chain(args.iter().copied())).unwrap();
        args.mode.resolve(Cost::DEFAULT)
    }

    // Mods

    mod mode_args {
        use super::*;

        // Mods

        mod resolve {
            use super::*;

            // Tests

            #[test]
            fn no_args() {
                assert_eq!(resolve(&[]).unwrap(), Mode::Interactive);
            }

            #[test]
            fn interactive() {
                assert_eq!(resolve(&["-i"]).unwrap(), Mode::Interactive);
            }

            #[test]
            fn interactive_wins() {
                let mode = resolve(&["-p", "pwd", "-i"]).unwrap();
                assert_eq!(mode, Mode::Interactive);
            }

            #[test]
            fn password() {
                let mode = resolve(&["-p", "S3cret"]).unwrap();
                assert_eq!(
                    mode,
                    Mode::Generate {
                        cost: Cost::DEFAULT,
                        password: "S3cret".into(),
                    }
                );
            }

            #[test]
            fn password_starting_with_hyphen() {
                let mode = resolve(&["-p", "-S3cret"]).unwrap();
                assert_eq!(
                    mode,
                    Mode::Generate {
                        cost: Cost::DEFAULT,
                        password: "-S3cret".into(),
                    }
                );
            }

            #[test]
            fn password_missing() {
                let err = resolve(&["-p"]).unwrap_err();
                assert!(matches!(err, Error::MissingArgument(_)));
            }

            #[test]
            fn password_empty() {
                let err = resolve(&["-p", ""]).unwrap_err();
                assert!(matches!(err, Error::MissingArgument(_)));
            }

            #[test]
            fn custom() {
                let mode = resolve(&["-c", "S3cret", "12"]).unwrap();
                assert_eq!(
                    mode,
                    Mode::Generate {
                        cost: Cost::new(12).unwrap(),
                        password: "S3cret".into(),
                    }
                );
            }

            #[test]
            fn custom_cost_not_a_number() {
                let err = resolve(&["-c", "S3cret", "abc"]).unwrap_err();
                assert!(matches!(
                    err,
                    Error::Engine(bcrypt_gen_core::Error::InvalidConfiguration(_))
                ));
            }

            #[test]
            fn custom_cost_out_of_range() {
                let err = resolve(&["-c", "S3cret", "42"]).unwrap_err();
                assert!(matches!(
                    err,
                    Error::Engine(bcrypt_gen_core::Error::InvalidConfiguration(_))
                ));
            }

            #[test]
            fn custom_cost_missing() {
                let err = resolve(&["-c", "S3cret"]).unwrap_err();
                assert!(matches!(err, Error::MissingArgument(_)));
            }

            #[test]
            fn verify() {
                let hash = "$2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";
                let mode = resolve(&["-v", hash, "S3cret"]).unwrap();
                assert_eq!(
                    mode,
                    Mode::Verify {
                        hash: hash.into(),
                        password: "S3cret".into(),
                    }
                );
            }

            #[test]
            fn verify_wins_over_generation() {
                let mode = resolve(&["-p", "other", "-v", "hash", "S3cret"]).unwrap();
                assert!(matches!(mode, Mode::Verify { .. }));
            }

            #[test]
            fn verify_password_missing() {
                let err = resolve(&["-v", "hash"]).unwrap_err();
                assert!(matches!(err, Error::MissingArgument(_)));
            }

            #[test]
            fn verify_all_missing() {
                let err = resolve(&["-v"]).unwrap_err();
                assert!(matches!(err, Error::MissingArgument(_)));
            }
        }
    }
}
