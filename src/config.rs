//! Startup arguments: `-import <path>` and `-export <path>`, in any order.
//!
//! Only the value right after a recognized flag is consumed; anything else on
//! the command line is ignored.

use std::path::PathBuf;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartupArgs {
    /// Cards file merged once before the menu starts.
    pub import: Option<PathBuf>,
    /// Cards file written once after the menu exits.
    pub export: Option<PathBuf>,
}

impl StartupArgs {
    /// Builds the arguments from the process argument list (program name excluded).
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        Self {
            import: flag_value(&args, "-import"),
            export: flag_value(&args, "-export"),
        }
    }
}

/// Value following the first occurrence of `flag`, if there is one.
fn flag_value(args: &[String], flag: &str) -> Option<PathBuf> {
    let position = args.iter().position(|arg| arg == flag)?;
    args.get(position + 1).map(PathBuf::from)
}
