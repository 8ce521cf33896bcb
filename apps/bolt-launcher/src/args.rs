use bolt_shell::ShellConfig;
use std::path::PathBuf;

pub const USAGE: &str = "usage: bolt-launcher [--internal-url <url>] [--files-dir <dir>] \
[--log-level <filter>] [--main-frame] [--route <url>]...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchArgs {
    pub internal_url: Option<String>,
    pub files_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    /// Route requests as the window's main frame instead of its content frame.
    pub main_frame: bool,
    pub routes: Vec<String>,
    pub help: bool,
}

impl LaunchArgs {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--internal-url" => parsed.internal_url = Some(value_for(&arg, args.next())?),
                "--files-dir" => parsed.files_dir = Some(PathBuf::from(value_for(&arg, args.next())?)),
                "--log-level" => parsed.log_level = Some(value_for(&arg, args.next())?),
                "--route" => parsed.routes.push(value_for(&arg, args.next())?),
                "--main-frame" => parsed.main_frame = true,
                "-h" | "--help" => parsed.help = true,
                other => return Err(format!("unrecognised argument `{other}`\n{USAGE}")),
            }
        }

        Ok(parsed)
    }

    /// Command-line values win over the environment.
    pub fn apply(&self, mut config: ShellConfig) -> ShellConfig {
        if let Some(url) = &self.internal_url {
            config.internal_url = url.clone();
        }
        if let Some(dir) = &self.files_dir {
            config.files_root = dir.clone();
        }
        config
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("missing value after {flag}"))
}

#[cfg(test)]
mod tests {
    use super::LaunchArgs;
    use bolt_shell::ShellConfig;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Result<LaunchArgs, String> {
        LaunchArgs::parse(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn empty_command_line_uses_defaults() {
        assert_eq!(parse(&[]), Ok(LaunchArgs::default()));
    }

    #[test]
    fn flags_are_collected_in_order() {
        let args = match parse(&[
            "--files-dir",
            "/srv/bolt",
            "--route",
            "boltapp://app/",
            "--main-frame",
            "--route",
            "http://localhost/#code=1",
            "--log-level",
            "debug",
        ]) {
            Ok(args) => args,
            Err(error) => panic!("{error}"),
        };

        assert_eq!(args.files_dir, Some(PathBuf::from("/srv/bolt")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.main_frame);
        assert_eq!(args.routes, vec!["boltapp://app/", "http://localhost/#code=1"]);
    }

    #[test]
    fn missing_values_and_unknown_flags_are_rejected() {
        assert_eq!(
            parse(&["--route"]),
            Err("missing value after --route".to_owned())
        );
        assert!(parse(&["--bogus"]).is_err_and(|error| error.contains("--bogus")));
    }

    #[test]
    fn command_line_overrides_config() {
        let args = LaunchArgs {
            internal_url: Some("boltapp://app/".to_owned()),
            ..LaunchArgs::default()
        };
        let config = args.apply(ShellConfig::default());
        assert_eq!(config.internal_url, "boltapp://app/");
        assert_eq!(config.files_root, ShellConfig::default().files_root);
    }
}
