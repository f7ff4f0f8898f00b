use std::ffi::OsString;

/// Long options that may also be written with a single dash, as in
/// `-path=out` or `-pat TOKEN`.
const SINGLE_DASH_LONGS: [&str; 7] = [
    "path",
    "pat",
    "folder",
    "color",
    "log-level",
    "timeout",
    "api-url",
];

/// Rewrite single-dash long options to their double-dash form so clap can
/// parse them. Everything after a bare `--` is left untouched.
pub fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut past_separator = false;

    args.into_iter()
        .map(|arg| {
            if past_separator {
                return arg;
            }

            let Some(text) = arg.to_str() else {
                return arg;
            };

            if text == "--" {
                past_separator = true;
                return arg;
            }

            match single_dash_long(text) {
                Some(rewritten) => OsString::from(rewritten),
                None => arg,
            }
        })
        .collect()
}

fn single_dash_long(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }

    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_LONGS
        .contains(&name)
        .then(|| format!("-{arg}"))
}
