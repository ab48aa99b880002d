//! Path helpers for the Zellij sandbox.

use std::path::PathBuf;

/// Directory for Basket's trace files.
///
/// `/host` points to the directory Zellij was started from, which is usually
/// the user's home, so this resolves to `~/.local/share/zellij/basket`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("basket")
}

/// Maps `~` and `~/...` onto the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use basket::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/basket.toml"), "/etc/basket.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_under_host() {
        assert_eq!(get_data_dir(), PathBuf::from("/host/.local/share/zellij/basket"));
    }

    #[test]
    fn tilde_in_the_middle_is_left_alone() {
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
        assert_eq!(expand_tilde("~user/x"), "~user/x");
    }
}
