use std::env;
use std::io;
use std::path::{Path, PathBuf};

pub fn get_absolute_path(filename: &str) -> io::Result<PathBuf> {
    if Path::new(filename).is_absolute() {
        Ok(Path::new(filename).to_path_buf())
    } else {
        Ok(env::current_dir()?.join(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_kept() {
        let path = if cfg!(windows) { "C:\\repo" } else { "/tmp/repo" };
        assert_eq!(get_absolute_path(path).unwrap(), PathBuf::from(path));
    }

    #[test]
    fn test_relative_path_joined_to_cwd() {
        let path = get_absolute_path("hello-pattern").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("hello-pattern"));
    }
}
