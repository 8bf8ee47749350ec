use super::Config;
use std::path::PathBuf;

pub enum DataPath<'a> {
    Store(&'a Config, &'a str), // key of the key-value store
}

impl From<DataPath<'_>> for PathBuf {
    fn from(value: DataPath) -> Self {
        match value {
            DataPath::Store(config, key) => {
                let mut path = config.profile_dir();
                path.push(format!("{key}.json"));
                path
            }
        }
    }
}

pub fn config_file() -> PathBuf {
    let mut path;

    if cfg!(test) {
        path = PathBuf::from(format!("{}/test/config", env!("CARGO_MANIFEST_DIR")));
    } else {
        path = dirs::config_dir().unwrap_or_default();
    }

    path.push(env!("CARGO_CRATE_NAME"));
    path.push("config.toml");
    path
}

pub fn default_data_dir() -> PathBuf {
    let mut path;
    if cfg!(test) {
        path = PathBuf::from(format!("{}/test/data", env!("CARGO_MANIFEST_DIR")));
    } else {
        path = dirs::data_local_dir().unwrap_or_default();
    }
    path.push(env!("CARGO_CRATE_NAME"));
    path
}
