use camino::{Utf8Path as Path, Utf8PathBuf as PathBuf};
use eyre::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct TomlDir {
    path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct TomlConfig {
    address: Option<String>,
    port: Option<u16>,
    #[serde(rename = "Catalog")]
    catalog: TomlDir,
    #[serde(rename = "PhotoDir")]
    photo_dir: Option<TomlDir>,
    #[serde(rename = "StaticDir")]
    static_dir: Option<TomlDir>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub address: Option<String>,
    pub port: Option<u16>,
    /// Photo catalog file
    pub catalog_path: PathBuf,
    /// Directory relative photo `src` paths are resolved against
    pub photo_dir: Option<PathBuf>,
    /// Built front-end
    pub static_dir: Option<PathBuf>,
}

pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

impl Config {
    /// Make all paths absolute by joining relative ones onto `base`
    pub fn resolve_relative_to(self, base: &Path) -> Config {
        let resolve = |path: PathBuf| {
            if path.is_absolute() {
                path
            } else {
                base.join(path)
            }
        };
        Config {
            catalog_path: resolve(self.catalog_path),
            photo_dir: self.photo_dir.map(resolve),
            static_dir: self.static_dir.map(resolve),
            ..self
        }
    }
}

pub fn parse_config(toml_str: &str) -> Result<Config> {
    let toml_config: TomlConfig = toml::from_str(toml_str).context("Error parsing config file")?;
    Ok(Config {
        address: toml_config.address,
        port: toml_config.port,
        catalog_path: toml_config.catalog.path.into(),
        photo_dir: toml_config.photo_dir.map(|dir| dir.path.into()),
        static_dir: toml_config.static_dir.map(|dir| dir.path.into()),
    })
}

/// Read the config file at `path`. Relative paths inside it are resolved against the
/// directory containing the config file.
pub async fn read_config(path: &Path) -> Result<Config> {
    let toml_str = tokio::fs::read_to_string(path)
        .await
        .context(format!("Error reading config file {}", path))?;
    let config = parse_config(&toml_str)?;
    let config_dir = path.parent().unwrap_or(Path::new(""));
    Ok(config.resolve_relative_to(config_dir))
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use claims::{assert_err, assert_ok};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn minimal_config() {
        let config = assert_ok!(parse_config(
            r#"
[Catalog]
path = "photos.toml"
"#
        ));
        assert_eq!(
            config,
            Config {
                address: None,
                port: None,
                catalog_path: "photos.toml".into(),
                photo_dir: None,
                static_dir: None,
            }
        );
    }

    #[test]
    fn full_config() {
        let config = assert_ok!(parse_config(
            r#"
address = "0.0.0.0"
port = 8080

[Catalog]
path = "/srv/gallery/photos.json"

[PhotoDir]
path = "photos"

[StaticDir]
path = "dist"
"#
        ));
        assert_eq!(config.address.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.port, Some(8080));
        assert_eq!(config.photo_dir, Some(PathBuf::from("photos")));
        let resolved = config.resolve_relative_to(Path::new("/etc/shiki"));
        assert_eq!(resolved.catalog_path, PathBuf::from("/srv/gallery/photos.json"));
        assert_eq!(resolved.photo_dir, Some(PathBuf::from("/etc/shiki/photos")));
        assert_eq!(resolved.static_dir, Some(PathBuf::from("/etc/shiki/dist")));
    }

    #[test]
    fn catalog_is_required() {
        let _ = assert_err!(parse_config("port = 3000\n"));
    }

    #[test]
    fn bad_port_is_rejected() {
        let _ = assert_err!(parse_config(
            "port = 700000\n[Catalog]\npath = \"photos.toml\"\n"
        ));
    }

    #[tokio::test]
    async fn reads_config_next_to_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = PathBuf::from_path_buf(dir.path().join("shiki.toml")).unwrap();
        let mut file = std::fs::File::create(&config_path).unwrap();
        file.write_all(b"[Catalog]\npath = \"photos.toml\"\n").unwrap();
        let config = assert_ok!(read_config(&config_path).await);
        assert_eq!(
            config.catalog_path,
            config_path.parent().unwrap().join("photos.toml")
        );
    }
}
