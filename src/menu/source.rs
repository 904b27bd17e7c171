use std::fmt;
use std::path::PathBuf;

use super::SourceError;

/// Where a sheet is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Published sheet, fetched with a plain GET.
    Url(String),
    /// Local csv file.
    Path(PathBuf),
}

impl Source {
    /// `http(s)://` values are URLs, anything else is a path. Blank means
    /// not configured.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else if raw.starts_with("http://") || raw.starts_with("https://") {
            Some(Source::Url(raw.to_string()))
        } else {
            Some(Source::Path(PathBuf::from(raw)))
        }
    }

    /// Load the whole sheet as text
    pub async fn load(&self) -> Result<String, SourceError> {
        match self {
            Source::Url(url) => {
                let http = |source| SourceError::Http {
                    url: url.clone(),
                    source,
                };
                reqwest::get(url)
                    .await
                    .and_then(reqwest::Response::error_for_status)
                    .map_err(http)?
                    .text()
                    .await
                    .map_err(http)
            }
            Source::Path(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| SourceError::Io {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => f.write_str(url),
            Source::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_blank_is_unconfigured() {
        assert_eq!(Source::parse(""), None);
        assert_eq!(Source::parse("   "), None);
    }

    #[test]
    fn parse_urls_and_paths() {
        assert_eq!(
            Source::parse(" https://docs.example.com/pub?output=csv "),
            Some(Source::Url("https://docs.example.com/pub?output=csv".to_string()))
        );
        assert_eq!(
            Source::parse("http://localhost/menu.csv"),
            Some(Source::Url("http://localhost/menu.csv".to_string()))
        );
        assert_eq!(
            Source::parse("data/menu.csv"),
            Some(Source::Path(PathBuf::from("data/menu.csv")))
        );
    }

    #[tokio::test]
    async fn load_reads_local_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"id,nombre\n").unwrap();

        let source = Source::Path(file.path().to_path_buf());
        assert_eq!(source.load().await.unwrap(), "id,nombre\n");
    }

    #[tokio::test]
    async fn load_missing_file_fails() {
        let source = Source::Path(PathBuf::from("/definitely/not/here.csv"));
        assert!(matches!(
            source.load().await,
            Err(SourceError::Io { .. })
        ));
    }
}
