//! Fetching the dataset text.
//!
//! Web builds fetch a URL through the browser; native builds read a file.
//! Either way there is exactly one attempt and no retry.

use std::path::{Path, PathBuf};

use super::dataset::Dataset;
use super::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    pub fn label(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

pub async fn load_dataset(source: &DataSource) -> Result<Dataset> {
    let text = fetch_text(source).await?;
    Ok(Dataset::parse(&text))
}

pub async fn fetch_text(source: &DataSource) -> Result<String> {
    match source {
        DataSource::Url(url) => fetch_url(url).await,
        DataSource::File(path) => read_file(path).await,
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_url(url: &str) -> Result<String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let fetch_err = |err: wasm_bindgen::JsValue| Error::Fetch {
        url: url.to_string(),
        details: format!("{err:?}"),
    };

    let window = web_sys::window().ok_or_else(|| Error::NoWindow {
        url: url.to_string(),
    })?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_err)?;
    let response: web_sys::Response = response.dyn_into().map_err(fetch_err)?;
    if !response.ok() {
        return Err(Error::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = JsFuture::from(response.text().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    body.as_string().ok_or_else(|| Error::Fetch {
        url: url.to_string(),
        details: "response body is not text".to_string(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_url(url: &str) -> Result<String> {
    Err(Error::UnsupportedSource {
        source_label: url.to_string(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(target_arch = "wasm32")]
async fn read_file(path: &Path) -> Result<String> {
    Err(Error::UnsupportedSource {
        source_label: path.display().to_string(),
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fairlens-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn reads_dataset_from_file() {
        let path = temp_file("ok.csv", "race_geo,White alone\n1,0.812\n");
        let dataset = load_dataset(&DataSource::File(path.clone())).await.unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].number("White alone"), Some(0.812));
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("fairlens-does-not-exist.csv");
        let err = load_dataset(&DataSource::File(path)).await.unwrap_err();
        assert!(matches!(err, Error::Io { .. }), "{err}");
    }

    #[tokio::test]
    async fn urls_are_unsupported_natively() {
        let source = DataSource::Url("./mock.csv".into());
        let err = fetch_text(&source).await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedSource { .. }));
        assert_eq!(source.label(), "./mock.csv");
    }
}
