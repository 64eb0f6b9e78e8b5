use crate::error::{PickerError, PickerResult};
use crate::interactive::application::fetcher::{Fetcher, HttpFetcher};
use crate::interactive::constants::*;
use crate::interactive::domain::dataset::Dataset;
use crate::interactive::domain::models::CacheMetadata;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolve the cache directory from `XDG_DATA_HOME` and the home directory.
/// An empty `XDG_DATA_HOME` counts as unset.
pub fn resolve_data_dir(
    xdg_data_home: Option<OsString>,
    home: Option<PathBuf>,
) -> PickerResult<PathBuf> {
    let data_home = match xdg_data_home.filter(|value| !value.is_empty()) {
        Some(value) => PathBuf::from(value),
        None => {
            let home = home.ok_or_else(|| {
                PickerError::io(
                    "~",
                    std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "could not determine home directory",
                    ),
                )
            })?;
            home.join(".local").join("share")
        }
    };

    Ok(data_home.join(CACHE_DIR_NAME))
}

/// Cache directory for the current process environment.
pub fn default_data_dir() -> PickerResult<PathBuf> {
    let home = std::env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir);

    resolve_data_dir(std::env::var_os("XDG_DATA_HOME"), home)
}

/// Loads the emoji dataset from the local cache, downloading it on first use.
pub struct CacheService {
    data_dir: PathBuf,
    source_url: String,
    fetcher: Box<dyn Fetcher>,
}

impl CacheService {
    pub fn new(data_dir: PathBuf) -> Self {
        Self::with_fetcher(data_dir, Box::new(HttpFetcher::new()))
    }

    pub fn with_fetcher(data_dir: PathBuf, fetcher: Box<dyn Fetcher>) -> Self {
        Self {
            data_dir,
            source_url: EMOJI_DATASET_URL.to_string(),
            fetcher,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.data_dir.join(DATASET_FILE_NAME)
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.data_dir.join(METADATA_FILE_NAME)
    }

    /// Return the cached dataset, downloading it first when no cache file exists.
    ///
    /// A cache file that exists is never re-downloaded, even if it is truncated
    /// or otherwise unreadable; that surfaces as a parse error instead.
    pub fn load(&self) -> PickerResult<Dataset> {
        let dataset_path = self.dataset_path();

        if dataset_path.exists() {
            debug!("Using cached dataset at {}", dataset_path.display());
        } else {
            info!(
                "No cached dataset at {}, downloading",
                dataset_path.display()
            );
            self.download()?;
        }

        let bytes =
            std::fs::read(&dataset_path).map_err(|e| PickerError::io(&dataset_path, e))?;
        let dataset = Dataset::from_slice(&bytes)?;

        debug!("Loaded {} emoji", dataset.len());
        Ok(dataset)
    }

    /// Read the metadata written alongside the dataset.
    pub fn load_metadata(&self) -> PickerResult<CacheMetadata> {
        let path = self.metadata_path();
        let bytes = std::fs::read(&path).map_err(|e| PickerError::io(&path, e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn download(&self) -> PickerResult<()> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| PickerError::io(&self.data_dir, e))?;

        let body = self.fetcher.fetch(&self.source_url)?;

        let dataset_path = self.dataset_path();
        std::fs::write(&dataset_path, &body).map_err(|e| PickerError::io(&dataset_path, e))?;
        info!(
            "Wrote {} bytes to {}",
            body.len(),
            dataset_path.display()
        );

        let metadata = CacheMetadata {
            version: CACHE_FORMAT_VERSION.to_string(),
        };
        let metadata_path = self.metadata_path();
        let metadata_json = serde_json::to_vec(&metadata)?;
        std::fs::write(&metadata_path, metadata_json)
            .map_err(|e| PickerError::io(&metadata_path, e))?;

        Ok(())
    }
}
