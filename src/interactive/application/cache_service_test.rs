#[cfg(test)]
mod tests {
    use super::super::cache_service::*;
    use super::super::fetcher::Fetcher;
    use crate::error::{ErrorKind, PickerError, PickerResult};
    use std::ffi::OsString;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{"😀": ["grin", "happy"], "🚀": ["rocket", "launch"]}"#;

    struct FakeFetcher {
        body: Vec<u8>,
        status: u16,
        calls: Arc<AtomicUsize>,
    }

    impl FakeFetcher {
        fn ok(body: &str, calls: Arc<AtomicUsize>) -> Box<Self> {
            Box::new(Self {
                body: body.as_bytes().to_vec(),
                status: 200,
                calls,
            })
        }

        fn status(status: u16, calls: Arc<AtomicUsize>) -> Box<Self> {
            Box::new(Self {
                body: Vec::new(),
                status,
                calls,
            })
        }
    }

    impl Fetcher for FakeFetcher {
        fn fetch(&self, url: &str) -> PickerResult<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.status != 200 {
                return Err(PickerError::Fetch {
                    url: url.to_string(),
                    reason: format!("unexpected status: {}", self.status),
                });
            }
            Ok(self.body.clone())
        }
    }

    #[test]
    fn test_resolve_data_dir_prefers_xdg() {
        let dir = resolve_data_dir(
            Some(OsString::from("/xdg/data")),
            Some(PathBuf::from("/home/user")),
        )
        .unwrap();
        assert_eq!(dir, PathBuf::from("/xdg/data/emoji-picker"));
    }

    #[test]
    fn test_resolve_data_dir_falls_back_to_home() {
        let dir = resolve_data_dir(None, Some(PathBuf::from("/home/user"))).unwrap();
        assert_eq!(dir, PathBuf::from("/home/user/.local/share/emoji-picker"));

        // An empty XDG_DATA_HOME is treated as unset
        let dir =
            resolve_data_dir(Some(OsString::new()), Some(PathBuf::from("/home/user"))).unwrap();
        assert_eq!(dir, PathBuf::from("/home/user/.local/share/emoji-picker"));
    }

    #[test]
    fn test_resolve_data_dir_without_home() {
        let err = resolve_data_dir(None, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_first_load_downloads_then_uses_cache() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("nested").join("emoji-picker");
        let calls = Arc::new(AtomicUsize::new(0));

        let cache = CacheService::with_fetcher(data_dir.clone(), FakeFetcher::ok(SAMPLE, calls.clone()));
        assert!(!data_dir.exists());

        let dataset = cache.load().unwrap();
        assert_eq!(dataset.len(), 2);
        assert!(data_dir.is_dir());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // The body is stored verbatim
        let stored = std::fs::read_to_string(cache.dataset_path()).unwrap();
        assert_eq!(stored, SAMPLE);

        let second = CacheService::with_fetcher(data_dir, FakeFetcher::ok(SAMPLE, calls.clone()));
        let again = second.load().unwrap();
        assert_eq!(again, dataset);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_download_writes_metadata() {
        let temp = TempDir::new().unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = CacheService::with_fetcher(temp.path().to_path_buf(), FakeFetcher::ok(SAMPLE, calls));

        cache.load().unwrap();

        let metadata = cache.load_metadata().unwrap();
        assert_eq!(metadata.version, "1.0");
        let raw = std::fs::read_to_string(cache.metadata_path()).unwrap();
        assert_eq!(raw, r#"{"version":"1.0"}"#);
    }

    #[test]
    fn test_server_error_is_fetch_error() {
        let temp = TempDir::new().unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = CacheService::with_fetcher(temp.path().join("cache"), FakeFetcher::status(500, calls.clone()));

        let err = cache.load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Fetch);
        assert!(!err.to_string().is_empty());
        assert!(!cache.dataset_path().exists());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_corrupt_cache_is_parse_error_and_not_refetched() {
        let temp = TempDir::new().unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = CacheService::with_fetcher(temp.path().to_path_buf(), FakeFetcher::ok(SAMPLE, calls.clone()));

        std::fs::write(cache.dataset_path(), r#"{"😀": ["gr"#).unwrap();

        let err = cache.load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_invalid_download_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = CacheService::with_fetcher(
            temp.path().to_path_buf(),
            FakeFetcher::ok("<html>not json</html>", calls),
        );

        let err = cache.load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        // The bad body is still persisted as-is
        assert!(cache.dataset_path().exists());
    }

    #[test]
    fn test_unwritable_cache_dir_is_io_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "a file, not a directory").unwrap();

        let calls = Arc::new(AtomicUsize::new(0));
        let cache = CacheService::with_fetcher(blocker.join("emoji-picker"), FakeFetcher::ok(SAMPLE, calls.clone()));

        let err = cache.load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_load_metadata_missing_file() {
        let temp = TempDir::new().unwrap();
        let cache = CacheService::new(temp.path().to_path_buf());
        assert_eq!(cache.load_metadata().unwrap_err().kind(), ErrorKind::Io);
    }
}
