// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn fake_config_lifecycle() {
    let store = FakeConfigStore::new();
    assert!(matches!(store.load().await, Err(ConfigError::Unreadable(_))));

    store.set_config("/data", 5);
    let config = store.load().await.unwrap();
    assert_eq!(config.target_path(), "/data");
    assert_eq!(config.check_frequency_minutes(), 5);

    store.set_contents("tiny");
    assert!(matches!(
        store.load().await,
        Err(ConfigError::TooSmall { len: 4 })
    ));

    store.remove();
    assert!(store.load().await.is_err());
    assert_eq!(store.load_count(), 4);
}

#[tokio::test]
async fn fake_config_escapes_windows_paths() {
    let store = FakeConfigStore::with_config(r"C:\data", 5);
    let config = store.load().await.unwrap();
    assert_eq!(config.target_path(), r"C:\data");
}
