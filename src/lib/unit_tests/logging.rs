// SPDX-License-Identifier: Apache-2.0

use crate::{ErrorKind, NetmanLogLevel};

#[test]
fn test_log_level_increase_saturate() {
    assert_eq!(NetmanLogLevel::Warn.increase(1), NetmanLogLevel::Info);
    assert_eq!(NetmanLogLevel::Info.increase(5), NetmanLogLevel::Trace);
    assert_eq!(
        log::LevelFilter::from(NetmanLogLevel::Debug),
        log::LevelFilter::Debug
    );
    assert_eq!(NetmanLogLevel::from(log::Level::Warn), NetmanLogLevel::Warn);
}

#[test]
fn test_log_level_from_str() {
    assert_eq!(
        "DEBUG".parse::<NetmanLogLevel>().unwrap(),
        NetmanLogLevel::Debug
    );

    let result = "verbose".parse::<NetmanLogLevel>();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
}
