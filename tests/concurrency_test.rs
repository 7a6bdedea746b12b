//! Many threads sharing one logger must produce whole, separate records.

use std::thread;

use logged::{Config, Entry, Format, Log, Logger};

mod common;
use common::SharedBuf;

const THREADS: usize = 16;
const PER_THREAD: usize = 50;

fn hammer(logger: &Logger) {
    thread::scope(|s| {
        for t in 0..THREADS {
            let logger = logger.clone();
            s.spawn(move || {
                let module = logger.module("concurrency_test::worker");
                for i in 0..PER_THREAD {
                    let data = logged::data! { "thread" => t, "seq" => i };
                    if i % 2 == 0 {
                        logger.info("tick", Some(&data)).unwrap();
                    } else {
                        module.debug("tock", Some(&data)).unwrap();
                    }
                }
            });
        }
    });
}

#[test]
fn test_concurrent_json_records_do_not_interleave() {
    let buf = SharedBuf::chunked(3);
    let logger = Logger::new(Config::new(buf.clone()).debug_namespaces(["concurrency_test"]));

    hammer(&logger);

    let out = buf.contents();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    assert_eq!(buf.records(), THREADS * PER_THREAD);

    let mut seen = std::collections::HashSet::new();
    for line in lines {
        let entry: Entry<'static> = serde_json::from_str(line).expect("record was corrupted");
        seen.insert((entry.data["thread"].clone(), entry.data["seq"].clone()));
    }
    assert_eq!(seen.len(), THREADS * PER_THREAD);
}

#[test]
fn test_concurrent_text_records_do_not_interleave() {
    let buf = SharedBuf::chunked(5);
    let logger = Logger::new(
        Config::new(buf.clone())
            .format(Format::Text)
            .debug_namespaces(["concurrency_test"]),
    );

    hammer(&logger);

    let out = buf.contents();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    for line in lines {
        let ok = (line.contains("[info] tick seq=") || line.contains("[debug] tock seq="))
            && line.matches(" thread=").count() == 1;
        assert!(ok, "corrupted line: {}", line);
    }
}

#[test]
fn test_disabled_debug_under_contention_writes_nothing() {
    let buf = SharedBuf::new();
    let logger = Logger::new(Config::new(buf.clone()));

    hammer(&logger);

    // only the info half of the calls reach the sink
    assert_eq!(buf.records(), THREADS * PER_THREAD / 2);
}
