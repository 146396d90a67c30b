#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use tape_history::{Entry, HistoryConfig, HistoryStore, MemoryLog};
use tempfile::TempDir;

pub fn write_history_file(lines: &[&str]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("history");
    let mut file = File::create(&path).expect("history file should be created");

    for line in lines {
        writeln!(file, "{line}").expect("line should be written");
    }

    (dir, path)
}

pub fn memory_store(lines: &[&str], config: HistoryConfig) -> (HistoryStore, MemoryLog) {
    let log = MemoryLog::with_lines(lines.iter().copied());
    let mut store = HistoryStore::with_writer(config, Box::new(log.clone()));
    store.init().expect("memory log init should succeed");
    (store, log)
}

pub fn committed(store: &HistoryStore) -> Vec<String> {
    store.entries().map(Entry::committed).map(str::to_string).collect()
}
