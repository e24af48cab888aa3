use std::{fs, path::PathBuf};

use chromaplan_core::{Graph, GraphGenerator};
use rstest::fixture;
use tempfile::TempDir;

use crate::GraphStore;

pub(crate) struct StoreFixture {
    pub(crate) dir: TempDir,
    pub(crate) store: GraphStore,
}

impl StoreFixture {
    pub(crate) fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub(crate) fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("fixture file must be writable");
        path
    }
}

#[fixture]
pub(crate) fn store_fixture() -> StoreFixture {
    let dir = tempfile::tempdir().expect("temporary directory must be created");
    let store = GraphStore::new(dir.path().join("graph.json"), dir.path().join("graph.txt"));
    StoreFixture { dir, store }
}

#[fixture]
pub(crate) fn planar(#[default(40)] target: usize) -> Graph {
    GraphGenerator::new(target)
        .expect("fixture target is valid")
        .generate()
}
