//! Test helpers for staging request files in temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// A temporary directory with a conventional request path inside it.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn request_path(&self) -> Utf8PathBuf {
        self.path("request.json")
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

pub(super) fn write_json(path: &Utf8Path, body: &Value) {
    let payload = serde_json::to_string_pretty(body).expect("serialize fixture");
    write_utf8(path, payload.as_bytes());
}

/// Three jobs along the equator, supplied out of driving order.
pub(super) fn equator_request() -> Value {
    json!({
        "worker_lat": 0.0,
        "worker_lng": 0.0,
        "jobs": [
            { "id": "J1", "job_title": "Boiler service", "location": { "lat": 0.0, "lng": 1.0 } },
            { "id": "J2", "job_title": "Meter check", "location": { "lat": 0.0, "lng": 0.5 } },
            { "id": "J3", "job_title": "Leak repair", "location": { "lat": 0.0, "lng": 2.0 } }
        ]
    })
}
