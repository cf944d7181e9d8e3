#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use sampletrack::config::{Config, Credentials};
use sampletrack::db::pool::{Databases, Role, Schema};
use sampletrack::db::reference::save_site;
use sampletrack::models::sample::SampleRecord;
use sampletrack::models::sample_type::SampleType;
use sampletrack::models::site::Site;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn st() -> Command {
    cargo_bin_cmd!("sampletrack")
}

/// Isolated data directory with its own (absent) config file.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn server(&self) -> String {
        self.path().join("data").to_string_lossy().to_string()
    }

    pub fn config_file(&self) -> PathBuf {
        self.path().join("sampletrack.conf")
    }

    /// Complete configuration pointing at this workspace.
    pub fn config(&self) -> Config {
        Config {
            server: self.server(),
            viewer: Credentials {
                user: "viewer".into(),
                password: "viewer-pw".into(),
            },
            editor: Credentials {
                user: "editor".into(),
                password: "editor-pw".into(),
            },
            ..Config::default()
        }
    }

    pub fn databases(&self) -> Databases {
        Databases::from_config(&self.config())
    }

    /// Both databases created, with two sites for the default project.
    pub fn init(&self) -> Databases {
        let dbs = self.databases();
        dbs.ensure_created().expect("create databases");
        let pool = dbs.open(Schema::Reference, Role::Editor).expect("reference");
        for (id, desc) in [("SITE01", "Lake Alpha"), ("SITE02", "Bay Beta")] {
            save_site(
                &pool.conn,
                &Site {
                    siteid: id.into(),
                    description: desc.into(),
                    projectid: "MERCURY_PASSIVE".into(),
                },
            )
            .expect("save site");
        }
        dbs
    }

    /// CLI invocation bound to this workspace.
    pub fn cmd(&self) -> Command {
        let mut cmd = st();
        let config = self.config_file().to_string_lossy().to_string();
        cmd.current_dir(self.path())
            .args(["--config", config.as_str(), "--server", self.server().as_str()]);
        cmd
    }
}

/// Stored-form row with a start time.
pub fn stored(kit: &str, sampler: &str, start: &str) -> SampleRecord {
    let mut r = SampleRecord::new(kit, sampler, Some(SampleType::Sample));
    r.sample_start = Some(start.to_string());
    r
}
