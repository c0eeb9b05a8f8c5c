//! Run storage API.

use crate::hash::is_valid_run_id;
use crate::types::{LabeledSnapshot, RunManifest};
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};

const MANIFEST_FILE: &str = "manifest.json";
const FINAL_FILE: &str = "final.json";
const STEPS_FILE: &str = "steps.jsonl";

#[derive(Clone, Debug)]
pub struct RunStore {
    root_dir: PathBuf,
}

impl RunStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store next to a network file, under `.flowtrace/runs`.
    pub fn for_network(network_path: &Path) -> ResultsResult<Self> {
        let network_dir = network_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "network path has no parent directory".to_string(),
            })?;
        let runs_dir = network_dir.join(".flowtrace").join("runs");
        Self::new(runs_dir)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Directory of a run; rejects IDs that could escape the store.
    fn run_dir(&self, run_id: &str) -> ResultsResult<PathBuf> {
        if !is_valid_run_id(run_id) {
            return Err(ResultsError::InvalidRunId {
                run_id: run_id.to_string(),
            });
        }
        Ok(self.root_dir.join(run_id))
    }

    pub fn has_run(&self, run_id: &str) -> bool {
        self.run_dir(run_id)
            .map(|dir| dir.join(MANIFEST_FILE).exists())
            .unwrap_or(false)
    }

    pub fn save_run(
        &self,
        manifest: &RunManifest,
        final_snapshot: &LabeledSnapshot,
        steps: &[LabeledSnapshot],
    ) -> ResultsResult<()> {
        let run_dir = self.run_dir(&manifest.run_id)?;
        fs::create_dir_all(&run_dir)?;

        let final_json = serde_json::to_string_pretty(final_snapshot)?;
        fs::write(run_dir.join(FINAL_FILE), final_json)?;

        let mut steps_content = String::new();
        for step in steps {
            let line = serde_json::to_string(step)?;
            steps_content.push_str(&line);
            steps_content.push('\n');
        }
        fs::write(run_dir.join(STEPS_FILE), steps_content)?;

        // Written last: its presence marks the run as complete.
        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(run_dir.join(MANIFEST_FILE), manifest_json)?;

        Ok(())
    }

    pub fn load_manifest(&self, run_id: &str) -> ResultsResult<RunManifest> {
        let content = self.read_run_file(run_id, MANIFEST_FILE)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_final(&self, run_id: &str) -> ResultsResult<LabeledSnapshot> {
        let content = self.read_run_file(run_id, FINAL_FILE)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_steps(&self, run_id: &str) -> ResultsResult<Vec<LabeledSnapshot>> {
        let content = self.read_run_file(run_id, STEPS_FILE)?;
        let mut steps = Vec::new();
        for line in content.lines() {
            if !line.trim().is_empty() {
                let step: LabeledSnapshot = serde_json::from_str(line)?;
                steps.push(step);
            }
        }
        Ok(steps)
    }

    /// Runs stored for a network, most recent first.
    pub fn list_runs(&self, network_name: &str) -> ResultsResult<Vec<RunManifest>> {
        let mut runs = Vec::new();

        if !self.root_dir.exists() {
            return Ok(runs);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let run_id = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&run_id) {
                    if manifest.network_name == network_name {
                        runs.push(manifest);
                    }
                }
            }
        }

        runs.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(runs)
    }

    pub fn delete_run(&self, run_id: &str) -> ResultsResult<()> {
        let run_dir = self.run_dir(run_id)?;
        if run_dir.exists() {
            fs::remove_dir_all(run_dir)?;
        }
        Ok(())
    }

    fn read_run_file(&self, run_id: &str, file: &str) -> ResultsResult<String> {
        let path = self.run_dir(run_id)?.join(file);
        if !path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }
        Ok(fs::read_to_string(path)?)
    }
}
