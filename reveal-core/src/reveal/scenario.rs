use std::{
    collections::{BTreeMap, BTreeSet},
    fs::File,
    io::BufReader,
    path::Path,
};

use crate::{
    config::model::RevealConfig,
    foundation::core::InstanceId,
    foundation::error::{RevealError, RevealResult},
    reveal::stage::{Stage, TimelineEntry},
    reveal::wrapper::InlineStyle,
};

fn default_inner_height() -> f64 {
    800.0
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A scripted page: wrappers laid out at fixed document offsets plus timed window events.
pub struct Scenario {
    /// Visible window height in pixels.
    #[serde(default = "default_inner_height")]
    pub inner_height: f64,
    /// Wrappers, mounted at t=0 in declaration order.
    pub instances: Vec<ScenarioInstance>,
    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
    /// End of the replay. Defaults to the last event plus the longest duration.
    #[serde(default)]
    pub until_ms: Option<f64>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScenarioInstance {
    pub label: String,
    /// Document offset of the container's top edge.
    pub top: f64,
    #[serde(default)]
    pub config: RevealConfig,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScenarioEvent {
    pub at_ms: f64,
    pub action: ScenarioAction,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioAction {
    /// Set the window scroll position.
    Scroll { y: f64 },
    /// Change the visible window height (no scroll notification).
    Resize { inner_height: f64 },
    /// Re-run the mount effects of a labelled instance.
    Revisit(String),
    Unmount(String),
}

#[derive(Clone, Debug, serde::Serialize)]
/// Final state of one instance after a replay.
pub struct FinalState {
    pub label: String,
    pub phase: &'static str,
    pub mounted: bool,
    pub style: Option<InlineStyle>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Result of [`Scenario::replay`].
pub struct Replay {
    pub until_ms: f64,
    pub labels: BTreeMap<InstanceId, String>,
    pub timeline: Vec<TimelineEntry>,
    pub finals: Vec<FinalState>,
}

impl Replay {
    pub fn label(&self, id: InstanceId) -> &str {
        self.labels.get(&id).map(String::as_str).unwrap_or("?")
    }
}

impl Scenario {
    pub fn from_reader<R: std::io::Read>(r: R) -> RevealResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RevealError::config(format!("parse scenario JSON: {e}")))
    }

    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        serde_json::from_str(s).map_err(|e| RevealError::config(format!("parse scenario JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RevealError::config(format!("open scenario '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> RevealResult<()> {
        if !self.inner_height.is_finite() || self.inner_height < 0.0 {
            return Err(RevealError::validation(
                "inner_height must be finite and >= 0",
            ));
        }
        let mut seen = BTreeSet::new();
        for inst in &self.instances {
            if inst.label.trim().is_empty() {
                return Err(RevealError::validation("instance label must be non-empty"));
            }
            if !seen.insert(inst.label.as_str()) {
                return Err(RevealError::validation(format!(
                    "duplicate instance label '{}'",
                    inst.label
                )));
            }
            if !inst.top.is_finite() {
                return Err(RevealError::validation(format!(
                    "instance '{}' top must be finite",
                    inst.label
                )));
            }
        }
        for ev in &self.events {
            if !ev.at_ms.is_finite() || ev.at_ms < 0.0 {
                return Err(RevealError::validation("event at_ms must be finite and >= 0"));
            }
            if let ScenarioAction::Revisit(label) | ScenarioAction::Unmount(label) = &ev.action
                && !seen.contains(label.as_str())
            {
                return Err(RevealError::validation(format!(
                    "event references unknown instance '{label}'"
                )));
            }
        }
        Ok(())
    }

    fn horizon_ms(&self) -> f64 {
        if let Some(until) = self.until_ms {
            return until;
        }
        let last_event = self.events.iter().map(|e| e.at_ms).fold(0.0, f64::max);
        let longest = self
            .instances
            .iter()
            .map(|i| i.config.duration)
            .fold(0.0, f64::max);
        last_event + longest + 1.0
    }

    /// Mount every instance, play the events in time order and collect the timeline.
    #[tracing::instrument(skip(self), fields(instances = self.instances.len(), events = self.events.len()))]
    pub fn replay(&self) -> RevealResult<Replay> {
        self.validate()?;

        let mut stage: Stage<String> = Stage::new(self.inner_height);
        let mut ids = BTreeMap::new();
        let mut labels = BTreeMap::new();
        for inst in &self.instances {
            let id = stage.mount(inst.label.clone(), inst.config.clone(), inst.top);
            ids.insert(inst.label.clone(), id);
            labels.insert(id, inst.label.clone());
        }

        let mut events: Vec<&ScenarioEvent> = self.events.iter().collect();
        events.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));

        let until_ms = self.horizon_ms();
        for ev in events {
            if ev.at_ms > until_ms {
                break;
            }
            stage.advance_to(ev.at_ms);
            match &ev.action {
                ScenarioAction::Scroll { y } => stage.scroll_to(*y),
                ScenarioAction::Resize { inner_height } => {
                    stage.window_mut().set_inner_height(*inner_height)
                }
                ScenarioAction::Revisit(label) => {
                    if let Some(id) = ids.get(label) {
                        stage.revisit(*id)?;
                    }
                }
                ScenarioAction::Unmount(label) => {
                    if let Some(id) = ids.remove(label) {
                        stage.unmount(id)?;
                    } else {
                        tracing::warn!(%label, "instance already unmounted");
                    }
                }
            }
        }
        stage.advance_to(until_ms);

        let finals = self
            .instances
            .iter()
            .map(|inst| {
                let live = ids.get(&inst.label).and_then(|id| stage.get(*id));
                FinalState {
                    label: inst.label.clone(),
                    phase: live.map_or("unmounted", |w| w.phase().name()),
                    mounted: live.is_some(),
                    style: live.map(|w| w.render().style),
                }
            })
            .collect();

        Ok(Replay {
            until_ms,
            labels,
            timeline: stage.timeline().to_vec(),
            finals,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/scenario.rs"]
mod tests;
