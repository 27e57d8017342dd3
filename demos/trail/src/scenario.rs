//! Scenarios loaded from YAML.
//!
//! ```yaml
//! config:
//!   gravity: 1000.0
//!   singularity: skip       # or reject, or !clamp { min_distance: 1.0 }
//!
//! time: 0.0
//!
//! bodies:
//!   - position: [-100.0, 0.0]
//!     velocity: [0.0, -1.1]
//!   - position: [0.0, 250.0]
//!     launch:               # velocity given as a drag gesture
//!       from: [0.0, 250.0]
//!       to: [-20.0, 250.0]
//! ```

use anyhow::{Context, Result};
use orrery::prelude::*;
use serde::Deserialize;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A drag gesture, converted to a velocity with the configured launch scale.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub from: DVec2,
    pub to: DVec2,
}

/// Initial state of one body.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyScenario {
    pub position: DVec2,
    #[serde(default)]
    pub velocity: DVec2,
    #[serde(default)]
    pub launch: Option<Launch>,
}

/// Top-level scenario.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Scenario {
    #[serde(default)]
    pub config: Config,
    #[serde(default)]
    pub time: f64,
    pub bodies: Vec<BodyScenario>,
}

impl Default for Scenario {
    fn default() -> Self {
        let body = |x, y, vx, vy| BodyScenario {
            position: DVec2::new(x, y),
            velocity: DVec2::new(vx, vy),
            launch: None,
        };

        Self {
            config: Config::default(),
            time: 0.0,
            bodies: vec![
                body(-100.0, 0.0, 0.0, -1.1),
                body(100.0, 0.0, 0.0, 1.1),
                body(0.0, 250.0, -1.0, 0.0),
            ],
        }
    }
}

impl Scenario {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        let reader = BufReader::new(file);
        let scenario = serde_yaml::from_reader(reader)
            .with_context(|| format!("invalid scenario {}", path.display()))?;

        Ok(scenario)
    }

    /// Places every body the way a user dragging them around would.
    pub fn build(&self) -> Result<Simulation> {
        let mut simulation = Simulation::with_config(self.bodies.len(), self.time, self.config);

        for (index, body) in self.bodies.iter().enumerate() {
            simulation.place_body(index, body.position)?;
            match body.launch {
                Some(Launch { from, to }) => simulation.launch_body(index, from, to)?,
                None => {
                    if let Some(live) = simulation.body_mut(index) {
                        live.velocity = body.velocity;
                    }
                }
            }
        }

        Ok(simulation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery::config::Singularity;

    #[test]
    fn parses_yaml() {
        let yaml = r#"
config:
  gravity: 10.0
  singularity: !clamp { min_distance: 2.0 }
bodies:
  - position: [1.0, 2.0]
  - position: [3.0, 4.0]
    velocity: [0.5, 0.0]
  - position: [0.0, 0.0]
    launch:
      from: [0.0, 0.0]
      to: [20.0, -40.0]
"#;
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(scenario.config.gravity, 10.0);
        assert_eq!(
            scenario.config.singularity,
            Singularity::Clamp { min_distance: 2.0 }
        );
        assert_eq!(scenario.config.launch_scale, Config::default().launch_scale);
        assert_eq!(scenario.time, 0.0);

        let simulation = scenario.build().unwrap();
        let bodies = simulation.bodies();
        assert_eq!(bodies[0].position, DVec2::new(1.0, 2.0));
        assert_eq!(bodies[0].velocity, DVec2::ZERO);
        assert_eq!(bodies[1].velocity, DVec2::new(0.5, 0.0));
        assert_eq!(bodies[2].velocity, DVec2::new(1.0, -2.0));
    }

    #[test]
    fn unit_policies_are_plain_strings() {
        let scenario: Scenario =
            serde_yaml::from_str("config:\n  singularity: reject\nbodies: []\n").unwrap();

        assert_eq!(scenario.config.singularity, Singularity::Reject);
        assert_eq!(scenario.config.gravity, Config::default().gravity);
    }

    #[test]
    fn default_scenario_builds() {
        let simulation = Scenario::default().build().unwrap();

        assert_eq!(simulation.len(), 3);
        assert_eq!(simulation.time(), 0.0);
        assert!(simulation.predict(DEFAULT_TRAIL_LEN).is_ok());
    }

    #[test]
    fn bundled_scenarios_parse() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios");

        for name in ["three_body.yaml", "collision.yaml"] {
            let scenario = Scenario::from_path(&dir.join(name)).unwrap();
            assert!(scenario.build().is_ok(), "{name}");
        }
    }

    #[test]
    fn missing_file() {
        let error = Scenario::from_path(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(error.to_string().contains("cannot open"));
    }
}
