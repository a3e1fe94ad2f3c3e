//! Simulation parameters and their JSON representation.
//!
//! Parameters arrive as a loose `serde_json::Value` object (from the CLI, a
//! saved [`Seed`](crate::Seed), or an embedding host). Missing or mistyped
//! keys fall back to the defaults, which reproduce the classic iron filings
//! look. Range checking happens in [`SimParams::validate`].

use crate::error::SimError;
use crate::particle::StirPolicy;
use crate::tint::Tint;
use serde_json::{json, Value};

pub const DEFAULT_MAGNET_COUNT: usize = 5;
pub const DEFAULT_PARTICLE_COUNT: usize = 2000;
/// Distance between the north and south sample points of a magnet.
pub const DEFAULT_POLE_SEPARATION: f64 = 60.0;
/// Inverse-square gain shared by both poles.
pub const DEFAULT_MAGNET_STRENGTH: f64 = 100.0;
/// Distance floor; keeps the force finite near a pole.
pub const DEFAULT_MIN_DISTANCE: f64 = 5.0;
/// Distance ceiling; every particle feels every magnet at least this much.
pub const DEFAULT_MAX_DISTANCE: f64 = 100.0;
pub const DEFAULT_PHASE_STEP: f64 = 0.005;
pub const DEFAULT_ANGLE_STEP: f64 = 0.01;
/// Initial noise phases are drawn from [0, phase_range).
pub const DEFAULT_PHASE_RANGE: f64 = 1000.0;
pub const DEFAULT_MAX_SPEED: f64 = 8.0;
pub const DEFAULT_DAMPING: f64 = 0.95;
/// Each initial velocity component is drawn from [-initial_speed, initial_speed).
pub const DEFAULT_INITIAL_SPEED: f64 = 1.0;
pub const DEFAULT_RESET_INTERVAL: u64 = 600;
pub const DEFAULT_RESET_PROBABILITY: f64 = 0.1;

/// Every tunable of the simulation.
///
/// [`Default`] gives 5 magnets, 2000 particles and the constants above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    pub magnet_count: usize,
    pub particle_count: usize,
    pub pole_separation: f64,
    pub magnet_strength: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    pub phase_step: f64,
    pub angle_step: f64,
    pub phase_range: f64,
    pub max_speed: f64,
    pub damping: f64,
    pub initial_speed: f64,
    /// Frames between stir rolls. 0 disables stirring.
    pub reset_interval: u64,
    pub reset_probability: f64,
    pub tint: Tint,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            magnet_count: DEFAULT_MAGNET_COUNT,
            particle_count: DEFAULT_PARTICLE_COUNT,
            pole_separation: DEFAULT_POLE_SEPARATION,
            magnet_strength: DEFAULT_MAGNET_STRENGTH,
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
            phase_step: DEFAULT_PHASE_STEP,
            angle_step: DEFAULT_ANGLE_STEP,
            phase_range: DEFAULT_PHASE_RANGE,
            max_speed: DEFAULT_MAX_SPEED,
            damping: DEFAULT_DAMPING,
            initial_speed: DEFAULT_INITIAL_SPEED,
            reset_interval: DEFAULT_RESET_INTERVAL,
            reset_probability: DEFAULT_RESET_PROBABILITY,
            tint: Tint::IRON,
        }
    }
}

impl SimParams {
    /// Reads parameters from a JSON object, falling back to defaults for
    /// missing or mistyped keys, then validates the result.
    ///
    /// A `tint` key that is a string but not valid hex is an error rather
    /// than a silent fallback.
    pub fn from_json(params: &Value) -> Result<Self, SimError> {
        let tint = match params.get("tint").and_then(Value::as_str) {
            Some(hex) => Tint::from_hex(hex)?,
            None => Tint::IRON,
        };
        let parsed = Self {
            magnet_count: param_usize(params, "magnet_count", DEFAULT_MAGNET_COUNT),
            particle_count: param_usize(params, "particle_count", DEFAULT_PARTICLE_COUNT),
            pole_separation: param_f64(params, "pole_separation", DEFAULT_POLE_SEPARATION),
            magnet_strength: param_f64(params, "magnet_strength", DEFAULT_MAGNET_STRENGTH),
            min_distance: param_f64(params, "min_distance", DEFAULT_MIN_DISTANCE),
            max_distance: param_f64(params, "max_distance", DEFAULT_MAX_DISTANCE),
            phase_step: param_f64(params, "phase_step", DEFAULT_PHASE_STEP),
            angle_step: param_f64(params, "angle_step", DEFAULT_ANGLE_STEP),
            phase_range: param_f64(params, "phase_range", DEFAULT_PHASE_RANGE),
            max_speed: param_f64(params, "max_speed", DEFAULT_MAX_SPEED),
            damping: param_f64(params, "damping", DEFAULT_DAMPING),
            initial_speed: param_f64(params, "initial_speed", DEFAULT_INITIAL_SPEED),
            reset_interval: param_u64(params, "reset_interval", DEFAULT_RESET_INTERVAL),
            reset_probability: param_f64(params, "reset_probability", DEFAULT_RESET_PROBABILITY),
            tint,
        };
        parsed.validate()?;
        Ok(parsed)
    }

    /// Checks counts and ranges. Called by `from_json` and by
    /// [`Simulation::new`](crate::Simulation::new).
    pub fn validate(&self) -> Result<(), SimError> {
        if self.magnet_count == 0 {
            return Err(SimError::InvalidCount {
                name: "magnet_count".into(),
            });
        }
        if self.particle_count == 0 {
            return Err(SimError::InvalidCount {
                name: "particle_count".into(),
            });
        }

        let finite = [
            ("pole_separation", self.pole_separation),
            ("magnet_strength", self.magnet_strength),
            ("min_distance", self.min_distance),
            ("max_distance", self.max_distance),
            ("phase_step", self.phase_step),
            ("angle_step", self.angle_step),
            ("phase_range", self.phase_range),
            ("max_speed", self.max_speed),
            ("damping", self.damping),
            ("initial_speed", self.initial_speed),
            ("reset_probability", self.reset_probability),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimError::param(name, "must be finite"));
        }

        let non_negative = [
            ("pole_separation", self.pole_separation),
            ("magnet_strength", self.magnet_strength),
            ("phase_step", self.phase_step),
            ("phase_range", self.phase_range),
            ("initial_speed", self.initial_speed),
        ];
        if let Some((name, _)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(SimError::param(name, "must not be negative"));
        }

        if self.min_distance <= 0.0 {
            return Err(SimError::param("min_distance", "must be positive"));
        }
        if self.max_distance < self.min_distance {
            return Err(SimError::param(
                "max_distance",
                format!("must be at least min_distance ({})", self.min_distance),
            ));
        }
        if self.max_speed <= 0.0 {
            return Err(SimError::param("max_speed", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SimError::param("damping", "must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.reset_probability) {
            return Err(SimError::param("reset_probability", "must be within [0, 1]"));
        }
        Ok(())
    }

    pub fn stir_policy(&self) -> StirPolicy {
        StirPolicy {
            interval: self.reset_interval,
            probability: self.reset_probability,
        }
    }

    /// Current values as a JSON object, keyed like `from_json` expects.
    pub fn to_json(&self) -> Value {
        json!({
            "magnet_count": self.magnet_count,
            "particle_count": self.particle_count,
            "pole_separation": self.pole_separation,
            "magnet_strength": self.magnet_strength,
            "min_distance": self.min_distance,
            "max_distance": self.max_distance,
            "phase_step": self.phase_step,
            "angle_step": self.angle_step,
            "phase_range": self.phase_range,
            "max_speed": self.max_speed,
            "damping": self.damping,
            "initial_speed": self.initial_speed,
            "reset_interval": self.reset_interval,
            "reset_probability": self.reset_probability,
            "tint": self.tint.to_hex(),
        })
    }

    /// Schema describing every parameter: type, default, range, description.
    pub fn param_schema() -> Value {
        json!({
            "magnet_count": {
                "type": "integer",
                "default": DEFAULT_MAGNET_COUNT,
                "min": 1,
                "description": "Number of invisible wandering magnets"
            },
            "particle_count": {
                "type": "integer",
                "default": DEFAULT_PARTICLE_COUNT,
                "min": 1,
                "description": "Number of iron particles"
            },
            "pole_separation": {
                "type": "number",
                "default": DEFAULT_POLE_SEPARATION,
                "min": 0.0,
                "max": 500.0,
                "description": "Distance between a magnet's north and south poles"
            },
            "magnet_strength": {
                "type": "number",
                "default": DEFAULT_MAGNET_STRENGTH,
                "min": 0.0,
                "max": 1000.0,
                "description": "Inverse-square gain of each pole"
            },
            "min_distance": {
                "type": "number",
                "default": DEFAULT_MIN_DISTANCE,
                "min": 0.1,
                "max": 100.0,
                "description": "Distance floor used in the inverse-square law"
            },
            "max_distance": {
                "type": "number",
                "default": DEFAULT_MAX_DISTANCE,
                "min": 0.1,
                "max": 1000.0,
                "description": "Distance ceiling used in the inverse-square law"
            },
            "phase_step": {
                "type": "number",
                "default": DEFAULT_PHASE_STEP,
                "min": 0.0,
                "max": 0.1,
                "description": "Noise phase advance per frame; controls magnet speed"
            },
            "angle_step": {
                "type": "number",
                "default": DEFAULT_ANGLE_STEP,
                "min": -0.5,
                "max": 0.5,
                "description": "Magnet rotation per frame in radians"
            },
            "phase_range": {
                "type": "number",
                "default": DEFAULT_PHASE_RANGE,
                "min": 0.0,
                "description": "Initial noise phases are drawn from [0, phase_range)"
            },
            "max_speed": {
                "type": "number",
                "default": DEFAULT_MAX_SPEED,
                "min": 0.1,
                "max": 100.0,
                "description": "Particle speed ceiling"
            },
            "damping": {
                "type": "number",
                "default": DEFAULT_DAMPING,
                "min": 0.0,
                "max": 1.0,
                "description": "Velocity multiplier applied after each move"
            },
            "initial_speed": {
                "type": "number",
                "default": DEFAULT_INITIAL_SPEED,
                "min": 0.0,
                "max": 100.0,
                "description": "Bound on each initial velocity component"
            },
            "reset_interval": {
                "type": "integer",
                "default": DEFAULT_RESET_INTERVAL,
                "min": 0,
                "description": "Frames between stir rolls (0 disables stirring)"
            },
            "reset_probability": {
                "type": "number",
                "default": DEFAULT_RESET_PROBABILITY,
                "min": 0.0,
                "max": 1.0,
                "description": "Chance that a particle is respawned on a stir frame"
            },
            "tint": {
                "type": "string",
                "default": Tint::IRON.to_hex(),
                "description": "Particle color as #rrggbbaa"
            }
        })
    }
}

fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

fn param_u64(params: &Value, name: &str, default: u64) -> u64 {
    params.get(name).and_then(Value::as_u64).unwrap_or(default)
}

fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_look() {
        let p = SimParams::default();
        assert_eq!(p.magnet_count, 5);
        assert_eq!(p.particle_count, 2000);
        assert_eq!(p.pole_separation, 60.0);
        assert_eq!(p.magnet_strength, 100.0);
        assert_eq!((p.min_distance, p.max_distance), (5.0, 100.0));
        assert_eq!(p.max_speed, 8.0);
        assert_eq!(p.damping, 0.95);
        assert_eq!(p.reset_interval, 600);
        assert_eq!(p.reset_probability, 0.1);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn from_json_uses_defaults_for_empty_object() {
        let p = SimParams::from_json(&json!({})).unwrap();
        assert_eq!(p, SimParams::default());
    }

    #[test]
    fn from_json_ignores_non_object_input() {
        let p = SimParams::from_json(&json!("not an object")).unwrap();
        assert_eq!(p, SimParams::default());
    }

    #[test]
    fn from_json_extracts_custom_values() {
        let p = SimParams::from_json(&json!({
            "magnet_count": 2,
            "particle_count": 50,
            "damping": 0.9,
            "reset_interval": 30,
            "reset_probability": 1,
            "tint": "#ff000080",
        }))
        .unwrap();
        assert_eq!(p.magnet_count, 2);
        assert_eq!(p.particle_count, 50);
        assert_eq!(p.damping, 0.9);
        assert_eq!(p.reset_interval, 30);
        assert_eq!(p.reset_probability, 1.0);
        assert_eq!(p.tint, Tint::rgba(255, 0, 0, 128));
    }

    #[test]
    fn from_json_falls_back_on_wrong_types() {
        let p = SimParams::from_json(&json!({
            "magnet_count": "many",
            "particle_count": -3,
            "max_speed": null,
            "reset_interval": 2.5,
            "tint": 7,
        }))
        .unwrap();
        assert_eq!(p, SimParams::default());
    }

    #[test]
    fn from_json_rejects_unparsable_tint() {
        let err = SimParams::from_json(&json!({"tint": "#zzzzzz"})).unwrap_err();
        assert!(matches!(err, SimError::InvalidColor(_)));
    }

    #[test]
    fn from_json_rejects_out_of_range_values() {
        assert!(SimParams::from_json(&json!({"damping": 1.5})).is_err());
        assert!(SimParams::from_json(&json!({"magnet_count": 0})).is_err());
    }

    #[test]
    fn validate_rejects_zero_counts() {
        let p = SimParams {
            particle_count: 0,
            ..SimParams::default()
        };
        assert!(matches!(
            p.validate(),
            Err(SimError::InvalidCount { name }) if name == "particle_count"
        ));
    }

    #[test]
    fn validate_rejects_bad_distances() {
        let floor = SimParams {
            min_distance: 0.0,
            ..SimParams::default()
        };
        assert!(floor.validate().is_err());
        let inverted = SimParams {
            min_distance: 50.0,
            max_distance: 10.0,
            ..SimParams::default()
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_and_out_of_range() {
        let cases = [
            SimParams {
                magnet_strength: f64::NAN,
                ..SimParams::default()
            },
            SimParams {
                max_speed: 0.0,
                ..SimParams::default()
            },
            SimParams {
                reset_probability: -0.1,
                ..SimParams::default()
            },
            SimParams {
                phase_step: -0.01,
                ..SimParams::default()
            },
        ];
        for p in cases {
            assert!(p.validate().is_err(), "accepted {p:?}");
        }
    }

    #[test]
    fn negative_strength_is_rejected_like_schema_minimum() {
        let err = SimParams::from_json(&json!({"magnet_strength": -1.0})).unwrap_err();
        assert!(err.to_string().contains("magnet_strength"), "got {err}");
        assert_eq!(SimParams::param_schema()["magnet_strength"]["min"], 0.0);
        let off = SimParams {
            magnet_strength: 0.0,
            ..SimParams::default()
        };
        assert!(off.validate().is_ok());
    }

    #[test]
    fn to_json_round_trips_through_from_json() {
        let p = SimParams {
            magnet_count: 3,
            angle_step: -0.02,
            tint: Tint::rgba(1, 2, 3, 4),
            ..SimParams::default()
        };
        assert_eq!(SimParams::from_json(&p.to_json()).unwrap(), p);
    }

    #[test]
    fn stir_policy_mirrors_reset_fields() {
        let p = SimParams::default();
        let policy = p.stir_policy();
        assert_eq!(policy.interval, 600);
        assert_eq!(policy.probability, 0.1);
    }

    #[test]
    fn param_schema_covers_every_json_key() {
        let schema = SimParams::param_schema();
        let values = SimParams::default().to_json();
        for key in values.as_object().unwrap().keys() {
            let entry = &schema[key.as_str()];
            assert!(entry.get("type").is_some(), "{key} missing 'type'");
            assert!(entry.get("default").is_some(), "{key} missing 'default'");
            assert!(
                entry.get("description").is_some(),
                "{key} missing 'description'"
            );
        }
    }

    #[test]
    fn param_usize_handles_integers_only() {
        let params = json!({"a": 42, "b": 2.5, "c": -1});
        assert_eq!(param_usize(&params, "a", 0), 42);
        assert_eq!(param_usize(&params, "b", 9), 9);
        assert_eq!(param_usize(&params, "c", 5), 5);
        assert_eq!(param_usize(&params, "missing", 7), 7);
    }
}
