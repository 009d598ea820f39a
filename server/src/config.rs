//! Runtime configuration for the rating calculator.

use anyhow::{bail, ensure, Context};
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;

use crate::rating::model::DEFAULT_CUTOFFS;
use crate::rating::normal::MIN_STEP;
use crate::rating::{LogisticParams, Model, ModelKind, NormalCdfParams};

#[derive(Debug)]
pub struct Settings {
    /// Match weight factor when the request omits one.
    pub default_weight: u32,
    /// Model used when the request omits one.
    pub default_model: ModelKind,
    pub logistic: LogisticParams,
    pub normal: NormalCdfParams,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_weight: 40,
            default_model: ModelKind::Logistic,
            logistic: LogisticParams::default(),
            normal: NormalCdfParams::default(),
        }
    }
}

impl Settings {
    fn from_env() -> Self {
        let defaults = Settings::default();

        let default_weight = env_or("DEFAULT_WEIGHT", defaults.default_weight, |w| *w > 0);
        let default_model = env_or("DEFAULT_MODEL", defaults.default_model, |_| true);
        let scale = env_or("LOGISTIC_SCALE", defaults.logistic.scale, |s| {
            s.is_finite() && *s > 0.0
        });
        let divisor = env_or("NORMAL_DIVISOR", defaults.normal.divisor, |d| {
            d.is_finite() && *d > 0.0
        });
        let min_delta = env_or("MIN_DELTA", defaults.normal.min_delta, valid_min_delta);

        let cutoffs = match env::var("NORMAL_CUTOFFS") {
            Ok(raw) => parse_cutoffs(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring NORMAL_CUTOFFS: {e:#}");
                DEFAULT_CUTOFFS
            }),
            Err(_) => DEFAULT_CUTOFFS,
        };

        Settings {
            default_weight,
            default_model,
            logistic: LogisticParams { scale },
            normal: NormalCdfParams {
                divisor,
                cutoffs,
                min_delta,
            },
        }
    }

    /// Model of the given kind, parameterised from these settings.
    pub fn model(&self, kind: ModelKind) -> Model {
        match kind {
            ModelKind::Logistic => Model::Logistic(self.logistic),
            ModelKind::NormalCdf => Model::NormalCdf(self.normal),
        }
    }
}

/// Reads `key`, keeping `default` when unset, unparseable or rejected by `valid`.
fn env_or<T, F>(key: &str, default: T, valid: F) -> T
where
    T: FromStr,
    F: Fn(&T) -> bool,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(v) if valid(&v) => v,
            _ => {
                log::warn!("ignoring {key}={raw:?}, using default");
                default
            }
        },
        Err(_) => default,
    }
}

/// A floor below one 3-decimal step would round wins and losses to zero.
fn valid_min_delta(m: &f64) -> bool {
    m.is_finite() && *m >= MIN_STEP
}

/// Parses five comma-separated, strictly increasing z-values.
pub fn parse_cutoffs(raw: &str) -> anyhow::Result<[f64; 5]> {
    let values = raw
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .with_context(|| format!("bad cutoff {s:?}"))
        })
        .collect::<anyhow::Result<Vec<f64>>>()?;

    let cutoffs: [f64; 5] = match values.try_into() {
        Ok(c) => c,
        Err(v) => bail!("expected 5 cutoffs, got {}", v.len()),
    };
    ensure!(
        cutoffs.iter().all(|c| c.is_finite()),
        "cutoffs must be finite"
    );
    ensure!(
        cutoffs.windows(2).all(|w| w[0] < w[1]),
        "cutoffs must be strictly increasing"
    );
    Ok(cutoffs)
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
