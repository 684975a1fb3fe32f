//! Hangover recovery plan.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::base::types::{InvalidInput, ensure_in_range};

/// Hydration baseline per kilogram of body weight.
const ML_PER_KG: f64 = 35.0;
/// Hydration baseline when no weight is given.
const DEFAULT_BASE_ML: f64 = 2000.0;
/// Extra hydration per severity level (1 through 5).
const SEVERITY_BUMP_ML: [f64; 5] = [0.0, 250.0, 500.0, 750.0, 1000.0];

const HIGH_HEART_RATE: u16 = 110;
const LOW_HEART_RATE: u16 = 50;

const SCHEDULE: &[ScheduleEntry] = &[
    ScheduleEntry { time: "Now", action: "Drink 500ml water 💧" },
    ScheduleEntry { time: "+60 min", action: "Drink 300ml water + snack (banana/toast)" },
    ScheduleEntry { time: "+120 min", action: "Electrolytes or bouillon" },
    ScheduleEntry { time: "+180 min", action: "Drink 300ml water" },
];

const SUPPLEMENTS: &[Supplement] = &[
    Supplement { name: "Elektrolyten", note: "natrium/kalium aanvullen" },
    Supplement { name: "Magnesium", note: "200–400mg" },
    Supplement { name: "Gemberthee", note: "tegen misselijkheid" },
];

const TIPS: &[&str] = &[
    "Cafeïne kan je hartslag boosten – rustig aan met koffie.",
    "Magnesium 200–400mg kan spierspanning verlichten.",
    "Geen paracetamol combineren met veel alcohol in je bloed.",
    "Slaap en licht bewegen > intens sporten vandaag.",
];

const HIGH_HEART_RATE_FLAG: &str = "Je hartslag is hoog. Chill, hydrateer en overweeg rust. Bij duizeligheid of pijn op de borst: medische hulp.";
const LOW_HEART_RATE_FLAG: &str = "Onverwacht lage hartslag? Als je je beroerd voelt: laat iemand even checken.";

const VOICE: &str = "Drink nu 500ml water 💧 – je got this.";

fn default_severity() -> u8 {
    2
}

/// A request for a hangover plan.
#[derive(Debug, Clone, Deserialize)]
pub struct HangoverRequest {
    /// Body weight; must be strictly between 30 and 250 kg.
    pub weight_kg: Option<f64>,
    /// 1 = mild, 5 = severe.
    #[serde(default = "default_severity")]
    pub severity: u8,
    /// Current heart rate in beats per minute (40 through 220).
    pub include_heart_rate: Option<u16>,
}

impl HangoverRequest {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if let Some(weight) = self.weight_kg
            && !(weight > 30.0 && weight < 250.0)
        {
            return Err(InvalidInput::new("weight_kg", format!("must be greater than 30 and less than 250, got {weight}")));
        }

        ensure_in_range("severity", self.severity, 1..=5)?;

        if let Some(heart_rate) = self.include_heart_rate {
            ensure_in_range("include_heart_rate", heart_rate, 40..=220)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub time: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Supplement {
    pub name: &'static str,
    pub note: &'static str,
}

/// A hydration target with a schedule and recovery advice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HangoverPlan {
    pub target_hydration_ml: u32,
    pub schedule: &'static [ScheduleEntry],
    pub supplements: &'static [Supplement],
    pub tips: &'static [&'static str],
    pub flags: Option<&'static str>,
    pub voice: &'static str,
}

/// Builds a recovery plan for a validated request.
#[instrument(skip_all)]
pub fn plan(request: &HangoverRequest) -> HangoverPlan {
    let base_ml = match request.weight_kg {
        Some(weight) if weight > 0.0 => weight * ML_PER_KG,
        _ => DEFAULT_BASE_ML,
    };

    let severity_index = usize::from(request.severity.clamp(1, 5)) - 1;
    let target_hydration_ml = (base_ml + SEVERITY_BUMP_ML[severity_index]) as u32;

    let flags = match request.include_heart_rate {
        Some(heart_rate) if heart_rate > HIGH_HEART_RATE => Some(HIGH_HEART_RATE_FLAG),
        Some(heart_rate) if heart_rate > 0 && heart_rate < LOW_HEART_RATE => Some(LOW_HEART_RATE_FLAG),
        _ => None,
    };

    HangoverPlan {
        target_hydration_ml,
        schedule: SCHEDULE,
        supplements: SUPPLEMENTS,
        tips: TIPS,
        flags,
        voice: VOICE,
    }
}
