//! Harm-reduction information for common substances.

use serde::Serialize;
use tracing::{debug, instrument};

const VOICE: &str = "Educatief, niet promotioneel. Blijf veilig. 🫶";

/// Static harm-reduction facts for one substance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Education {
    pub risks: &'static [&'static str],
    pub avoid_combinations: &'static [&'static str],
    pub dosage_guidance: &'static str,
    pub aftercare: &'static [&'static str],
    pub emergency_signs: &'static [&'static str],
}

/// The response for a known substance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrugInfo {
    pub substance: String,
    pub education: Education,
    pub voice: &'static str,
}

static SUBSTANCES: &[(&str, Education)] = &[
    (
        "alcohol",
        Education {
            risks: &["uitdroging", "coördinatieverlies", "blackouts"],
            avoid_combinations: &["paracetamol in hoge dosis", "benzodiazepines"],
            dosage_guidance: "Max ~10 eenheden/week; bij 1 avond: 2–4 rustig aan",
            aftercare: &["water + elektrolyten", "slaap", "licht eten"],
            emergency_signs: &["aanhoudend braken", "bewustzijnsverlies", "ernstige buikpijn"],
        },
    ),
    (
        "mdma",
        Education {
            risks: &["oververhitting", "hyponatriëmie", "serotoninesyndroom"],
            avoid_combinations: &["ssri/snri", "maoi", "cocaïne", "ghb"],
            dosage_guidance: "Laag: 1–1.5 mg/kg (max 100mg), nooit bijdoseren <3u",
            aftercare: &["cooldown", "water maar niet overhydreren", "vit C", "rust"],
            emergency_signs: &["hoge temp + verwardheid", "aanhoudende hartkloppingen"],
        },
    ),
    (
        "cocaine",
        Education {
            risks: &["hartritmestoornissen", "angst/paniek", "neusschade"],
            avoid_combinations: &["alcohol (coca-ethyleen)", "mdma", "ketamine"],
            dosage_guidance: "Vermijd binges; lange pauzes; niet delen (hygiëne)",
            aftercare: &["hydratatie", "zoutspoeling neus", "rust"],
            emergency_signs: &["druk op borst", "flauwvallen", "ernstige hoofdpijn"],
        },
    ),
    (
        "cannabis",
        Education {
            risks: &["angst/paranoia", "reactietijd omlaag", "misselijkheid (CHS)"],
            avoid_combinations: &["alcohol (versterkt)", "ghb"],
            dosage_guidance: "Start low, go slow (edibles: 2.5–5mg THC)",
            aftercare: &["water", "suiker bij duizeligheid", "rustig ademhalen"],
            emergency_signs: &["hevige paniek > 1u", "aanhoudend braken"],
        },
    ),
];

/// Names of every substance with harm-reduction information.
pub fn known_substances() -> impl Iterator<Item = &'static str> {
    SUBSTANCES.iter().map(|(name, _)| *name)
}

/// Looks up a substance by name, ignoring case and surrounding whitespace.
#[instrument]
pub fn lookup(substance: &str) -> Option<DrugInfo> {
    let key = substance.trim().to_lowercase();

    let Some((_, education)) = SUBSTANCES.iter().find(|(name, _)| *name == key) else {
        let known: Vec<_> = known_substances().collect();
        debug!("Unknown substance `{key}`; known substances are {known:?}.");
        return None;
    };

    Some(DrugInfo {
        substance: key,
        education: *education,
        voice: VOICE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_normalizes_key() {
        let info = lookup("  MDMA ").unwrap();

        assert_eq!(info.substance, "mdma");
        assert!(info.education.risks.contains(&"serotoninesyndroom"));
        assert_eq!(info.voice, VOICE);
    }

    #[test]
    fn test_unknown_substance() {
        assert!(lookup("ketamine").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_every_known_substance_is_complete() {
        let names: Vec<_> = known_substances().collect();
        assert_eq!(names, vec!["alcohol", "mdma", "cocaine", "cannabis"]);

        for name in names {
            let info = lookup(name).unwrap();

            assert!(!info.education.risks.is_empty(), "{name}");
            assert!(!info.education.avoid_combinations.is_empty(), "{name}");
            assert!(!info.education.dosage_guidance.is_empty(), "{name}");
            assert!(!info.education.aftercare.is_empty(), "{name}");
            assert!(!info.education.emergency_signs.is_empty(), "{name}");
        }
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(lookup("alcohol").unwrap()).unwrap();

        assert_eq!(value["substance"], "alcohol");
        assert_eq!(value["education"]["emergency_signs"][2], "ernstige buikpijn");
        assert_eq!(value["education"]["dosage_guidance"], "Max ~10 eenheden/week; bij 1 avond: 2–4 rustig aan");
    }
}
