//! Prompt composition for lookbook slots.
//!
//! Pure string building: the same (config, slot index) pair always yields
//! the identical instruction. All variety across a batch comes from the
//! perspective list, cycled by `index % 8`.

use crate::config::{FabricEmphasis, GenerationConfig, ModelType, ShotScale};

/// Ordered perspective clauses. A batch of 8 uses each exactly once; larger
/// indices wrap around.
pub const PERSPECTIVES: [&str; 8] = [
    "ANGLE: 0-degree eye-level, focal length 85mm, zero perspective distortion.",
    "ANGLE: 45-degree isometric turn, emphasizing garment volume and 3D depth.",
    "ANGLE: Sharp side profile, highlighting silhouette and drape physics.",
    "ANGLE: Dynamic walking stride, capturing natural movement and fabric drag.",
    "ANGLE: Low-angle (worm's eye) hero shot, emphasizing authority and scale.",
    "ANGLE: High-angle architectural, focusing on shoulder construction.",
    "ANGLE: Reverse 3/4 turn, capturing back detail and light wrap.",
    "ANGLE: Detail crop, focusing on the most intricate part of the garment.",
];

/// Descriptive clause for the selected model archetype.
///
/// Total over `ModelType`. The middle-eastern, south-asian, plus-size and
/// mature archetypes intentionally share the generic clause; that
/// fall-through is the defined behavior for them.
pub fn archetype_clause(config: &GenerationConfig) -> String {
    let term = config.gender.subject_term();

    match config.model_type {
        ModelType::None => "architectural high-end flat lay, zero human subject".to_string(),
        ModelType::Mannequin => {
            "ghost mannequin with professional structural padding".to_string()
        }
        ModelType::Asian => format!(
            "elite East Asian fashion {} model, radiant complexion, hyper-realistic skin pores",
            term
        ),
        ModelType::Western => format!(
            "top-tier Western fashion {} model, sharp facial features, editorial gaze",
            term
        ),
        ModelType::African => format!(
            "premium African fashion {} model, flawless skin texture, powerful presence",
            term
        ),
        ModelType::Latino => format!(
            "professional Latino fashion {} model, warm skin tones, vibrant energy",
            term
        ),
        ModelType::MiddleEastern
        | ModelType::SouthAsian
        | ModelType::PlusSize
        | ModelType::Mature => {
            format!("world-class professional {} fashion model", term)
        }
    }
}

/// Composition instruction for the selected shot scale.
pub fn framing_clause(shot_scale: ShotScale) -> &'static str {
    match shot_scale {
        ShotScale::FullBody => {
            "SHOT: FULL-BODY MASTER. Head to toe. Headroom: 10%, Footroom: 5%. \
             Include high-end footwear. Absolute vertical alignment."
        }
        ShotScale::CloseUp => {
            "SHOT: MACRO DETAIL. Focus on collar, buttons, and fabric weave. \
             1:1 scale texture reproduction."
        }
        ShotScale::Standard => "SHOT: STANDARD MEDIUM CROP. Waist-up to full-body transition.",
    }
}

/// Perspective clause for a zero-based slot index.
pub fn perspective_clause(slot_index: usize) -> &'static str {
    PERSPECTIVES[slot_index % PERSPECTIVES.len()]
}

/// Builds the full instruction string for one batch slot.
pub fn compose_prompt(config: &GenerationConfig, slot_index: usize) -> String {
    let texture_target = match config.fabric_detail {
        FabricEmphasis::HighDetail => "micro-fibers, thread count, and material weave",
        FabricEmphasis::Normal => "natural fabric surfaces",
    };

    format!(
        "[SYSTEM: OPTIC-PRIME PRODUCTION MODE]\n\
         GOAL: Render a commercial-grade fashion asset with pixel density exceeding 100MP physical studio capture.\n\
         \n\
         TECHNICAL PARAMETERS:\n\
         {framing}\n\
         {perspective}\n\
         SUBJECT: {archetype}.\n\
         \n\
         IMAGE FIDELITY SPECIFICATIONS:\n\
         - RAW RECONSTRUCTION: No AI hallucinations. Every stitch, texture, and color from the reference must be preserved.\n\
         - LIGHTING: 3-point professional studio setup (Key, Fill, Back), {lighting} mood. Use path-traced shadows and realistic light fall-off.\n\
         - OPTICS: Zero chromatic aberration. Emulate Phase One XF medium format camera sharpness.\n\
         - TEXTURE: Hyper-realistic rendering of {texture}.\n\
         - SKIN RENDERING: Realistic sub-surface scattering for skin. Do not airbrush; maintain natural pores and micro-textures.\n\
         \n\
         ENVIRONMENT:\n\
         - CONTEXT: {styles} professional setting.\n\
         - BOKEH: f/11 aperture for edge-to-edge sharpness across the product.\n\
         \n\
         FINAL POLISH: HDR-ready, color-calibrated (sRGB), maximum micro-contrast.",
        framing = framing_clause(config.shot_scale),
        perspective = perspective_clause(slot_index),
        archetype = archetype_clause(config),
        lighting = config.lighting.label(),
        texture = texture_target,
        styles = config.joined_styles(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Gender, LightingMood, LookbookStyle};

    #[test]
    fn test_composition_is_deterministic() {
        let config = GenerationConfig::default();
        for idx in 0..10 {
            assert_eq!(compose_prompt(&config, idx), compose_prompt(&config, idx));
        }
    }

    #[test]
    fn test_perspectives_cycle_mod_eight() {
        let picked: Vec<&str> = (0..8).map(perspective_clause).collect();
        assert_eq!(picked, PERSPECTIVES.to_vec());

        // Slots 8 and 9 reuse perspectives 0 and 1.
        assert_eq!(perspective_clause(8), PERSPECTIVES[0]);
        assert_eq!(perspective_clause(9), PERSPECTIVES[1]);
    }

    #[test]
    fn test_perspectives_are_distinct() {
        for i in 0..PERSPECTIVES.len() {
            for j in (i + 1)..PERSPECTIVES.len() {
                assert_ne!(PERSPECTIVES[i], PERSPECTIVES[j]);
            }
        }
    }

    #[test]
    fn test_flat_lay_selects_no_human_clause() {
        let config = GenerationConfig::new()
            .with_model_type(ModelType::None)
            .with_quantity(1);
        let clause = archetype_clause(&config);
        assert_eq!(clause, "architectural high-end flat lay, zero human subject");
        assert!(compose_prompt(&config, 0).contains(&clause));
    }

    #[test]
    fn test_gender_term_interpolation() {
        let config = GenerationConfig::new()
            .with_gender(Gender::Male)
            .with_model_type(ModelType::Asian);
        assert!(archetype_clause(&config).contains("man model"));

        let config = config.with_gender(Gender::Unisex);
        assert!(archetype_clause(&config).contains("fashion model model"));
    }

    #[test]
    fn test_undifferentiated_archetypes_fall_through() {
        for model_type in [
            ModelType::MiddleEastern,
            ModelType::SouthAsian,
            ModelType::PlusSize,
            ModelType::Mature,
        ] {
            let config = GenerationConfig::new().with_model_type(model_type);
            assert_eq!(
                archetype_clause(&config),
                "world-class professional woman fashion model"
            );
        }
    }

    #[test]
    fn test_framing_matches_shot_scale() {
        assert!(framing_clause(ShotScale::FullBody).contains("FULL-BODY MASTER"));
        assert!(framing_clause(ShotScale::CloseUp).contains("MACRO DETAIL"));
        assert!(framing_clause(ShotScale::Standard).contains("STANDARD MEDIUM CROP"));
    }

    #[test]
    fn test_prompt_interpolates_all_slots() {
        let mut config = GenerationConfig::new()
            .with_lighting(LightingMood::DramaticShadow)
            .with_fabric_detail(FabricEmphasis::Normal);
        config.toggle_style(LookbookStyle::Editorial);

        let prompt = compose_prompt(&config, 2);
        assert!(prompt.contains(framing_clause(config.shot_scale)));
        assert!(prompt.contains(PERSPECTIVES[2]));
        assert!(prompt.contains("dramatic shadow"));
        assert!(prompt.contains("natural fabric surfaces"));
        assert!(prompt.contains("cyclorama, editorial"));
    }
}
