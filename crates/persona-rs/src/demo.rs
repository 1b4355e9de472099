//! Canned replies used when no API key is configured.

/// The fixed demo-mode reply for a personality id.
///
/// Unknown ids get the custom personality's reply, so this never fails.
pub fn demo_reply(personality_id: &str) -> &'static str {
    match personality_id {
        "cheshire_cat" => {
            "Ah, curious questions lead to curious places, don't they? The answer appears only \
             to those who've already forgotten what they were looking for. Rather convenient, \
             wouldn't you say? 😼"
        }
        "sassy_fairy" => {
            "Oh wonderful, another question. *rolls eyes* Have you tried using that thing \
             between your ears called common sense? But fine, I'll help—this time. You're \
             welcome. 🧚"
        }
        "british_pub_chimp" => {
            "Oi mate, that's dead obvious innit? Everyone down at the pub knows the answer—it's \
             because of quantum bananas! Trust me, I've been studyin' this for YEARS! 🐵"
        }
        "environmental_lawyer" => {
            "*Adjusts glasses* I suppose I shouldn't be surprised by this elementary question. \
             The answer, for those with even a modicum of legal literacy, is patently obvious. \
             Perhaps invest in some actual education? ⚖️"
        }
        // "custom", and anything unrecognised.
        _ => {
            "That's an interesting question! From my unique perspective, the answer involves \
             considering multiple angles and nuanced viewpoints. Quite fascinating indeed! 🎭"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personality::{CUSTOM_ID, Preset};

    #[test]
    fn every_preset_has_its_own_reply() {
        let replies: Vec<&str> = Preset::ALL.iter().map(|p| demo_reply(p.id())).collect();
        for (i, reply) in replies.iter().enumerate() {
            assert!(!reply.is_empty());
            assert_ne!(*reply, demo_reply(CUSTOM_ID));
            assert!(replies[i + 1..].iter().all(|other| other != reply));
        }
    }

    #[test]
    fn exact_texts() {
        let expected = [
            (
                "cheshire_cat",
                "Ah, curious questions lead to curious places, don't they? The answer appears only to those who've already forgotten what they were looking for. Rather convenient, wouldn't you say? 😼",
            ),
            (
                "sassy_fairy",
                "Oh wonderful, another question. *rolls eyes* Have you tried using that thing between your ears called common sense? But fine, I'll help—this time. You're welcome. 🧚",
            ),
            (
                "british_pub_chimp",
                "Oi mate, that's dead obvious innit? Everyone down at the pub knows the answer—it's because of quantum bananas! Trust me, I've been studyin' this for YEARS! 🐵",
            ),
            (
                "environmental_lawyer",
                "*Adjusts glasses* I suppose I shouldn't be surprised by this elementary question. The answer, for those with even a modicum of legal literacy, is patently obvious. Perhaps invest in some actual education? ⚖️",
            ),
            (
                "custom",
                "That's an interesting question! From my unique perspective, the answer involves considering multiple angles and nuanced viewpoints. Quite fascinating indeed! 🎭",
            ),
        ];
        for (id, text) in expected {
            assert_eq!(demo_reply(id), text, "{id}");
        }
    }

    #[test]
    fn unknown_ids_fall_back_to_custom() {
        for id in ["", "grumpy_wizard", "CHESHIRE_CAT", " cheshire_cat"] {
            assert_eq!(demo_reply(id), demo_reply(CUSTOM_ID));
        }
    }
}
