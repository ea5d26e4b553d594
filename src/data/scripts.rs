//! Sample UGC script catalogue.
//!
//! Six hand-authored scripts covering every script type and all three
//! duration buckets.

use crate::models::{DurationBucket, Scene, ScriptType, Status, UgcScript};

fn scene(start_secs: u16, end_secs: u16, direction: &str, voiceover: &str) -> Scene {
    Scene {
        start_secs,
        end_secs,
        direction: direction.to_string(),
        voiceover: voiceover.to_string(),
    }
}

/// Builds the sample UGC script list.
pub fn sample_scripts() -> Vec<UgcScript> {
    vec![
        UgcScript {
            id: "e93b1c5f72a8".to_string(),
            product: "Stoneware Pour-Over Set".to_string(),
            script_type: ScriptType::Review,
            duration: DurationBucket::Extended,
            hook: "I was today years old when I learned my dripper was ruining my coffee."
                .to_string(),
            scenes: vec![
                scene(
                    0,
                    5,
                    "Creator holds dripper up to camera, mock outrage",
                    "I was today years old when I learned my dripper was ruining my coffee.",
                ),
                scene(
                    5,
                    15,
                    "Unwraps the stoneware set on kitchen counter, taps the thick wall",
                    "This is the Hearth & Haven pour-over set. Feel that? Actual weight. \
                     It holds heat instead of dumping it.",
                ),
                scene(
                    15,
                    32,
                    "Slow pour over grounds, steam visible, close-up on bloom",
                    "Same beans as yesterday. Watch the bloom. The thick walls keep the \
                     brew temperature steady the whole pour.",
                ),
                scene(
                    32,
                    45,
                    "Sips from the matching cup, genuine pause, eyebrows up",
                    "Okay. That's noticeably sweeter. I'm not saying it's magic, I'm \
                     saying it's physics.",
                ),
                scene(
                    45,
                    55,
                    "Holds set toward camera, points at caption",
                    "If your coffee's been bitter, it might not be you. Link's below.",
                ),
            ],
            cta: "Tap the link to see the whole set. Your mornings deserve it.".to_string(),
            status: Status::Ready,
        },
        UgcScript {
            id: "a47f20d9b3e6".to_string(),
            product: "Linen Waffle Throw".to_string(),
            script_type: ScriptType::Unboxing,
            duration: DurationBucket::Standard,
            hook: "The most requested thing on my wishlist just arrived.".to_string(),
            scenes: vec![
                scene(
                    0,
                    4,
                    "Package on doorstep, creator picks it up, excited",
                    "The most requested thing on my wishlist just arrived.",
                ),
                scene(
                    4,
                    14,
                    "Opens box on bed, pulls back tissue paper, first touch",
                    "Oh. Oh, that texture. This is the waffle throw everyone kept \
                     tagging me about.",
                ),
                scene(
                    14,
                    28,
                    "Unfolds throw fully, drapes over the bed, runs hand across weave",
                    "It's bigger than I expected, and the stonewashed linen already \
                     feels broken-in. No stiff new-blanket phase.",
                ),
                scene(
                    28,
                    38,
                    "Wrapped in throw on the couch, talks to camera",
                    "Verdict after ten minutes: the group chat was right.",
                ),
            ],
            cta: "It comes in six colors. I went with Clay. Go see the rest.".to_string(),
            status: Status::Review,
        },
        UgcScript {
            id: "58cd6e12f90b".to_string(),
            product: "Cedar & Amber Soy Candle".to_string(),
            script_type: ScriptType::ProblemSolution,
            duration: DurationBucket::Standard,
            hook: "My apartment always smelled like whatever I cooked last night.".to_string(),
            scenes: vec![
                scene(
                    0,
                    7,
                    "Creator opens apartment door, wrinkles nose, dramatic",
                    "My apartment always smelled like whatever I cooked last night.",
                ),
                scene(
                    7,
                    15,
                    "Quick cuts: air freshener sprays, open windows, defeated shrug",
                    "Sprays last twenty minutes. Open windows in January? No.",
                ),
                scene(
                    15,
                    20,
                    "Sets candle on shelf, strikes match",
                    "Then I tried this one. Cedar and amber, soy wax.",
                ),
                scene(
                    20,
                    35,
                    "Time-lapse of evening, candle burning, cozy lighting",
                    "One candle, and the whole place smells like a cabin in the rain. \
                     It burns for sixty hours, so it's basically furniture now.",
                ),
                scene(
                    35,
                    42,
                    "Blows out candle, points to vessel reused as planter",
                    "And when it's done, the jar gets a second life.",
                ),
            ],
            cta: "Smell it for yourself. Link in bio before the run sells out.".to_string(),
            status: Status::Draft,
        },
        UgcScript {
            id: "31a9d84c07ef".to_string(),
            product: "Stoneware Pour-Over Set".to_string(),
            script_type: ScriptType::Tutorial,
            duration: DurationBucket::Extended,
            hook: "Here's how to make cafe-level pour-over at home in four minutes."
                .to_string(),
            scenes: vec![
                scene(
                    0,
                    5,
                    "Finished cup on counter, push-in shot",
                    "Here's how to make cafe-level pour-over at home in four minutes.",
                ),
                scene(
                    5,
                    17,
                    "Step one: rinse filter in dripper, overhead angle",
                    "Step one: rinse the filter and warm the stoneware. Thirty seconds, \
                     don't skip it.",
                ),
                scene(
                    17,
                    30,
                    "Step two: bloom pour, spiral motion, timer overlay",
                    "Step two: twice the water to grounds, thirty-second bloom. This is \
                     where the flavor hides.",
                ),
                scene(
                    30,
                    44,
                    "Step three: slow spiral pours to the top, carafe filling",
                    "Step three: slow spirals until the scale reads 300 grams. The thick \
                     walls hold your temperature for you.",
                ),
                scene(
                    44,
                    56,
                    "Pours from carafe into both cups, toasts at camera",
                    "That's it. Four minutes, two cups, zero bitterness.",
                ),
            ],
            cta: "Full set linked below. Save this for your Sunday morning.".to_string(),
            status: Status::Review,
        },
        UgcScript {
            id: "c05e7fa4619d".to_string(),
            product: "Linen Waffle Throw".to_string(),
            script_type: ScriptType::Comparison,
            duration: DurationBucket::Short,
            hook: "$20 throw versus the one everyone posts. Worth it?".to_string(),
            scenes: vec![
                scene(
                    0,
                    5,
                    "Both throws side by side on the couch, split framing",
                    "Twenty-dollar throw versus the one everyone posts. Worth it?",
                ),
                scene(
                    5,
                    14,
                    "Close-ups alternating: pilled fleece vs waffle weave, hands compare",
                    "Three washes in, the cheap one pilled. The linen one actually got \
                     softer. That's the whole trick.",
                ),
                scene(
                    14,
                    22,
                    "Creator wrapped in the linen throw, tosses the other off-screen",
                    "Breathable in summer, warm in winter. The fleece one is officially \
                     the dog's now.",
                ),
            ],
            cta: "The winner's linked below, in six colors.".to_string(),
            status: Status::Draft,
        },
        UgcScript {
            id: "76f4b8e02c31".to_string(),
            product: "Cedar & Amber Soy Candle".to_string(),
            script_type: ScriptType::Lifestyle,
            duration: DurationBucket::Short,
            hook: "6pm. Rain outside. Here's how I turn my flat into a cabin.".to_string(),
            scenes: vec![
                scene(
                    0,
                    5,
                    "Rainy window, creator lights the candle, warm lamp light",
                    "6pm. Rain outside. Here's how I turn my flat into a cabin.",
                ),
                scene(
                    5,
                    16,
                    "Slow pan: tea steeping, open book, candle flame in foreground",
                    "Cedar and amber going, tea on, phone in the other room. This is \
                     the whole routine.",
                ),
                scene(
                    16,
                    24,
                    "Creator settles into armchair, soft focus on candle",
                    "Sixty hours of this per candle, by the way. I did the math so you \
                     don't have to.",
                ),
            ],
            cta: "It's the Cedar & Amber one from Hearth & Haven. You know where the \
                  link is."
                .to_string(),
            status: Status::Exported,
        },
    ]
}
