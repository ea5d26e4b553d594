//! Sample ad variation catalogue.
//!
//! Twelve hand-authored variations (three products x four platforms) with the
//! generator's six creative angles rotated across them. Character counts were
//! taken when the copy was written and are stored alongside the text.

use crate::models::{AdVariation, Angle, Platform, Status};

/// Builds the sample ad variation list.
pub fn sample_ads() -> Vec<AdVariation> {
    vec![
        AdVariation {
            id: "4c1f9a2e77d0".to_string(),
            product: "Linen Waffle Throw".to_string(),
            sku: "HH-THR-101".to_string(),
            platform: Platform::Meta,
            angle: Angle::BenefitFocused,
            headline: "The Throw That Ends Blanket Hogging".to_string(),
            body: "Oversized waffle-knit linen that stays cool in summer and cozy in winter. \
                   One wash in, it only gets softer."
                .to_string(),
            description: "Free shipping over $75".to_string(),
            cta: "Shop Now".to_string(),
            headline_chars: 35,
            body_chars: 107,
            description_chars: 22,
            status: Status::Ready,
            created: "Jul 22".to_string(),
        },
        AdVariation {
            id: "b80de341c95a".to_string(),
            product: "Linen Waffle Throw".to_string(),
            sku: "HH-THR-101".to_string(),
            platform: Platform::Google,
            angle: Angle::ProblemSolution,
            headline: "Scratchy Throws? Never Again".to_string(),
            body: "Stonewashed linen waffle throw. Breathable, buttery-soft, built for \
                   year-round layering."
                .to_string(),
            description: "Oversized 50x70. Machine washable. Free returns for 30 days."
                .to_string(),
            cta: "Learn More".to_string(),
            headline_chars: 28,
            body_chars: 88,
            description_chars: 60,
            status: Status::Review,
            created: "Jul 22".to_string(),
        },
        AdVariation {
            id: "f125c086ab3e".to_string(),
            product: "Linen Waffle Throw".to_string(),
            sku: "HH-THR-101".to_string(),
            platform: Platform::Tiktok,
            angle: Angle::SocialProof,
            headline: "everyone keeps asking where my throw is from".to_string(),
            body: "the waffle knit that broke my fyp".to_string(),
            description: "POV: you finally own the linen throw with 40k five-star reviews. \
                          #homedecor #cozy"
                .to_string(),
            cta: "Shop Now".to_string(),
            headline_chars: 44,
            body_chars: 33,
            description_chars: 81,
            status: Status::Draft,
            created: "Jul 29".to_string(),
        },
        AdVariation {
            id: "0a9274eec1b8".to_string(),
            product: "Linen Waffle Throw".to_string(),
            sku: "HH-THR-101".to_string(),
            platform: Platform::Pinterest,
            angle: Angle::Lifestyle,
            headline: "Slow Sunday Mornings, Styled".to_string(),
            body: "Drape a stonewashed linen waffle throw over a reading chair for that \
                   collected-over-time look. Pairs with warm neutrals, rattan, and a second \
                   cup of coffee."
                .to_string(),
            description: "Linen waffle throw in six earthy colorways.".to_string(),
            cta: "Save".to_string(),
            headline_chars: 28,
            body_chars: 156,
            description_chars: 43,
            status: Status::Exported,
            created: "Jul 15".to_string(),
        },
        AdVariation {
            id: "63d8f4b1209c".to_string(),
            product: "Cedar & Amber Soy Candle".to_string(),
            sku: "HH-CND-204".to_string(),
            platform: Platform::Meta,
            angle: Angle::Urgency,
            headline: "Last Chance: Cedar & Amber Returns".to_string(),
            body: "Our fall bestseller is back for a limited run. 60-hour burn, clean soy \
                   wax, no synthetics. When it's gone, it's gone."
                .to_string(),
            description: "Limited run. 60-hr burn.".to_string(),
            cta: "Get Offer".to_string(),
            headline_chars: 34,
            body_chars: 117,
            description_chars: 24,
            status: Status::Ready,
            created: "Jul 24".to_string(),
        },
        // Headline was authored three characters over the Google limit; kept
        // in draft until the copy team shortens it.
        AdVariation {
            id: "7e51a0c3d46f".to_string(),
            product: "Cedar & Amber Soy Candle".to_string(),
            sku: "HH-CND-204".to_string(),
            platform: Platform::Google,
            angle: Angle::Curiosity,
            headline: "The Candle Boutique Hotels Won't Name".to_string(),
            body: "Guests keep asking. We finally bottled the lobby scent everyone tries \
                   to place."
                .to_string(),
            description: "Hand-poured soy. Cedar, amber, a whisper of smoke. Ships free."
                .to_string(),
            cta: "Learn More".to_string(),
            headline_chars: 37,
            body_chars: 79,
            description_chars: 62,
            status: Status::Draft,
            created: "Jul 30".to_string(),
        },
        AdVariation {
            id: "d2c6017b88e4".to_string(),
            product: "Cedar & Amber Soy Candle".to_string(),
            sku: "HH-CND-204".to_string(),
            platform: Platform::Tiktok,
            angle: Angle::Lifestyle,
            headline: "my apartment smells like a cabin now".to_string(),
            body: "cedar + amber + rainy day".to_string(),
            description: "the 60 hour burn candle that makes renters feel like cabin owners \
                          #candletok"
                .to_string(),
            cta: "Shop Now".to_string(),
            headline_chars: 36,
            body_chars: 25,
            description_chars: 76,
            status: Status::Review,
            created: "Jul 25".to_string(),
        },
        AdVariation {
            id: "91bb35fa6d02".to_string(),
            product: "Cedar & Amber Soy Candle".to_string(),
            sku: "HH-CND-204".to_string(),
            platform: Platform::Pinterest,
            angle: Angle::BenefitFocused,
            headline: "A 60-Hour Candle That Earns Its Shelf Space".to_string(),
            body: "Hand-poured soy wax with cedarwood, warm amber, and a trace of smoked \
                   vanilla. The reusable stoneware vessel works as a planter after the \
                   last burn."
                .to_string(),
            description: "Cedar & Amber soy candle, 60-hour burn.".to_string(),
            cta: "Shop".to_string(),
            headline_chars: 43,
            body_chars: 148,
            description_chars: 39,
            status: Status::Exported,
            created: "Jul 11".to_string(),
        },
        AdVariation {
            id: "ae4902d57c13".to_string(),
            product: "Stoneware Pour-Over Set".to_string(),
            sku: "HH-KIT-310".to_string(),
            platform: Platform::Meta,
            angle: Angle::ProblemSolution,
            headline: "Bitter Coffee Isn't a Personality".to_string(),
            body: "Paper-thin drippers brew fast and harsh. Thick stoneware holds heat \
                   steady for a sweeter cup. No barista course needed."
                .to_string(),
            description: "Dishwasher-safe stoneware.".to_string(),
            cta: "Learn More".to_string(),
            headline_chars: 33,
            body_chars: 119,
            description_chars: 26,
            status: Status::Review,
            created: "Jul 26".to_string(),
        },
        AdVariation {
            id: "c7f08e6a1b59".to_string(),
            product: "Stoneware Pour-Over Set".to_string(),
            sku: "HH-KIT-310".to_string(),
            platform: Platform::Google,
            angle: Angle::SocialProof,
            headline: "The 4.9-Star Pour-Over Set".to_string(),
            body: "12,000 morning rituals upgraded. Stoneware dripper, carafe, and two \
                   cups in one set."
                .to_string(),
            description: "Rated 4.9/5 by home brewers. Free shipping and 30-day returns."
                .to_string(),
            cta: "Order Today".to_string(),
            headline_chars: 26,
            body_chars: 84,
            description_chars: 62,
            status: Status::Ready,
            created: "Jul 23".to_string(),
        },
        AdVariation {
            id: "5510d9ce42a7".to_string(),
            product: "Stoneware Pour-Over Set".to_string(),
            sku: "HH-KIT-310".to_string(),
            platform: Platform::Tiktok,
            angle: Angle::Urgency,
            headline: "restock sells out every single time".to_string(),
            body: "the pour over set from that video".to_string(),
            description: "back in stock for 48 hours. last restock went in a day. \
                          #coffeetok #pourover"
                .to_string(),
            cta: "Shop Now".to_string(),
            headline_chars: 35,
            body_chars: 33,
            description_chars: 76,
            status: Status::Draft,
            created: "Jul 31".to_string(),
        },
        AdVariation {
            id: "2b8c4f71e0da".to_string(),
            product: "Stoneware Pour-Over Set".to_string(),
            sku: "HH-KIT-310".to_string(),
            platform: Platform::Pinterest,
            angle: Angle::Curiosity,
            headline: "What Slow Coffee Does to a Morning".to_string(),
            body: "There's a reason the pour-over ritual survived every coffee trend: \
                   four quiet minutes, one honest cup. A matte stoneware set that makes \
                   the wait part of the reward."
                .to_string(),
            description: "Stoneware pour-over set in matte sand.".to_string(),
            cta: "Learn More".to_string(),
            headline_chars: 34,
            body_chars: 164,
            description_chars: 38,
            status: Status::Ready,
            created: "Jul 27".to_string(),
        },
    ]
}
