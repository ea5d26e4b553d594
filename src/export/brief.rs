//! Plain-text brief templates for the gallery's copy action.
//!
//! Both formatters are deterministic string templates over the record's
//! visible fields; the output is what lands on the system clipboard.

use crate::models::{AdVariation, UgcScript};

/// Formats an ad variation as a plain-text brief.
#[must_use]
pub fn format_ad_brief(ad: &AdVariation) -> String {
    let limits = ad.platform.char_limits();
    format!(
        "AD BRIEF - {product} ({sku})\n\
         Platform: {platform}\n\
         Angle: {angle}\n\
         Status: {status}\n\
         \n\
         Headline ({hc}/{hl}): {headline}\n\
         Body ({bc}/{bl}): {body}\n\
         Description ({dc}/{dl}): {description}\n\
         CTA: {cta}\n\
         \n\
         Created: {created}\n",
        product = ad.product,
        sku = ad.sku,
        platform = ad.platform,
        angle = ad.angle,
        status = ad.status,
        hc = ad.headline_chars,
        hl = limits.headline,
        headline = ad.headline,
        bc = ad.body_chars,
        bl = limits.body,
        body = ad.body,
        dc = ad.description_chars,
        dl = limits.description,
        description = ad.description,
        cta = ad.cta,
        created = ad.created,
    )
}

/// Formats a UGC script as a plain-text brief.
#[must_use]
pub fn format_script_brief(script: &UgcScript) -> String {
    let mut out = format!(
        "UGC SCRIPT - {product}\n\
         Type: {script_type}\n\
         Target: {duration}\n\
         Status: {status}\n\
         \n\
         HOOK: {hook}\n\
         \n",
        product = script.product,
        script_type = script.script_type,
        duration = script.duration,
        status = script.status,
        hook = script.hook,
    );

    for (i, scene) in script.scenes.iter().enumerate() {
        out.push_str(&format!(
            "SCENE {n} [{ts}]\n  {direction}\n  VO: {voiceover}\n",
            n = i + 1,
            ts = scene.timestamp(),
            direction = scene.direction,
            voiceover = scene.voiceover,
        ));
    }

    out.push_str(&format!("\nCTA: {}\n", script.cta));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleData;

    #[test]
    fn test_ad_brief_contains_all_visible_fields() {
        let data = SampleData::build();
        let ad = &data.ads[0];
        let brief = format_ad_brief(ad);
        assert!(brief.contains(&ad.product));
        assert!(brief.contains(&ad.sku));
        assert!(brief.contains(&ad.headline));
        assert!(brief.contains(&ad.body));
        assert!(brief.contains(&ad.cta));
        assert!(brief.contains(&format!("({}/", ad.headline_chars)));
    }

    #[test]
    fn test_script_brief_lists_every_scene() {
        let data = SampleData::build();
        let script = &data.scripts[0];
        let brief = format_script_brief(script);
        for (i, scene) in script.scenes.iter().enumerate() {
            assert!(brief.contains(&format!("SCENE {}", i + 1)));
            assert!(brief.contains(&scene.voiceover));
        }
        assert!(brief.contains(&script.hook));
        assert!(brief.contains(&script.cta));
    }

    #[test]
    fn test_briefs_are_deterministic() {
        let data = SampleData::build();
        assert_eq!(
            format_ad_brief(&data.ads[0]),
            format_ad_brief(&data.ads[0])
        );
    }
}
