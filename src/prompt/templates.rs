//! @acp:module "Stage Templates"
//! @acp:summary "Fixed prompt skeletons, one pure formatting function per funnel stage"
//! @acp:domain cli
//! @acp:layer output
//!
//! Every template takes `(product, industry, audience)` so dispatch stays
//! uniform; a template ignores the values its skeleton does not mention.

use crate::stage::StageId;

/// Pure formatting function for one stage
pub type TemplateFn = fn(&str, &str, &str) -> String;

/// Two-line instruction footer shared by every template
pub const INSTRUCTION_FOOTER: &str = "1, No explanations, no introductions, no additional text.\n\
2, Always give your top 3 recommendations where necessary";

/// Template function for a stage
pub fn template_for(stage: StageId) -> TemplateFn {
    match stage {
        StageId::Awareness => awareness,
        StageId::Interest => interest,
        StageId::Desire => desire,
        StageId::Action => action,
        StageId::FollowUp => follow_up,
        StageId::Testimonial => testimonial,
        StageId::Storyboard => storyboard,
        StageId::VoiceTone => voice_tone,
        StageId::VisualStyle => visual_style,
        StageId::Optimization => optimization,
        StageId::FullFunnel => full_funnel,
    }
}

fn with_footer(mut body: String) -> String {
    body.push_str("\n\n");
    body.push_str(INSTRUCTION_FOOTER);
    body
}

fn awareness(product: &str, _industry: &str, audience: &str) -> String {
    with_footer(format!(
        "Create a powerful Awareness Funnel Video for {product} targeting {audience}.\n\
\n\
The video should:\n\
- Start with a shocking hook or relatable pain point\n\
- Show empathy and understanding\n\
- Tease a solution (but don't reveal it fully yet)\n\
- Keep under 60 seconds\n\
\n\
Example format:\n\
- Hook (first 5 seconds): Identify the pain or frustration\n\
- Middle: Show emotional consequences of not solving it\n\
- End: Tease that a better solution exists (lead into next video)\n\
\n\
Add visual and sound direction for emotional impact."
    ))
}

fn interest(product: &str, industry: &str, _audience: &str) -> String {
    with_footer(format!(
        "Create an Interest Video that builds trust and connects emotionally with the viewer for {product} in the {industry} niche.\n\
\n\
Focus on:\n\
- Explaining the 'why' behind your product\n\
- Sharing relatable stories or mini case studies\n\
- Providing 1–2 valuable tips that position your product as the solution\n\
\n\
Include visuals showing transformation or relatable life scenes.\n\
End with a teaser for the next video: 'In the next part, I'll show you exactly how we fixed this.'"
    ))
}

fn desire(product: &str, _industry: &str, _audience: &str) -> String {
    with_footer(format!(
        "Create a Desire Video that tells the story of how {product} was created or how it solves the problem powerfully.\n\
\n\
Include:\n\
- Origin story or customer journey\n\
- Core benefits (3–5 clear ones)\n\
- Emotional turning point where the problem is solved\n\
\n\
Add music and visuals that show transformation (before → after).\n\
End with a strong emotional CTA inviting them to 'See how it works' or 'Join the movement.'"
    ))
}

fn action(product: &str, _industry: &str, _audience: &str) -> String {
    with_footer(format!(
        "Create a Sales/Conversion Video for {product}.\n\
\n\
Focus on:\n\
- Direct offer presentation (price, bonuses, guarantee)\n\
- Scarcity or urgency (limited time, special deal)\n\
- Testimonials or mini proof clips\n\
- Call to action (buy now, register, order, etc.)\n\
\n\
Include clear on-screen CTA animations and upbeat pacing.\n\
Script should sound confident and exciting, ending with a clear purchase direction."
    ))
}

fn follow_up(product: &str, _industry: &str, _audience: &str) -> String {
    with_footer(format!(
        "Create a Follow-Up/Nurture Video that rekindles interest in {product}.\n\
\n\
Focus on:\n\
- Reaffirming value and addressing objections\n\
- Showing new results, updates, or bonuses\n\
- Emotional appeal: 'Don't miss this chance'\n\
- CTA to return and take action now.\n\
\n\
Tone: Warm, friendly, and supportive — not pushy."
    ))
}

fn testimonial(product: &str, _industry: &str, _audience: &str) -> String {
    with_footer(format!(
        "Create a Testimonial/Proof Video that showcases real results and social proof for {product}.\n\
\n\
Include:\n\
- 2–3 short client stories (before → after)\n\
- Real metrics or quotes\n\
- Emphasis on emotions: relief, excitement, gratitude\n\
\n\
End with a confident CTA reinforcing trust:\n\
'Join hundreds who already achieved [benefit]. Get started today.'"
    ))
}

fn storyboard(product: &str, industry: &str, audience: &str) -> String {
    with_footer(format!(
        "Generate a storyboard combining all 6 funnel videos into a connected journey for {product} in the {industry} industry targeting {audience}.\n\
Include transitions between videos, emotional arcs, and recommended duration for each stage."
    ))
}

fn voice_tone(product: &str, industry: &str, audience: &str) -> String {
    with_footer(format!(
        "Suggest the best voice type and tone (e.g., motivational, friendly, confident, soothing) for each funnel video for {product} in the {industry} industry targeting {audience}."
    ))
}

fn visual_style(product: &str, industry: &str, _audience: &str) -> String {
    with_footer(format!(
        "Suggest animation or visual styles (e.g., cinematic, whiteboard, 2D motion graphics, realistic) suitable for each funnel stage for {product} in the {industry} industry."
    ))
}

fn optimization(product: &str, _industry: &str, _audience: &str) -> String {
    with_footer(format!(
        "List 5 ways to A/B test and optimize the sales funnel videos for {product} for higher conversion — including thumbnail design, opening hooks, CTA placement, and timing."
    ))
}

fn full_funnel(product: &str, _industry: &str, _audience: &str) -> String {
    with_footer(format!(
        "Now combine all funnel videos (Awareness → Proof) into a full funnel video campaign for {product}.\n\
Provide:\n\
- Chronological order\n\
- Titles and hooks for each video\n\
- Estimated duration\n\
- CTA for each step\n\
- Visual and sound theme consistency\n\
\n\
Goal: Create a seamless emotional journey that leads to confident purchase action."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_awareness_template_text() {
        let text = template_for(StageId::Awareness)("Acme", "Fitness", "Millennials");
        assert_eq!(
            text,
            r#"Create a powerful Awareness Funnel Video for Acme targeting Millennials.

The video should:
- Start with a shocking hook or relatable pain point
- Show empathy and understanding
- Tease a solution (but don't reveal it fully yet)
- Keep under 60 seconds

Example format:
- Hook (first 5 seconds): Identify the pain or frustration
- Middle: Show emotional consequences of not solving it
- End: Tease that a better solution exists (lead into next video)

Add visual and sound direction for emotional impact.

1, No explanations, no introductions, no additional text.
2, Always give your top 3 recommendations where necessary"#
        );
    }

    #[test]
    fn test_voice_tone_template_is_single_paragraph() {
        let text = template_for(StageId::VoiceTone)("Acme", "Fitness", "Millennials");
        assert_eq!(
            text,
            "Suggest the best voice type and tone (e.g., motivational, friendly, confident, soothing) \
for each funnel video for Acme in the Fitness industry targeting Millennials.\n\n\
1, No explanations, no introductions, no additional text.\n\
2, Always give your top 3 recommendations where necessary"
        );
    }

    #[test]
    fn test_storyboard_uses_all_three_values() {
        let text = template_for(StageId::Storyboard)("Acme", "Fitness", "Millennials");
        assert!(text.contains("for Acme in the Fitness industry targeting Millennials.\nInclude transitions"));
    }

    #[test]
    fn test_every_template_ends_with_footer() {
        for stage in StageId::ALL {
            let text = template_for(stage)("P", "I", "A");
            assert!(text.ends_with(INSTRUCTION_FOOTER), "{} is missing the footer", stage);
            assert!(!text.contains("  "), "{} has stray indentation", stage);
        }
    }
}
