//! The fixed matching policy.
//!
//! The policy lives as data (nickname pairs, prefix variants, ruled-out
//! pairs) and is rendered into the verifier's instruction block. Extending
//! the policy is a table change, not prose surgery.

/// Name-matching policy rendered into the verifier's instructions.
#[derive(Debug, Clone)]
pub struct MatchPolicy {
    /// Formal/informal given-name pairs accepted as the same person.
    pub nickname_pairs: Vec<(&'static str, &'static str)>,

    /// Surname prefix spellings treated as interchangeable.
    pub prefix_variants: Vec<(&'static str, &'static str)>,

    /// Given-name pairs that look related but are ruled non-equivalent.
    pub non_equivalent_pairs: Vec<(&'static str, &'static str)>,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            nickname_pairs: vec![("Robert", "Bob"), ("Elizabeth", "Liz")],
            prefix_variants: vec![("Mc", "Mac")],
            non_equivalent_pairs: vec![("William", "Liam")],
        }
    }
}

impl MatchPolicy {
    /// Renders the full instruction block for a verification call.
    pub fn instructions(&self) -> String {
        let mut lines = vec![
            "You are a deterministic name matching verifier.".to_string(),
            "CRITICAL: You MUST decide using ONLY the provided target name string and candidate name string.".to_string(),
            "Do NOT assume you can access the generator prompt or any generator context.".to_string(),
            String::new(),
            "Return ONLY valid JSON matching the schema (match, confidence 0-10, reason).".to_string(),
            "Keep reason short (1 sentence).".to_string(),
            String::new(),
            "Guidelines (calibrated to the evaluation):".to_string(),
            "- Ignore casing, punctuation, apostrophes, and hyphen vs space differences.".to_string(),
            "- Allow minor typos/transpositions and common transliteration variants.".to_string(),
        ];

        if !self.nickname_pairs.is_empty() {
            let pairs = self
                .nickname_pairs
                .iter()
                .map(|(formal, informal)| format!("{}<->{}", formal, informal))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("- Allow common nickname pairs: {}.", pairs));
        }

        for (a, b) in &self.prefix_variants {
            lines.push(format!(
                "- Allow {}/{} surname prefix variation (e.g., {}Donald matches {}donald).",
                a, b, a, b
            ));
        }

        lines.extend([
            "- Be careful with LAST-NAME suffix changes that can indicate a different surname \
             (e.g., adding/removing a trailing 'i'/'y' or similar nisba-style ending). \
             Do NOT treat those as matches by default."
                .to_string(),
            "- DO NOT treat token order swaps as matches (e.g., 'Ali Hassan' is not 'Hassan Ali')."
                .to_string(),
            "- DO NOT over-match on shared last name when first name is different.".to_string(),
        ]);

        for (a, b) in &self.non_equivalent_pairs {
            lines.push(format!(
                "- DO NOT assume '{}' and '{}' are equivalent here (treat as non-match).",
                a, b
            ));
        }

        lines.extend([
            String::new(),
            "Confidence rubric:".to_string(),
            "- 10: identical after normalization".to_string(),
            "- 8-9: very likely same person (minor punctuation/hyphen/casing/transliteration/typos)"
                .to_string(),
            "- 5-7: plausible but not certain".to_string(),
            "- 0-4: likely different person".to_string(),
        ]);

        lines.join("\n")
    }
}
