//! Encoder types and the filename suffix rules that identify them.
//!
//! A distorted file's encoder is encoded in its filename suffix. Rules are
//! checked in order and the first exact match wins, so compound suffixes such
//! as `.svt.ivf` must come before the bare `.ivf` fallback.

use std::fmt;

/// The tool that produced a distorted file.
///
/// Declaration order is the order groups appear in reports and charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EncoderType {
    ImageMagick,
    SvtAv1,
    Libaom,
    Rav1e,
    Libjpeg,
}

impl EncoderType {
    /// All encoder types in report order.
    pub const ALL: [EncoderType; 5] = [
        EncoderType::ImageMagick,
        EncoderType::SvtAv1,
        EncoderType::Libaom,
        EncoderType::Rav1e,
        EncoderType::Libjpeg,
    ];

    /// Human readable name used in legends and summaries.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            EncoderType::ImageMagick => "ImageMagick",
            EncoderType::SvtAv1 => "SVT-AV1",
            EncoderType::Libaom => "libaom",
            EncoderType::Rav1e => "rav1e",
            EncoderType::Libjpeg => "libjpeg",
        }
    }
}

impl fmt::Display for EncoderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Maps a filename suffix to the encoder that produces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: String,
    pub encoder: EncoderType,
}

impl SuffixRule {
    pub fn new(suffix: impl Into<String>, encoder: EncoderType) -> Self {
        Self {
            suffix: suffix.into(),
            encoder,
        }
    }

    /// Exact, case-sensitive suffix test.
    #[must_use]
    pub fn matches(&self, filename: &str) -> bool {
        filename.ends_with(&self.suffix)
    }
}

/// The default rule set, highest priority first.
///
/// Covers the compound naming scheme (`name.svt.ivf`, `name.jpg.jpg`, ...)
/// as well as the older single-suffix layout (`.jpg`, `.ivf`, `.webm`).
#[must_use]
pub fn default_suffix_rules() -> Vec<SuffixRule> {
    vec![
        SuffixRule::new(".aom.ivf", EncoderType::Libaom),
        SuffixRule::new(".svt.ivf", EncoderType::SvtAv1),
        SuffixRule::new(".rav.ivf", EncoderType::Rav1e),
        SuffixRule::new(".jpg.jpg", EncoderType::Libjpeg),
        SuffixRule::new(".jpg", EncoderType::ImageMagick),
        SuffixRule::new(".ivf", EncoderType::SvtAv1),
        SuffixRule::new(".webm", EncoderType::Libaom),
    ]
}

/// Returns the first rule whose suffix ends `filename`, if any.
#[must_use]
pub fn match_suffix<'a>(filename: &str, rules: &'a [SuffixRule]) -> Option<&'a SuffixRule> {
    rules.iter().find(|rule| rule.matches(filename))
}

/// Derives the reference filename for a distorted file.
///
/// The matched suffix is removed and `reference_extension` appended, so
/// `clip.svt.ivf` becomes `clip.y4m` and `clip.jpg` becomes `clip.y4m`.
#[must_use]
pub fn reference_name(filename: &str, rule: &SuffixRule, reference_extension: &str) -> String {
    let stem = filename.strip_suffix(rule.suffix.as_str()).unwrap_or(filename);
    format!("{stem}{reference_extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_suffixes_win_over_fallbacks() {
        let rules = default_suffix_rules();
        let cases = [
            ("a.svt.ivf", EncoderType::SvtAv1),
            ("b.aom.ivf", EncoderType::Libaom),
            ("c.rav.ivf", EncoderType::Rav1e),
            ("x.jpg.jpg", EncoderType::Libjpeg),
            ("x.jpg", EncoderType::ImageMagick),
            ("old.ivf", EncoderType::SvtAv1),
            ("old.webm", EncoderType::Libaom),
        ];
        for (name, expected) in cases {
            let rule = match_suffix(name, &rules).expect(name);
            assert_eq!(rule.encoder, expected, "{name}");
        }
    }

    #[test]
    fn test_unknown_suffixes_do_not_match() {
        let rules = default_suffix_rules();
        for name in ["c.txt", "time.csv", "graph.png", "x.JPG", "clip.ivf.bak", ""] {
            assert!(match_suffix(name, &rules).is_none(), "{name}");
        }
    }

    #[test]
    fn test_reference_name_strips_matched_suffix() {
        let rules = default_suffix_rules();
        let derive = |name: &str| {
            let rule = match_suffix(name, &rules).unwrap();
            reference_name(name, rule, ".y4m")
        };
        assert_eq!(derive("a.svt.ivf"), "a.y4m");
        assert_eq!(derive("x.jpg.jpg"), "x.y4m");
        assert_eq!(derive("kodim01.jpg"), "kodim01.y4m");
        assert_eq!(derive("clip.v2.webm"), "clip.v2.y4m");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(EncoderType::SvtAv1.to_string(), "SVT-AV1");
        assert_eq!(EncoderType::Libaom.to_string(), "libaom");
        assert_eq!(EncoderType::ImageMagick.display_name(), "ImageMagick");
    }
}
