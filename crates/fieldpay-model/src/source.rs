use std::fmt;

/// Canonical respondent-source key.
///
/// Raw `src` cells are free text typed by panel operators; this newtype is
/// the only way to turn one into a key, so every key in the system has been
/// through the same folding and synonym table. The empty key is the internal
/// (own-panel) bucket. Keys starting with `pp_` denote panel-provider
/// vendors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceKey(String);

/// Spelling variants observed in production sheets, folded to canonical keys.
/// Matched against the trimmed, lower-cased cell; first hit wins.
const SYNONYMS: &[(&[&str], &str)] = &[
    (&["referral", "referal"], "referral"),
    (&["zalo", "zalo group", "zalo-group", "zalo_group"], "zalogroup"),
    (
        &["pp pure spectrum", "pp-purespectrum", "pp_pure_spectrum"],
        "pp_purespectrum",
    ),
];

impl SourceKey {
    /// Canonicalize a raw `src` cell. Total: every input maps to some key.
    pub fn from_raw(raw: &str) -> Self {
        let folded = raw.trim().to_lowercase();
        for (variants, canonical) in SYNONYMS {
            if variants.contains(&folded.as_str()) {
                return Self((*canonical).to_string());
            }
        }
        Self(folded)
    }

    /// The internal (own-panel) bucket, keyed by the empty string.
    pub fn internal() -> Self {
        Self(String::new())
    }

    pub fn referral() -> Self {
        Self("referral".to_string())
    }

    pub fn zalogroup() -> Self {
        Self("zalogroup".to_string())
    }

    pub fn fulcrum() -> Self {
        Self("pp_fulcrum".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_internal(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_referral(&self) -> bool {
        self.0 == "referral"
    }

    /// Groups paid out through the combined top-up file.
    pub fn is_topup(&self) -> bool {
        matches!(self.0.as_str(), "" | "zalogroup" | "referral")
    }

    /// Groups whose complete incentive counts toward the evoucher total.
    pub fn is_evoucher(&self) -> bool {
        matches!(self.0.as_str(), "" | "zalogroup")
    }

    /// Panel-provider vendors carry a `pp_` prefix and may have a CPI rate.
    pub fn is_panel_vendor(&self) -> bool {
        self.0.starts_with("pp_")
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for SourceKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for SourceKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}
