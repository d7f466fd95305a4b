use std::fmt;

/// Breast laterality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum Laterality {
    Unknown,
    Left,
    Right,
}

impl Laterality {
    /// Returns whether this laterality is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, Laterality::Unknown)
    }

    /// Returns the opposite laterality
    pub fn opposite(&self) -> Self {
        match self {
            Laterality::Left => Laterality::Right,
            Laterality::Right => Laterality::Left,
            Laterality::Unknown => Laterality::Unknown,
        }
    }

    /// Returns the canonical label code ("R" / "L")
    pub fn code(&self) -> &'static str {
        match self {
            Laterality::Left => "L",
            Laterality::Right => "R",
            Laterality::Unknown => "",
        }
    }

    /// Parses laterality from an attribute value
    ///
    /// Accepts the standard DICOM codes plus spelled-out forms:
    /// - "R" / "RIGHT" -> Right
    /// - "L" / "LEFT" -> Left
    /// - Otherwise -> Unknown
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        let token = s.trim().to_uppercase();
        match token.as_str() {
            "R" | "RIGHT" => Laterality::Right,
            "L" | "LEFT" => Laterality::Left,
            _ => Laterality::Unknown,
        }
    }
}

impl fmt::Display for Laterality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Laterality::Unknown => write!(f, "unknown"),
            Laterality::Left => write!(f, "left"),
            Laterality::Right => write!(f, "right"),
        }
    }
}

/// View position enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum ViewPosition {
    Unknown,
    Cc,   // Cranio-caudal
    Mlo,  // Medio-lateral oblique
    Ml,   // Medio-lateral
    Lmo,  // Latero-medial oblique
    Lm,   // Latero-medial
    Xccl, // Cranio-caudal exaggerated laterally
    Xccm, // Cranio-caudal exaggerated medially
    At,   // Axillary tail
    Cv,   // Cleavage view
}

impl ViewPosition {
    /// Returns whether this view position is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, ViewPosition::Unknown)
    }

    /// Returns whether this is a standard view (CC or MLO)
    pub fn is_standard_view(&self) -> bool {
        matches!(self, ViewPosition::Cc | ViewPosition::Mlo)
    }

    /// Returns the canonical label code ("CC", "MLO", ...)
    pub fn code(&self) -> &'static str {
        match self {
            ViewPosition::Unknown => "",
            ViewPosition::Cc => "CC",
            ViewPosition::Mlo => "MLO",
            ViewPosition::Ml => "ML",
            ViewPosition::Lmo => "LMO",
            ViewPosition::Lm => "LM",
            ViewPosition::Xccl => "XCCL",
            ViewPosition::Xccm => "XCCM",
            ViewPosition::At => "AT",
            ViewPosition::Cv => "CV",
        }
    }

    /// Parses view position from an attribute value
    ///
    /// Matches the standard codes first, then descriptive names as they
    /// appear in view code sequences ("cranio-caudal", "medio-lateral
    /// oblique", ...). LMO and LM are checked before MLO and ML because
    /// the descriptive names overlap.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        let token = s.trim().to_lowercase();

        match token.as_str() {
            "cc" => return ViewPosition::Cc,
            "mlo" => return ViewPosition::Mlo,
            "ml" => return ViewPosition::Ml,
            "lmo" => return ViewPosition::Lmo,
            "lm" => return ViewPosition::Lm,
            "xccl" => return ViewPosition::Xccl,
            "xccm" => return ViewPosition::Xccm,
            "at" => return ViewPosition::At,
            "cv" => return ViewPosition::Cv,
            _ => {}
        }

        // Descriptive names; oblique variants before their plain forms
        match token.as_str() {
            "cranio-caudal" | "caudal-cranial" => return ViewPosition::Cc,
            "medio-lateral oblique" | "medial-lateral oblique" => return ViewPosition::Mlo,
            "latero-medial oblique" | "lateral-medial oblique" => return ViewPosition::Lmo,
            "medio-lateral" | "medial-lateral" => return ViewPosition::Ml,
            "latero-medial" | "lateral-medial" => return ViewPosition::Lm,
            _ => {}
        }

        if token.contains("exaggerated laterally") {
            ViewPosition::Xccl
        } else if token.contains("exaggerated medially") {
            ViewPosition::Xccm
        } else if token.contains("axillary tail") {
            ViewPosition::At
        } else if token.contains("cleavage") {
            ViewPosition::Cv
        } else {
            ViewPosition::Unknown
        }
    }
}

impl fmt::Display for ViewPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewPosition::Unknown => write!(f, "unknown"),
            _ => write!(f, "{}", self.code().to_lowercase()),
        }
    }
}

/// Photometric interpretation of the decoded samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotometricInterpretation {
    Unknown,
    Monochrome1,
    Monochrome2,
    PaletteColor,
    Rgb,
}

impl PhotometricInterpretation {
    /// Returns whether this is a monochrome interpretation
    pub fn is_monochrome(&self) -> bool {
        matches!(
            self,
            PhotometricInterpretation::Monochrome1 | PhotometricInterpretation::Monochrome2
        )
    }

    /// Returns whether the display convention is inverted (MONOCHROME1)
    pub fn is_inverted_convention(&self) -> bool {
        matches!(self, PhotometricInterpretation::Monochrome1)
    }

    /// Clear value for samples masked out of a polygon region
    ///
    /// MONOCHROME2 clears to 0 (black background); every other
    /// interpretation clears to -1, preserving the observed behavior of the
    /// editor this crate replaces.
    pub fn mask_clear_value(&self) -> i32 {
        match self {
            PhotometricInterpretation::Monochrome2 => 0,
            _ => -1,
        }
    }

    /// Parses photometric interpretation from an attribute value
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "MONOCHROME1" => PhotometricInterpretation::Monochrome1,
            "MONOCHROME2" => PhotometricInterpretation::Monochrome2,
            "PALETTE COLOR" => PhotometricInterpretation::PaletteColor,
            "RGB" => PhotometricInterpretation::Rgb,
            _ => PhotometricInterpretation::Unknown,
        }
    }
}

impl fmt::Display for PhotometricInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhotometricInterpretation::Unknown => "UNKNOWN",
            PhotometricInterpretation::Monochrome1 => "MONOCHROME1",
            PhotometricInterpretation::Monochrome2 => "MONOCHROME2",
            PhotometricInterpretation::PaletteColor => "PALETTE COLOR",
            PhotometricInterpretation::Rgb => "RGB",
        };
        write!(f, "{}", name)
    }
}
