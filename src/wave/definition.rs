//! Curve definitions and their validated, per-style sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::color::Rgb;
use super::error::WaveError;

/// Visual style of the wave.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CurveStyle {
    /// Layered attenuated curves sharing one phase (classic look)
    #[default]
    Ios,
    /// Colored bands driven by amplitude
    Ios9,
}

impl fmt::Display for CurveStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ios => write!(f, "ios"),
            Self::Ios9 => write!(f, "ios9"),
        }
    }
}

impl FromStr for CurveStyle {
    type Err = WaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" | "classic" => Ok(Self::Ios),
            "ios9" | "banded" => Ok(Self::Ios9),
            other => Err(WaveError::UnknownStyle(other.to_string())),
        }
    }
}

/// One layer of the classic style.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AttenuatedCurve {
    /// Divisor applied to the curve height. Must not be zero.
    pub attenuation: f64,
    pub line_width: f64,
    pub opacity: f64,
}

/// One band of the ios9 style.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BandedCurve {
    #[serde(default)]
    pub support_line: bool,
    pub color: String,
}

/// A caller-supplied curve definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CurveDefinition {
    Attenuated(AttenuatedCurve),
    Banded(BandedCurve),
}

/// A banded curve with its color already parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBand {
    pub support_line: bool,
    pub color: Rgb,
}

/// A validated, homogeneous, non-empty set of curves.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveSet {
    Attenuated(Vec<AttenuatedCurve>),
    Banded(Vec<ResolvedBand>),
}

impl CurveSet {
    /// Builds the curve set for `style`, from `definitions` when given or the style defaults.
    ///
    /// # Errors
    /// - If the definitions are empty or mix both kinds
    /// - If the definitions' kind does not match `style`
    /// - If an attenuation is zero, an opacity falls outside `[0, 1]` or a width is negative
    /// - If a band color cannot be parsed
    pub fn resolve(
        style: CurveStyle,
        definitions: Option<&[CurveDefinition]>,
    ) -> Result<Self, WaveError> {
        let definitions = match definitions {
            Some(defs) => defs.to_vec(),
            None => default_definitions(style),
        };

        if definitions.is_empty() {
            return Err(WaveError::EmptyCurveSet);
        }

        let attenuated = definitions
            .iter()
            .filter(|d| matches!(d, CurveDefinition::Attenuated(_)))
            .count();
        if attenuated != 0 && attenuated != definitions.len() {
            return Err(WaveError::MixedCurveKinds);
        }

        match (style, attenuated != 0) {
            (CurveStyle::Ios, true) => definitions
                .into_iter()
                .enumerate()
                .map(|(index, def)| match def {
                    CurveDefinition::Attenuated(curve) => validate_attenuated(index, curve),
                    CurveDefinition::Banded(_) => Err(WaveError::MixedCurveKinds),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(CurveSet::Attenuated),
            (CurveStyle::Ios9, false) => definitions
                .into_iter()
                .map(|def| match def {
                    CurveDefinition::Banded(band) => Ok(ResolvedBand {
                        support_line: band.support_line,
                        color: Rgb::parse(&band.color)?,
                    }),
                    CurveDefinition::Attenuated(_) => Err(WaveError::MixedCurveKinds),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(CurveSet::Banded),
            (style, _) => Err(WaveError::StyleMismatch(style)),
        }
    }

    /// Number of curves drawn per frame.
    pub fn len(&self) -> usize {
        match self {
            Self::Attenuated(curves) => curves.len(),
            Self::Banded(bands) => bands.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate_attenuated(index: usize, curve: AttenuatedCurve) -> Result<AttenuatedCurve, WaveError> {
    if curve.attenuation == 0.0 {
        return Err(WaveError::ZeroAttenuation { index });
    }
    if !curve.attenuation.is_finite() {
        return Err(WaveError::InvalidCurve {
            index,
            reason: format!("attenuation must be finite, got {}", curve.attenuation),
        });
    }
    if curve.line_width.is_nan() || curve.line_width < 0.0 {
        return Err(WaveError::InvalidCurve {
            index,
            reason: format!("line width must be >= 0, got {}", curve.line_width),
        });
    }
    if !(0.0..=1.0).contains(&curve.opacity) {
        return Err(WaveError::InvalidCurve {
            index,
            reason: format!("opacity must be within [0, 1], got {}", curve.opacity),
        });
    }
    Ok(curve)
}

/// Default definitions for a style.
pub fn default_definitions(style: CurveStyle) -> Vec<CurveDefinition> {
    match style {
        CurveStyle::Ios => classic_defaults()
            .into_iter()
            .map(CurveDefinition::Attenuated)
            .collect(),
        CurveStyle::Ios9 => banded_defaults()
            .into_iter()
            .map(CurveDefinition::Banded)
            .collect(),
    }
}

fn classic_defaults() -> Vec<AttenuatedCurve> {
    [(-2.0, 1.0, 0.1), (-6.0, 1.0, 0.2), (4.0, 1.0, 0.4), (2.0, 1.0, 0.6), (1.0, 1.5, 1.0)]
        .into_iter()
        .map(|(attenuation, line_width, opacity)| AttenuatedCurve {
            attenuation,
            line_width,
            opacity,
        })
        .collect()
}

/// The support line comes first and is not one of the three colored bands.
fn banded_defaults() -> Vec<BandedCurve> {
    let band = |support_line: bool, color: &str| BandedCurve {
        support_line,
        color: color.to_string(),
    };
    vec![
        band(true, "255, 255, 255"),
        band(false, "15, 82, 169"),
        band(false, "173, 57, 76"),
        band(false, "48, 220, 155"),
    ]
}
