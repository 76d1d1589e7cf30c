//! Wildfire risk classification.
//!
//! Two independent data paths produce a risk reading for a landmark-month:
//!
//! - [`classify_local_risk`] derives a heuristic purely from the fetched
//!   NDVI/NDMI raster rows, for when no dedicated risk source is
//!   reachable.
//! - [`RiskAssessment`] carries the server-computed score and level
//!   description; [`classify_server_risk`] turns the free-text level into
//!   a [`RiskLevel`].
//!
//! The two paths are not reconciled anywhere and may disagree; the
//! dashboard shows both.

use crate::raster::RasterStat;
use serde::{Deserialize, Serialize};

/// Categorical risk level shown as a colored badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Alert,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Alert => "alert",
            RiskLevel::Critical => "critical",
        }
    }
}

/// Server-computed risk for one landmark-month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub landmark_id: i64,
    pub year: i32,
    pub month: u32,
    /// Continuous score, conventionally in [0, 1].
    pub risk_score: f64,
    /// Free-text level from the server ("Low", "Alert", "Critical", ...).
    pub risk_level_description: String,
}

impl RiskAssessment {
    /// Categorical level, tolerantly parsed from the description with the
    /// score as fallback.
    pub fn level(&self) -> RiskLevel {
        classify_server_risk(&self.risk_level_description, self.risk_score)
    }
}

/// Result of the local NDVI/NDMI heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocalRisk {
    /// Normalized risk in percent, always in 0..=100.
    pub percentage: u32,
    pub is_safe: bool,
    pub diff_max_min: f64,
    pub diff_mean: f64,
}

/// Derive a risk reading from the NDVI and NDMI rows for one month.
///
/// Returns `None` unless both bands are present; the heuristic is
/// meaningless with only one. The spread `ndvi.max - ndmi.min` is mapped
/// from its nominal [-2, 2] range onto [0, 1] and clamped, so the
/// percentage holds even for wildly out-of-range inputs.
pub fn classify_local_risk(
    ndvi: Option<&RasterStat>,
    ndmi: Option<&RasterStat>,
) -> Option<LocalRisk> {
    let (ndvi, ndmi) = match (ndvi, ndmi) {
        (Some(v), Some(m)) => (v, m),
        _ => return None,
    };

    let diff_max_min = ndvi.val_max - ndmi.val_min;
    let diff_mean = ndvi.val_mean - ndmi.val_mean;

    let normalized = ((diff_max_min + 2.0) / 4.0).clamp(0.0, 1.0);
    let percentage = (normalized * 100.0).round() as u32;

    Some(LocalRisk {
        percentage,
        is_safe: diff_max_min < diff_mean,
        diff_max_min,
        diff_mean,
    })
}

/// Classify the server's free-text level description, falling back to the
/// score when no keyword matches.
///
/// The match order critical > alert > low is a deliberate tie-break: a
/// description containing several keywords resolves to the first match in
/// that order. The score thresholds mirror the server's own banding
/// (>= 0.7 critical, > 0.5 alert, else low).
pub fn classify_server_risk(level_description: &str, risk_score: f64) -> RiskLevel {
    let folded = level_description.to_lowercase();
    if folded.contains("critical") {
        RiskLevel::Critical
    } else if folded.contains("alert") {
        RiskLevel::Alert
    } else if folded.contains("low") {
        RiskLevel::Low
    } else if risk_score >= 0.7 {
        RiskLevel::Critical
    } else if risk_score > 0.5 {
        RiskLevel::Alert
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::IndexType;

    fn stat(index: IndexType, mean: f64, min: f64, max: f64) -> RasterStat {
        RasterStat {
            id: None,
            landmark_id: 5,
            index_type: index,
            year: 2024,
            month: 3,
            s3_path: None,
            val_mean: mean,
            val_min: min,
            val_max: max,
            val_stddev: 0.05,
            geom_json: None,
            geom: None,
        }
    }

    #[test]
    fn local_risk_requires_both_bands() {
        let ndvi = stat(IndexType::Ndvi, 0.6, 0.4, 0.8);
        assert!(classify_local_risk(None, None).is_none());
        assert!(classify_local_risk(Some(&ndvi), None).is_none());
        assert!(classify_local_risk(None, Some(&ndvi)).is_none());
    }

    #[test]
    fn local_risk_reference_scenario() {
        // NDVI {mean 0.6, min 0.4, max 0.8}, NDMI {mean 0.1, min -0.2, max 0.3}
        let ndvi = stat(IndexType::Ndvi, 0.6, 0.4, 0.8);
        let ndmi = stat(IndexType::Ndmi, 0.1, -0.2, 0.3);
        let risk = classify_local_risk(Some(&ndvi), Some(&ndmi)).unwrap();
        assert_eq!(risk.diff_max_min, 1.0);
        assert_eq!(risk.diff_mean, 0.5);
        assert_eq!(risk.percentage, 75);
        assert!(!risk.is_safe);
    }

    #[test]
    fn local_risk_clamps_extreme_inputs() {
        let ndvi = stat(IndexType::Ndvi, 0.0, 0.0, 100.0);
        let ndmi = stat(IndexType::Ndmi, 0.0, -100.0, 0.0);
        let risk = classify_local_risk(Some(&ndvi), Some(&ndmi)).unwrap();
        assert_eq!(risk.percentage, 100);

        let ndvi = stat(IndexType::Ndvi, 0.0, 0.0, -100.0);
        let ndmi = stat(IndexType::Ndmi, 0.0, 100.0, 0.0);
        let risk = classify_local_risk(Some(&ndvi), Some(&ndmi)).unwrap();
        assert_eq!(risk.percentage, 0);
    }

    #[test]
    fn local_risk_safe_when_spread_below_mean_diff() {
        let ndvi = stat(IndexType::Ndvi, 0.9, 0.5, 0.6);
        let ndmi = stat(IndexType::Ndmi, 0.1, 0.5, 0.6);
        let risk = classify_local_risk(Some(&ndvi), Some(&ndmi)).unwrap();
        // diff_max_min = 0.1, diff_mean = 0.8
        assert!(risk.is_safe);
    }

    #[test]
    fn server_risk_keyword_precedence() {
        assert_eq!(
            classify_server_risk("low alert critical", 0.0),
            RiskLevel::Critical
        );
        assert_eq!(classify_server_risk("low alert", 0.0), RiskLevel::Alert);
        assert_eq!(classify_server_risk("Low", 0.99), RiskLevel::Low);
        assert_eq!(classify_server_risk("CRITICAL", 0.0), RiskLevel::Critical);
    }

    #[test]
    fn server_risk_score_fallback() {
        assert_eq!(classify_server_risk("", 0.75), RiskLevel::Critical);
        assert_eq!(classify_server_risk("unknown", 0.7), RiskLevel::Critical);
        assert_eq!(classify_server_risk("", 0.55), RiskLevel::Alert);
        assert_eq!(classify_server_risk("", 0.5), RiskLevel::Low);
        assert_eq!(classify_server_risk("", 0.3), RiskLevel::Low);
    }

    #[test]
    fn assessment_level_uses_description_first() {
        let assessment = RiskAssessment {
            landmark_id: 5,
            year: 2024,
            month: 3,
            risk_score: 0.9,
            risk_level_description: "Low".to_string(),
        };
        assert_eq!(assessment.level(), RiskLevel::Low);
    }
}
