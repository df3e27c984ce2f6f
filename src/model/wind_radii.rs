/// Compass quadrant of a wind-radii report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Quadrant {
    /// All quadrants in advisory order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
        Quadrant::NorthWest,
    ];

    /// Bearing in degrees where the quadrant's arc starts.
    #[must_use]
    pub fn start_bearing(self) -> i32 {
        match self {
            Quadrant::NorthEast => 0,
            Quadrant::SouthEast => 90,
            Quadrant::SouthWest => 180,
            Quadrant::NorthWest => 270,
        }
    }
}

/// Wind-speed threshold of a radii report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WindThreshold {
    /// Gale force.
    Kt34,
    /// Storm force.
    Kt50,
    /// Hurricane force.
    Kt64,
}

impl WindThreshold {
    /// All thresholds from the outermost (weakest) to the innermost.
    pub const ALL: [WindThreshold; 3] = [WindThreshold::Kt34, WindThreshold::Kt50, WindThreshold::Kt64];

    /// Threshold speed in knots.
    #[must_use]
    pub fn knots(self) -> u32 {
        match self {
            WindThreshold::Kt34 => 34,
            WindThreshold::Kt50 => 50,
            WindThreshold::Kt64 => 64,
        }
    }
}

/// Per-quadrant wind radii in nautical miles for one threshold.
///
/// A radius of `0` means the quadrant was not reported.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuadrantRadii {
    pub ne: f64,
    pub se: f64,
    pub sw: f64,
    pub nw: f64,
}

impl QuadrantRadii {
    /// Creates radii in NE, SE, SW, NW order.
    #[must_use]
    pub fn new(ne: f64, se: f64, sw: f64, nw: f64) -> Self {
        Self { ne, se, sw, nw }
    }

    /// Radius reported for `quadrant`.
    #[must_use]
    pub fn get(&self, quadrant: Quadrant) -> f64 {
        match quadrant {
            Quadrant::NorthEast => self.ne,
            Quadrant::SouthEast => self.se,
            Quadrant::SouthWest => self.sw,
            Quadrant::NorthWest => self.nw,
        }
    }

    /// Quadrants with a positive radius, in advisory order.
    pub fn reported(&self) -> impl Iterator<Item = (Quadrant, f64)> + '_ {
        Quadrant::ALL
            .into_iter()
            .map(move |q| (q, self.get(q)))
            .filter(|&(_, r)| r > 0.0)
    }

    /// Returns `true` if no quadrant is reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reported().next().is_none()
    }
}

/// A quadrant where an inner threshold reaches farther than an outer one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NestingViolation {
    pub quadrant: Quadrant,
    pub outer: WindThreshold,
    pub outer_nm: f64,
    pub inner: WindThreshold,
    pub inner_nm: f64,
}

/// Wind radii for the 34, 50 and 64 kt thresholds at the initial fix.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindRadii {
    pub kt34: QuadrantRadii,
    pub kt50: QuadrantRadii,
    pub kt64: QuadrantRadii,
}

impl WindRadii {
    /// Creates the radii set.
    #[must_use]
    pub fn new(kt34: QuadrantRadii, kt50: QuadrantRadii, kt64: QuadrantRadii) -> Self {
        Self { kt34, kt50, kt64 }
    }

    /// Radii for `threshold`.
    #[must_use]
    pub fn get(&self, threshold: WindThreshold) -> &QuadrantRadii {
        match threshold {
            WindThreshold::Kt34 => &self.kt34,
            WindThreshold::Kt50 => &self.kt50,
            WindThreshold::Kt64 => &self.kt64,
        }
    }

    /// Lists quadrants where a stronger threshold's reported radius exceeds a
    /// weaker threshold's reported radius.
    ///
    /// Unreported (zero) radii never take part in a comparison. The radii are
    /// not modified.
    #[must_use]
    pub fn nesting_violations(&self) -> Vec<NestingViolation> {
        let mut violations = Vec::new();
        for quadrant in Quadrant::ALL {
            for (i, &outer) in WindThreshold::ALL.iter().enumerate() {
                for &inner in &WindThreshold::ALL[i + 1..] {
                    let outer_nm = self.get(outer).get(quadrant);
                    let inner_nm = self.get(inner).get(quadrant);
                    if outer_nm > 0.0 && inner_nm > outer_nm {
                        violations.push(NestingViolation {
                            quadrant,
                            outer,
                            outer_nm,
                            inner,
                            inner_nm,
                        });
                    }
                }
            }
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reported_skips_zero() {
        let radii = QuadrantRadii::new(40.0, 0.0, 30.0, 0.0);
        let reported: Vec<_> = radii.reported().collect();
        assert_eq!(
            reported,
            vec![(Quadrant::NorthEast, 40.0), (Quadrant::SouthWest, 30.0)]
        );
        assert!(!radii.is_empty());
        assert!(QuadrantRadii::default().is_empty());
    }

    #[test]
    fn nested_radii_have_no_violations() {
        let radii = WindRadii::new(
            QuadrantRadii::new(120.0, 100.0, 80.0, 110.0),
            QuadrantRadii::new(60.0, 50.0, 40.0, 55.0),
            QuadrantRadii::new(25.0, 20.0, 0.0, 20.0),
        );
        assert!(radii.nesting_violations().is_empty());
    }

    #[test]
    fn reports_inverted_quadrant() {
        let radii = WindRadii::new(
            QuadrantRadii::new(50.0, 100.0, 80.0, 110.0),
            QuadrantRadii::new(60.0, 50.0, 40.0, 55.0),
            QuadrantRadii::default(),
        );
        let v = radii.nesting_violations();
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].quadrant, Quadrant::NorthEast);
        assert_eq!(v[0].outer, WindThreshold::Kt34);
        assert_eq!(v[0].inner, WindThreshold::Kt50);
    }

    #[test]
    fn unreported_outer_is_not_a_violation() {
        let radii = WindRadii::new(
            QuadrantRadii::default(),
            QuadrantRadii::new(60.0, 0.0, 0.0, 0.0),
            QuadrantRadii::default(),
        );
        assert!(radii.nesting_violations().is_empty());
    }

    #[test]
    fn quadrant_bearings() {
        let bearings: Vec<i32> = Quadrant::ALL.iter().map(|q| q.start_bearing()).collect();
        assert_eq!(bearings, vec![0, 90, 180, 270]);
        assert_eq!(WindThreshold::Kt50.knots(), 50);
    }
}
