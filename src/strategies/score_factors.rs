use std::fmt;

/// What the strategic bot knows about one candidate cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreFactors {
    /// Distance to the nearest food, if there is any food left.
    pub closest_food:     Option<f64>,
    /// Distance to the opponent's head, if it's alive and at least as long
    /// as us.
    pub threatening_head: Option<f64>,
}

impl ScoreFactors {
    const BASE: f64 = 1000.0;
    const DANGER_RADIUS: f64 = 4.0;
    const DANGER_WEIGHT: f64 = 800.0;
    const FOOD_WEIGHT: f64 = 500.0;

    #[must_use]
    pub fn calculate(&self) -> f64 {
        let mut score = Self::BASE;

        if let Some(distance) = self.closest_food {
            score += Self::FOOD_WEIGHT / (distance + 1.0);
        }

        if let Some(distance) = self.threatening_head {
            if distance < Self::DANGER_RADIUS {
                score -= Self::DANGER_WEIGHT / (distance + 1.0);
            }
        }

        score
    }
}

impl fmt::Display for ScoreFactors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1} (", self.calculate())?;
        match self.closest_food {
            Some(distance) => write!(f, "food {distance:.2} away")?,
            None => write!(f, "no food")?,
        }
        match self.threatening_head {
            Some(distance) => write!(f, ", threat {distance:.2} away)"),
            None => write!(f, ", no threat)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_raises_and_danger_lowers() {
        let calm = ScoreFactors {
            closest_food:     None,
            threatening_head: None,
        };
        assert!((calm.calculate() - 1000.0).abs() < 1e-9);

        let fed = ScoreFactors {
            closest_food: Some(1.0),
            ..calm
        };
        assert!((fed.calculate() - 1250.0).abs() < 1e-9);

        let threatened = ScoreFactors {
            threatening_head: Some(3.0),
            ..fed
        };
        assert!((threatened.calculate() - 1050.0).abs() < 1e-9);

        let far_threat = ScoreFactors {
            threatening_head: Some(4.0),
            ..fed
        };
        assert!((far_threat.calculate() - fed.calculate()).abs() < 1e-9);
    }
}
