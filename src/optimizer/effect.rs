//! Merge effect scoring.
//!
//! `Effect(i, j)` estimates how much merging two classes improves the
//! design: the change in data and functional cohesion, plus the coupling
//! between the two classes that the merge removes.
//!
//! ```text
//! cohesion_data  = ΣMAI / max((Mi+Mj)(Ai+Aj), 1) - MAIii / max(Mi·Ai, 1) - MAIjj / max(Mj·Aj, 1)
//! cohesion_func  = ΣMMI / max((Mi+Mj)² - 1, 1)  - MMIii / max(Mi² - 1, 1) - MMIjj / max(Mj² - 1, 1)
//! coupling       = MAIij / max(Mi·Aj, 1) + MAIji / max(Mj·Ai, 1)
//!                + MMIij / max(Mi(Mj - 1), 1) + MMIji / max(Mj(Mi - 1), 1)
//! ```
//!
//! The `max(·, 1)` floors keep empty or method-less classes from dividing
//! by zero. Products are evaluated in signed arithmetic, so `Mj - 1 = -1`
//! floors to 1 as well.

use crate::model::ClassId;

use super::interaction::InteractionTable;

/// Everything the effect formula reads about an ordered class pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PairMetrics {
    pub m_i: i64,
    pub m_j: i64,
    pub a_i: i64,
    pub a_j: i64,
    pub mai_ii: f64,
    pub mai_ij: f64,
    pub mai_ji: f64,
    pub mai_jj: f64,
    pub mmi_ii: f64,
    pub mmi_ij: f64,
    pub mmi_ji: f64,
    pub mmi_jj: f64,
}

/// The three components of a merge effect.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EffectBreakdown {
    pub cohesion_data: f64,
    pub cohesion_functional: f64,
    pub coupling: f64,
}

impl EffectBreakdown {
    pub fn total(&self) -> f64 {
        self.cohesion_data + self.cohesion_functional + self.coupling
    }
}

impl PairMetrics {
    pub fn from_table(table: &InteractionTable, i: ClassId, j: ClassId) -> Self {
        let first = table.profile(i);
        let second = table.profile(j);
        let ii = table.between(i, i);
        let ij = table.between(i, j);
        let ji = table.between(j, i);
        let jj = table.between(j, j);

        Self {
            m_i: first.methods,
            m_j: second.methods,
            a_i: first.attributes,
            a_j: second.attributes,
            mai_ii: f64::from(ii.data),
            mai_ij: f64::from(ij.data),
            mai_ji: f64::from(ji.data),
            mai_jj: f64::from(jj.data),
            mmi_ii: f64::from(ii.functional),
            mmi_ij: f64::from(ij.functional),
            mmi_ji: f64::from(ji.functional),
            mmi_jj: f64::from(jj.functional),
        }
    }

    pub fn breakdown(&self) -> EffectBreakdown {
        let m = self.m_i + self.m_j;
        let a = self.a_i + self.a_j;

        let cohesion_data = (self.mai_ii + self.mai_ij + self.mai_ji + self.mai_jj)
            / at_least_one(m * a)
            - self.mai_ii / at_least_one(self.m_i * self.a_i)
            - self.mai_jj / at_least_one(self.m_j * self.a_j);

        let cohesion_functional = (self.mmi_ii + self.mmi_ij + self.mmi_ji + self.mmi_jj)
            / combination_count(m)
            - self.mmi_ii / combination_count(self.m_i)
            - self.mmi_jj / combination_count(self.m_j);

        let coupling = self.mai_ij / at_least_one(self.m_i * self.a_j)
            + self.mai_ji / at_least_one(self.m_j * self.a_i)
            + self.mmi_ij / at_least_one(self.m_i * (self.m_j - 1))
            + self.mmi_ji / at_least_one(self.m_j * (self.m_i - 1));

        EffectBreakdown {
            cohesion_data,
            cohesion_functional,
            coupling,
        }
    }

    pub fn effect(&self) -> f64 {
        self.breakdown().total()
    }
}

/// Effect of merging classes `i` and `j` of the table's partition.
pub fn merge_effect(table: &InteractionTable, i: ClassId, j: ClassId) -> f64 {
    PairMetrics::from_table(table, i, j).effect()
}

#[inline]
fn at_least_one(value: i64) -> f64 {
    value.max(1) as f64
}

#[inline]
fn combination_count(methods: i64) -> f64 {
    at_least_one(methods * methods - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_and_its_attribute() {
        // {m} and {a}, m reads a
        let metrics = PairMetrics {
            m_i: 1,
            a_j: 1,
            mai_ij: 1.0,
            ..Default::default()
        };
        let breakdown = metrics.breakdown();

        assert_eq!(breakdown.cohesion_data, 1.0);
        assert_eq!(breakdown.cohesion_functional, 0.0);
        assert_eq!(breakdown.coupling, 1.0);
        assert_eq!(metrics.effect(), 2.0);
    }

    #[test]
    fn test_two_cohesive_classes_should_stay_apart() {
        // {m1, a1} and {m2, a2}, each method reads its own attribute
        let metrics = PairMetrics {
            m_i: 1,
            m_j: 1,
            a_i: 1,
            a_j: 1,
            mai_ii: 1.0,
            mai_jj: 1.0,
            ..Default::default()
        };
        assert_eq!(metrics.effect(), -1.5);
    }

    #[test]
    fn test_unrelated_classes_score_zero() {
        let metrics = PairMetrics {
            m_i: 1,
            m_j: 1,
            ..Default::default()
        };
        assert_eq!(metrics.effect(), 0.0);
    }

    #[test]
    fn test_method_call_between_singletons() {
        // {m1} calls {m2}: (Mi+Mj)^2 - 1 = 3, and Mi(Mj - 1) = 0 floors to 1
        let metrics = PairMetrics {
            m_i: 1,
            m_j: 1,
            mmi_ij: 1.0,
            ..Default::default()
        };
        let breakdown = metrics.breakdown();

        assert!((breakdown.cohesion_functional - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(breakdown.coupling, 1.0);
    }

    #[test]
    fn test_negative_factor_floors_to_one() {
        // Mj = 0 makes Mi(Mj - 1) negative
        let metrics = PairMetrics {
            m_i: 2,
            a_j: 1,
            mmi_ij: 1.0,
            ..Default::default()
        };
        assert_eq!(metrics.breakdown().coupling, 1.0);
    }

    #[test]
    fn test_attribute_only_classes_score_zero() {
        let metrics = PairMetrics {
            a_i: 3,
            a_j: 2,
            ..Default::default()
        };
        assert_eq!(metrics.effect(), 0.0);
    }
}
