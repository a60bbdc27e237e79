// ph-core/src/units.rs

use uom::si::f64::{
    AmountOfSubstance as UomAmountOfSubstance, MolarConcentration as UomMolarConcentration,
    Ratio as UomRatio, Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Amount = UomAmountOfSubstance;
pub type Molarity = UomMolarConcentration;
pub type Ratio = UomRatio;
pub type Volume = UomVolume;

#[inline]
pub fn ml(v: f64) -> Volume {
    use uom::si::volume::milliliter;
    Volume::new::<milliliter>(v)
}

#[inline]
pub fn molar(v: f64) -> Molarity {
    use uom::si::molar_concentration::mole_per_liter;
    Molarity::new::<mole_per_liter>(v)
}

#[inline]
pub fn mol(v: f64) -> Amount {
    use uom::si::amount_of_substance::mole;
    Amount::new::<mole>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Volume in milliliters.
#[inline]
pub fn to_ml(v: Volume) -> f64 {
    use uom::si::volume::milliliter;
    v.get::<milliliter>()
}

/// Concentration in mol/L.
#[inline]
pub fn to_molar(c: Molarity) -> f64 {
    use uom::si::molar_concentration::mole_per_liter;
    c.get::<mole_per_liter>()
}

#[inline]
pub fn to_ratio(r: Ratio) -> f64 {
    use uom::si::ratio::ratio;
    r.get::<ratio>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _v = ml(10.0);
        let _c = molar(0.1);
        let _n = mol(1e-3);
        let _r = unitless(0.5);
    }

    #[test]
    fn molarity_times_volume_is_amount() {
        let n: Amount = molar(0.1) * ml(10.0);
        assert!((n.value - 1e-3).abs() < 1e-15);

        let back: Molarity = (n / ml(10.0)).into();
        assert!((to_molar(back) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn volume_ratio_is_dimensionless() {
        let r: Ratio = ml(0.36) / ml(10.36);
        assert!((to_ratio(r) - 0.36 / 10.36).abs() < 1e-12);
        assert!((to_ml(ml(10.036)) - 10.036).abs() < 1e-9);
    }
}
