//! Pound-reading scale plus the kilogram adapter wrapped around it.

/// Conversion factor used by the adapter.
pub const POUNDS_TO_KG: f64 = 0.45;

/// Adaptee: reports weight in pounds only.
pub trait WeightMachine {
    fn weight_in_pounds(&self) -> f64;
}

/// Target interface: weight in kilograms.
pub trait WeightMachineAdapter {
    fn weight_in_kg(&self) -> f64;
}

/// A fixed scale reading, standing in for real hardware.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WarehouseScale {
    pounds: f64,
}

impl WarehouseScale {
    pub fn new(pounds: f64) -> Self {
        Self { pounds }
    }
}

impl WeightMachine for WarehouseScale {
    fn weight_in_pounds(&self) -> f64 {
        self.pounds
    }
}

/// Adapter: owns any pound-denominated machine and exposes kilograms.
#[derive(Debug, Copy, Clone)]
pub struct PoundsToKgAdapter<M> {
    machine: M,
}

impl<M: WeightMachine> PoundsToKgAdapter<M> {
    pub fn new(machine: M) -> Self {
        Self { machine }
    }
}

impl<M: WeightMachine> WeightMachineAdapter for PoundsToKgAdapter<M> {
    fn weight_in_kg(&self) -> f64 {
        self.machine.weight_in_pounds() * POUNDS_TO_KG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_pounds_to_kilograms() {
        let adapter = PoundsToKgAdapter::new(WarehouseScale::new(100.0));
        assert!((adapter.weight_in_kg() - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_pounds_is_zero_kilograms() {
        let adapter = PoundsToKgAdapter::new(WarehouseScale::new(0.0));
        assert_eq!(adapter.weight_in_kg(), 0.0);
    }

    #[test]
    fn adapter_reads_through_to_the_machine() {
        let scale = WarehouseScale::new(28.0);
        let adapter = PoundsToKgAdapter::new(scale);

        assert!((adapter.weight_in_kg() - 28.0 * POUNDS_TO_KG).abs() < f64::EPSILON);
    }
}
