use std::{cmp::Ordering, fmt, iter::Sum, marker::PhantomData, ops::Add};

pub trait DistanceUnit: Copy + Eq {
    const NAME: &'static str;
    const NANOMETERS_IN_UNIT: i64;
}

/// Road length kept as whole nanometers.
///
/// Edge lengths are summed along every reconstructed route, integers keep those
/// sums independent of the order of the legs.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Distance<T: DistanceUnit> {
    nm: i64,
    unit: PhantomData<T>,
}

macro_rules! distance_unit {
    ($unit:ident, $name:expr, $nanometers:expr) => {
        #[derive(Debug, Copy, Clone, Eq, PartialEq)]
        pub struct $unit;

        impl DistanceUnit for $unit {
            const NAME: &'static str = $name;
            const NANOMETERS_IN_UNIT: i64 = $nanometers;
        }
    };
}

distance_unit!(Meters, "meter", 1_000_000_000);
distance_unit!(Kilometers, "kilometer", 1_000_000_000_000);

impl<T: DistanceUnit> Distance<T> {
    fn from_nanometers(nm: i64) -> Self {
        Distance {
            nm,
            unit: PhantomData,
        }
    }

    pub fn zero() -> Self {
        Self::from_nanometers(0)
    }

    #[inline(always)]
    pub fn value(&self) -> f64 {
        self.nm as f64 / T::NANOMETERS_IN_UNIT as f64
    }

    pub fn to<U: DistanceUnit>(self) -> Distance<U> {
        Distance::from_nanometers(self.nm)
    }

    pub fn is_positive(&self) -> bool {
        self.nm > 0
    }
}

impl<T: DistanceUnit> From<f64> for Distance<T> {
    fn from(value: f64) -> Self {
        Self::from_nanometers((value * T::NANOMETERS_IN_UNIT as f64).round() as i64)
    }
}

impl<T: DistanceUnit> From<i64> for Distance<T> {
    fn from(value: i64) -> Self {
        Self::from_nanometers(value * T::NANOMETERS_IN_UNIT)
    }
}

impl<T: DistanceUnit> From<Distance<T>> for f64 {
    fn from(value: Distance<T>) -> Self {
        value.value()
    }
}

impl<T1: DistanceUnit, T2: DistanceUnit> PartialEq<Distance<T2>> for Distance<T1> {
    fn eq(&self, other: &Distance<T2>) -> bool {
        self.nm == other.nm
    }
}

impl<T1: DistanceUnit, T2: DistanceUnit> PartialOrd<Distance<T2>> for Distance<T1> {
    fn partial_cmp(&self, other: &Distance<T2>) -> Option<Ordering> {
        Some(self.nm.cmp(&other.nm))
    }
}

impl<T: DistanceUnit> Ord for Distance<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.nm.cmp(&other.nm)
    }
}

impl<T1: DistanceUnit, T2: DistanceUnit> Add<Distance<T2>> for Distance<T1> {
    type Output = Distance<T1>;

    fn add(self, other: Distance<T2>) -> Distance<T1> {
        Self::from_nanometers(self.nm + other.nm)
    }
}

impl<T: DistanceUnit> Sum for Distance<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Distance::zero(), |total, distance| total + distance)
    }
}

impl<T: DistanceUnit> fmt::Display for Distance<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = self.value();
        let plural = if value == 1.0 { "" } else { "s" };
        write!(f, "{} {}{}", value, T::NAME, plural)
    }
}

#[cfg(test)]
macro_rules! meters {
    ($num:expr) => {
        crate::distance::Distance::<crate::distance::Meters>::from($num)
    };
}

#[cfg(test)]
macro_rules! kilometers {
    ($num:expr) => {
        crate::distance::Distance::<crate::distance::Kilometers>::from($num)
    };
}

#[cfg(test)]
#[allow(unused_imports)]
pub(crate) use kilometers;
#[cfg(test)]
pub(crate) use meters;
